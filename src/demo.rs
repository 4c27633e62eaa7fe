//! # Synthetic Diurnal Temperature Trace
//!
//! This module generates a plausible day of outdoor air temperatures for use
//! by the demo binary and as realistic test input. It is a purely
//! mathematical model, phased off the real-time clock so consecutive runs
//! show the curve advancing:
//!
//! - The 24-hour window is centered on the *current* time
//! - A 24 h harmonic carries the main day/night swing, lagged behind solar
//!   noon because air warms slower than the sun climbs
//! - A weak 12 h harmonic adds the mid-morning/early-evening ripple seen in
//!   real surface records
//!
//! ## Model Characteristics
//!
//! - **Period**: 24 hours (diurnal) plus a 12-hour secondary constituent
//! - **Mean level**: 12 °C, a temperate-latitude annual average
//! - **Swing**: ±7.5 °C diurnal, ±1.2 °C semidiurnal
//!
//! The model trades accuracy for simplicity: no weather fronts, no seasonal
//! drift, no site calibration. Every generated reading stays far above
//! absolute zero, so feeding the trace into a series never trips validation.

use chrono::{DateTime, Utc};

/// Mean temperature the curve oscillates around, in Celsius
const MEAN_TEMP_C: f64 = 12.0;

/// Diurnal (24 h) constituent amplitude, in Celsius
const A_DIURNAL: f64 = 7.5;
const P_DIURNAL_HRS: f64 = 24.0;

/// Semidiurnal (12 h) constituent amplitude, in Celsius
const A_SEMIDIURNAL: f64 = 1.2;
const P_SEMIDIURNAL_HRS: f64 = 12.0;

/// Air temperature peaks roughly three hours after solar noon
const THERMAL_LAG_HRS: f64 = 3.0;

/// Number of readings: ±12 h from now at 10-minute steps
const READING_COUNT: usize = 145;

/// Generate a synthetic 24 h temperature trace centered on `now`.
/// If `now` is `None`, fall back to `Utc::now()`.
///
/// Returns 145 readings in chronological order, 10 minutes
/// apart, with the middle reading representing the current instant.
pub fn diurnal_trace(now: Option<DateTime<Utc>>) -> Vec<f64> {
    let now = now.unwrap_or_else(Utc::now);
    let tau = std::f64::consts::TAU;

    // Real-time phase of each constituent, lagged so the daily peak lands
    // mid-afternoon rather than at solar noon.
    let lag_secs = (THERMAL_LAG_HRS * 3600.0) as i64;
    let daily_phase = ((now.timestamp() - lag_secs)
        .rem_euclid((P_DIURNAL_HRS * 3600.0) as i64) as f64)
        / (P_DIURNAL_HRS * 3600.0)
        * tau;

    let mut readings = Vec::with_capacity(READING_COUNT);
    for m in (-720i32..=720).step_by(10) {
        let hours = f64::from(m) / 60.0;
        let theta_diurnal = daily_phase + hours * tau / P_DIURNAL_HRS;
        let theta_semidiurnal = 2.0 * daily_phase + hours * tau / P_SEMIDIURNAL_HRS;
        // -cos puts the trough at the start of the cycle (coldest before dawn)
        let temp_c = MEAN_TEMP_C - A_DIURNAL * theta_diurnal.cos()
            - A_SEMIDIURNAL * theta_semidiurnal.cos();
        readings.push(temp_c);
    }

    readings
}
