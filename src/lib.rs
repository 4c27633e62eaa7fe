//! # Temp Tracker Core Library
//!
//! This library provides an in-memory container for temperature readings with
//! descriptive-statistics queries and value filtering. It is deliberately
//! small: one series type, one snapshot value object, and a terminal renderer
//! for quick inspection of a day's readings.
//!
//! ## Design Philosophy
//!
//! ### One buffer, one length
//! All operations read or write a single exclusively-owned buffer of `f64`
//! readings plus its logical length. The buffer over-allocates on growth
//! (at-least-double) so that appending stays amortized O(1), but capacity is
//! never observable through the API.
//!
//! ### Numeric consistency
//! The aggregates are defined against each other: standard deviation is the
//! population form computed from the same average that [`average`] returns,
//! and min/max cover exactly the logical extent of the buffer. A
//! [`SummaryStatistics`] snapshot bundles all four, detached from the series
//! that produced it.
//!
//! ### Fail-fast usage errors
//! Readings below absolute zero reject the whole append batch before any
//! mutation, and every query on an empty series fails up front. Both cases
//! surface as [`series::TempError`] variants rather than panics.
//!
//! ## Core Types
//!
//! - [`series::TemperatureSeries`]: the append-only series of readings
//! - [`SummaryStatistics`]: an immutable aggregate snapshot
//!
//! [`average`]: series::TemperatureSeries::average

use serde::{Deserialize, Serialize};

// Module declarations
pub mod demo;
pub mod renderer;
pub mod series;

pub use series::{TempError, TemperatureSeries, MIN_VALID_TEMP};

/// An immutable snapshot of the four core aggregates of a series.
///
/// Computed at the moment [`TemperatureSeries::summary`] is called and fully
/// detached from the series: later appends do not change a snapshot already
/// handed out. Serializable so callers can log or export it directly.
///
/// All fields are in degrees Celsius (deviation is a spread, not an absolute
/// temperature, but shares the unit).
///
/// # Example
/// ```
/// use temp_series_lib::TemperatureSeries;
///
/// let series = TemperatureSeries::from_readings(&[10.0, -5.0, 20.0]).unwrap();
/// let summary = series.summary().unwrap();
///
/// assert_eq!(summary.min, -5.0);
/// assert_eq!(summary.max, 20.0);
/// assert!((summary.average - 25.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean of the readings
    pub average: f64,
    /// Population standard deviation of the readings
    pub deviation: f64,
    /// Coldest reading
    pub min: f64,
    /// Warmest reading
    pub max: f64,
}
