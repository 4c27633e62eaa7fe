//! # Temperature Series Storage and Queries
//!
//! This module holds the central data structure of the crate: an append-only
//! series of temperature readings with descriptive-statistics queries and
//! value-filtering operations.
//!
//! ## Storage Strategy
//!
//! Readings live in a single exclusively-owned buffer with a logical length
//! tracked separately from allocated capacity. When an append would overflow
//! the current capacity, the buffer grows to `2 × (capacity + batch_size)` —
//! deliberately more than the minimum fit, so that appending stays amortized
//! O(1) over many calls. Capacity is never observable through the public API.
//!
//! ## Validation
//!
//! A reading below absolute zero (−273 °C) is physically impossible, so
//! `append` rejects the whole batch before touching the buffer: either every
//! value lands, or none do and the series is exactly as it was.
//!
//! ## Error Handling
//!
//! Two failure modes, both synchronous usage errors rather than transient
//! faults, propagate through the [`TempError`] enum:
//! - a candidate reading below absolute zero rejects the append, and
//! - every query on an empty series fails up front, never mid-computation.

use crate::SummaryStatistics;
use thiserror::Error;

/// Physical lower bound for a temperature reading: absolute zero in Celsius.
pub const MIN_VALID_TEMP: f64 = -273.0;

/// Starting capacity for a freshly constructed series.
///
/// Small but non-zero, so the first few appends exercise the doubling
/// growth path rather than a degenerate zero-capacity reallocation.
const INITIAL_CAPACITY: usize = 2;

/// Errors produced by series mutation and queries.
///
/// Both variants are immediate, synchronous failures with no retry
/// semantics; the caller decides whether they are fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TempError {
    /// A candidate reading was below absolute zero; the append was rejected
    /// as a whole and the series left unmodified.
    #[error("reading {0}\u{b0}C is below absolute zero ({MIN_VALID_TEMP}\u{b0}C)")]
    BelowAbsoluteZero(f64),

    /// A query was made against a series with no readings.
    #[error("temperature series is empty")]
    EmptySeries,
}

/// An append-only series of temperature readings in Celsius.
///
/// The series owns its buffer exclusively for its entire lifetime. It grows
/// only by appending; there is no removal, in-place mutation of existing
/// readings, or shrinking. Filtering operations hand back newly allocated,
/// independent vectors rather than views into the buffer.
///
/// Single-threaded by design: share it across threads only behind external
/// mutual exclusion, since growth reallocates the buffer.
///
/// # Example
/// ```
/// use temp_series_lib::series::TemperatureSeries;
///
/// let series = TemperatureSeries::from_readings(&[10.0, -5.0, 20.0]).unwrap();
/// assert_eq!(series.min().unwrap(), -5.0);
/// assert_eq!(series.max().unwrap(), 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct TemperatureSeries {
    /// Logical readings; `readings.len()` is the logical length, while
    /// `readings.capacity()` tracks the allocated extent.
    readings: Vec<f64>,
}

impl TemperatureSeries {
    /// Create an empty series at the small starting capacity.
    pub fn new() -> Self {
        Self {
            readings: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Create a series from an initial batch of readings.
    ///
    /// Equivalent to constructing an empty series and calling [`append`]
    /// once, including the validation pass: any reading below absolute zero
    /// fails the whole construction.
    ///
    /// [`append`]: TemperatureSeries::append
    pub fn from_readings(values: &[f64]) -> Result<Self, TempError> {
        let mut series = Self::new();
        series.append(values)?;
        Ok(series)
    }

    /// Number of readings currently in the series.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when the series holds no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The logical readings, in append order.
    pub fn readings(&self) -> &[f64] {
        &self.readings
    }

    /// Append a batch of readings, returning the new logical length.
    ///
    /// The whole batch is validated before any mutation: if any value is
    /// below [`MIN_VALID_TEMP`] the call fails with
    /// [`TempError::BelowAbsoluteZero`] and the series is left untouched.
    /// An empty batch is a valid no-op that still returns the length.
    ///
    /// When the batch does not fit, capacity grows to
    /// `2 × (old_capacity + batch_size)` — an at-least-double policy that
    /// keeps append amortized O(1).
    pub fn append(&mut self, values: &[f64]) -> Result<usize, TempError> {
        if let Some(&bad) = values.iter().find(|&&value| value < MIN_VALID_TEMP) {
            return Err(TempError::BelowAbsoluteZero(bad));
        }

        let capacity = self.readings.capacity();
        if self.readings.len() + values.len() > capacity {
            let target = 2 * (capacity + values.len());
            self.readings.reserve_exact(target - self.readings.len());
        }

        self.readings.extend_from_slice(values);
        Ok(self.readings.len())
    }

    /// Arithmetic mean of all readings.
    pub fn average(&self) -> Result<f64, TempError> {
        let readings = self.non_empty()?;
        Ok(readings.iter().sum::<f64>() / readings.len() as f64)
    }

    /// Population standard deviation of all readings.
    ///
    /// Computed against the current average with divisor = reading count
    /// (population variance, not the `n − 1` sample form).
    pub fn deviation(&self) -> Result<f64, TempError> {
        let readings = self.non_empty()?;
        let avg = self.average()?;
        let squared_sum: f64 = readings.iter().map(|value| (value - avg).powi(2)).sum();
        Ok((squared_sum / readings.len() as f64).sqrt())
    }

    /// Coldest reading in the series.
    ///
    /// Linear scan; no ordering is assumed.
    pub fn min(&self) -> Result<f64, TempError> {
        let readings = self.non_empty()?;
        Ok(readings.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Warmest reading in the series.
    pub fn max(&self) -> Result<f64, TempError> {
        let readings = self.non_empty()?;
        Ok(readings
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// The reading closest to zero, with the same tie-break as
    /// [`closest_to`](TemperatureSeries::closest_to).
    pub fn closest_to_zero(&self) -> Result<f64, TempError> {
        self.closest_to(0.0)
    }

    /// The reading with the minimal absolute difference to `target`.
    ///
    /// Readings are scanned in append order. On an exact tie in distance, a
    /// later reading displaces the current best only if its raw value is
    /// strictly positive — regardless of the sign of `target`. The first
    /// reading seeds the candidate unconditionally.
    pub fn closest_to(&self, target: f64) -> Result<f64, TempError> {
        let readings = self.non_empty()?;

        let mut best = readings[0];
        let mut best_diff = (readings[0] - target).abs();
        for &reading in &readings[1..] {
            let diff = (reading - target).abs();
            if diff < best_diff || (diff == best_diff && reading > 0.0) {
                best = reading;
                best_diff = diff;
            }
        }
        Ok(best)
    }

    /// Readings strictly below `threshold`, in original order.
    ///
    /// Readings equal to the threshold are excluded. Fails with
    /// [`TempError::EmptySeries`] when the *series* is empty — an empty
    /// result from a non-empty series is fine.
    pub fn below(&self, threshold: f64) -> Result<Vec<f64>, TempError> {
        let readings = self.non_empty()?;
        Ok(readings
            .iter()
            .copied()
            .filter(|&value| value < threshold)
            .collect())
    }

    /// Readings strictly above `threshold`, in original order.
    ///
    /// Same threshold and emptiness semantics as
    /// [`below`](TemperatureSeries::below).
    pub fn above(&self, threshold: f64) -> Result<Vec<f64>, TempError> {
        let readings = self.non_empty()?;
        Ok(readings
            .iter()
            .copied()
            .filter(|&value| value > threshold)
            .collect())
    }

    /// Snapshot of the four core aggregates at the moment of the call.
    ///
    /// The returned [`SummaryStatistics`] holds no reference back to the
    /// series; later appends do not affect it.
    pub fn summary(&self) -> Result<SummaryStatistics, TempError> {
        Ok(SummaryStatistics {
            average: self.average()?,
            deviation: self.deviation()?,
            min: self.min()?,
            max: self.max()?,
        })
    }

    /// Emptiness guard shared by every query: checked before any
    /// computation begins.
    fn non_empty(&self) -> Result<&[f64], TempError> {
        if self.readings.is_empty() {
            Err(TempError::EmptySeries)
        } else {
            Ok(&self.readings)
        }
    }
}

impl Default for TemperatureSeries {
    fn default() -> Self {
        Self::new()
    }
}
