//! # Temp Tracker Application Entry Point
//!
//! This binary crate is a thin shell over the series library: it generates a
//! synthetic day of temperature readings, loads them into a series, and
//! renders either an ASCII chart (default) or a JSON summary (`--json`).

// Test modules
#[cfg(test)]
mod tests;

use std::env;
use temp_series_lib::{demo, renderer::draw_ascii, TemperatureSeries};

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Machine-readable mode: dump the summary snapshot as JSON
    let json_mode = env::args().any(|arg| arg == "--json");

    // A day of synthetic readings phased off the wall clock; the generator
    // never produces values below absolute zero, so loading cannot fail on
    // validation, but any error still surfaces cleanly.
    let readings = demo::diurnal_trace(None);
    let series = TemperatureSeries::from_readings(&readings)?;

    if json_mode {
        let summary = series.summary()?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    draw_ascii(&series)?;
    Ok(())
}
