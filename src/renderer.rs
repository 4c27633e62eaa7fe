//! # Terminal Rendering of Temperature Series
//!
//! This module renders a series of readings as an ASCII chart for quick
//! inspection in a terminal, followed by a one-line footer with the series'
//! summary statistics. It exists for the demo binary and development
//! workflows; the core series type knows nothing about presentation.

use crate::{SummaryStatistics, TempError, TemperatureSeries};

/// Chart height in character rows
const ROWS: usize = 16;

/// Space reserved on the left for Y-axis labels plus the axis line
const Y_AXIS_WIDTH: usize = 7;

/// Format a temperature for display with an explicit sign and just enough
/// precision.
fn format_temp(temp_c: f64) -> String {
    if temp_c == 0.0 {
        " 0".to_string()
    } else if temp_c > 0.0 {
        if temp_c.fract() == 0.0 {
            format!("+{:.0}", temp_c)
        } else {
            format!("+{:.1}", temp_c)
        }
    } else if temp_c.fract() == 0.0 {
        format!("{:.0}", temp_c)
    } else {
        format!("{:.1}", temp_c)
    }
}

/// Format the summary footer printed below the chart.
fn format_summary(summary: &SummaryStatistics) -> String {
    format!(
        "avg {:.1}\u{b0}C  dev {:.1}\u{b0}C  min {:.1}\u{b0}C  max {:.1}\u{b0}C",
        summary.average, summary.deviation, summary.min, summary.max
    )
}

/// Render a temperature series to ASCII terminal output.
///
/// One column per reading in append order, `\u{2022}` for ordinary readings
/// and `X` where a reading touches the series min or max. Fails with
/// [`TempError::EmptySeries`] when there is nothing to draw.
pub fn draw_ascii(series: &TemperatureSeries) -> Result<(), TempError> {
    let summary = series.summary()?;
    let readings = series.readings();
    let reading_count = readings.len();

    let range = summary.max - summary.min;
    let temp_to_row = |temp_c: f64| {
        if range == 0.0 {
            // A flat series still deserves a line, centered vertically.
            return ROWS / 2;
        }
        let normalized = (temp_c - summary.min) / range;
        ((1.0 - normalized) * (ROWS as f64 - 1.0)).round() as usize
    };

    let mut grid = vec![vec![' '; reading_count + Y_AXIS_WIDTH]; ROWS];

    // Y-axis labels at a step that suits the spread of the data
    let temp_step = if range > 8.0 {
        2.0
    } else if range > 4.0 {
        1.0
    } else {
        0.5
    };
    let mut current_label = (summary.min / temp_step).floor() * temp_step;

    while current_label <= summary.max {
        if current_label >= summary.min {
            let row = temp_to_row(current_label);
            let padded_label =
                format!("{:<width$}", format_temp(current_label), width = Y_AXIS_WIDTH - 1);

            for (i, ch) in padded_label.chars().enumerate() {
                if i < Y_AXIS_WIDTH - 1 {
                    grid[row][i] = ch;
                }
            }
            grid[row][Y_AXIS_WIDTH - 1] = '\u{2502}'; // Vertical axis line
        }
        current_label += temp_step;
    }

    // Plot readings, marking the extremes so they stand out
    for (column, &reading) in readings.iter().enumerate() {
        let row = temp_to_row(reading);
        let grid_column = column + Y_AXIS_WIDTH;

        if reading == summary.min || reading == summary.max {
            grid[row][grid_column] = 'X';
        } else {
            grid[row][grid_column] = '\u{2022}';
        }
    }

    for row in grid {
        println!("{}", row.into_iter().collect::<String>());
    }

    // Column markers below the chart, one tick every sixth reading
    let padding = " ".repeat(Y_AXIS_WIDTH);
    let ticks: String = (0..reading_count)
        .map(|i| if i % 6 == 0 { '|' } else { ' ' })
        .collect();
    println!("{}{}", padding, ticks);

    println!("{}{}", padding, format_summary(&summary));
    Ok(())
}
