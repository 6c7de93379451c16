//! Tables command implementation.
//!
//! Prints the fixed calibration data used by every calculation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use wellsriley_core::calibration::table_rows;

use crate::cli::OutputFormat;
use crate::output::{print_header, OutputOptions};

#[derive(Debug, Serialize, Tabled)]
struct CalibrationRow {
    #[tabled(rename = "Table")]
    category: &'static str,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: f64,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

/// Execute the tables command.
pub fn execute(options: OutputOptions) -> Result<()> {
    let rows: Vec<CalibrationRow> = table_rows()
        .into_iter()
        .map(|entry| CalibrationRow {
            category: entry.category,
            key: entry.key,
            value: entry.value,
            unit: entry.unit,
        })
        .collect();

    match options.format {
        OutputFormat::Table => {
            if !options.quiet {
                print_header("Calibration Tables");
            }
            crate::output::print_output(&rows, options.format)
        }
        OutputFormat::Json | OutputFormat::Csv | OutputFormat::Minimal => {
            crate::output::print_output(&rows, options.format)
        }
    }
}
