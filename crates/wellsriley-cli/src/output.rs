//! Output formatting utilities.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use wellsriley_core::RiskBand;

use crate::cli::OutputFormat;

/// Resolved presentation settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Decimal places for real-valued output.
    pub precision: usize,
    /// Suppress headers and status lines.
    pub quiet: bool,
}

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output: one line per row, field values separated by tabs.
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    write_minimal(std::io::stdout(), data)
}

fn write_minimal<W: std::io::Write, T: Serialize>(writer: W, data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Colors text by risk band: red for high, yellow for medium, green for low.
pub fn paint_band(text: &str, band: RiskBand) -> ColoredString {
    match band {
        RiskBand::High => text.red().bold(),
        RiskBand::Medium => text.yellow().bold(),
        RiskBand::Low => text.green().bold(),
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a real value with a unit suffix.
    pub fn from_real(key: impl Into<String>, value: f64, precision: usize, unit: &str) -> Self {
        let formatted = format!("{:.prec$}", value, prec = precision);
        Self {
            key: key.into(),
            value: if unit.is_empty() {
                formatted
            } else {
                format!("{} {}", formatted, unit)
            },
        }
    }

    /// Creates a key-value pair formatted as a percentage.
    pub fn from_percent(key: impl Into<String>, percent: f64, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format_percent(percent, precision),
        }
    }
}

/// Formats a value already expressed in percent.
///
/// A value below 100 that would round up to 100 at this precision is shown
/// as `>99.99%` (for precision 2), so a probability never reads as certain.
pub fn format_percent(percent: f64, precision: usize) -> String {
    if rounds_to_hundred(percent, precision) {
        format!(">{:.prec$}%", percent_ceiling(precision), prec = precision)
    } else {
        format!("{:.prec$}%", percent, prec = precision)
    }
}

/// The value to print for a percentage below 100 at this precision: the
/// value itself, or the largest printable value below 100 if it would
/// round up to 100.
pub fn displayed_percent(percent: f64, precision: usize) -> f64 {
    if rounds_to_hundred(percent, precision) {
        percent_ceiling(precision)
    } else {
        percent
    }
}

fn rounds_to_hundred(percent: f64, precision: usize) -> bool {
    percent < 100.0
        && format!("{:.prec$}", percent, prec = precision)
            .parse::<f64>()
            .is_ok_and(|shown| shown >= 100.0)
}

fn percent_ceiling(precision: usize) -> f64 {
    let digits = i32::try_from(precision).unwrap_or(i32::MAX);
    100.0 - 10f64.powi(-digits)
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
