//! Assess command implementation.
//!
//! Runs one Wells-Riley calculation and renders the probability, the
//! secondary cases and the rate breakdown.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use wellsriley_core::prelude::*;

use crate::cli::OutputFormat;
use crate::output::{
    displayed_percent, format_percent, paint_band, print_header, KeyValue, OutputOptions,
};

/// Arguments for the assess command.
///
/// Defaults describe a 60 m³ classroom in winter with standard ventilation.
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Room length in meters
    #[arg(short = 'l', long, default_value_t = 5.0)]
    pub length: f64,

    /// Room width in meters
    #[arg(short = 'w', long, default_value_t = 4.0)]
    pub width: f64,

    /// Room height in meters
    #[arg(short = 'H', long, default_value_t = 3.0)]
    pub height: f64,

    /// Ventilation level: none, low, medium, high
    #[arg(long, default_value = "medium")]
    pub ventilation: String,

    /// Season: winter, summer
    #[arg(long, default_value = "winter")]
    pub season: String,

    /// Humidity level: dry, medium, high, very-high
    #[arg(long, default_value = "medium")]
    pub humidity: String,

    /// Exposure time in hours (at least 0.5)
    #[arg(short = 't', long, default_value_t = 2.0)]
    pub hours: f64,

    /// Total persons present, including the infector (at least 2)
    #[arg(short = 'n', long, default_value_t = 5, allow_negative_numbers = true)]
    pub persons: i64,
}

impl AssessArgs {
    fn to_request(&self) -> RiskRequest {
        RiskRequest {
            length: self.length,
            width: self.width,
            height: self.height,
            ventilation_level: self.ventilation.clone(),
            season: self.season.clone(),
            humidity_level: self.humidity.clone(),
            exposure_hours: self.hours,
            total_persons: self.persons,
        }
    }
}

/// Structured assessment for JSON output.
#[derive(Debug, Serialize)]
struct Assessment<'a> {
    room: &'a RoomDimensions,
    environment: &'a EnvironmentalSettings,
    occupancy: &'a Occupancy,
    result: &'a RiskResult,
    band: RiskBand,
}

/// Flat assessment row for CSV output.
#[derive(Debug, Serialize)]
struct AssessmentRow {
    length_m: f64,
    width_m: f64,
    height_m: f64,
    volume_m3: f64,
    ventilation: VentilationLevel,
    season: Season,
    humidity: HumidityLevel,
    exposure_hours: f64,
    total_persons: u32,
    air_changes_per_hour: f64,
    decay_rate: f64,
    quanta_emission_rate: f64,
    removal_rate: f64,
    exponent: f64,
    individual_probability_percent: f64,
    expected_secondary_infections: f64,
    secondary_cases: u32,
    band: RiskBand,
}

/// Execute the assess command.
pub fn execute(args: AssessArgs, options: OutputOptions) -> Result<()> {
    let inputs = args.to_request().validate()?;
    let ValidatedInputs {
        dimensions,
        environment,
        occupancy,
    } = inputs;
    let result = compute_risk(&dimensions, &environment, &occupancy)?;
    let band = result.band();
    tracing::debug!(
        probability = result.individual_probability_percent,
        secondary_cases = result.secondary_cases,
        %band,
        "assessment complete"
    );

    match options.format {
        OutputFormat::Table => print_table(&inputs, &result, options),
        OutputFormat::Json => {
            let assessment = Assessment {
                room: &dimensions,
                environment: &environment,
                occupancy: &occupancy,
                result: &result,
                band,
            };
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            Ok(())
        }
        OutputFormat::Csv => {
            let row = AssessmentRow {
                length_m: dimensions.length(),
                width_m: dimensions.width(),
                height_m: dimensions.height(),
                volume_m3: result.volume_m3,
                ventilation: environment.ventilation_level(),
                season: environment.season(),
                humidity: environment.humidity_level(),
                exposure_hours: environment.exposure_hours(),
                total_persons: occupancy.total_persons(),
                air_changes_per_hour: result.breakdown.air_changes_per_hour,
                decay_rate: result.breakdown.decay_rate,
                quanta_emission_rate: result.breakdown.quanta_emission_rate,
                removal_rate: result.removal_rate,
                exponent: result.exponent,
                individual_probability_percent: result.individual_probability_percent,
                expected_secondary_infections: result.expected_secondary_infections,
                secondary_cases: result.secondary_cases,
                band,
            };
            crate::output::print_csv(&[row])
        }
        OutputFormat::Minimal => {
            println!(
                "{:.prec$} {}",
                displayed_percent(result.individual_probability_percent, options.precision),
                result.secondary_cases,
                prec = options.precision
            );
            Ok(())
        }
    }
}

fn print_table(inputs: &ValidatedInputs, result: &RiskResult, options: OutputOptions) -> Result<()> {
    let prec = options.precision;
    let env = &inputs.environment;
    let susceptible = inputs.occupancy.susceptible_persons();

    let scenario = vec![
        KeyValue::new("Room", inputs.dimensions.to_string()),
        KeyValue::from_real("Volume", result.volume_m3, prec, "m³"),
        KeyValue::new("Ventilation", env.ventilation_level().to_string()),
        KeyValue::new("Season", env.season().to_string()),
        KeyValue::new("Humidity", env.humidity_level().to_string()),
        KeyValue::from_real("Exposure", env.exposure_hours(), prec, "h"),
        KeyValue::new("Persons", inputs.occupancy.total_persons().to_string()),
    ];

    let outcome = vec![
        KeyValue::from_percent("Individual Risk", result.individual_probability_percent, prec),
        KeyValue::new("Risk Band", result.band().to_string()),
        KeyValue::new(
            "Secondary Cases",
            format!("{} of {} exposed", result.secondary_cases, susceptible),
        ),
        KeyValue::from_real("Expected Infections", result.expected_secondary_infections, prec, ""),
    ];

    let breakdown = vec![
        KeyValue::new(
            "Air Changes (ACH)",
            format!("{} /h", result.breakdown.air_changes_per_hour),
        ),
        KeyValue::new(
            "Biological Decay",
            format!("{} /h (humidity {})", result.breakdown.decay_rate, env.humidity_level()),
        ),
        KeyValue::new(
            "Viral Emission (q)",
            format!("{} quanta/h (season {})", result.breakdown.quanta_emission_rate, env.season()),
        ),
        KeyValue::from_real("Removal Rate (k)", result.removal_rate, prec + 2, "/h"),
        KeyValue::from_real("Inhaled Quanta", result.exponent, prec + 2, ""),
    ];

    if !options.quiet {
        print_header("Scenario");
    }
    crate::output::print_output(&scenario, OutputFormat::Table)?;

    if !options.quiet {
        print_header("Risk");
    }
    crate::output::print_output(&outcome, OutputFormat::Table)?;

    if !options.quiet {
        print_header("Calculation Breakdown");
    }
    crate::output::print_output(&breakdown, OutputFormat::Table)?;

    let headline = format_percent(result.individual_probability_percent, prec);
    println!(
        "\n{} individual risk, {} probable new infections among the {} present",
        paint_band(&headline, result.band()),
        result.secondary_cases,
        susceptible
    );
    Ok(())
}
