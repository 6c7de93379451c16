//! Config command implementation.
//!
//! Manages CLI presentation settings. Calibration data is fixed and is not
//! configurable here.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue, OutputOptions};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default output format
    DefaultFormat,
    /// Decimal places for real-valued output
    DecimalPrecision,
    /// Whether to color the risk indicator
    UseColors,
}

impl ConfigKey {
    fn parse(s: &str) -> CliResult<Self> {
        match s.to_lowercase().as_str() {
            "default_format" | "format" => Ok(Self::DefaultFormat),
            "decimal_precision" | "precision" => Ok(Self::DecimalPrecision),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(CliError::UnknownConfigKey(s.to_string())),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
            Self::UseColors => "use_colors",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for output (0-10)",
            Self::UseColors => "Color the risk indicator by band (true, false)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultFormat => "table",
            Self::DecimalPrecision => "2",
            Self::UseColors => "true",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::DefaultFormat, Self::DecimalPrecision, Self::UseColors]
    }

    /// Checks a raw value for this key.
    fn validate(&self, value: &str) -> CliResult<()> {
        let ok = match self {
            Self::DefaultFormat => OutputFormat::from_name(value).is_some(),
            Self::DecimalPrecision => parse_precision(value).is_some(),
            Self::UseColors => parse_bool(value).is_some(),
        };
        if ok {
            Ok(())
        } else {
            Err(CliError::InvalidConfigValue {
                key: self.as_str().to_string(),
                value: value.to_string(),
                expected: match self {
                    Self::DefaultFormat => "table, json, csv or minimal",
                    Self::DecimalPrecision => "a whole number between 0 and 10",
                    Self::UseColors => "true or false",
                },
            })
        }
    }
}

fn parse_precision(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|p| *p <= 10)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings file contents, keyed by [`ConfigKey`] names.
#[derive(Debug, Default)]
pub struct Config {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Config {
    /// Loads the settings file, or empty settings if it does not exist yet.
    pub fn load(path: PathBuf) -> CliResult<Self> {
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    fn save(&self) -> CliResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value for a key, falling back to its default.
    fn value(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or(key.default_value())
    }

    /// Configured output format. Unreadable stored values fall back to the default.
    pub fn default_format(&self) -> OutputFormat {
        OutputFormat::from_name(self.value(ConfigKey::DefaultFormat)).unwrap_or_default()
    }

    /// Configured decimal precision.
    pub fn decimal_precision(&self) -> usize {
        parse_precision(self.value(ConfigKey::DecimalPrecision)).unwrap_or(2)
    }

    /// Whether colored output is enabled.
    pub fn use_colors(&self) -> bool {
        parse_bool(self.value(ConfigKey::UseColors)).unwrap_or(true)
    }
}

/// Resolves the settings file path: explicit override, else the user config dir.
pub fn config_path(explicit: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("could not determine config directory".to_string()))?;
    Ok(base.join("wellsriley").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, mut config: Config, options: OutputOptions) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(&config, options),
        ConfigCommand::Get(get_args) => execute_get(&config, get_args, options),
        ConfigCommand::Set(set_args) => execute_set(&mut config, set_args),
        ConfigCommand::List => execute_list(options),
        ConfigCommand::Reset(reset_args) => execute_reset(&mut config, reset_args),
        ConfigCommand::Path => execute_path(&config),
    }
}

/// Show current configuration.
fn execute_show(config: &Config, options: OutputOptions) -> Result<()> {
    match options.format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), config.value(*key)))
                .collect();
            if options.format == OutputFormat::Table && !options.quiet {
                print_header("Current Configuration");
            }
            crate::output::print_output(&results, options.format)?;
        }
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.value(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), config.value(*key));
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(config: &Config, args: GetArgs, options: OutputOptions) -> Result<()> {
    let key = ConfigKey::parse(&args.key)?;
    let value = config.value(key);

    match options.format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(config: &mut Config, args: SetArgs) -> Result<()> {
    let key = ConfigKey::parse(&args.key)?;
    key.validate(&args.value)?;

    config
        .values
        .insert(key.as_str().to_string(), args.value.trim().to_lowercase());
    config.save()?;

    print_success(&format!("Set {} = {}", key.as_str(), args.value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(options: OutputOptions) -> Result<()> {
    match options.format {
        OutputFormat::Table => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if !options.quiet {
                print_header("Available Configuration Keys");
            }
            crate::output::print_output(&results, options.format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            println!("key,description,default");
            for key in ConfigKey::all() {
                println!("{},\"{}\",{}", key.as_str(), key.description(), key.default_value());
            }
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(config: &mut Config, args: ResetArgs) -> Result<()> {
    if args.all {
        config.values.clear();
        config.save()?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::parse(&key_str)?;
        config.values.remove(key.as_str());
        config.save()?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(config: &Config) -> Result<()> {
    print_info(&format!("Config file: {}", config.path().display()));
    if config.path().exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
