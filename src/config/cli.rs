use crate::domain::model::PackageMeasurement;
use crate::utils::error::{Result, SorterError};
use clap::{Parser, ValueEnum};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "package-sorter")]
#[command(about = "Sort a package into STANDARD, SPECIAL or REJECTED")]
pub struct CliConfig {
    /// Width in cm
    #[arg(allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Height in cm
    #[arg(allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Length in cm
    #[arg(allow_negative_numbers = true)]
    pub length: Option<f64>,

    /// Mass in kg
    #[arg(allow_negative_numbers = true)]
    pub mass: Option<f64>,

    /// JSON record instead of positional measurements
    #[arg(long, conflicts_with_all = ["width", "height", "length", "mass"])]
    pub record: Option<String>,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the CLI was asked to sort.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageInput {
    Measurements(PackageMeasurement),
    Record(Value),
}

impl CliConfig {
    pub fn package_input(&self) -> Result<PackageInput> {
        if let Some(raw) = &self.record {
            let value: Value = serde_json::from_str(raw)?;
            return Ok(PackageInput::Record(value));
        }

        match (self.width, self.height, self.length, self.mass) {
            (Some(width), Some(height), Some(length), Some(mass)) => Ok(
                PackageInput::Measurements(PackageMeasurement::new(width, height, length, mass)),
            ),
            _ => Err(SorterError::ConfigError {
                message: "expected WIDTH HEIGHT LENGTH MASS or --record <JSON>".to_string(),
            }),
        }
    }
}
