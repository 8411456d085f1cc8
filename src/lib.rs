pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat, PackageInput};
pub use config::SorterConfig;

pub use crate::core::sorter::{
    assess, classify, is_bulky, is_heavy, sort, sort_record, DIMENSION_THRESHOLD, MASS_THRESHOLD,
    VOLUME_THRESHOLD,
};
pub use domain::model::{Assessment, PackageCategory, PackageMeasurement};
pub use utils::error::{Result, SorterError, ValidationError};
pub use utils::validation::{validate_package, Validate};
