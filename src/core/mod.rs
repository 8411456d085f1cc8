pub mod sorter;

pub use crate::domain::model::{Assessment, PackageCategory, PackageMeasurement};
pub use crate::utils::error::{Result, ValidationError};
