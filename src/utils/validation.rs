use crate::domain::model::{PackageMeasurement, MEASUREMENT_FIELDS};
use crate::utils::error::{SorterError, ValidationError};
use serde_json::{Map, Value};

pub trait Validate {
    type Error;

    fn validate(&self) -> Result<(), Self::Error>;
}

/// Numeric phases: NaN, then finiteness, then range. Each phase walks every
/// field before the next phase starts, so the first failure is deterministic.
impl Validate for PackageMeasurement {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), ValidationError> {
        for (name, get) in MEASUREMENT_FIELDS {
            if get(self).is_nan() {
                return Err(ValidationError::new(format!("Package {} cannot be NaN", name)));
            }
        }

        for (name, get) in MEASUREMENT_FIELDS {
            if get(self).is_infinite() {
                return Err(ValidationError::new(format!(
                    "Package {} must be a finite number",
                    name
                )));
            }
        }

        for (name, get) in MEASUREMENT_FIELDS {
            if get(self) <= 0.0 {
                return Err(ValidationError::new(format!(
                    "Package {} must be greater than zero",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Parses a loosely-typed record into a checked `PackageMeasurement`.
///
/// Arrays count as records (with no properties), so they fail on the missing
/// `width` rather than on the object check.
pub fn validate_package(candidate: &Value) -> Result<PackageMeasurement, ValidationError> {
    let empty = Map::new();
    let record = match candidate {
        Value::Null => {
            return Err(ValidationError::new("Package cannot be null or undefined"));
        }
        Value::Object(map) => map,
        Value::Array(_) => &empty,
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            return Err(ValidationError::new("Package must be an object"));
        }
    };

    for (name, _) in MEASUREMENT_FIELDS {
        if !record.contains_key(name) {
            return Err(ValidationError::new(format!(
                "Package is missing required property: {}",
                name
            )));
        }
    }

    let mut values = [0.0_f64; 4];
    for (slot, (name, _)) in values.iter_mut().zip(MEASUREMENT_FIELDS) {
        *slot = record
            .get(name)
            .and_then(Value::as_f64)
            .ok_or_else(|| ValidationError::new(format!("Package {} must be a number", name)))?;
    }

    let [width, height, length, mass] = values;
    let measurement = PackageMeasurement::new(width, height, length, mass);
    measurement.validate()?;
    Ok(measurement)
}

/// Config-side helpers, reporting through the crate error.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> crate::utils::error::Result<()> {
    if value.trim().is_empty() {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(
    field_name: &str,
    value: &str,
    allowed: &[&str],
) -> crate::utils::error::Result<()> {
    if !allowed.contains(&value) {
        return Err(SorterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
