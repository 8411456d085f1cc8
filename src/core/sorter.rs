use crate::domain::model::{Assessment, PackageCategory, PackageMeasurement};
use crate::utils::error::ValidationError;
use crate::utils::validation::{validate_package, Validate};
use serde_json::Value;

/// cm³
pub const VOLUME_THRESHOLD: f64 = 1_000_000.0;
/// cm
pub const DIMENSION_THRESHOLD: f64 = 150.0;
/// kg
pub const MASS_THRESHOLD: f64 = 20.0;

pub fn is_bulky(m: &PackageMeasurement) -> bool {
    let has_large_dimension = [m.width, m.height, m.length]
        .iter()
        .any(|&d| d >= DIMENSION_THRESHOLD);

    m.volume() >= VOLUME_THRESHOLD || has_large_dimension
}

pub fn is_heavy(m: &PackageMeasurement) -> bool {
    m.mass >= MASS_THRESHOLD
}

/// Classifies a record that has already passed validation.
pub fn assess(m: &PackageMeasurement) -> Assessment {
    let heavy = is_heavy(m);
    let bulky = is_bulky(m);

    let category = match (heavy, bulky) {
        (true, true) => PackageCategory::Rejected,
        (true, false) | (false, true) => PackageCategory::Special,
        (false, false) => PackageCategory::Standard,
    };

    tracing::trace!(heavy, bulky, %category, "package classified");

    Assessment {
        category,
        heavy,
        bulky,
    }
}

pub fn classify(m: &PackageMeasurement) -> PackageCategory {
    assess(m).category
}

/// Sorts a package into STANDARD, SPECIAL or REJECTED.
///
/// Rejected when both heavy and bulky, special when exactly one holds,
/// standard otherwise. Validation failures are returned untouched.
pub fn sort(
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
) -> Result<PackageCategory, ValidationError> {
    let package = PackageMeasurement::new(width, height, length, mass);
    package.validate()?;
    Ok(classify(&package))
}

/// Same as [`sort`], starting from a loosely-typed record.
pub fn sort_record(candidate: &Value) -> Result<PackageCategory, ValidationError> {
    let package = validate_package(candidate)?;
    Ok(classify(&package))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulky_by_volume_or_dimension() {
        assert!(is_bulky(&PackageMeasurement::new(100.0, 100.0, 100.0, 1.0)));
        assert!(!is_bulky(&PackageMeasurement::new(99.0, 100.0, 100.0, 1.0)));
        assert!(is_bulky(&PackageMeasurement::new(10.0, 10.0, 150.0, 1.0)));
        assert!(!is_bulky(&PackageMeasurement::new(149.9, 10.0, 10.0, 1.0)));
    }

    #[test]
    fn test_heavy_is_inclusive() {
        assert!(is_heavy(&PackageMeasurement::new(1.0, 1.0, 1.0, 20.0)));
        assert!(!is_heavy(&PackageMeasurement::new(1.0, 1.0, 1.0, 19.999)));
    }

    #[test]
    fn test_assess_reports_predicates() {
        let a = assess(&PackageMeasurement::new(150.0, 10.0, 10.0, 25.0));
        assert_eq!(
            a,
            Assessment {
                category: PackageCategory::Rejected,
                heavy: true,
                bulky: true,
            }
        );
    }

    #[test]
    fn test_sort_propagates_validation_error() {
        let err = sort(10.0, 0.0, 10.0, 5.0).unwrap_err();
        assert_eq!(err, ValidationError::new("Package height must be greater than zero"));
    }
}
