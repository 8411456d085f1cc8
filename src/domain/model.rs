use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensions in centimeters, mass in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageMeasurement {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl PackageMeasurement {
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Self {
        Self {
            width,
            height,
            length,
            mass,
        }
    }

    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }
}

/// Field names in the order every validation phase walks them.
pub const MEASUREMENT_FIELDS: [(&str, fn(&PackageMeasurement) -> f64); 4] = [
    ("width", |m| m.width),
    ("height", |m| m.height),
    ("length", |m| m.length),
    ("mass", |m| m.mass),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageCategory {
    Standard,
    Special,
    Rejected,
}

impl PackageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageCategory::Standard => "STANDARD",
            PackageCategory::Special => "SPECIAL",
            PackageCategory::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(PackageCategory::Standard),
            "SPECIAL" => Ok(PackageCategory::Special),
            "REJECTED" => Ok(PackageCategory::Rejected),
            other => Err(format!("Unknown package category: {}", other)),
        }
    }
}

/// Category together with the two predicates that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub category: PackageCategory,
    pub heavy: bool,
    pub bulky: bool,
}
