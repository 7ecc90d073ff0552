//! Length units and named grid axes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    /// Radial axis, only used when the field is rotationally symmetric
    R,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::R => "r",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "mm")]
    Millimeter,
    #[default]
    #[serde(rename = "um")]
    Micrometer,
    #[serde(rename = "nm")]
    Nanometer,
}

impl LengthUnit {
    /// Convert from this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Meter => value,
            LengthUnit::Millimeter => value * 1e-3,
            LengthUnit::Micrometer => value * 1e-6,
            LengthUnit::Nanometer => value * 1e-9,
        }
    }

    /// Convert from meters to this unit
    pub fn from_meters(&self, value: f64) -> f64 {
        match self {
            LengthUnit::Meter => value,
            LengthUnit::Millimeter => value * 1e3,
            LengthUnit::Micrometer => value * 1e6,
            LengthUnit::Nanometer => value * 1e9,
        }
    }

    /// Get scale factor to convert from one unit to another
    pub fn scale_to(&self, target: &LengthUnit) -> f64 {
        target.from_meters(self.to_meters(1.0))
    }

    /// Short symbol used in reports
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Micrometer => "µm",
            LengthUnit::Nanometer => "nm",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "meter" | "meters" => Ok(LengthUnit::Meter),
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeter),
            "um" | "µm" | "micrometer" | "micrometers" => Ok(LengthUnit::Micrometer),
            "nm" | "nanometer" | "nanometers" => Ok(LengthUnit::Nanometer),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}
