//! Parameter types matching the simulation pipeline's parameter documents
//!
//! The pipeline hands around one large parameter dictionary. Only the keys
//! used here are modelled; anything else in the document is ignored.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::units::Axis;

/// A value per Cartesian axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Same value on both axes
    pub fn splat(v: T) -> Self
    where
        T: Copy,
    {
        Self { x: v, y: v }
    }
}

/// Number of samples along each axis
///
/// `r` is read in radially symmetric mode, `x` and `y` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelNumber {
    #[serde(default)]
    pub x: Option<usize>,
    #[serde(default)]
    pub y: Option<usize>,
    #[serde(default)]
    pub r: Option<usize>,
}

impl PixelNumber {
    pub fn cartesian(x: usize, y: usize) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            r: None,
        }
    }

    pub fn radial(r: usize) -> Self {
        Self {
            x: None,
            y: None,
            r: Some(r),
        }
    }

    /// Required, non-zero count along `axis`
    pub fn count(&self, axis: Axis) -> Result<usize> {
        let n = match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::R => self.r,
        };
        match n {
            None => Err(Error::MissingPixelCount(axis)),
            Some(0) => Err(Error::EmptyAxis(axis)),
            Some(n) => Ok(n),
        }
    }
}

/// Storage precision of generated grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    F32,
    #[default]
    F64,
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::F32 => f.write_str("f32"),
            Precision::F64 => f.write_str("f64"),
        }
    }
}

/// Inputs of the coordinate grid builder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridParameters {
    pub pixel_number: PixelNumber,
    /// Sample pitch in meters
    pub pixel_size_m: AxisPair<f64>,
    #[serde(default)]
    pub radial_symmetry: bool,
    #[serde(default)]
    pub precision: Precision,
}

/// Physical lens and sensor parameters, all lengths in micrometers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpticalParameters {
    pub wavelength_um: f64,
    pub sensor_distance_um: f64,
    /// Metasurface aperture extent per axis
    pub ms_length_um: AxisPair<f64>,
}

impl OpticalParameters {
    /// Reject parameters that would divide by zero or flip the sign of a bandwidth
    pub fn validate(&self) -> Result<()> {
        positive("wavelength_um", self.wavelength_um)?;
        positive("sensor_distance_um", self.sensor_distance_um)?;
        positive("ms_length_um.x", self.ms_length_um.x)?;
        positive("ms_length_um.y", self.ms_length_um.y)?;
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::NonPositive { name, value })
    }
}

/// Parse a parameter document from JSON
pub fn from_json<P: DeserializeOwned>(json: &str) -> Result<P> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON parameter file
pub fn load<P: DeserializeOwned>(path: impl AsRef<Path>) -> Result<P> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&json)
}
