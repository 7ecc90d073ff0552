//! fourier-params: sampling parameters for metasurface simulations
//!
//! This crate provides:
//! - Spatial coordinate grids (Cartesian or radially symmetric) built from
//!   pixel counts and pixel pitch
//! - Fourier bandwidth estimates from lens aperture, wavelength and sensor
//!   distance, using the Fresnel number to pick the sampling regime
//!
//! Grid coordinates are in meters. Optical parameters are in micrometers and
//! bandwidths come back in cycles per micrometer.

pub mod bandwidth;
pub mod error;
pub mod grid;
pub mod params;
pub mod report;
pub mod units;

pub use bandwidth::{estimate_bandwidth, fresnel_number, AxisBandwidth, Bandwidth, FresnelRegime};
pub use error::{Error, Result};
pub use grid::{coordinate_grid, coordinate_grid_with, AnyGrid, CoordinateGrid};
pub use params::{AxisPair, GridParameters, OpticalParameters, PixelNumber, Precision};
pub use units::{Axis, LengthUnit};

/// Parse a parameter document and estimate its bandwidth
pub fn estimate_bandwidth_from_json(json: &str) -> Result<Bandwidth> {
    let params: OpticalParameters = params::from_json(json)?;
    estimate_bandwidth(&params)
}

/// Parse grid parameters and build the grid at the requested precision
pub fn coordinate_grid_from_json(json: &str) -> Result<AnyGrid> {
    let params: GridParameters = params::from_json(json)?;
    coordinate_grid_with(&params)
}
