//! Fourier bandwidth estimate from the Fresnel number of the lens aperture
//!
//! The Fresnel number `Nf = (L / 2)^2 / (λ z)` of an aperture of extent `L`
//! at wavelength `λ` imaged at distance `z` selects the sampling bound:
//! - `Nf < 0.25`: the aperture itself sets the bandwidth, `1 / L`
//!   (Whittaker-Shannon bound on the lens)
//! - `Nf >= 0.25`: the propagation geometry sets it, `L / (λ z)`
//!
//! The two expressions agree at the threshold, so the estimate is continuous
//! in `L`. All lengths are micrometers and bandwidths are cycles per micrometer.

use serde::Serialize;

use crate::error::Result;
use crate::params::OpticalParameters;
use crate::units::Axis;

/// Fresnel number separating the two regimes
pub const FRESNEL_THRESHOLD: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FresnelRegime {
    /// `Nf < 0.25`, bandwidth falls as the aperture grows
    ApertureLimited,
    /// `Nf >= 0.25`, bandwidth grows with the aperture
    DiffractionLimited,
}

impl FresnelRegime {
    pub fn classify(fresnel_number: f64) -> Self {
        if fresnel_number < FRESNEL_THRESHOLD {
            FresnelRegime::ApertureLimited
        } else {
            FresnelRegime::DiffractionLimited
        }
    }
}

pub fn fresnel_number(aperture_um: f64, wavelength_um: f64, distance_um: f64) -> f64 {
    (aperture_um / 2.0).powi(2) / wavelength_um / distance_um
}

/// Estimate along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBandwidth {
    pub fresnel_number: f64,
    pub regime: FresnelRegime,
    /// Cycles per micrometer
    pub bandwidth: f64,
}

pub fn estimate_axis_bandwidth(aperture_um: f64, wavelength_um: f64, distance_um: f64) -> AxisBandwidth {
    let fresnel_number = fresnel_number(aperture_um, wavelength_um, distance_um);
    let regime = FresnelRegime::classify(fresnel_number);
    let bandwidth = match regime {
        FresnelRegime::ApertureLimited => 1.0 / aperture_um,
        FresnelRegime::DiffractionLimited => aperture_um / wavelength_um / distance_um,
    };

    AxisBandwidth {
        fresnel_number,
        regime,
        bandwidth,
    }
}

/// Per-axis bandwidth estimate, x then y
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bandwidth {
    pub x: AxisBandwidth,
    pub y: AxisBandwidth,
}

impl Bandwidth {
    /// `(bandwidth_x, bandwidth_y)` in cycles per micrometer
    pub fn xy(&self) -> (f64, f64) {
        (self.x.bandwidth, self.y.bandwidth)
    }
}

pub fn estimate_bandwidth(params: &OpticalParameters) -> Result<Bandwidth> {
    params.validate()?;

    let estimate = |axis: Axis, aperture_um: f64| {
        let est = estimate_axis_bandwidth(aperture_um, params.wavelength_um, params.sensor_distance_um);
        tracing::trace!(
            %axis,
            fresnel_number = est.fresnel_number,
            regime = ?est.regime,
            bandwidth = est.bandwidth,
            "axis bandwidth"
        );
        est
    };

    let bandwidth = Bandwidth {
        x: estimate(Axis::X, params.ms_length_um.x),
        y: estimate(Axis::Y, params.ms_length_um.y),
    };
    tracing::debug!(x = bandwidth.x.bandwidth, y = bandwidth.y.bandwidth, "estimated bandwidth");

    Ok(bandwidth)
}
