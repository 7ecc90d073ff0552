//! JSON and text reports for the command line tool

use minijinja::{context, Environment};
use serde::Serialize;

use crate::bandwidth::{AxisBandwidth, Bandwidth, FresnelRegime};
use crate::error::Result;
use crate::grid::AnyGrid;
use crate::params::OpticalParameters;
use crate::units::LengthUnit;

const GRID_TEMPLATE: &str = r#"Coordinate grid
Generated: {{ generated }}

Precision:       {{ precision }}
Radial symmetry: {{ radial_symmetry }}
Shape:           {{ rows }} rows (y) x {{ cols }} columns (x)

x axis ({{ unit }}):
{% for v in x_axis %}  {{ v }}
{% endfor %}
y axis ({{ unit }}):
{% for v in y_axis %}  {{ v }}
{% endfor %}"#;

const BANDWIDTH_TEMPLATE: &str = r#"Fourier bandwidth estimate
Generated: {{ generated }}

Wavelength:      {{ wavelength }} µm
Sensor distance: {{ sensor_distance }} µm
{% for axis in axes %}
[{{ axis.name }}]
  aperture:       {{ axis.aperture }} µm
  Fresnel number: {{ axis.fresnel_number }}
  regime:         {{ axis.regime }}
  bandwidth:      {{ axis.bandwidth }} cycles/{{ unit }}
{% endfor %}"#;

#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    pub generated: String,
    pub precision: String,
    pub radial_symmetry: bool,
    /// (rows, columns)
    pub shape: (usize, usize),
    pub x_axis_m: Vec<f64>,
    pub y_axis_m: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_grid_m: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_grid_m: Option<Vec<Vec<f64>>>,
}

impl GridReport {
    pub fn new(grid: &AnyGrid, radial_symmetry: bool, full: bool) -> Self {
        let (x_grid_m, y_grid_m) = if full {
            let (x, y) = grid.to_rows();
            (Some(x), Some(y))
        } else {
            (None, None)
        };

        Self {
            generated: chrono::Utc::now().to_rfc3339(),
            precision: grid.precision().to_string(),
            radial_symmetry,
            shape: grid.shape(),
            x_axis_m: grid.x_axis(),
            y_axis_m: grid.y_axis(),
            x_grid_m,
            y_grid_m,
        }
    }

    /// Render the axes in `unit`
    pub fn to_text(&self, unit: LengthUnit) -> Result<String> {
        let mut env = Environment::new();
        env.add_template("grid", GRID_TEMPLATE)?;
        let template = env.get_template("grid")?;

        let to_unit = |v: &Vec<f64>| -> Vec<String> {
            v.iter().map(|m| format!("{:.6}", unit.from_meters(*m))).collect()
        };

        Ok(template.render(context! {
            generated => self.generated,
            precision => self.precision,
            radial_symmetry => self.radial_symmetry,
            rows => self.shape.0,
            cols => self.shape.1,
            unit => unit.symbol(),
            x_axis => to_unit(&self.x_axis_m),
            y_axis => to_unit(&self.y_axis_m),
        })?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisReport {
    pub aperture_um: f64,
    pub fresnel_number: f64,
    pub regime: FresnelRegime,
    /// Cycles per report unit
    pub bandwidth: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandwidthReport {
    pub generated: String,
    pub unit: LengthUnit,
    pub wavelength_um: f64,
    pub sensor_distance_um: f64,
    pub x: AxisReport,
    pub y: AxisReport,
}

impl BandwidthReport {
    /// Bandwidths are converted from cycles per µm to cycles per `unit`
    pub fn new(params: &OpticalParameters, bandwidth: &Bandwidth, unit: LengthUnit) -> Self {
        let um_per_unit = unit.scale_to(&LengthUnit::Micrometer);
        let axis = |aperture_um: f64, est: &AxisBandwidth| AxisReport {
            aperture_um,
            fresnel_number: est.fresnel_number,
            regime: est.regime,
            bandwidth: est.bandwidth * um_per_unit,
        };

        Self {
            generated: chrono::Utc::now().to_rfc3339(),
            unit,
            wavelength_um: params.wavelength_um,
            sensor_distance_um: params.sensor_distance_um,
            x: axis(params.ms_length_um.x, &bandwidth.x),
            y: axis(params.ms_length_um.y, &bandwidth.y),
        }
    }

    pub fn to_text(&self) -> Result<String> {
        let mut env = Environment::new();
        env.add_template("bandwidth", BANDWIDTH_TEMPLATE)?;
        let template = env.get_template("bandwidth")?;

        let axes: Vec<_> = [("x", &self.x), ("y", &self.y)]
            .into_iter()
            .map(|(name, a)| {
                context! {
                    name => name,
                    aperture => format!("{:.3}", a.aperture_um),
                    fresnel_number => format!("{:.4}", a.fresnel_number),
                    regime => match a.regime {
                        FresnelRegime::ApertureLimited => "aperture limited",
                        FresnelRegime::DiffractionLimited => "diffraction limited",
                    },
                    bandwidth => format!("{:.6e}", a.bandwidth),
                }
            })
            .collect();

        Ok(template.render(context! {
            generated => self.generated,
            wavelength => format!("{:.4}", self.wavelength_um),
            sensor_distance => format!("{:.3}", self.sensor_distance_um),
            unit => self.unit.symbol(),
            axes => axes,
        })?)
    }
}
