use crate::units::Axis;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("pixel count for axis `{0}` is required but missing")]
    MissingPixelCount(Axis),
    #[error("pixel count for axis `{0}` must be at least 1")]
    EmptyAxis(Axis),
    #[error("`{name}` must be finite and strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("unknown length unit `{0}`, use: m, mm, um or nm")]
    UnknownUnit(String),
    #[error("failed to parse parameters")]
    Json(#[from] serde_json::Error),
    #[error("failed to read parameters from {path:?}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render report")]
    Template(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
