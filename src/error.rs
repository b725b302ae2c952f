use thiserror::Error;

/// Top-level error type for the galvo frame optimizer.
#[derive(Debug, Error)]
pub enum GalvoError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to optimizer configuration.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("max travel must be a positive distance, got {0}")]
    InvalidMaxTravel(f64),

    #[error("settings would produce more than {limit} samples in one frame")]
    TooManySamples { limit: usize },
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`GalvoError`].
pub type Result<T> = std::result::Result<T, GalvoError>;
