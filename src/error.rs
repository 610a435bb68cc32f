use thiserror::Error;

/// Top-level error type for the floor-plan rendering engine.
///
/// Only violations of the input type contract surface here. Degenerate
/// geometry is absorbed by the pipeline and never becomes an error.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by malformed floor-plan records.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("room {room} has a non-finite coordinate at vertex {index}: ({x}, {z})")]
    NonFiniteCoordinate {
        room: String,
        index: usize,
        x: f64,
        z: f64,
    },

    #[error("malformed floor plan: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by an unusable viewport or wall configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },

    #[error("unknown color scheme: {0}")]
    UnknownColorScheme(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(InputError::Parse(err))
    }
}

/// Convenience type alias for results using [`PlanError`].
pub type Result<T> = std::result::Result<T, PlanError>;
