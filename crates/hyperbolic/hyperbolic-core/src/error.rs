//! Error types for renderer setup.
//!
//! Degenerate geometry during a frame is not represented here: those cases
//! recur every cycle and are skipped locally by the renderer.

/// A configuration value that violates the renderer's setup contract.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// A pencil needs at least one line.
    #[error("line_count must be at least 1")]
    EmptyPencil,

    /// A length, period or interval that must be strictly positive.
    #[error("{field} must be a finite value > 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    /// A threshold or phase that must be finite and not negative.
    #[error("{field} must be a finite value >= 0 (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// Viewport dimensions handed to the renderer.
    #[error("viewport size {width}x{height} is not drawable")]
    InvalidViewport { width: f64, height: f64 },
}

/// Failure to load a config from JSON.
#[derive(thiserror::Error, Debug)]
pub enum ConfigParseError {
    #[error("config json parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
