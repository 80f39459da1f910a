//! Error types shared by the grid builder and the evaluators.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    /// Zero iterations, or a cap so large the not-escaped sentinel would overflow.
    #[error("Invalid iteration cap: {max_iterations} (must be in 1..u32::MAX)")]
    InvalidIterationCap { max_iterations: u32 },

    #[error("Invalid sample step: {step} (must be finite and > 0)")]
    InvalidStep { step: f64 },

    #[error("Non-finite coordinate: {re} + {im}i")]
    NonFiniteCoordinate { re: f64, im: f64 },

    /// Counts saturate at `u64::MAX` when the requested axis is unbounded.
    #[error("Grid too large: {rows} rows x {cols} columns")]
    GridTooLarge { rows: u64, cols: u64 },

    #[error("Intensity {value} outside [0, 1]")]
    IntensityOutOfRange { value: f64 },

    #[error("Shape mismatch: expected {expected} cells, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Escape time {escape_time} exceeds iteration cap {max_iterations}")]
    EscapeOutOfRange { escape_time: u32, max_iterations: u32 },

    #[error("Unknown fractal: {0}")]
    UnknownFractal(String),

    #[error("Evaluation cancelled at iteration {iteration}")]
    Cancelled { iteration: u32 },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Reject iteration caps the evaluators cannot honor.
///
/// `u32::MAX` is excluded because the not-escaped sentinel is `max_iterations + 1`.
pub fn validate_max_iterations(max_iterations: u32) -> Result<(), FractalError> {
    if max_iterations == 0 || max_iterations == u32::MAX {
        return Err(FractalError::InvalidIterationCap { max_iterations });
    }
    Ok(())
}
