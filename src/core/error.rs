use std::io;
use thiserror::Error;

/// Errors raised by the gradient engine and its PDF output.
///
/// Degenerate gradient input (no stops, zero-length vector, a `None`
/// spread that misses the painted region) is not an error: those cases
/// produce no color and are reported as `None` by the builder.
#[derive(Error, Debug)]
pub enum GradientError {
    #[error("transform is not invertible (determinant {determinant})")]
    NonInvertible { determinant: f64 },
    #[error("transform needs 6 coefficients, got {0}")]
    InvalidTransform(usize),
    #[error("invalid gradient JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
