//! Error types for the fitting pipeline.
//!
//! Contract violations (wrong shape, missing output key) are integration
//! errors in the surrounding pipeline and fail fast, before any tensor
//! arithmetic runs. Numerical degeneracy (a constant signal row, a constant
//! connectivity triangle) is deliberately NOT an error: it propagates as
//! NaN through the arithmetic into the returned loss so the optimizer can
//! detect divergence from a non-finite value.

use thiserror::Error;

/// Result alias used across the fitting crates.
pub type FitResult<T> = Result<T, FitError>;

/// Failures raised by loss construction and evaluation.
#[derive(Debug, Error)]
pub enum FitError {
    /// The simulation output bundle has no entry under the configured key.
    #[error("simulation output has no entry for key {key:?} (available: {available:?})")]
    MissingSimKey {
        key: String,
        available: Vec<String>,
    },

    /// An argument that must be a 2-D node×time matrix has another rank.
    #[error("{name} must be a 2-D node x time matrix, got shape {shape:?}")]
    NotAMatrix {
        name: &'static str,
        shape: Vec<usize>,
    },

    /// An argument that must be a square node×node matrix is not square.
    #[error("{name} must be a square node x node matrix, got shape {shape:?}")]
    NotSquare {
        name: &'static str,
        shape: Vec<usize>,
    },

    /// Two arguments disagree on how many nodes they describe.
    #[error("node count mismatch: {left_name} has {left} nodes, {right_name} has {right}")]
    NodeCountMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    /// Two series that are compared pointwise have different lengths.
    #[error("sample count mismatch: {left_name} has {left} time points, {right_name} has {right}")]
    SampleCountMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    /// A composite objective was evaluated with no component terms.
    #[error("composite loss requires at least one weighted term")]
    EmptyComposite,

    /// Underlying tensor-runtime failure.
    #[error(transparent)]
    Tensor(#[from] candle_core::Error),
}
