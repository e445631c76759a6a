//! Errors reported by a solve.

use std::fmt;

use thiserror::Error;

/// The quantity that turned out NaN or infinite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonFinite {
    /// Initial point supplied by the caller.
    InitialPoint,
    /// Objective value f(x).
    Objective,
    /// A gradient component.
    Gradient,
    /// Forward-difference derivative estimate.
    FiniteDifference,
    /// L-BFGS curvature scalar rho = 1 / (s . y).
    Curvature,
    /// L-BFGS initial inverse-Hessian scale gamma.
    Scaling,
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NonFinite::InitialPoint => "initial point",
            NonFinite::Objective => "objective value",
            NonFinite::Gradient => "gradient",
            NonFinite::FiniteDifference => "finite-difference derivative",
            NonFinite::Curvature => "curvature (rho)",
            NonFinite::Scaling => "Hessian scaling (gamma)",
        };
        f.write_str(name)
    }
}

/// Errors that abort a single solve.
///
/// Running out of iterations is not an error: the solver returns its last
/// point with `converged == false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MinimizeError {
    /// The initial point has no coordinates.
    #[error("initial point must have at least one coordinate")]
    EmptyPoint,

    /// Gradient output length disagrees with the initial point.
    #[error("dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Objective, gradient, or a derived scalar is NaN or infinite.
    #[error("non-finite {quantity} at iteration {iter}")]
    NonFiniteValue { quantity: NonFinite, iter: usize },

    /// Backtracking could not find a non-worsening step.
    #[error("line search exhausted at iteration {iter} after {trials} trials (alpha = {alpha:e})")]
    LineSearchExhausted { iter: usize, trials: usize, alpha: f64 },

    /// Solver configuration violates an invariant.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MinimizeError>;
