//! The three minimizers and what they share.

pub mod cd;
pub mod common;
pub mod gd;
pub mod lbfgs;

pub use cd::CoordinateDescent;
pub use common::solution::{Solution, Termination};
pub use common::step_policy::{
    AdaptiveBacktracking, CostDecrease, LineSearchContext, LineSearchPolicy, LineSearchResult,
    NoLineSearch,
};
pub use common::trace::SolverTraceRecord;
pub use gd::GradientDescent;
pub use lbfgs::{CurvatureHistory, CurvaturePair, Lbfgs, StepAcceptance};

use crate::error::Result;

/// Randomized coordinate descent with default settings.
pub fn minimize_coordinate_descent<F>(value_fn: F, x0: &[f64], max_iters: usize) -> Result<Solution>
where
    F: Fn(&[f64]) -> f64,
{
    CoordinateDescent {
        max_iters,
        ..CoordinateDescent::new()
    }
    .minimize_with_fn(x0, value_fn)
}

/// Adaptive-step gradient descent with default settings.
pub fn minimize_gradient_descent<F, G>(
    value_fn: F,
    grad_fn: G,
    x0: &[f64],
    max_iters: usize,
) -> Result<Solution>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut Vec<f64>),
{
    GradientDescent {
        max_iters,
        ..GradientDescent::new()
    }
    .minimize_with_fn(x0, value_fn, grad_fn)
}

/// L-BFGS with default settings.
pub fn minimize_lbfgs<F, G>(value_fn: F, grad_fn: G, x0: &[f64], max_iters: usize) -> Result<Solution>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut Vec<f64>),
{
    Lbfgs {
        max_iters,
        ..Lbfgs::new()
    }
    .minimize_with_fn(x0, value_fn, grad_fn)
}
