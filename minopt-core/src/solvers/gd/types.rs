use std::time::Duration;

use crate::error::Result;
use crate::solvers::common::validate;

/// Configuration for gradient descent with an adaptive step.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    /// Initial step size.
    pub step_size: f64,
    /// Maximum number of iterations.
    pub max_iters: usize,
    /// Converged when every gradient component is below this in magnitude.
    pub tol_grad: f64,
    /// Step multiplier applied after an accepted step.
    pub grow: f64,
    /// Step multiplier applied after each rejected trial.
    pub shrink: f64,
    /// Trials allowed per iteration before failing with
    /// `LineSearchExhausted`.
    pub max_backtracks: usize,
    /// Optional wall-clock limit, checked before each iteration.
    pub time_limit: Option<Duration>,
    /// If true, prints per-iteration diagnostics (f, max |grad|, step size).
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the solution.
    pub collect_trace: bool,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            step_size: 1e-2,
            max_iters: 100,
            tol_grad: 1e-3,
            grow: 1.1,
            shrink: 0.7,
            max_backtracks: 50,
            time_limit: None,
            verbose: false,
            collect_trace: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::positive("step_size", self.step_size)?;
        validate::non_negative("tol_grad", self.tol_grad)?;
        validate::grow_factor("grow", self.grow)?;
        validate::shrink_factor("shrink", self.shrink)?;
        validate::at_least_one("max_backtracks", self.max_backtracks)
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}
