use std::time::Duration;

use crate::error::Result;
use crate::solvers::common::validate;

/// Configuration for randomized coordinate descent.
///
/// Needs no gradient: each coordinate's partial derivative is estimated by
/// a forward difference, and coordinates are visited in a fresh random order
/// every sweep.
#[derive(Clone, Debug)]
pub struct CoordinateDescent {
    /// Maximum number of sweeps over all coordinates.
    pub max_iters: usize,
    /// Initial step scale applied to each derivative estimate.
    pub step_size: f64,
    /// Forward-difference step.
    pub fd_step: f64,
    /// A sweep converges when every |derivative| is at most this.
    pub tol_deriv: f64,
    /// Step scale multiplier after a sweep that lowered the objective.
    pub grow: f64,
    /// Step scale multiplier after a sweep that did not.
    pub shrink: f64,
    /// Value the first sweep's result is compared against. The default,
    /// e^10, lets the first sweep grow the step unless the objective is huge.
    pub baseline: f64,
    /// Seed for the coordinate order. `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Optional wall-clock limit, checked before each sweep.
    pub time_limit: Option<Duration>,
    /// If true, prints per-sweep diagnostics.
    pub verbose: bool,
    /// If true, stores per-sweep trace rows into the solution.
    pub collect_trace: bool,
}

impl CoordinateDescent {
    pub fn new() -> Self {
        Self {
            max_iters: 100,
            step_size: 1e-3,
            fd_step: 1e-6,
            tol_deriv: 1e-2,
            grow: 1.1,
            shrink: 0.7,
            baseline: 10f64.exp(),
            seed: None,
            time_limit: None,
            verbose: false,
            collect_trace: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::positive("step_size", self.step_size)?;
        validate::positive("fd_step", self.fd_step)?;
        validate::non_negative("tol_deriv", self.tol_deriv)?;
        validate::grow_factor("grow", self.grow)?;
        validate::shrink_factor("shrink", self.shrink)
    }
}

impl Default for CoordinateDescent {
    fn default() -> Self {
        Self::new()
    }
}
