use std::time::Duration;

use crate::error::Result;
use crate::solvers::common::validate;

/// How L-BFGS treats a proposed step that raises the objective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepAcceptance {
    /// Take every step; only the step scale reacts to a worse value.
    #[default]
    Always,
    /// Reject steps that raise the objective, keeping iterates monotone.
    StrictDescent,
}

/// Configuration for limited-memory BFGS.
///
/// There is no Wolfe line search: the step scale is adapted from whether the
/// previous step lowered the objective.
#[derive(Clone, Debug)]
pub struct Lbfgs {
    /// Initial step scale.
    pub step_size: f64,
    /// Maximum number of iterations.
    pub max_iters: usize,
    /// Number of curvature pairs kept.
    pub memory: usize,
    /// Converged when every gradient component is below this in magnitude.
    pub tol_grad: f64,
    /// Step scale multiplier after a step that did not raise the objective.
    pub grow: f64,
    /// Step scale multiplier after a step that did.
    pub shrink: f64,
    /// Pairs with |s.y| <= curvature_tol * |s| * |y| are not stored.
    pub curvature_tol: f64,
    pub acceptance: StepAcceptance,
    /// Optional wall-clock limit, checked before each iteration.
    pub time_limit: Option<Duration>,
    pub verbose: bool,
    pub collect_trace: bool,
}

impl Lbfgs {
    pub fn new() -> Self {
        Self {
            step_size: 1e-3,
            max_iters: 100,
            memory: 5,
            tol_grad: 1e-5,
            grow: 1.2,
            shrink: 0.5,
            curvature_tol: 1e-12,
            acceptance: StepAcceptance::Always,
            time_limit: None,
            verbose: false,
            collect_trace: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate::positive("step_size", self.step_size)?;
        validate::at_least_one("memory", self.memory)?;
        validate::non_negative("tol_grad", self.tol_grad)?;
        validate::grow_factor("grow", self.grow)?;
        validate::shrink_factor("shrink", self.shrink)?;
        validate::non_negative("curvature_tol", self.curvature_tol)
    }
}

impl Default for Lbfgs {
    fn default() -> Self {
        Self::new()
    }
}
