mod history;
mod solve;
mod types;

pub use crate::solvers::common::step_policy::{CostDecrease, NoLineSearch};
pub use history::{CurvatureHistory, CurvaturePair};
pub use types::{Lbfgs, StepAcceptance};
