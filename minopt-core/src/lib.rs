//! minopt: small unconstrained minimizers over R^n
//!
//! - `Objective` / `DifferentiableObjective`: what a solver minimizes
//! - `CoordinateDescent`: derivative-free, randomized sweeps
//! - `GradientDescent`: adaptive step with backtracking
//! - `Lbfgs`: limited-memory quasi-Newton
//!
//! Every solver returns a `Solution` or a `MinimizeError`. Running out of
//! iterations is not an error.

pub mod error;
pub mod numerics;
pub mod problems;
pub mod solvers;

pub use error::{MinimizeError, NonFinite, Result};
pub use problems::{DifferentiableObjective, FiniteDifference, FnObjective, Objective};
pub use solvers::{
    minimize_coordinate_descent, minimize_gradient_descent, minimize_lbfgs, CoordinateDescent,
    GradientDescent, Lbfgs, Solution, StepAcceptance, Termination,
};
