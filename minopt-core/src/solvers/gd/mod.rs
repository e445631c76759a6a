mod solve;
mod types;

pub use crate::solvers::common::step_policy::{
    AdaptiveBacktracking, CostDecrease, LineSearchContext, LineSearchPolicy, LineSearchResult,
    NoLineSearch,
};
pub use types::GradientDescent;
