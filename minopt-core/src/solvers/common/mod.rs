pub(crate) mod budget;
pub(crate) mod evaluator;
pub mod solution;
pub mod step_policy;
pub mod trace;
pub(crate) mod validate;
