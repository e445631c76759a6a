use super::trace::SolverTraceRecord;

/// Why a solve stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The solver's own convergence test passed.
    Converged,
    /// `max_iters` outer iterations ran without converging.
    MaxIterations,
    /// The configured time limit elapsed.
    DeadlineReached,
}

/// Final point of a solve.
///
/// `argument` and `value` always describe the same point: `value` is the
/// objective evaluated at `argument`.
#[derive(Clone, Debug)]
pub struct Solution {
    pub argument: Vec<f64>,
    pub value: f64,
    /// Outer iterations (sweeps for coordinate descent) actually taken.
    pub iters: usize,
    pub converged: bool,
    pub termination: Termination,
    /// Objective evaluations, including those made by line searches.
    pub f_evals: usize,
    /// Gradient evaluations.
    pub g_evals: usize,
    pub trace: Option<Vec<SolverTraceRecord>>,
}

impl Solution {
    pub(crate) fn new(
        argument: Vec<f64>,
        value: f64,
        iters: usize,
        termination: Termination,
        (f_evals, g_evals): (usize, usize),
    ) -> Self {
        Self {
            argument,
            value,
            iters,
            converged: termination == Termination::Converged,
            termination,
            f_evals,
            g_evals,
            trace: None,
        }
    }
}
