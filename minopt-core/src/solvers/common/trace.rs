use std::cell::RefCell;
use std::fmt::Write;

use crate::error::Result;

use super::solution::Solution;

#[derive(Clone, Debug)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub f: Option<f64>,
    /// Max-abs of the gradient (or of the finite-difference derivatives for
    /// coordinate descent).
    pub grad_max: Option<f64>,
    /// Step scale that will be used by the next iteration.
    pub alpha: Option<f64>,
    pub history_len: Option<usize>,
    pub note: Option<&'static str>,
}

impl SolverTraceRecord {
    fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6}", self.solver, self.iter);
        if let Some(v) = self.f {
            let _ = write!(line, " | f {:>13.6e}", v);
        }
        if let Some(v) = self.grad_max {
            let _ = write!(line, " | grad {:>13.6e}", v);
        }
        if let Some(v) = self.alpha {
            let _ = write!(line, " | alpha {:>8.3e}", v);
        }
        if let Some(v) = self.history_len {
            let _ = write!(line, " | m {:>2}", v);
        }
        if let Some(note) = self.note {
            let _ = write!(line, " | note {note}");
        }
        line
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    f: Option<f64>,
    grad_max: Option<f64>,
    alpha: Option<f64>,
    history_len: Option<usize>,
    note: Option<&'static str>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize) -> Self {
        Self {
            iter,
            f: None,
            grad_max: None,
            alpha: None,
            history_len: None,
            note: None,
        }
    }

    pub(crate) fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }

    pub(crate) fn grad_max(mut self, grad_max: f64) -> Self {
        self.grad_max = Some(grad_max);
        self
    }

    pub(crate) fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub(crate) fn history_len(mut self, history_len: usize) -> Self {
        self.history_len = Some(history_len);
        self
    }

    pub(crate) fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    verbose: bool,
    solver: &'static str,
    history: Option<RefCell<Vec<SolverTraceRecord>>>,
}

impl SolverTracer {
    pub(crate) fn new(solver: &'static str, verbose: bool, collect: bool) -> Self {
        Self {
            verbose,
            solver,
            history: collect.then(|| RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn cd(verbose: bool, collect: bool) -> Self {
        Self::new("cd", verbose, collect)
    }

    pub(crate) fn gd(verbose: bool, collect: bool) -> Self {
        Self::new("gd", verbose, collect)
    }

    pub(crate) fn lbfgs(verbose: bool, collect: bool) -> Self {
        Self::new("lbfgs", verbose, collect)
    }

    pub(crate) fn emit(&self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            f: row.f,
            grad_max: row.grad_max,
            alpha: row.alpha,
            history_len: row.history_len,
            note: row.note,
        };

        tracing::trace!(
            target: "minopt::solver",
            solver = record.solver,
            iter = record.iter,
            f = ?record.f,
            grad_max = ?record.grad_max,
            alpha = ?record.alpha,
            history_len = ?record.history_len,
            note = record.note.unwrap_or(""),
        );

        if self.verbose {
            println!("{}", record.format_line());
        }

        if let Some(history) = &self.history {
            history.borrow_mut().push(record);
        }
    }

    /// Log how the solve ended and move collected rows into the solution.
    pub(crate) fn finish(self, result: Result<Solution>) -> Result<Solution> {
        match &result {
            Ok(sol) => tracing::debug!(
                target: "minopt::solver",
                solver = self.solver,
                iters = sol.iters,
                value = sol.value,
                termination = ?sol.termination,
                f_evals = sol.f_evals,
                g_evals = sol.g_evals,
                "solve finished"
            ),
            Err(err) => tracing::debug!(
                target: "minopt::solver",
                solver = self.solver,
                error = %err,
                "solve failed"
            ),
        }

        let mut solution = result?;
        solution.trace = self.history.map(RefCell::into_inner);
        Ok(solution)
    }
}
