use crate::error::{NonFinite, Result};
use crate::numerics::vector::{add_scaled_into, dot, max_abs, max_abs_below, sub};
use crate::problems::objective::{DifferentiableObjective, FnObjective};
use crate::solvers::common::budget::Deadline;
use crate::solvers::common::evaluator::Evaluator;
use crate::solvers::common::solution::{Solution, Termination};
use crate::solvers::common::step_policy::{
    CostDecrease, LineSearchContext, LineSearchPolicy, NoLineSearch,
};
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::history::{CurvatureHistory, CurvaturePair};
use super::types::{Lbfgs, StepAcceptance};

impl Lbfgs {
    fn run_with_configured_acceptance<O>(
        &self,
        obj: &O,
        x0: &[f64],
        trace: &SolverTracer,
    ) -> Result<Solution>
    where
        O: DifferentiableObjective + ?Sized,
    {
        match self.acceptance {
            StepAcceptance::Always => self.run_with_acceptance(obj, x0, &mut NoLineSearch, trace),
            StepAcceptance::StrictDescent => {
                self.run_with_acceptance(obj, x0, &mut CostDecrease, trace)
            }
        }
    }

    fn run_with_acceptance<O, LS>(
        &self,
        obj: &O,
        x0: &[f64],
        acceptance: &mut LS,
        trace: &SolverTracer,
    ) -> Result<Solution>
    where
        O: DifferentiableObjective + ?Sized,
        LS: LineSearchPolicy,
    {
        self.validate()?;
        let mut eval = Evaluator::new(obj, x0)?;
        let deadline = Deadline::start(self.time_limit);

        let n = x0.len();
        let mut x = x0.to_vec();
        let mut xn = vec![0.0; n];
        let mut g_cur = vec![0.0; n];
        let mut gn = vec![0.0; n];
        let mut direction = Vec::with_capacity(n);
        let mut history = CurvatureHistory::new(self.memory);
        let mut alpha = self.step_size;

        let mut f_prev = eval.value(&x)?;
        eval.gradient(&x, &mut g_cur)?;
        if max_abs_below(&g_cur, self.tol_grad) {
            trace.emit(
                TraceRow::iter(0)
                    .f(f_prev)
                    .grad_max(max_abs(&g_cur))
                    .note("converged"),
            );
            return Ok(Solution::new(
                x,
                f_prev,
                0,
                Termination::Converged,
                eval.counts(),
            ));
        }
        // Two-loop recursion over no pairs: -g, unscaled.
        history.search_direction(&g_cur, &mut direction);

        for k in 0..self.max_iters {
            if deadline.expired() {
                trace.emit(TraceRow::iter(k).f(f_prev).note("deadline"));
                return Ok(Solution::new(
                    x,
                    f_prev,
                    k,
                    Termination::DeadlineReached,
                    eval.counts(),
                ));
            }
            eval.set_iter(k);

            let ctx = LineSearchContext {
                iter: k,
                alpha0: alpha,
                f0: f_prev,
            };
            let mut eval_f = |alpha_trial: f64| {
                // xn = x + alpha_trial * direction
                add_scaled_into(&mut xn, &x, alpha_trial, &direction);
                eval.value(&xn)
            };
            let step = acceptance.search(&ctx, &mut eval_f)?;
            let f_new = step.f;
            alpha = if f_new > f_prev {
                step.alpha * self.shrink
            } else {
                step.alpha * self.grow
            };

            if !step.accepted {
                // Keep x. A non-descent direction would be rejected forever.
                let note = if dot(&direction, &g_cur) >= 0.0 {
                    history.clear();
                    history.search_direction(&g_cur, &mut direction);
                    "rejected, reset"
                } else {
                    "rejected"
                };
                trace.emit(
                    TraceRow::iter(k)
                        .f(f_prev)
                        .alpha(alpha)
                        .history_len(history.len())
                        .note(note),
                );
                continue;
            }

            add_scaled_into(&mut xn, &x, step.alpha, &direction);
            eval.gradient(&xn, &mut gn)?;
            let grad_max = max_abs(&gn);
            if max_abs_below(&gn, self.tol_grad) {
                trace.emit(
                    TraceRow::iter(k)
                        .f(f_new)
                        .grad_max(grad_max)
                        .history_len(history.len())
                        .note("converged"),
                );
                return Ok(Solution::new(
                    xn,
                    f_new,
                    k + 1,
                    Termination::Converged,
                    eval.counts(),
                ));
            }

            let pair = CurvaturePair::new(sub(&xn, &x), sub(&gn, &g_cur), self.curvature_tol)
                .map_err(|q| eval.non_finite(q))?;
            let skipped = pair.is_none();
            if let Some(pair) = pair {
                history.push(pair);
            }

            let gamma = history.search_direction(&gn, &mut direction);
            if !gamma.is_finite() {
                return Err(eval.non_finite(NonFinite::Scaling));
            }
            if direction.iter().any(|d| !d.is_finite()) {
                return Err(eval.non_finite(NonFinite::Curvature));
            }

            std::mem::swap(&mut x, &mut xn);
            std::mem::swap(&mut g_cur, &mut gn);
            f_prev = f_new;

            let row = TraceRow::iter(k)
                .f(f_new)
                .grad_max(grad_max)
                .alpha(alpha)
                .history_len(history.len());
            trace.emit(if skipped {
                row.note("curvature skipped")
            } else {
                row
            });
        }

        Ok(Solution::new(
            x,
            f_prev,
            self.max_iters,
            Termination::MaxIterations,
            eval.counts(),
        ))
    }

    pub fn minimize<O>(&self, obj: &O, x0: &[f64]) -> Result<Solution>
    where
        O: DifferentiableObjective + ?Sized,
    {
        let trace = SolverTracer::lbfgs(self.verbose, self.collect_trace);
        let result = self.run_with_configured_acceptance(obj, x0, &trace);
        trace.finish(result)
    }

    /// Minimize using user-provided value and gradient functions.
    pub fn minimize_with_fn<F, G>(&self, x0: &[f64], value_fn: F, grad_fn: G) -> Result<Solution>
    where
        F: Fn(&[f64]) -> f64,
        G: Fn(&[f64], &mut Vec<f64>),
    {
        self.minimize(&FnObjective::new(value_fn, grad_fn), x0)
    }
}
