use crate::error::{MinimizeError, Result};
use crate::numerics::vector::{add_scaled_into, max_abs, max_abs_below};
use crate::problems::objective::{DifferentiableObjective, FnObjective};
use crate::solvers::common::budget::Deadline;
use crate::solvers::common::evaluator::Evaluator;
use crate::solvers::common::solution::{Solution, Termination};
use crate::solvers::common::step_policy::{
    AdaptiveBacktracking, LineSearchContext, LineSearchPolicy,
};
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::GradientDescent;

impl GradientDescent {
    fn configured_backtracking(&self) -> AdaptiveBacktracking {
        AdaptiveBacktracking::new(self.shrink, self.max_backtracks)
    }

    fn run_with_line_search<O, LS>(
        &self,
        obj: &O,
        x0: &[f64],
        line_search: &mut LS,
        trace: &SolverTracer,
    ) -> Result<Solution>
    where
        O: DifferentiableObjective + ?Sized,
        LS: LineSearchPolicy + ?Sized,
    {
        self.validate()?;
        let mut eval = Evaluator::new(obj, x0)?;
        let deadline = Deadline::start(self.time_limit);

        let n = x0.len();
        let mut x = x0.to_vec();
        let mut grad = vec![0.0; n];
        let mut x_trial = vec![0.0; n];
        let mut alpha = self.step_size;
        let mut fx = eval.value(&x)?;

        for k in 0..self.max_iters {
            if deadline.expired() {
                trace.emit(TraceRow::iter(k).f(fx).note("deadline"));
                return Ok(Solution::new(
                    x,
                    fx,
                    k,
                    Termination::DeadlineReached,
                    eval.counts(),
                ));
            }
            eval.set_iter(k);
            eval.gradient(&x, &mut grad)?;

            let grad_max = max_abs(&grad);
            if max_abs_below(&grad, self.tol_grad) {
                trace.emit(
                    TraceRow::iter(k)
                        .f(fx)
                        .grad_max(grad_max)
                        .note("converged"),
                );
                return Ok(Solution::new(
                    x,
                    fx,
                    k,
                    Termination::Converged,
                    eval.counts(),
                ));
            }

            let ctx = LineSearchContext {
                iter: k,
                alpha0: alpha,
                f0: fx,
            };
            let mut eval_f = |alpha_trial: f64| {
                // x_trial = x - alpha_trial * grad
                add_scaled_into(&mut x_trial, &x, -alpha_trial, &grad);
                eval.value(&x_trial)
            };
            let ls = line_search.search(&ctx, &mut eval_f)?;

            if !ls.accepted {
                return Err(MinimizeError::LineSearchExhausted {
                    iter: k,
                    trials: ls.trials,
                    alpha: ls.alpha,
                });
            }

            add_scaled_into(&mut x_trial, &x, -ls.alpha, &grad);
            std::mem::swap(&mut x, &mut x_trial);
            fx = ls.f;
            alpha = ls.alpha * self.grow;

            trace.emit(
                TraceRow::iter(k)
                    .f(fx)
                    .grad_max(grad_max)
                    .alpha(alpha),
            );
        }

        Ok(Solution::new(
            x,
            fx,
            self.max_iters,
            Termination::MaxIterations,
            eval.counts(),
        ))
    }

    pub fn minimize<O>(&self, obj: &O, x0: &[f64]) -> Result<Solution>
    where
        O: DifferentiableObjective + ?Sized,
    {
        let mut line_search = self.configured_backtracking();
        self.minimize_with_line_search(obj, x0, &mut line_search)
    }

    /// Minimize using user-provided value and gradient functions.
    pub fn minimize_with_fn<F, G>(&self, x0: &[f64], value_fn: F, grad_fn: G) -> Result<Solution>
    where
        F: Fn(&[f64]) -> f64,
        G: Fn(&[f64], &mut Vec<f64>),
    {
        self.minimize(&FnObjective::new(value_fn, grad_fn), x0)
    }

    /// Minimize using an explicit line-search policy in place of the
    /// configured backtracking. The step still grows by `grow` after each
    /// accepted step.
    pub fn minimize_with_line_search<O, LS>(
        &self,
        obj: &O,
        x0: &[f64],
        line_search: &mut LS,
    ) -> Result<Solution>
    where
        O: DifferentiableObjective + ?Sized,
        LS: LineSearchPolicy + ?Sized,
    {
        let trace = SolverTracer::gd(self.verbose, self.collect_trace);
        let result = self.run_with_line_search(obj, x0, line_search, &trace);
        trace.finish(result)
    }
}
