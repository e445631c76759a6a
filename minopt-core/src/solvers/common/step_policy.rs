use crate::error::Result;

/// Outcome of a step search policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchResult {
    pub accepted: bool,
    /// Step size of the last trial.
    pub alpha: f64,
    /// Objective value at the last trial.
    pub f: f64,
    /// Number of objective evaluations spent.
    pub trials: usize,
}

/// Per-iteration context passed to step search policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchContext {
    pub iter: usize,
    pub alpha0: f64,
    /// Objective value at the current point.
    pub f0: f64,
}

/// Policy interface for selecting a step size.
///
/// `eval_f(alpha)` evaluates the objective at the trial point for `alpha`.
/// Errors from the evaluation (non-finite objective) must be propagated.
/// When a result is accepted, `alpha` and `f` must describe the last
/// evaluated trial.
pub trait LineSearchPolicy {
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_f: &mut dyn FnMut(f64) -> Result<f64>,
    ) -> Result<LineSearchResult>;
}

/// Policy that takes the proposed step whatever its value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLineSearch;

impl LineSearchPolicy for NoLineSearch {
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_f: &mut dyn FnMut(f64) -> Result<f64>,
    ) -> Result<LineSearchResult> {
        let f = eval_f(ctx.alpha0)?;
        Ok(LineSearchResult {
            accepted: true,
            alpha: ctx.alpha0,
            f,
            trials: 1,
        })
    }
}

/// Policy that accepts the proposed step only if the objective does not
/// increase.
#[derive(Clone, Copy, Debug, Default)]
pub struct CostDecrease;

impl LineSearchPolicy for CostDecrease {
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_f: &mut dyn FnMut(f64) -> Result<f64>,
    ) -> Result<LineSearchResult> {
        let f = eval_f(ctx.alpha0)?;
        Ok(LineSearchResult {
            accepted: f <= ctx.f0,
            alpha: ctx.alpha0,
            f,
            trials: 1,
        })
    }
}

/// Shrink the step by `shrink` until the objective no longer increases.
///
/// Gives up after `max_steps` trials.
#[derive(Clone, Copy, Debug)]
pub struct AdaptiveBacktracking {
    pub shrink: f64,
    pub max_steps: usize,
}

impl AdaptiveBacktracking {
    pub fn new(shrink: f64, max_steps: usize) -> Self {
        Self { shrink, max_steps }
    }
}

impl Default for AdaptiveBacktracking {
    fn default() -> Self {
        Self {
            shrink: 0.7,
            max_steps: 50,
        }
    }
}

impl LineSearchPolicy for AdaptiveBacktracking {
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_f: &mut dyn FnMut(f64) -> Result<f64>,
    ) -> Result<LineSearchResult> {
        let mut alpha = ctx.alpha0;
        let mut f = ctx.f0;
        for trial in 1..=self.max_steps {
            if trial > 1 {
                alpha *= self.shrink;
            }
            f = eval_f(alpha)?;
            if f <= ctx.f0 {
                return Ok(LineSearchResult {
                    accepted: true,
                    alpha,
                    f,
                    trials: trial,
                });
            }
        }

        Ok(LineSearchResult {
            accepted: false,
            alpha,
            f,
            trials: self.max_steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(alpha0: f64, f0: f64) -> LineSearchContext {
        LineSearchContext {
            iter: 0,
            alpha0,
            f0,
        }
    }

    #[test]
    fn backtracking_shrinks_until_not_worse() {
        // phi(alpha) = (alpha - 0.1)^2 with phi(0) = 0.01
        let mut phi = |a: f64| -> Result<f64> { Ok((a - 0.1) * (a - 0.1)) };
        let mut ls = AdaptiveBacktracking::default();
        let res = ls.search(&ctx(1.0, 0.01), &mut phi).unwrap();
        assert!(res.accepted);
        assert!(res.alpha <= 0.2);
        assert_eq!(res.trials, 6);
        assert!((res.f - phi(res.alpha).unwrap()).abs() < 1e-15);
    }

    #[test]
    fn backtracking_gives_up_after_max_steps() {
        let mut calls = 0;
        let mut always_worse = |_a: f64| -> Result<f64> {
            calls += 1;
            Ok(1.0)
        };
        let mut ls = AdaptiveBacktracking::new(0.5, 7);
        let res = ls.search(&ctx(1.0, 0.0), &mut always_worse).unwrap();
        assert!(!res.accepted);
        assert_eq!(res.trials, 7);
        assert_eq!(calls, 7);
        // the reported step is the seventh one tried, 0.5^6
        assert_eq!(res.alpha, 0.015625);
    }

    #[test]
    fn cost_decrease_rejects_worse_step() {
        let mut ls = CostDecrease;
        let res = ls.search(&ctx(0.5, 1.0), &mut |_a: f64| -> Result<f64> { Ok(2.0) }).unwrap();
        assert!(!res.accepted);
        let res = ls.search(&ctx(0.5, 1.0), &mut |_a: f64| -> Result<f64> { Ok(1.0) }).unwrap();
        assert!(res.accepted);
        let res = NoLineSearch.search(&ctx(0.5, 1.0), &mut |_a: f64| -> Result<f64> { Ok(2.0) }).unwrap();
        assert!(res.accepted);
    }
}
