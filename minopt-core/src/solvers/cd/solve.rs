use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{NonFinite, Result};
use crate::numerics::vector::random_permutation_into;
use crate::problems::objective::Objective;
use crate::solvers::common::budget::Deadline;
use crate::solvers::common::evaluator::Evaluator;
use crate::solvers::common::solution::{Solution, Termination};
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::CoordinateDescent;

impl CoordinateDescent {
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    fn run<O>(&self, obj: &O, x0: &[f64], trace: &SolverTracer) -> Result<Solution>
    where
        O: Objective + ?Sized,
    {
        self.validate()?;
        let mut eval = Evaluator::new(obj, x0)?;
        let deadline = Deadline::start(self.time_limit);
        let mut rng = self.make_rng();

        let mut x = x0.to_vec();
        let mut order = vec![0usize; x.len()];
        let mut alpha = self.step_size;
        let mut fx = eval.value(&x)?;
        let mut f_prev = self.baseline;

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
            random_permutation_into(&mut order, &mut rng);

            let mut converged = true;
            let mut deriv_max = 0.0f64;
            for &i in &order {
                let xi = x[i];
                x[i] = xi + self.fd_step;
                let f_plus = eval.value(&x)?;
                x[i] = xi;

                let d = (f_plus - fx) / self.fd_step;
                if !d.is_finite() {
                    return Err(eval.non_finite(NonFinite::FiniteDifference));
                }
                if d.abs() > self.tol_deriv {
                    converged = false;
                }
                deriv_max = deriv_max.max(d.abs());

                // later coordinates in this sweep see the updated value
                x[i] = xi - alpha * d;
                fx = eval.value(&x)?;
            }

            alpha *= if fx < f_prev { self.grow } else { self.shrink };
            f_prev = fx;

            let row = TraceRow::iter(k).f(fx).grad_max(deriv_max).alpha(alpha);
            if converged {
                trace.emit(row.note("converged"));
                return Ok(Solution::new(
                    x,
                    fx,
                    k + 1,
                    Termination::Converged,
                    eval.counts(),
                ));
            }
            trace.emit(row);
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
        O: Objective + ?Sized,
    {
        let trace = SolverTracer::cd(self.verbose, self.collect_trace);
        let result = self.run(obj, x0, &trace);
        trace.finish(result)
    }

    /// Minimize a plain closure.
    pub fn minimize_with_fn<F>(&self, x0: &[f64], value_fn: F) -> Result<Solution>
    where
        F: Fn(&[f64]) -> f64,
    {
        self.minimize(&value_fn, x0)
    }
}
