use minopt_core::{
    error::Result,
    problems::test_functions::Rosenbrock,
    solvers::gd::{GradientDescent, LineSearchContext, LineSearchPolicy, LineSearchResult},
};

/// Halve the step until the value drops, but never below `min_alpha`.
#[derive(Clone, Copy, Debug)]
struct Halving {
    max_steps: usize,
    min_alpha: f64,
}

impl Default for Halving {
    fn default() -> Self {
        Self {
            max_steps: 30,
            min_alpha: 1e-10,
        }
    }
}

impl LineSearchPolicy for Halving {
    fn search(
        &mut self,
        ctx: &LineSearchContext,
        eval_f: &mut dyn FnMut(f64) -> Result<f64>,
    ) -> Result<LineSearchResult> {
        let mut alpha = ctx.alpha0;
        let mut f = ctx.f0;
        let mut trials = 0;
        while trials < self.max_steps && alpha >= self.min_alpha {
            f = eval_f(alpha)?;
            trials += 1;
            if f < ctx.f0 {
                return Ok(LineSearchResult {
                    accepted: true,
                    alpha,
                    f,
                    trials,
                });
            }
            alpha *= 0.5;
        }
        Ok(LineSearchResult {
            accepted: false,
            alpha,
            f,
            trials,
        })
    }
}

fn main() -> Result<()> {
    let solver = GradientDescent {
        step_size: 1e-3,
        max_iters: 20_000,
        tol_grad: 1e-4,
        ..GradientDescent::new()
    };
    let result = solver.minimize_with_line_search(
        &Rosenbrock::default(),
        &[-1.2, 1.0],
        &mut Halving::default(),
    )?;

    println!(
        "converged={} iters={} x*=[{:.6}, {:.6}] f(x*)={:.3e}",
        result.converged, result.iters, result.argument[0], result.argument[1], result.value
    );
    Ok(())
}
