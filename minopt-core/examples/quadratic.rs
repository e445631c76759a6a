use minopt_core::{CoordinateDescent, GradientDescent, Lbfgs, Solution};

fn report(name: &str, result: &Solution) {
    println!(
        "{name:>6}: converged={} iters={:>3} x*=[{:.6}, {:.6}] f(x*)={:.3e} evals=({}, {})",
        result.converged,
        result.iters,
        result.argument[0],
        result.argument[1],
        result.value,
        result.f_evals,
        result.g_evals,
    );
}

fn main() -> minopt_core::Result<()> {
    let value_fn = |x: &[f64]| (x[0] - 3.0).powi(2) + 4.0 * (x[1] + 1.0).powi(2);
    let grad_fn = |x: &[f64], grad: &mut Vec<f64>| {
        grad[0] = 2.0 * (x[0] - 3.0);
        grad[1] = 8.0 * (x[1] + 1.0);
    };
    let x0 = [0.0, 0.0];

    let cd = CoordinateDescent {
        max_iters: 500,
        seed: Some(7),
        ..CoordinateDescent::new()
    }
    .minimize_with_fn(&x0, value_fn)?;
    report("cd", &cd);

    let gd = GradientDescent::new().minimize_with_fn(&x0, value_fn, grad_fn)?;
    report("gd", &gd);

    let lbfgs = Lbfgs {
        verbose: true,
        ..Lbfgs::new()
    }
    .minimize_with_fn(&x0, value_fn, grad_fn)?;
    report("lbfgs", &lbfgs);

    Ok(())
}
