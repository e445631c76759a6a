use std::time::Duration;

use approx::assert_abs_diff_eq;
use minopt_core::{
    minimize_lbfgs,
    problems::{
        objective::Objective,
        test_functions::{Quadratic, Rosenbrock},
    },
    solvers::lbfgs::{Lbfgs, StepAcceptance},
    MinimizeError, NonFinite, Termination,
};

fn bowl(x: &[f64]) -> f64 {
    x[0] * x[0] + x[1] * x[1]
}

fn bowl_grad(x: &[f64], grad: &mut Vec<f64>) {
    grad[0] = 2.0 * x[0];
    grad[1] = 2.0 * x[1];
}

#[test]
fn quadratic_bowl_from_five_five() {
    let result = minimize_lbfgs(bowl, bowl_grad, &[5.0, 5.0], 100).unwrap();

    assert!(result.converged);
    assert_abs_diff_eq!(result.argument[0], 0.0, epsilon = 1e-2);
    assert_abs_diff_eq!(result.argument[1], 0.0, epsilon = 1e-2);
    assert_eq!(result.value, bowl(&result.argument));
}

#[test]
fn first_step_follows_negative_gradient() {
    let solver = Lbfgs {
        max_iters: 1,
        ..Lbfgs::new()
    };
    let result = solver
        .minimize_with_fn(&[5.0, 5.0], bowl, bowl_grad)
        .unwrap();

    assert_eq!(result.iters, 1);
    assert_abs_diff_eq!(result.argument[0], 4.99, epsilon = 1e-12);
    assert_abs_diff_eq!(result.argument[1], 4.99, epsilon = 1e-12);
    assert!(result.value < 50.0);
}

#[test]
fn ill_conditioned_quadratic() {
    let obj = Quadratic {
        center: vec![1.0; 10],
        weights: (1..=10).map(f64::from).collect(),
    };
    let solver = Lbfgs {
        max_iters: 500,
        collect_trace: true,
        ..Lbfgs::new()
    };
    let result = solver.minimize(&obj, &[0.0; 10]).unwrap();

    assert!(result.converged);
    for xi in &result.argument {
        assert_abs_diff_eq!(*xi, 1.0, epsilon = 1e-5);
    }

    let trace = result.trace.unwrap();
    let max_len = trace.iter().filter_map(|row| row.history_len).max().unwrap();
    assert_eq!(max_len, 5);
}

#[test]
fn rosenbrock_converges() {
    let obj = Rosenbrock::default();
    let solver = Lbfgs {
        max_iters: 2000,
        ..Lbfgs::new()
    };
    let result = solver.minimize(&obj, &[-1.2, 1.0]).unwrap();

    assert!(result.converged);
    assert_abs_diff_eq!(result.argument[0], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(result.argument[1], 1.0, epsilon = 1e-3);
}

#[test]
fn strict_descent_never_raises_the_value() {
    let obj = Rosenbrock::default();
    let solver = Lbfgs {
        max_iters: 2000,
        acceptance: StepAcceptance::StrictDescent,
        collect_trace: true,
        ..Lbfgs::new()
    };
    let x0 = [-1.2, 1.0];
    let result = solver.minimize(&obj, &x0).unwrap();

    assert!(result.converged);
    let mut prev = obj.value(&x0);
    for row in result.trace.unwrap() {
        let f = row.f.unwrap();
        assert!(f <= prev, "iter {}: {} > {}", row.iter, f, prev);
        prev = f;
    }
}

#[test]
fn strict_descent_holds_position_when_no_step_helps() {
    // Misleading gradient: -g points uphill on x^2.
    let solver = Lbfgs {
        max_iters: 20,
        acceptance: StepAcceptance::StrictDescent,
        ..Lbfgs::new()
    };
    let result = solver
        .minimize_with_fn(
            &[1.0],
            |x: &[f64]| x[0] * x[0],
            |x: &[f64], grad: &mut Vec<f64>| grad[0] = -2.0 * x[0],
        )
        .unwrap();

    assert_eq!(result.termination, Termination::MaxIterations);
    assert_eq!(result.argument, vec![1.0]);
    assert_eq!(result.value, 1.0);
    assert_eq!(result.g_evals, 1);
    // one value at entry plus one trial per iteration
    assert_eq!(result.f_evals, 21);
}

#[test]
fn stationary_start_takes_no_iterations() {
    let result = Lbfgs::new()
        .minimize_with_fn(&[0.0, 0.0], bowl, bowl_grad)
        .unwrap();

    assert!(result.converged);
    assert_eq!(result.iters, 0);
    assert_eq!(result.f_evals, 1);
    assert_eq!(result.g_evals, 1);
}

#[test]
fn zero_iterations_returns_start() {
    let solver = Lbfgs {
        max_iters: 0,
        ..Lbfgs::new()
    };
    let result = solver
        .minimize_with_fn(&[5.0, 5.0], bowl, bowl_grad)
        .unwrap();

    assert!(!result.converged);
    assert_eq!(result.argument, vec![5.0, 5.0]);
    assert_eq!(result.value, 50.0);
}

#[test]
fn reruns_are_bitwise_identical() {
    let obj = Rosenbrock::default();
    let solver = Lbfgs {
        max_iters: 60,
        ..Lbfgs::new()
    };
    let a = solver.minimize(&obj, &[-1.2, 1.0]).unwrap();
    let b = solver.minimize(&obj, &[-1.2, 1.0]).unwrap();

    assert_eq!(a.argument, b.argument);
    assert_eq!(a.value.to_bits(), b.value.to_bits());
}

#[test]
fn evaluations_stay_within_iteration_budget() {
    let max_iters = 20;
    let solver = Lbfgs {
        max_iters,
        ..Lbfgs::new()
    };
    let result = solver.minimize(&Rosenbrock::default(), &[-1.2, 1.0]).unwrap();

    assert!(!result.converged);
    assert_eq!(result.iters, max_iters);
    assert!(result.f_evals <= max_iters + 1);
    assert!(result.g_evals <= max_iters + 1);
}

#[test]
fn flat_curvature_skips_every_history_update() {
    // Linear objective: the gradient never changes, so s.y = 0 each step.
    let solver = Lbfgs {
        max_iters: 10,
        collect_trace: true,
        ..Lbfgs::new()
    };
    let result = solver
        .minimize_with_fn(
            &[0.0],
            |x: &[f64]| x[0],
            |_x: &[f64], grad: &mut Vec<f64>| grad[0] = 1.0,
        )
        .unwrap();

    assert_eq!(result.termination, Termination::MaxIterations);
    assert!(result.value < 0.0);
    let trace = result.trace.unwrap();
    assert_eq!(trace.len(), 10);
    for row in &trace {
        assert_eq!(row.note, Some("curvature skipped"));
        assert_eq!(row.history_len, Some(0));
    }
}

#[test]
fn vanishing_gradient_change_reports_non_finite_scaling() {
    // The second gradient component moves by 1e-163, so y.y underflows to
    // zero while s.y stays representable and gamma = s.y / y.y is infinite.
    let solver = Lbfgs {
        step_size: 1e100,
        curvature_tol: 0.0,
        ..Lbfgs::new()
    };
    let err = solver
        .minimize_with_fn(
            &[0.0, 0.0],
            |x: &[f64]| x[0],
            |x: &[f64], grad: &mut Vec<f64>| {
                grad[0] = 1.0;
                grad[1] = if x[0] == 0.0 { 1e-163 } else { 0.0 };
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        MinimizeError::NonFiniteValue {
            quantity: NonFinite::Scaling,
            iter: 0
        }
    );
}

#[test]
fn overflowing_direction_reports_non_finite_curvature() {
    // s.y = 1 and gamma = 1e300 are finite, but scaling the recursion overflows.
    let solver = Lbfgs {
        step_size: 1e300,
        curvature_tol: 0.0,
        ..Lbfgs::new()
    };
    let err = solver
        .minimize_with_fn(
            &[0.0, 0.0],
            |x: &[f64]| x[0],
            |x: &[f64], grad: &mut Vec<f64>| {
                grad[0] = 1.0;
                grad[1] = if x[0] == 0.0 { 1e-150 } else { 0.0 };
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        MinimizeError::NonFiniteValue {
            quantity: NonFinite::Curvature,
            iter: 0
        }
    );
}

#[test]
fn zero_time_limit_stops_before_first_iteration() {
    let solver = Lbfgs {
        time_limit: Some(Duration::ZERO),
        ..Lbfgs::new()
    };
    let result = solver
        .minimize_with_fn(&[5.0, 5.0], bowl, bowl_grad)
        .unwrap();

    assert_eq!(result.termination, Termination::DeadlineReached);
    assert!(!result.converged);
    assert_eq!(result.iters, 0);
    assert_eq!(result.argument, vec![5.0, 5.0]);
    assert_eq!(result.f_evals, 1);
}
