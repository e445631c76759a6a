use minopt_core::{
    CoordinateDescent, GradientDescent, Lbfgs, MinimizeError, NonFinite,
};

fn bowl(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn bowl_grad(x: &[f64], grad: &mut Vec<f64>) {
    for (g, v) in grad.iter_mut().zip(x) {
        *g = 2.0 * v;
    }
}

#[test]
fn empty_start_is_rejected_by_every_solver() {
    let err = CoordinateDescent::new().minimize_with_fn(&[], bowl).unwrap_err();
    assert_eq!(err, MinimizeError::EmptyPoint);
    let err = GradientDescent::new()
        .minimize_with_fn(&[], bowl, bowl_grad)
        .unwrap_err();
    assert_eq!(err, MinimizeError::EmptyPoint);
    let err = Lbfgs::new().minimize_with_fn(&[], bowl, bowl_grad).unwrap_err();
    assert_eq!(err, MinimizeError::EmptyPoint);
}

#[test]
fn non_finite_start_is_rejected() {
    let err = Lbfgs::new()
        .minimize_with_fn(&[1.0, f64::NAN], bowl, bowl_grad)
        .unwrap_err();
    assert_eq!(
        err,
        MinimizeError::NonFiniteValue {
            quantity: NonFinite::InitialPoint,
            iter: 0
        }
    );
}

#[test]
fn gradient_of_wrong_length_is_a_dimension_mismatch() {
    let long_grad = |x: &[f64], grad: &mut Vec<f64>| {
        bowl_grad(x, grad);
        grad.push(0.0);
    };
    let err = GradientDescent::new()
        .minimize_with_fn(&[1.0, 2.0], bowl, long_grad)
        .unwrap_err();
    assert_eq!(
        err,
        MinimizeError::DimensionMismatch {
            expected: 2,
            found: 3
        }
    );

    let short_grad = |_x: &[f64], grad: &mut Vec<f64>| grad.clear();
    let err = Lbfgs::new()
        .minimize_with_fn(&[1.0, 2.0], bowl, short_grad)
        .unwrap_err();
    assert_eq!(
        err,
        MinimizeError::DimensionMismatch {
            expected: 2,
            found: 0
        }
    );
}

#[test]
fn nan_objective_aborts_the_solve() {
    let err = GradientDescent::new()
        .minimize_with_fn(&[1.0], |_x: &[f64]| f64::NAN, bowl_grad)
        .unwrap_err();
    assert_eq!(
        err,
        MinimizeError::NonFiniteValue {
            quantity: NonFinite::Objective,
            iter: 0
        }
    );
}

#[test]
fn objective_blowing_up_mid_run_reports_the_iteration() {
    // Finite on x < 2; coordinate descent walks from 0 toward 3.
    let cliff = |x: &[f64]| {
        if x[0] < 2.0 {
            (x[0] - 3.0) * (x[0] - 3.0)
        } else {
            f64::INFINITY
        }
    };
    let err = CoordinateDescent {
        max_iters: 200,
        seed: Some(1),
        ..CoordinateDescent::new()
    }
    .minimize_with_fn(&[0.0], cliff)
    .unwrap_err();

    match err {
        MinimizeError::NonFiniteValue { quantity, iter } => {
            assert_eq!(quantity, NonFinite::Objective);
            assert!(iter > 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn infinite_gradient_is_reported() {
    let err = Lbfgs::new()
        .minimize_with_fn(
            &[1.0],
            bowl,
            |_x: &[f64], grad: &mut Vec<f64>| grad[0] = f64::INFINITY,
        )
        .unwrap_err();
    assert_eq!(
        err,
        MinimizeError::NonFiniteValue {
            quantity: NonFinite::Gradient,
            iter: 0
        }
    );
}

#[test]
fn invalid_configuration_is_rejected_before_evaluating() {
    let calls = std::cell::Cell::new(0);
    let counted = |x: &[f64]| {
        calls.set(calls.get() + 1);
        bowl(x)
    };

    let err = GradientDescent {
        shrink: 1.5,
        ..GradientDescent::new()
    }
    .minimize_with_fn(&[1.0], counted, bowl_grad)
    .unwrap_err();
    assert!(matches!(err, MinimizeError::InvalidConfig(_)));

    let err = Lbfgs {
        memory: 0,
        ..Lbfgs::new()
    }
    .minimize_with_fn(&[1.0], counted, bowl_grad)
    .unwrap_err();
    assert!(matches!(err, MinimizeError::InvalidConfig(_)));

    let err = CoordinateDescent {
        step_size: -1.0,
        ..CoordinateDescent::new()
    }
    .minimize_with_fn(&[1.0], counted)
    .unwrap_err();
    assert!(matches!(err, MinimizeError::InvalidConfig(_)));

    assert_eq!(calls.get(), 0);
}

#[test]
fn error_messages_name_the_problem() {
    let err = MinimizeError::NonFiniteValue {
        quantity: NonFinite::Curvature,
        iter: 7,
    };
    assert_eq!(err.to_string(), "non-finite curvature (rho) at iteration 7");
    assert_eq!(
        MinimizeError::DimensionMismatch {
            expected: 3,
            found: 2
        }
        .to_string(),
        "dimension mismatch: expected 3, got 2"
    );
}

#[test]
fn gradient_with_unwritten_components_is_a_dimension_mismatch() {
    // Writes only the first of two components.
    let partial_grad = |x: &[f64], grad: &mut Vec<f64>| grad[0] = 2.0 * x[0];
    let expected = MinimizeError::DimensionMismatch {
        expected: 2,
        found: 1,
    };

    let err = GradientDescent::new()
        .minimize_with_fn(&[1.0, 5.0], bowl, partial_grad)
        .unwrap_err();
    assert_eq!(err, expected);

    let err = Lbfgs::new()
        .minimize_with_fn(&[1.0, 5.0], bowl, partial_grad)
        .unwrap_err();
    assert_eq!(err, expected);
}

#[test]
fn gradient_computing_nan_is_still_non_finite() {
    let err = GradientDescent::new()
        .minimize_with_fn(
            &[1.0, 5.0],
            bowl,
            |x: &[f64], grad: &mut Vec<f64>| {
                grad[0] = 2.0 * x[0];
                grad[1] = f64::NAN;
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        MinimizeError::NonFiniteValue {
            quantity: NonFinite::Gradient,
            iter: 0
        }
    );
}
