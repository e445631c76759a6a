use minopt_core::solvers::lbfgs::{Lbfgs, StepAcceptance};
use pyo3::prelude::*;

use crate::bindings::callbacks::{PyErrState, PyObjectiveCallbacks};
use crate::bindings::outcome::into_py_result;

/// L-BFGS optimizer exposed to Python.
///
/// f:    callable(x: list[float]) -> float
/// grad: callable(x: list[float]) -> list[float] | ndarray
/// strict_descent: reject steps that raise f instead of taking them
/// history: if true, return an additional list[dict] with per-iteration trace rows
#[pyfunction(
    signature = (
        f,
        grad,
        x0,
        max_iters = None,
        step_size = None,
        memory = None,
        tol_grad = None,
        strict_descent = None,
        verbose = None,
        history = None
    )
)]
fn lbfgs(
    py: Python<'_>,
    f: Py<PyAny>,
    grad: Py<PyAny>,
    x0: Vec<f64>,
    max_iters: Option<usize>,
    step_size: Option<f64>,
    memory: Option<usize>,
    tol_grad: Option<f64>,
    strict_descent: Option<bool>,
    verbose: Option<bool>,
    history: Option<bool>,
) -> PyResult<Py<PyAny>> {
    let defaults = Lbfgs::new();
    let acceptance = if strict_descent.unwrap_or(false) {
        StepAcceptance::StrictDescent
    } else {
        StepAcceptance::Always
    };
    let solver = Lbfgs {
        max_iters: max_iters.unwrap_or(defaults.max_iters),
        step_size: step_size.unwrap_or(defaults.step_size),
        memory: memory.unwrap_or(defaults.memory),
        tol_grad: tol_grad.unwrap_or(defaults.tol_grad),
        acceptance,
        verbose: verbose.unwrap_or(false),
        collect_trace: history.unwrap_or(false),
        ..defaults
    };

    let err_state = PyErrState::default();
    let callbacks = PyObjectiveCallbacks::new(f, Some(grad), err_state.clone());

    let result = solver.minimize_with_fn(
        &x0,
        |x: &[f64]| callbacks.value(py, x),
        |x: &[f64], grad_out: &mut Vec<f64>| callbacks.gradient_into(py, x, grad_out),
    );
    into_py_result(py, result, &err_state)
}

pub(crate) fn register(module: &Bound<PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(lbfgs, module)?)?;
    Ok(())
}
