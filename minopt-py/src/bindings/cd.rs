use minopt_core::solvers::cd::CoordinateDescent;
use pyo3::prelude::*;

use crate::bindings::callbacks::{PyErrState, PyObjectiveCallbacks};
use crate::bindings::outcome::into_py_result;

/// Derivative-free randomized coordinate descent exposed to Python.
///
/// f: callable(x: list[float]) -> float
/// seed: fixes the coordinate order; None draws a fresh one per call
/// history: if true, return an additional list[dict] with per-sweep trace rows
#[pyfunction(
    signature = (
        f,
        x0,
        max_iters = None,
        step_size = None,
        tol_deriv = None,
        seed = None,
        verbose = None,
        history = None
    )
)]
fn powell(
    py: Python<'_>,
    f: Py<PyAny>,
    x0: Vec<f64>,
    max_iters: Option<usize>,
    step_size: Option<f64>,
    tol_deriv: Option<f64>,
    seed: Option<u64>,
    verbose: Option<bool>,
    history: Option<bool>,
) -> PyResult<Py<PyAny>> {
    let defaults = CoordinateDescent::new();
    let solver = CoordinateDescent {
        max_iters: max_iters.unwrap_or(defaults.max_iters),
        step_size: step_size.unwrap_or(defaults.step_size),
        tol_deriv: tol_deriv.unwrap_or(defaults.tol_deriv),
        seed,
        verbose: verbose.unwrap_or(false),
        collect_trace: history.unwrap_or(false),
        ..defaults
    };

    let err_state = PyErrState::default();
    let callbacks = PyObjectiveCallbacks::new(f, None, err_state.clone());

    let result = solver.minimize_with_fn(&x0, |x: &[f64]| callbacks.value(py, x));
    into_py_result(py, result, &err_state)
}

pub(crate) fn register(module: &Bound<PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(powell, module)?)?;
    Ok(())
}
