use minopt_core::{MinimizeError, Solution};
use pyo3::exceptions::{PyArithmeticError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyTuple;
use pyo3::IntoPyObjectExt;

use crate::bindings::callbacks::PyErrState;
use crate::bindings::trace::trace_records_to_pylist;

fn to_py_err(err: MinimizeError) -> PyErr {
    let msg = err.to_string();
    match err {
        MinimizeError::EmptyPoint
        | MinimizeError::DimensionMismatch { .. }
        | MinimizeError::InvalidConfig(_) => PyValueError::new_err(msg),
        MinimizeError::NonFiniteValue { .. } => PyArithmeticError::new_err(msg),
        MinimizeError::LineSearchExhausted { .. } => PyRuntimeError::new_err(msg),
    }
}

/// `(x, f, converged, iters)`, with the trace list appended when one was
/// collected.
///
/// An exception raised by a callback takes priority over the solver error
/// it caused.
pub(crate) fn into_py_result(
    py: Python<'_>,
    result: minopt_core::Result<Solution>,
    err_state: &PyErrState,
) -> PyResult<Py<PyAny>> {
    if let Some(e) = err_state.take() {
        return Err(e);
    }
    let mut solution = result.map_err(to_py_err)?;

    let mut items = vec![
        solution.argument.into_py_any(py)?,
        solution.value.into_py_any(py)?,
        solution.converged.into_py_any(py)?,
        solution.iters.into_py_any(py)?,
    ];
    if let Some(trace) = solution.trace.take() {
        items.push(trace_records_to_pylist(py, trace)?);
    }
    let out = PyTuple::new(py, items)?;
    Ok(out.into_any().unbind())
}
