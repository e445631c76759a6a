use minopt_core::solvers::SolverTraceRecord;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

pub(crate) fn trace_records_to_pylist(
    py: Python<'_>,
    records: Vec<SolverTraceRecord>,
) -> PyResult<Py<PyAny>> {
    let list = PyList::empty(py);
    for row in records {
        let d = PyDict::new(py);
        d.set_item("solver", row.solver)?;
        d.set_item("iter", row.iter)?;
        d.set_item("f", row.f)?;
        d.set_item("grad_max", row.grad_max)?;
        d.set_item("alpha", row.alpha)?;
        d.set_item("history_len", row.history_len)?;
        d.set_item("note", row.note)?;
        list.append(d)?;
    }
    Ok(list.into_any().unbind())
}
