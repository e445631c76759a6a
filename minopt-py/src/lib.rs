use pyo3::prelude::*;

mod bindings;

/// Python module definition
#[pymodule]
fn minopt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    bindings::cd::register(m)?;
    bindings::gd::register(m)?;
    bindings::lbfgs::register(m)?;
    Ok(())
}
