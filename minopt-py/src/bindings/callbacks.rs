use numpy::IntoPyArray;
use numpy::PyArray1;
use numpy::{PyArrayMethods, PyUntypedArrayMethods};
use pyo3::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// First Python exception raised by a callback during one solve.
#[derive(Clone, Default)]
pub(crate) struct PyErrState {
    inner: Rc<RefCell<Option<PyErr>>>,
}

impl PyErrState {
    pub(crate) fn has_error(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub(crate) fn set_once(&self, err: PyErr) {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    pub(crate) fn take(&self) -> Option<PyErr> {
        self.inner.borrow_mut().take()
    }
}

/// Accepts a 1-D float ndarray (any strides) or anything that extracts to
/// `list[float]`.
fn extract_vec1(py: Python<'_>, out: &Bound<'_, PyAny>) -> PyResult<Vec<f64>> {
    if let Ok(arr) = out.cast::<PyArray1<f64>>() {
        let owned;
        let arr_c = if arr.is_contiguous() {
            arr
        } else {
            owned = arr.to_owned_array().into_pyarray(py);
            &owned
        };
        let slice = unsafe { arr_c.as_slice()? };
        return Ok(slice.to_vec());
    }

    out.extract::<Vec<f64>>()
}

/// Python objective and optional gradient, called with the GIL held.
///
/// A raised exception is stored in the shared state and the callback
/// returns NaN, which makes the solver stop at once with a non-finite
/// error. Callers check the state before mapping that error.
pub(crate) struct PyObjectiveCallbacks {
    value_fn: Py<PyAny>,
    grad_fn: Option<Py<PyAny>>,
    err: PyErrState,
}

impl PyObjectiveCallbacks {
    pub(crate) fn new(value_fn: Py<PyAny>, grad_fn: Option<Py<PyAny>>, err: PyErrState) -> Self {
        Self {
            value_fn,
            grad_fn,
            err,
        }
    }

    pub(crate) fn value(&self, py: Python<'_>, x: &[f64]) -> f64 {
        if self.err.has_error() {
            return f64::NAN;
        }

        let out = self.value_fn.bind(py).call1((x.to_vec(),));
        match out.and_then(|v| v.extract::<f64>()) {
            Ok(v) => v,
            Err(e) => {
                self.err.set_once(e);
                f64::NAN
            }
        }
    }

    /// Replace `grad_out` with the callback's result; a wrong length is left
    /// for the solver to report.
    pub(crate) fn gradient_into(&self, py: Python<'_>, x: &[f64], grad_out: &mut Vec<f64>) {
        if self.err.has_error() {
            grad_out.fill(f64::NAN);
            return;
        }
        let Some(grad_fn) = &self.grad_fn else {
            grad_out.fill(f64::NAN);
            return;
        };

        let result: PyResult<Vec<f64>> = (|| {
            let out = grad_fn.bind(py).call1((x.to_vec(),))?;
            extract_vec1(py, &out)
        })();

        match result {
            Ok(g) => *grad_out = g,
            Err(e) => {
                self.err.set_once(e);
                grad_out.fill(f64::NAN);
            }
        }
    }
}
