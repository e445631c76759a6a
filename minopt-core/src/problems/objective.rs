/// Objective function to be minimized.
///
/// Implementations must be pure: solvers may evaluate the same point more
/// than once and rely on getting the same value back.
pub trait Objective {
    /// Function value f(x) at x.
    fn value(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// Objective that also provides its gradient.
pub trait DifferentiableObjective: Objective {
    /// Write the gradient of f at x into grad.
    ///
    /// grad arrives with `x.len()` placeholder entries, and every one of them
    /// must be overwritten. Leaving any unwritten, or the buffer at another
    /// length, is reported as a dimension mismatch.
    fn gradient(&self, x: &[f64], grad: &mut Vec<f64>);
}

/// Pairs a value closure with a gradient closure.
#[derive(Clone, Copy, Debug)]
pub struct FnObjective<F, G> {
    pub value_fn: F,
    pub grad_fn: G,
}

impl<F, G> FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut Vec<f64>),
{
    pub fn new(value_fn: F, grad_fn: G) -> Self {
        Self { value_fn, grad_fn }
    }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, x: &[f64]) -> f64 {
        (self.value_fn)(x)
    }
}

impl<F, G> DifferentiableObjective for FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut Vec<f64>),
{
    fn gradient(&self, x: &[f64], grad: &mut Vec<f64>) {
        (self.grad_fn)(x, grad)
    }
}
