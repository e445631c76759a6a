use crate::error::{MinimizeError, NonFinite, Result};
use crate::problems::objective::{DifferentiableObjective, Objective};

/// Checked access to a caller's objective during one solve.
///
/// Counts evaluations and turns wrong-length or non-finite outputs into
/// errors tagged with the current outer iteration.
pub(crate) struct Evaluator<'a, O: ?Sized> {
    objective: &'a O,
    dim: usize,
    iter: usize,
    f_evals: usize,
    g_evals: usize,
}

impl<'a, O: Objective + ?Sized> Evaluator<'a, O> {
    pub(crate) fn new(objective: &'a O, x0: &[f64]) -> Result<Self> {
        if x0.is_empty() {
            return Err(MinimizeError::EmptyPoint);
        }
        if x0.iter().any(|v| !v.is_finite()) {
            return Err(MinimizeError::NonFiniteValue {
                quantity: NonFinite::InitialPoint,
                iter: 0,
            });
        }
        Ok(Self {
            objective,
            dim: x0.len(),
            iter: 0,
            f_evals: 0,
            g_evals: 0,
        })
    }

    pub(crate) fn set_iter(&mut self, iter: usize) {
        self.iter = iter;
    }

    pub(crate) fn counts(&self) -> (usize, usize) {
        (self.f_evals, self.g_evals)
    }

    pub(crate) fn non_finite(&self, quantity: NonFinite) -> MinimizeError {
        MinimizeError::NonFiniteValue {
            quantity,
            iter: self.iter,
        }
    }

    pub(crate) fn value(&mut self, x: &[f64]) -> Result<f64> {
        debug_assert_eq!(x.len(), self.dim);
        self.f_evals += 1;
        let f = self.objective.value(x);
        if f.is_finite() {
            Ok(f)
        } else {
            Err(self.non_finite(NonFinite::Objective))
        }
    }
}

/// Quiet NaN with a payload arithmetic never produces; marks gradient slots
/// the objective did not write.
const UNWRITTEN: u64 = 0x7ff8_0000_dead_beef;

impl<'a, O: DifferentiableObjective + ?Sized> Evaluator<'a, O> {
    pub(crate) fn gradient(&mut self, x: &[f64], grad: &mut Vec<f64>) -> Result<()> {
        grad.clear();
        grad.resize(self.dim, f64::from_bits(UNWRITTEN));
        self.g_evals += 1;
        self.objective.gradient(x, grad);
        if grad.len() != self.dim {
            return Err(MinimizeError::DimensionMismatch {
                expected: self.dim,
                found: grad.len(),
            });
        }
        let unwritten = grad.iter().filter(|g| g.to_bits() == UNWRITTEN).count();
        if unwritten > 0 {
            return Err(MinimizeError::DimensionMismatch {
                expected: self.dim,
                found: self.dim - unwritten,
            });
        }
        if grad.iter().any(|g| !g.is_finite()) {
            return Err(self.non_finite(NonFinite::Gradient));
        }
        Ok(())
    }
}
