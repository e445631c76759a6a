//! Reference objectives with known minimizers.

use super::objective::{DifferentiableObjective, Objective};

/// Separable quadratic f(x) = sum_i w_i (x_i - c_i)^2.
///
/// Minimizer is x = c with f = 0.
#[derive(Clone, Debug)]
pub struct Quadratic {
    pub center: Vec<f64>,
    pub weights: Vec<f64>,
}

impl Quadratic {
    /// Unit weights around `center`.
    pub fn centered(center: Vec<f64>) -> Self {
        let weights = vec![1.0; center.len()];
        Self { center, weights }
    }
}

impl Objective for Quadratic {
    fn value(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.center.len());
        debug_assert_eq!(x.len(), self.weights.len());
        x.iter()
            .zip(&self.center)
            .zip(&self.weights)
            .map(|((xi, ci), wi)| wi * (xi - ci) * (xi - ci))
            .sum()
    }
}

impl DifferentiableObjective for Quadratic {
    fn gradient(&self, x: &[f64], grad: &mut Vec<f64>) {
        debug_assert_eq!(x.len(), self.center.len());
        debug_assert_eq!(x.len(), self.weights.len());
        grad.clear();
        grad.extend(
            x.iter()
                .zip(&self.center)
                .zip(&self.weights)
                .map(|((xi, ci), wi)| 2.0 * wi * (xi - ci)),
        );
    }
}

/// 2D Rosenbrock function.
/// f(x, y) = (a - x)^2 + b (y - x^2)^2
#[derive(Clone, Copy, Debug)]
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl Objective for Rosenbrock {
    fn value(&self, x: &[f64]) -> f64 {
        let x0 = x[0];
        let x1 = x[1];
        (self.a - x0).powi(2) + self.b * (x1 - x0 * x0).powi(2)
    }
}

impl DifferentiableObjective for Rosenbrock {
    fn gradient(&self, x: &[f64], grad: &mut Vec<f64>) {
        let x0 = x[0];
        let x1 = x[1];

        // df/dx = -2(a - x) - 4bx(y - x^2)
        grad[0] = -2.0 * (self.a - x0) - 4.0 * self.b * x0 * (x1 - x0 * x0);
        // df/dy = 2b(y - x^2)
        grad[1] = 2.0 * self.b * (x1 - x0 * x0);
    }
}
