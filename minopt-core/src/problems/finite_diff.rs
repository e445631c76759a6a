use super::objective::{DifferentiableObjective, Objective};

/// Forward-difference gradient for an objective that has none.
///
/// Costs `n + 1` objective evaluations per gradient.
#[derive(Clone, Copy, Debug)]
pub struct FiniteDifference<O> {
    pub objective: O,
    pub step: f64,
}

impl<O: Objective> FiniteDifference<O> {
    /// Wrap with the default step of `1e-6`.
    pub fn new(objective: O) -> Self {
        Self::with_step(objective, 1e-6)
    }

    pub fn with_step(objective: O, step: f64) -> Self {
        Self { objective, step }
    }
}

impl<O: Objective> Objective for FiniteDifference<O> {
    fn value(&self, x: &[f64]) -> f64 {
        self.objective.value(x)
    }
}

impl<O: Objective> DifferentiableObjective for FiniteDifference<O> {
    fn gradient(&self, x: &[f64], grad: &mut Vec<f64>) {
        let f0 = self.objective.value(x);
        let mut xp = x.to_vec();
        grad.resize(x.len(), 0.0);
        for i in 0..x.len() {
            xp[i] += self.step;
            grad[i] = (self.objective.value(&xp) - f0) / self.step;
            xp[i] = x[i];
        }
    }
}
