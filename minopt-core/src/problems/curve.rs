//! Closest point on a parametric curve.

use std::f64::consts::TAU;

use crate::error::Result;
use crate::solvers::gd::GradientDescent;

use super::finite_diff::FiniteDifference;
use super::objective::Objective;

/// A curve u -> R^3, usually parameterized over [0, 1].
pub trait ParametricCurve {
    fn point(&self, u: f64) -> [f64; 3];
}

impl<F> ParametricCurve for F
where
    F: Fn(f64) -> [f64; 3],
{
    fn point(&self, u: f64) -> [f64; 3] {
        self(u)
    }
}

/// Straight segment, `start` at u = 0 and `end` at u = 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

impl ParametricCurve for LineSegment {
    fn point(&self, u: f64) -> [f64; 3] {
        let mut p = [0.0; 3];
        for k in 0..3 {
            p[k] = (1.0 - u) * self.start[k] + u * self.end[k];
        }
        p
    }
}

/// Unit circle in the xy-plane, one turn per unit of u.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitCircle;

impl ParametricCurve for UnitCircle {
    fn point(&self, u: f64) -> [f64; 3] {
        let t = u * TAU;
        [t.cos(), t.sin(), 0.0]
    }
}

/// Squared distance between `curve(u[0])` and `target`.
#[derive(Clone, Copy, Debug)]
pub struct ClosestPointObjective<'a, C: ?Sized> {
    pub curve: &'a C,
    pub target: [f64; 3],
}

impl<C: ParametricCurve + ?Sized> Objective for ClosestPointObjective<'_, C> {
    fn value(&self, u: &[f64]) -> f64 {
        let p = self.curve.point(u[0]);
        p.iter()
            .zip(&self.target)
            .map(|(pi, ti)| (pi - ti) * (pi - ti))
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurveProjection {
    pub parameter: f64,
    pub point: [f64; 3],
    pub distance_sq: f64,
    pub converged: bool,
}

/// Locally closest curve point to `target`, searching from `u0`.
///
/// Runs default gradient descent on a forward-difference derivative, so the
/// answer is the nearest local minimum of the distance, not necessarily the
/// global one.
pub fn project_onto_curve<C>(curve: &C, target: [f64; 3], u0: f64) -> Result<CurveProjection>
where
    C: ParametricCurve + ?Sized,
{
    project_onto_curve_with(&GradientDescent::new(), curve, target, u0)
}

/// As [`project_onto_curve`] with an explicit solver configuration.
pub fn project_onto_curve_with<C>(
    solver: &GradientDescent,
    curve: &C,
    target: [f64; 3],
    u0: f64,
) -> Result<CurveProjection>
where
    C: ParametricCurve + ?Sized,
{
    let objective = FiniteDifference::new(ClosestPointObjective { curve, target });
    let solution = solver.minimize(&objective, &[u0])?;
    let parameter = solution.argument[0];
    Ok(CurveProjection {
        parameter,
        point: curve.point(parameter),
        distance_sq: solution.value,
        converged: solution.converged,
    })
}
