pub mod curve;
pub mod finite_diff;
pub mod objective;
pub mod test_functions;

pub use curve::{
    project_onto_curve, project_onto_curve_with, ClosestPointObjective, CurveProjection,
    LineSegment, ParametricCurve, UnitCircle,
};
pub use finite_diff::FiniteDifference;
pub use objective::{DifferentiableObjective, FnObjective, Objective};
