use minopt_core::problems::curve::{project_onto_curve, LineSegment, UnitCircle};

fn main() -> minopt_core::Result<()> {
    let segment = LineSegment {
        start: [1.0, -2.0, -2.5],
        end: [-1.0, 2.0, 2.5],
    };
    let on_segment = project_onto_curve(&segment, [0.0, 0.0, 0.0], 0.0)?;
    println!(
        "segment: u={:.6} point={:?} d^2={:.3e}",
        on_segment.parameter, on_segment.point, on_segment.distance_sq
    );

    let on_circle = project_onto_curve(&UnitCircle, [2.0, 0.0, 0.0], 0.1)?;
    println!(
        "circle:  u={:.6} point={:?} d^2={:.3e}",
        on_circle.parameter, on_circle.point, on_circle.distance_sq
    );

    // the helix winds twice; which turn is found depends on the start
    let helix = |u: f64| {
        let t = 4.0 * std::f64::consts::PI * u;
        [t.cos(), t.sin(), u]
    };
    for u0 in [0.1, 0.6] {
        let p = project_onto_curve(&helix, [1.0, 0.0, 0.5], u0)?;
        println!("helix from u0={u0}: u={:.6} converged={}", p.parameter, p.converged);
    }
    Ok(())
}
