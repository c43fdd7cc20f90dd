//! The two pencils of parallel lines.
//!
//! Pencil A lines all run between the two ideal points: for scalar `b` the
//! line is a circle through the band centered at
//! `center_x - min_radius / b - b * band_half_width` with radius
//! `|min_radius / b|`. Pencil B lines are circles centered on the vertical
//! axis at `center_y - c`, `c = scale / b - scale * sign(b)`, whose radius is
//! the tangent length to the right ideal point circle.
//!
//! At `b == 0` both degenerate into straight lines through the center.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::geometry::{tangent_arc_radius, Circle};
use crate::phase::Sign;
use crate::viewport::Viewport;

/// How one pencil line is drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PencilLine {
    Arc(Circle),
    /// Straight line `x = const` across the full canvas height.
    Vertical { x: f64 },
    /// Straight line `y = const` across the full canvas width.
    Horizontal { y: f64 },
}

/// Pencil A circle for scalar `b`, `None` at the point at infinity.
pub fn pencil_a_circle(cfg: &Config, vp: &Viewport, b: f64) -> Option<Circle> {
    if b == 0.0 {
        return None;
    }
    let a = cfg.min_radius / b;
    let x = vp.center_x - a - b * cfg.band_half_width;
    Some(Circle::new(x, vp.center_y, a.abs()))
}

/// Pencil B circle for scalar `b`. `None` at the point at infinity or when
/// the center falls inside the ideal point circle.
pub fn pencil_b_circle(cfg: &Config, vp: &Viewport, b: f64) -> Option<Circle> {
    if b == 0.0 {
        return None;
    }
    let c = cfg.vertical_scale / b - cfg.vertical_scale * Sign::of(b).as_f64();
    let mut circle = Circle::new(vp.center_x, vp.center_y - c, 0.0);
    let [_, right] = vp.ideal_points(cfg);
    circle.radius = tangent_arc_radius(circle.center, right)?;
    Some(circle)
}

/// Pencil A line for scalar `b`.
pub fn pencil_a_line(cfg: &Config, vp: &Viewport, b: f64) -> PencilLine {
    match pencil_a_circle(cfg, vp, b) {
        Some(circle) => PencilLine::Arc(circle),
        None => PencilLine::Vertical { x: vp.center_x },
    }
}

/// Pencil B line for scalar `b`; `None` when the arc cannot be built.
pub fn pencil_b_line(cfg: &Config, vp: &Viewport, b: f64) -> Option<PencilLine> {
    if b == 0.0 {
        return Some(PencilLine::Horizontal { y: vp.center_y });
    }
    pencil_b_circle(cfg, vp, b).map(PencilLine::Arc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Config, Viewport) {
        (Config::default(), Viewport::new(800.0, 600.0).unwrap())
    }

    #[test]
    fn pencil_a_extremes_touch_the_ideal_points() {
        let (cfg, vp) = setup();
        let [left, right] = vp.ideal_points(&cfg);
        assert_eq!(pencil_a_circle(&cfg, &vp, 1.0), Some(left));
        assert_eq!(pencil_a_circle(&cfg, &vp, -1.0), Some(right));
        assert_eq!(
            pencil_a_line(&cfg, &vp, 0.0),
            PencilLine::Vertical { x: 400.0 }
        );
    }

    #[test]
    fn pencil_b_is_orthogonal_to_right_ideal_point() {
        let (cfg, vp) = setup();
        let [_, right] = vp.ideal_points(&cfg);
        for b in [-0.9, -0.3, 0.2, 0.75, 1.0] {
            let circle = pencil_b_circle(&cfg, &vp, b).unwrap();
            let d = circle.center.distance(right.center);
            let expected = (d * d - right.radius * right.radius).sqrt();
            assert!((circle.radius - expected).abs() < 1e-9, "b={b}");
        }
        assert_eq!(
            pencil_b_line(&cfg, &vp, 0.0),
            Some(PencilLine::Horizontal { y: 300.0 })
        );
    }
}
