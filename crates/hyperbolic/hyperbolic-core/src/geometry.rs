//! Geometry kernel: points, circles, tangent construction and circle-circle
//! intersection.
//!
//! Everything here is pure arithmetic over canvas coordinates. Degenerate
//! inputs yield `None`; the renderer skips the affected arc or vertex for the
//! current frame.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }
}

/// Both solutions of a two-circle intersection.
///
/// `first` lies on the positive side of the perpendicular through the chord
/// midpoint (`+(-dy, dx)` from the first circle towards the second); `second`
/// is its mirror image across the line of centers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub first: Point,
    pub second: Point,
}

/// The two points where lines through `anchor` touch `circle`.
///
/// Returns `None` when `anchor` lies strictly inside the circle or coincides
/// with its center.
pub fn tangent_points(anchor: Point, circle: Circle) -> Option<[Point; 2]> {
    let dx = circle.center.x - anchor.x;
    let dy = circle.center.y - anchor.y;
    let d = dx.hypot(dy);
    if d == 0.0 || d < circle.radius {
        return None;
    }
    let spread = (circle.radius / d).asin();
    let bearing = dy.atan2(dx);
    let r = circle.radius;

    let t = bearing - spread;
    let first = Point::new(circle.center.x + r * t.sin(), circle.center.y - r * t.cos());
    let t = bearing + spread;
    let second = Point::new(circle.center.x - r * t.sin(), circle.center.y + r * t.cos());
    Some([first, second])
}

/// Length of the tangent segment from `anchor` to `circle`.
///
/// A circle centered at `anchor` with this radius meets `circle` at a right
/// angle, which is how each line of the vertical pencil becomes an arc that
/// ends on the ideal point circle. For `anchor` on the circle the result is
/// zero; for a zero radius it is the plain center distance.
pub fn tangent_arc_radius(anchor: Point, circle: Circle) -> Option<f64> {
    let [touch, _] = tangent_points(anchor, circle)?;
    let dist = anchor.distance(touch);
    dist.is_finite().then_some(dist)
}

/// Intersect two circles.
///
/// `None` when the circles are apart (`d > r0 + r1`), one contains the other
/// (`d < |r0 - r1|`) or they are concentric.
pub fn circle_intersection(c0: Circle, c1: Circle) -> Option<Intersection> {
    let (r0, r1) = (c0.radius, c1.radius);
    let dx = c1.center.x - c0.center.x;
    let dy = c1.center.y - c0.center.y;
    let d = dx.hypot(dy);

    if d > r0 + r1 || d < (r0 - r1).abs() || d == 0.0 {
        return None;
    }
    if !d.is_finite() {
        return None;
    }

    // Distance from c0 to the chord midpoint along the line of centers.
    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let mx = c0.center.x + dx * a / d;
    let my = c0.center.y + dy * a / d;

    // Rounding can push r0^2 - a^2 just below zero for tangent circles.
    let h = (r0 * r0 - a * a).max(0.0).sqrt();
    let rx = -dy * (h / d);
    let ry = dx * (h / d);

    Some(Intersection {
        first: Point::new(mx + rx, my + ry),
        second: Point::new(mx - rx, my - ry),
    })
}
