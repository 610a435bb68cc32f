use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` unless the
/// determinant `d1 × d2` is smaller than `epsilon` in magnitude (parallel or
/// degenerate lines).
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    epsilon: f64,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.is_nan() || cross.abs() < epsilon {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    if t.is_finite() && u.is_finite() {
        Some((t, u))
    } else {
        None
    }
}

/// Intersection point of two infinite lines, or `None` when they are parallel.
#[must_use]
pub fn line_line_point_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    epsilon: f64,
) -> Option<Point2> {
    line_line_intersect_2d(p1, d1, p2, d2, epsilon).map(|(t, _)| point_at(p1, d1, t))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}
