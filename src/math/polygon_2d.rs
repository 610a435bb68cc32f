use super::{Point2, Vector2, TOLERANCE};

/// Mean of the polygon's vertices, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Some(Point2::from(sum / points.len() as f64))
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// Returns `None` for a zero-length (or non-finite) segment.
#[must_use]
pub fn segment_direction(a: &Point2, b: &Point2) -> Option<Vector2> {
    let d = b - a;
    let len = d.norm();
    if !len.is_finite() || len < TOLERANCE {
        return None;
    }
    Some(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let c = vertex_centroid(&pts).unwrap();
        assert!((c.x - 2.0).abs() < TOLERANCE);
        assert!((c.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_empty_is_none() {
        assert!(vertex_centroid(&[]).is_none());
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point2::new(1.0, 1.0);
        assert!(segment_direction(&a, &a).is_none());
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
