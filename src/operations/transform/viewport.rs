use crate::config::{FitPolicy, ViewportConfig};
use crate::math::{Point2, TOLERANCE};
use crate::operations::query::PlanBounds;
use crate::plan::Point;

/// Maps plan coordinates into a display frame.
///
/// The scale is uniform (aspect-preserving) and the content is centered in
/// the padded frame:
/// `transform(p) = ((p.x - min_x) * scale + offset_x, (p.z - min_z) * scale + offset_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMapper {
    min_x: f64,
    min_z: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl ViewportMapper {
    /// Fits `bounds` into the frame described by `config`.
    #[must_use]
    pub fn new(bounds: &PlanBounds, config: &ViewportConfig) -> Self {
        Self::fit(bounds, config.width, config.height, config.padding, config.fit)
    }

    /// Fits `bounds` into a `width × height` frame inset by `padding`.
    ///
    /// A zero extent along an axis defaults that axis' scale factor to 1.
    #[must_use]
    pub fn fit(bounds: &PlanBounds, width: f64, height: f64, padding: f64, fit: FitPolicy) -> Self {
        let plan_w = bounds.width();
        let plan_d = bounds.depth();
        let avail_w = width - 2.0 * padding;
        let avail_h = height - 2.0 * padding;

        let scale_x = if plan_w > TOLERANCE { avail_w / plan_w } else { 1.0 };
        let scale_y = if plan_d > TOLERANCE { avail_h / plan_d } else { 1.0 };
        let scale = scale_x.min(scale_y) * fit.shrink;

        Self {
            min_x: bounds.min_x,
            min_z: bounds.min_z,
            scale,
            offset_x: padding + (avail_w - plan_w * scale) * 0.5,
            offset_y: padding + (avail_h - plan_d * scale) * 0.5,
        }
    }

    /// Uniform plan-to-display scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Display position of the plan's minimum corner.
    #[must_use]
    pub fn offset(&self) -> Point2 {
        Point2::new(self.offset_x, self.offset_y)
    }

    /// Maps one plan point into display coordinates.
    #[must_use]
    pub fn transform(&self, p: Point) -> Point2 {
        Point2::new(
            (p.x - self.min_x) * self.scale + self.offset_x,
            (p.z - self.min_z) * self.scale + self.offset_y,
        )
    }

    /// Maps a sequence of plan points.
    #[must_use]
    pub fn transform_all(&self, points: &[Point]) -> Vec<Point2> {
        points.iter().map(|&p| self.transform(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn bounds(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> PlanBounds {
        PlanBounds { min_x, max_x, min_z, max_z }
    }

    #[test]
    fn square_plan_in_landscape_frame_is_centered() {
        let m = ViewportMapper::fit(&bounds(0.0, 10.0, 0.0, 10.0), 800.0, 600.0, 20.0, FitPolicy::default());
        assert_abs_diff_eq!(m.scale(), 56.0);
        assert_abs_diff_eq!(m.offset().x, 120.0);
        assert_abs_diff_eq!(m.offset().y, 20.0);

        let far = m.transform(Point::new(10.0, 10.0));
        assert_abs_diff_eq!(far.x, 680.0);
        assert_abs_diff_eq!(far.y, 580.0);
    }

    #[test]
    fn offset_plan_maps_minimum_to_offset() {
        let m = ViewportMapper::fit(&bounds(-5.0, 5.0, 100.0, 120.0), 400.0, 400.0, 0.0, FitPolicy::default());
        let p = m.transform(Point::new(-5.0, 100.0));
        assert_abs_diff_eq!(p.x, m.offset().x);
        assert_abs_diff_eq!(p.y, m.offset().y);
        assert_abs_diff_eq!(m.scale(), 20.0);
        assert_abs_diff_eq!(m.offset().x, 100.0);
    }

    #[test]
    fn shrink_adds_margin() {
        let m = ViewportMapper::fit(&bounds(0.0, 10.0, 0.0, 10.0), 100.0, 100.0, 0.0, FitPolicy { shrink: 0.9 });
        assert_abs_diff_eq!(m.scale(), 9.0);
        assert_abs_diff_eq!(m.offset().x, 5.0);
        assert_abs_diff_eq!(m.offset().y, 5.0);
    }

    #[test]
    fn zero_width_bounds_use_unit_scale() {
        // Vertical wall: no extent along x.
        let m = ViewportMapper::fit(&bounds(3.0, 3.0, 0.0, 10.0), 100.0, 100.0, 0.0, FitPolicy::default());
        assert_abs_diff_eq!(m.scale(), 1.0);
        assert!(m.offset().x.is_finite());
        assert_abs_diff_eq!(m.offset().x, 50.0);
    }

    #[test]
    fn point_bounds_stay_finite() {
        let m = ViewportMapper::fit(&bounds(2.0, 2.0, 2.0, 2.0), 50.0, 30.0, 5.0, FitPolicy::default());
        let p = m.transform(Point::new(2.0, 2.0));
        assert_abs_diff_eq!(p.x, 25.0);
        assert_abs_diff_eq!(p.y, 15.0);
    }

    #[test]
    fn from_config() {
        let cfg = ViewportConfig::new(300.0, 300.0).with_padding(50.0);
        let m = ViewportMapper::new(&bounds(0.0, 2.0, 0.0, 1.0), &cfg);
        assert_abs_diff_eq!(m.scale(), 100.0);
        assert_abs_diff_eq!(m.offset().y, 100.0);
        assert_eq!(m.transform_all(&[Point::new(0.0, 0.0), Point::new(2.0, 1.0)]).len(), 2);
    }
}
