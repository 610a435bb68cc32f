use tracing::trace;

use crate::config::WallConfig;
use crate::math::intersect_2d::line_line_point_2d;
use crate::math::{Point2, Vector2};

use super::build::WallQuad;

/// Joins consecutive wall quads of one room at their shared corners.
///
/// For the joint between quad `i` and quad `i + 1` (cyclically), the top
/// offset lines of both quads are intersected and the result replaces
/// `top_end` of `i` and `top_start` of `i + 1`; the bottom lines likewise.
/// Parallel lines, non-finite results and (when configured) corners beyond
/// the miter limit keep the un-mitered points.
#[derive(Debug, Clone, Copy)]
pub struct CornerMiterer {
    epsilon: f64,
    limit: Option<f64>,
}

/// Which offset line of a strip a corner lies on.
#[derive(Debug, Clone, Copy)]
enum Side {
    Top,
    Bottom,
}

impl CornerMiterer {
    /// Creates a miterer from the wall constants.
    #[must_use]
    pub fn new(config: &WallConfig) -> Self {
        Self {
            epsilon: config.miter_epsilon,
            limit: config.miter_limit,
        }
    }

    /// Executes the miter pass over the cyclic quad sequence of one room.
    ///
    /// Every intersection is computed from the un-mitered input, so the
    /// result does not depend on traversal order.
    #[must_use]
    pub fn execute(&self, quads: &[WallQuad]) -> Vec<WallQuad> {
        let n = quads.len();
        let mut out = quads.to_vec();
        if n < 2 {
            return out;
        }

        for i in 0..n {
            let j = (i + 1) % n;
            let (cur, next) = (&quads[i], &quads[j]);
            for side in [Side::Top, Side::Bottom] {
                let Some(corner) = self.corner(cur, next, side) else {
                    trace!(
                        room = %cur.segment.owner_room_id,
                        edge_index = cur.segment.edge_index,
                        ?side,
                        "keeping un-mitered corner"
                    );
                    continue;
                };
                match side {
                    Side::Top => {
                        out[i].quad.top_end = corner;
                        out[j].quad.top_start = corner;
                    }
                    Side::Bottom => {
                        out[i].quad.bottom_end = corner;
                        out[j].quad.bottom_start = corner;
                    }
                }
            }
        }
        out
    }

    fn corner(&self, cur: &WallQuad, next: &WallQuad, side: Side) -> Option<Point2> {
        let (cur_base, cur_end, next_start) = match side {
            Side::Top => (cur.quad.top_start, cur.quad.top_end, next.quad.top_start),
            Side::Bottom => (cur.quad.bottom_start, cur.quad.bottom_end, next.quad.bottom_start),
        };
        let cur_dir: Vector2 = cur.direction();
        let next_dir: Vector2 = next.direction();

        let corner = line_line_point_2d(&cur_base, &cur_dir, &next_start, &next_dir, self.epsilon)?;
        if !corner.x.is_finite() || !corner.y.is_finite() {
            return None;
        }

        if let Some(limit) = self.limit {
            let reach = limit * cur.half_thickness().max(next.half_thickness());
            if (corner - cur_end).norm() > reach || (corner - next_start).norm() > reach {
                return None;
            }
        }
        Some(corner)
    }
}
