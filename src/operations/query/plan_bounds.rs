use serde::Serialize;

use crate::plan::RoomPolygon;

/// An axis-aligned extent in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl PlanBounds {
    /// Bounds reported when no room carries usable geometry.
    pub const EMPTY_PLAN: PlanBounds = PlanBounds {
        min_x: 0.0,
        max_x: 100.0,
        min_z: 0.0,
        max_z: 100.0,
    };

    /// Extent along `x`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along `z`.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Returns `true` for the documented empty-plan default.
    #[must_use]
    pub fn is_empty_plan(&self) -> bool {
        *self == Self::EMPTY_PLAN
    }
}

/// Computes the extent of every non-reference room with at least one point.
pub struct PlanBoundsCalculator<'a> {
    rooms: &'a [RoomPolygon],
}

impl<'a> PlanBoundsCalculator<'a> {
    /// Creates a new bounds query.
    #[must_use]
    pub fn new(rooms: &'a [RoomPolygon]) -> Self {
        Self { rooms }
    }

    /// Executes the query.
    ///
    /// Falls back to [`PlanBounds::EMPTY_PLAN`] when no room survives the
    /// filter.
    #[must_use]
    pub fn execute(&self) -> PlanBounds {
        let mut points = self
            .rooms
            .iter()
            .filter(|room| !room.is_reference())
            .flat_map(|room| room.floor_polygon.iter());

        let Some(first) = points.next() else {
            return PlanBounds::EMPTY_PLAN;
        };
        points.fold(
            PlanBounds {
                min_x: first.x,
                max_x: first.x,
                min_z: first.z,
                max_z: first.z,
            },
            |b, p| PlanBounds {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_z: b.min_z.min(p.z),
                max_z: b.max_z.max(p.z),
            },
        )
    }
}
