use serde::Serialize;

use crate::plan::{Point, RoomPolygon};

/// Whether a plan edge faces the outside or is shared with another room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeExposure {
    /// Shared with an edge of another room.
    Internal,
    /// No matching edge in any other room.
    External,
}

impl EdgeExposure {
    #[must_use]
    pub fn is_external(self) -> bool {
        self == Self::External
    }
}

/// Classifies polygon edges as internal or external.
///
/// An edge is internal when some edge of another closed, non-wall room has
/// both endpoints within `tolerance` of it, in either traversal direction.
/// The full pass compares every edge against every other edge.
#[derive(Debug)]
pub struct AdjacencyClassifier<'a> {
    rooms: &'a [RoomPolygon],
    tolerance: f64,
}

impl<'a> AdjacencyClassifier<'a> {
    /// Creates a new classifier over the whole plan.
    #[must_use]
    pub fn new(rooms: &'a [RoomPolygon], tolerance: f64) -> Self {
        Self { rooms, tolerance }
    }

    /// Classifies one edge of the room at index `owner` against all other rooms.
    #[must_use]
    pub fn classify_edge(&self, owner: usize, start: Point, end: Point) -> EdgeExposure {
        let shared = self
            .rooms
            .iter()
            .enumerate()
            .filter(|(index, room)| *index != owner && room.shape().is_closed())
            .flat_map(|(_, room)| room.edges())
            .any(|(_, s, e)| self.edges_match(start, end, s, e));

        if shared {
            EdgeExposure::Internal
        } else {
            EdgeExposure::External
        }
    }

    /// Classifies every edge of every room.
    ///
    /// The result is indexed like the room list; rooms that are not closed
    /// polygons yield an empty list.
    #[must_use]
    pub fn execute(&self) -> Vec<Vec<EdgeExposure>> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(owner, room)| {
                if !room.shape().is_closed() {
                    return Vec::new();
                }
                room.edges()
                    .map(|(_, s, e)| self.classify_edge(owner, s, e))
                    .collect()
            })
            .collect()
    }

    fn edges_match(&self, a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
        let tol = self.tolerance;
        (a0.approx_eq(&b0, tol) && a1.approx_eq(&b1, tol))
            || (a0.approx_eq(&b1, tol) && a1.approx_eq(&b0, tol))
    }
}
