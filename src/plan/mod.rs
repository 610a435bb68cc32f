//! Floor-plan records as supplied by the editing surface or a generation
//! backend.
//!
//! The engine treats these as opaque input. Aggregate fields on
//! [`FloorPlan`] are carried through untouched.

mod de;

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Room type marking a synthetic sentinel that seeds an empty plan.
pub const REFERENCE_ROOM_TYPE: &str = "Reference";

/// Room type marking a wall rather than an enclosed space.
pub const WALL_ROOM_TYPE: &str = "Wall";

/// A point in plan coordinates. `z` is the plan's second horizontal axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub z: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Returns `true` if both coordinates differ from `other` by less than
    /// `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.z - other.z).abs() < tolerance
    }
}

/// How the pipeline treats a room, derived from its type and point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomShape {
    /// Synthetic sentinel; excluded from all geometry.
    Reference,
    /// A `"Wall"` room with exactly two points, drawn as one thick line.
    StandaloneWall,
    /// A `"Wall"` room with three or more points. The points chain wall
    /// centre-line segments, so the polyline stays open: no segment joins the
    /// last point back to the first.
    WallRun,
    /// A closed room polygon traversed edge `i -> (i + 1) mod n`.
    Closed,
    /// Too few points to draw anything; silently dropped.
    Unrenderable,
}

impl RoomShape {
    /// Closed polygons are the only shapes that own wall quads and fills.
    #[must_use]
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }

    /// Wall shapes draw as thick lines in the external wall band.
    #[must_use]
    pub fn is_wall_line(self) -> bool {
        matches!(self, Self::StandaloneWall | Self::WallRun)
    }
}

/// One room of a floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPolygon {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub id: String,
    pub room_type: String,
    pub floor_polygon: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(
        default,
        deserialize_with = "de::optional_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_regular: Option<bool>,
    #[serde(
        rename = "isBoundary",
        alias = "is_boundary",
        default,
        deserialize_with = "de::flag"
    )]
    pub is_boundary: bool,
}

impl RoomPolygon {
    /// Creates a room with only the geometric fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, room_type: impl Into<String>, floor_polygon: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            room_type: room_type.into(),
            floor_polygon,
            area: None,
            height: None,
            width: None,
            is_regular: None,
            is_boundary: false,
        }
    }

    /// Marks the room as a plan boundary (outline-only rendering).
    #[must_use]
    pub fn with_boundary(mut self, is_boundary: bool) -> Self {
        self.is_boundary = is_boundary;
        self
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.room_type == REFERENCE_ROOM_TYPE
    }

    #[must_use]
    pub fn is_wall(&self) -> bool {
        self.room_type == WALL_ROOM_TYPE
    }

    /// Classifies the room for the rendering pipeline.
    #[must_use]
    pub fn shape(&self) -> RoomShape {
        let n = self.floor_polygon.len();
        if self.is_reference() {
            RoomShape::Reference
        } else if self.is_wall() {
            match n {
                2 => RoomShape::StandaloneWall,
                n if n >= 3 => RoomShape::WallRun,
                _ => RoomShape::Unrenderable,
            }
        } else if n >= 3 {
            RoomShape::Closed
        } else {
            RoomShape::Unrenderable
        }
    }

    /// Iterates the closed-polygon edges `(i, start, end)`.
    ///
    /// Yields nothing for rooms with fewer than three points.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        let pts = &self.floor_polygon;
        let n = if pts.len() >= 3 { pts.len() } else { 0 };
        (0..n).map(move |i| (i, pts[i], pts[(i + 1) % n]))
    }
}

/// A whole floor plan, supplied per render request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub rooms: Vec<RoomPolygon>,
    #[serde(default)]
    pub room_count: usize,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default)]
    pub room_types: Vec<String>,
}

impl FloorPlan {
    /// Assembles a plan from rooms, filling the informational metadata the
    /// way a plan-editing surface would.
    #[must_use]
    pub fn from_rooms(rooms: Vec<RoomPolygon>) -> Self {
        let mut room_types: Vec<String> = Vec::new();
        for room in &rooms {
            if !room_types.contains(&room.room_type) {
                room_types.push(room.room_type.clone());
            }
        }
        Self {
            room_count: rooms.len(),
            total_area: rooms.iter().filter_map(|r| r.area).sum(),
            room_types,
            rooms,
        }
    }

    /// Parses a plan from its JSON record.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Parse` if required fields are missing or
    /// coordinates are not numbers.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a plan from a JSON byte stream.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Parse` on malformed JSON or missing fields.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks the basic type contract: every coordinate of a drawable room is
    /// a finite number. Reference rooms never reach the geometry stages and
    /// are not checked.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NonFiniteCoordinate` for the first NaN or
    /// infinite coordinate found.
    pub fn validate(&self) -> Result<()> {
        for room in self.rooms.iter().filter(|r| !r.is_reference()) {
            for (index, p) in room.floor_polygon.iter().enumerate() {
                if !p.x.is_finite() || !p.z.is_finite() {
                    return Err(InputError::NonFiniteCoordinate {
                        room: room.id.clone(),
                        index,
                        x: p.x,
                        z: p.z,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanError;

    fn square(x0: f64, z0: f64, side: f64) -> Vec<Point> {
        vec![
            Point::new(x0, z0),
            Point::new(x0 + side, z0),
            Point::new(x0 + side, z0 + side),
            Point::new(x0, z0 + side),
        ]
    }

    #[test]
    fn shape_classification() {
        let two = vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)];
        assert_eq!(RoomPolygon::new("w", "Wall", two.clone()).shape(), RoomShape::StandaloneWall);
        assert_eq!(RoomPolygon::new("w", "Wall", square(0.0, 0.0, 1.0)).shape(), RoomShape::WallRun);
        assert_eq!(
            RoomPolygon::new("w", "Wall", vec![Point::new(0.0, 0.0)]).shape(),
            RoomShape::Unrenderable
        );
        assert_eq!(RoomPolygon::new("r", "Reference", two.clone()).shape(), RoomShape::Reference);
        assert_eq!(RoomPolygon::new("k", "Kitchen", two).shape(), RoomShape::Unrenderable);
        assert_eq!(RoomPolygon::new("k", "Kitchen", square(0.0, 0.0, 1.0)).shape(), RoomShape::Closed);
        assert!(RoomShape::StandaloneWall.is_wall_line());
        assert!(RoomShape::WallRun.is_wall_line());
        assert!(!RoomShape::Closed.is_wall_line());
        assert!(!RoomShape::Reference.is_wall_line());
    }

    #[test]
    fn edges_wrap_around() {
        let room = RoomPolygon::new("a", "Bedroom", square(0.0, 0.0, 10.0));
        let edges: Vec<_> = room.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, Point::new(0.0, 10.0));
        assert_eq!(edges[3].2, Point::new(0.0, 0.0));
    }

    #[test]
    fn edges_empty_for_open_shapes() {
        let room = RoomPolygon::new("w", "Wall", vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(room.edges().count(), 0);
    }

    #[test]
    fn parse_json_record() {
        let json = r#"{
            "rooms": [
                {
                    "id": 7,
                    "room_type": "LivingRoom",
                    "floor_polygon": [{"x": 0, "z": 0}, {"x": 10, "z": 0}, {"x": 10, "z": 10}],
                    "area": 50.0,
                    "is_regular": 1
                },
                {
                    "id": "outer",
                    "room_type": "Boundary",
                    "floor_polygon": [{"x": 0, "z": 0}, {"x": 20, "z": 0}, {"x": 20, "z": 20}],
                    "isBoundary": true
                }
            ],
            "room_count": 2,
            "total_area": 50.0,
            "room_types": ["LivingRoom"]
        }"#;
        let plan = FloorPlan::from_json(json).unwrap();
        assert_eq!(plan.rooms.len(), 2);
        assert_eq!(plan.rooms[0].id, "7");
        assert_eq!(plan.rooms[0].is_regular, Some(true));
        assert!(!plan.rooms[0].is_boundary);
        assert!(plan.rooms[1].is_boundary);
        assert_eq!(plan.room_count, 2);
    }

    #[test]
    fn parse_rejects_missing_polygon() {
        let json = r#"{"rooms": [{"id": "a", "room_type": "Kitchen"}]}"#;
        assert!(matches!(
            FloorPlan::from_json(json),
            Err(PlanError::Input(InputError::Parse(_)))
        ));
    }

    #[test]
    fn parse_rejects_string_coordinates() {
        let json = r#"{"rooms": [{"room_type": "Kitchen", "floor_polygon": [{"x": "a", "z": 0}]}]}"#;
        assert!(FloorPlan::from_json(json).is_err());
    }

    #[test]
    fn metadata_is_carried_not_recomputed() {
        let json = r#"{"rooms": [], "room_count": 9, "total_area": 123.5, "room_types": ["Kitchen"]}"#;
        let plan = FloorPlan::from_json(json).unwrap();
        assert_eq!(plan.room_count, 9);
        assert!((plan.total_area - 123.5).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_nan() {
        let mut pts = square(0.0, 0.0, 1.0);
        pts[2].z = f64::NAN;
        let plan = FloorPlan::from_rooms(vec![RoomPolygon::new("bad", "Kitchen", pts)]);
        let err = plan.validate().unwrap_err();
        assert!(matches!(
            err,
            PlanError::Input(InputError::NonFiniteCoordinate { index: 2, .. })
        ));
    }

    #[test]
    fn validate_skips_reference_rooms() {
        let plan = FloorPlan::from_rooms(vec![
            RoomPolygon::new("k", "Kitchen", vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(0.0, 3.0),
            ]),
            RoomPolygon::new("ref", "Reference", vec![Point::new(f64::NAN, 0.0)]),
        ]);
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn from_rooms_collects_metadata() {
        let mut a = RoomPolygon::new("a", "Kitchen", square(0.0, 0.0, 1.0));
        a.area = Some(1.0);
        let b = RoomPolygon::new("b", "Kitchen", square(1.0, 0.0, 1.0));
        let plan = FloorPlan::from_rooms(vec![a, b]);
        assert_eq!(plan.room_count, 2);
        assert_eq!(plan.room_types, vec!["Kitchen".to_owned()]);
        assert!((plan.total_area - 1.0).abs() < f64::EPSILON);
    }
}
