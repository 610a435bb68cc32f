use serde::Serialize;
use tracing::trace;

use crate::config::WallConfig;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2};
use crate::operations::transform::ViewportMapper;
use crate::plan::{RoomPolygon, RoomShape};

use super::adjacency::EdgeExposure;

/// One polygon edge promoted to a wall, in display coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallSegment {
    pub owner_room_id: String,
    pub edge_index: usize,
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub is_external: bool,
}

/// The four corners of a wall strip, in display coordinates.
///
/// `top_*` lies on the left of the segment direction and `bottom_*` on the
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiteredQuad {
    pub top_start: Point2,
    pub top_end: Point2,
    pub bottom_start: Point2,
    pub bottom_end: Point2,
}

impl MiteredQuad {
    /// Corners in drawing order: top edge forward, bottom edge backward.
    #[must_use]
    pub fn outline(&self) -> [Point2; 4] {
        [self.top_start, self.top_end, self.bottom_end, self.bottom_start]
    }

    /// Returns `true` if no corner carries a NaN or infinite coordinate.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.outline()
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// A wall segment together with its (possibly mitered) quad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallQuad {
    pub segment: WallSegment,
    pub quad: MiteredQuad,
    #[serde(skip)]
    direction: Vector2,
}

impl WallQuad {
    /// Unit direction from `segment.start` to `segment.end`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    #[must_use]
    pub fn half_thickness(&self) -> f64 {
        self.segment.thickness * 0.5
    }
}

/// The cyclic sequence of wall quads around one room polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct WallStrip {
    pub quads: Vec<WallQuad>,
}

/// A `"Wall"` room drawn as a thick line with round caps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WallLine {
    pub owner_room_id: String,
    pub points: Vec<Point2>,
    pub thickness: f64,
}

/// The wall output of one room.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomWalls {
    Strip(WallStrip),
    Line(WallLine),
}

/// Builds un-mitered wall quads for closed rooms and thick lines for wall
/// rooms.
///
/// `exposures` must be indexed like `rooms`, as produced by
/// [`AdjacencyClassifier::execute`](super::AdjacencyClassifier::execute).
pub struct WallGeometryBuilder<'a> {
    rooms: &'a [RoomPolygon],
    exposures: &'a [Vec<EdgeExposure>],
    mapper: &'a ViewportMapper,
    config: &'a WallConfig,
}

impl<'a> WallGeometryBuilder<'a> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(
        rooms: &'a [RoomPolygon],
        exposures: &'a [Vec<EdgeExposure>],
        mapper: &'a ViewportMapper,
        config: &'a WallConfig,
    ) -> Self {
        Self {
            rooms,
            exposures,
            mapper,
            config,
        }
    }

    /// Executes the build, returning wall output in room order.
    ///
    /// Reference rooms, unrenderable rooms and rooms whose edges are all
    /// zero-length contribute nothing.
    #[must_use]
    pub fn execute(&self) -> Vec<RoomWalls> {
        let mut walls = Vec::new();
        for (room_index, room) in self.rooms.iter().enumerate() {
            match room.shape() {
                RoomShape::Closed => {
                    let strip = self.strip(room_index, room);
                    if strip.quads.is_empty() {
                        trace!(room = %room.id, "room has no measurable edges");
                    } else {
                        walls.push(RoomWalls::Strip(strip));
                    }
                }
                RoomShape::Reference => {}
                shape if shape.is_wall_line() => {
                    walls.push(RoomWalls::Line(WallLine {
                        owner_room_id: room.id.clone(),
                        points: self.mapper.transform_all(&room.floor_polygon),
                        thickness: self.config.external_thickness,
                    }));
                }
                _ => {
                    trace!(
                        room = %room.id,
                        room_type = %room.room_type,
                        points = room.floor_polygon.len(),
                        "skipping room with unrenderable shape"
                    );
                }
            }
        }
        walls
    }

    fn strip(&self, room_index: usize, room: &RoomPolygon) -> WallStrip {
        let exposures = self.exposures.get(room_index).map_or(&[][..], Vec::as_slice);
        let mut quads = Vec::with_capacity(room.floor_polygon.len());

        for (edge_index, start, end) in room.edges() {
            // A missing classification counts as exposed.
            let is_external = exposures
                .get(edge_index)
                .is_none_or(|e| e.is_external());
            let start = self.mapper.transform(start);
            let end = self.mapper.transform(end);

            let Some(direction) = segment_direction(&start, &end) else {
                trace!(room = %room.id, edge_index, "dropping zero-length edge");
                continue;
            };

            let thickness = self.config.thickness(is_external);
            let offset = left_normal(direction) * (thickness * 0.5);

            quads.push(WallQuad {
                segment: WallSegment {
                    owner_room_id: room.id.clone(),
                    edge_index,
                    start,
                    end,
                    thickness,
                    is_external,
                },
                quad: MiteredQuad {
                    top_start: start + offset,
                    top_end: end + offset,
                    bottom_start: start - offset,
                    bottom_end: end - offset,
                },
                direction,
            });
        }

        WallStrip { quads }
    }
}
