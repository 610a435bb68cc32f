//! Wall geometry: edge exposure, offset quads, corner miters and draw order.

mod adjacency;
mod build;
mod miter;
mod order;

pub use adjacency::{AdjacencyClassifier, EdgeExposure};
pub use build::{MiteredQuad, RoomWalls, WallGeometryBuilder, WallLine, WallQuad, WallSegment, WallStrip};
pub use miter::CornerMiterer;
pub use order::{RenderOrderSorter, WallPrimitive};
