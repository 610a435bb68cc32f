//! Wall-geometry rendering engine for 2D floor plans.
//!
//! Turns room polygons into filled rooms, mitered wall quads of the right
//! thickness and optional labels, as a renderer-agnostic [`Scene`]:
//!
//! ```text
//! FloorPlan -> PlanBounds -> ViewportMapper
//!           -> AdjacencyClassifier -> WallGeometryBuilder -> CornerMiterer
//!           -> RenderOrderSorter -> SceneComposer -> Scene
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod operations;
pub mod plan;
pub mod render;
pub mod scene;

pub use config::{ColorScheme, FitPolicy, ViewportConfig, WallConfig};
pub use error::{PlanError, Result};
pub use plan::{FloorPlan, Point, RoomPolygon};
pub use render::{render, render_with_palette, SceneCache};
pub use scene::{Primitive, PrimitiveKind, Scene};
