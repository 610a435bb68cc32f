//! The single entry point shared by every surface that draws a plan.

mod cache;

pub use cache::SceneCache;

use tracing::debug;

use crate::config::ViewportConfig;
use crate::error::Result;
use crate::operations::query::PlanBoundsCalculator;
use crate::operations::transform::ViewportMapper;
use crate::operations::walls::{
    AdjacencyClassifier, CornerMiterer, RenderOrderSorter, RoomWalls, WallGeometryBuilder,
    WallPrimitive,
};
use crate::plan::FloorPlan;
use crate::scene::{DefaultPalette, RoomPalette, Scene, SceneComposer};

/// Renders a floor plan into a scene using the built-in palette.
///
/// Pure and re-entrant: the output depends only on the arguments.
///
/// # Errors
///
/// Returns `InputError::NonFiniteCoordinate` if a coordinate is NaN or
/// infinite, or `ConfigError::InvalidParameter` if the config is unusable.
/// Degenerate geometry never produces an error.
pub fn render(plan: &FloorPlan, config: &ViewportConfig) -> Result<Scene> {
    render_with_palette(plan, config, &DefaultPalette)
}

/// Renders a floor plan into a scene with a caller-supplied palette.
///
/// # Errors
///
/// See [`render`].
#[tracing::instrument(
    skip_all,
    fields(rooms = plan.rooms.len(), width = config.width, height = config.height)
)]
pub fn render_with_palette(
    plan: &FloorPlan,
    config: &ViewportConfig,
    palette: &dyn RoomPalette,
) -> Result<Scene> {
    plan.validate()?;
    config.validate()?;

    let rooms = plan.rooms.as_slice();
    let bounds = PlanBoundsCalculator::new(rooms).execute();
    if bounds.is_empty_plan() {
        debug!("no room geometry; using default bounds");
    }
    let mapper = ViewportMapper::new(&bounds, config);

    let exposures = AdjacencyClassifier::new(rooms, config.walls.match_tolerance).execute();
    let walls = WallGeometryBuilder::new(rooms, &exposures, &mapper, &config.walls).execute();

    let miterer = CornerMiterer::new(&config.walls);
    let mut primitives = Vec::new();
    for room_walls in walls {
        match room_walls {
            RoomWalls::Strip(strip) => primitives.extend(
                miterer
                    .execute(&strip.quads)
                    .into_iter()
                    .map(WallPrimitive::Quad),
            ),
            RoomWalls::Line(line) => primitives.push(WallPrimitive::Line(line)),
        }
    }
    let sorted = RenderOrderSorter::new(primitives).execute();

    let scene = SceneComposer::new(rooms, &mapper, config)
        .with_palette(palette)
        .compose(&sorted);
    debug!(primitives = scene.len(), "scene composed");
    Ok(scene)
}
