use super::build::{WallLine, WallQuad};

/// A drawable wall element.
#[derive(Debug, Clone, PartialEq)]
pub enum WallPrimitive {
    Quad(WallQuad),
    Line(WallLine),
}

impl WallPrimitive {
    /// Standalone wall lines share the external draw band.
    #[must_use]
    pub fn is_external(&self) -> bool {
        match self {
            Self::Quad(q) => q.segment.is_external,
            Self::Line(_) => true,
        }
    }
}

/// Orders wall elements so internal walls draw before external ones.
///
/// The sort is stable: within each band the input order is kept.
#[derive(Debug)]
pub struct RenderOrderSorter {
    walls: Vec<WallPrimitive>,
}

impl RenderOrderSorter {
    #[must_use]
    pub fn new(walls: Vec<WallPrimitive>) -> Self {
        Self { walls }
    }

    #[must_use]
    pub fn execute(self) -> Vec<WallPrimitive> {
        let mut walls = self.walls;
        walls.sort_by_key(WallPrimitive::is_external);
        walls
    }
}
