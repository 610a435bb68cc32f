//! Renderer-agnostic drawing primitives.
//!
//! A [`Scene`] is an ordered list of primitives; any vector or raster
//! surface can translate it one draw call per primitive.

mod compose;
mod palette;
pub mod svg;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::math::Point2;

pub use compose::SceneComposer;
pub use palette::{DefaultPalette, RoomPalette};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pipeline stage a primitive belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Rooms,
    Walls,
    Labels,
}

/// Discriminant of [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    FillPolygon,
    Line,
    Label,
}

/// Outline drawn around a filled polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// `[dash, gap]` lengths; `None` for a solid stroke.
    pub dash: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FillStyle {
    pub fill: Color,
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelStyle {
    pub color: Color,
    pub font_size: f64,
}

/// One draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Primitive {
    FillPolygon {
        layer: Layer,
        points: Vec<Point2>,
        style: FillStyle,
    },
    Line {
        layer: Layer,
        points: Vec<Point2>,
        style: LineStyle,
    },
    /// Always drawn on [`Layer::Labels`].
    Label {
        position: Point2,
        text: String,
        style: LabelStyle,
    },
}

impl Primitive {
    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::FillPolygon { .. } => PrimitiveKind::FillPolygon,
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Label { .. } => PrimitiveKind::Label,
        }
    }

    #[must_use]
    pub fn layer(&self) -> Layer {
        match self {
            Self::FillPolygon { layer, .. } | Self::Line { layer, .. } => *layer,
            Self::Label { .. } => Layer::Labels,
        }
    }

    /// Every point the primitive places on the frame.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        match self {
            Self::FillPolygon { points, .. } | Self::Line { points, .. } => points,
            Self::Label { position, .. } => std::slice::from_ref(position),
        }
    }
}

/// The ordered output of one render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// An empty scene for a frame of the given size.
    #[must_use]
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    /// Number of primitives of the given kind.
    #[must_use]
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.iter().filter(|p| p.kind() == kind).count()
    }

    /// Primitives produced by the given stage, in draw order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.iter().filter(move |p| p.layer() == layer)
    }

    /// Serializes the scene for a drawing surface in another process.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Parse` if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}
