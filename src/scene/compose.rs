use crate::config::ViewportConfig;
use crate::math::polygon_2d::vertex_centroid;
use crate::operations::transform::ViewportMapper;
use crate::operations::walls::WallPrimitive;
use crate::plan::RoomPolygon;

use super::palette::{DefaultPalette, RoomPalette};
use super::{
    FillStyle, LabelStyle, Layer, LineCap, LineJoin, LineStyle, Primitive, Scene, Stroke,
};

/// `[dash, gap]` of a boundary outline.
const BOUNDARY_DASH: [f64; 2] = [6.0, 4.0];
const BOUNDARY_STROKE_WIDTH: f64 = 1.5;
const LABEL_FONT_SIZE: f64 = 12.0;

/// Assembles room fills, ordered walls and labels into a [`Scene`].
///
/// Draw order is fixed: room fills, then walls in the order given (already
/// sorted into bands), then labels when the config asks for them.
pub struct SceneComposer<'a> {
    rooms: &'a [RoomPolygon],
    mapper: &'a ViewportMapper,
    config: &'a ViewportConfig,
    palette: &'a dyn RoomPalette,
}

impl<'a> SceneComposer<'a> {
    /// Creates a composer using [`DefaultPalette`].
    #[must_use]
    pub fn new(rooms: &'a [RoomPolygon], mapper: &'a ViewportMapper, config: &'a ViewportConfig) -> Self {
        Self {
            rooms,
            mapper,
            config,
            palette: &DefaultPalette,
        }
    }

    /// Replaces the color source.
    #[must_use]
    pub fn with_palette(mut self, palette: &'a dyn RoomPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Composes the scene from sorted wall primitives.
    #[must_use]
    pub fn compose(&self, walls: &[WallPrimitive]) -> Scene {
        let mut scene = Scene::empty(self.config.width, self.config.height);
        self.push_room_fills(&mut scene);
        self.push_walls(&mut scene, walls);
        if self.config.show_room_labels {
            self.push_labels(&mut scene);
        }
        scene
    }

    fn filled_rooms(&self) -> impl Iterator<Item = &'a RoomPolygon> + 'a {
        self.rooms.iter().filter(|room| room.shape().is_closed())
    }

    fn push_room_fills(&self, scene: &mut Scene) {
        let scheme = self.config.color_scheme;
        for room in self.filled_rooms() {
            let fill = self.palette.room_fill(&room.room_type, scheme);
            let style = if room.is_boundary {
                FillStyle {
                    fill,
                    fill_opacity: 0.0,
                    stroke: Some(Stroke {
                        color: self.palette.boundary(scheme),
                        width: BOUNDARY_STROKE_WIDTH,
                        dash: Some(BOUNDARY_DASH),
                    }),
                }
            } else {
                FillStyle {
                    fill,
                    fill_opacity: 1.0,
                    stroke: None,
                }
            };
            scene.primitives.push(Primitive::FillPolygon {
                layer: Layer::Rooms,
                points: self.mapper.transform_all(&room.floor_polygon),
                style,
            });
        }
    }

    fn push_walls(&self, scene: &mut Scene, walls: &[WallPrimitive]) {
        let color = self.palette.wall(self.config.color_scheme);
        for wall in walls {
            let primitive = match wall {
                WallPrimitive::Quad(q) => Primitive::FillPolygon {
                    layer: Layer::Walls,
                    points: q.quad.outline().to_vec(),
                    style: FillStyle {
                        fill: color,
                        fill_opacity: 1.0,
                        stroke: None,
                    },
                },
                WallPrimitive::Line(line) => Primitive::Line {
                    layer: Layer::Walls,
                    points: line.points.clone(),
                    style: LineStyle {
                        color,
                        width: line.thickness,
                        cap: LineCap::Round,
                        join: LineJoin::Round,
                    },
                },
            };
            scene.primitives.push(primitive);
        }
    }

    fn push_labels(&self, scene: &mut Scene) {
        let style = LabelStyle {
            color: self.palette.label(self.config.color_scheme),
            font_size: LABEL_FONT_SIZE,
        };
        for room in self.filled_rooms().filter(|room| !room.is_boundary) {
            let points = self.mapper.transform_all(&room.floor_polygon);
            let Some(position) = vertex_centroid(&points) else {
                continue;
            };
            scene.primitives.push(Primitive::Label {
                position,
                text: humanize(&room.room_type),
                style,
            });
        }
    }
}

/// Turns a room-type identifier into display text:
/// `"LivingRoom"` and `"living_room"` both become `"Living Room"`.
fn humanize(room_type: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in room_type.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColorScheme, FitPolicy};
    use crate::math::Point2;
    use crate::operations::query::PlanBounds;
    use crate::plan::Point;
    use crate::scene::{Color, PrimitiveKind};

    fn mapper() -> ViewportMapper {
        let bounds = PlanBounds {
            min_x: 0.0,
            max_x: 10.0,
            min_z: 0.0,
            max_z: 10.0,
        };
        ViewportMapper::fit(&bounds, 10.0, 10.0, 0.0, FitPolicy::default())
    }

    fn triangle(id: &str, room_type: &str) -> RoomPolygon {
        RoomPolygon::new(
            id,
            room_type,
            vec![Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(0.0, 3.0)],
        )
    }

    struct Flat;

    impl RoomPalette for Flat {
        fn room_fill(&self, _room_type: &str, _scheme: ColorScheme) -> Color {
            Color::hex(0x11_1111)
        }
        fn wall(&self, _scheme: ColorScheme) -> Color {
            Color::hex(0x22_2222)
        }
        fn label(&self, _scheme: ColorScheme) -> Color {
            Color::hex(0x33_3333)
        }
    }

    #[test]
    fn humanize_variants() {
        assert_eq!(humanize("LivingRoom"), "Living Room");
        assert_eq!(humanize("living_room"), "Living Room");
        assert_eq!(humanize("Kitchen"), "Kitchen");
        assert_eq!(humanize("  "), "");
        assert_eq!(humanize("Bedroom2"), "Bedroom2");
    }

    #[test]
    fn fills_skip_walls_and_references() {
        let rooms = vec![
            triangle("a", "Kitchen"),
            triangle("w", "Wall"),
            triangle("r", "Reference"),
            RoomPolygon::new("tiny", "Bathroom", vec![Point::new(0.0, 0.0)]),
        ];
        let m = mapper();
        let cfg = ViewportConfig::new(10.0, 10.0).with_padding(0.0);
        let scene = SceneComposer::new(&rooms, &m, &cfg).compose(&[]);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.primitives[0].layer(), Layer::Rooms);
    }

    #[test]
    fn boundary_is_outline_only_without_label() {
        let rooms = vec![triangle("outer", "Boundary").with_boundary(true), triangle("k", "Kitchen")];
        let m = mapper();
        let cfg = ViewportConfig::new(10.0, 10.0).with_padding(0.0).with_room_labels(true);
        let scene = SceneComposer::new(&rooms, &m, &cfg).compose(&[]);
        assert_eq!(scene.count(PrimitiveKind::FillPolygon), 2);
        assert_eq!(scene.count(PrimitiveKind::Label), 1);

        let Primitive::FillPolygon { style, .. } = &scene.primitives[0] else {
            panic!("expected boundary fill first");
        };
        assert!(style.fill_opacity.abs() < f64::EPSILON);
        let stroke = style.stroke.unwrap_or_else(|| panic!("boundary needs a stroke"));
        assert!(stroke.dash.is_some());
    }

    #[test]
    fn label_sits_at_display_vertex_mean() {
        let rooms = vec![triangle("k", "DiningRoom")];
        let m = mapper();
        let cfg = ViewportConfig::new(10.0, 10.0).with_padding(0.0).with_room_labels(true);
        let scene = SceneComposer::new(&rooms, &m, &cfg).compose(&[]);
        let Primitive::Label { position, text, .. } = &scene.primitives[1] else {
            panic!("expected a label");
        };
        assert_eq!(text, "Dining Room");
        assert!((position.x - 2.0).abs() < 1e-12);
        assert!((position.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn labels_off_by_default() {
        let rooms = vec![triangle("k", "Kitchen")];
        let m = mapper();
        let cfg = ViewportConfig::new(10.0, 10.0).with_padding(0.0);
        let scene = SceneComposer::new(&rooms, &m, &cfg).compose(&[]);
        assert_eq!(scene.count(PrimitiveKind::Label), 0);
    }

    #[test]
    fn custom_palette_is_used() {
        let rooms = vec![triangle("k", "Kitchen")];
        let m = mapper();
        let cfg = ViewportConfig::new(10.0, 10.0).with_padding(0.0);
        let line = WallPrimitive::Line(crate::operations::walls::WallLine {
            owner_room_id: "w".to_owned(),
            points: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            thickness: 6.0,
        });
        let scene = SceneComposer::new(&rooms, &m, &cfg)
            .with_palette(&Flat)
            .compose(&[line]);
        match &scene.primitives[1] {
            Primitive::Line { style, .. } => {
                assert_eq!(style.color, Color::hex(0x22_2222));
                assert_eq!(style.cap, LineCap::Round);
            }
            other => panic!("unexpected {other:?}"),
        }
        match &scene.primitives[0] {
            Primitive::FillPolygon { style, .. } => assert_eq!(style.fill, Color::hex(0x11_1111)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
