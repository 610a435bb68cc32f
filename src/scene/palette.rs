use crate::config::ColorScheme;

use super::Color;

/// Maps room types and scheme names to colors.
///
/// Implement this to restyle scenes without touching the geometry pipeline.
pub trait RoomPalette {
    /// Fill color for a room of the given type.
    fn room_fill(&self, room_type: &str, scheme: ColorScheme) -> Color;

    /// Fill color for wall quads and standalone wall lines.
    fn wall(&self, scheme: ColorScheme) -> Color;

    /// Text color for room labels.
    fn label(&self, scheme: ColorScheme) -> Color;

    /// Stroke color for boundary outlines.
    fn boundary(&self, scheme: ColorScheme) -> Color {
        self.wall(scheme)
    }
}

/// Built-in colors for the `standard`, `monochrome`, `pastel` and
/// `contrast` schemes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPalette;

/// `(normalized room type, [standard, monochrome, pastel, contrast])`.
#[allow(clippy::unreadable_literal)]
const ROOM_COLORS: &[(&str, [u32; 4])] = &[
    ("livingroom", [0xf5d6a1, 0xe0e0e0, 0xfdebd0, 0xffb000]),
    ("masterroom", [0xa8d5ba, 0xcfcfcf, 0xd4efdf, 0x009e73]),
    ("bedroom", [0xa8d5ba, 0xcfcfcf, 0xd4efdf, 0x009e73]),
    ("secondroom", [0xb5e0c7, 0xd4d4d4, 0xdcf2e3, 0x56b4e9]),
    ("childroom", [0xc9e4a6, 0xd9d9d9, 0xe5f3d2, 0x7cb342]),
    ("guestroom", [0xd2e8b5, 0xdedede, 0xeaf5d8, 0x8bc34a]),
    ("studyroom", [0xc3b1e1, 0xc7c7c7, 0xe4daf2, 0xcc79a7]),
    ("office", [0xc3b1e1, 0xc7c7c7, 0xe4daf2, 0xcc79a7]),
    ("kitchen", [0xf4a582, 0xbdbdbd, 0xfbd3c0, 0xd55e00]),
    ("diningroom", [0xf7c59f, 0xc2c2c2, 0xfce1cc, 0xe69f00]),
    ("bathroom", [0x92c5de, 0xb0b0b0, 0xcbe4f0, 0x0072b2]),
    ("balcony", [0xd9ef8b, 0xe8e8e8, 0xecf7c5, 0xf0e442]),
    ("entrance", [0xe6c8a0, 0xd0d0d0, 0xf3e4cf, 0x8c510a]),
    ("hallway", [0xe8dcc8, 0xdadada, 0xf4ede3, 0x999999]),
    ("corridor", [0xe8dcc8, 0xdadada, 0xf4ede3, 0x999999]),
    ("storage", [0xcccccc, 0xa8a8a8, 0xe6e6e6, 0x666666]),
];

/// Fill for room types missing from `ROOM_COLORS`.
#[allow(clippy::unreadable_literal)]
const FALLBACK: [u32; 4] = [0xeeeeee, 0xf0f0f0, 0xf7f7f7, 0xffffff];
/// Wall and boundary stroke.
#[allow(clippy::unreadable_literal)]
const WALL: [u32; 4] = [0x333333, 0x000000, 0x6b6b6b, 0x000000];
/// Label text.
#[allow(clippy::unreadable_literal)]
const LABEL: [u32; 4] = [0x1f2937, 0x111111, 0x4b5563, 0x000000];

fn slot(scheme: ColorScheme) -> usize {
    match scheme {
        ColorScheme::Standard => 0,
        ColorScheme::Monochrome => 1,
        ColorScheme::Pastel => 2,
        ColorScheme::Contrast => 3,
    }
}

/// `"Living Room"`, `"living_room"` and `"LivingRoom"` share a key.
fn normalize(room_type: &str) -> String {
    room_type
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl RoomPalette for DefaultPalette {
    fn room_fill(&self, room_type: &str, scheme: ColorScheme) -> Color {
        let key = normalize(room_type);
        let row = ROOM_COLORS
            .iter()
            .find(|(name, _)| *name == key)
            .map_or(&FALLBACK, |(_, colors)| colors);
        Color::hex(row[slot(scheme)])
    }

    fn wall(&self, scheme: ColorScheme) -> Color {
        Color::hex(WALL[slot(scheme)])
    }

    fn label(&self, scheme: ColorScheme) -> Color {
        Color::hex(LABEL[slot(scheme)])
    }
}
