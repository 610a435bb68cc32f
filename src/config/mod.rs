mod presets;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Named color schemes understood by the built-in palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Standard,
    Monochrome,
    Pastel,
    Contrast,
}

impl ColorScheme {
    /// All documented schemes, in declaration order.
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Standard,
        ColorScheme::Monochrome,
        ColorScheme::Pastel,
        ColorScheme::Contrast,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Monochrome => "monochrome",
            Self::Pastel => "pastel",
            Self::Contrast => "contrast",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownColorScheme(s.to_owned()))
    }
}

/// How plan content is fitted into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitPolicy {
    /// Multiplier applied to the uniform `min(scaleX, scaleY)` scale.
    /// Values below 1 leave extra visual margin around the plan.
    pub shrink: f64,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self { shrink: 1.0 }
    }
}

/// Wall thickness and tolerance constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WallConfig {
    /// Thickness of exposed walls, in display units.
    pub external_thickness: f64,
    /// Thickness of walls shared by two rooms, in display units.
    pub internal_thickness: f64,
    /// Per-axis tolerance for matching edge endpoints, in plan units.
    pub match_tolerance: f64,
    /// Determinant magnitude below which two wall lines count as parallel.
    pub miter_epsilon: f64,
    /// When set, a miter moving a corner farther than
    /// `miter_limit * thickness / 2` is skipped.
    pub miter_limit: Option<f64>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            external_thickness: 6.0,
            internal_thickness: 4.0,
            match_tolerance: 0.1,
            miter_epsilon: 1e-6,
            miter_limit: None,
        }
    }
}

impl WallConfig {
    /// Thickness for an edge of the given exposure.
    #[must_use]
    pub fn thickness(&self, is_external: bool) -> f64 {
        if is_external {
            self.external_thickness
        } else {
            self.internal_thickness
        }
    }

    /// Checks that every constant is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        positive("external_thickness", self.external_thickness)?;
        positive("internal_thickness", self.internal_thickness)?;
        positive("match_tolerance", self.match_tolerance)?;
        positive("miter_epsilon", self.miter_epsilon)?;
        if let Some(limit) = self.miter_limit {
            positive("miter_limit", limit)?;
        }
        Ok(())
    }
}

/// Frame size and style for one render request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    /// Inset kept free on every side of the frame.
    pub padding: f64,
    pub fit: FitPolicy,
    pub color_scheme: ColorScheme,
    pub show_room_labels: bool,
    pub walls: WallConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 20.0,
            fit: FitPolicy::default(),
            color_scheme: ColorScheme::default(),
            show_room_labels: false,
            walls: WallConfig::default(),
        }
    }
}

impl ViewportConfig {
    /// Creates a config for a frame of the given size with default style.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    #[must_use]
    pub fn with_room_labels(mut self, show: bool) -> Self {
        self.show_room_labels = show;
        self
    }

    #[must_use]
    pub fn with_walls(mut self, walls: WallConfig) -> Self {
        self.walls = walls;
        self
    }

    #[must_use]
    pub fn with_shrink(mut self, shrink: f64) -> Self {
        self.fit.shrink = shrink;
        self
    }

    /// Parses a viewport/style config from JSON, defaulting absent fields.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Parse` on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the frame and wall constants.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        if !self.padding.is_finite()
            || self.padding < 0.0
            || self.padding * 2.0 >= self.width.min(self.height)
        {
            return Err(ConfigError::InvalidParameter {
                parameter: "padding",
                value: self.padding,
            }
            .into());
        }
        if !(self.fit.shrink > 0.0 && self.fit.shrink <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "shrink",
                value: self.fit.shrink,
            }
            .into());
        }
        self.walls.validate()
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { parameter, value }.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanError;

    #[test]
    fn defaults_are_valid() {
        ViewportConfig::default().validate().unwrap();
        let walls = WallConfig::default();
        assert!((walls.external_thickness / walls.internal_thickness - 1.5).abs() < 1e-12);
    }

    #[test]
    fn thickness_by_exposure() {
        let walls = WallConfig::default();
        assert!((walls.thickness(true) - 6.0).abs() < f64::EPSILON);
        assert!((walls.thickness(false) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn color_scheme_from_str() {
        assert_eq!("pastel".parse::<ColorScheme>().unwrap(), ColorScheme::Pastel);
        assert_eq!(" Contrast ".parse::<ColorScheme>().unwrap(), ColorScheme::Contrast);
        assert!(matches!(
            "neon".parse::<ColorScheme>(),
            Err(ConfigError::UnknownColorScheme(_))
        ));
    }

    #[test]
    fn parse_partial_json() {
        let cfg = ViewportConfig::from_json(
            r#"{"width": 300, "height": 200, "colorScheme": "monochrome", "showRoomLabels": true}"#,
        )
        .unwrap();
        assert!((cfg.width - 300.0).abs() < f64::EPSILON);
        assert_eq!(cfg.color_scheme, ColorScheme::Monochrome);
        assert!(cfg.show_room_labels);
        assert_eq!(cfg.walls, WallConfig::default());
    }

    #[test]
    fn rejects_zero_width() {
        let err = ViewportConfig::new(0.0, 100.0).validate().unwrap_err();
        assert!(matches!(
            err,
            PlanError::Config(ConfigError::InvalidParameter { parameter: "width", .. })
        ));
    }

    #[test]
    fn rejects_padding_covering_frame() {
        let cfg = ViewportConfig::new(100.0, 40.0).with_padding(20.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_shrink() {
        assert!(ViewportConfig::default().with_shrink(0.0).validate().is_err());
        assert!(ViewportConfig::default().with_shrink(1.5).validate().is_err());
        ViewportConfig::default().with_shrink(0.9).validate().unwrap();
    }

    #[test]
    fn rejects_negative_miter_limit() {
        let walls = WallConfig {
            miter_limit: Some(-1.0),
            ..WallConfig::default()
        };
        assert!(walls.validate().is_err());
    }
}
