//! Configurations for the three UI surfaces that draw plans.
//!
//! Each surface supplies only size and style; the pipeline is shared.

use super::ViewportConfig;

impl ViewportConfig {
    /// Small list-view thumbnail without labels.
    #[must_use]
    pub fn thumbnail() -> Self {
        Self::new(240.0, 180.0).with_padding(8.0).with_room_labels(false)
    }

    /// Share-preview modal with room labels.
    #[must_use]
    pub fn share_preview() -> Self {
        Self::new(640.0, 480.0).with_padding(24.0).with_room_labels(true)
    }

    /// Full comparison view of a caller-chosen size.
    #[must_use]
    pub fn comparison(width: f64, height: f64) -> Self {
        Self::new(width, height).with_padding(32.0).with_room_labels(true)
    }
}
