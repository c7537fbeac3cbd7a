use crate::shared::constants::DEFAULT_OVERLAY_SCALE;

use super::normalized_box::NormalizedBox;
use super::overlay_rect::OverlayRect;
use super::viewport::Viewport;

/// Projects detector boxes into enlarged screen-space overlay rects.
///
/// The detector reports bottom-left-origin normalized coordinates
/// while the display uses top-left-origin pixels, so the projection
/// flips the vertical axis. Enlargement grows the rectangle
/// symmetrically about its center: the overlay stays centered on the
/// detected face no matter the scale.
pub struct OverlayProjector {
    scale: f64,
}

impl OverlayProjector {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps one detection into the pixel rectangle to draw its overlay
    /// in. Pure and total over finite inputs.
    pub fn project(&self, b: NormalizedBox, viewport: Viewport) -> OverlayRect {
        let unscaled_w = b.width * viewport.width;
        let unscaled_h = b.height * viewport.height;

        // Detector y grows upward, screen y grows downward.
        let x0 = b.x * viewport.width;
        let y0 = (1.0 - b.max_y()) * viewport.height;

        OverlayRect::new(
            x0 - unscaled_w * (self.scale - 1.0) / 2.0,
            y0 - unscaled_h * (self.scale - 1.0) / 2.0,
            unscaled_w * self.scale,
            unscaled_h * self.scale,
        )
    }
}

impl Default for OverlayProjector {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_SCALE)
    }
}
