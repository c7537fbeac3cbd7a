use std::sync::Arc;

use crate::geometry::overlay_rect::OverlayRect;

use super::sprite::Sprite;

/// One placed overlay: where to draw, and what to draw there.
///
/// `sprite` is `None` when the asset failed to load. The placement
/// still happens so layout stays observable; the overlay is degraded,
/// not an error.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub rect: OverlayRect,
    pub sprite: Option<Arc<Sprite>>,
}

impl Overlay {
    pub fn new(rect: OverlayRect, sprite: Option<Arc<Sprite>>) -> Self {
        Self { rect, sprite }
    }

    pub fn has_content(&self) -> bool {
        self.sprite.is_some()
    }
}
