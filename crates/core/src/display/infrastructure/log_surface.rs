use crate::display::domain::overlay::Overlay;
use crate::display::domain::overlay_surface::OverlaySurface;
use crate::geometry::viewport::Viewport;

/// Overlay surface that keeps placements in memory and logs them.
///
/// The demo binary's display: every placement and clear shows up in
/// the log output, and callers can inspect the handle list after a
/// run.
pub struct LogOverlaySurface {
    viewport: Viewport,
    overlays: Vec<Overlay>,
}

impl LogOverlaySurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            overlays: Vec::new(),
        }
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }
}

impl OverlaySurface for LogOverlaySurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear_overlays(&mut self) {
        if !self.overlays.is_empty() {
            log::debug!("clearing {} overlays", self.overlays.len());
        }
        self.overlays.clear();
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        log::info!(
            "overlay at ({:.0}, {:.0}) size {:.0}x{:.0}{}",
            overlay.rect.x,
            overlay.rect.y,
            overlay.rect.width,
            overlay.rect.height,
            if overlay.has_content() {
                ""
            } else {
                " (no sprite)"
            }
        );
        self.overlays.push(overlay);
    }
}
