use crate::geometry::viewport::Viewport;

use super::overlay::Overlay;

/// Display port that owns the currently-visible overlay handles.
///
/// Implementations are mutated only from the loop that owns the
/// display; the scan executor never touches a surface from its worker
/// thread, so the trait deliberately requires neither `Send` nor
/// `Sync`.
pub trait OverlaySurface {
    /// Current pixel dimensions of the display area.
    fn viewport(&self) -> Viewport;

    /// Removes every overlay currently on the surface.
    fn clear_overlays(&mut self);

    /// Adds one positioned overlay.
    fn add_overlay(&mut self, overlay: Overlay);
}
