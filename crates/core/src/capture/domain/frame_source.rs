use crate::shared::frame::Frame;

/// Supplies the most recent frame of the live feed on demand.
///
/// `None` means no frame is available right now; the scan loop treats
/// that as a normal condition and skips the rest of the cycle. There
/// is no error channel: a source that can fail should surface that as
/// `None` and recover on a later cycle.
pub trait FrameSource: Send {
    fn current_frame(&mut self) -> Option<Frame>;
}
