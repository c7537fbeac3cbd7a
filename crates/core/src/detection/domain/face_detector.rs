use crate::geometry::normalized_box::NormalizedBox;
use crate::geometry::orientation::ImageOrientation;
use crate::shared::frame::Frame;

/// Domain interface for face-rectangle detection.
///
/// `orientation` tells the implementation how the raw pixels are
/// rotated relative to upright. Boxes come back in normalized
/// bottom-left-origin coordinates. Zero results is a normal outcome;
/// an `Err` is downgraded by the scan pipeline to "no faces this
/// cycle". Implementations may be stateful, hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        frame: &Frame,
        orientation: ImageOrientation,
    ) -> Result<Vec<NormalizedBox>, Box<dyn std::error::Error>>;
}
