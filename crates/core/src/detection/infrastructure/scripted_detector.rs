use std::collections::VecDeque;

use crate::detection::domain::face_detector::FaceDetector;
use crate::geometry::normalized_box::NormalizedBox;
use crate::geometry::orientation::ImageOrientation;
use crate::shared::frame::Frame;

/// Replays a fixed sequence of detection results, one entry per call,
/// then reports no faces.
///
/// Deterministic collaborator for tests and demos that need known
/// boxes at known cycles.
pub struct ScriptedDetector {
    results: VecDeque<Vec<NormalizedBox>>,
}

impl ScriptedDetector {
    pub fn new(results: Vec<Vec<NormalizedBox>>) -> Self {
        Self {
            results: results.into(),
        }
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(
        &mut self,
        _frame: &Frame,
        _orientation: ImageOrientation,
    ) -> Result<Vec<NormalizedBox>, Box<dyn std::error::Error>> {
        Ok(self.results.pop_front().unwrap_or_default())
    }
}
