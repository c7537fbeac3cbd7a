use std::f64::consts::TAU;

use crate::detection::domain::face_detector::FaceDetector;
use crate::geometry::normalized_box::NormalizedBox;
use crate::geometry::orientation::ImageOrientation;
use crate::shared::frame::Frame;

/// Distance of the orbit from the frame center, in normalized units.
const ORBIT_RADIUS: f64 = 0.25;

/// Detector stand-in that reports faces orbiting the frame center.
///
/// Each call advances the orbit by one step, so consecutive cycles
/// see the boxes in slightly different positions. Multiple faces are
/// spaced evenly around the circle. Used when no real detector is
/// wired in (demo binary, examples).
pub struct SimulatedDetector {
    faces: usize,
    face_size: f64,
    step: f64,
    calls: u64,
}

impl SimulatedDetector {
    /// `face_size` is the normalized edge length of each reported box;
    /// `step` is the orbit advance per call, in radians.
    pub fn new(faces: usize, face_size: f64, step: f64) -> Self {
        Self {
            faces,
            face_size,
            step,
            calls: 0,
        }
    }
}

impl FaceDetector for SimulatedDetector {
    fn detect(
        &mut self,
        _frame: &Frame,
        _orientation: ImageOrientation,
    ) -> Result<Vec<NormalizedBox>, Box<dyn std::error::Error>> {
        let angle = self.calls as f64 * self.step;
        self.calls += 1;

        let boxes = (0..self.faces)
            .map(|i| {
                let phase = angle + (i as f64 / self.faces as f64) * TAU;
                let cx = 0.5 + ORBIT_RADIUS * phase.cos();
                let cy = 0.5 + ORBIT_RADIUS * phase.sin();
                NormalizedBox::new(
                    cx - self.face_size / 2.0,
                    cy - self.face_size / 2.0,
                    self.face_size,
                    self.face_size,
                )
            })
            .collect();

        Ok(boxes)
    }
}
