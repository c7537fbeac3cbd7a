use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use crate::capture::domain::frame_source::FrameSource;
use crate::capture::domain::orientation_sensor::OrientationSensor;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::overlay_surface::OverlaySurface;
use crate::display::domain::sprite::Sprite;
use crate::geometry::overlay_projector::OverlayProjector;
use crate::shared::constants::DEFAULT_SCAN_INTERVAL_MS;

/// Configuration for one scan run.
pub struct ScanConfig {
    /// Wall-clock delay between detection cycles.
    pub interval: Duration,
    /// Stop after starting this many cycles; `None` runs until
    /// cancelled.
    pub max_cycles: Option<u64>,
    /// Cooperative cancellation, checked every loop turn.
    pub cancelled: Arc<AtomicBool>,
    /// Called after each applied result with `(cycle, faces_placed)`;
    /// returning `false` stops the run.
    pub on_cycle: Option<Box<dyn Fn(u64, usize) -> bool + Send>>,
}

impl ScanConfig {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            max_cycles: None,
            cancelled: Arc::new(AtomicBool::new(false)),
            on_cycle: None,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SCAN_INTERVAL_MS))
    }
}

/// Abstracts how the sample → detect → place loop is executed.
///
/// This is a port (application-layer interface). Infrastructure
/// provides concrete implementations (e.g. threaded). The surface
/// stays with the caller: it is only ever mutated on the thread that
/// invoked `run`.
pub trait ScanExecutor {
    #[allow(clippy::too_many_arguments)]
    fn run(
        &self,
        source: Box<dyn FrameSource>,
        sensor: Box<dyn OrientationSensor>,
        detector: Box<dyn FaceDetector>,
        surface: &mut dyn OverlaySurface,
        projector: OverlayProjector,
        sprite: Option<Arc<Sprite>>,
        config: ScanConfig,
    ) -> Result<(), Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_reference_interval() {
        let config = ScanConfig::default();
        assert_eq!(config.interval, Duration::from_millis(1000));
        assert!(config.max_cycles.is_none());
        assert!(config.on_cycle.is_none());
    }
}
