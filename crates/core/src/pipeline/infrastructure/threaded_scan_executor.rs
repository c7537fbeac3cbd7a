use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, select, tick, Receiver, Sender, TrySendError};

use crate::capture::domain::frame_source::FrameSource;
use crate::capture::domain::orientation_sensor::OrientationSensor;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::overlay::Overlay;
use crate::display::domain::overlay_surface::OverlaySurface;
use crate::display::domain::sprite::Sprite;
use crate::geometry::normalized_box::NormalizedBox;
use crate::geometry::orientation::ImageOrientation;
use crate::geometry::overlay_projector::OverlayProjector;
use crate::pipeline::cycle_gate::CycleGate;
use crate::pipeline::scan_executor::{ScanConfig, ScanExecutor};
use crate::shared::constants::DETECTION_QUEUE_CAPACITY;
use crate::shared::frame::Frame;

/// One detection request: the cycle it belongs to, the sampled frame,
/// and the orientation tag the detector must compensate for.
struct DetectionJob {
    cycle: u64,
    frame: Frame,
    orientation: ImageOrientation,
}

/// One detection outcome. Detector failures arrive as an empty box
/// list; they are never fatal to the run.
struct DetectionResult {
    cycle: u64,
    boxes: Vec<NormalizedBox>,
}

/// Runs the scan loop on the calling thread with detection on a
/// dedicated worker.
///
/// Layout: `display loop [tick / sample / place] ⇄ detect worker`
///
/// The display loop owns the surface and never blocks on detection:
/// jobs go out through a bounded queue (a full queue drops that
/// cycle's frame) and results come back through a channel drained
/// between ticks. Results of superseded cycles are discarded at the
/// gate before they can touch the surface.
pub struct ThreadedScanExecutor {
    queue_capacity: usize,
}

impl ThreadedScanExecutor {
    pub fn new() -> Self {
        Self {
            queue_capacity: DETECTION_QUEUE_CAPACITY,
        }
    }
}

impl Default for ThreadedScanExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanExecutor for ThreadedScanExecutor {
    fn run(
        &self,
        mut source: Box<dyn FrameSource>,
        sensor: Box<dyn OrientationSensor>,
        detector: Box<dyn FaceDetector>,
        surface: &mut dyn OverlaySurface,
        projector: OverlayProjector,
        sprite: Option<Arc<Sprite>>,
        config: ScanConfig,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if sprite.is_none() {
            log::warn!("no overlay sprite loaded; placements will have no content");
        }

        let (job_tx, job_rx) = bounded::<DetectionJob>(self.queue_capacity);
        let (result_tx, result_rx) = bounded::<DetectionResult>(self.queue_capacity);

        let worker = spawn_detector(detector, job_rx, result_tx);

        let ticker = tick(config.interval);
        let mut gate = CycleGate::new();
        let mut ticks: u64 = 0;
        let mut stop_requested = false;
        let mut first_error: Option<Box<dyn std::error::Error>> = None;

        loop {
            if config.cancelled.load(Ordering::Relaxed) {
                break;
            }

            select! {
                recv(ticker) -> _ => {
                    ticks += 1;
                    if let Err(e) = start_cycle(&mut *source, &*sensor, surface, &mut gate, &job_tx) {
                        first_error = Some(e);
                        break;
                    }
                    if config.max_cycles.is_some_and(|max| ticks >= max) {
                        break;
                    }
                }
                recv(result_rx) -> msg => match msg {
                    Ok(result) => {
                        if !apply_result(&result, &gate, surface, &projector, sprite.as_ref(), &config.on_cycle) {
                            stop_requested = true;
                            break;
                        }
                    }
                    // Worker gone before shutdown; the join below reports why.
                    Err(_) => break,
                },
            }
        }

        // Closing the job queue lets the worker drain and exit.
        drop(job_tx);

        if first_error.is_none() && !stop_requested && !config.cancelled.load(Ordering::Relaxed) {
            while let Ok(result) = result_rx.recv() {
                if !apply_result(
                    &result,
                    &gate,
                    surface,
                    &projector,
                    sprite.as_ref(),
                    &config.on_cycle,
                ) {
                    break;
                }
                if config.cancelled.load(Ordering::Relaxed) {
                    break;
                }
            }
        }
        drop(result_rx);

        if worker.join().is_err() && first_error.is_none() {
            first_error = Some("detection worker panicked".into());
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn spawn_detector(
    mut detector: Box<dyn FaceDetector>,
    job_rx: Receiver<DetectionJob>,
    result_tx: Sender<DetectionResult>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for job in job_rx {
            let boxes = match detector.detect(&job.frame, job.orientation) {
                Ok(boxes) => boxes,
                Err(e) => {
                    log::warn!(
                        "detector failed on cycle {}: {e}; treating as no faces",
                        job.cycle
                    );
                    Vec::new()
                }
            };
            let result = DetectionResult {
                cycle: job.cycle,
                boxes,
            };
            if result_tx.send(result).is_err() {
                break;
            }
        }
    })
}

/// Starts one detection cycle: tear down the previous overlays, then
/// sample and dispatch. A missing frame skips the rest of the cycle.
fn start_cycle(
    source: &mut dyn FrameSource,
    sensor: &dyn OrientationSensor,
    surface: &mut dyn OverlaySurface,
    gate: &mut CycleGate,
    job_tx: &Sender<DetectionJob>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Previous overlays come down before sampling, even when no new
    // frame will replace them.
    surface.clear_overlays();

    let Some(frame) = source.current_frame() else {
        log::debug!("no frame available; skipping cycle");
        return Ok(());
    };

    let cycle = gate.start();
    let orientation = sensor.orientation().image_orientation();

    match job_tx.try_send(DetectionJob {
        cycle,
        frame,
        orientation,
    }) {
        Ok(()) => Ok(()),
        Err(TrySendError::Full(_)) => {
            log::debug!("detector queue full; dropping frame for cycle {cycle}");
            Ok(())
        }
        Err(TrySendError::Disconnected(_)) => Err("detection worker exited unexpectedly".into()),
    }
}

/// Applies one detection result to the surface. Returns `false` when
/// the per-cycle callback asks the run to stop.
#[allow(clippy::type_complexity)]
fn apply_result(
    result: &DetectionResult,
    gate: &CycleGate,
    surface: &mut dyn OverlaySurface,
    projector: &OverlayProjector,
    sprite: Option<&Arc<Sprite>>,
    on_cycle: &Option<Box<dyn Fn(u64, usize) -> bool + Send>>,
) -> bool {
    if !gate.admit(result.cycle) {
        log::debug!(
            "discarding stale detection result from cycle {} (latest {})",
            result.cycle,
            gate.latest()
        );
        return true;
    }

    let viewport = surface.viewport();
    for b in &result.boxes {
        let rect = projector.project(*b, viewport);
        surface.add_overlay(Overlay::new(rect, sprite.cloned()));
    }

    match on_cycle {
        Some(callback) => callback(result.cycle, result.boxes.len()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use approx::assert_relative_eq;

    use crate::detection::infrastructure::scripted_detector::ScriptedDetector;
    use crate::geometry::orientation::DeviceOrientation;
    use crate::geometry::viewport::Viewport;

    const INTERVAL: Duration = Duration::from_millis(10);

    // --- Stubs ---

    struct StubSource {
        available: bool,
    }

    impl FrameSource for StubSource {
        fn current_frame(&mut self) -> Option<Frame> {
            self.available
                .then(|| Frame::new(vec![0; 12], 2, 2, 3, 0))
        }
    }

    struct StubSensor;

    impl OrientationSensor for StubSensor {
        fn orientation(&self) -> DeviceOrientation {
            DeviceOrientation::Portrait
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        overlays: Vec<Overlay>,
        clears: usize,
    }

    impl OverlaySurface for RecordingSurface {
        fn viewport(&self) -> Viewport {
            Viewport::new(1000.0, 1000.0)
        }

        fn clear_overlays(&mut self) {
            self.clears += 1;
            self.overlays.clear();
        }

        fn add_overlay(&mut self, overlay: Overlay) {
            self.overlays.push(overlay);
        }
    }

    struct CountingDetector {
        calls: Arc<Mutex<usize>>,
    }

    impl FaceDetector for CountingDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _orientation: ImageOrientation,
        ) -> Result<Vec<NormalizedBox>, Box<dyn std::error::Error>> {
            *self.calls.lock().unwrap() += 1;
            Ok(Vec::new())
        }
    }

    struct FailingDetector;

    impl FaceDetector for FailingDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _orientation: ImageOrientation,
        ) -> Result<Vec<NormalizedBox>, Box<dyn std::error::Error>> {
            Err("model exploded".into())
        }
    }

    /// Sleeps per configured delay before answering; call `i` reports
    /// a box at `x = 0.05 * (i + 1)` so results are distinguishable.
    struct StaggeredDetector {
        delays: Vec<Duration>,
        calls: usize,
    }

    impl FaceDetector for StaggeredDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _orientation: ImageOrientation,
        ) -> Result<Vec<NormalizedBox>, Box<dyn std::error::Error>> {
            let i = self.calls;
            self.calls += 1;
            if let Some(delay) = self.delays.get(i) {
                thread::sleep(*delay);
            }
            Ok(vec![NormalizedBox::new(
                0.05 * (i as f64 + 1.0),
                0.1,
                0.1,
                0.1,
            )])
        }
    }

    // --- Helpers ---

    fn config(max_cycles: u64) -> ScanConfig {
        let mut config = ScanConfig::new(INTERVAL);
        config.max_cycles = Some(max_cycles);
        config
    }

    fn run(
        detector: Box<dyn FaceDetector>,
        source: Box<dyn FrameSource>,
        surface: &mut RecordingSurface,
        scale: f64,
        config: ScanConfig,
    ) -> Result<(), Box<dyn std::error::Error>> {
        ThreadedScanExecutor::new().run(
            source,
            Box::new(StubSensor),
            detector,
            surface,
            OverlayProjector::new(scale),
            None,
            config,
        )
    }

    // --- Tests ---

    #[test]
    fn test_places_projected_overlays() {
        let detector = ScriptedDetector::new(vec![vec![NormalizedBox::new(0.25, 0.4, 0.2, 0.2)]]);
        let mut surface = RecordingSurface::default();

        run(
            Box::new(detector),
            Box::new(StubSource { available: true }),
            &mut surface,
            2.5,
            config(1),
        )
        .unwrap();

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.overlays.len(), 1);
        let rect = surface.overlays[0].rect;
        assert_relative_eq!(rect.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(rect.y, 250.0, epsilon = 1e-9);
        assert_relative_eq!(rect.width, 500.0, epsilon = 1e-9);
        assert_relative_eq!(rect.height, 500.0, epsilon = 1e-9);
        assert!(!surface.overlays[0].has_content());
    }

    #[test]
    fn test_cycles_without_frames_skip_detection() {
        let calls = Arc::new(Mutex::new(0));
        let detector = CountingDetector {
            calls: calls.clone(),
        };
        let mut surface = RecordingSurface::default();

        run(
            Box::new(detector),
            Box::new(StubSource { available: false }),
            &mut surface,
            2.5,
            config(3),
        )
        .unwrap();

        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(surface.clears, 3);
        assert!(surface.overlays.is_empty());
    }

    #[test]
    fn test_detector_failure_means_no_faces_this_cycle() {
        let mut surface = RecordingSurface::default();

        run(
            Box::new(FailingDetector),
            Box::new(StubSource { available: true }),
            &mut surface,
            2.5,
            config(2),
        )
        .unwrap();

        assert_eq!(surface.clears, 2);
        assert!(surface.overlays.is_empty());
    }

    #[test]
    fn test_precancelled_run_does_nothing() {
        let mut surface = RecordingSurface::default();
        let mut config = config(5);
        config.cancelled = Arc::new(AtomicBool::new(true));

        run(
            Box::new(ScriptedDetector::new(vec![])),
            Box::new(StubSource { available: true }),
            &mut surface,
            2.5,
            config,
        )
        .unwrap();

        assert_eq!(surface.clears, 0);
        assert!(surface.overlays.is_empty());
    }

    #[test]
    fn test_callback_false_stops_an_unbounded_run() {
        let invocations = Arc::new(Mutex::new(0usize));
        let seen = invocations.clone();

        let mut config = ScanConfig::new(INTERVAL);
        config.on_cycle = Some(Box::new(move |_cycle, _placed| {
            *seen.lock().unwrap() += 1;
            false
        }));

        let detector =
            ScriptedDetector::new(vec![vec![NormalizedBox::new(0.1, 0.1, 0.2, 0.2)]]);
        let mut surface = RecordingSurface::default();

        // Completing at all proves the callback ended the run.
        run(
            Box::new(detector),
            Box::new(StubSource { available: true }),
            &mut surface,
            2.5,
            config,
        )
        .unwrap();

        assert!(*invocations.lock().unwrap() >= 1);
    }

    #[test]
    fn test_slow_cycle_results_are_discarded_as_stale() {
        // Cycle 1 takes several intervals to detect; cycles 2-4 queue
        // up behind it. Only cycle 4 (the most recently started) may
        // reach the surface.
        let detector = StaggeredDetector {
            delays: vec![Duration::from_millis(80)],
            calls: 0,
        };
        let mut surface = RecordingSurface::default();

        run(
            Box::new(detector),
            Box::new(StubSource { available: true }),
            &mut surface,
            1.0,
            config(4),
        )
        .unwrap();

        assert_eq!(surface.clears, 4);
        assert_eq!(surface.overlays.len(), 1);
        // Call index 3 -> x = 0.05 * 4 = 0.2 -> 200px at unit scale.
        assert_relative_eq!(surface.overlays[0].rect.x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(surface.overlays[0].rect.width, 100.0, epsilon = 1e-9);
    }
}
