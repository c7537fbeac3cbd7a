/// How much larger than the detected face a placed overlay is.
pub const DEFAULT_OVERLAY_SCALE: f64 = 2.5;

/// Wall-clock delay between detection cycles.
pub const DEFAULT_SCAN_INTERVAL_MS: u64 = 1000;

/// Detection jobs that may queue for the worker before the scan loop
/// starts dropping frames instead of blocking the display.
pub const DETECTION_QUEUE_CAPACITY: usize = 8;
