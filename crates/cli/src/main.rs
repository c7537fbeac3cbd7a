use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use ardecal_core::capture::domain::frame_source::FrameSource;
use ardecal_core::capture::domain::orientation_sensor::OrientationSensor;
use ardecal_core::capture::infrastructure::fixed_orientation_sensor::FixedOrientationSensor;
use ardecal_core::capture::infrastructure::synthetic_frame_source::SyntheticFrameSource;
use ardecal_core::detection::domain::face_detector::FaceDetector;
use ardecal_core::detection::infrastructure::simulated_detector::SimulatedDetector;
use ardecal_core::display::domain::sprite::Sprite;
use ardecal_core::display::infrastructure::log_surface::LogOverlaySurface;
use ardecal_core::geometry::orientation::DeviceOrientation;
use ardecal_core::geometry::overlay_projector::OverlayProjector;
use ardecal_core::geometry::viewport::Viewport;
use ardecal_core::pipeline::infrastructure::threaded_scan_executor::ThreadedScanExecutor;
use ardecal_core::pipeline::scan_executor::{ScanConfig, ScanExecutor};

/// Normalized edge length of each simulated face.
const SIMULATED_FACE_SIZE: f64 = 0.15;

/// Orbit advance per detection cycle, in radians.
const SIMULATED_FACE_STEP: f64 = 0.35;

/// Face overlay scan loop over a simulated camera feed.
#[derive(Parser)]
#[command(name = "ardecal")]
struct Cli {
    /// Display width in pixels.
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Display height in pixels.
    #[arg(long, default_value = "720")]
    height: u32,

    /// Overlay enlargement factor relative to the detected face.
    #[arg(long, default_value = "2.5")]
    scale: f64,

    /// Milliseconds between detection cycles.
    #[arg(long, default_value = "1000")]
    interval_ms: u64,

    /// Number of cycles to run before exiting.
    #[arg(long, default_value = "10")]
    cycles: u64,

    /// Device orientation: portrait, portrait-upside-down,
    /// landscape-left, landscape-right, face-up, face-down.
    #[arg(long, default_value = "portrait")]
    orientation: String,

    /// Image file to place over detected faces.
    #[arg(long)]
    sprite: Option<PathBuf>,

    /// Number of simulated faces in the feed.
    #[arg(long, default_value = "1")]
    faces: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let orientation = parse_orientation(&cli.orientation)?;

    // A missing or unreadable asset degrades the overlays instead of
    // failing the run.
    let sprite = match &cli.sprite {
        Some(path) => match Sprite::from_file(path) {
            Ok(sprite) => Some(Arc::new(sprite)),
            Err(e) => {
                log::warn!("overlay sprite unavailable: {e}");
                None
            }
        },
        None => None,
    };

    let source: Box<dyn FrameSource> = Box::new(SyntheticFrameSource::new(cli.width, cli.height));
    let sensor: Box<dyn OrientationSensor> = Box::new(FixedOrientationSensor::new(orientation));
    let detector: Box<dyn FaceDetector> = Box::new(SimulatedDetector::new(
        cli.faces,
        SIMULATED_FACE_SIZE,
        SIMULATED_FACE_STEP,
    ));
    let mut surface = LogOverlaySurface::new(Viewport::new(cli.width as f64, cli.height as f64));

    let mut config = ScanConfig::new(Duration::from_millis(cli.interval_ms));
    config.max_cycles = Some(cli.cycles);
    config.on_cycle = Some(Box::new(|cycle, placed| {
        eprint!("\rCycle {cycle}: {placed} overlays placed");
        true
    }));

    ThreadedScanExecutor::new().run(
        source,
        sensor,
        detector,
        &mut surface,
        OverlayProjector::new(cli.scale),
        sprite,
        config,
    )?;
    eprintln!();
    log::info!("scan finished after {} cycles", cli.cycles);

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.width == 0 || cli.height == 0 {
        return Err(format!(
            "Viewport dimensions must be positive, got {}x{}",
            cli.width, cli.height
        )
        .into());
    }
    if cli.scale <= 0.0 || !cli.scale.is_finite() {
        return Err(format!("Scale must be positive, got {}", cli.scale).into());
    }
    if cli.interval_ms == 0 {
        return Err("Interval must be at least 1 ms".into());
    }
    if cli.cycles == 0 {
        return Err("Cycle count must be at least 1".into());
    }
    Ok(())
}

fn parse_orientation(value: &str) -> Result<DeviceOrientation, Box<dyn std::error::Error>> {
    Ok(match value {
        "portrait" => DeviceOrientation::Portrait,
        "portrait-upside-down" => DeviceOrientation::PortraitUpsideDown,
        "landscape-left" => DeviceOrientation::LandscapeLeft,
        "landscape-right" => DeviceOrientation::LandscapeRight,
        "face-up" => DeviceOrientation::FaceUp,
        "face-down" => DeviceOrientation::FaceDown,
        other => return Err(format!("Unknown orientation '{other}'").into()),
    })
}
