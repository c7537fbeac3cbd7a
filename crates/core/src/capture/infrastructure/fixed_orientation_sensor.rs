use crate::capture::domain::orientation_sensor::OrientationSensor;
use crate::geometry::orientation::DeviceOrientation;

/// Sensor pinned to one configured rotation state.
///
/// Stand-in for a real IMU; the demo binary uses it to exercise the
/// orientation-dependent detector path.
pub struct FixedOrientationSensor {
    orientation: DeviceOrientation,
}

impl FixedOrientationSensor {
    pub fn new(orientation: DeviceOrientation) -> Self {
        Self { orientation }
    }
}

impl OrientationSensor for FixedOrientationSensor {
    fn orientation(&self) -> DeviceOrientation {
        self.orientation
    }
}
