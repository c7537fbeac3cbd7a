pub mod fixed_orientation_sensor;
pub mod synthetic_frame_source;
