pub mod frame_source;
pub mod orientation_sensor;
