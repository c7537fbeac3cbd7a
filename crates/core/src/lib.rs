//! Face overlay placement for live camera feeds.
//!
//! A scan loop samples the current frame of a live feed on a fixed
//! interval, hands it to a pluggable face detector on a worker thread,
//! and places an enlarged image overlay over every reported face on
//! the display-owning thread. Camera, detector, and display are ports
//! (`domain` traits); this crate ships simulated adapters so the loop
//! is runnable without real hardware or an ML runtime.

pub mod capture;
pub mod detection;
pub mod display;
pub mod geometry;
pub mod pipeline;
pub mod shared;
