pub mod log_surface;
