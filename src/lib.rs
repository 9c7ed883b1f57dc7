//! Minimal OpenGL bootstrap: resolve the driver's function table through a
//! windowing-layer loader, install a clear colour, then clear and present
//! once per frame.

pub mod app;
pub mod colour;
pub mod config;
pub mod engine;
pub mod renderer;
