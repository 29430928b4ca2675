//! webgpu-journey engine crate.
//!
//! Owns the platform + GPU runtime pieces the lessons build on: device
//! acquisition, surface management, the window event loop and its resize
//! handling, the per-frame render scope and logging setup.

pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
