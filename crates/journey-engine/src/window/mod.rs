//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the lesson window, wires them to the GPU
//! layer and reacts to resizes by reconfiguring the surface and rendering.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
