//! Color values handed to the GPU (clear colors, per-object uniforms).

pub mod color;

pub use color::Color;
