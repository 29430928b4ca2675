//! webgpu-journey lessons.
//!
//! Three small programs on top of `journey-engine`: a hardcoded triangle,
//! a hundred triangles with per-object uniforms, and a compute pass that
//! doubles an array.

pub mod calculate;
pub mod first_triangle;
pub mod lesson;
pub mod objects;
pub mod uniform_triangles;

mod pipeline;

pub use lesson::Lesson;
