//! Renderer-facing handles.
//!
//! Lessons receive a [`RenderCtx`] when their GPU resources are created and on
//! every frame, together with the frame's single render pass.

mod ctx;

pub use ctx::{aspect_ratio, RenderCtx};
