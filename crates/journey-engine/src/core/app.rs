use anyhow::Result;
use winit::event::WindowEvent;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the lessons.
pub trait App {
    /// Called once when the window's device and surface exist, before any frame.
    ///
    /// Pipelines and per-object GPU resources are created here. An error stops
    /// the runtime and is returned from [`Runtime::run`](crate::window::Runtime::run).
    fn on_gpu_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
