//! Lesson 1: a hardcoded red triangle on the grey background.

use anyhow::Result;

use journey_engine::core::{App, AppControl, FrameCtx};
use journey_engine::paint::Color;
use journey_engine::render::RenderCtx;

use crate::pipeline::create_render_pipeline;

const SHADER: &str = include_str!("shaders/first_triangle.wgsl");

#[derive(Default)]
pub struct FirstTriangle {
    pipeline: Option<wgpu::RenderPipeline>,
}

impl FirstTriangle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for FirstTriangle {
    fn on_gpu_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.pipeline = Some(create_render_pipeline(
            ctx.device,
            ctx.surface_format,
            "hardcoded red triangle",
            SHADER,
        ));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(pipeline) = self.pipeline.as_ref() else {
            return AppControl::Continue;
        };

        ctx.render(Color::BACKGROUND, |_, pass| {
            pass.set_pipeline(pipeline);
            pass.draw(0..3, 0..1);
        })
    }
}
