//! Lesson 2: many triangles, one uniform buffer and bind group per triangle.
//!
//! Setup runs once the window's device exists: pipeline first, then the
//! object table with a 32-byte uniform buffer and a bind group per object.
//! Every frame rewrites each object's scale for the current aspect ratio
//! before drawing it, so resizes keep the triangles undistorted.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wgpu::util::DeviceExt;

use journey_engine::core::{App, AppControl, FrameCtx};
use journey_engine::paint::Color;
use journey_engine::render::RenderCtx;

use crate::objects::{ObjectSink, ObjectTable, ObjectUniform, OBJECT_COUNT};
use crate::pipeline::create_render_pipeline;

const SHADER: &str = include_str!("shaders/uniform_triangles.wgsl");

#[derive(Debug, Clone)]
pub struct UniformTrianglesConfig {
    pub object_count: usize,
    /// Fixed seed for reproducible layouts; entropy when `None`.
    pub seed: Option<u64>,
    pub clear_color: Color,
}

impl Default for UniformTrianglesConfig {
    fn default() -> Self {
        Self {
            object_count: OBJECT_COUNT,
            seed: None,
            clear_color: Color::BACKGROUND,
        }
    }
}

/// GPU resources owned by one object.
#[derive(Debug)]
pub struct ObjectBindings {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ObjectBindings {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        index: usize,
        initial: &ObjectUniform,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("uniform for obj: {index}")),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("bind group for obj: {index}")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self { buffer, bind_group }
    }
}

/// Writes uniforms through the queue and draws into the frame's pass.
struct PassSink<'a, 'p> {
    queue: &'a wgpu::Queue,
    pass: &'a mut wgpu::RenderPass<'p>,
}

impl ObjectSink<ObjectBindings> for PassSink<'_, '_> {
    fn write_uniform(&mut self, bindings: &ObjectBindings, uniform: &ObjectUniform) {
        self.queue
            .write_buffer(&bindings.buffer, 0, bytemuck::bytes_of(uniform));
    }

    fn draw(&mut self, bindings: &ObjectBindings) {
        self.pass.set_bind_group(0, &bindings.bind_group, &[]);
        self.pass.draw(0..3, 0..1);
    }
}

struct Scene {
    pipeline: wgpu::RenderPipeline,
    objects: ObjectTable<ObjectBindings>,
}

impl Scene {
    fn new(ctx: &RenderCtx<'_>, config: &UniformTrianglesConfig) -> Self {
        let pipeline = create_render_pipeline(
            ctx.device,
            ctx.surface_format,
            "triangle with uniforms",
            SHADER,
        );
        let layout = pipeline.get_bind_group_layout(0);

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let objects = ObjectTable::random(config.object_count, &mut rng)
            .map_bindings(|i, record| ObjectBindings::new(ctx.device, &layout, i, record.uniform()));

        log::info!("created {} objects", objects.len());

        Self { pipeline, objects }
    }

    fn draw(&mut self, ctx: &RenderCtx<'_>, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);

        let aspect = ctx.aspect_ratio();
        log::trace!("drawing {} objects at aspect {aspect}", self.objects.len());

        let mut sink = PassSink {
            queue: ctx.queue,
            pass,
        };
        self.objects.record_frame(aspect, &mut sink);
    }
}

pub struct UniformTriangles {
    config: UniformTrianglesConfig,
    scene: Option<Scene>,
}

impl UniformTriangles {
    pub fn new(config: UniformTrianglesConfig) -> Self {
        Self {
            config,
            scene: None,
        }
    }
}

impl App for UniformTriangles {
    fn on_gpu_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        self.scene = Some(Scene::new(ctx, &self.config));
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let clear = self.config.clear_color;
        let Some(scene) = self.scene.as_mut() else {
            return AppControl::Continue;
        };

        ctx.render(clear, |rctx, pass| scene.draw(rctx, pass))
    }
}
