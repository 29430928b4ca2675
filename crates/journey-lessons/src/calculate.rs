//! Lesson 3: double an array of floats in a compute shader and read it back.

use anyhow::{ensure, Result};

use journey_engine::device::{ComputeDevice, GpuInit};

const SHADER: &str = include_str!("shaders/doubling.wgsl");

pub const DEFAULT_INPUT: [f32; 3] = [1.0, 3.0, 5.0];

/// Compute pipeline that doubles each element of a storage buffer in place.
pub struct DoublingKernel {
    pipeline: wgpu::ComputePipeline,
}

impl DoublingKernel {
    pub fn new(device: &wgpu::Device) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("doubling compute module"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("doubling compute pipeline"),
            layout: None,
            module: &module,
            entry_point: Some("double_values"),
            compilation_options: Default::default(),
            cache: None,
        });

        Self { pipeline }
    }

    /// Uploads `input`, doubles it on the GPU and returns the result.
    ///
    /// One workgroup is dispatched per element, so `input` may hold at most
    /// `max_compute_workgroups_per_dimension` values.
    pub fn run(&self, gpu: &ComputeDevice, input: &[f32]) -> Result<Vec<f32>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let device = gpu.device();
        let max = device.limits().max_compute_workgroups_per_dimension;
        let count = u32::try_from(input.len()).unwrap_or(u32::MAX);
        ensure!(
            count <= max,
            "{} values exceed the {max} workgroups one dispatch can cover",
            input.len()
        );

        let bytes: &[u8] = bytemuck::cast_slice(input);
        let size = bytes.len() as u64;

        let work_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("work buffer"),
            size,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_SRC
                | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        gpu.queue().write_buffer(&work_buffer, 0, bytes);

        let result_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("result buffer"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bindGroup for work buffer"),
            layout: &self.pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: work_buffer.as_entire_binding(),
            }],
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("doubling encoder"),
        });

        {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("doubling compute pass"),
                timestamp_writes: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &bind_group, &[]);
            pass.dispatch_workgroups(count, 1, 1);
        }

        encoder.copy_buffer_to_buffer(&work_buffer, 0, &result_buffer, 0, size);
        gpu.queue().submit(std::iter::once(encoder.finish()));

        gpu.read_mapped(&result_buffer)
    }
}

/// Runs the lesson on a headless device and logs input and result.
pub fn run(init: GpuInit) -> Result<()> {
    let gpu = ComputeDevice::acquire_blocking(init)?;
    log::debug!("compute adapter: {}", gpu.adapter_info().name);

    let kernel = DoublingKernel::new(gpu.device());
    let input = DEFAULT_INPUT;
    let result = kernel.run(&gpu, &input)?;

    log::info!("input {input:?}");
    log::info!("result {result:?}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Headless device, or `None` on machines without any usable adapter.
    fn device() -> Option<ComputeDevice> {
        match ComputeDevice::acquire_blocking(GpuInit::default()) {
            Ok(gpu) => Some(gpu),
            Err(err) => {
                eprintln!("skipping GPU test: {err}");
                None
            }
        }
    }

    #[test]
    fn doubles_default_input() {
        let Some(gpu) = device() else { return };
        let kernel = DoublingKernel::new(gpu.device());
        let result = kernel.run(&gpu, &DEFAULT_INPUT).unwrap();
        assert_eq!(result, vec![2.0, 6.0, 10.0]);
    }

    #[test]
    fn empty_input_needs_no_dispatch() {
        let Some(gpu) = device() else { return };
        let kernel = DoublingKernel::new(gpu.device());
        assert!(kernel.run(&gpu, &[]).unwrap().is_empty());
    }
}
