use std::sync::mpsc;

use anyhow::{Context, Result};

use super::acquire;
use super::{DeviceError, GpuInit};

/// Headless device for compute work.
///
/// Same acquisition path as [`Gpu`](super::Gpu) without a surface.
pub struct ComputeDevice {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl ComputeDevice {
    pub async fn acquire(init: GpuInit) -> std::result::Result<Self, DeviceError> {
        let instance = acquire::create_instance();
        let adapter = acquire::request_adapter(&instance, &init, None).await?;
        let (device, queue) =
            acquire::request_device(&adapter, &init, "webgpu-journey compute device").await?;

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Blocking variant of [`acquire`](Self::acquire).
    pub fn acquire_blocking(init: GpuInit) -> std::result::Result<Self, DeviceError> {
        pollster::block_on(Self::acquire(init))
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Maps a `MAP_READ` buffer, waits for the GPU and returns a copy of its
    /// contents as `T` values.
    ///
    /// This is the one place the host blocks on the device. The buffer is
    /// unmapped again before returning. Its size must be a multiple of
    /// `size_of::<T>()`.
    pub fn read_mapped<T: bytemuck::Pod>(&self, buffer: &wgpu::Buffer) -> Result<Vec<T>> {
        let slice = buffer.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            // Receiver outlives the poll below; a send failure means it is gone already.
            let _ = tx.send(result);
        });

        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .context("failed to wait for the device")?;

        rx.recv()
            .context("buffer map callback was dropped")?
            .context("failed to map buffer for reading")?;

        let values = {
            let view = slice.get_mapped_range();
            let bytes: &[u8] = &view;
            // Mapped ranges are aligned to `wgpu::MAP_ALIGNMENT`.
            bytemuck::try_cast_slice::<u8, T>(bytes)
                .map_err(|e| anyhow::anyhow!("mapped buffer has unexpected layout: {e:?}"))?
                .to_vec()
        };
        buffer.unmap();

        Ok(values)
    }
}
