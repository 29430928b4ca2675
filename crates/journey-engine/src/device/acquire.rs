use super::{DeviceError, GpuInit};

/// Creates an instance that may pick any backend.
pub(crate) fn create_instance() -> wgpu::Instance {
    wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    })
}

/// Requests an adapter, optionally compatible with `surface`.
pub(crate) async fn request_adapter(
    instance: &wgpu::Instance,
    init: &GpuInit,
    surface: Option<&wgpu::Surface<'_>>,
) -> Result<wgpu::Adapter, DeviceError> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: init.power_preference,
            compatible_surface: surface,
            force_fallback_adapter: false,
        })
        .await
        .map_err(DeviceError::unsupported)?;

    let info = adapter.get_info();
    log::info!("adapter: {} ({:?})", info.name, info.backend);

    Ok(adapter)
}

/// Opens a logical device and its queue on `adapter`.
pub(crate) async fn request_device(
    adapter: &wgpu::Adapter,
    init: &GpuInit,
    label: &str,
) -> Result<(wgpu::Device, wgpu::Queue), DeviceError> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some(label),
            required_features: init.required_features,
            required_limits: init.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .map_err(DeviceError::unsupported)
}
