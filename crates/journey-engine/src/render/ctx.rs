use winit::dpi::PhysicalSize;

/// Renderer-facing context (device/queue + surface format + surface size).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Configured surface size in physical pixels (never zero).
    pub surface_size: PhysicalSize<u32>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        surface_size: PhysicalSize<u32>,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            surface_size,
        }
    }

    /// `width / height` of the surface.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.surface_size)
    }
}

/// `width / height`, with each dimension raised to at least 1.
pub fn aspect_ratio(size: PhysicalSize<u32>) -> f32 {
    size.width.max(1) as f32 / size.height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_wide_surface() {
        assert_eq!(aspect_ratio(PhysicalSize::new(200, 100)), 2.0);
        assert_eq!(aspect_ratio(PhysicalSize::new(300, 100)), 3.0);
    }

    #[test]
    fn aspect_never_divides_by_zero() {
        assert_eq!(aspect_ratio(PhysicalSize::new(0, 0)), 1.0);
    }
}
