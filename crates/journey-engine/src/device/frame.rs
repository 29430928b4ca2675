/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next one.
/// It is presented when dropped after [`Gpu::submit`](super::Gpu::submit).
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
