//! GPU device + surface management.
//!
//! This module is responsible for:
//! - acquiring the wgpu Adapter/Device/Queue (windowed or headless)
//! - creating & configuring the Surface (swapchain)
//! - clamping and applying surface resizes
//! - acquiring frames and providing encoders/views for rendering

mod acquire;
mod compute;
mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use compute::ComputeDevice;
pub use error::{DeviceError, SurfaceErrorAction};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::clamp_surface_size;
