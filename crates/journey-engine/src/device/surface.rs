use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *caps.formats.first()?;

    if prefer_srgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Clamps each dimension of a reported size to `[1, max_dimension]`.
///
/// Surfaces cannot be configured at 0x0 nor above the device's 2D texture limit.
pub fn clamp_surface_size(size: PhysicalSize<u32>, max_dimension: u32) -> PhysicalSize<u32> {
    let max = max_dimension.max(1);
    PhysicalSize::new(size.width.clamp(1, max), size.height.clamp(1, max))
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    let clamped = clamp_surface_size(new_size, device.limits().max_texture_dimension_2d);
    if clamped != new_size {
        log::debug!(
            "surface size {}x{} clamped to {}x{}",
            new_size.width,
            new_size.height,
            clamped.width,
            clamped.height
        );
    }

    *size = clamped;
    config.width = clamped.width;
    config.height = clamped.height;

    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            surface.configure(device, config);
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(formats: &[wgpu::TextureFormat]) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
            ..Default::default()
        }
    }

    // ── clamp ─────────────────────────────────────────────────────────────

    #[test]
    fn clamp_keeps_sizes_in_range() {
        let s = clamp_surface_size(PhysicalSize::new(640, 480), 8192);
        assert_eq!(s, PhysicalSize::new(640, 480));
    }

    #[test]
    fn clamp_raises_zero_to_one() {
        let s = clamp_surface_size(PhysicalSize::new(0, 0), 8192);
        assert_eq!(s, PhysicalSize::new(1, 1));
    }

    #[test]
    fn clamp_caps_at_device_limit() {
        let s = clamp_surface_size(PhysicalSize::new(10_000, 300), 8192);
        assert_eq!(s, PhysicalSize::new(8192, 300));
    }

    #[test]
    fn clamp_bounds_hold_for_many_sizes() {
        let max = 2048;
        for w in [1, 2, 100, 2047, 2048, 2049, 50_000] {
            for h in [1, 3, 999, 4096] {
                let s = clamp_surface_size(PhysicalSize::new(w, h), max);
                assert!((1..=max).contains(&s.width));
                assert!((1..=max).contains(&s.height));
            }
        }
    }

    // ── format / alpha ────────────────────────────────────────────────────

    #[test]
    fn format_prefers_srgb() {
        let c = caps(&[
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ]);
        assert_eq!(
            choose_surface_format(&c, true),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(
            choose_surface_format(&c, false),
            Some(wgpu::TextureFormat::Bgra8Unorm)
        );
    }

    #[test]
    fn format_none_when_unsupported() {
        assert_eq!(choose_surface_format(&caps(&[]), true), None);
    }

    #[test]
    fn alpha_falls_back_to_first_supported() {
        let c = caps(&[wgpu::TextureFormat::Rgba8Unorm]);
        assert_eq!(
            choose_alpha_mode(&c, Some(wgpu::CompositeAlphaMode::PreMultiplied)),
            wgpu::CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&c, None), wgpu::CompositeAlphaMode::Opaque);
    }
}
