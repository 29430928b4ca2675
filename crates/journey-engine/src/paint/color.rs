/// Straight-alpha RGBA color with components in `[0, 1]`.
///
/// The lessons draw opaque geometry without blending, so no premultiplication
/// is involved.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Background used by every lesson's render pass.
    pub const BACKGROUND: Self = Self::rgb(0.3, 0.3, 0.3);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to the `f64` color used by render pass clear operations.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_opaque_grey() {
        let c = Color::BACKGROUND.to_wgpu();
        assert!((c.r - 0.3).abs() < 1e-6);
        assert!((c.g - 0.3).abs() < 1e-6);
        assert!((c.b - 0.3).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn array_round_trips() {
        let arr = [0.1, 0.2, 0.3, 0.4];
        assert_eq!(Color::from(arr).to_array(), arr);
    }
}
