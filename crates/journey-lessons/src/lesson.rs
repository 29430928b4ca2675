use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use winit::dpi::LogicalSize;

use journey_engine::device::GpuInit;
use journey_engine::window::{Runtime, RuntimeConfig};

use crate::calculate;
use crate::first_triangle::FirstTriangle;
use crate::uniform_triangles::{UniformTriangles, UniformTrianglesConfig};

/// One runnable tutorial program.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Lesson {
    FirstTriangle,
    #[default]
    UniformTriangles,
    Calculate,
}

impl Lesson {
    pub const ALL: [Lesson; 3] = [
        Lesson::FirstTriangle,
        Lesson::UniformTriangles,
        Lesson::Calculate,
    ];

    /// Command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            Lesson::FirstTriangle => "first-triangle",
            Lesson::UniformTriangles => "uniform-triangles",
            Lesson::Calculate => "calculate",
        }
    }

    /// Runs the lesson to completion.
    ///
    /// Render lessons return when their window closes.
    pub fn run(self) -> Result<()> {
        log::info!("running lesson {self}");

        // Use the surface's preferred format as-is.
        let gpu_init = GpuInit {
            prefer_srgb: false,
            ..GpuInit::default()
        };

        match self {
            Lesson::FirstTriangle => {
                Runtime::run(window_config("first triangle"), gpu_init, FirstTriangle::new())
            }
            Lesson::UniformTriangles => Runtime::run(
                window_config("uniform triangles"),
                gpu_init,
                UniformTriangles::new(UniformTrianglesConfig::default()),
            ),
            Lesson::Calculate => calculate::run(gpu_init),
        }
    }
}

fn window_config(title: &str) -> RuntimeConfig {
    RuntimeConfig {
        title: format!("webgpu-journey: {title}"),
        initial_size: LogicalSize::new(800.0, 600.0),
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(lesson) = Lesson::ALL.into_iter().find(|l| l.name() == s) {
            return Ok(lesson);
        }

        let known: Vec<&str> = Lesson::ALL.iter().map(|l| l.name()).collect();
        bail!("unknown lesson {s:?}; expected one of: {}", known.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for lesson in Lesson::ALL {
            assert_eq!(lesson.name().parse::<Lesson>().unwrap(), lesson);
        }
    }

    #[test]
    fn unknown_name_lists_lessons() {
        let err = "triangle".parse::<Lesson>().unwrap_err().to_string();
        assert!(err.contains("\"triangle\""));
        assert!(err.contains("first-triangle, uniform-triangles, calculate"));
    }

    #[test]
    fn default_is_uniform_triangles() {
        assert_eq!(Lesson::default(), Lesson::UniformTriangles);
    }
}
