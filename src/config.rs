//! Start-up configuration.
//!
//! Everything has a default; the command line may override the window size
//! and switch to an orthographic projection:
//!
//! ```text
//! mesh-sandbox [WIDTH HEIGHT] [--ortho]
//! ```

use anyhow::{Context, bail};

use crate::camera::ProjectionMode;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 768;
/// Distance the camera moves along z per key press.
pub const DEFAULT_CAMERA_STEP: f32 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub clear_colour: wgpu::Color,
    pub camera_step: f32,
    pub projection: ProjectionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "mesh-sandbox".to_string(),
            clear_colour: wgpu::Color::BLACK,
            camera_step: DEFAULT_CAMERA_STEP,
            projection: ProjectionMode::Perspective,
        }
    }
}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut size = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--ortho" => config.projection = ProjectionMode::Orthographic,
                flag if flag.starts_with('-') => bail!("unknown option {flag:?}"),
                value => size.push(
                    value
                        .parse::<u32>()
                        .with_context(|| format!("invalid window dimension {value:?}"))?,
                ),
            }
        }

        match size.as_slice() {
            [] => {}
            &[width, height] => {
                if width == 0 || height == 0 {
                    bail!("window size must be non-zero, got {width}x{height}");
                }
                config.width = width;
                config.height = height;
            }
            _ => bail!("expected WIDTH HEIGHT, got {} value(s)", size.len()),
        }

        Ok(config)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let config = Config::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.camera_step, 0.2);
    }

    #[test]
    fn parses_window_size_and_projection() {
        let config = Config::from_args(["800", "600", "--ortho"]).unwrap();
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.projection, ProjectionMode::Orthographic);
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(Config::from_args(["800"]).is_err());
        assert!(Config::from_args(["800", "wide"]).is_err());
        assert!(Config::from_args(["0", "600"]).is_err());
        assert!(Config::from_args(["--wireframe"]).is_err());
    }
}
