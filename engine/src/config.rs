//! Engine configuration.

use std::{env, time::Duration};

#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct Config {
    pub(crate) limit_frame_rate: bool,
    pub(crate) target_fps: u32,
    /// Color the framebuffer is cleared to at the start of every frame.
    pub clear_color: [f32; 4],
    /// Whether to depth-test fragments (and clear the depth buffer per frame).
    pub depth_test: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit_frame_rate: env::var("LIMIT_FPS").is_ok(),
            target_fps: env::var("TARGET_FPS")
                .ok()
                .and_then(|target_fps| target_fps.parse::<u32>().ok())
                .unwrap_or(60),
            clear_color: [0.0, 0.0, 0.0, 1.0],
            depth_test: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color the framebuffer is cleared to each frame.
    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Enable or disable depth testing.
    pub fn with_depth_test(mut self, depth_test: bool) -> Self {
        self.depth_test = depth_test;
        self
    }

    pub(crate) fn target_frame_rate(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_clear_is_opaque_black() {
        let config = Config::new();
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0, 1.0]);
        assert!(!config.depth_test);
    }

    #[test]
    fn builder_setters() {
        let config = Config::new()
            .with_clear_color([1.0, 0.0, 0.0, 1.0])
            .with_depth_test(true);
        assert_eq!(config.clear_color, [1.0, 0.0, 0.0, 1.0]);
        assert!(config.depth_test);
    }

    #[test]
    fn target_frame_rate() {
        let config = Config {
            target_fps: 60,
            ..Config::default()
        };
        assert_eq!(config.target_frame_rate(), Duration::from_secs(1) / 60);
    }
}
