//! Engine context passed to application callbacks.

use crate::{
    config::Config,
    matrix::Mat4,
    renderer::{PrimitiveKind, Renderer},
    Result,
};
use std::time::{Duration, Instant};

#[derive(Debug)]
#[must_use]
pub struct Context {
    pub(crate) window_title: String,
    pub(crate) last_frame_time: Instant,
    pub(crate) target_frame_rate: Duration,
    pub(crate) fps_counter: usize,
    pub(crate) fps_timer: Duration,
    pub(crate) suspended: bool,
    pub(crate) should_quit: bool,
    pub(crate) config: Config,
    pub(crate) renderer: Renderer,
}

impl Context {
    pub(crate) fn new(config: Config, renderer: Renderer) -> Self {
        Self {
            window_title: String::new(),
            last_frame_time: Instant::now(),
            target_frame_rate: config.target_frame_rate(),
            fps_counter: 0,
            fps_timer: Duration::default(),
            suspended: false,
            should_quit: false,
            config,
            renderer,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.suspended
    }

    /// Request a clean exit at the end of the current frame.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub(crate) fn on_resized(&mut self, width: u32, height: u32) {
        tracing::debug!("resized event: {width}x{height}");
        self.suspended = width == 0 || height == 0;
        if !self.suspended {
            self.renderer.on_resized(width, height);
        }
    }

    /// Upload static vertex positions and bind them to a named attribute.
    pub fn upload_vertices<V: bytemuck::Pod>(
        &mut self,
        attribute: &str,
        components_per_vertex: i32,
        vertices: &[V],
    ) -> Result<()> {
        self.renderer.upload_vertices(
            attribute,
            components_per_vertex,
            bytemuck::cast_slice(vertices),
            vertices.len() as i32,
        )
    }

    /// Upload a 4x4 matrix uniform.
    pub fn set_uniform_mat4(&mut self, name: &str, matrix: Mat4) -> Result<()> {
        self.renderer.set_uniform_mat4(name, matrix)
    }

    /// Upload the projection matrix to the `projectionMatrix` uniform.
    pub fn set_projection(&mut self, projection: Mat4) -> Result<()> {
        self.set_uniform_mat4("projectionMatrix", projection)
    }

    /// Override the configured clear color.
    pub fn set_clear_color(&mut self, color: [f32; 4]) {
        self.renderer.set_clear_color(color);
    }

    /// Set the primitive topology for subsequent frames.
    pub fn set_primitive(&mut self, primitive: PrimitiveKind) {
        self.renderer.set_primitive(primitive);
    }

    /// Clear the framebuffer and draw the uploaded vertices.
    pub fn draw_frame(&mut self) {
        self.renderer.draw_frame();
    }
}
