//! Window and OpenGL context creation.

use crate::{Error, Result};
use anyhow::{anyhow, Context as _};
use glutin::{
    config::{ColorBufferType, ConfigTemplateBuilder},
    context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version},
    display::GetGlDisplay,
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use std::{borrow::Cow, ffi::CString, fmt, num::NonZeroU32};
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

pub type Window = ::winit::window::Window;

const VSYNC_INTERVAL: NonZeroU32 = match NonZeroU32::new(1) {
    Some(interval) => interval,
    None => unreachable!(),
};

/// Requested window and framebuffer attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct WindowCreateInfo {
    pub title: Cow<'static, str>,
    pub width: u32,
    pub height: u32,
    pub color_bits: u8,
    pub alpha_bits: u8,
    pub depth_bits: u8,
    pub stencil_bits: u8,
    pub double_buffer: bool,
    pub msaa_samples: u8,
    pub gl_version: (u8, u8),
    pub vsync: bool,
    pub resizable: bool,
}

impl Default for WindowCreateInfo {
    fn default() -> Self {
        Self {
            title: "".into(),
            width: 1024,
            height: 768,
            color_bits: 8,
            alpha_bits: 8,
            depth_bits: 24,
            stencil_bits: 8,
            double_buffer: true,
            msaa_samples: 4,
            gl_version: (3, 3),
            vsync: true,
            resizable: false,
        }
    }
}

/// An open window together with its current OpenGL context and surface.
///
/// Created once at startup and owned for the life of the process; dropping it
/// tears down the surface and context with the window.
#[must_use]
pub struct DisplayContext {
    window: Window,
    surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
}

impl fmt::Debug for DisplayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayContext")
            .field("window_id", &self.window.id())
            .finish_non_exhaustive()
    }
}

impl DisplayContext {
    /// Open a window and create a current OpenGL context for it, returning
    /// the display pair and the loaded GL function table.
    ///
    /// # Errors
    ///
    /// Any failure here is an [Error::WindowCreation] setup failure.
    pub fn create<T>(
        event_loop: &EventLoop<T>,
        info: &WindowCreateInfo,
    ) -> Result<(Self, glow::Context)> {
        Self::try_create(event_loop, info).map_err(Error::WindowCreation)
    }

    fn try_create<T>(
        event_loop: &EventLoop<T>,
        info: &WindowCreateInfo,
    ) -> anyhow::Result<(Self, glow::Context)> {
        let window_builder = WindowBuilder::new()
            .with_title(info.title.clone())
            .with_inner_size(LogicalSize::new(f64::from(info.width), f64::from(info.height)))
            .with_resizable(info.resizable);

        let mut template = ConfigTemplateBuilder::new()
            .with_buffer_type(ColorBufferType::Rgb {
                r_size: info.color_bits,
                g_size: info.color_bits,
                b_size: info.color_bits,
            })
            .with_alpha_size(info.alpha_bits)
            .with_depth_size(info.depth_bits)
            .with_stencil_size(info.stencil_bits)
            .with_single_buffering(!info.double_buffer);
        if info.msaa_samples > 0 {
            template = template.with_multisampling(info.msaa_samples);
        }

        let want_msaa = info.msaa_samples > 0;
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                // The builder never yields an empty config iterator.
                #[allow(clippy::unwrap_used)]
                let config = configs
                    .reduce(|best, config| {
                        let better = if want_msaa {
                            config.num_samples() > best.num_samples()
                        } else {
                            config.num_samples() < best.num_samples()
                        };
                        if better {
                            config
                        } else {
                            best
                        }
                    })
                    .unwrap();
                config
            })
            .map_err(|err| anyhow!("no matching framebuffer configuration: {err}"))?;
        let window = window.context("failed to create window")?;
        tracing::debug!(
            samples = gl_config.num_samples(),
            "selected framebuffer configuration"
        );

        let gl_display = gl_config.display();
        let (major, minor) = info.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(window.raw_window_handle()));
        let not_current_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attributes)
                .with_context(|| format!("failed to create OpenGL {major}.{minor} context"))?
        };

        let surface_attributes = window.build_surface_attributes(<_>::default());
        let surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &surface_attributes)
                .context("failed to create window surface")?
        };

        let gl_context = not_current_context
            .make_current(&surface)
            .context("failed to make OpenGL context current")?;

        let interval = if info.vsync {
            SwapInterval::Wait(VSYNC_INTERVAL)
        } else {
            SwapInterval::DontWait
        };
        if let Err(err) = surface.set_swap_interval(&gl_context, interval) {
            tracing::warn!("failed to set swap interval: {err}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| {
                let symbol = CString::new(symbol).unwrap_or_default();
                gl_display.get_proc_address(symbol.as_c_str()).cast()
            })
        };

        Ok((
            Self {
                window,
                surface,
                gl_context,
            },
            gl,
        ))
    }

    /// The underlying winit window.
    #[inline]
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Block until the back and front buffers are swapped.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.gl_context)
            .context("failed to swap buffers")?;
        Ok(())
    }

    /// Resize the GL surface. Required on EGL-style platforms; a no-op
    /// elsewhere. Zero-sized dimensions are ignored.
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.gl_context, width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_create_info_matches_demo_window() {
        let info = WindowCreateInfo::default();
        assert_eq!((info.width, info.height), (1024, 768));
        assert_eq!(info.color_bits, 8);
        assert_eq!(info.alpha_bits, 8);
        assert_eq!(info.depth_bits, 24);
        assert_eq!(info.stencil_bits, 8);
        assert!(info.double_buffer);
        assert!(!info.resizable);
    }
}
