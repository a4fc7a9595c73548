//! The smallest possible shader-pipeline triangle.
//!
//! Opens a 600x400 OpenGL 3.0 window, compiles a pair of embedded shaders,
//! and draws a single red triangle spanning the viewport until Escape is
//! pressed or the window is closed. No projection, no depth buffer.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

use anyhow::Result;
use glint_engine::{prelude::*, trace};

const APPLICATION_NAME: &str = "Hello Triangle";
const WINDOW_WIDTH: u32 = 600;
const WINDOW_HEIGHT: u32 = 400;

const VERTEX_SHADER: &str = "\
#version 130

in vec4 posIn;

void main() {
    gl_Position = posIn;
}
";

const FRAGMENT_SHADER: &str = "\
#version 130

out vec4 fragColor;

void main() {
    fragColor = vec4(1.0, 0.0, 0.0, 1.0);
}
";

fn main() -> Result<()> {
    let _trace = trace::initialize("minimal");
    run_application()
}

fn run_application() -> Result<()> {
    let engine = Engine::new(APPLICATION_NAME, env!("CARGO_PKG_VERSION"))
        .with_window(WindowCreateInfo {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            msaa_samples: 0,
            gl_version: (3, 0),
            ..WindowCreateInfo::default()
        })
        .shader(Shader::from_source(
            "minimal.vert",
            ShaderStage::Vertex,
            VERTEX_SHADER,
        )?)
        .shader(Shader::from_source(
            "minimal.frag",
            ShaderStage::Fragment,
            FRAGMENT_SHADER,
        )?);
    engine.run(Application)?;
    Ok(())
}

#[derive(Debug, Copy, Clone)]
#[must_use]
struct Application;

impl Update for Application {
    fn on_start(&mut self, cx: &mut Context) -> glint_engine::Result<()> {
        tracing::info!("application started");
        let vertices = [
            vec4!(-1.0, -1.0, 0.0, 1.0),
            vec4!(1.0, -1.0, 0.0, 1.0),
            vec4!(0.0, 1.0, 0.0, 1.0),
        ];
        cx.upload_vertices("posIn", 4, &vertices)?;
        Ok(())
    }

    fn on_update(&mut self, _delta_time: f32, _cx: &mut Context) -> glint_engine::Result<()> {
        Ok(())
    }

    fn on_stop(&mut self, _cx: &mut Context) {
        tracing::info!("application shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_shaders_are_valid_inputs() {
        assert!(Shader::from_source("minimal.vert", ShaderStage::Vertex, VERTEX_SHADER).is_ok());
        assert!(
            Shader::from_source("minimal.frag", ShaderStage::Fragment, FRAGMENT_SHADER).is_ok()
        );
    }
}
