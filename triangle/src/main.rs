//! A triangle under a perspective projection.
//!
//! Opens a 1024x768 window with a multisampled OpenGL 3.3 context, compiles a
//! vertex/geometry/fragment shader pipeline from files, uploads three
//! vertices at z = -2, and draws them once per frame under a 90° projection.
//! The geometry stage is a pass-through; it exists only to demonstrate the
//! optional third stage of the pipeline.

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
use std::path::PathBuf;

const APPLICATION_NAME: &str = "Projected Triangle";
const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 768;

fn main() -> Result<()> {
    let _trace = trace::initialize("triangle");
    run_application()
}

fn run_application() -> Result<()> {
    let engine = Engine::new(APPLICATION_NAME, env!("CARGO_PKG_VERSION"))
        .with_window(WindowCreateInfo {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            msaa_samples: 4,
            gl_version: (3, 3),
            ..WindowCreateInfo::default()
        })
        .with_config(
            Config::new()
                .with_clear_color([1.0, 0.0, 0.0, 1.0])
                .with_depth_test(true),
        )
        .shader(Shader::vertex("triangle.vert", shader_path("triangle.vert"))?)
        .shader(Shader::geometry("triangle.geom", shader_path("triangle.geom"))?)
        .shader(Shader::fragment("triangle.frag", shader_path("triangle.frag"))?);
    engine.run(Application)?;
    Ok(())
}

fn shader_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("shaders")
        .join(name)
}

#[derive(Debug, Copy, Clone)]
#[must_use]
struct Application;

impl Update for Application {
    fn on_start(&mut self, cx: &mut Context) -> glint_engine::Result<()> {
        tracing::info!("application started");
        let vertices = [
            vec3!(0.0, 0.5, -2.0),
            vec3!(-0.5, -0.5, -2.0),
            vec3!(0.5, -0.5, -2.0),
        ];
        cx.upload_vertices("posIn", 3, &vertices)?;
        cx.set_projection(projection())?;
        Ok(())
    }

    fn on_update(&mut self, _delta_time: f32, _cx: &mut Context) -> glint_engine::Result<()> {
        // Static scene; the engine clears and draws every frame.
        Ok(())
    }

    fn on_stop(&mut self, _cx: &mut Context) {
        tracing::info!("application shutting down");
    }
}

fn projection() -> Mat4 {
    Mat4::perspective(Degrees::from(90.0), 4.0 / 3.0, 1.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_matches_window_aspect() {
        let matrix = projection();
        // 90° fov: f == 1, so x scale is 1 / (4/3).
        assert!((matrix[(0, 0)] - 0.75).abs() <= f32::EPSILON);
        assert_eq!(matrix[(1, 1)], 1.0 / (std::f32::consts::FRAC_PI_4).tan());
        assert_eq!(matrix[(2, 3)], -1.0);
    }

    #[test]
    fn shader_sources_exist_and_are_non_empty() {
        for name in ["triangle.vert", "triangle.geom", "triangle.frag"] {
            let source =
                std::fs::read_to_string(shader_path(name)).unwrap_or_else(|_| String::new());
            assert!(!source.trim().is_empty(), "{name} is missing or empty");
        }
    }

    #[test]
    fn vertex_shader_declares_the_projection_uniform() {
        // Context::set_projection uploads to this uniform by name.
        let source = std::fs::read_to_string(shader_path("triangle.vert"))
            .unwrap_or_else(|_| String::new());
        assert!(source.contains("uniform mat4 projectionMatrix"));
    }

    #[test]
    fn engine_config_is_constructible_here() {
        // The pacing fields are engine-internal, so the demo goes through
        // the builder setters rather than record-update syntax.
        let config = Config::new()
            .with_clear_color([1.0, 0.0, 0.0, 1.0])
            .with_depth_test(true);
        assert_eq!(config.clear_color, [1.0, 0.0, 0.0, 1.0]);
        assert!(config.depth_test);
    }
}
