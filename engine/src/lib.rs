#![doc = include_str!("../README.md")]
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
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

use std::io;

pub mod config;
pub mod context;
pub mod core;
pub mod event;
pub mod matrix;
pub mod num;
pub mod renderer;
pub mod shader;
pub mod trace;
#[macro_use]
pub mod vector;
pub mod window;

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
///
/// Everything here is a setup failure: unrecoverable by design, reported once
/// at the application entry point before the process exits nonzero.
#[allow(variant_size_differences)]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("window creation failed: {0}")]
    WindowCreation(anyhow::Error),
    #[error("shader `{name}` has no source")]
    EmptyShaderSource { name: String },
    #[error("failed to compile {stage} shader `{name}`: {log}")]
    ShaderCompile {
        name: String,
        stage: crate::shader::ShaderStage,
        log: String,
    },
    #[error("failed to link shader program: {0}")]
    ProgramLink(String),
    #[error("unknown vertex attribute `{0}`")]
    UnknownAttribute(String),
    #[error("unknown uniform `{0}`")]
    UnknownUniform(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub mod prelude {
    //! Most commonly used exports for setting up a demo application.

    pub use crate::{
        config::Config,
        context::Context,
        core::{Engine, Update},
        event::{Event, InputState, KeyCode},
        matrix::Mat4,
        num::{Degrees, Radians},
        renderer::PrimitiveKind,
        shader::{Shader, ShaderStage},
        vector::{Vec3, Vec4},
        window::WindowCreateInfo,
    };

    // Macros
    pub use crate::{vec3, vec4};
}
