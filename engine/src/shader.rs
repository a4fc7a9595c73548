//! Shader stage descriptions.
//!
//! A [Shader] is an opaque GLSL source string tagged with the pipeline stage
//! it compiles to. Compilation itself happens in [crate::renderer] once a GL
//! context exists.

use crate::{Error, Result};
use anyhow::Context as _;
use std::{borrow::Cow, fmt, fs, path::Path};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum ShaderStage {
    Vertex,
    Geometry,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => "vertex".fmt(f),
            Self::Geometry => "geometry".fmt(f),
            Self::Fragment => "fragment".fmt(f),
        }
    }
}

#[derive(Clone)]
#[must_use]
pub struct Shader {
    pub(crate) name: Cow<'static, str>,
    pub(crate) stage: ShaderStage,
    pub(crate) source: String,
}

impl fmt::Debug for Shader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shader")
            .field("name", &self.name)
            .field("stage", &self.stage)
            .field("source_len", &self.source.len())
            .finish_non_exhaustive()
    }
}

impl Shader {
    /// Create a shader from in-memory GLSL source.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyShaderSource] if the source is empty, matching
    /// the fail-fast setup behavior for missing shader files.
    pub fn from_source(
        name: impl Into<Cow<'static, str>>,
        stage: ShaderStage,
        source: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let source = source.into();
        if source.trim().is_empty() {
            return Err(Error::EmptyShaderSource {
                name: name.into_owned(),
            });
        }
        Ok(Self {
            name,
            stage,
            source,
        })
    }

    /// Read a shader from a GLSL source file.
    pub fn from_path(
        name: impl Into<Cow<'static, str>>,
        stage: ShaderStage,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read shader: {path:?}"))?;
        Self::from_source(name, stage, source)
    }

    pub fn vertex(name: impl Into<Cow<'static, str>>, path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(name, ShaderStage::Vertex, path)
    }

    pub fn geometry(name: impl Into<Cow<'static, str>>, path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(name, ShaderStage::Geometry, path)
    }

    pub fn fragment(name: impl Into<Cow<'static, str>>, path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path(name, ShaderStage::Fragment, path)
    }

    /// The stage this shader compiles to.
    #[inline]
    pub const fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// The shader's diagnostic name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_source() {
        let err = Shader::from_source("empty", ShaderStage::Vertex, "  \n");
        assert!(matches!(err, Err(Error::EmptyShaderSource { name }) if name == "empty"));
    }

    #[test]
    fn missing_file_is_a_setup_failure() {
        let result = Shader::vertex("missing", "no/such/shader.vert");
        assert!(result.is_err());
    }

    #[test]
    fn source_is_treated_as_opaque_text() {
        let shader = Shader::from_source("any", ShaderStage::Fragment, "not glsl at all")
            .expect("non-empty source");
        assert_eq!(shader.stage(), ShaderStage::Fragment);
        assert_eq!(shader.name(), "any");
        assert_eq!(shader.source, "not glsl at all");
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(ShaderStage::Vertex.to_string(), "vertex");
        assert_eq!(ShaderStage::Geometry.to_string(), "geometry");
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }
}
