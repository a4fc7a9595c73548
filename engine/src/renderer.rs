//! OpenGL renderer.
//!
//! Compiles and links the shader program, owns the vertex array and buffer
//! objects, and issues the one draw call per frame the demos need. All GL
//! resources are created once at startup; [Drop] releases them.

use crate::{
    matrix::Mat4,
    shader::{Shader, ShaderStage},
    Error, Result,
};
use glow::HasContext;
use std::fmt;

impl ShaderStage {
    const fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Geometry => glow::GEOMETRY_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// Primitive topology for draw calls.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum PrimitiveKind {
    #[default]
    Triangles,
    Lines,
    Points,
}

impl PrimitiveKind {
    const fn gl_mode(self) -> u32 {
        match self {
            Self::Triangles => glow::TRIANGLES,
            Self::Lines => glow::LINES,
            Self::Points => glow::POINTS,
        }
    }
}

#[must_use]
pub struct Renderer {
    gl: glow::Context,
    program: glow::NativeProgram,
    vertex_array: glow::NativeVertexArray,
    vertex_buffer: Option<glow::NativeBuffer>,
    vertex_count: i32,
    primitive: PrimitiveKind,
    clear_mask: u32,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("program", &self.program)
            .field("vertex_count", &self.vertex_count)
            .field("primitive", &self.primitive)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// Compile and link the given shader stages into the active program.
    ///
    /// # Errors
    ///
    /// Returns [Error::ShaderCompile] or [Error::ProgramLink] with the
    /// driver's info log on failure. Both are fatal setup failures.
    pub fn initialize(gl: glow::Context, shaders: &[Shader]) -> Result<Self> {
        let program = unsafe { gl.create_program().map_err(Error::ProgramLink)? };

        let mut compiled = Vec::with_capacity(shaders.len());
        for shader in shaders {
            tracing::debug!(name = shader.name(), stage = %shader.stage(), "compiling shader");
            let handle = match unsafe { gl.create_shader(shader.stage().gl_type()) } {
                Ok(handle) => handle,
                Err(log) => {
                    unsafe { Self::release_stages(&gl, program, &compiled) };
                    return Err(Error::ShaderCompile {
                        name: shader.name().to_string(),
                        stage: shader.stage(),
                        log,
                    });
                }
            };
            unsafe {
                gl.shader_source(handle, &shader.source);
                gl.compile_shader(handle);
                if !gl.get_shader_compile_status(handle) {
                    let log = gl.get_shader_info_log(handle);
                    gl.delete_shader(handle);
                    Self::release_stages(&gl, program, &compiled);
                    return Err(Error::ShaderCompile {
                        name: shader.name().to_string(),
                        stage: shader.stage(),
                        log,
                    });
                }
                gl.attach_shader(program, handle);
            }
            compiled.push(handle);
        }

        unsafe {
            gl.link_program(program);
            // Stage objects are no longer needed once the program is linked.
            for handle in compiled {
                gl.detach_shader(program, handle);
                gl.delete_shader(handle);
            }
            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(Error::ProgramLink(log));
            }
        }

        let vertex_array = match unsafe { gl.create_vertex_array() } {
            Ok(vertex_array) => vertex_array,
            Err(log) => {
                unsafe { gl.delete_program(program) };
                return Err(Error::Other(anyhow::anyhow!(log)));
            }
        };
        unsafe {
            gl.bind_vertex_array(Some(vertex_array));
            gl.use_program(Some(program));
        }
        tracing::info!("shader program linked");

        Ok(Self {
            gl,
            program,
            vertex_array,
            vertex_buffer: None,
            vertex_count: 0,
            primitive: PrimitiveKind::Triangles,
            clear_mask: glow::COLOR_BUFFER_BIT,
        })
    }

    /// Detach and delete compiled stage objects along with the program.
    unsafe fn release_stages(
        gl: &glow::Context,
        program: glow::NativeProgram,
        stages: &[glow::NativeShader],
    ) {
        for &handle in stages {
            gl.detach_shader(program, handle);
            gl.delete_shader(handle);
        }
        gl.delete_program(program);
    }

    /// Upload static vertex data and bind it to a named attribute.
    ///
    /// # Errors
    ///
    /// Returns [Error::UnknownAttribute] if the program does not declare
    /// `attribute` (or the linker eliminated it).
    pub fn upload_vertices(
        &mut self,
        attribute: &str,
        components_per_vertex: i32,
        bytes: &[u8],
        vertex_count: i32,
    ) -> Result<()> {
        let gl = &self.gl;
        let location = unsafe { gl.get_attrib_location(self.program, attribute) }
            .ok_or_else(|| Error::UnknownAttribute(attribute.to_string()))?;

        let buffer = unsafe {
            let buffer = gl
                .create_buffer()
                .map_err(|log| Error::Other(anyhow::anyhow!(log)))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_f32(location, components_per_vertex, glow::FLOAT, false, 0, 0);
            buffer
        };

        if let Some(previous) = self.vertex_buffer.replace(buffer) {
            unsafe { gl.delete_buffer(previous) };
        }
        self.vertex_count = vertex_count;
        tracing::debug!(attribute, vertex_count, "uploaded vertex data");
        Ok(())
    }

    /// Upload a 4x4 matrix uniform in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [Error::UnknownUniform] if the program does not declare `name`.
    pub fn set_uniform_mat4(&mut self, name: &str, matrix: Mat4) -> Result<()> {
        let location = unsafe { self.gl.get_uniform_location(self.program, name) }
            .ok_or_else(|| Error::UnknownUniform(name.to_string()))?;
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(&location), false, matrix.as_array());
        }
        Ok(())
    }

    /// Set the color the framebuffer is cleared to each frame.
    pub fn set_clear_color(&mut self, [r, g, b, a]: [f32; 4]) {
        unsafe { self.gl.clear_color(r, g, b, a) };
    }

    /// Enable depth testing and include the depth buffer in the per-frame clear.
    pub fn enable_depth_test(&mut self) {
        unsafe { self.gl.enable(glow::DEPTH_TEST) };
        self.clear_mask |= glow::DEPTH_BUFFER_BIT;
    }

    /// Set the primitive topology used by [Renderer::draw_frame].
    pub fn set_primitive(&mut self, primitive: PrimitiveKind) {
        self.primitive = primitive;
    }

    /// Handle window resized event.
    pub fn on_resized(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) };
    }

    /// Clear the framebuffer and draw the uploaded vertices.
    pub fn draw_frame(&mut self) {
        unsafe {
            self.gl.clear(self.clear_mask);
            if self.vertex_count > 0 {
                self.gl
                    .draw_arrays(self.primitive.gl_mode(), 0, self.vertex_count);
            }
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            if let Some(buffer) = self.vertex_buffer.take() {
                self.gl.delete_buffer(buffer);
            }
            self.gl.delete_vertex_array(self.vertex_array);
            self.gl.delete_program(self.program);
        }
    }
}
