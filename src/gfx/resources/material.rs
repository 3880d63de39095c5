//! Material parameters for PBR shading
//!
//! The scene graph only stores material values; binding them to a shader
//! is the renderer's job. [`MaterialUniform`] is the packed form a renderer
//! can upload as-is.

use cgmath::Vector3;

use crate::config::MaterialDefaults;

/// Opaque handle to a texture owned by an external loader.
///
/// `TextureHandle::NONE` (0) means no texture is bound. The scene graph
/// never interprets the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    pub const NONE: Self = Self(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub albedo: [f32; 3],
    pub roughness: f32,
    pub metallic: f32,
    pub has_texture: u32,
    _padding: [f32; 2],
}

/// Material definition with PBR properties
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Albedo colour (RGB, 0.0-1.0)
    pub color: Vector3<f32>,
    pub roughness: f32,
    pub metallic: f32,
    /// Source path of the albedo texture, empty when untextured
    pub texture_path: String,
    /// Handle resolved by the texture loader from `texture_path`
    pub texture: TextureHandle,
    /// Where the object's mesh came from (`builtin:*` or an OBJ path)
    pub mesh_path: String,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vector3::new(1.0, 1.0, 1.0),
            roughness: 0.5,
            metallic: 0.0,
            texture_path: String::new(),
            texture: TextureHandle::NONE,
            mesh_path: String::new(),
        }
    }
}

impl From<MaterialDefaults> for Material {
    fn from(defaults: MaterialDefaults) -> Self {
        Self::default()
            .with_color(defaults.color[0], defaults.color[1], defaults.color[2])
            .with_roughness(defaults.roughness)
            .with_metallic(defaults.metallic)
    }
}

impl Material {
    /// Builder pattern: Set albedo from RGB values
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = Vector3::new(r, g, b);
        self
    }

    /// Builder pattern: Set metallic factor
    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set roughness factor
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set texture source path
    pub fn with_texture_path(mut self, path: impl Into<String>) -> Self {
        self.texture_path = path.into();
        self
    }

    /// Builder pattern: Record the mesh source path
    pub fn with_mesh_path(mut self, path: impl Into<String>) -> Self {
        self.mesh_path = path.into();
        self
    }

    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            albedo: self.color.into(),
            roughness: self.roughness,
            metallic: self.metallic,
            has_texture: u32::from(!self.texture.is_none()),
            _padding: [0.0; 2],
        }
    }
}
