//! # Vertex Data Structures
//!
//! This module defines the vertex layout shared by every mesh in the scene
//! graph, whether generated procedurally or imported from OBJ files.

/// A 3D vertex with position, normal and texture coordinate data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute together with [`bytemuck::Pod`] lets a
/// renderer reinterpret a `&[Vertex]` as raw bytes for buffer upload
/// (see [`Mesh::vertex_bytes`](super::Mesh::vertex_bytes)). The stride is
/// 32 bytes: position at offset 0, normal at 12, texture coordinate at 24.
///
/// # Examples
///
/// ```
/// use trellis::gfx::scene::Vertex;
///
/// let vertex = Vertex::new([0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.5, 0.5]);
/// assert_eq!(vertex.position[1], 1.0);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Byte offset of the normal attribute.
    pub const NORMAL_OFFSET: usize = std::mem::size_of::<[f32; 3]>();
    /// Byte offset of the texture coordinate attribute.
    pub const TEX_COORDS_OFFSET: usize = 2 * std::mem::size_of::<[f32; 3]>();

    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}
