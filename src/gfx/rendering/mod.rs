// src/gfx/rendering/mod.rs
//! Renderer seam
//!
//! The scene graph never touches GPU state. Objects describe what to draw as
//! [`DrawItem`]s and hand them to whatever implements [`RenderTarget`];
//! gizmo components emit debug lines through the same target.

use cgmath::{Matrix4, Vector3};

use crate::gfx::resources::Material;
use crate::gfx::scene::Mesh;

/// Opaque reference to a camera owned by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraHandle(pub u32);

/// One mesh submission: geometry, world placement and surface parameters.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub name: &'a str,
    pub mesh: &'a Mesh,
    pub model: Matrix4<f32>,
    pub material: &'a Material,
}

/// Sink for draw submissions, typically backed by a render pass.
pub trait RenderTarget {
    fn draw_mesh(&mut self, item: DrawItem<'_>);

    /// Debug line in world space. Targets without line support ignore it.
    fn draw_line(&mut self, _from: Vector3<f32>, _to: Vector3<f32>, _color: [f32; 3]) {}
}

/// A debug line recorded by [`DrawRecorder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineRecord {
    pub from: Vector3<f32>,
    pub to: Vector3<f32>,
    pub color: [f32; 3],
}

/// A mesh submission recorded by [`DrawRecorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRecord {
    pub name: String,
    pub triangle_count: usize,
    pub model: Matrix4<f32>,
}

/// Headless target that records every submission, for tools and tests.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    pub meshes: Vec<MeshRecord>,
    pub lines: Vec<LineRecord>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
        self.lines.clear();
    }
}

impl RenderTarget for DrawRecorder {
    fn draw_mesh(&mut self, item: DrawItem<'_>) {
        self.meshes.push(MeshRecord {
            name: item.name.to_string(),
            triangle_count: item.mesh.triangle_count(),
            model: item.model,
        });
    }

    fn draw_line(&mut self, from: Vector3<f32>, to: Vector3<f32>, color: [f32; 3]) {
        self.lines.push(LineRecord { from, to, color });
    }
}
