//! Error types for scene and geometry operations.
//!
//! Generators return [`GeometryResult`]; everything that touches the scene
//! graph, files, or mesh resolution returns [`SceneResult`]. Lookups that can
//! legitimately find nothing (components, objects by name) return `Option`
//! instead of an error.

use thiserror::Error;

use crate::gfx::scene::ObjectId;

/// Errors raised while building or validating mesh geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A segment count is below the minimum needed for a closed solid.
    #[error("{shape}: {parameter} must be at least {min}, got {value}")]
    InvalidSegments {
        shape: &'static str,
        parameter: &'static str,
        min: u32,
        value: u32,
    },

    /// A radius or height is zero, negative, or not finite.
    #[error("{shape}: {parameter} must be finite and positive, got {value}")]
    InvalidDimension {
        shape: &'static str,
        parameter: &'static str,
        value: f32,
    },

    /// Index buffer length is not a whole number of triangles.
    #[error("index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),

    /// An index points past the end of the vertex buffer.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    /// The requested resolution needs more vertices than `u32` indices can address.
    #[error("{shape}: {count} vertices exceed the u32 index range")]
    TooManyVertices { shape: &'static str, count: u64 },
}

/// Convenience alias for `Result<T, GeometryError>`.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised by scene operations, persistence, and mesh resolution.
#[derive(Debug, Error)]
pub enum SceneError {
    /// No object with this id lives in the scene.
    #[error("object {0} is not part of this scene")]
    UnknownObject(ObjectId),

    /// A collision was reported between an object and itself.
    #[error("object {0} cannot collide with itself")]
    SelfCollision(ObjectId),

    /// Mesh generation or validation failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wavefront OBJ import failed.
    #[error("failed to load OBJ '{path}': {source}")]
    ObjLoad {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The file extension maps to no known format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A mesh path could not be turned into a mesh.
    #[error("unknown mesh source '{0}'")]
    UnknownMeshSource(String),
}

/// Convenience alias for `Result<T, SceneError>`.
pub type SceneResult<T> = Result<T, SceneError>;
