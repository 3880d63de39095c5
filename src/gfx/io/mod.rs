//! # Scene Input/Output
//!
//! - [`scene_file`] - save and load scenes as RON or TOML
//! - [`mesh_library`] - resolve mesh paths (`builtin:*` primitives or OBJ files) into shared meshes
//! - [`obj_export`] - write a scene to a single Wavefront OBJ file

pub mod mesh_library;
pub mod obj_export;
pub mod scene_file;

pub use mesh_library::{MeshLibrary, MeshResolver, BUILTIN_PREFIX};
pub use obj_export::{export_scene_obj, export_scene_obj_to_file};
pub use scene_file::{ObjectRecord, SceneDocument};
