// src/lib.rs
//! Trellis scene graph
//!
//! A runtime scene graph with attachable components, plus procedural
//! primitive meshes and scene persistence. Rendering stays outside the
//! crate behind [`gfx::rendering::RenderTarget`].

pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use config::SceneConfig;
pub use error::{GeometryError, SceneError};
pub use gfx::scene::{SceneContext, SceneObject};
