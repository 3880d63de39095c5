//! # Graphics Module
//!
//! Everything a scene is made of, independent of any GPU API.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - procedural cube, sphere, cylinder and cone meshes
//! - **Scene Management** ([`scene`]) - objects, meshes, transforms and the scene context
//! - **Components** ([`components`]) - behaviour attached to scene objects
//! - **Resources** ([`resources`]) - material parameters and texture handles
//! - **Rendering Seam** ([`rendering`]) - the [`RenderTarget`] trait renderers implement
//! - **IO** ([`io`]) - scene files, mesh resolution and OBJ export
//!
//! ## Usage
//!
//! ```rust
//! use trellis::gfx::io::MeshLibrary;
//! use trellis::gfx::rendering::DrawRecorder;
//! use trellis::gfx::scene::SceneContext;
//!
//! let mut library = MeshLibrary::default();
//! let mut scene = SceneContext::new();
//! scene.add_object(library.create_object("ball", "builtin:sphere").unwrap());
//!
//! let mut target = DrawRecorder::new();
//! scene.draw_all(&mut target);
//! assert_eq!(target.meshes.len(), 1);
//! ```

pub mod components;
pub mod geometry;
pub mod io;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use rendering::{DrawItem, RenderTarget};
