//! # Scene Management Module
//!
//! The scene graph: a [`SceneContext`] owns an ordered list of
//! [`SceneObject`]s, each of which owns its components and shares an
//! immutable [`Mesh`].
//!
//! ## Key Components
//!
//! - [`SceneContext`] - object list, selection, main camera, traversal
//! - [`SceneObject`] - named entity with transform, material and components
//! - [`Mesh`] - validated indexed triangle list, shared through `Rc`
//! - [`Transform`] - position, Euler rotation in degrees, scale
//! - [`Vertex`] - position, normal and texture coordinates
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use trellis::gfx::components::Rotator;
//! use trellis::gfx::geometry::create_cube;
//! use trellis::gfx::scene::{SceneContext, SceneObject};
//!
//! let mut scene = SceneContext::new();
//! let mut cube = SceneObject::new("cube", Rc::new(create_cube()));
//! cube.add_component(Box::new(Rotator::default()));
//! let id = scene.add_object(cube);
//!
//! scene.update(0.016);
//! assert!(scene.object(id).unwrap().transform.rotation.y > 0.0);
//! ```

pub mod mesh;
pub mod object;
pub mod scene;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use mesh::Mesh;
pub use object::{AttachedComponent, ObjectId, SceneObject};
pub use scene::{SceneContext, SceneId, SceneStatistics};
pub use transform::Transform;
pub use vertex::Vertex;
