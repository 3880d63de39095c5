//! # Trellis Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let mut scene = SceneContext::new();
//! let mut cone = SceneObject::new("cone", Rc::new(create_cone(0.5, 1.0, 16).unwrap()));
//! if let Some(rotator) = cone.add_component_default::<Rotator>() {
//!     rotator.degrees_per_second = Vector3::new(0.0, 90.0, 0.0);
//! }
//! scene.add_object(cone);
//! scene.update(1.0);
//! ```

// Re-export scene types
pub use crate::gfx::scene::{AttachedComponent, Mesh, ObjectId, SceneContext, SceneObject, Transform, Vertex};

// Re-export components
pub use crate::gfx::components::{AxisGizmo, Component, ComponentBase, ComponentId, Rotator};

// Re-export geometry generators
pub use crate::gfx::geometry::{create_cone, create_cube, create_cube_flat, create_cylinder, create_sphere};

// Re-export rendering seam and materials
pub use crate::gfx::rendering::{CameraHandle, DrawItem, RenderTarget};
pub use crate::gfx::resources::{Material, TextureHandle};

// Re-export IO and configuration
pub use crate::config::{ConfigFile, SceneConfig};
pub use crate::error::{GeometryError, GeometryResult, SceneError, SceneResult};
pub use crate::gfx::io::{export_scene_obj_to_file, MeshLibrary, MeshResolver};

// Re-export common external dependencies
pub use cgmath::{InnerSpace, Vector3};

// Re-export common standard library types
pub use std::rc::Rc;
