//! # Component System
//!
//! Behaviour attached to scene objects. A [`SceneObject`](crate::gfx::scene::SceneObject)
//! owns its components in attachment order and forwards the per-frame hooks
//! to every enabled one.
//!
//! ## Built-in Components
//!
//! - [`Rotator`] - constant angular velocity
//! - [`AxisGizmo`] - local axis lines for debugging

pub mod builtin;
pub mod traits;

pub use builtin::{AxisGizmo, Rotator};
pub use traits::{Component, ComponentBase, ComponentClone, ComponentId};
