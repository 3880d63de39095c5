//! # Component Traits
//!
//! This module defines the trait every behaviour attached to a
//! [`SceneObject`] implements, plus the base state all components carry.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::gfx::rendering::RenderTarget;
use crate::gfx::scene::{ObjectId, SceneObject, Transform};

static NEXT_COMPONENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one attached component instance.
///
/// Issued by the owning [`SceneObject`] on attach and kept outside the
/// component, so nothing reachable through `&mut` to the component can
/// change it. Ids are never reused; a stale id simply finds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub(crate) fn next() -> Self {
        Self(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// State shared by every component.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    pub enabled: bool,
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Core trait for behaviours attached to scene objects.
///
/// Every hook has an empty default, so a component only overrides what it
/// needs. Hooks receive the owner's transform (or the other object for
/// collisions) rather than the owner itself, which keeps the owner's
/// component list out of reach while it is being iterated.
///
/// ## Lifecycle
///
/// 1. **Attach** - the owner issues a [`ComponentId`], then calls [`start`](Component::start) with its own id
/// 2. **Update Loop** - [`update`](Component::update) once per frame while enabled
/// 3. **Gizmos** - [`on_draw_gizmos`](Component::on_draw_gizmos) when the scene draws debug overlays
/// 4. **Drop** - the component is dropped with its owner or on removal
///
/// ## Examples
///
/// ```
/// use trellis::gfx::components::{Component, ComponentBase};
/// use trellis::gfx::scene::Transform;
///
/// #[derive(Clone, Default)]
/// struct Bob {
///     base: ComponentBase,
///     time: f32,
/// }
///
/// impl Component for Bob {
///     fn base(&self) -> &ComponentBase { &self.base }
///     fn base_mut(&mut self) -> &mut ComponentBase { &mut self.base }
///
///     fn update(&mut self, delta_time: f32, transform: &mut Transform) {
///         self.time += delta_time;
///         transform.position.y = self.time.sin();
///     }
/// }
/// ```
pub trait Component: Any + ComponentClone {
    fn base(&self) -> &ComponentBase;

    fn base_mut(&mut self) -> &mut ComponentBase;

    /// Display name, used in logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called once, right after the component is attached to `owner`.
    fn start(&mut self, _owner: ObjectId) {}

    /// Advance the component by `delta_time` seconds.
    fn update(&mut self, _delta_time: f32, _transform: &mut Transform) {}

    /// Emit debug geometry for the owner at `transform`.
    fn on_draw_gizmos(&self, _target: &mut dyn RenderTarget, _transform: &Transform) {}

    /// The owner touched `other`.
    fn on_collision(&mut self, _other: &SceneObject) {}

    fn is_enabled(&self) -> bool {
        self.base().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.base_mut().enabled = enabled;
    }
}

/// Cloning and downcasting support, implemented for every `Clone` component.
pub trait ComponentClone {
    /// Clone into a new box of the same concrete type.
    fn clone_box(&self) -> Box<dyn Component>;

    /// Support for downcasting to concrete types
    fn as_any(&self) -> &dyn Any;

    /// Support for mutable downcasting to concrete types
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component + Clone> ComponentClone for T {
    fn clone_box(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}
