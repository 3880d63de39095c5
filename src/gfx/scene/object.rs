use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use cgmath::Vector3;

use crate::gfx::components::{Component, ComponentId};
use crate::gfx::rendering::{DrawItem, RenderTarget};
use crate::gfx::resources::Material;

use super::mesh::Mesh;
use super::scene::SceneId;
use super::transform::Transform;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a scene object. Clones get a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub(crate) fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A component as held by its owner.
///
/// The id and owner live here rather than inside the component, so replacing
/// the component value through `&mut` cannot detach it or change its id.
pub struct AttachedComponent {
    id: ComponentId,
    owner: ObjectId,
    component: Box<dyn Component>,
}

impl AttachedComponent {
    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn get(&self) -> &dyn Component {
        &*self.component
    }

    pub fn get_mut(&mut self) -> &mut dyn Component {
        &mut *self.component
    }
}

/// A named, transformable entity in a scene.
///
/// The object owns its components; the mesh is shared with every clone and
/// with any other object resolved from the same source.
pub struct SceneObject {
    id: ObjectId,
    pub name: String,
    mesh: Rc<Mesh>,
    pub transform: Transform,
    pub material: Material,
    components: Vec<AttachedComponent>,
    pub(crate) scene: Option<SceneId>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh: Rc<Mesh>) -> Self {
        Self {
            id: ObjectId::next(),
            name: name.into(),
            mesh,
            transform: Transform::default(),
            material: Material::default(),
            components: Vec::new(),
            scene: None,
        }
    }

    /// Builder pattern: Set the initial transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder pattern: Set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Scene this object currently belongs to, if any.
    pub fn scene(&self) -> Option<SceneId> {
        self.scene
    }

    pub fn mesh(&self) -> &Rc<Mesh> {
        &self.mesh
    }

    pub fn set_mesh(&mut self, mesh: Rc<Mesh>) {
        self.mesh = mesh;
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.transform.position = Vector3::new(x, y, z);
    }

    /// Set rotation in degrees around X, Y and Z
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.transform.rotation = Vector3::new(x, y, z);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = Vector3::new(scale, scale, scale);
    }

    /// Attach a component, take ownership of it and run its `start` hook.
    pub fn add_component(&mut self, mut component: Box<dyn Component>) -> ComponentId {
        let id = ComponentId::next();
        component.start(self.id);
        log::debug!("Attached {} to '{}' ({})", component.name(), self.name, self.id);
        self.components.push(AttachedComponent {
            id,
            owner: self.id,
            component,
        });
        id
    }

    /// Attach a default-constructed `T` and return it for configuration.
    pub fn add_component_default<T: Component + Default>(&mut self) -> Option<&mut T> {
        self.add_component(Box::new(T::default()));
        self.components
            .last_mut()
            .and_then(|attached| attached.component.as_any_mut().downcast_mut::<T>())
    }

    /// First attached component of type `T`.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|attached| attached.component.as_any().downcast_ref::<T>())
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|attached| attached.component.as_any_mut().downcast_mut::<T>())
    }

    /// Id of the first attached component of type `T`.
    pub fn component_id<T: Component>(&self) -> Option<ComponentId> {
        self.components
            .iter()
            .find(|attached| attached.component.as_any().is::<T>())
            .map(|attached| attached.id)
    }

    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|attached| attached.id == id)
            .map(AttachedComponent::get)
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut dyn Component> {
        self.components
            .iter_mut()
            .find(|attached| attached.id == id)
            .map(AttachedComponent::get_mut)
    }

    /// Detach and drop a component. Returns `false` if `id` is not attached.
    pub fn remove_component(&mut self, id: ComponentId) -> bool {
        match self.components.iter().position(|attached| attached.id == id) {
            Some(index) => {
                let attached = self.components.remove(index);
                log::debug!("Removed {} from '{}'", attached.component.name(), self.name);
                true
            }
            None => false,
        }
    }

    /// Attached components in attachment order, with their ids.
    pub fn components(&self) -> impl Iterator<Item = &AttachedComponent> + '_ {
        self.components.iter()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn update(&mut self, delta_time: f32) {
        for attached in self.components.iter_mut().filter(|c| c.component.is_enabled()) {
            attached.component.update(delta_time, &mut self.transform);
        }
    }

    pub fn draw_gizmos(&self, target: &mut dyn RenderTarget) {
        for attached in self.components.iter().filter(|c| c.component.is_enabled()) {
            attached.component.on_draw_gizmos(target, &self.transform);
        }
    }

    pub fn on_collision(&mut self, other: &SceneObject) {
        for attached in self.components.iter_mut().filter(|c| c.component.is_enabled()) {
            attached.component.on_collision(other);
        }
    }

    /// Submit this object's mesh with its model matrix and material.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.draw_mesh(DrawItem {
            name: &self.name,
            mesh: &self.mesh,
            model: self.transform.model_matrix(),
            material: &self.material,
        });
    }

    /// Deep copy with a fresh id.
    ///
    /// The mesh is shared, every component is cloned through its own
    /// `clone_box` and re-attached (so `start` runs on the copy), and the
    /// copy belongs to no scene.
    pub fn clone_object(&self) -> Self {
        let mut copy = Self {
            id: ObjectId::next(),
            name: self.name.clone(),
            mesh: Rc::clone(&self.mesh),
            transform: self.transform,
            material: self.material.clone(),
            components: Vec::with_capacity(self.components.len()),
            scene: None,
        };
        for attached in &self.components {
            copy.add_component(attached.component.clone_box());
        }
        log::debug!("Cloned '{}' {} -> {}", self.name, self.id, copy.id);
        copy
    }
}

impl Clone for SceneObject {
    fn clone(&self) -> Self {
        self.clone_object()
    }
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("vertices", &self.mesh.vertex_count())
            .field("transform", &self.transform)
            .field("material", &self.material)
            .field(
                "components",
                &self.components.iter().map(|c| c.component.name()).collect::<Vec<_>>(),
            )
            .field("scene", &self.scene)
            .finish()
    }
}
