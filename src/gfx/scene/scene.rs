use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{SceneError, SceneResult};
use crate::gfx::io::{MeshResolver, SceneDocument};
use crate::gfx::rendering::{CameraHandle, RenderTarget};

use super::object::{ObjectId, SceneObject};

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of a scene context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(u64);

impl SceneId {
    fn next() -> Self {
        Self(NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Owns every object in a scene and drives per-frame traversal.
///
/// Objects are kept in insertion order, which is also update and draw
/// order. Removing the selected object leaves the selection in place;
/// callers clear it (lookups through a stale selection return `None`).
#[derive(Debug)]
pub struct SceneContext {
    id: SceneId,
    objects: Vec<SceneObject>,
    selected: Option<ObjectId>,
    main_camera: Option<CameraHandle>,
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneContext {
    pub fn new() -> Self {
        Self {
            id: SceneId::next(),
            objects: Vec::new(),
            selected: None,
            main_camera: None,
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    /// Take ownership of `object` and append it to the scene.
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        object.scene = Some(self.id);
        let id = object.id();
        log::debug!("Added '{}' ({}) to scene", object.name, id);
        self.objects.push(object);
        id
    }

    /// Detach an object and hand it back to the caller.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.index_of(id)?;
        let mut object = self.objects.remove(index);
        object.scene = None;
        if self.selected == Some(id) {
            log::warn!("Removed '{}' ({}) while it was selected", object.name, id);
        }
        Some(object)
    }

    pub fn update(&mut self, delta_time: f32) {
        for object in &mut self.objects {
            object.update(delta_time);
        }
    }

    pub fn draw_all(&self, target: &mut dyn RenderTarget) {
        for object in &self.objects {
            object.draw(target);
        }
    }

    pub fn draw_gizmos(&self, target: &mut dyn RenderTarget) {
        for object in &self.objects {
            object.draw_gizmos(target);
        }
    }

    /// Tell both objects' components that `a` and `b` touched.
    pub fn notify_collision(&mut self, a: ObjectId, b: ObjectId) -> SceneResult<()> {
        if a == b {
            return Err(SceneError::SelfCollision(a));
        }
        let ia = self.index_of(a).ok_or(SceneError::UnknownObject(a))?;
        let ib = self.index_of(b).ok_or(SceneError::UnknownObject(b))?;

        let (low, high) = (ia.min(ib), ia.max(ib));
        let (head, tail) = self.objects.split_at_mut(high);
        let first = &mut head[low];
        let second = &mut tail[0];
        first.on_collision(second);
        second.on_collision(first);
        Ok(())
    }

    /// Select an object in this scene.
    pub fn select(&mut self, id: ObjectId) -> SceneResult<()> {
        if self.index_of(id).is_none() {
            return Err(SceneError::UnknownObject(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|id| self.object(id))
    }

    pub fn selected_object_mut(&mut self) -> Option<&mut SceneObject> {
        let id = self.selected?;
        self.object_mut(id)
    }

    pub fn set_main_camera(&mut self, camera: Option<CameraHandle>) {
        self.main_camera = camera;
    }

    pub fn main_camera(&self) -> Option<CameraHandle> {
        self.main_camera
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    /// First object with this name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    pub fn object_names(&self) -> Vec<&str> {
        self.objects.iter().map(|object| object.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// `desired_name`, or `desired_name (n)` if that is already taken.
    pub fn unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|object| object.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }

    pub fn statistics(&self) -> SceneStatistics {
        SceneStatistics {
            object_count: self.objects.len(),
            component_count: self.objects.iter().map(|o| o.component_count()).sum(),
            total_triangles: self.objects.iter().map(|o| o.mesh().triangle_count()).sum(),
            total_vertices: self.objects.iter().map(|o| o.mesh().vertex_count()).sum(),
        }
    }

    /// Deep copy of every object, in order, into a new context.
    ///
    /// Selection and main camera stay with the original.
    pub fn clone_scene(&self) -> Self {
        let mut copy = Self::new();
        for object in &self.objects {
            copy.add_object(object.clone_object());
        }
        copy
    }

    /// Write object names, mesh sources, transforms and materials to a
    /// `.ron` or `.toml` file. Components are not saved.
    pub fn save_scene(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        SceneDocument::capture(self).save(path)
    }

    /// Rebuild a scene from a file written by [`save_scene`](Self::save_scene).
    pub fn load_scene(path: impl AsRef<Path>, resolver: &mut dyn MeshResolver) -> SceneResult<Self> {
        SceneDocument::load(path)?.instantiate(resolver)
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|object| object.id() == id)
    }
}

impl Clone for SceneContext {
    fn clone(&self) -> Self {
        self.clone_scene()
    }
}

/// Scene statistics for debugging and UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub object_count: usize,
    pub component_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::components::{AxisGizmo, Component, ComponentBase, Rotator};
    use crate::gfx::geometry::{create_cube, create_sphere};
    use crate::gfx::rendering::DrawRecorder;
    use crate::gfx::scene::Mesh;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Increments a shared counter when dropped.
    #[derive(Clone)]
    struct DropCounter {
        base: ComponentBase,
        drops: Rc<Cell<usize>>,
    }

    impl DropCounter {
        fn boxed(drops: &Rc<Cell<usize>>) -> Box<Self> {
            Box::new(Self {
                base: ComponentBase::default(),
                drops: Rc::clone(drops),
            })
        }
    }

    impl Component for DropCounter {
        fn base(&self) -> &ComponentBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ComponentBase {
            &mut self.base
        }
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    /// Records the names of objects it collided with.
    #[derive(Clone, Default)]
    struct Bumper {
        base: ComponentBase,
        hits: Rc<RefCell<Vec<String>>>,
    }

    impl Component for Bumper {
        fn base(&self) -> &ComponentBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ComponentBase {
            &mut self.base
        }

        fn on_collision(&mut self, other: &SceneObject) {
            self.hits.borrow_mut().push(other.name.clone());
        }
    }

    fn populated(mesh: &Rc<Mesh>) -> SceneContext {
        let mut scene = SceneContext::new();
        for name in ["a", "b", "c"] {
            let mut object = SceneObject::new(name, Rc::clone(mesh));
            object.add_component(Box::new(Rotator::default()));
            scene.add_object(object);
        }
        scene
    }

    #[test]
    fn add_object_sets_back_reference_and_keeps_order() {
        init_logging();
        let mesh = Rc::new(create_cube());
        let scene = populated(&mesh);
        assert_eq!(scene.object_names(), vec!["a", "b", "c"]);
        assert!(scene.objects().iter().all(|o| o.scene() == Some(scene.id())));
    }

    #[test]
    fn remove_object_returns_detached_object() {
        let mesh = Rc::new(create_cube());
        let mut scene = populated(&mesh);
        let id = scene.find_by_name("b").unwrap().id();

        let removed = scene.remove_object(id).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(removed.scene(), None);
        assert_eq!(scene.object_names(), vec!["a", "c"]);
        assert!(scene.remove_object(id).is_none());
    }

    #[test]
    fn removing_selected_object_leaves_selection_for_caller() {
        init_logging();
        let mesh = Rc::new(create_cube());
        let mut scene = populated(&mesh);
        let id = scene.find_by_name("a").unwrap().id();
        scene.select(id).unwrap();

        scene.remove_object(id);
        assert_eq!(scene.selected(), Some(id));
        assert!(scene.selected_object().is_none());

        scene.clear_selection();
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn select_rejects_unknown_objects() {
        let mut scene = SceneContext::new();
        let stray = SceneObject::new("stray", Rc::new(create_cube()));
        assert!(matches!(scene.select(stray.id()), Err(SceneError::UnknownObject(_))));
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn selected_object_mut_edits_in_place() {
        let mesh = Rc::new(create_cube());
        let mut scene = populated(&mesh);
        let id = scene.find_by_name("c").unwrap().id();
        scene.select(id).unwrap();
        scene.selected_object_mut().unwrap().set_position(0.0, 3.0, 0.0);
        assert_eq!(scene.object(id).unwrap().transform.position.y, 3.0);
    }

    #[test]
    fn update_and_draw_visit_objects_in_order() {
        let mesh = Rc::new(create_cube());
        let mut scene = populated(&mesh);
        scene.update(1.0);
        assert!(scene.objects().iter().all(|o| o.transform.rotation.y == 45.0));

        let mut recorder = DrawRecorder::new();
        scene.draw_all(&mut recorder);
        let names: Vec<_> = recorder.meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn gizmos_skip_disabled_components() {
        let mesh = Rc::new(create_cube());
        let mut scene = SceneContext::new();
        let mut object = SceneObject::new("axes", mesh);
        object.add_component(Box::new(AxisGizmo::default()));
        let hidden = object.add_component(Box::new(AxisGizmo::default()));
        object.component_mut(hidden).unwrap().set_enabled(false);
        scene.add_object(object);

        let mut recorder = DrawRecorder::new();
        scene.draw_gizmos(&mut recorder);
        assert_eq!(recorder.lines.len(), 3);
        assert!(recorder.meshes.is_empty());
    }

    #[test]
    fn collisions_dispatch_to_both_sides() {
        let mesh = Rc::new(create_cube());
        let mut scene = SceneContext::new();
        let hits_a = Rc::new(RefCell::new(Vec::new()));
        let hits_b = Rc::new(RefCell::new(Vec::new()));

        let mut a = SceneObject::new("a", Rc::clone(&mesh));
        a.add_component(Box::new(Bumper { hits: Rc::clone(&hits_a), ..Default::default() }));
        let mut b = SceneObject::new("b", Rc::clone(&mesh));
        b.add_component(Box::new(Bumper { hits: Rc::clone(&hits_b), ..Default::default() }));
        let a = scene.add_object(a);
        let b = scene.add_object(b);

        scene.notify_collision(b, a).unwrap();
        assert_eq!(*hits_a.borrow(), vec!["b".to_string()]);
        assert_eq!(*hits_b.borrow(), vec!["a".to_string()]);

        assert!(matches!(scene.notify_collision(a, a), Err(SceneError::SelfCollision(_))));
    }

    #[test]
    fn clone_scene_is_deep_and_shares_meshes() {
        let mesh = Rc::new(create_cube());
        let mut scene = populated(&mesh);
        let first = scene.objects()[0].id();
        scene.select(first).unwrap();
        scene.set_main_camera(Some(CameraHandle(1)));

        let copy = scene.clone();

        assert_ne!(copy.id(), scene.id());
        assert_eq!(copy.object_names(), scene.object_names());
        assert_eq!(copy.selected(), None);
        assert_eq!(copy.main_camera(), None);
        for (a, b) in copy.objects().iter().zip(scene.objects()) {
            assert_ne!(a.id(), b.id());
            assert_eq!(a.scene(), Some(copy.id()));
            assert!(Rc::ptr_eq(a.mesh(), b.mesh()));
            assert!(a.components().all(|c| c.owner() == a.id()));
            assert!(a.components().zip(b.components()).all(|(x, y)| x.id() != y.id()));
        }
        assert_eq!(Rc::strong_count(&mesh), 7);
    }

    #[test]
    fn dropping_scene_releases_components_and_meshes() {
        let mesh = Rc::new(create_cube());
        let drops = Rc::new(Cell::new(0));
        let mut scene = SceneContext::new();
        for i in 0..4 {
            let mut object = SceneObject::new(format!("obj{i}"), Rc::clone(&mesh));
            object.add_component(DropCounter::boxed(&drops));
            object.add_component(DropCounter::boxed(&drops));
            scene.add_object(object);
        }
        let copy = scene.clone_scene();
        assert_eq!(Rc::strong_count(&mesh), 9);

        drop(scene);
        assert_eq!(drops.get(), 8);
        assert_eq!(Rc::strong_count(&mesh), 5);

        drop(copy);
        assert_eq!(drops.get(), 16);
        assert_eq!(Rc::strong_count(&mesh), 1);
    }

    #[test]
    fn removed_component_is_dropped_once() {
        let drops = Rc::new(Cell::new(0));
        let mut object = SceneObject::new("solo", Rc::new(create_cube()));
        let id = object.add_component(DropCounter::boxed(&drops));
        assert!(object.remove_component(id));
        assert_eq!(drops.get(), 1);
        drop(object);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn statistics_and_lookup_helpers() {
        let cube = Rc::new(create_cube());
        let sphere = Rc::new(create_sphere(4, 8).unwrap());
        let mut scene = SceneContext::new();
        scene.add_object(SceneObject::new("cube", Rc::clone(&cube)));
        let name = scene.unique_name("cube");
        assert_eq!(name, "cube (1)");
        scene.add_object(SceneObject::new(name, sphere));

        let stats = scene.statistics();
        assert_eq!(stats.object_count, 2);
        assert_eq!(stats.component_count, 0);
        assert_eq!(stats.total_triangles, 12 + 4 * 8 * 2);
        assert_eq!(stats.total_vertices, 8 + 5 * 9);
        assert!(scene.find_by_name("missing").is_none());
    }
}
