//! Turning mesh source paths into shared meshes.

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crate::config::SceneConfig;
use crate::error::{SceneError, SceneResult};
use crate::gfx::geometry::{create_cone, create_cube, create_cube_flat, create_cylinder, create_sphere};
use crate::gfx::resources::Material;
use crate::gfx::scene::{Mesh, SceneObject};

/// Prefix of mesh paths that name a generated primitive.
pub const BUILTIN_PREFIX: &str = "builtin:";

/// Resolves the mesh path stored with an object back into a mesh.
pub trait MeshResolver {
    fn resolve(&mut self, mesh_path: &str) -> SceneResult<Rc<Mesh>>;
}

/// Caching resolver for built-in primitives and OBJ files.
///
/// Every path is resolved once; later requests share the cached `Rc`.
/// `builtin:cube`, `builtin:cube_flat`, `builtin:sphere`, `builtin:cylinder`
/// and `builtin:cone` are generated with the sizes in [`SceneConfig`]. Any
/// other path is read as Wavefront OBJ, relative to the library root if one
/// is set.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    config: SceneConfig,
    root: Option<PathBuf>,
    cache: HashMap<String, Rc<Mesh>>,
}

impl MeshLibrary {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            root: None,
            cache: HashMap::new(),
        }
    }

    /// Resolve relative OBJ paths against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Register an already built mesh under `mesh_path`.
    pub fn insert(&mut self, mesh_path: impl Into<String>, mesh: Mesh) -> Rc<Mesh> {
        let mesh = Rc::new(mesh);
        self.cache.insert(mesh_path.into(), Rc::clone(&mesh));
        mesh
    }

    pub fn contains(&self, mesh_path: &str) -> bool {
        self.cache.contains_key(mesh_path)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Resolve `mesh_path` and wrap it in a new object carrying the default
    /// material, with the path recorded for saving.
    pub fn create_object(&mut self, name: impl Into<String>, mesh_path: &str) -> SceneResult<SceneObject> {
        let mesh = self.resolve(mesh_path)?;
        let material = Material::from(self.config.material).with_mesh_path(mesh_path);
        Ok(SceneObject::new(name, mesh).with_material(material))
    }

    fn build(&self, mesh_path: &str) -> SceneResult<Mesh> {
        let Some(primitive) = mesh_path.strip_prefix(BUILTIN_PREFIX) else {
            let path = match &self.root {
                Some(root) => root.join(mesh_path),
                None => PathBuf::from(mesh_path),
            };
            return Mesh::load_obj(path);
        };

        let config = &self.config;
        let mesh = match primitive {
            "cube" => create_cube(),
            "cube_flat" => create_cube_flat(),
            "sphere" => create_sphere(config.sphere.latitude_segments, config.sphere.longitude_segments)?,
            "cylinder" => create_cylinder(config.cylinder.radius, config.cylinder.height, config.cylinder.segments)?,
            "cone" => create_cone(config.cone.radius, config.cone.height, config.cone.segments)?,
            _ => return Err(SceneError::UnknownMeshSource(mesh_path.to_string())),
        };
        Ok(mesh)
    }
}

impl MeshResolver for MeshLibrary {
    fn resolve(&mut self, mesh_path: &str) -> SceneResult<Rc<Mesh>> {
        if mesh_path.is_empty() {
            return Err(SceneError::UnknownMeshSource(String::new()));
        }
        if let Some(mesh) = self.cache.get(mesh_path) {
            log::debug!("Mesh cache hit: {}", mesh_path);
            return Ok(Rc::clone(mesh));
        }
        let mesh = Rc::new(self.build(mesh_path)?);
        log::debug!(
            "Resolved mesh {}: {} vertices, {} triangles",
            mesh_path,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.cache.insert(mesh_path.to_string(), Rc::clone(&mesh));
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn builtins_follow_config() {
        let mut config = SceneConfig::default();
        config.cone.segments = 6;
        config.sphere.latitude_segments = 4;
        config.sphere.longitude_segments = 5;
        let mut library = MeshLibrary::new(config);

        assert_eq!(library.resolve("builtin:cube").unwrap().vertex_count(), 8);
        assert_eq!(library.resolve("builtin:cube_flat").unwrap().vertex_count(), 24);
        assert_eq!(library.resolve("builtin:cone").unwrap().vertex_count(), 9);
        assert_eq!(library.resolve("builtin:sphere").unwrap().vertex_count(), 5 * 6);
        assert_eq!(library.resolve("builtin:cylinder").unwrap().vertex_count(), 44);
        assert_eq!(library.len(), 5);
    }

    #[test]
    fn repeated_paths_share_one_mesh() {
        let mut library = MeshLibrary::default();
        let a = library.resolve("builtin:cube").unwrap();
        let b = library.resolve("builtin:cube").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn unknown_sources_are_rejected() {
        let mut library = MeshLibrary::default();
        assert!(matches!(
            library.resolve("builtin:teapot"),
            Err(SceneError::UnknownMeshSource(path)) if path == "builtin:teapot"
        ));
        assert!(matches!(library.resolve(""), Err(SceneError::UnknownMeshSource(_))));
        assert!(matches!(
            library.resolve("definitely/not/here.obj"),
            Err(SceneError::Io(_))
        ));
        assert!(library.is_empty());
    }

    #[test]
    fn invalid_config_surfaces_geometry_error() {
        let mut config = SceneConfig::default();
        config.cylinder.segments = 2;
        let mut library = MeshLibrary::new(config);
        assert!(matches!(
            library.resolve("builtin:cylinder"),
            Err(SceneError::Geometry(GeometryError::InvalidSegments { .. }))
        ));
    }

    #[test]
    fn obj_files_resolve_relative_to_root() {
        let dir = std::env::temp_dir().join(format!("trellis_meshlib_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("tri.obj"), "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();

        let mut library = MeshLibrary::default().with_root(&dir);
        let mesh = library.resolve("tri.obj").unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(mesh.triangle_count(), 1);
        assert!(library.contains("tri.obj"));
    }

    #[test]
    fn create_object_records_mesh_path_and_default_material() {
        let mut library = MeshLibrary::default();
        let object = library.create_object("pillar", "builtin:cylinder").unwrap();
        assert_eq!(object.material.mesh_path, "builtin:cylinder");
        assert_eq!(object.material.roughness, 0.5);
        assert_eq!(object.mesh().triangle_count(), 80);
    }

    #[test]
    fn inserted_meshes_are_served_from_cache() {
        let mut library = MeshLibrary::default();
        let inserted = library.insert("custom:quad", create_cube());
        let resolved = library.resolve("custom:quad").unwrap();
        assert!(Rc::ptr_eq(&inserted, &resolved));
    }
}
