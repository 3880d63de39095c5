//! Scene documents: the serialisable snapshot of a [`SceneContext`].
//!
//! Only data that can be rebuilt without code is saved (names, mesh
//! sources, transforms and materials). Components are behaviour and are
//! re-attached by the application after loading.

use std::path::Path;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigFile, FileFormat};
use crate::error::SceneResult;
use crate::gfx::resources::{Material, TextureHandle};
use crate::gfx::scene::{SceneContext, SceneObject, Transform};

use super::mesh_library::MeshResolver;

/// One saved object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectRecord {
    pub name: String,
    pub mesh_path: String,
    pub position: [f32; 3],
    /// Degrees around X, Y and Z
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
    pub roughness: f32,
    pub metallic: f32,
    pub texture_path: String,
}

impl Default for ObjectRecord {
    fn default() -> Self {
        Self::from_parts("", &Transform::default(), &Material::default())
    }
}

impl ObjectRecord {
    fn from_parts(name: &str, transform: &Transform, material: &Material) -> Self {
        Self {
            name: name.to_string(),
            mesh_path: material.mesh_path.clone(),
            position: transform.position.into(),
            rotation: transform.rotation.into(),
            scale: transform.scale.into(),
            color: material.color.into(),
            roughness: material.roughness,
            metallic: material.metallic,
            texture_path: material.texture_path.clone(),
        }
    }

    fn capture(object: &SceneObject) -> Self {
        if object.material.mesh_path.is_empty() {
            log::warn!("'{}' has no mesh path and cannot be reloaded", object.name);
        }
        Self::from_parts(&object.name, &object.transform, &object.material)
    }

    fn transform(&self) -> Transform {
        Transform {
            position: Vector3::from(self.position),
            rotation: Vector3::from(self.rotation),
            scale: Vector3::from(self.scale),
        }
    }

    fn material(&self) -> Material {
        Material {
            color: Vector3::from(self.color),
            roughness: self.roughness,
            metallic: self.metallic,
            texture_path: self.texture_path.clone(),
            texture: TextureHandle::NONE,
            mesh_path: self.mesh_path.clone(),
        }
    }
}

/// Saved scene, in object order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

impl ConfigFile for SceneDocument {}

impl SceneDocument {
    pub fn capture(scene: &SceneContext) -> Self {
        Self {
            objects: scene.objects().iter().map(ObjectRecord::capture).collect(),
        }
    }

    /// Build a fresh scene, resolving every mesh path through `resolver`.
    ///
    /// Texture handles start unbound; the texture loader re-resolves them
    /// from `texture_path`.
    pub fn instantiate(&self, resolver: &mut dyn MeshResolver) -> SceneResult<SceneContext> {
        let mut scene = SceneContext::new();
        for record in &self.objects {
            let mesh = resolver.resolve(&record.mesh_path)?;
            let object = SceneObject::new(record.name.clone(), mesh)
                .with_transform(record.transform())
                .with_material(record.material());
            scene.add_object(object);
        }
        Ok(scene)
    }

    pub fn to_ron_string(&self) -> SceneResult<String> {
        FileFormat::Ron.render(self)
    }

    pub fn from_ron_str(contents: &str) -> SceneResult<Self> {
        FileFormat::Ron.parse(contents)
    }

    /// Save as `.ron` or `.toml`, chosen by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        self.save_to_file(path)
    }

    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        Self::load_from_file(path)
    }
}
