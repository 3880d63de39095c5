use std::io::BufRead;
use std::path::Path;

use crate::error::{GeometryError, GeometryResult, SceneError, SceneResult};
use crate::gfx::geometry::compute_smooth_normals;

use super::vertex::Vertex;

/// Indexed triangle-list geometry.
///
/// A mesh is immutable once built: the renderer and the OBJ exporter only
/// ever read it. Scene objects hold meshes behind `Rc`, so clones of an
/// object (and objects loaded from the same path) share one allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh after checking that `indices` is a whole number of
    /// triangles and that every index addresses an existing vertex.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> GeometryResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle(indices.len()));
        }
        if let Some((position, &index)) = indices
            .iter()
            .enumerate()
            .find(|(_, &index)| index as usize >= vertices.len())
        {
            return Err(GeometryError::IndexOutOfRange {
                position,
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Generators build their index tables by construction; they skip the
    /// validation pass in release builds.
    pub(crate) fn from_generated(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0);
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Raw vertex bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes (u32) for buffer upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(mut min, mut max), v| {
            for axis in 0..3 {
                min[axis] = min[axis].min(v.position[axis]);
                max[axis] = max[axis].max(v.position[axis]);
            }
            (min, max)
        }))
    }

    /// Loads a Wavefront OBJ file, merging every model into one mesh.
    pub fn load_obj(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let mut reader = std::io::BufReader::new(file);
        let mesh = Self::read_obj(&mut reader, &path.display().to_string())?;
        log::info!(
            "Loaded OBJ {}: {} vertices, {} triangles",
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Reads OBJ data from any buffered reader. Material libraries are
    /// ignored; only geometry is imported.
    pub fn from_obj_reader(reader: &mut impl BufRead) -> SceneResult<Self> {
        Self::read_obj(reader, "<reader>")
    }

    fn read_obj(reader: &mut impl BufRead, label: &str) -> SceneResult<Self> {
        let (models, _materials) = tobj::load_obj_buf(
            reader,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
            |_| Err(tobj::LoadError::OpenFileFailed),
        )
        .map_err(|source| SceneError::ObjLoad {
            path: label.to_string(),
            source,
        })?;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len() as u32;

            let positions: Vec<[f32; 3]> = mesh
                .positions
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2]])
                .collect();

            // Use normals from the file if present, otherwise derive them
            let normals: Vec<[f32; 3]> =
                if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
                    mesh.normals
                        .chunks_exact(3)
                        .map(|n| [n[0], n[1], n[2]])
                        .collect()
                } else {
                    compute_smooth_normals(&positions, &mesh.indices)
                };

            for (i, (position, normal)) in positions.iter().zip(&normals).enumerate() {
                let tex_coords = mesh
                    .texcoords
                    .get(i * 2..i * 2 + 2)
                    .map(|uv| [uv[0], uv[1]])
                    .unwrap_or([0.0, 0.0]);
                vertices.push(Vertex::new(*position, *normal, tex_coords));
            }
            indices.extend(mesh.indices.iter().map(|&i| base + i));
        }

        Ok(Self::new(vertices, indices)?)
    }
}
