//! Wavefront OBJ export of a whole scene in world space.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cgmath::{InnerSpace, Point3, Transform as _, Vector3};

use crate::error::SceneResult;
use crate::gfx::scene::{SceneContext, SceneObject};

/// Write every object as its own `o` group.
///
/// Positions are baked through each object's model matrix and normals
/// through its normal matrix, so the file needs no transform data. Each
/// vertex gets its own `v`/`vt`/`vn` triple, so face corners use the same
/// index for all three.
pub fn export_scene_obj(scene: &SceneContext, mut writer: impl Write) -> SceneResult<()> {
    writeln!(writer, "# trellis scene export")?;
    writeln!(writer, "# {} objects", scene.len())?;

    let mut offset = 1usize;
    for object in scene.objects() {
        write_object(&mut writer, object, offset)?;
        offset += object.mesh().vertex_count();
    }
    writer.flush()?;
    Ok(())
}

pub fn export_scene_obj_to_file(scene: &SceneContext, path: impl AsRef<Path>) -> SceneResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    export_scene_obj(scene, writer)?;
    log::info!("Exported {} objects to {}", scene.len(), path.display());
    Ok(())
}

fn write_object(writer: &mut impl Write, object: &SceneObject, offset: usize) -> SceneResult<()> {
    let mesh = object.mesh();
    let model = object.transform.model_matrix();
    let normal_matrix = object.transform.normal_matrix();

    writeln!(writer, "o {}", object_name(&object.name))?;

    for vertex in mesh.vertices() {
        let p = model.transform_point(Point3::from(vertex.position));
        writeln!(writer, "v {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    for vertex in mesh.vertices() {
        writeln!(writer, "vt {:.6} {:.6}", vertex.tex_coords[0], vertex.tex_coords[1])?;
    }
    for vertex in mesh.vertices() {
        let mut n = normal_matrix * Vector3::from(vertex.normal);
        if n.magnitude2() > 0.0 {
            n = n.normalize();
        }
        writeln!(writer, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    }

    for [a, b, c] in mesh.triangles() {
        let [a, b, c] = [a, b, c].map(|i| i as usize + offset);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

/// OBJ names end at the line break and are split on whitespace by most
/// readers.
fn object_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "unnamed".to_string()
    } else {
        cleaned
    }
}
