//! Build a one-cylinder scene and export it as Wavefront OBJ.
//!
//! Usage: `export_scene [output.obj] [config.ron|config.toml]`

use anyhow::{Context, Result};
use trellis::config::{ConfigFile, SceneConfig};
use trellis::gfx::io::{export_scene_obj_to_file, MeshLibrary};
use trellis::gfx::scene::SceneContext;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "test_cylinder.obj".to_string());
    let config = match args.next() {
        Some(path) => SceneConfig::load_from_file(&path)
            .with_context(|| format!("loading config {}", path))?,
        None => SceneConfig::default(),
    };

    let mut library = MeshLibrary::new(config);
    let mut scene = SceneContext::new();
    let cylinder = library
        .create_object("cylinder", "builtin:cylinder")
        .context("generating cylinder")?;
    scene.add_object(cylinder);

    let stats = scene.statistics();
    log::info!(
        "Scene: {} objects, {} vertices, {} triangles",
        stats.object_count,
        stats.total_vertices,
        stats.total_triangles
    );

    export_scene_obj_to_file(&scene, &output).with_context(|| format!("writing {}", output))?;
    println!("Exported scene to {}", output);
    Ok(())
}
