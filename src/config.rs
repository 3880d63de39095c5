//! Configuration system
//!
//! [`SceneConfig`] holds the defaults used when a primitive is requested
//! without explicit parameters (for example `builtin:sphere` in a scene
//! file) and the material new objects start with. Any type implementing
//! [`ConfigFile`] can be read from and written to `.ron` or `.toml` files.

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// On-disk formats recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Ron,
    Toml,
}

impl FileFormat {
    /// Picks the format from the path's extension.
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Ok(Self::Ron),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SceneError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parses `contents` in this format.
    pub fn parse<T: DeserializeOwned>(self, contents: &str) -> SceneResult<T> {
        match self {
            Self::Ron => ron::from_str(contents).map_err(|e| SceneError::Parse(e.to_string())),
            Self::Toml => toml::from_str(contents).map_err(|e| SceneError::Parse(e.to_string())),
        }
    }

    /// Serializes `value` in this format, pretty-printed.
    pub fn render<T: Serialize>(self, value: &T) -> SceneResult<String> {
        match self {
            Self::Ron => ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
                .map_err(|e| SceneError::Serialize(e.to_string())),
            Self::Toml => {
                toml::to_string_pretty(value).map_err(|e| SceneError::Serialize(e.to_string()))
            }
        }
    }
}

/// Configuration trait
pub trait ConfigFile: Serialize + DeserializeOwned {
    /// Load from a `.ron` or `.toml` file.
    fn load_from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        log::info!("Loading {} from {}", std::any::type_name::<Self>(), path.display());
        format.parse(&contents)
    }

    /// Save to a `.ron` or `.toml` file.
    fn save_to_file(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        let path = path.as_ref();
        let contents = FileFormat::from_path(path)?.render(self)?;
        std::fs::write(path, contents)?;
        log::info!("Saved {} to {}", std::any::type_name::<Self>(), path.display());
        Ok(())
    }
}

/// Parameters for a UV sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub latitude_segments: u32,
    pub longitude_segments: u32,
}

/// Parameters shared by cylinders and cones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundParams {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

/// Default material applied to freshly created objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDefaults {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metallic: f32,
}

/// Defaults for primitive generation and new objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub sphere: SphereParams,
    pub cylinder: RoundParams,
    pub cone: RoundParams,
    pub material: MaterialDefaults,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sphere: SphereParams {
                latitude_segments: 32,
                longitude_segments: 32,
            },
            cylinder: RoundParams {
                radius: 0.5,
                height: 1.0,
                segments: 20,
            },
            cone: RoundParams {
                radius: 0.5,
                height: 1.0,
                segments: 20,
            },
            material: MaterialDefaults {
                color: [1.0, 1.0, 1.0],
                roughness: 0.5,
                metallic: 0.0,
            },
        }
    }
}

impl ConfigFile for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a/b.ron")).unwrap(), FileFormat::Ron);
        assert_eq!(FileFormat::from_path(Path::new("b.toml")).unwrap(), FileFormat::Toml);
        assert!(matches!(
            FileFormat::from_path(Path::new("scene.json")),
            Err(SceneError::UnsupportedFormat(_))
        ));
        assert!(FileFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: SceneConfig = FileFormat::Ron
            .parse("(cone: (radius: 2.0, height: 3.0, segments: 8))")
            .unwrap();
        assert_eq!(config.cone.segments, 8);
        assert_eq!(config.cylinder, SceneConfig::default().cylinder);
        assert_eq!(config.sphere.latitude_segments, 32);
    }

    #[test]
    fn toml_and_ron_agree() {
        let mut config = SceneConfig::default();
        config.sphere.longitude_segments = 7;
        config.material.metallic = 1.0;

        let toml_text = FileFormat::Toml.render(&config).unwrap();
        let ron_text = FileFormat::Ron.render(&config).unwrap();
        let from_toml: SceneConfig = FileFormat::Toml.parse(&toml_text).unwrap();
        let from_ron: SceneConfig = FileFormat::Ron.parse(&ron_text).unwrap();
        assert_eq!(from_toml, config);
        assert_eq!(from_ron, config);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("trellis_config_{}.toml", std::process::id()));
        let mut config = SceneConfig::default();
        config.cylinder.segments = 12;
        config.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.cylinder.segments, 12);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let result: SceneResult<SceneConfig> = FileFormat::Ron.parse("(sphere: oops)");
        assert!(matches!(result, Err(SceneError::Parse(_))));
    }
}
