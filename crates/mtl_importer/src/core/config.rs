//! # Import Configuration
//!
//! Every knob of an import run lives in [`ImportConfig`]. Nothing in the
//! pipeline reads global state; the config is passed into
//! [`MaterialFactory::process_material_file`](crate::assets::MaterialFactory::process_material_file)
//! explicitly and can be stored as TOML or RON.

use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigFormat};

/// Specular constant wired into every generated material
pub const DEFAULT_SPECULAR: f32 = 0.92;

/// Roughness constant wired into every generated material
pub const DEFAULT_ROUGHNESS: f32 = 0.26;

/// Configuration for one MTL import run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// The `.mtl` file to import
    pub mtl_file: PathBuf,

    /// Directory joined in front of every `map_Kd` / `map_Kn` file name.
    /// When unset, the directory containing `mtl_file` is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_source_dir: Option<PathBuf>,

    /// Root of the host asset store used by the file-system backends
    pub output_root: PathBuf,

    /// Package path (relative to the asset store) receiving imported textures
    pub texture_path: String,

    /// Package path (relative to the asset store) receiving generated materials
    pub material_path: String,

    /// Prefix prepended to material names before sanitizing
    pub material_prefix: String,

    /// Constant specular input of every material
    pub specular: f32,

    /// Constant roughness input of every material
    pub roughness: f32,

    /// Format of the material manifests written by the manifest builder
    pub manifest_format: ConfigFormat,

    /// Default log filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            mtl_file: PathBuf::from("materials.mtl"),
            texture_source_dir: None,
            output_root: PathBuf::from("Content"),
            texture_path: "Textures".to_string(),
            material_path: "Materials".to_string(),
            material_prefix: "M_".to_string(),
            specular: DEFAULT_SPECULAR,
            roughness: DEFAULT_ROUGHNESS,
            manifest_format: ConfigFormat::Ron,
            log_filter: "info".to_string(),
        }
    }
}

impl Config for ImportConfig {}

impl ImportConfig {
    /// Create a config for the given MTL file with every other setting defaulted
    pub fn for_file(mtl_file: impl Into<PathBuf>) -> Self {
        Self {
            mtl_file: mtl_file.into(),
            ..Default::default()
        }
    }

    /// Prefix joined with texture file names found in the MTL file
    pub fn texture_prefix(&self) -> PathBuf {
        match &self.texture_source_dir {
            Some(dir) => dir.clone(),
            None => self
                .mtl_file
                .parent()
                .map_or_else(PathBuf::new, Path::to_path_buf),
        }
    }

    /// Check value ranges before an import starts
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.specular) {
            return Err(format!("specular must be within 0..=1, got {}", self.specular));
        }
        if !(0.0..=1.0).contains(&self.roughness) {
            return Err(format!("roughness must be within 0..=1, got {}", self.roughness));
        }
        if self.texture_path.is_empty() || self.material_path.is_empty() {
            return Err("texture_path and material_path must not be empty".to_string());
        }
        Ok(())
    }
}
