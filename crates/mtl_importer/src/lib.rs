//! # MTL Importer
//!
//! Reads Wavefront `.mtl` material libraries and recreates each material in a
//! host asset store.
//!
//! ## Features
//!
//! - **MTL Parsing**: `newmtl`, `Kd`, `Ks`, `map_Kd` and `map_Kn` into ordered records
//! - **Texture Collection**: deduplicated diffuse and normal map lists
//! - **Pluggable Hosts**: texture import and material creation behind traits
//! - **File-System Backend**: copies textures and writes RON/TOML material manifests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mtl_importer::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ImportConfig::for_file("models/ship.mtl");
//!     let mut importer = FileSystemTextureImporter::new(&config.output_root);
//!     let mut builder = ManifestMaterialBuilder::new(&config.output_root, config.manifest_format);
//!
//!     let report = MaterialFactory::process_material_file(&config, &mut importer, &mut builder)?;
//!     println!("{} materials", report.materials.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod assets;

/// Common imports for importer users
pub mod prelude {
    pub use crate::{
        core::config::ImportConfig,
        config::{Config, ConfigError, ConfigFormat},
        foundation::math::Vec3,
        assets::materials::{
            MtlParser, MtlDocument, MaterialRecord, MaterialLoader,
            MaterialFactory, ImportReport, ImportWarning, MaterialError,
            TextureImporter, TextureHandle, FileSystemTextureImporter,
            MaterialBuilder, MaterialGraph, MaterialAsset, ManifestMaterialBuilder,
            sanitize_asset_name,
        },
    };
}
