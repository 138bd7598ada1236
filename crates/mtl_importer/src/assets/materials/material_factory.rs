//! MTL import pipeline
//!
//! [`MaterialFactory`] ties the pieces together: load the MTL document, import
//! its textures through a [`TextureImporter`], then describe and build one
//! material per record through a [`MaterialBuilder`].

use std::fmt;

use super::asset_naming::material_asset_name;
use super::error::MaterialError;
use super::material_builder::{MaterialAsset, MaterialBuilder, MaterialGraph};
use super::material_loader::MaterialLoader;
use super::mtl_parser::{MaterialRecord, MtlDocument};
use super::texture_importer::{find_texture, TextureHandle, TextureImporter};
use crate::core::config::ImportConfig;

/// Texture slot of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureChannel {
    /// `map_Kd`
    Diffuse,
    /// `map_Kn`
    Normal,
}

impl fmt::Display for TextureChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diffuse => write!(f, "diffuse"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// Non-fatal problems found during an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportWarning {
    /// A material references a texture that was not imported; the material
    /// was built without it
    TextureLookupMiss {
        /// Material name as written in the MTL file
        material: String,
        /// Slot the texture was meant for
        channel: TextureChannel,
        /// File name as written in the MTL file
        file: String,
    },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextureLookupMiss { material, channel, file } => {
                write!(f, "material '{material}': {channel} texture '{file}' was not imported")
            }
        }
    }
}

/// Outcome of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Materials built, in MTL order
    pub materials: Vec<MaterialAsset>,
    /// Number of textures the importer returned
    pub textures_imported: usize,
    /// Lookup misses and similar non-fatal issues
    pub warnings: Vec<ImportWarning>,
}

/// Textures imported for one document, per channel
#[derive(Debug, Clone, Default)]
pub struct ImportedTextures {
    /// Handles for `map_Kd` files
    pub diffuse: Vec<TextureHandle>,
    /// Handles for `map_Kn` files
    pub normal: Vec<TextureHandle>,
}

/// Unified entry point for MTL imports
pub struct MaterialFactory;

impl MaterialFactory {
    /// Import every material of `config.mtl_file`
    ///
    /// # Arguments
    /// * `config` - Import settings
    /// * `importer` - Host texture import capability
    /// * `builder` - Host material creation capability
    ///
    /// # Returns
    /// The built materials plus any lookup misses
    pub fn process_material_file(
        config: &ImportConfig,
        importer: &mut dyn TextureImporter,
        builder: &mut dyn MaterialBuilder,
    ) -> Result<ImportReport, MaterialError> {
        config.validate().map_err(MaterialError::Config)?;

        log::info!("Importing materials from {:?}", config.mtl_file);
        let document = MaterialLoader::load_from_config(config)?;
        let report = Self::process_document(&document, config, importer, builder)?;

        log::info!(
            "MTL file processed: {} material(s), {} texture(s), {} warning(s)",
            report.materials.len(),
            report.textures_imported,
            report.warnings.len()
        );
        Ok(report)
    }

    /// Import an already parsed document
    pub fn process_document(
        document: &MtlDocument,
        config: &ImportConfig,
        importer: &mut dyn TextureImporter,
        builder: &mut dyn MaterialBuilder,
    ) -> Result<ImportReport, MaterialError> {
        let textures = Self::import_textures(document, config, importer)?;
        let mut report = ImportReport {
            textures_imported: textures.diffuse.len() + textures.normal.len(),
            ..Default::default()
        };

        for record in &document.materials {
            let graph = Self::graph_for_record(record, config, &textures, &mut report.warnings);
            log::info!("Generating material: {}", graph.asset_name);
            log::debug!("Diffuse color: {:?}, diffuse map: {:?}", record.diffuse_color, record.diffuse_map);

            let asset = builder.build_material(&graph)?;
            log::info!("Material {} generated successfully", asset.object_path);
            report.materials.push(asset);
        }

        Ok(report)
    }

    /// Import the document's diffuse maps, then its normal maps
    pub fn import_textures(
        document: &MtlDocument,
        config: &ImportConfig,
        importer: &mut dyn TextureImporter,
    ) -> Result<ImportedTextures, MaterialError> {
        let diffuse = importer.import_textures(&document.diffuse_maps, &config.texture_path)?;
        let normal = importer.import_textures(&document.normal_maps, &config.texture_path)?;
        Ok(ImportedTextures { diffuse, normal })
    }

    /// Describe the material graph for one record.
    ///
    /// A resolved diffuse texture drives the base color; otherwise the diffuse
    /// color is used as a constant. Unresolved references are pushed onto
    /// `warnings`.
    pub fn graph_for_record(
        record: &MaterialRecord,
        config: &ImportConfig,
        textures: &ImportedTextures,
        warnings: &mut Vec<ImportWarning>,
    ) -> MaterialGraph {
        let asset_name = material_asset_name(&config.material_prefix, &record.name);

        let diffuse = Self::resolve(record, TextureChannel::Diffuse, record.diffuse_map.as_deref(), &textures.diffuse, warnings);
        let normal = Self::resolve(record, TextureChannel::Normal, record.normal_map.as_deref(), &textures.normal, warnings);

        let graph = MaterialGraph::new(asset_name, config.material_path.as_str())
            .specular(config.specular)
            .roughness(config.roughness)
            .specular_color(record.specular_color)
            .normal_texture(normal);

        match diffuse {
            Some(texture) => graph.base_color_texture(texture),
            None => graph.base_color(record.diffuse_color),
        }
    }

    fn resolve(
        record: &MaterialRecord,
        channel: TextureChannel,
        file: Option<&str>,
        handles: &[TextureHandle],
        warnings: &mut Vec<ImportWarning>,
    ) -> Option<TextureHandle> {
        let file = file?;
        match find_texture(handles, file) {
            Some(handle) => Some(handle.clone()),
            None => {
                let warning = ImportWarning::TextureLookupMiss {
                    material: record.name.clone(),
                    channel,
                    file: file.to_string(),
                };
                log::warn!("{}", warning);
                warnings.push(warning);
                None
            }
        }
    }
}
