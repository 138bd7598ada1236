//! Material parsing and import subsystem
//!
//! Pure MTL parsing (`mtl_parser`, `texture_collector`, `asset_naming`) feeds an
//! import pipeline (`material_factory`) that talks to the host only through the
//! [`TextureImporter`] and [`MaterialBuilder`] capabilities.

pub mod error;
pub mod asset_naming;
pub mod texture_collector;
pub mod mtl_parser;
pub mod material_loader;
pub mod texture_importer;
pub mod material_builder;
pub mod material_factory;


pub use error::MaterialError;
pub use asset_naming::{sanitize_asset_name, material_asset_name};
pub use texture_collector::{collect_images_by_token, dedup_preserving_order};
pub use mtl_parser::{MtlParser, MtlDocument, MtlLineWalker, MaterialRecord};
pub use material_loader::MaterialLoader;
pub use texture_importer::{TextureImporter, TextureHandle, FileSystemTextureImporter, find_texture};
pub use material_builder::{
    MaterialBuilder, MaterialGraph, MaterialAsset, BaseColorInput,
    GraphLayout, NodePosition, ManifestMaterialBuilder,
};
pub use material_factory::{
    MaterialFactory, ImportReport, ImportWarning, ImportedTextures, TextureChannel,
};
