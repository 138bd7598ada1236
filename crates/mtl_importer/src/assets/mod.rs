//! Asset management system

pub mod image_loader;
pub mod materials;

pub use image_loader::ImageInfo;
pub use materials::{
    MtlParser, MtlDocument, MaterialRecord,
    MaterialLoader,
    MaterialFactory, ImportReport, ImportWarning,
    TextureImporter, MaterialBuilder,
    MaterialError,
};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset could not be read or decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
