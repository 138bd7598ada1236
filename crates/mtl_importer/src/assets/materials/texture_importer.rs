//! Texture import capability
//!
//! A [`TextureImporter`] moves image files into a host asset store and hands
//! back opaque [`TextureHandle`]s. [`FileSystemTextureImporter`] is the
//! directory-backed implementation used by the command line tool.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::MaterialError;
use crate::assets::image_loader::ImageInfo;

/// Host handle of an imported texture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureHandle {
    /// File the texture was imported from
    pub source: PathBuf,
    /// Object path inside the host asset store
    pub asset_path: String,
    /// Pixel size, when the importer could read it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageInfo>,
}

impl TextureHandle {
    /// Whether this texture was imported from a file named `file_name`.
    ///
    /// Matches whole trailing path components, so `wood.png` matches
    /// `maps/wood.png` but not `maps/oakwood.png`.
    pub fn matches(&self, file_name: &str) -> bool {
        !file_name.is_empty() && self.source.ends_with(file_name)
    }
}

/// Capability to import image files into a host asset store
pub trait TextureImporter {
    /// Import `sources` into the package path `destination`.
    ///
    /// Files that cannot be imported may be left out of the result; callers
    /// treat a missing handle as a lookup miss. An `Err` aborts the import.
    fn import_textures(&mut self, sources: &[PathBuf], destination: &str) -> Result<Vec<TextureHandle>, MaterialError>;
}

/// Find the imported texture for a file name referenced by a material
pub fn find_texture<'a>(handles: &'a [TextureHandle], file_name: &str) -> Option<&'a TextureHandle> {
    handles.iter().find(|handle| handle.matches(file_name))
}

/// Imports textures by copying them under a root directory
///
/// Sources that share a file name but live in different directories are
/// stored under numbered names (`stone.png`, `stone_1.png`) so one never
/// overwrites another.
#[derive(Debug, Clone)]
pub struct FileSystemTextureImporter {
    root: PathBuf,
    /// Stored file -> source it was copied from
    claimed: HashMap<PathBuf, PathBuf>,
}

impl FileSystemTextureImporter {
    /// Create an importer storing textures under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            claimed: HashMap::new(),
        }
    }

    /// Pick the stored file for `source`, reusing its earlier slot if it has one
    fn claim_target(&mut self, source: &Path, target_dir: &Path) -> Option<PathBuf> {
        let file_name = source.file_name()?;
        let stem = source.file_stem().map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let extension = source.extension().map(|e| e.to_string_lossy().into_owned());

        let mut target = target_dir.join(file_name);
        let mut suffix = 0;
        while let Some(owner) = self.claimed.get(&target) {
            if owner == source {
                return Some(target);
            }
            suffix += 1;
            let renamed = match &extension {
                Some(ext) => format!("{stem}_{suffix}.{ext}"),
                None => format!("{stem}_{suffix}"),
            };
            target = target_dir.join(renamed);
        }

        if suffix > 0 {
            log::warn!(
                "Texture {:?} has the same file name as an earlier texture, storing it as {:?}",
                source,
                target
            );
        }
        self.claimed.insert(target.clone(), source.to_path_buf());
        Some(target)
    }

    fn import_one(&mut self, source: &Path, target_dir: &Path, destination: &str) -> Option<TextureHandle> {
        if !source.is_file() {
            log::warn!("Texture {:?} not found, skipping", source);
            return None;
        }

        let target = self.claim_target(source, target_dir)?;
        if let Err(e) = fs::copy(source, &target) {
            log::warn!("Failed to copy texture {:?} to {:?}: {}", source, target, e);
            return None;
        }

        let size = if ImageInfo::is_supported(source) {
            match ImageInfo::probe(source) {
                Ok(info) => Some(info),
                Err(e) => {
                    log::debug!("{}", e);
                    None
                }
            }
        } else {
            log::debug!("No size probe for {:?}", source);
            None
        };

        let stem = target.file_stem().map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        let asset_path = format!("{}/{}", destination.trim_end_matches('/'), stem);
        log::info!("Imported texture {:?} as {}", source, asset_path);

        Some(TextureHandle {
            source: source.to_path_buf(),
            asset_path,
            size,
        })
    }
}

impl TextureImporter for FileSystemTextureImporter {
    fn import_textures(&mut self, sources: &[PathBuf], destination: &str) -> Result<Vec<TextureHandle>, MaterialError> {
        if sources.is_empty() {
            return Ok(Vec::new());
        }

        let target_dir = self.root.join(destination);
        fs::create_dir_all(&target_dir).map_err(|e| MaterialError::io(&target_dir, e))?;

        let handles: Vec<TextureHandle> = sources
            .iter()
            .filter_map(|source| self.import_one(source, &target_dir, destination))
            .collect();

        if handles.len() < sources.len() {
            log::warn!(
                "Imported {} of {} texture(s) into {}",
                handles.len(),
                sources.len(),
                destination
            );
        }

        Ok(handles)
    }
}
