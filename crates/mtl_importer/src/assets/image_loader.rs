//! Image probing for imported textures
//!
//! Reads just enough of an image file to learn its format and size, without
//! decoding pixel data.

use std::path::Path;

use serde::Serialize;

use crate::assets::AssetError;

/// Header information of an image file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageInfo {
    /// Probe an image file's dimensions
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        let (width, height) = image::image_dimensions(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to probe image {:?}: {}", path_ref, e)))?;

        log::debug!("Probed image {}x{} from {:?}", width, height, path_ref);

        Ok(Self { width, height })
    }

    /// Whether the file extension names a format the probe understands
    pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
        image::ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
    }
}
