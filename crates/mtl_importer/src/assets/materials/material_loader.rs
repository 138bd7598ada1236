//! Material loader with MTL file support
//!
//! Reads an MTL file in one go and hands the text to [`MtlParser`].

use std::fs;
use std::path::{Path, PathBuf};

use super::error::MaterialError;
use super::mtl_parser::{MtlDocument, MtlParser};
use crate::core::config::ImportConfig;

/// Material loader for creating [`MtlDocument`]s from MTL files
pub struct MaterialLoader;

impl MaterialLoader {
    /// Load and parse an MTL file
    ///
    /// # Arguments
    /// * `mtl_path` - Path to the .mtl file
    /// * `texture_prefix` - Directory joined onto texture file names; the MTL
    ///   file's own directory when `None`
    pub fn load_document(mtl_path: impl AsRef<Path>, texture_prefix: Option<&Path>) -> Result<MtlDocument, MaterialError> {
        let mtl_path = mtl_path.as_ref();

        let contents = fs::read_to_string(mtl_path)
            .map_err(|e| MaterialError::io(mtl_path, e))?;

        let prefix = texture_prefix.map_or_else(|| Self::get_mtl_directory(mtl_path), Path::to_path_buf);
        log::debug!("Parsing {:?} with texture prefix {:?}", mtl_path, prefix);

        MtlParser::parse(&contents, &prefix)
    }

    /// Load the MTL file named by an import config
    pub fn load_from_config(config: &ImportConfig) -> Result<MtlDocument, MaterialError> {
        let prefix = config.texture_prefix();
        Self::load_document(&config.mtl_file, Some(prefix.as_path()))
    }

    /// Get the directory containing the MTL file (for resolving relative texture paths)
    pub fn get_mtl_directory(mtl_path: &Path) -> PathBuf {
        mtl_path.parent()
            .map_or_else(PathBuf::new, Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_mtl_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "newmtl Hull\nKd 0.8 0.8 0.9\nmap_Kd hull.png\n").unwrap();

        let doc = MaterialLoader::load_document(temp_file.path(), None).unwrap();
        assert_eq!(doc.materials.len(), 1);

        let dir = temp_file.path().parent().unwrap();
        assert_eq!(doc.diffuse_maps, vec![dir.join("hull.png")]);
    }

    #[test]
    fn test_explicit_texture_prefix() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "newmtl Hull\nmap_Kn hull_n.png\n").unwrap();

        let doc = MaterialLoader::load_document(temp_file.path(), Some(Path::new("maps"))).unwrap();
        assert_eq!(doc.normal_maps, vec![PathBuf::from("maps/hull_n.png")]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.mtl");

        match MaterialLoader::load_document(&missing, None) {
            Err(MaterialError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected IO error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_config() {
        let dir = TempDir::new().unwrap();
        let mtl = dir.path().join("scene.mtl");
        std::fs::write(&mtl, "newmtl A\nmap_Kd a.png\n").unwrap();

        let config = ImportConfig::for_file(&mtl);
        let doc = MaterialLoader::load_from_config(&config).unwrap();
        assert_eq!(doc.diffuse_maps, vec![dir.path().join("a.png")]);
    }

    #[test]
    fn test_get_mtl_directory() {
        assert_eq!(
            MaterialLoader::get_mtl_directory(Path::new("resources/models/ship.mtl")),
            PathBuf::from("resources/models")
        );
        assert_eq!(MaterialLoader::get_mtl_directory(Path::new("ship.mtl")), PathBuf::new());
    }
}
