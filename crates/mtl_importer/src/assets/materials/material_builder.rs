//! Material graph description and the material-building capability
//!
//! [`MaterialGraph`] is a host-neutral description of one opaque shading
//! graph: a base color input (texture sample or constant color), an optional
//! normal texture, and constant specular and roughness inputs. A
//! [`MaterialBuilder`] turns that description into a compiled host asset.
//!
//! # Examples
//! ```
//! use mtl_importer::assets::materials::MaterialGraph;
//!
//! let graph = MaterialGraph::new("M_Hull", "Materials")
//!     .base_color_rgb(0.8, 0.8, 0.9)
//!     .specular(0.92)
//!     .roughness(0.26);
//! assert!(graph.base_color_texture_handle().is_none());
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use super::error::MaterialError;
use super::texture_importer::TextureHandle;
use crate::config::ConfigFormat;
use crate::foundation::math::Vec3;

/// Editor position of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodePosition {
    /// Horizontal offset
    pub x: i32,
    /// Vertical offset
    pub y: i32,
}

impl NodePosition {
    /// Create a node position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where each expression node sits in the graph editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphLayout {
    /// Texture sample or constant color node
    pub base_color: NodePosition,
    /// Normal texture sample node
    pub normal: NodePosition,
    /// Roughness constant node
    pub roughness: NodePosition,
    /// Specular constant node
    pub specular: NodePosition,
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            base_color: NodePosition::new(-384, -200),
            normal: NodePosition::new(-384, 250),
            roughness: NodePosition::new(-125, 150),
            specular: NodePosition::new(-125, 50),
        }
    }
}

/// Input wired into the base color pin
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseColorInput {
    /// Sample an imported texture (RGBA output)
    Texture(TextureHandle),
    /// Constant linear color, alpha 1
    Constant(Vec3),
}

/// Host-neutral description of one opaque material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialGraph {
    /// Sanitized asset name
    pub asset_name: String,
    /// Package path the asset is created in
    pub package_path: String,
    /// Base color pin
    pub base_color: BaseColorInput,
    /// Normal pin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<TextureHandle>,
    /// Specular pin constant
    pub specular: f32,
    /// Roughness pin constant
    pub roughness: f32,
    /// Specular color (Ks) of the source material, kept for reference
    pub specular_color: Vec3,
    /// Node placement
    pub layout: GraphLayout,
}

impl MaterialGraph {
    /// Create a graph with a black base color and zero specular/roughness
    pub fn new(asset_name: impl Into<String>, package_path: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            package_path: package_path.into(),
            base_color: BaseColorInput::Constant(Vec3::zeros()),
            normal: None,
            specular: 0.0,
            roughness: 0.0,
            specular_color: Vec3::zeros(),
            layout: GraphLayout::default(),
        }
    }

    /// Set a constant base color
    pub fn base_color(mut self, color: Vec3) -> Self {
        self.base_color = BaseColorInput::Constant(color);
        self
    }

    /// Set a constant base color from RGB values
    pub fn base_color_rgb(self, r: f32, g: f32, b: f32) -> Self {
        self.base_color(Vec3::new(r, g, b))
    }

    /// Sample a texture for the base color
    pub fn base_color_texture(mut self, texture: TextureHandle) -> Self {
        self.base_color = BaseColorInput::Texture(texture);
        self
    }

    /// Set or clear the normal texture
    pub fn normal_texture(mut self, texture: Option<TextureHandle>) -> Self {
        self.normal = texture;
        self
    }

    /// Set specular (0-1 range)
    pub fn specular(mut self, specular: f32) -> Self {
        self.specular = specular.clamp(0.0, 1.0);
        self
    }

    /// Set roughness (0.0 = mirror smooth, 1.0 = completely rough)
    pub fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Record the source specular color
    pub fn specular_color(mut self, color: Vec3) -> Self {
        self.specular_color = color;
        self
    }

    /// The texture sampled for base color, if any
    pub fn base_color_texture_handle(&self) -> Option<&TextureHandle> {
        match &self.base_color {
            BaseColorInput::Texture(handle) => Some(handle),
            BaseColorInput::Constant(_) => None,
        }
    }

    /// Object path of the material in the host asset store
    pub fn object_path(&self) -> String {
        format!("{}/{}", self.package_path.trim_end_matches('/'), self.asset_name)
    }
}

/// A material created by a [`MaterialBuilder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialAsset {
    /// Sanitized asset name
    pub asset_name: String,
    /// Object path in the host asset store
    pub object_path: String,
    /// File written for the asset, when the host is file backed
    pub location: Option<PathBuf>,
}

/// Capability to create and compile a material asset from a graph description
pub trait MaterialBuilder {
    /// Create, wire and compile one material
    fn build_material(&mut self, graph: &MaterialGraph) -> Result<MaterialAsset, MaterialError>;
}

/// Builds materials by writing each graph as a manifest file
#[derive(Debug, Clone)]
pub struct ManifestMaterialBuilder {
    root: PathBuf,
    format: ConfigFormat,
}

impl ManifestMaterialBuilder {
    /// Create a builder writing manifests under `root`
    pub fn new(root: impl Into<PathBuf>, format: ConfigFormat) -> Self {
        Self {
            root: root.into(),
            format,
        }
    }

    /// Manifest file a graph is written to
    pub fn manifest_path(&self, graph: &MaterialGraph) -> PathBuf {
        self.root
            .join(&graph.package_path)
            .join(format!("{}.{}", graph.asset_name, self.format.extension()))
    }
}

impl MaterialBuilder for ManifestMaterialBuilder {
    fn build_material(&mut self, graph: &MaterialGraph) -> Result<MaterialAsset, MaterialError> {
        let build_error = |message: String| MaterialError::Build {
            material: graph.asset_name.clone(),
            message,
        };

        if graph.asset_name.is_empty() {
            return Err(build_error("empty asset name".to_string()));
        }

        let path = self.manifest_path(graph);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| MaterialError::io(dir, e))?;
        }

        let contents = self
            .format
            .to_string_pretty(graph)
            .map_err(|e| build_error(e.to_string()))?;
        fs::write(&path, contents).map_err(|e| MaterialError::io(&path, e))?;

        log::debug!("Wrote material manifest {:?}", path);

        Ok(MaterialAsset {
            asset_name: graph.asset_name.clone(),
            object_path: graph.object_path(),
            location: Some(path),
        })
    }
}
