//! Error types for material parsing and import

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while reading, parsing, or importing an MTL file.
///
/// Texture lookup misses are not errors; they are reported as
/// [`ImportWarning`](super::ImportWarning)s and the material is still built.
#[derive(Error, Debug)]
pub enum MaterialError {
    /// The MTL file (or an output location) could not be read or written
    #[error("IO error on {path:?}: {source}")]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A directive could not be parsed
    #[error("Line {line}: {directive} {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Directive token of the offending line
        directive: String,
        /// What went wrong
        message: String,
    },

    /// The texture importer failed as a whole
    #[error("Texture import error: {0}")]
    Import(String),

    /// The material builder could not create a material
    #[error("Failed to build material '{material}': {message}")]
    Build {
        /// Asset name of the material
        material: String,
        /// What went wrong
        message: String,
    },

    /// The import configuration is invalid
    #[error("Config error: {0}")]
    Config(String),
}

impl MaterialError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line_num: usize, directive: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            line: line_num + 1,
            directive: directive.to_string(),
            message: message.into(),
        }
    }
}
