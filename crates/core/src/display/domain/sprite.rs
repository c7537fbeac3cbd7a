use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpriteLoadError {
    #[error("failed to read sprite {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("sprite {path} is empty")]
    Empty { path: PathBuf },
}

/// The overlay image asset, loaded once and shared by every placement.
///
/// The byte content is opaque to this crate; decoding is the display
/// backend's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    name: String,
    bytes: Vec<u8>,
}

impl Sprite {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Reads the asset from disk without decoding it.
    pub fn from_file(path: &Path) -> Result<Self, SpriteLoadError> {
        let bytes = fs::read(path).map_err(|source| SpriteLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if bytes.is_empty() {
            return Err(SpriteLoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sprite")
            .to_string();
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
