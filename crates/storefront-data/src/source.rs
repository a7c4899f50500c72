//! The byte-source seam and local implementations.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::client::FetchError;

/// Something that can produce the raw bytes of a catalog export.
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Retrieve the full payload.
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Catalog export read from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ByteSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound(self.path.display().to_string())
            } else {
                FetchError::Io {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory payload.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
impl ByteSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<static {} bytes>", self.bytes.len())
    }
}
