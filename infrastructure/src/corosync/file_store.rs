//! File-backed [`ConfigStorePort`] for corosync.conf.
//!
//! Writes go to a temporary file in the same directory which is then
//! renamed over the target, so readers never see a half-written file.

use async_trait::async_trait;
use corosync_application::ports::config_store::{ConfigStoreError, ConfigStorePort};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// corosync.conf on the local filesystem
#[derive(Debug, Clone)]
pub struct CorosyncConfFile {
    path: PathBuf,
}

impl CorosyncConfFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomic(path: &Path, text: &str) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(text.as_bytes())?;
        temp.as_file().sync_all()?;

        // Keep the mode of the file being replaced
        if let Ok(metadata) = std::fs::metadata(path) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }

        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[async_trait]
impl ConfigStorePort for CorosyncConfFile {
    async fn load(&self) -> Result<String, ConfigStoreError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConfigStoreError::Read {
                location: self.location(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Read corosync.conf");
        Ok(text)
    }

    async fn save(&self, text: &str) -> Result<(), ConfigStoreError> {
        let path = self.path.clone();
        let text = text.to_string();
        let bytes = text.len();

        tokio::task::spawn_blocking(move || Self::write_atomic(&path, &text))
            .await
            .map_err(io::Error::other)
            .and_then(|result| result)
            .map_err(|source| ConfigStoreError::Write {
                location: self.location(),
                source,
            })?;

        debug!(path = %self.path.display(), bytes, "Wrote corosync.conf");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
