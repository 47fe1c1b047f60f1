//! Directory-backed file registry

use crate::utils::error::{FileDropError, Result};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::types::{FileContent, StoredFile};

/// Named files stored flat in a single directory
///
/// The directory listing is the registry: nothing is cached and no sidecar
/// metadata is written. Uploads and deletes hold the write side of `guard`,
/// listings and downloads the read side, so a reader never observes a file
/// that is half written or in the middle of being removed.
#[derive(Debug)]
pub struct FileRegistry {
    base_path: PathBuf,
    guard: RwLock<()>,
}

impl FileRegistry {
    /// Open the registry, creating the storage directory if it doesn't exist
    pub async fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let path = base_path.as_ref().to_path_buf();

        fs::create_dir_all(&path).await.map_err(|e| {
            FileDropError::Config(format!(
                "Failed to create storage directory {}: {}",
                path.display(),
                e
            ))
        })?;

        info!("File registry initialized at: {}", path.display());
        Ok(Self {
            base_path: path,
            guard: RwLock::new(()),
        })
    }

    /// Storage directory
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Store `content` under `filename`, replacing any file of the same name
    pub async fn upload(&self, filename: &str, content: &[u8]) -> Result<StoredFile> {
        if filename.is_empty() {
            return Err(FileDropError::missing_input("Upload has no filename"));
        }
        let file_path = self
            .entry_path(filename)
            .ok_or_else(|| FileDropError::invalid_name(filename))?;

        let _guard = self.guard.write().await;

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            FileDropError::write(format!("Failed to create storage directory: {}", e))
        })?;

        fs::write(&file_path, content).await.map_err(|e| {
            FileDropError::write(format!("Failed to write {}: {}", file_path.display(), e))
        })?;

        debug!(filename, size = content.len(), "File stored");
        Ok(StoredFile::new(filename))
    }

    /// Names of all files currently in the storage directory, in directory order
    pub async fn list(&self) -> Result<Vec<String>> {
        let _guard = self.guard.read().await;

        let mut entries = fs::read_dir(&self.base_path).await.map_err(|e| {
            FileDropError::directory_read(format!(
                "Failed to read {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| FileDropError::directory_read(format!("Failed to read entry: {}", e)))?
        {
            let file_type = entry.file_type().await.map_err(|e| {
                FileDropError::directory_read(format!("Failed to stat entry: {}", e))
            })?;

            if file_type.is_dir() {
                continue;
            }

            files.push(entry.file_name().to_string_lossy().into_owned());
        }

        debug!(count = files.len(), "Listed files");
        Ok(files)
    }

    /// Full content of the file named exactly `filename`
    pub async fn download(&self, filename: &str) -> Result<FileContent> {
        let _guard = self.guard.read().await;
        let file_path = self.existing_file(filename).await?;

        let content = fs::read(&file_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FileDropError::not_found(filename),
            _ => FileDropError::server(format!("Failed to read {}: {}", file_path.display(), e)),
        })?;

        debug!(filename, size = content.len(), "File read");
        Ok(FileContent {
            filename: filename.to_string(),
            content,
        })
    }

    /// Remove the file named exactly `filename`
    pub async fn delete(&self, filename: &str) -> Result<()> {
        let _guard = self.guard.write().await;
        let file_path = self.existing_file(filename).await?;

        fs::remove_file(&file_path)
            .await
            .map_err(|e| removal_error(filename, &file_path, e))?;

        debug!(filename, "File deleted");
        Ok(())
    }

    /// Check that the storage directory is still usable
    pub async fn health_check(&self) -> Result<()> {
        let metadata = fs::metadata(&self.base_path).await.map_err(|e| {
            FileDropError::directory_read(format!("Storage directory unavailable: {}", e))
        })?;

        if !metadata.is_dir() {
            return Err(FileDropError::directory_read(format!(
                "{} is not a directory",
                self.base_path.display()
            )));
        }

        Ok(())
    }

    /// Resolve a stored file by exact name, failing with `NotFound` before any read
    async fn existing_file(&self, filename: &str) -> Result<PathBuf> {
        let file_path = self
            .entry_path(filename)
            .ok_or_else(|| FileDropError::not_found(filename))?;

        match fs::metadata(&file_path).await {
            Ok(metadata) if !metadata.is_dir() => Ok(file_path),
            _ => Err(FileDropError::not_found(filename)),
        }
    }

    /// Path of a registry entry, or `None` if `filename` is not a single plain component
    fn entry_path(&self, filename: &str) -> Option<PathBuf> {
        is_plain_filename(filename).then(|| self.base_path.join(filename))
    }
}

/// A file that vanished between the lookup and the unlink is still `NotFound`
pub(super) fn removal_error(filename: &str, path: &Path, e: io::Error) -> FileDropError {
    match e.kind() {
        ErrorKind::NotFound => FileDropError::not_found(filename),
        _ => FileDropError::delete(format!("Failed to delete {}: {}", path.display(), e)),
    }
}

/// Whether `filename` names a direct child of the storage directory
///
/// Any other character sequence is accepted verbatim, including spaces,
/// unicode and leading dots.
pub fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}
