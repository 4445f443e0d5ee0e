//! Artifact Store — persists rendered PDFs under collision-resistant names
//! in a single managed output directory.
//!
//! Filenames are generated here and never contain caller-supplied strings.
//! On the retrieval path, caller-supplied filenames are validated against
//! path-separator and parent-directory sequences before any filesystem call.
//!
//! Saves are atomic: bytes land in a temp file in the output directory and
//! are renamed into place, so a concurrent sweep or read can never observe
//! a half-written artifact.
#![allow(dead_code)]

pub mod sweeper;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Filename contains path separators or parent-directory sequences.
    #[error("unsafe artifact filename: {0:?}")]
    UnsafeFilename(String),

    /// No artifact with this name exists (or it has expired). A normal
    /// outcome of the retrieval path, not a system failure.
    #[error("artifact not found: {0}")]
    NotFound(String),

    #[error("artifact store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Opens the store, creating the output directory once up front.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes PDF bytes atomically under a fresh `resume_<token>.pdf` name
    /// and returns the filename handle.
    pub async fn save(&self, bytes: Bytes) -> Result<String, StorageError> {
        let filename = format!("resume_{}.pdf", Uuid::new_v4().simple());
        let dir = self.dir.clone();
        let name = filename.clone();

        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.flush()?;
            tmp.persist(dir.join(&name)).map_err(|e| e.error)?;
            Ok(())
        })
        .await??;

        debug!(%filename, "artifact stored");
        Ok(filename)
    }

    /// Reads an artifact back by its filename handle.
    pub async fn load(&self, filename: &str) -> Result<Bytes, StorageError> {
        validate_filename(filename)?;
        match tokio::fs::read(self.dir.join(filename)).await {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(filename.to_string()))
            }
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    /// True if a safely-named artifact exists. Unsafe names are never
    /// looked up.
    pub async fn exists(&self, filename: &str) -> bool {
        if validate_filename(filename).is_err() {
            return false;
        }
        tokio::fs::try_exists(self.dir.join(filename))
            .await
            .unwrap_or(false)
    }
}

/// Rejects any name that could escape the output directory.
fn validate_filename(filename: &str) -> Result<(), StorageError> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(StorageError::UnsafeFilename(filename.to_string()));
    }
    Ok(())
}
