//! Retention Sweeper — deletes artifacts older than a configured age.
//!
//! Runs both on a fixed background cadence and on demand via the cleanup
//! endpoint. Only `resume_*.pdf` files are candidates; in-flight temp files
//! from atomic saves are never touched. A failure to delete one file is
//! logged and skipped — the sweep itself never fails part-way.

use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::artifacts::{ArtifactStore, StorageError};

/// Outcome of one sweep pass.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub examined: usize,
    pub deleted: usize,
    pub failed: usize,
    /// Artifacts modified before this instant were eligible for deletion.
    pub cutoff: DateTime<Utc>,
}

/// Deletes artifacts whose modification time is older than `max_age`.
/// Idempotent; safe to run concurrently with saves because saves are
/// atomic renames.
pub async fn sweep(store: &ArtifactStore, max_age: Duration) -> Result<SweepReport, StorageError> {
    let now = SystemTime::now();
    let cutoff = DateTime::<Utc>::from(now - max_age);
    let mut report = SweepReport {
        examined: 0,
        deleted: 0,
        failed: 0,
        cutoff,
    };

    let mut entries = tokio::fs::read_dir(store.dir()).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if !name.starts_with("resume_") || !name.ends_with(".pdf") {
            continue;
        }
        report.examined += 1;

        let modified = match entry.metadata().await.and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!(file = %name, "could not stat artifact during sweep: {e}");
                report.failed += 1;
                continue;
            }
        };

        let age = now.duration_since(modified).unwrap_or_default();
        if age <= max_age {
            continue;
        }

        match tokio::fs::remove_file(entry.path()).await {
            Ok(()) => report.deleted += 1,
            Err(e) => {
                warn!(file = %name, "could not delete expired artifact: {e}");
                report.failed += 1;
            }
        }
    }

    info!(
        examined = report.examined,
        deleted = report.deleted,
        failed = report.failed,
        "retention sweep complete"
    );
    Ok(report)
}

/// Background loop: one sweep per interval, forever. Spawned once at
/// startup; individual sweep failures are logged, never fatal.
pub async fn run(store: std::sync::Arc<ArtifactStore>, interval: Duration, max_age: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if let Err(e) = sweep(&store, max_age).await {
            warn!("retention sweep failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_sweep_deletes_stale_and_keeps_fresh_artifacts() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let stale = store.save(Bytes::from_static(b"old")).await.unwrap();
        // Let the stale artifact age past a zero-duration retention window.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let report = sweep(&store, Duration::ZERO).await.unwrap();
        assert_eq!(report.deleted, 1);
        assert!(!store.exists(&stale).await);

        let fresh = store.save(Bytes::from_static(b"new")).await.unwrap();
        let report = sweep(&store, Duration::from_secs(3600)).await.unwrap();
        assert_eq!(report.deleted, 0);
        assert!(store.exists(&fresh).await);
    }

    #[tokio::test]
    async fn test_sweep_ignores_files_that_are_not_artifacts() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        std::fs::write(dir.path().join("notes.txt"), b"keep me").unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let report = sweep(&store, Duration::ZERO).await.unwrap();
        assert_eq!(report.examined, 0);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_sweep_of_empty_store_is_a_no_op() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path()).unwrap();

        let report = sweep(&store, Duration::from_secs(1)).await.unwrap();
        assert_eq!(report.examined, 0);
        assert_eq!(report.deleted, 0);
        assert_eq!(report.failed, 0);
    }
}
