//! Dashboard cache - keep the last loaded dataset and its dashboard in memory.
//!
//! The cached snapshot is reused while the source file keeps the same length
//! and modification time, and recomputed as soon as either changes.
//! Nothing is written to disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;

use crate::api::logs::log_info;
use crate::error::{CsvError, DataLoadError, ServerError, ServerResult};
use crate::dataset::DerivedDataset;
use crate::transform::pipeline::{build_dashboard, prepare_file, Dashboard, DashboardOptions};

/// Identity of a file version on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    len: u64,
    modified: Option<SystemTime>,
}

impl Fingerprint {
    /// Read the fingerprint of `path`.
    pub fn of(path: &Path) -> Result<Self, CsvError> {
        let meta = std::fs::metadata(path).map_err(|source| CsvError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// A loaded dataset together with the dashboard computed from it.
#[derive(Debug)]
pub struct Snapshot {
    pub data: DerivedDataset,
    pub dashboard: Dashboard,
}

#[derive(Debug)]
struct CachedSnapshot {
    fingerprint: Fingerprint,
    snapshot: Arc<Snapshot>,
}

/// Cache of the dashboard for one source file.
#[derive(Debug)]
pub struct DashboardCache {
    path: PathBuf,
    options: DashboardOptions,
    entry: RwLock<Option<CachedSnapshot>>,
}

impl DashboardCache {
    /// Create an empty cache for `path`.
    pub fn new(path: impl Into<PathBuf>, options: DashboardOptions) -> Self {
        Self {
            path: path.into(),
            options,
            entry: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> DashboardOptions {
        self.options
    }

    /// Return the cached snapshot, reloading it if the file changed.
    pub async fn get_or_load(&self) -> ServerResult<Arc<Snapshot>> {
        let fingerprint = Fingerprint::of(&self.path).map_err(DataLoadError::from)?;

        if let Some(cached) = self.lookup(fingerprint).await {
            return Ok(cached);
        }

        let mut entry = self.entry.write().await;

        // Another request may have refreshed it while we waited for the lock
        if let Some(cached) = (*entry).as_ref().filter(|c| c.fingerprint == fingerprint) {
            return Ok(Arc::clone(&cached.snapshot));
        }

        if entry.is_some() {
            log_info(format!("🔄 {} changed, recomputing dashboard", self.path.display()));
        }

        let path = self.path.clone();
        let options = self.options;
        let snapshot = tokio::task::spawn_blocking(move || {
            prepare_file(&path).map(|data| {
                let dashboard = build_dashboard(&data, &options);
                Snapshot { data, dashboard }
            })
        })
        .await
        .map_err(|e| ServerError::Internal(format!("Dashboard task failed: {}", e)))??;

        let snapshot = Arc::new(snapshot);
        *entry = Some(CachedSnapshot {
            fingerprint,
            snapshot: Arc::clone(&snapshot),
        });

        Ok(snapshot)
    }

    /// Drop the cached value so the next request recomputes it.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }

    async fn lookup(&self, fingerprint: Fingerprint) -> Option<Arc<Snapshot>> {
        let entry = self.entry.read().await;
        (*entry)
            .as_ref()
            .filter(|c| c.fingerprint == fingerprint)
            .map(|c| Arc::clone(&c.snapshot))
    }
}
