// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Error, Result};
use crate::store::{EventMap, EventStore};

/// The JSON file holding the persisted date-to-events mapping.
#[derive(Debug, Clone)]
pub struct EventFile {
    path: PathBuf,
}

/// What happened when saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The file was written with this many events.
    Written(usize),

    /// Nothing was written, the store is empty and was never cleared.
    Skipped,
}

impl EventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted mapping, `None` if there is no file yet.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Option<EventMap>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("no event file found, starting empty");
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let map: EventMap = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        for (date, events) in &map {
            if let Some(e) = events.iter().find(|e| e.date() != *date) {
                return Err(self.corrupt(format!(
                    "event `{}` is dated {} but stored under {}",
                    e.title(),
                    e.date(),
                    date
                )));
            }
        }

        tracing::debug!(dates = map.len(), "loaded event file");
        Ok(Some(map))
    }

    /// Writes the whole store, unless it is empty and nothing was deleted.
    #[tracing::instrument(skip(self, store), fields(path = %self.path.display()))]
    pub async fn save(&self, store: &EventStore) -> Result<SaveOutcome> {
        if store.is_empty() && !store.was_cleared() {
            tracing::debug!("store is empty and untouched, skipping save");
            return Ok(SaveOutcome::Skipped);
        }

        let io_err = |source| Error::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tracing::debug!(path = %parent.display(), "ensuring state directory exists");
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(store.as_map())
            .map_err(|e| Error::Io {
                path: self.path.clone(),
                source: e.into(),
            })?;
        fs::write(&self.path, content).await.map_err(io_err)?;

        let count = store.len();
        tracing::info!(count, "saved events");
        Ok(SaveOutcome::Written(count))
    }

    fn corrupt(&self, reason: impl ToString) -> Error {
        Error::Corrupt {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}
