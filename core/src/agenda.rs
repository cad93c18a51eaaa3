// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::Result;
use crate::persist::{EventFile, SaveOutcome};
use crate::{CalendarCursor, Config, ConflictPolicy, Event, EventDraft, EventStore};

/// Result of loading the event file into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// Events were merged from the file.
    Loaded(usize),

    /// There was no event file yet.
    FirstRun,

    /// The file could not be read; the session continues without it.
    Failed(String),
}

/// Result of adding an event through [`Agenda::add_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The event was added and overlaps nothing.
    Added(Event),

    /// The event was added although it overlaps an existing one.
    AddedWithConflict(Event),

    /// The event overlaps an existing one and was not added.
    Rejected,
}

/// A scheduler session: one event store and one calendar cursor.
#[derive(Debug)]
pub struct Agenda {
    config: Config,
    file: EventFile,
    store: EventStore,
    cursor: CalendarCursor,
    load_report: LoadReport,
}

impl Agenda {
    /// Creates a new session and loads the persisted events.
    pub async fn new(mut config: Config) -> Result<Self> {
        config.normalize()?;
        let file = EventFile::new(config.events_path());
        Ok(Self::with_file(config, file, CalendarCursor::today()).await)
    }

    /// Creates a session over an explicit event file and cursor.
    pub async fn with_file(config: Config, file: EventFile, cursor: CalendarCursor) -> Self {
        let mut that = Self {
            config,
            file,
            store: EventStore::new(),
            cursor,
            load_report: LoadReport::FirstRun,
        };
        that.load_report = that.reload().await;
        that
    }

    /// Merges the event file into the store again.
    ///
    /// Events already in memory are kept, so loading twice duplicates them.
    #[tracing::instrument(skip(self))]
    pub async fn reload(&mut self) -> LoadReport {
        match self.file.load().await {
            Ok(Some(map)) => {
                let count = map.values().map(Vec::len).sum();
                self.store.merge(map);
                tracing::info!(count, "events loaded");
                LoadReport::Loaded(count)
            }
            Ok(None) => LoadReport::FirstRun,
            Err(e) => {
                tracing::error!(err = %e, "failed to load events");
                LoadReport::Failed(e.to_string())
            }
        }
    }

    /// How the initial load went.
    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn file(&self) -> &EventFile {
        &self.file
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore {
        &mut self.store
    }

    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CalendarCursor {
        &mut self.cursor
    }

    /// Whether the draft overlaps an event already on its date.
    pub fn conflicts(&self, draft: &EventDraft) -> bool {
        self.store.conflicts(&draft.date, draft.start, draft.end)
    }

    /// Adds an event, applying the configured conflict policy.
    ///
    /// With `force`, a conflicting event is added even under [`ConflictPolicy::Reject`].
    pub fn add_event(&mut self, draft: EventDraft, force: bool) -> AddOutcome {
        let conflict = match self.config.on_conflict {
            ConflictPolicy::Allow => false,
            ConflictPolicy::Warn | ConflictPolicy::Reject => self.conflicts(&draft),
        };

        if conflict && !force && self.config.on_conflict == ConflictPolicy::Reject {
            tracing::info!(date = %draft.date, title = draft.title, "rejecting conflicting event");
            return AddOutcome::Rejected;
        }

        let event = self
            .store
            .create(draft.date, draft.title, draft.start, draft.end)
            .clone();
        match conflict {
            true => AddOutcome::AddedWithConflict(event),
            false => AddOutcome::Added(event),
        }
    }

    /// Saves the store, consuming the session.
    pub async fn close(self) -> Result<SaveOutcome> {
        self.file.save(&self.store).await
    }

    /// Saves the store and keeps the session open.
    pub async fn save(&self) -> Result<SaveOutcome> {
        self.file.save(&self.store).await
    }
}
