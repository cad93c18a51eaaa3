// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{DateKey, Event, TimeOfDay};

/// Events grouped by the day they belong to.
pub type EventMap = BTreeMap<DateKey, Vec<Event>>;

/// The in-memory set of events for one session.
///
/// Every key holds at least one event, and every event under a key has that
/// key as its date. Sequences are kept in insertion order and sorted by start
/// time on read.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: EventMap,
    cleared: bool,
}

impl EventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new event under `date`. No conflict check is performed.
    pub fn create(
        &mut self,
        date: DateKey,
        title: impl Into<String>,
        start: TimeOfDay,
        end: Option<TimeOfDay>,
    ) -> &Event {
        let event = Event::new(date, title, start, end);
        tracing::debug!(%date, %event, "creating event");

        let seq = self.events.entry(date).or_default();
        seq.push(event);
        &seq[seq.len() - 1]
    }

    /// Whether any event exists on `date`.
    pub fn has_event(&self, date: &DateKey) -> bool {
        self.events.contains_key(date)
    }

    /// Events on `date` ordered by start time, empty if there are none.
    pub fn events_on(&self, date: &DateKey) -> Vec<&Event> {
        match self.events.get(date) {
            Some(seq) => sorted(seq),
            None => Vec::new(),
        }
    }

    /// Whether the interval `[start, end)` on `date` overlaps an existing event.
    ///
    /// A new event without an end is checked as the instant `start`. Intervals
    /// that only touch at a boundary do not conflict. An existing point event
    /// occupies the zero-length interval at its start.
    pub fn conflicts(&self, date: &DateKey, start: TimeOfDay, end: Option<TimeOfDay>) -> bool {
        let Some(seq) = self.events.get(date) else {
            return false;
        };

        let new_start = start.minutes();
        let new_end = end.unwrap_or(start).minutes();
        seq.iter().any(|e| {
            let e_start = e.start().minutes();
            let e_end = e.end().unwrap_or(e.start()).minutes();
            (new_start >= e_start && new_start < e_end)
                || (new_start <= e_start && new_end > e_start)
        })
    }

    /// Deletes `date` and all its events, returning them if the key existed.
    pub fn remove(&mut self, date: &DateKey) -> Option<Vec<Event>> {
        let removed = self.events.remove(date);
        tracing::debug!(%date, count = removed.as_ref().map_or(0, Vec::len), "removing events");
        self.cleared = true;
        removed
    }

    /// Removes every event.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.len(), "clearing all events");
        self.events.clear();
        self.cleared = true;
    }

    /// Merges a loaded mapping into the store.
    ///
    /// Events on a date that already exists are appended, without removing
    /// duplicates. Empty sequences are skipped.
    pub fn merge(&mut self, other: EventMap) {
        for (date, seq) in other {
            if seq.is_empty() {
                continue;
            }
            self.events.entry(date).or_default().extend(seq);
        }
    }

    /// All dates in chronological order, each with its events sorted by start time.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, Vec<&Event>)> {
        self.events.iter().map(|(date, seq)| (date, sorted(seq)))
    }

    /// All dates holding events, in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.events.keys()
    }

    /// The underlying mapping, in insertion order per date.
    pub fn as_map(&self) -> &EventMap {
        &self.events
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether a destructive operation ran on this store.
    pub fn was_cleared(&self) -> bool {
        self.cleared
    }
}

fn sorted(seq: &[Event]) -> Vec<&Event> {
    let mut events: Vec<&Event> = seq.iter().collect();
    events.sort_by_key(|e| e.start());
    events
}
