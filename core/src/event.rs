// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DateKey, TimeOfDay};

/// One scheduled item on a calendar day.
///
/// An event without an end time is a point event: it marks an instant rather
/// than occupying an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,

    start: TimeOfDay,

    #[serde(
        default,
        serialize_with = "serialize_end",
        deserialize_with = "deserialize_end"
    )]
    end: Option<TimeOfDay>,

    date: DateKey,
}

impl Event {
    pub(crate) fn new(
        date: DateKey,
        title: impl Into<String>,
        start: TimeOfDay,
        end: Option<TimeOfDay>,
    ) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            date,
        }
    }

    /// The title of the event.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The start time of the event.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// The end time of the event, `None` for a point event.
    pub fn end(&self) -> Option<TimeOfDay> {
        self.end
    }

    /// The day this event belongs to.
    pub fn date(&self) -> DateKey {
        self.date
    }

    /// Whether the event has no duration.
    pub fn is_point(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} - {}: {}", self.start, end, self.title),
            None => write!(f, "{}: {}", self.start, self.title),
        }
    }
}

/// Draft for an event, used for creating new events through [`crate::Agenda`].
#[derive(Debug, Clone)]
pub struct EventDraft {
    /// The day of the event.
    pub date: DateKey,

    /// The title of the event.
    pub title: String,

    /// The start time of the event.
    pub start: TimeOfDay,

    /// The end time of the event, if it spans an interval.
    pub end: Option<TimeOfDay>,
}

// Point events are persisted with an empty end string.
fn serialize_end<S: Serializer>(end: &Option<TimeOfDay>, serializer: S) -> Result<S::Ok, S::Error> {
    match end {
        Some(t) => serializer.collect_str(t),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_end<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
