use std::{fmt, num::ParseIntError, str::FromStr};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a professor or student.
///
/// Serialized as a bare JSON integer. Any signed 64-bit value is accepted so
/// that documents written by other tools load unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Id(i64);

impl Id {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Id {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Hands out identifiers that are unique within a document.
///
/// Identifiers follow the wall clock in milliseconds, but never repeat and
/// never go backwards: each call returns `max(now_millis, last + 1)`.
/// Seeding from a document's largest id keeps new ids clear of existing ones.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<Id>,
}

impl IdGenerator {
    /// Creates a generator that will only return ids greater than `last`.
    #[must_use]
    pub const fn after(last: Option<Id>) -> Self {
        Self { last }
    }

    /// Returns the next identifier using the current time.
    ///
    /// # Errors
    ///
    /// Returns [`IdsExhausted`] once the largest representable id has been
    /// handed out.
    pub fn next_id(&mut self) -> Result<Id, IdsExhausted> {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Returns the next identifier given a clock reading in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`IdsExhausted`] once the largest representable id has been
    /// handed out.
    pub fn next_id_at(&mut self, millis: i64) -> Result<Id, IdsExhausted> {
        let id = match self.last {
            Some(last) => Id(millis.max(last.get().checked_add(1).ok_or(IdsExhausted)?)),
            None => Id(millis),
        };
        self.last = Some(id);
        Ok(id)
    }
}

/// Every id above the document's largest one has been used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no identifiers left above {}", i64::MAX)]
pub struct IdsExhausted;
