// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The schedule store seam.
//!
//! The store is the system of record for performances, teams and
//! performers. The session only ever reads it as a whole collection and
//! writes it back as a whole collection.

use lineup_domain::{Performance, Performer, Team};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The complete contents of a schedule store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreContents {
    /// Every performance, in store order.
    pub performances: Vec<Performance>,
    /// Every registered team.
    pub teams: Vec<Team>,
    /// Every registered performer.
    pub performers: Vec<Performer>,
}

/// Store collaborator errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be read.
    #[error("Schedule store unavailable: {0}")]
    Unavailable(String),

    /// The store refused a write.
    #[error("Schedule store rejected the write: {0}")]
    Rejected(String),
}

/// A backing store for the schedule.
pub trait ScheduleStore {
    /// Loads the complete collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn load(&self) -> Result<StoreContents, StoreError>;

    /// Replaces the complete collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn replace(&mut self, contents: StoreContents) -> Result<(), StoreError>;
}

/// A store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contents: StoreContents,
    writes: u64,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing contents.
    #[must_use]
    pub const fn with_contents(contents: StoreContents) -> Self {
        Self {
            contents,
            writes: 0,
        }
    }

    /// Number of successful writes since creation.
    #[must_use]
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl ScheduleStore for InMemoryStore {
    fn load(&self) -> Result<StoreContents, StoreError> {
        Ok(self.contents.clone())
    }

    fn replace(&mut self, contents: StoreContents) -> Result<(), StoreError> {
        self.contents = contents;
        self.writes += 1;
        Ok(())
    }
}
