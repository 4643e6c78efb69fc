// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;
use chrono::{DateTime, Utc};
use lineup_domain::DomainError;

/// Errors that can occur during schedule transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The team is not registered.
    TeamNotFound(String),
    /// A team with this name is already registered.
    DuplicateTeam(String),
    /// The performer is not registered.
    PerformerNotFound(String),
    /// A performer with this name is already registered.
    DuplicatePerformer(String),
    /// No performance has this id.
    PerformanceNotFound(String),
    /// The performer is already in the performance lineup.
    PerformerAlreadyBooked {
        /// The performance.
        performance_id: String,
        /// The performer.
        performer: String,
    },
    /// The performer is not in the performance lineup.
    PerformerNotBooked {
        /// The performance.
        performance_id: String,
        /// The performer.
        performer: String,
    },
    /// A booking named no show times.
    EmptySchedule,
    /// The team already holds one or more of the requested slots.
    RedundantBooking {
        /// The team.
        team: String,
        /// The existing performances that conflict.
        conflicting: Vec<String>,
    },
    /// The booking would push a show past its required team count.
    WouldOverbook {
        /// The show type.
        show_type: String,
        /// The slot instant.
        time: DateTime<Utc>,
        /// Teams booked after the change.
        booked: usize,
        /// Teams the show type requires.
        required: u32,
    },
    /// The store collaborator failed.
    Store(StoreError),
    /// The change was written, but reloading the store afterwards failed.
    /// The cached snapshot is stale until the next successful refresh.
    ReloadAfterWrite(StoreError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::TeamNotFound(team) => write!(f, "Team '{team}' not found"),
            Self::DuplicateTeam(team) => write!(f, "Team '{team}' already exists"),
            Self::PerformerNotFound(name) => write!(f, "Performer '{name}' not found"),
            Self::DuplicatePerformer(name) => write!(f, "Performer '{name}' already exists"),
            Self::PerformanceNotFound(id) => write!(f, "Performance '{id}' not found"),
            Self::PerformerAlreadyBooked {
                performance_id,
                performer,
            } => write!(
                f,
                "Performer '{performer}' is already in performance '{performance_id}'"
            ),
            Self::PerformerNotBooked {
                performance_id,
                performer,
            } => write!(
                f,
                "Performer '{performer}' is not in performance '{performance_id}'"
            ),
            Self::EmptySchedule => write!(f, "At least one show time is required"),
            Self::RedundantBooking { team, conflicting } => write!(
                f,
                "Team '{team}' is already booked in: {}",
                conflicting.join(", ")
            ),
            Self::WouldOverbook {
                show_type,
                time,
                booked,
                required,
            } => write!(
                f,
                "Booking would overbook '{show_type}' at {}: {booked} teams for {required} spots",
                time.to_rfc3339()
            ),
            Self::Store(err) => write!(f, "Store error: {err}"),
            Self::ReloadAfterWrite(err) => {
                write!(f, "Change was saved but the schedule could not be reloaded: {err}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
