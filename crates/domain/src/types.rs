// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a team name.
///
/// Teams are referenced by name everywhere a performance points at them.
/// Names are trimmed but otherwise compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName {
    value: String,
}

impl TeamName {
    /// Creates a new `TeamName`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the team name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Represents a performer name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformerName {
    value: String,
}

impl PerformerName {
    /// Creates a new `PerformerName`, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the performer name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PerformerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Stable symbolic identifier of a show type (e.g. `cageMatch`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowTypeId {
    value: String,
}

impl ShowTypeId {
    /// Creates a new `ShowTypeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ShowTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Unique identifier of a persisted performance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceId {
    value: String,
}

impl PerformanceId {
    /// Creates a new `PerformanceId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PerformanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// One scheduled occurrence of one team performing at one instant.
///
/// Team and performers are weak references by name. The classifier only
/// ever reads these denormalized records and never joins them back to
/// `Team` or `Performer` entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Unique identifier.
    pub id: PerformanceId,
    /// The team performing.
    pub team_name: TeamName,
    /// The absolute instant of the show.
    pub show_time: DateTime<Utc>,
    /// Performers booked for this occurrence, in order.
    pub performers: Vec<PerformerName>,
}

impl Performance {
    /// Creates a new `Performance`.
    #[must_use]
    pub const fn new(
        id: PerformanceId,
        team_name: TeamName,
        show_time: DateTime<Utc>,
        performers: Vec<PerformerName>,
    ) -> Self {
        Self {
            id,
            team_name,
            show_time,
            performers,
        }
    }

    /// Returns whether the named performer is booked on this occurrence.
    #[must_use]
    pub fn has_performer(&self, performer: &PerformerName) -> bool {
        self.performers.contains(performer)
    }
}

/// A team of performers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The team's unique name.
    pub name: TeamName,
    /// Regular members, used as the default lineup when scheduling.
    pub members: Vec<PerformerName>,
}

impl Team {
    /// Creates a new `Team`.
    #[must_use]
    pub const fn new(name: TeamName, members: Vec<PerformerName>) -> Self {
        Self { name, members }
    }
}

/// A single performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    /// The performer's unique name.
    pub name: PerformerName,
}

impl Performer {
    /// Creates a new `Performer`.
    #[must_use]
    pub const fn new(name: PerformerName) -> Self {
        Self { name }
    }
}
