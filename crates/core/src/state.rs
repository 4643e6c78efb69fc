// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreContents;
use lineup_domain::{Performance, PerformanceId, Performer, PerformerName, Team, TeamName};
use std::collections::BTreeMap;

const PERFORMANCE_ID_PREFIX: &str = "perf-";

/// A complete, versioned view of the schedule.
///
/// Snapshots are rebuilt wholesale from the store. Teams and performers
/// are indexed by name so that performances, which refer to both by
/// name, can be resolved without scanning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSnapshot {
    /// Bumped by one on every refresh.
    pub version: u64,
    /// Every performance, in store order.
    pub performances: Vec<Performance>,
    /// Registered teams by name.
    pub teams: BTreeMap<TeamName, Team>,
    /// Registered performers by name.
    pub performers: BTreeMap<PerformerName, Performer>,
}

impl ScheduleSnapshot {
    /// Creates an empty snapshot at version 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from store contents.
    ///
    /// # Arguments
    ///
    /// * `version` - The version to stamp on the snapshot
    /// * `contents` - The complete store contents
    #[must_use]
    pub fn from_contents(version: u64, contents: StoreContents) -> Self {
        let teams: BTreeMap<TeamName, Team> = contents
            .teams
            .into_iter()
            .map(|team| (team.name.clone(), team))
            .collect();
        let performers: BTreeMap<PerformerName, Performer> = contents
            .performers
            .into_iter()
            .map(|performer| (performer.name.clone(), performer))
            .collect();

        Self {
            version,
            performances: contents.performances,
            teams,
            performers,
        }
    }

    /// Converts the snapshot back into store contents.
    #[must_use]
    pub fn to_contents(&self) -> StoreContents {
        StoreContents {
            performances: self.performances.clone(),
            teams: self.teams.values().cloned().collect(),
            performers: self.performers.values().cloned().collect(),
        }
    }

    /// Looks up a team by name.
    #[must_use]
    pub fn team(&self, name: &TeamName) -> Option<&Team> {
        self.teams.get(name)
    }

    /// Looks up a performer by name.
    #[must_use]
    pub fn performer(&self, name: &PerformerName) -> Option<&Performer> {
        self.performers.get(name)
    }

    /// Looks up a performance by id.
    #[must_use]
    pub fn performance(&self, id: &PerformanceId) -> Option<&Performance> {
        self.performances.iter().find(|p| &p.id == id)
    }

    /// Every performance held by a team.
    #[must_use]
    pub fn performances_of(&self, team: &TeamName) -> Vec<&Performance> {
        self.performances
            .iter()
            .filter(|p| &p.team_name == team)
            .collect()
    }

    /// A short summary used in change records and logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "version={},performances={},teams={},performers={}",
            self.version,
            self.performances.len(),
            self.teams.len(),
            self.performers.len()
        )
    }
}

/// Hands out performance ids of the form `perf-<n>`.
///
/// Ids only ever increase. Observing a snapshot moves the counter past the
/// highest id it contains, so ids written by someone else are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceIdAllocator {
    next: u64,
}

impl PerformanceIdAllocator {
    /// Creates an allocator starting at `perf-1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Moves the counter past every `perf-<n>` id in `performances`.
    pub fn observe(&mut self, performances: &[Performance]) {
        let highest: Option<u64> = performances
            .iter()
            .filter_map(|p| p.id.value().strip_prefix(PERFORMANCE_ID_PREFIX))
            .filter_map(|n| n.parse::<u64>().ok())
            .max();
        if let Some(highest) = highest {
            self.next = self.next.max(highest.saturating_add(1));
        }
    }

    /// Returns the next unused id.
    pub fn allocate(&mut self) -> PerformanceId {
        let id: PerformanceId = PerformanceId::new(&format!("{PERFORMANCE_ID_PREFIX}{}", self.next));
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for PerformanceIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// What a transition changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// The command's action name.
    pub action: String,
    /// Human-readable description.
    pub details: String,
    /// Performances created, changed or removed.
    pub affected: Vec<PerformanceId>,
    /// Snapshot summary before the change.
    pub before: String,
    /// Snapshot summary after the change.
    pub after: String,
}

/// The result of a successful schedule transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new snapshot after the transition.
    pub new_snapshot: ScheduleSnapshot,
    /// The record of what changed.
    pub change: ChangeRecord,
}
