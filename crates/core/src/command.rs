// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use lineup_domain::{PerformanceId, PerformerName, TeamName};

/// A command represents user intent as data only.
///
/// Commands are the only way to request schedule changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Book a team into one or more show times.
    ScheduleTeam {
        /// The team to book.
        team: TeamName,
        /// The show times, one performance each.
        times: Vec<DateTime<Utc>>,
        /// The performers appearing in every new performance. Empty means
        /// the team's registered members.
        performers: Vec<PerformerName>,
        /// Save even if the booking is redundant or overbooks a show.
        force: bool,
    },
    /// Move a performance to a different show time.
    Reschedule {
        /// The performance to move.
        performance_id: PerformanceId,
        /// The new show time.
        show_time: DateTime<Utc>,
        /// Save even if the move is redundant or overbooks a show.
        force: bool,
    },
    /// Give a performance to a different team.
    ReassignTeam {
        /// The performance to reassign.
        performance_id: PerformanceId,
        /// The new team.
        team: TeamName,
        /// Save even if the team already holds that slot or it overbooks.
        force: bool,
    },
    /// Add a performer to a performance lineup.
    AddPerformer {
        /// The performance.
        performance_id: PerformanceId,
        /// The performer to add.
        performer: PerformerName,
    },
    /// Remove a performer from a performance lineup.
    RemovePerformer {
        /// The performance.
        performance_id: PerformanceId,
        /// The performer to remove.
        performer: PerformerName,
    },
    /// Delete a performance.
    RemovePerformance {
        /// The performance to delete.
        performance_id: PerformanceId,
    },
    /// Register a new team.
    RegisterTeam {
        /// The team name.
        team: TeamName,
        /// The team's members, all registered performers.
        members: Vec<PerformerName>,
    },
    /// Register a new performer.
    RegisterPerformer {
        /// The performer name.
        name: PerformerName,
    },
    /// Delete a team and every performance it holds.
    DeleteTeam {
        /// The team to delete.
        team: TeamName,
    },
}

impl Command {
    /// Stable action name used in change records and logs.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::ScheduleTeam { .. } => "ScheduleTeam",
            Self::Reschedule { .. } => "Reschedule",
            Self::ReassignTeam { .. } => "ReassignTeam",
            Self::AddPerformer { .. } => "AddPerformer",
            Self::RemovePerformer { .. } => "RemovePerformer",
            Self::RemovePerformance { .. } => "RemovePerformance",
            Self::RegisterTeam { .. } => "RegisterTeam",
            Self::RegisterPerformer { .. } => "RegisterPerformer",
            Self::DeleteTeam { .. } => "DeleteTeam",
        }
    }
}
