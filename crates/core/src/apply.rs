// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ChangeRecord, PerformanceIdAllocator, ScheduleSnapshot, TransitionResult};
use chrono::{DateTime, Utc};
use lineup_domain::{
    Performance, PerformanceId, Performer, PerformerName, SaveGate, ShowCatalog, Team, TeamName,
    evaluate_save_gate, validate_lineup, validate_performer_name, validate_team_name,
};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Applies a command to the current snapshot, producing a new snapshot and change record.
///
/// The input snapshot is never modified. The new snapshot keeps the input
/// version; only a refresh from the store advances it.
///
/// # Arguments
///
/// * `snapshot` - The current schedule snapshot (immutable)
/// * `catalog` - The show catalog used to resolve slots and team targets
/// * `command` - The command to apply
/// * `ids` - The allocator for new performance ids
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new snapshot and change record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A referenced team, performer or performance does not exist
/// - A name fails validation or is already registered
/// - A booking is redundant or overbooks a show and is not forced
#[allow(clippy::too_many_lines)]
pub fn apply(
    snapshot: &ScheduleSnapshot,
    catalog: &ShowCatalog,
    command: Command,
    ids: &mut PerformanceIdAllocator,
) -> Result<TransitionResult, CoreError> {
    let action: &'static str = command.action_name();

    match command {
        Command::ScheduleTeam {
            team,
            times,
            performers,
            force,
        } => {
            if times.is_empty() {
                return Err(CoreError::EmptySchedule);
            }
            require_team(snapshot, &team)?;
            // An empty lineup defaults to the team's registered members
            let performers: Vec<PerformerName> = if performers.is_empty() {
                snapshot
                    .team(&team)
                    .map(|t| t.members.clone())
                    .unwrap_or_default()
            } else {
                performers
            };
            validate_lineup(&performers)?;
            require_performers(snapshot, &performers)?;

            let candidate_times: BTreeSet<DateTime<Utc>> = times.into_iter().collect();
            let gate: SaveGate = evaluate_save_gate(
                catalog,
                &team,
                &candidate_times,
                &snapshot.performances,
                force,
            );
            enforce_gate(gate, &team)?;

            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            let mut affected: Vec<PerformanceId> = Vec::with_capacity(candidate_times.len());
            for show_time in &candidate_times {
                let id: PerformanceId = ids.allocate();
                new_snapshot.performances.push(Performance::new(
                    id.clone(),
                    team.clone(),
                    *show_time,
                    performers.clone(),
                ));
                affected.push(id);
            }

            let details: String = format!(
                "Scheduled team '{team}' into {} show time(s)",
                candidate_times.len()
            );
            Ok(transition(snapshot, new_snapshot, action, details, affected))
        }
        Command::Reschedule {
            performance_id,
            show_time,
            force,
        } => {
            let index: usize = require_performance(snapshot, &performance_id)?;
            let current: &Performance = &snapshot.performances[index];

            // The performance being moved never conflicts with itself
            let others: Vec<Performance> = without(snapshot, index);
            let candidate_times: BTreeSet<DateTime<Utc>> = BTreeSet::from([show_time]);
            let gate: SaveGate = evaluate_save_gate(
                catalog,
                &current.team_name,
                &candidate_times,
                &others,
                force,
            );
            enforce_gate(gate, &current.team_name)?;

            let details: String = format!(
                "Moved performance '{performance_id}' from {} to {}",
                current.show_time.to_rfc3339(),
                show_time.to_rfc3339()
            );
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot.performances[index].show_time = show_time;

            Ok(transition(
                snapshot,
                new_snapshot,
                action,
                details,
                vec![performance_id],
            ))
        }
        Command::ReassignTeam {
            performance_id,
            team,
            force,
        } => {
            let index: usize = require_performance(snapshot, &performance_id)?;
            require_team(snapshot, &team)?;
            let current: &Performance = &snapshot.performances[index];

            let others: Vec<Performance> = without(snapshot, index);
            let candidate_times: BTreeSet<DateTime<Utc>> = BTreeSet::from([current.show_time]);
            let gate: SaveGate =
                evaluate_save_gate(catalog, &team, &candidate_times, &others, force);
            enforce_gate(gate, &team)?;

            let details: String = format!(
                "Reassigned performance '{performance_id}' from team '{}' to team '{team}'",
                current.team_name
            );
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot.performances[index].team_name = team;

            Ok(transition(
                snapshot,
                new_snapshot,
                action,
                details,
                vec![performance_id],
            ))
        }
        Command::AddPerformer {
            performance_id,
            performer,
        } => {
            let index: usize = require_performance(snapshot, &performance_id)?;
            require_performers(snapshot, std::slice::from_ref(&performer))?;
            if snapshot.performances[index].has_performer(&performer) {
                return Err(CoreError::PerformerAlreadyBooked {
                    performance_id: performance_id.value().to_string(),
                    performer: performer.value().to_string(),
                });
            }

            let details: String =
                format!("Added performer '{performer}' to performance '{performance_id}'");
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot.performances[index].performers.push(performer);

            Ok(transition(
                snapshot,
                new_snapshot,
                action,
                details,
                vec![performance_id],
            ))
        }
        Command::RemovePerformer {
            performance_id,
            performer,
        } => {
            let index: usize = require_performance(snapshot, &performance_id)?;
            if !snapshot.performances[index].has_performer(&performer) {
                return Err(CoreError::PerformerNotBooked {
                    performance_id: performance_id.value().to_string(),
                    performer: performer.value().to_string(),
                });
            }

            let details: String =
                format!("Removed performer '{performer}' from performance '{performance_id}'");
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot.performances[index]
                .performers
                .retain(|p| p != &performer);

            Ok(transition(
                snapshot,
                new_snapshot,
                action,
                details,
                vec![performance_id],
            ))
        }
        Command::RemovePerformance { performance_id } => {
            let index: usize = require_performance(snapshot, &performance_id)?;

            let details: String = format!("Removed performance '{performance_id}'");
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot.performances.remove(index);

            Ok(transition(
                snapshot,
                new_snapshot,
                action,
                details,
                vec![performance_id],
            ))
        }
        Command::RegisterTeam { team, members } => {
            validate_team_name(&team)?;
            if snapshot.team(&team).is_some() {
                return Err(CoreError::DuplicateTeam(team.value().to_string()));
            }
            validate_lineup(&members)?;
            require_performers(snapshot, &members)?;

            let details: String = format!(
                "Registered team '{team}' with {} member(s)",
                members.len()
            );
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot
                .teams
                .insert(team.clone(), Team::new(team, members));

            Ok(transition(snapshot, new_snapshot, action, details, Vec::new()))
        }
        Command::RegisterPerformer { name } => {
            validate_performer_name(&name)?;
            if snapshot.performer(&name).is_some() {
                return Err(CoreError::DuplicatePerformer(name.value().to_string()));
            }

            let details: String = format!("Registered performer '{name}'");
            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot
                .performers
                .insert(name.clone(), Performer::new(name));

            Ok(transition(snapshot, new_snapshot, action, details, Vec::new()))
        }
        Command::DeleteTeam { team } => {
            require_team(snapshot, &team)?;

            let affected: Vec<PerformanceId> = snapshot
                .performances_of(&team)
                .into_iter()
                .map(|p| p.id.clone())
                .collect();

            let mut new_snapshot: ScheduleSnapshot = snapshot.clone();
            new_snapshot.teams.remove(&team);
            new_snapshot.performances.retain(|p| p.team_name != team);

            let details: String = format!(
                "Deleted team '{team}' and {} performance(s)",
                affected.len()
            );
            Ok(transition(snapshot, new_snapshot, action, details, affected))
        }
    }
}

fn require_team(snapshot: &ScheduleSnapshot, team: &TeamName) -> Result<(), CoreError> {
    if snapshot.team(team).is_none() {
        return Err(CoreError::TeamNotFound(team.value().to_string()));
    }
    Ok(())
}

fn require_performers(
    snapshot: &ScheduleSnapshot,
    performers: &[PerformerName],
) -> Result<(), CoreError> {
    match performers
        .iter()
        .find(|name| snapshot.performer(name).is_none())
    {
        Some(missing) => Err(CoreError::PerformerNotFound(missing.value().to_string())),
        None => Ok(()),
    }
}

fn require_performance(
    snapshot: &ScheduleSnapshot,
    performance_id: &PerformanceId,
) -> Result<usize, CoreError> {
    snapshot
        .performances
        .iter()
        .position(|p| &p.id == performance_id)
        .ok_or_else(|| CoreError::PerformanceNotFound(performance_id.value().to_string()))
}

fn without(snapshot: &ScheduleSnapshot, index: usize) -> Vec<Performance> {
    snapshot
        .performances
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, p)| p.clone())
        .collect()
}

/// Turns a save gate into a transition error, or lets the save through.
fn enforce_gate(gate: SaveGate, team: &TeamName) -> Result<(), CoreError> {
    match gate {
        SaveGate::Clear => Ok(()),
        SaveGate::Overridden {
            redundant,
            overbookings,
        } => {
            warn!(
                team = %team,
                redundant = redundant.len(),
                overbookings = overbookings.len(),
                "Booking checks overridden"
            );
            Ok(())
        }
        SaveGate::Blocked {
            redundant,
            overbookings,
        } => {
            if !redundant.is_empty() {
                return Err(CoreError::RedundantBooking {
                    team: team.value().to_string(),
                    conflicting: redundant.iter().map(|id| id.value().to_string()).collect(),
                });
            }
            match overbookings.into_iter().next() {
                Some(warning) => Err(CoreError::WouldOverbook {
                    show_type: warning.show_type.value().to_string(),
                    time: warning.time,
                    booked: warning.booked,
                    required: warning.required,
                }),
                None => Ok(()),
            }
        }
    }
}

fn transition(
    before: &ScheduleSnapshot,
    new_snapshot: ScheduleSnapshot,
    action: &str,
    details: String,
    affected: Vec<PerformanceId>,
) -> TransitionResult {
    debug!(action, details = %details, "Applied command");
    let change: ChangeRecord = ChangeRecord {
        action: action.to_string(),
        details,
        affected,
        before: before.summary(),
        after: new_snapshot.summary(),
    };
    TransitionResult {
        new_snapshot,
        change,
    }
}
