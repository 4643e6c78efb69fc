// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Write handlers authorize, translate the request into a core command,
//! commit it through the session and translate any error. Read handlers
//! work from the session's current snapshot.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use lineup::{ChangeRecord, Command, ScheduleSession, ScheduleSnapshot, ScheduleStore, TransitionResult};
use lineup_domain::{
    Classification, DomainError, OverbookingWarning, Performance, PerformanceId, PerformerName,
    ShowCatalog, ShowType, ShowTypeId, SlotMap, TeamName, normalize_to_slot,
    projected_overbookings,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::input::{parse_date, parse_show_time};
use crate::request_response::{
    AddPerformerRequest, CapacityResponse, CatalogResponse, ConflictCheckRequest,
    ConflictCheckResponse, DeleteTeamResponse, ListPerformancesResponse, OverbookingInfo,
    PerformanceChangeResponse, PerformanceInfo, ReassignTeamRequest, RegisterPerformerRequest,
    RegisterPerformerResponse, RegisterTeamRequest, RegisterTeamResponse, RescheduleRequest,
    ScheduleTeamRequest, ScheduleTeamResponse, ShowTypeInfo, SlotRequest, SuggestionResponse,
};

/// The result of a write operation: the response plus what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The change record produced by this operation.
    pub change: ChangeRecord,
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn performance_info(catalog: &ShowCatalog, performance: &Performance) -> PerformanceInfo {
    let show_type: &ShowType = catalog
        .resolve(performance.show_time)
        .unwrap_or_else(|| catalog.catch_all());
    PerformanceInfo {
        id: performance.id.value().to_string(),
        team: performance.team_name.value().to_string(),
        show_time: format_time(performance.show_time),
        show_type: show_type.id().value().to_string(),
        performers: performance
            .performers
            .iter()
            .map(|p| p.value().to_string())
            .collect(),
    }
}

fn overbooking_info(warning: &OverbookingWarning) -> OverbookingInfo {
    OverbookingInfo {
        show_type: warning.show_type.value().to_string(),
        show_time: format_time(warning.time),
        booked: warning.booked,
        required: warning.required,
    }
}

fn slot_map_to_wire(map: &SlotMap) -> BTreeMap<String, Vec<String>> {
    map.iter()
        .map(|(show_type, times)| {
            (
                show_type.value().to_string(),
                times.iter().copied().map(format_time).collect(),
            )
        })
        .collect()
}

fn parse_show_times(field: &str, values: &[String]) -> Result<Vec<DateTime<Utc>>, ApiError> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| parse_show_time(&format!("{field}[{i}]"), value).map_err(ApiError::from))
        .collect()
}

/// Places a show type and calendar date on the show type's canonical time.
fn resolve_slot(catalog: &ShowCatalog, slot: &SlotRequest) -> Result<DateTime<Utc>, ApiError> {
    let show_type: &ShowType = catalog
        .get(&ShowTypeId::new(&slot.show_type))
        .ok_or_else(|| {
            translate_domain_error(DomainError::ShowTypeNotFound(slot.show_type.clone()))
        })?;
    let date: NaiveDate = parse_date("slots.date", &slot.date)?;
    normalize_to_slot(catalog, show_type, date).map_err(translate_domain_error)
}

fn commit<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    command: Command,
    actor: &AuthenticatedActor,
) -> Result<TransitionResult, ApiError> {
    let result: TransitionResult = session
        .commit(store, command)
        .map_err(translate_core_error)?;
    info!(
        actor = %actor.id,
        action = %result.change.action,
        details = %result.change.details,
        "Schedule change committed"
    );
    Ok(result)
}

/// Books a team into one or more show times.
///
/// Show times come from exact timestamps, from show type and date pairs,
/// or both. Duplicates collapse to one performance.
///
/// # Arguments
///
/// * `session` - The schedule session
/// * `store` - The backing store
/// * `request` - The booking request
/// * `actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Owner
/// - A time, date or show type in the request is invalid
/// - The team or a performer is not registered
/// - The booking is redundant or overbooks a show and is not forced
pub fn schedule_team<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    request: ScheduleTeamRequest,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<ScheduleTeamResponse>, ApiError> {
    AuthorizationService::authorize_schedule(actor, "schedule_team")?;

    let mut times: Vec<DateTime<Utc>> = parse_show_times("show_times", &request.show_times)?;
    for slot in &request.slots {
        times.push(resolve_slot(session.catalog(), slot)?);
    }

    let team: TeamName = TeamName::new(&request.team);
    let command: Command = Command::ScheduleTeam {
        team: team.clone(),
        times,
        performers: request
            .performers
            .iter()
            .map(|p| PerformerName::new(p))
            .collect(),
        force: request.force,
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    let performance_ids: Vec<String> = result
        .change
        .affected
        .iter()
        .map(|id| id.value().to_string())
        .collect();
    Ok(ApiResult {
        response: ScheduleTeamResponse {
            message: format!(
                "Scheduled team '{team}' into {} show time(s)",
                performance_ids.len()
            ),
            performance_ids,
        },
        change: result.change,
    })
}

/// Moves a performance to a new show time.
///
/// # Errors
///
/// Returns an error if the actor is not an Owner, the time is invalid, the
/// performance does not exist, or the move is blocked and not forced.
pub fn reschedule<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    performance_id: &str,
    request: RescheduleRequest,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<PerformanceChangeResponse>, ApiError> {
    AuthorizationService::authorize_schedule(actor, "reschedule")?;
    let show_time: DateTime<Utc> = parse_show_time("show_time", &request.show_time)?;

    let command: Command = Command::Reschedule {
        performance_id: PerformanceId::new(performance_id),
        show_time,
        force: request.force,
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: PerformanceChangeResponse {
            performance_id: performance_id.to_string(),
            message: format!(
                "Moved performance '{performance_id}' to {}",
                format_time(show_time)
            ),
        },
        change: result.change,
    })
}

/// Gives a performance to a different team.
///
/// # Errors
///
/// Returns an error if the actor is not an Owner, the performance or team
/// does not exist, or the reassignment is blocked and not forced.
pub fn reassign_team<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    performance_id: &str,
    request: ReassignTeamRequest,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<PerformanceChangeResponse>, ApiError> {
    AuthorizationService::authorize_schedule(actor, "reassign_team")?;

    let team: TeamName = TeamName::new(&request.team);
    let command: Command = Command::ReassignTeam {
        performance_id: PerformanceId::new(performance_id),
        team: team.clone(),
        force: request.force,
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: PerformanceChangeResponse {
            performance_id: performance_id.to_string(),
            message: format!("Reassigned performance '{performance_id}' to team '{team}'"),
        },
        change: result.change,
    })
}

/// Adds a performer to a performance lineup.
///
/// Performers may add only themselves.
///
/// # Errors
///
/// Returns an error if the actor may not change this performer, the
/// performance or performer does not exist, or the performer is already
/// in the lineup.
pub fn add_performer<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    performance_id: &str,
    request: AddPerformerRequest,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<PerformanceChangeResponse>, ApiError> {
    let performer: PerformerName = PerformerName::new(&request.performer);
    AuthorizationService::authorize_lineup_change(actor, &performer, "add_performer")?;

    let command: Command = Command::AddPerformer {
        performance_id: PerformanceId::new(performance_id),
        performer: performer.clone(),
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: PerformanceChangeResponse {
            performance_id: performance_id.to_string(),
            message: format!("Added '{performer}' to performance '{performance_id}'"),
        },
        change: result.change,
    })
}

/// Removes a performer from a performance lineup.
///
/// Performers may remove only themselves.
///
/// # Errors
///
/// Returns an error if the actor may not change this performer, the
/// performance does not exist, or the performer is not in the lineup.
pub fn remove_performer<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    performance_id: &str,
    performer: &str,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<PerformanceChangeResponse>, ApiError> {
    let performer: PerformerName = PerformerName::new(performer);
    AuthorizationService::authorize_lineup_change(actor, &performer, "remove_performer")?;

    let command: Command = Command::RemovePerformer {
        performance_id: PerformanceId::new(performance_id),
        performer: performer.clone(),
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: PerformanceChangeResponse {
            performance_id: performance_id.to_string(),
            message: format!("Removed '{performer}' from performance '{performance_id}'"),
        },
        change: result.change,
    })
}

/// Deletes a performance.
///
/// # Errors
///
/// Returns an error if the actor is not an Owner or the performance does
/// not exist.
pub fn remove_performance<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    performance_id: &str,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<PerformanceChangeResponse>, ApiError> {
    AuthorizationService::authorize_schedule(actor, "remove_performance")?;

    let command: Command = Command::RemovePerformance {
        performance_id: PerformanceId::new(performance_id),
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: PerformanceChangeResponse {
            performance_id: performance_id.to_string(),
            message: format!("Removed performance '{performance_id}'"),
        },
        change: result.change,
    })
}

/// Registers a team.
///
/// # Errors
///
/// Returns an error if the actor is not an Owner, the name is invalid or
/// taken, or a member is not a registered performer.
pub fn register_team<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    request: RegisterTeamRequest,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<RegisterTeamResponse>, ApiError> {
    AuthorizationService::authorize_manage_roster(actor, "register_team")?;

    let team: TeamName = TeamName::new(&request.team);
    let command: Command = Command::RegisterTeam {
        team: team.clone(),
        members: request
            .members
            .iter()
            .map(|m| PerformerName::new(m))
            .collect(),
    };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: RegisterTeamResponse {
            team: team.value().to_string(),
            message: format!("Registered team '{team}'"),
        },
        change: result.change,
    })
}

/// Registers a performer.
///
/// # Errors
///
/// Returns an error if the actor is not an Owner or the name is invalid
/// or taken.
pub fn register_performer<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    request: RegisterPerformerRequest,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<RegisterPerformerResponse>, ApiError> {
    AuthorizationService::authorize_manage_roster(actor, "register_performer")?;

    let name: PerformerName = PerformerName::new(&request.name);
    let command: Command = Command::RegisterPerformer { name: name.clone() };
    let result: TransitionResult = commit(session, store, command, actor)?;

    Ok(ApiResult {
        response: RegisterPerformerResponse {
            name: name.value().to_string(),
            message: format!("Registered performer '{name}'"),
        },
        change: result.change,
    })
}

/// Deletes a team and every performance it holds.
///
/// # Errors
///
/// Returns an error if the actor is not an Owner or the team does not exist.
pub fn delete_team<S: ScheduleStore + ?Sized>(
    session: &mut ScheduleSession,
    store: &mut S,
    team: &str,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<DeleteTeamResponse>, ApiError> {
    AuthorizationService::authorize_manage_roster(actor, "delete_team")?;

    let team: TeamName = TeamName::new(team);
    let command: Command = Command::DeleteTeam { team: team.clone() };
    let result: TransitionResult = commit(session, store, command, actor)?;

    let removed_performances: Vec<String> = result
        .change
        .affected
        .iter()
        .map(|id| id.value().to_string())
        .collect();
    Ok(ApiResult {
        response: DeleteTeamResponse {
            team: team.value().to_string(),
            message: format!(
                "Deleted team '{team}' and {} performance(s)",
                removed_performances.len()
            ),
            removed_performances,
        },
        change: result.change,
    })
}

/// Checks a booking for redundancy and overbooking without saving it.
///
/// This is a read-only operation available to every role.
///
/// # Errors
///
/// Returns an error if a show time cannot be parsed.
pub fn check_conflicts(
    session: &ScheduleSession,
    request: &ConflictCheckRequest,
    actor: &AuthenticatedActor,
) -> Result<ConflictCheckResponse, ApiError> {
    AuthorizationService::authorize_read(actor)?;

    let team: TeamName = TeamName::new(&request.team);
    let times: BTreeSet<DateTime<Utc>> = parse_show_times("show_times", &request.show_times)?
        .into_iter()
        .collect();
    let snapshot: Arc<ScheduleSnapshot> = session.snapshot();
    let catalog: &ShowCatalog = session.catalog();

    let redundant: Vec<PerformanceInfo> = session
        .check_redundant(&team, &times)
        .iter()
        .map(|p| performance_info(catalog, p))
        .collect();
    let overbookings: Vec<OverbookingInfo> =
        projected_overbookings(catalog, &team, &times, &snapshot.performances)
            .iter()
            .map(overbooking_info)
            .collect();

    Ok(ConflictCheckResponse {
        team: team.value().to_string(),
        can_save: redundant.is_empty() && overbookings.is_empty(),
        redundant,
        overbookings,
    })
}

/// Lists every performance in ascending show time order.
///
/// # Errors
///
/// Returns an error if the actor may not read the schedule.
pub fn list_performances(
    session: &ScheduleSession,
    actor: &AuthenticatedActor,
) -> Result<ListPerformancesResponse, ApiError> {
    AuthorizationService::authorize_read(actor)?;

    let snapshot: Arc<ScheduleSnapshot> = session.snapshot();
    let mut ordered: Vec<&Performance> = snapshot.performances.iter().collect();
    ordered.sort_by(|a, b| a.show_time.cmp(&b.show_time).then_with(|| a.id.cmp(&b.id)));

    Ok(ListPerformancesResponse {
        version: snapshot.version,
        performances: ordered
            .into_iter()
            .map(|p| performance_info(session.catalog(), p))
            .collect(),
    })
}

/// Describes the show catalog.
#[must_use]
pub fn get_catalog(session: &ScheduleSession) -> CatalogResponse {
    let catalog: &ShowCatalog = session.catalog();
    CatalogResponse {
        timezone: catalog.timezone().name().to_string(),
        catch_all: catalog.catch_all().id().value().to_string(),
        show_types: catalog
            .show_types()
            .iter()
            .map(|s| ShowTypeInfo {
                id: s.id().value().to_string(),
                display_name: s.display_name().to_string(),
                weekday: s.weekday().map(|w| w.to_string()),
                time: s.default_time().map(|t| t.to_string()),
                required_teams: s.required_teams(),
            })
            .collect(),
    }
}

/// Classifies the schedule into the four capacity buckets.
///
/// Upcoming recurring slots are enumerated from `now`, so empty slots
/// appear as unbooked.
///
/// # Errors
///
/// Returns an error if the actor may not read the schedule.
pub fn get_capacity(
    session: &ScheduleSession,
    actor: &AuthenticatedActor,
    now: DateTime<Utc>,
) -> Result<CapacityResponse, ApiError> {
    AuthorizationService::authorize_read(actor)?;

    let classification: Classification = session.classification(now);
    Ok(CapacityResponse {
        version: session.snapshot().version,
        generated_at: format_time(now),
        horizon: session.horizon().occurrences(),
        unbooked: slot_map_to_wire(&classification.unbooked),
        underbooked: slot_map_to_wire(&classification.underbooked),
        fully_booked: slot_map_to_wire(&classification.fully_booked),
        overbooked: slot_map_to_wire(&classification.overbooked),
    })
}

/// Suggests the next slot of a show type that still needs teams.
///
/// # Errors
///
/// Returns an error if the show type is unknown or ad-hoc.
pub fn suggest_slot(
    session: &ScheduleSession,
    show_type: &str,
    actor: &AuthenticatedActor,
    now: DateTime<Utc>,
) -> Result<SuggestionResponse, ApiError> {
    AuthorizationService::authorize_read(actor)?;

    let id: ShowTypeId = ShowTypeId::new(show_type);
    let suggested: Option<DateTime<Utc>> = session
        .suggest_next_slot(&id, now)
        .map_err(translate_core_error)?;

    Ok(SuggestionResponse {
        show_type: id.value().to_string(),
        suggested_time: suggested.map(format_time),
    })
}
