// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    CAGE_MATCH_NEXT_SUNDAY, CAGE_MATCH_SUNDAY, HAROLD_TUESDAY, create_test_owner,
    create_test_session, create_test_store,
};
use crate::{
    AddPerformerRequest, ApiError, ApiResult, DeleteTeamResponse, ReassignTeamRequest,
    RegisterPerformerRequest, RegisterTeamRequest, RescheduleRequest, ScheduleTeamRequest,
    ScheduleTeamResponse, SlotRequest, add_performer, delete_team, reassign_team,
    register_performer, register_team, remove_performance, reschedule, schedule_team,
};
use chrono::SecondsFormat;
use lineup::{InMemoryStore, ScheduleSession, ScheduleStore};
use lineup_domain::PerformanceId;

fn booking(team: &str, show_times: &[&str], force: bool) -> ScheduleTeamRequest {
    ScheduleTeamRequest {
        team: team.to_string(),
        show_times: show_times.iter().map(|t| (*t).to_string()).collect(),
        slots: Vec::new(),
        performers: Vec::new(),
        force,
    }
}

#[test]
fn test_schedule_team_by_exact_time() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result: ApiResult<ScheduleTeamResponse> = schedule_team(
        &mut session,
        &mut store,
        booking("Charlie", &[CAGE_MATCH_NEXT_SUNDAY], false),
        &create_test_owner(),
    )
    .unwrap();

    assert_eq!(result.response.performance_ids, vec!["perf-4"]);
    assert_eq!(result.change.action, "ScheduleTeam");
    assert_eq!(store.load().unwrap().performances.len(), 4);
    assert_eq!(session.snapshot().version, 2);
}

#[test]
fn test_schedule_team_by_show_type_and_date() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);
    let mut request: ScheduleTeamRequest = booking("Charlie", &[], false);
    request.slots = vec![SlotRequest {
        show_type: String::from("cageMatch"),
        date: String::from("2026-11-01"),
    }];

    schedule_team(&mut session, &mut store, request, &create_test_owner()).unwrap();

    let created = session
        .snapshot()
        .performance(&PerformanceId::new("perf-4"))
        .cloned()
        .unwrap();
    assert_eq!(created.show_time.to_rfc3339(), "2026-11-02T03:00:00+00:00");
}

#[test]
fn test_schedule_team_rejects_date_on_wrong_weekday() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);
    let mut request: ScheduleTeamRequest = booking("Charlie", &[], false);
    request.slots = vec![SlotRequest {
        show_type: String::from("cageMatch"),
        date: String::from("2026-11-02"),
    }];

    let result = schedule_team(&mut session, &mut store, request, &create_test_owner());

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "show_weekday"
    ));
}

#[test]
fn test_schedule_team_rejects_unknown_show_type_and_bad_date() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);
    let mut unknown: ScheduleTeamRequest = booking("Charlie", &[], false);
    unknown.slots = vec![SlotRequest {
        show_type: String::from("improvJam"),
        date: String::from("2026-11-01"),
    }];
    let mut bad_date: ScheduleTeamRequest = booking("Charlie", &[], false);
    bad_date.slots = vec![SlotRequest {
        show_type: String::from("cageMatch"),
        date: String::from("November 1st"),
    }];

    let unknown = schedule_team(&mut session, &mut store, unknown, &create_test_owner());
    let bad_date = schedule_team(&mut session, &mut store, bad_date, &create_test_owner());

    assert!(matches!(unknown, Err(ApiError::ResourceNotFound { .. })));
    assert!(matches!(
        bad_date,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "slots.date"
    ));
}

#[test]
fn test_schedule_team_rejects_malformed_time() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = schedule_team(
        &mut session,
        &mut store,
        booking("Charlie", &[CAGE_MATCH_NEXT_SUNDAY, "next sunday"], false),
        &create_test_owner(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "show_times[1]"
    ));
}

#[test]
fn test_schedule_team_without_times_is_invalid() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = schedule_team(
        &mut session,
        &mut store,
        booking("Charlie", &[], false),
        &create_test_owner(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "show_times"
    ));
}

#[test]
fn test_redundant_booking_is_a_conflict() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = schedule_team(
        &mut session,
        &mut store,
        booking("Alpha", &[CAGE_MATCH_SUNDAY], false),
        &create_test_owner(),
    );

    match result {
        Err(ApiError::BookingConflict { conflicting, .. }) => {
            assert_eq!(conflicting, vec![String::from("perf-1")]);
        }
        other => panic!("expected booking conflict, got {other:?}"),
    }
    assert_eq!(store.writes(), 0);
}

#[test]
fn test_overbooking_is_a_conflict_unless_forced() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let blocked = schedule_team(
        &mut session,
        &mut store,
        booking("Charlie", &[CAGE_MATCH_SUNDAY], false),
        &create_test_owner(),
    );
    let forced = schedule_team(
        &mut session,
        &mut store,
        booking("Charlie", &[CAGE_MATCH_SUNDAY], true),
        &create_test_owner(),
    );

    assert!(matches!(blocked, Err(ApiError::BookingConflict { .. })));
    assert!(forced.is_ok());
}

#[test]
fn test_unknown_team_is_not_found() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = schedule_team(
        &mut session,
        &mut store,
        booking("Delta", &[CAGE_MATCH_NEXT_SUNDAY], false),
        &create_test_owner(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Team"
    ));
}

#[test]
fn test_reschedule_and_reassign() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);
    let owner = create_test_owner();

    reschedule(
        &mut session,
        &mut store,
        "perf-3",
        RescheduleRequest {
            show_time: String::from(CAGE_MATCH_NEXT_SUNDAY),
            force: false,
        },
        &owner,
    )
    .unwrap();
    reassign_team(
        &mut session,
        &mut store,
        "perf-2",
        ReassignTeamRequest {
            team: String::from("Charlie"),
            force: false,
        },
        &owner,
    )
    .unwrap();

    let snapshot = session.snapshot();
    let moved = snapshot.performance(&PerformanceId::new("perf-3")).unwrap();
    let reassigned = snapshot.performance(&PerformanceId::new("perf-2")).unwrap();
    assert_eq!(
        moved.show_time.to_rfc3339_opts(SecondsFormat::Secs, true),
        CAGE_MATCH_NEXT_SUNDAY
    );
    assert_eq!(reassigned.team_name.value(), "Charlie");
}

#[test]
fn test_reschedule_unknown_performance_is_not_found() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = reschedule(
        &mut session,
        &mut store,
        "perf-99",
        RescheduleRequest {
            show_time: String::from(CAGE_MATCH_NEXT_SUNDAY),
            force: false,
        },
        &create_test_owner(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Performance"
    ));
}

#[test]
fn test_add_performer_twice_violates_lineup_rule() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = add_performer(
        &mut session,
        &mut store,
        "perf-2",
        AddPerformerRequest {
            performer: String::from("Quinn"),
        },
        &create_test_owner(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_lineup"
    ));
}

#[test]
fn test_register_roster_then_book() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);
    let owner = create_test_owner();

    register_performer(
        &mut session,
        &mut store,
        RegisterPerformerRequest {
            name: String::from("Zed"),
        },
        &owner,
    )
    .unwrap();
    register_team(
        &mut session,
        &mut store,
        RegisterTeamRequest {
            team: String::from("Delta"),
            members: vec![String::from("Zed")],
        },
        &owner,
    )
    .unwrap();
    let mut request: ScheduleTeamRequest = booking("Delta", &[HAROLD_TUESDAY], false);
    request.performers = vec![String::from("Zed")];
    let result = schedule_team(&mut session, &mut store, request, &owner).unwrap();

    assert_eq!(result.response.performance_ids, vec!["perf-4"]);
    assert_eq!(session.snapshot().version, 4);
}

#[test]
fn test_register_duplicate_team_violates_rule() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = register_team(
        &mut session,
        &mut store,
        RegisterTeamRequest {
            team: String::from("Alpha"),
            members: Vec::new(),
        },
        &create_test_owner(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_team"
    ));
}

#[test]
fn test_delete_team_reports_removed_performances() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result: ApiResult<DeleteTeamResponse> =
        delete_team(&mut session, &mut store, "Alpha", &create_test_owner()).unwrap();

    assert_eq!(
        result.response.removed_performances,
        vec![String::from("perf-1"), String::from("perf-3")]
    );
    assert_eq!(store.load().unwrap().performances.len(), 1);
}

#[test]
fn test_remove_performance() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    remove_performance(&mut session, &mut store, "perf-1", &create_test_owner()).unwrap();

    assert!(
        session
            .snapshot()
            .performance(&PerformanceId::new("perf-1"))
            .is_none()
    );
}
