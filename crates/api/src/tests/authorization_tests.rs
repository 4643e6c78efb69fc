// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    CAGE_MATCH_NEXT_SUNDAY, create_test_owner, create_test_performer, create_test_session,
    create_test_store,
};
use crate::{
    AddPerformerRequest, ApiError, AuthError, AuthenticatedActor, AuthorizationService, Role,
    ScheduleTeamRequest, add_performer, authenticate_stub, delete_team, remove_performer,
    schedule_team,
};
use lineup::{InMemoryStore, ScheduleSession};
use lineup_domain::PerformerName;

#[test]
fn test_authenticate_stub_accepts_known_roles() {
    let owner: AuthenticatedActor = authenticate_stub("owner-1", "owner").unwrap();
    let performer: AuthenticatedActor = authenticate_stub(" Dana ", "Performer").unwrap();

    assert_eq!(owner.role, Role::Owner);
    assert_eq!(performer.role, Role::Performer);
    assert_eq!(performer.id, "Dana");
}

#[test]
fn test_authenticate_stub_rejects_blank_id_and_unknown_role() {
    assert!(matches!(
        authenticate_stub("  ", "owner"),
        Err(AuthError::AuthenticationFailed { .. })
    ));
    assert!(matches!(
        authenticate_stub("owner-1", "stage-manager"),
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_owner_may_schedule_and_performer_may_not() {
    let owner: AuthenticatedActor = create_test_owner();
    let performer: AuthenticatedActor = create_test_performer("Dana");

    assert!(AuthorizationService::authorize_schedule(&owner, "schedule_team").is_ok());
    assert_eq!(
        AuthorizationService::authorize_schedule(&performer, "schedule_team"),
        Err(AuthError::Unauthorized {
            action: String::from("schedule_team"),
            required_role: String::from("Owner"),
        })
    );
}

#[test]
fn test_performer_may_only_change_their_own_lineup_entry() {
    let performer: AuthenticatedActor = create_test_performer("Dana");

    assert!(
        AuthorizationService::authorize_lineup_change(
            &performer,
            &PerformerName::new("Dana"),
            "add_performer"
        )
        .is_ok()
    );
    assert!(
        AuthorizationService::authorize_lineup_change(
            &performer,
            &PerformerName::new("Rex"),
            "add_performer"
        )
        .is_err()
    );
    assert!(
        AuthorizationService::authorize_lineup_change(
            &create_test_owner(),
            &PerformerName::new("Rex"),
            "add_performer"
        )
        .is_ok()
    );
}

#[test]
fn test_every_role_may_read() {
    assert!(AuthorizationService::authorize_read(&create_test_owner()).is_ok());
    assert!(AuthorizationService::authorize_read(&create_test_performer("Dana")).is_ok());
}

#[test]
fn test_performer_cannot_schedule_through_handler() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = schedule_team(
        &mut session,
        &mut store,
        ScheduleTeamRequest {
            team: String::from("Charlie"),
            show_times: vec![String::from(CAGE_MATCH_NEXT_SUNDAY)],
            slots: Vec::new(),
            performers: Vec::new(),
            force: false,
        },
        &create_test_performer("Dana"),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert_eq!(store.writes(), 0);
}

#[test]
fn test_performer_cannot_delete_team() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = delete_team(
        &mut session,
        &mut store,
        "Alpha",
        &create_test_performer("Dana"),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_performer_can_add_and_remove_themselves() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);
    let dana: AuthenticatedActor = create_test_performer("Dana");

    add_performer(
        &mut session,
        &mut store,
        "perf-2",
        AddPerformerRequest {
            performer: String::from("Dana"),
        },
        &dana,
    )
    .unwrap();
    remove_performer(&mut session, &mut store, "perf-2", "Dana", &dana).unwrap();

    assert_eq!(store.writes(), 2);
}

#[test]
fn test_performer_cannot_add_someone_else() {
    let mut store: InMemoryStore = create_test_store();
    let mut session: ScheduleSession = create_test_session(&store);

    let result = add_performer(
        &mut session,
        &mut store,
        "perf-2",
        AddPerformerRequest {
            performer: String::from("Rex"),
        },
        &create_test_performer("Dana"),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
