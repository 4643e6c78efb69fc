// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{DateTime, TimeZone, Utc};
use lineup::{InMemoryStore, ScheduleSession, StoreContents};
use lineup_domain::{
    Performance, PerformanceId, Performer, PerformerName, ShowCatalog, SlotHorizon, Team,
    TeamName,
};

use crate::{AuthenticatedActor, Role};

pub fn create_test_owner() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("owner-1"), Role::Owner)
}

pub fn create_test_performer(name: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(name.to_string(), Role::Performer)
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// Monday 2026-10-19 09:00 in Los Angeles.
pub fn monday_morning() -> DateTime<Utc> {
    utc(2026, 10, 19, 16, 0)
}

/// Sunday 2026-10-25 19:00 in Los Angeles.
pub const CAGE_MATCH_SUNDAY: &str = "2026-10-26T02:00:00Z";

/// Sunday 2026-11-01 19:00 in Los Angeles.
pub const CAGE_MATCH_NEXT_SUNDAY: &str = "2026-11-02T03:00:00Z";

/// Tuesday 2026-10-27 20:00 in Los Angeles.
pub const HAROLD_TUESDAY: &str = "2026-10-28T03:00:00Z";

fn at(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

fn names(values: &[&str]) -> Vec<PerformerName> {
    values.iter().map(|v| PerformerName::new(v)).collect()
}

/// Alpha and Bravo fill the Sunday cage match; Alpha also plays Harold night.
pub fn create_test_contents() -> StoreContents {
    StoreContents {
        performances: vec![
            Performance::new(
                PerformanceId::new("perf-1"),
                TeamName::new("Alpha"),
                at(CAGE_MATCH_SUNDAY),
                names(&["Dana", "Rex"]),
            ),
            Performance::new(
                PerformanceId::new("perf-2"),
                TeamName::new("Bravo"),
                at(CAGE_MATCH_SUNDAY),
                names(&["Quinn"]),
            ),
            Performance::new(
                PerformanceId::new("perf-3"),
                TeamName::new("Alpha"),
                at(HAROLD_TUESDAY),
                names(&["Dana"]),
            ),
        ],
        teams: vec![
            Team::new(TeamName::new("Alpha"), names(&["Dana", "Rex"])),
            Team::new(TeamName::new("Bravo"), names(&["Quinn"])),
            Team::new(TeamName::new("Charlie"), Vec::new()),
        ],
        performers: vec![
            Performer::new(PerformerName::new("Dana")),
            Performer::new(PerformerName::new("Rex")),
            Performer::new(PerformerName::new("Quinn")),
        ],
    }
}

pub fn create_test_store() -> InMemoryStore {
    InMemoryStore::with_contents(create_test_contents())
}

pub fn create_test_session(store: &InMemoryStore) -> ScheduleSession {
    ScheduleSession::open(
        ShowCatalog::theater_default().unwrap(),
        SlotHorizon::default(),
        store,
    )
    .unwrap()
}
