// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PerformanceIdAllocator, ScheduleSnapshot, StoreContents};
use chrono::{DateTime, TimeZone, Utc};
use lineup_domain::{
    Performance, PerformanceId, Performer, PerformerName, ShowCatalog, Team, TeamName,
};

pub fn theater_catalog() -> ShowCatalog {
    ShowCatalog::theater_default().unwrap()
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
pub fn cage_match_sunday() -> DateTime<Utc> {
    utc(2026, 10, 26, 2, 0)
}

/// Sunday 2026-11-01 19:00 in Los Angeles.
pub fn cage_match_next_sunday() -> DateTime<Utc> {
    utc(2026, 11, 2, 3, 0)
}

/// Tuesday 2026-10-27 20:00 in Los Angeles.
pub fn harold_tuesday() -> DateTime<Utc> {
    utc(2026, 10, 28, 3, 0)
}

pub fn names(values: &[&str]) -> Vec<PerformerName> {
    values.iter().map(|v| PerformerName::new(v)).collect()
}

/// Three performers, three teams and three performances:
///
/// - `perf-1`: Alpha at the Sunday cage match
/// - `perf-2`: Bravo at the Sunday cage match
/// - `perf-3`: Alpha at Tuesday's Harold night
pub fn seeded_contents() -> StoreContents {
    StoreContents {
        performances: vec![
            Performance::new(
                PerformanceId::new("perf-1"),
                TeamName::new("Alpha"),
                cage_match_sunday(),
                names(&["Dana", "Rex"]),
            ),
            Performance::new(
                PerformanceId::new("perf-2"),
                TeamName::new("Bravo"),
                cage_match_sunday(),
                names(&["Quinn"]),
            ),
            Performance::new(
                PerformanceId::new("perf-3"),
                TeamName::new("Alpha"),
                harold_tuesday(),
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

pub fn seeded_snapshot() -> ScheduleSnapshot {
    ScheduleSnapshot::from_contents(1, seeded_contents())
}

pub fn seeded_allocator() -> PerformanceIdAllocator {
    let mut ids: PerformanceIdAllocator = PerformanceIdAllocator::new();
    ids.observe(&seeded_contents().performances);
    ids
}
