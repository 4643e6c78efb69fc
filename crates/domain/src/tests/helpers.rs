// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Performance, PerformanceId, PerformerName, ShowCatalog, TeamName};
use chrono::{DateTime, TimeZone, Utc};

pub fn theater_catalog() -> ShowCatalog {
    ShowCatalog::theater_default().unwrap()
}

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// Sunday 2026-10-25 19:00 in Los Angeles.
pub fn cage_match_sunday() -> DateTime<Utc> {
    utc(2026, 10, 26, 2, 0)
}

/// Sunday 2026-11-01 19:00 in Los Angeles (after the DST change).
pub fn cage_match_next_sunday() -> DateTime<Utc> {
    utc(2026, 11, 2, 3, 0)
}

/// Tuesday 2026-10-27 20:00 in Los Angeles.
pub fn harold_tuesday() -> DateTime<Utc> {
    utc(2026, 10, 28, 3, 0)
}

pub fn performance(id: &str, team: &str, show_time: DateTime<Utc>) -> Performance {
    Performance::new(
        PerformanceId::new(id),
        TeamName::new(team),
        show_time,
        vec![PerformerName::new("Dana"), PerformerName::new("Rex")],
    )
}
