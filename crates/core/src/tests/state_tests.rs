// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{cage_match_sunday, names, seeded_contents, seeded_snapshot};
use crate::{InMemoryStore, PerformanceIdAllocator, ScheduleSnapshot, ScheduleStore, StoreContents};
use lineup_domain::{Performance, PerformanceId, PerformerName, TeamName};

#[test]
fn test_from_contents_builds_lookup_tables() {
    let snapshot: ScheduleSnapshot = seeded_snapshot();

    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.performances.len(), 3);
    assert!(snapshot.team(&TeamName::new("Alpha")).is_some());
    assert!(snapshot.team(&TeamName::new("Delta")).is_none());
    assert!(snapshot.performer(&PerformerName::new("Quinn")).is_some());
    assert_eq!(
        snapshot
            .performance(&PerformanceId::new("perf-2"))
            .map(|p| p.team_name.value()),
        Some("Bravo")
    );
}

#[test]
fn test_performances_of_team() {
    let snapshot: ScheduleSnapshot = seeded_snapshot();

    let ids: Vec<&str> = snapshot
        .performances_of(&TeamName::new("Alpha"))
        .iter()
        .map(|p| p.id.value())
        .collect();

    assert_eq!(ids, vec!["perf-1", "perf-3"]);
}

#[test]
fn test_to_contents_keeps_everything() {
    let snapshot: ScheduleSnapshot = seeded_snapshot();

    let contents: StoreContents = snapshot.to_contents();
    let rebuilt: ScheduleSnapshot = ScheduleSnapshot::from_contents(1, contents);

    assert_eq!(rebuilt, snapshot);
}

#[test]
fn test_summary_counts_entities() {
    let snapshot: ScheduleSnapshot = seeded_snapshot();

    assert_eq!(
        snapshot.summary(),
        "version=1,performances=3,teams=3,performers=3"
    );
}

#[test]
fn test_allocator_starts_at_one() {
    let mut ids: PerformanceIdAllocator = PerformanceIdAllocator::default();

    assert_eq!(ids.allocate().value(), "perf-1");
    assert_eq!(ids.allocate().value(), "perf-2");
}

#[test]
fn test_allocator_skips_past_highest_seen_id() {
    let mut ids: PerformanceIdAllocator = PerformanceIdAllocator::new();
    let performances: Vec<Performance> = vec![
        Performance::new(
            PerformanceId::new("perf-41"),
            TeamName::new("Alpha"),
            cage_match_sunday(),
            names(&["Dana"]),
        ),
        Performance::new(
            PerformanceId::new("legacy-9000"),
            TeamName::new("Bravo"),
            cage_match_sunday(),
            Vec::new(),
        ),
    ];

    ids.observe(&performances);

    assert_eq!(ids.allocate().value(), "perf-42");
}

#[test]
fn test_allocator_never_moves_backwards() {
    let mut ids: PerformanceIdAllocator = PerformanceIdAllocator::new();
    ids.observe(&seeded_contents().performances);
    let _ = ids.allocate();

    ids.observe(&[]);

    assert_eq!(ids.allocate().value(), "perf-5");
}

#[test]
fn test_in_memory_store_round_trip() {
    let mut store: InMemoryStore = InMemoryStore::new();
    assert_eq!(store.load().unwrap(), StoreContents::default());

    store.replace(seeded_contents()).unwrap();

    assert_eq!(store.load().unwrap(), seeded_contents());
    assert_eq!(store.writes(), 1);
}
