// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{cage_match_sunday, performance};
use crate::{Performance, PerformerName, ShowTypeId, TeamName};

#[test]
fn test_team_name_is_trimmed() {
    let team: TeamName = TeamName::new("  Big Spoon  ");
    assert_eq!(team.value(), "Big Spoon");
}

#[test]
fn test_team_name_equality_is_case_sensitive() {
    assert_ne!(TeamName::new("Big Spoon"), TeamName::new("big spoon"));
    assert_eq!(TeamName::new("Big Spoon"), TeamName::new(" Big Spoon"));
}

#[test]
fn test_performer_name_is_trimmed() {
    let performer: PerformerName = PerformerName::new("\tDana ");
    assert_eq!(performer.value(), "Dana");
    assert_eq!(performer.to_string(), "Dana");
}

#[test]
fn test_show_type_id_display() {
    assert_eq!(ShowTypeId::new("cageMatch").to_string(), "cageMatch");
}

#[test]
fn test_performance_has_performer() {
    let p: Performance = performance("p1", "Alpha", cage_match_sunday());

    assert!(p.has_performer(&PerformerName::new("Dana")));
    assert!(!p.has_performer(&PerformerName::new("Quinn")));
}

#[test]
fn test_performance_serializes_names_transparently() {
    let p: Performance = performance("p1", "Alpha", cage_match_sunday());

    let json: serde_json::Value = serde_json::to_value(&p).unwrap();

    assert_eq!(json["id"], "p1");
    assert_eq!(json["team_name"], "Alpha");
    assert_eq!(json["performers"][0], "Dana");
    assert_eq!(json["show_time"], "2026-10-26T02:00:00Z");
}
