// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use chrono::Weekday;

#[test]
fn test_slot_collision_display() {
    let err: DomainError = DomainError::SlotCollision {
        first: String::from("cageMatch"),
        second: String::from("sundaySpecial"),
        weekday: Weekday::Sun,
        hour: 19,
        minute: 0,
    };

    assert_eq!(
        err.to_string(),
        "Show types 'cageMatch' and 'sundaySpecial' both recur on Sun at 19:00"
    );
}

#[test]
fn test_weekday_mismatch_display() {
    let err: DomainError = DomainError::WeekdayMismatch {
        show_type: String::from("cageMatch"),
        expected: Weekday::Sun,
        actual: Weekday::Mon,
    };

    assert_eq!(
        err.to_string(),
        "Show type 'cageMatch' recurs on Sun, but the chosen date is a Mon"
    );
}

#[test]
fn test_invalid_horizon_display() {
    let err: DomainError = DomainError::InvalidHorizon { occurrences: 0 };

    assert_eq!(
        err.to_string(),
        "Invalid slot horizon: 0. Must be between 1 and 104"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::EmptyCatalog);
    assert_eq!(
        err.to_string(),
        "Show catalog must define at least one show type"
    );
}
