// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, AuthError, InputError, parse_date, parse_show_time, translate_core_error,
    translate_domain_error,
};
use chrono::{NaiveDate, TimeZone, Utc};
use lineup::{CoreError, StoreError};
use lineup_domain::DomainError;

#[test]
fn test_parse_show_time_normalizes_offset_to_utc() {
    let parsed = parse_show_time("show_time", "2026-10-25T19:00:00-07:00").unwrap();

    assert_eq!(
        parsed,
        Utc.with_ymd_and_hms(2026, 10, 26, 2, 0, 0).single().unwrap()
    );
}

#[test]
fn test_parse_show_time_rejects_garbage() {
    assert_eq!(
        parse_show_time("show_time", "tonight"),
        Err(InputError::InvalidTimestamp {
            field: String::from("show_time"),
            value: String::from("tonight"),
        })
    );
}

#[test]
fn test_parse_date() {
    assert_eq!(
        parse_date("date", "2026-11-01").unwrap(),
        NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()
    );
    assert!(matches!(
        parse_date("date", "2026-02-30"),
        Err(InputError::InvalidDate { .. })
    ));
}

#[test]
fn test_input_error_becomes_invalid_input() {
    let err: ApiError = InputError::InvalidDate {
        field: String::from("slots.date"),
        value: String::from("soon"),
    }
    .into();

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("slots.date"),
            message: String::from("'soon' is not a YYYY-MM-DD date"),
        }
    );
}

#[test]
fn test_auth_error_conversion() {
    let err: ApiError = AuthError::Unauthorized {
        action: String::from("delete_team"),
        required_role: String::from("Owner"),
    }
    .into();

    assert_eq!(
        err.to_string(),
        "'delete_team' is reserved for the Owner role"
    );
}

#[test]
fn test_translate_domain_errors() {
    assert!(matches!(
        translate_domain_error(DomainError::InvalidTeamName(String::from("empty"))),
        ApiError::InvalidInput { ref field, .. } if field == "team"
    ));
    assert!(matches!(
        translate_domain_error(DomainError::ShowTypeNotFound(String::from("x"))),
        ApiError::ResourceNotFound { .. }
    ));
    assert!(matches!(
        translate_domain_error(DomainError::EmptyCatalog),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_translate_core_errors() {
    assert!(matches!(
        translate_core_error(CoreError::RedundantBooking {
            team: String::from("Alpha"),
            conflicting: vec![String::from("perf-1")],
        }),
        ApiError::BookingConflict { ref conflicting, .. } if conflicting == &vec![String::from("perf-1")]
    ));
    assert!(matches!(
        translate_core_error(CoreError::Store(StoreError::Unavailable(String::from(
            "down"
        )))),
        ApiError::Internal { .. }
    ));
    assert!(matches!(
        translate_core_error(CoreError::ReloadAfterWrite(StoreError::Unavailable(
            String::from("down")
        ))),
        ApiError::Internal { ref message } if message.contains("was saved")
    ));
    assert!(matches!(
        translate_core_error(CoreError::DomainViolation(DomainError::NotRecurring(
            String::from("special")
        ))),
        ApiError::DomainRuleViolation { .. }
    ));
    assert!(matches!(
        translate_core_error(CoreError::EmptySchedule),
        ApiError::InvalidInput { .. }
    ));
}
