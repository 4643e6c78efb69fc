// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveTime, Weekday};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog defines no show types at all.
    EmptyCatalog,
    /// A show type identifier is empty or invalid.
    InvalidShowTypeId(String),
    /// Two show types share the same identifier.
    DuplicateShowTypeId(String),
    /// Two regular show types recur on the same weekday at the same time.
    SlotCollision {
        /// The show type defined first.
        first: String,
        /// The show type that collides with it.
        second: String,
        /// The shared weekday.
        weekday: Weekday,
        /// The shared hour.
        hour: u8,
        /// The shared minute.
        minute: u8,
    },
    /// A regular show type requires zero teams.
    InvalidRequiredTeams {
        /// The offending show type.
        show_type: String,
        /// The invalid count.
        count: u32,
    },
    /// A show type defines only part of its recurrence.
    PartialRecurrence {
        /// The offending show type.
        show_type: String,
    },
    /// Hour or minute is out of range.
    InvalidSlotTime {
        /// The hour value.
        hour: u32,
        /// The minute value.
        minute: u32,
    },
    /// A slot time string could not be parsed as `HH:MM`.
    InvalidSlotTimeString(String),
    /// A weekday string could not be parsed.
    InvalidWeekday(String),
    /// The designated catch-all show type is not in the catalog.
    CatchAllNotFound(String),
    /// The designated catch-all show type has a recurrence.
    CatchAllNotAdHoc(String),
    /// The timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// The catalog document could not be parsed.
    CatalogParseError(String),
    /// The slot horizon is outside the accepted range.
    InvalidHorizon {
        /// The requested number of occurrences.
        occurrences: u32,
    },
    /// The show type does not exist in the catalog.
    ShowTypeNotFound(String),
    /// The show type has no recurring slot to normalize onto.
    NotRecurring(String),
    /// The chosen date falls on a different weekday than the show type.
    WeekdayMismatch {
        /// The show type.
        show_type: String,
        /// The weekday the show type recurs on.
        expected: Weekday,
        /// The weekday of the chosen date.
        actual: Weekday,
    },
    /// The local slot time does not exist in the theater timezone.
    UnresolvableLocalTime {
        /// The calendar date.
        date: NaiveDate,
        /// The wall-clock time.
        time: NaiveTime,
    },
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// Performer name is empty or invalid.
    InvalidPerformerName(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "Show catalog must define at least one show type"),
            Self::InvalidShowTypeId(msg) => write!(f, "Invalid show type id: {msg}"),
            Self::DuplicateShowTypeId(id) => write!(f, "Show type '{id}' is defined twice"),
            Self::SlotCollision {
                first,
                second,
                weekday,
                hour,
                minute,
            } => {
                write!(
                    f,
                    "Show types '{first}' and '{second}' both recur on {weekday} at {hour:02}:{minute:02}"
                )
            }
            Self::InvalidRequiredTeams { show_type, count } => {
                write!(
                    f,
                    "Show type '{show_type}' requires {count} teams. Must be greater than 0"
                )
            }
            Self::PartialRecurrence { show_type } => {
                write!(
                    f,
                    "Show type '{show_type}' must define weekday, time and required teams together or not at all"
                )
            }
            Self::InvalidSlotTime { hour, minute } => {
                write!(f, "Invalid slot time {hour}:{minute}")
            }
            Self::InvalidSlotTimeString(value) => {
                write!(f, "Invalid slot time '{value}'. Expected HH:MM")
            }
            Self::InvalidWeekday(value) => write!(f, "Invalid weekday '{value}'"),
            Self::CatchAllNotFound(id) => {
                write!(f, "Catch-all show type '{id}' is not in the catalog")
            }
            Self::CatchAllNotAdHoc(id) => {
                write!(f, "Catch-all show type '{id}' must not have a recurring slot")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::CatalogParseError(msg) => write!(f, "Failed to parse show catalog: {msg}"),
            Self::InvalidHorizon { occurrences } => {
                write!(
                    f,
                    "Invalid slot horizon: {occurrences}. Must be between 1 and 104"
                )
            }
            Self::ShowTypeNotFound(id) => write!(f, "Show type '{id}' not found"),
            Self::NotRecurring(id) => {
                write!(f, "Show type '{id}' has no recurring slot")
            }
            Self::WeekdayMismatch {
                show_type,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Show type '{show_type}' recurs on {expected}, but the chosen date is a {actual}"
                )
            }
            Self::UnresolvableLocalTime { date, time } => {
                write!(
                    f,
                    "Local time {date} {time} does not exist in the theater timezone"
                )
            }
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::InvalidPerformerName(msg) => write!(f, "Invalid performer name: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
