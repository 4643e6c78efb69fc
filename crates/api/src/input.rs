// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing of wire-format timestamps and dates.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Errors raised while parsing request fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    /// A timestamp was not valid RFC 3339.
    #[error("'{value}' is not an RFC 3339 timestamp")]
    InvalidTimestamp {
        /// The request field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A date was not `YYYY-MM-DD`.
    #[error("'{value}' is not a YYYY-MM-DD date")]
    InvalidDate {
        /// The request field.
        field: String,
        /// The rejected value.
        value: String,
    },
}

impl InputError {
    /// The request field the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidTimestamp { field, .. } | Self::InvalidDate { field, .. } => field,
        }
    }
}

/// Parses an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns an error if `value` is not RFC 3339.
pub fn parse_show_time(field: &str, value: &str) -> Result<DateTime<Utc>, InputError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| InputError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns an error if `value` is not a valid date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}
