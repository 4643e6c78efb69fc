// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors returned across the API boundary.
//!
//! Handlers never hand out a `DomainError` or `CoreError`. Both are
//! translated into [`ApiError`], and each `ApiError` variant maps onto one
//! HTTP status class in the server.

use crate::input::InputError;
use lineup::CoreError;
use lineup_domain::DomainError;

/// Why an actor was turned away before any schedule work ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The actor id was blank or the role was neither `owner` nor `performer`.
    AuthenticationFailed {
        /// What was wrong with the presented identity.
        reason: String,
    },
    /// The actor's role may not perform the action.
    Unauthorized {
        /// Handler action name, e.g. `delete_team`.
        action: String,
        /// Role that may perform it.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => write!(f, "Cannot identify actor: {reason}"),
            Self::Unauthorized {
                action,
                required_role,
            } => write!(f, "'{action}' is reserved for the {required_role} role"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Errors a lineup handler can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not identify a known actor.
    AuthenticationFailed {
        /// What was wrong with the presented identity.
        reason: String,
    },
    /// A performer tried an owner-only action, or a lineup change for
    /// someone else.
    Unauthorized {
        /// Handler action name.
        action: String,
        /// Role that may perform it.
        required_role: String,
    },
    /// A scheduling or catalog rule rejected the request, such as a date
    /// off the show's weekday or a duplicate team name.
    DomainRuleViolation {
        /// Short rule key, e.g. `show_weekday` or `unique_team`.
        rule: String,
        message: String,
    },
    /// A request field could not be parsed or failed validation.
    InvalidInput {
        /// Request field name, e.g. `show_times[0]`.
        field: String,
        message: String,
    },
    /// No team, performer, performance or show type has the given name.
    ResourceNotFound {
        /// `Team`, `Performer`, `Performance` or `Show type`.
        resource_type: String,
        message: String,
    },
    /// The booking was blocked by the redundancy or overbooking check.
    BookingConflict {
        message: String,
        /// Ids of existing performances the team already holds in the slots.
        conflicting: Vec<String>,
    },
    /// The schedule store failed.
    Internal { message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => write!(f, "Cannot identify actor: {reason}"),
            Self::Unauthorized {
                action,
                required_role,
            } => write!(f, "'{action}' is reserved for the {required_role} role"),
            Self::DomainRuleViolation { rule, message } => write!(f, "{message} [{rule}]"),
            Self::InvalidInput { field, message } => write!(f, "Bad value for '{field}': {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => write!(f, "{resource_type} not found: {message}"),
            Self::BookingConflict { message, .. } => write!(f, "Booking conflict: {message}"),
            Self::Internal { message } => write!(f, "Schedule store failure: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::ShowTypeNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Show type"),
            message: format!("Show type '{id}' does not exist"),
        },
        DomainError::NotRecurring(_) => ApiError::DomainRuleViolation {
            rule: String::from("recurring_show_type"),
            message,
        },
        DomainError::WeekdayMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("show_weekday"),
            message,
        },
        DomainError::UnresolvableLocalTime { .. } => ApiError::DomainRuleViolation {
            rule: String::from("local_time_exists"),
            message,
        },
        DomainError::InvalidTeamName(msg) => ApiError::InvalidInput {
            field: String::from("team"),
            message: msg,
        },
        DomainError::InvalidPerformerName(msg) => ApiError::InvalidInput {
            field: String::from("performer"),
            message: msg,
        },
        DomainError::InvalidHorizon { .. } => ApiError::InvalidInput {
            field: String::from("horizon"),
            message,
        },
        DomainError::InvalidTimezone(_) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message,
        },
        DomainError::InvalidSlotTime { .. }
        | DomainError::InvalidSlotTimeString(_)
        | DomainError::InvalidWeekday(_) => ApiError::InvalidInput {
            field: String::from("slot"),
            message,
        },
        // Catalog problems are caught at startup, never per request
        DomainError::EmptyCatalog
        | DomainError::InvalidShowTypeId(_)
        | DomainError::DuplicateShowTypeId(_)
        | DomainError::SlotCollision { .. }
        | DomainError::InvalidRequiredTeams { .. }
        | DomainError::PartialRecurrence { .. }
        | DomainError::CatchAllNotFound(_)
        | DomainError::CatchAllNotAdHoc(_)
        | DomainError::CatalogParseError(_) => ApiError::Internal { message },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::TeamNotFound(team) => ApiError::ResourceNotFound {
            resource_type: String::from("Team"),
            message: format!("Team '{team}' does not exist"),
        },
        CoreError::PerformerNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Performer"),
            message: format!("Performer '{name}' does not exist"),
        },
        CoreError::PerformanceNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Performance"),
            message: format!("Performance '{id}' does not exist"),
        },
        CoreError::DuplicateTeam(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_team"),
            message,
        },
        CoreError::DuplicatePerformer(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_performer"),
            message,
        },
        CoreError::PerformerAlreadyBooked { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_lineup"),
            message,
        },
        CoreError::PerformerNotBooked { .. } => ApiError::DomainRuleViolation {
            rule: String::from("performer_in_lineup"),
            message,
        },
        CoreError::EmptySchedule => ApiError::InvalidInput {
            field: String::from("show_times"),
            message,
        },
        CoreError::RedundantBooking { conflicting, .. } => ApiError::BookingConflict {
            message,
            conflicting,
        },
        CoreError::WouldOverbook { .. } => ApiError::BookingConflict {
            message,
            conflicting: Vec::new(),
        },
        CoreError::Store(_) | CoreError::ReloadAfterWrite(_) => ApiError::Internal { message },
    }
}
