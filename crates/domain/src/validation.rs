// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{PerformerName, TeamName};
use std::collections::HashSet;

/// Longest accepted team or performer name, in characters.
pub const MAX_NAME_LENGTH: usize = 80;

/// Validates a team name.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name is longer than [`MAX_NAME_LENGTH`] characters
pub fn validate_team_name(team: &TeamName) -> Result<(), DomainError> {
    // Rule: team name must not be empty
    if team.value().is_empty() {
        return Err(DomainError::InvalidTeamName(String::from(
            "Team name cannot be empty",
        )));
    }

    if team.value().chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidTeamName(format!(
            "Team name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates a performer name.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name is longer than [`MAX_NAME_LENGTH`] characters
pub fn validate_performer_name(performer: &PerformerName) -> Result<(), DomainError> {
    if performer.value().is_empty() {
        return Err(DomainError::InvalidPerformerName(String::from(
            "Performer name cannot be empty",
        )));
    }

    if performer.value().chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidPerformerName(format!(
            "Performer name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Validates a performance lineup: every name valid, no name twice.
///
/// # Errors
///
/// Returns an error if a name is invalid or listed more than once.
pub fn validate_lineup(performers: &[PerformerName]) -> Result<(), DomainError> {
    let mut seen: HashSet<&PerformerName> = HashSet::new();
    for performer in performers {
        validate_performer_name(performer)?;
        // Rule: a performer appears at most once per lineup
        if !seen.insert(performer) {
            return Err(DomainError::InvalidPerformerName(format!(
                "'{performer}' is listed more than once"
            )));
        }
    }
    Ok(())
}
