// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;
use lineup_domain::PerformerName;
use std::str::FromStr;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Owner role: the people who run the schedule.
    ///
    /// Owners may:
    /// - book, move and reassign performances
    /// - delete performances and teams
    /// - register teams and performers
    /// - edit any lineup
    Owner,
    /// Performer role: read-only access to the schedule.
    ///
    /// Performers may read capacity, suggestions and conflict checks,
    /// and may add or remove themselves from a performance lineup.
    Performer,
}

impl Role {
    /// The role name as shown in errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Performer => "Performer",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "performer" => Ok(Self::Performer),
            _ => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{s}'"),
            }),
        }
    }
}

/// An authenticated actor with an associated role.
///
/// For performers, the id is the performer's registered name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Returns whether this actor is the given performer.
    #[must_use]
    pub fn is_performer(&self, performer: &PerformerName) -> bool {
        self.role == Role::Performer && self.id.trim() == performer.value()
    }
}

/// Stub authentication.
///
/// Identity is owned by an external service; the caller's id and role are
/// taken as given once they pass basic checks.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `role` - The role name, `owner` or `performer`
///
/// # Errors
///
/// Returns an error if the id is blank or the role is unknown.
pub fn authenticate_stub(actor_id: &str, role: &str) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor id cannot be empty"),
        });
    }
    let role: Role = role.parse()?;
    Ok(AuthenticatedActor::new(actor_id.trim().to_string(), role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    fn owner_only(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Owner => Ok(()),
            Role::Performer => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from(Role::Owner.as_str()),
            }),
        }
    }

    /// Checks if an actor may book, move or reassign performances.
    ///
    /// Only Owner actors may change the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Owner role.
    pub fn authorize_schedule(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        Self::owner_only(actor, action)
    }

    /// Checks if an actor may register or delete teams and performers.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Owner role.
    pub fn authorize_manage_roster(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        Self::owner_only(actor, action)
    }

    /// Checks if an actor may add or remove `performer` in a lineup.
    ///
    /// Owners may edit any lineup. Performers may only add or remove
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if a performer tries to change someone else.
    pub fn authorize_lineup_change(
        actor: &AuthenticatedActor,
        performer: &PerformerName,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Owner || actor.is_performer(performer) {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: action.to_string(),
            required_role: String::from(Role::Owner.as_str()),
        })
    }

    /// Checks if an actor may read the schedule.
    ///
    /// Every role may read.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub const fn authorize_read(_actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Ok(())
    }
}
