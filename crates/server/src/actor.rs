// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor extraction at the server boundary.
//!
//! Every schedule request names its caller through two headers. The pair is
//! handed to the stub authenticator; there are no sessions or passwords.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use lineup_api::{AuthenticatedActor, authenticate_stub};
use tracing::{debug, warn};

/// Header carrying the caller's id.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Header carrying the caller's role (`owner` or `performer`).
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Extractor for the authenticated caller.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     RequestActor(actor): RequestActor,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if either header is missing, is not
/// valid ASCII, or names an unknown role.
pub struct RequestActor(pub AuthenticatedActor);

impl<S: Send + Sync> FromRequestParts<S> for RequestActor {
    type Rejection = ActorError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor_id: &str = header_value(parts, ACTOR_ID_HEADER)?;
        let role: &str = header_value(parts, ACTOR_ROLE_HEADER)?;

        let actor: AuthenticatedActor = authenticate_stub(actor_id, role).map_err(|e| {
            warn!(actor_id, role, error = %e, "Actor authentication failed");
            ActorError::Rejected(e.to_string())
        })?;

        debug!(actor_id = %actor.id, role = actor.role.as_str(), "Actor authenticated");
        Ok(Self(actor))
    }
}

fn header_value<'a>(parts: &'a Parts, name: &'static str) -> Result<&'a str, ActorError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| {
            debug!(header = name, "Missing actor header");
            ActorError::MissingHeader(name)
        })?
        .to_str()
        .map_err(|_| {
            warn!(header = name, "Invalid actor header encoding");
            ActorError::InvalidHeader(name)
        })
}

/// Actor extraction errors.
#[derive(Debug)]
pub enum ActorError {
    /// A required header is missing.
    MissingHeader(&'static str),
    /// A header is not valid ASCII.
    InvalidHeader(&'static str),
    /// The stub authenticator refused the id or role.
    Rejected(String),
}

impl IntoResponse for ActorError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingHeader(name) => format!("Missing {name} header"),
            Self::InvalidHeader(name) => format!("Invalid {name} header encoding"),
            Self::Rejected(reason) => reason,
        };

        (StatusCode::UNAUTHORIZED, message).into_response()
    }
}
