// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod input;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, add_performer, check_conflicts, delete_team, get_capacity, get_catalog,
    list_performances, reassign_team, register_performer, register_team, remove_performance,
    remove_performer, reschedule, schedule_team, suggest_slot,
};
pub use input::{InputError, parse_date, parse_show_time};
pub use request_response::{
    AddPerformerRequest, CapacityResponse, CatalogResponse, ConflictCheckRequest,
    ConflictCheckResponse, DeleteTeamResponse, ListPerformancesResponse, OverbookingInfo,
    PerformanceChangeResponse, PerformanceInfo, ReassignTeamRequest, RegisterPerformerRequest,
    RegisterPerformerResponse, RegisterTeamRequest, RegisterTeamResponse, RescheduleRequest,
    ScheduleTeamRequest, ScheduleTeamResponse, ShowTypeInfo, SlotRequest, SuggestionResponse,
};
