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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod actor;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Utc;
use clap::Parser;
use lineup::{InMemoryStore, ScheduleSession};
use lineup_api::{
    AddPerformerRequest, ApiError, ApiResult, CapacityResponse, CatalogResponse,
    ConflictCheckRequest, ConflictCheckResponse, DeleteTeamResponse, ListPerformancesResponse,
    PerformanceChangeResponse, ReassignTeamRequest, RegisterPerformerRequest,
    RegisterPerformerResponse, RegisterTeamRequest, RegisterTeamResponse, RescheduleRequest,
    ScheduleTeamRequest, ScheduleTeamResponse, SuggestionResponse, add_performer,
    check_conflicts, delete_team, get_capacity, get_catalog, list_performances, reassign_team,
    register_performer, register_team, remove_performance, remove_performer, reschedule,
    schedule_team, suggest_slot,
};
use lineup_domain::{ShowCatalog, SlotHorizon, parse_timezone};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::actor::RequestActor;

/// Lineup Server - HTTP server for the theater show lineup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON show catalog. If not provided, uses the built-in theater catalog.
    #[arg(short, long)]
    catalog: Option<String>,

    /// IANA timezone overriding the catalog's theater timezone
    #[arg(short, long)]
    timezone: Option<String>,

    /// Number of upcoming occurrences enumerated per recurring show type
    #[arg(long, default_value_t = SlotHorizon::DEFAULT_OCCURRENCES)]
    horizon: u32,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// The live session and the store it reloads from.
struct Schedule {
    session: ScheduleSession,
    store: InMemoryStore,
}

/// Application state shared across handlers.
///
/// Writes hold the lock across apply, store replace and refresh so that
/// every request sees a whole snapshot.
#[derive(Clone)]
struct AppState {
    schedule: Arc<Mutex<Schedule>>,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Always `true`.
    error: bool,
    /// The error message.
    message: String,
    /// Ids of existing performances involved in a booking conflict.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    conflicting: Vec<String>,
}

/// Custom error type for HTTP responses.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Ids of conflicting performances, if any.
    conflicting: Vec<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            conflicting: self.conflicting,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let message: String = err.to_string();
        let (status, conflicting) = match err {
            ApiError::AuthenticationFailed { .. } => (StatusCode::UNAUTHORIZED, Vec::new()),
            ApiError::Unauthorized { .. } => (StatusCode::FORBIDDEN, Vec::new()),
            ApiError::DomainRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Vec::new())
            }
            ApiError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, Vec::new()),
            ApiError::ResourceNotFound { .. } => (StatusCode::NOT_FOUND, Vec::new()),
            ApiError::BookingConflict { conflicting, .. } => (StatusCode::CONFLICT, conflicting),
            ApiError::Internal { .. } => {
                error!(error = %message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
            }
        };
        Self {
            status,
            message,
            conflicting,
        }
    }
}

/// Handler for GET `/catalog` endpoint.
///
/// The catalog is public; no actor headers are required.
async fn handle_get_catalog(AxumState(app_state): AxumState<AppState>) -> Json<CatalogResponse> {
    let schedule = app_state.schedule.lock().await;
    Json(get_catalog(&schedule.session))
}

/// Handler for GET `/performances` endpoint.
async fn handle_list_performances(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Json<ListPerformancesResponse>, HttpError> {
    info!(actor_id = %actor.id, "Handling list_performances request");

    let schedule = app_state.schedule.lock().await;
    let response: ListPerformancesResponse = list_performances(&schedule.session, &actor)?;
    drop(schedule);

    Ok(Json(response))
}

/// Handler for POST `/performances` endpoint.
///
/// Books a team into one or more show times.
async fn handle_schedule_team(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    Json(req): Json<ScheduleTeamRequest>,
) -> Result<Json<ScheduleTeamResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        team = %req.team,
        times = req.show_times.len() + req.slots.len(),
        force = req.force,
        "Handling schedule_team request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<ScheduleTeamResponse> = schedule_team(session, store, req, &actor)?;
    drop(guard);

    info!(
        affected = result.change.affected.len(),
        "Successfully scheduled team"
    );
    Ok(Json(result.response))
}

/// Handler for POST `/performances/{id}/reschedule` endpoint.
async fn handle_reschedule(
    AxumState(app_state): AxumState<AppState>,
    Path(performance_id): Path<String>,
    RequestActor(actor): RequestActor,
    Json(req): Json<RescheduleRequest>,
) -> Result<Json<PerformanceChangeResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        performance_id = %performance_id,
        show_time = %req.show_time,
        force = req.force,
        "Handling reschedule request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<PerformanceChangeResponse> =
        reschedule(session, store, &performance_id, req, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for POST `/performances/{id}/team` endpoint.
async fn handle_reassign_team(
    AxumState(app_state): AxumState<AppState>,
    Path(performance_id): Path<String>,
    RequestActor(actor): RequestActor,
    Json(req): Json<ReassignTeamRequest>,
) -> Result<Json<PerformanceChangeResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        performance_id = %performance_id,
        team = %req.team,
        force = req.force,
        "Handling reassign_team request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<PerformanceChangeResponse> =
        reassign_team(session, store, &performance_id, req, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for POST `/performances/{id}/performers` endpoint.
async fn handle_add_performer(
    AxumState(app_state): AxumState<AppState>,
    Path(performance_id): Path<String>,
    RequestActor(actor): RequestActor,
    Json(req): Json<AddPerformerRequest>,
) -> Result<Json<PerformanceChangeResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        performance_id = %performance_id,
        performer = %req.performer,
        "Handling add_performer request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<PerformanceChangeResponse> =
        add_performer(session, store, &performance_id, req, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for DELETE `/performances/{id}/performers/{name}` endpoint.
async fn handle_remove_performer(
    AxumState(app_state): AxumState<AppState>,
    Path((performance_id, performer)): Path<(String, String)>,
    RequestActor(actor): RequestActor,
) -> Result<Json<PerformanceChangeResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        performance_id = %performance_id,
        performer = %performer,
        "Handling remove_performer request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<PerformanceChangeResponse> =
        remove_performer(session, store, &performance_id, &performer, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for DELETE `/performances/{id}` endpoint.
async fn handle_remove_performance(
    AxumState(app_state): AxumState<AppState>,
    Path(performance_id): Path<String>,
    RequestActor(actor): RequestActor,
) -> Result<Json<PerformanceChangeResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        performance_id = %performance_id,
        "Handling remove_performance request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<PerformanceChangeResponse> =
        remove_performance(session, store, &performance_id, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for POST `/teams` endpoint.
async fn handle_register_team(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    Json(req): Json<RegisterTeamRequest>,
) -> Result<Json<RegisterTeamResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        team = %req.team,
        members = req.members.len(),
        "Handling register_team request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<RegisterTeamResponse> = register_team(session, store, req, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for DELETE `/teams/{name}` endpoint.
///
/// Removes the team together with all of its performances.
async fn handle_delete_team(
    AxumState(app_state): AxumState<AppState>,
    Path(team): Path<String>,
    RequestActor(actor): RequestActor,
) -> Result<Json<DeleteTeamResponse>, HttpError> {
    info!(actor_id = %actor.id, team = %team, "Handling delete_team request");

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<DeleteTeamResponse> = delete_team(session, store, &team, &actor)?;
    drop(guard);

    info!(
        removed = result.response.removed_performances.len(),
        "Successfully deleted team"
    );
    Ok(Json(result.response))
}

/// Handler for POST `/performers` endpoint.
async fn handle_register_performer(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    Json(req): Json<RegisterPerformerRequest>,
) -> Result<Json<RegisterPerformerResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        name = %req.name,
        "Handling register_performer request"
    );

    let mut guard = app_state.schedule.lock().await;
    let Schedule { session, store } = &mut *guard;
    let result: ApiResult<RegisterPerformerResponse> =
        register_performer(session, store, req, &actor)?;
    drop(guard);

    Ok(Json(result.response))
}

/// Handler for POST `/conflicts` endpoint.
///
/// Dry run of the save gate; nothing is written.
async fn handle_check_conflicts(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
    Json(req): Json<ConflictCheckRequest>,
) -> Result<Json<ConflictCheckResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        team = %req.team,
        times = req.show_times.len(),
        "Handling check_conflicts request"
    );

    let schedule = app_state.schedule.lock().await;
    let response: ConflictCheckResponse = check_conflicts(&schedule.session, &req, &actor)?;
    drop(schedule);

    Ok(Json(response))
}

/// Handler for GET `/capacity` endpoint.
async fn handle_get_capacity(
    AxumState(app_state): AxumState<AppState>,
    RequestActor(actor): RequestActor,
) -> Result<Json<CapacityResponse>, HttpError> {
    info!(actor_id = %actor.id, "Handling get_capacity request");

    let schedule = app_state.schedule.lock().await;
    let response: CapacityResponse = get_capacity(&schedule.session, &actor, Utc::now())?;
    drop(schedule);

    Ok(Json(response))
}

/// Handler for GET `/suggestions/{show_type}` endpoint.
async fn handle_suggest_slot(
    AxumState(app_state): AxumState<AppState>,
    Path(show_type): Path<String>,
    RequestActor(actor): RequestActor,
) -> Result<Json<SuggestionResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        show_type = %show_type,
        "Handling suggest_slot request"
    );

    let schedule = app_state.schedule.lock().await;
    let response: SuggestionResponse =
        suggest_slot(&schedule.session, &show_type, &actor, Utc::now())?;
    drop(schedule);

    Ok(Json(response))
}

/// Builds the application router with all routes.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(handle_get_catalog))
        .route("/performances", get(handle_list_performances))
        .route("/performances", post(handle_schedule_team))
        .route("/performances/{id}", delete(handle_remove_performance))
        .route("/performances/{id}/reschedule", post(handle_reschedule))
        .route("/performances/{id}/team", post(handle_reassign_team))
        .route("/performances/{id}/performers", post(handle_add_performer))
        .route(
            "/performances/{id}/performers/{name}",
            delete(handle_remove_performer),
        )
        .route("/teams", post(handle_register_team))
        .route("/teams/{name}", delete(handle_delete_team))
        .route("/performers", post(handle_register_performer))
        .route("/conflicts", post(handle_check_conflicts))
        .route("/capacity", get(handle_get_capacity))
        .route("/suggestions/{show_type}", get(handle_suggest_slot))
        .with_state(app_state)
}

/// Loads the show catalog from a file, or falls back to the built-in one.
fn load_catalog(args: &Args) -> Result<ShowCatalog, Box<dyn std::error::Error>> {
    let catalog: ShowCatalog = if let Some(path) = &args.catalog {
        info!("Loading show catalog from: {}", path);
        let json: String = std::fs::read_to_string(path)?;
        ShowCatalog::from_json(&json)?
    } else {
        info!("Using built-in theater catalog");
        ShowCatalog::theater_default()?
    };

    match &args.timezone {
        Some(name) => {
            info!("Overriding theater timezone with: {}", name);
            Ok(catalog.with_timezone(parse_timezone(name)?))
        }
        None => Ok(catalog),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Lineup Server");

    let catalog: ShowCatalog = load_catalog(&args)?;
    let horizon: SlotHorizon = SlotHorizon::new(args.horizon)?;
    info!(
        timezone = catalog.timezone().name(),
        show_types = catalog.show_types().len(),
        horizon = horizon.occurrences(),
        "Show catalog ready"
    );

    let store: InMemoryStore = InMemoryStore::new();
    let session: ScheduleSession = ScheduleSession::open(catalog, horizon, &store)?;

    let app_state: AppState = AppState {
        schedule: Arc::new(Mutex::new(Schedule { session, store })),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
