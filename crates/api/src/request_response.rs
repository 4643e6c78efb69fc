// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Timestamps cross the wire as RFC 3339 strings and calendar dates as
//! `YYYY-MM-DD`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A show type picked by calendar date instead of exact time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// The show type id.
    pub show_type: String,
    /// The calendar date, `YYYY-MM-DD`, in the theater timezone.
    pub date: String,
}

/// API request to book a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTeamRequest {
    /// The team name.
    pub team: String,
    /// Exact show times.
    #[serde(default)]
    pub show_times: Vec<String>,
    /// Show type and date pairs, placed on each show type's canonical time.
    #[serde(default)]
    pub slots: Vec<SlotRequest>,
    /// Performers appearing in every new performance. Omitted means the team's members.
    #[serde(default)]
    pub performers: Vec<String>,
    /// Save even if the booking is redundant or overbooks a show.
    #[serde(default)]
    pub force: bool,
}

/// API response for a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTeamResponse {
    /// Ids of the created performances.
    pub performance_ids: Vec<String>,
    /// A success message.
    pub message: String,
}

/// API request to move a performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescheduleRequest {
    /// The new show time.
    pub show_time: String,
    /// Save even if the move is redundant or overbooks a show.
    #[serde(default)]
    pub force: bool,
}

/// API request to give a performance to another team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignTeamRequest {
    /// The new team.
    pub team: String,
    /// Save even if the team already holds that slot or it overbooks.
    #[serde(default)]
    pub force: bool,
}

/// API request to add a performer to a lineup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPerformerRequest {
    /// The performer name.
    pub performer: String,
}

/// API response for a change to a single performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceChangeResponse {
    /// The performance id.
    pub performance_id: String,
    /// A success message.
    pub message: String,
}

/// API request to register a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterTeamRequest {
    /// The team name.
    pub team: String,
    /// Registered performers on the team.
    #[serde(default)]
    pub members: Vec<String>,
}

/// API response for a team registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterTeamResponse {
    /// The team name.
    pub team: String,
    /// A success message.
    pub message: String,
}

/// API request to register a performer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPerformerRequest {
    /// The performer name.
    pub name: String,
}

/// API response for a performer registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPerformerResponse {
    /// The performer name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API response for a team deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTeamResponse {
    /// The deleted team.
    pub team: String,
    /// Performances removed along with the team.
    pub removed_performances: Vec<String>,
    /// A success message.
    pub message: String,
}

/// API request to check a booking before saving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheckRequest {
    /// The team to check.
    pub team: String,
    /// Candidate show times.
    pub show_times: Vec<String>,
}

/// A slot that would exceed its team target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverbookingInfo {
    /// The show type id.
    pub show_type: String,
    /// The slot time.
    pub show_time: String,
    /// Teams booked once the new booking is added.
    pub booked: usize,
    /// Teams the show type requires.
    pub required: u32,
}

/// API response for a conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheckResponse {
    /// The team checked.
    pub team: String,
    /// Performances the team already holds in the candidate slots.
    pub redundant: Vec<PerformanceInfo>,
    /// Slots the booking would overbook.
    pub overbookings: Vec<OverbookingInfo>,
    /// Whether the booking would save without forcing.
    pub can_save: bool,
}

/// One performance as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceInfo {
    /// The performance id.
    pub id: String,
    /// The team name.
    pub team: String,
    /// The show time.
    pub show_time: String,
    /// The resolved show type, or the catch-all.
    pub show_type: String,
    /// The lineup.
    pub performers: Vec<String>,
}

/// API response listing every performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPerformancesResponse {
    /// The snapshot version the list was read from.
    pub version: u64,
    /// Performances in ascending show time order.
    pub performances: Vec<PerformanceInfo>,
}

/// One show type as shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowTypeInfo {
    /// The show type id.
    pub id: String,
    /// The display name.
    pub display_name: String,
    /// Weekday, for regular show types.
    pub weekday: Option<String>,
    /// Local time `HH:MM`, for regular show types.
    pub time: Option<String>,
    /// Required teams, for regular show types.
    pub required_teams: Option<u32>,
}

/// API response describing the show catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// The theater timezone.
    pub timezone: String,
    /// The catch-all show type id.
    pub catch_all: String,
    /// Show types in catalog order.
    pub show_types: Vec<ShowTypeInfo>,
}

/// API response with the four capacity buckets.
///
/// Each bucket maps a show type id to ascending show times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityResponse {
    /// The snapshot version classified.
    pub version: u64,
    /// The instant upcoming slots were enumerated from.
    pub generated_at: String,
    /// Occurrences enumerated per recurring show type.
    pub horizon: u32,
    /// Slots with no team booked.
    pub unbooked: BTreeMap<String, Vec<String>>,
    /// Slots with fewer teams than required.
    pub underbooked: BTreeMap<String, Vec<String>>,
    /// Slots with exactly the required teams.
    pub fully_booked: BTreeMap<String, Vec<String>>,
    /// Slots with more teams than required.
    pub overbooked: BTreeMap<String, Vec<String>>,
}

/// API response suggesting the next slot for a show type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// The show type id.
    pub show_type: String,
    /// The suggested show time, if any slot still needs teams.
    pub suggested_time: Option<String>,
}
