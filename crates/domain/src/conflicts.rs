// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pre-save booking checks.
//!
//! Before a team is written into one or more slots, two checks run
//! against the current performance snapshot:
//!
//! - **Redundancy**: the team already holds one of the slots. This
//!   blocks the save.
//! - **Overbooking**: adding the team would push a regular show past
//!   its required team count. This warns and blocks unless forced.
//!
//! Both use exact timestamp equality.

use crate::catalog::ShowCatalog;
use crate::types::{Performance, PerformanceId, ShowTypeId, TeamName};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Returns every performance of `team` at one of `candidate_times`.
///
/// An empty result means the team can be scheduled into those slots
/// without double-booking.
#[must_use]
pub fn find_redundant<'a>(
    team: &TeamName,
    candidate_times: &BTreeSet<DateTime<Utc>>,
    performances: &'a [Performance],
) -> Vec<&'a Performance> {
    performances
        .iter()
        .filter(|p| &p.team_name == team && candidate_times.contains(&p.show_time))
        .collect()
}

/// A slot that would exceed its team target after a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverbookingWarning {
    /// The show type the slot resolves to.
    pub show_type: ShowTypeId,
    /// The slot instant.
    pub time: DateTime<Utc>,
    /// Teams booked once the new booking is added.
    pub booked: usize,
    /// Teams the show type requires.
    pub required: u32,
}

/// Projects which candidate slots would be overbooked once `team` is added.
///
/// A slot `team` already holds is counted without it, so a redundant
/// booking is not also reported as an overbooking. Ad-hoc and
/// unresolvable times never warn.
#[must_use]
pub fn projected_overbookings(
    catalog: &ShowCatalog,
    team: &TeamName,
    candidate_times: &BTreeSet<DateTime<Utc>>,
    performances: &[Performance],
) -> Vec<OverbookingWarning> {
    candidate_times
        .iter()
        .filter_map(|time| {
            let show_type = catalog.resolve(*time)?;
            let required: u32 = show_type.required_teams()?;
            let booked: usize = performances
                .iter()
                .filter(|p| p.show_time == *time && &p.team_name != team)
                .count()
                + 1;
            let limit: usize = usize::try_from(required).unwrap_or(usize::MAX);
            (booked > limit).then(|| OverbookingWarning {
                show_type: show_type.id().clone(),
                time: *time,
                booked,
                required,
            })
        })
        .collect()
}

/// Outcome of the pre-save gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveGate {
    /// Nothing blocks the save.
    Clear,
    /// The save is blocked.
    Blocked {
        /// Existing performances the team already holds in the candidate slots.
        redundant: Vec<PerformanceId>,
        /// Slots the booking would overbook.
        overbookings: Vec<OverbookingWarning>,
    },
    /// The save would be blocked, but the caller forced it through.
    Overridden {
        /// Existing performances the team already holds in the candidate slots.
        redundant: Vec<PerformanceId>,
        /// Slots the booking would overbook.
        overbookings: Vec<OverbookingWarning>,
    },
}

impl SaveGate {
    /// Returns whether the save may proceed.
    #[must_use]
    pub const fn allows_save(&self) -> bool {
        !matches!(self, Self::Blocked { .. })
    }
}

/// Runs both pre-save checks for scheduling `team` into `candidate_times`.
///
/// `force` turns a blocked result into an overridden one.
#[must_use]
pub fn evaluate_save_gate(
    catalog: &ShowCatalog,
    team: &TeamName,
    candidate_times: &BTreeSet<DateTime<Utc>>,
    performances: &[Performance],
    force: bool,
) -> SaveGate {
    let redundant: Vec<PerformanceId> = find_redundant(team, candidate_times, performances)
        .into_iter()
        .map(|p| p.id.clone())
        .collect();
    let overbookings: Vec<OverbookingWarning> =
        projected_overbookings(catalog, team, candidate_times, performances);

    if redundant.is_empty() && overbookings.is_empty() {
        SaveGate::Clear
    } else if force {
        SaveGate::Overridden {
            redundant,
            overbookings,
        }
    } else {
        SaveGate::Blocked {
            redundant,
            overbookings,
        }
    }
}
