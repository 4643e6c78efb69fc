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

mod catalog;
mod classification;
mod conflicts;
mod error;
mod show_type;
mod slots;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogConfig, ShowCatalog, ShowTypeConfig, parse_timezone};
pub use classification::{
    CapacityBucket, Classification, SlotMap, bucket_for, classify, classify_with_slots,
};
pub use conflicts::{
    OverbookingWarning, SaveGate, evaluate_save_gate, find_redundant, projected_overbookings,
};
pub use slots::{Slot, SlotHorizon, next_open_slot, normalize_to_slot, upcoming_slots};

// Re-export public types
pub use error::DomainError;
pub use show_type::{Recurrence, ShowType, SlotTime};
pub use types::{
    Performance, PerformanceId, Performer, PerformerName, ShowTypeId, Team, TeamName,
};
pub use validation::{
    MAX_NAME_LENGTH, validate_lineup, validate_performer_name, validate_team_name,
};
