// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Enumeration of upcoming recurring show slots.
//!
//! Grouping performances by time can only discover slots that already
//! have bookings. To report empty slots as unbooked, the catalog's
//! recurring slots are enumerated forward from a reference instant for a
//! configurable number of occurrences and classified alongside the
//! booked times.
//!
//! ## Invariants
//!
//! - Slot wall-clock times are interpreted in the catalog timezone
//! - A slot exactly at the reference instant is included
//! - Local times skipped by a DST transition produce no slot
//! - Ambiguous local times resolve to the earliest instant

use crate::catalog::ShowCatalog;
use crate::classification::Classification;
use crate::error::DomainError;
use crate::show_type::ShowType;
use crate::types::ShowTypeId;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// How many occurrences per recurring show type to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotHorizon {
    occurrences: u32,
}

impl SlotHorizon {
    /// Default number of occurrences per show type.
    pub const DEFAULT_OCCURRENCES: u32 = 8;

    /// Largest accepted horizon (two years of weekly shows).
    pub const MAX_OCCURRENCES: u32 = 104;

    /// Creates a new `SlotHorizon`.
    ///
    /// # Errors
    ///
    /// Returns an error if `occurrences` is zero or above [`Self::MAX_OCCURRENCES`].
    pub const fn new(occurrences: u32) -> Result<Self, DomainError> {
        if occurrences == 0 || occurrences > Self::MAX_OCCURRENCES {
            return Err(DomainError::InvalidHorizon { occurrences });
        }
        Ok(Self { occurrences })
    }

    /// Returns the number of occurrences.
    #[must_use]
    pub const fn occurrences(&self) -> u32 {
        self.occurrences
    }
}

impl Default for SlotHorizon {
    fn default() -> Self {
        Self {
            occurrences: Self::DEFAULT_OCCURRENCES,
        }
    }
}

/// One occurrence of a recurring show type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    /// The show type this slot belongs to.
    pub show_type: ShowTypeId,
    /// The instant the show starts.
    pub time: DateTime<Utc>,
}

/// Weeks [`upcoming_slots`] may skip per show type: one for an occurrence
/// earlier on the start day, plus one spring-forward gap per year of horizon.
const MAX_SKIPPED_WEEKS: u32 = 4;

/// Resolves a local wall-clock date and time in `tz` to a UTC instant.
fn resolve_local(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Enumerates the next occurrences of every regular show type.
///
/// # Arguments
///
/// * `catalog` - The show catalog
/// * `from` - Reference instant; slots before it are not produced
/// * `horizon` - Occurrences to produce per show type
///
/// # Returns
///
/// Slots sorted ascending by time, then by show type identifier.
#[must_use]
pub fn upcoming_slots(catalog: &ShowCatalog, from: DateTime<Utc>, horizon: SlotHorizon) -> Vec<Slot> {
    let tz: Tz = catalog.timezone();
    let start_date: NaiveDate = from.with_timezone(&tz).date_naive();
    let wanted: u32 = horizon.occurrences();
    let mut slots: Vec<Slot> = Vec::new();

    for show_type in catalog.regular_show_types() {
        let Some(recurrence) = show_type.recurrence() else {
            continue;
        };
        let time: NaiveTime = recurrence.default_time().as_naive_time();

        // Days until the first matching weekday, counting today
        let days_ahead: i64 = (i64::from(recurrence.weekday().num_days_from_monday())
            - i64::from(start_date.weekday().num_days_from_monday()))
        .rem_euclid(7);
        let mut date: NaiveDate = start_date + Duration::days(days_ahead);

        let mut produced: u32 = 0;
        // Weeks lost to an occurrence earlier today or a DST gap are made up
        let max_weeks: u32 = wanted.saturating_add(MAX_SKIPPED_WEEKS);
        for _ in 0..max_weeks {
            if produced == wanted {
                break;
            }
            if let Some(instant) = resolve_local(tz, date, time) {
                if instant >= from {
                    slots.push(Slot {
                        show_type: show_type.id().clone(),
                        time: instant,
                    });
                    produced += 1;
                }
            }
            date += Duration::days(7);
        }
    }

    slots.sort_by(|a, b| a.time.cmp(&b.time).then_with(|| a.show_type.cmp(&b.show_type)));
    slots
}

/// Places a chosen calendar date onto a show type's canonical slot time.
///
/// # Errors
///
/// Returns an error if:
/// - The show type is ad-hoc
/// - The date does not fall on the show type's weekday
/// - The slot time does not exist on that date in the theater timezone
pub fn normalize_to_slot(
    catalog: &ShowCatalog,
    show_type: &ShowType,
    date: NaiveDate,
) -> Result<DateTime<Utc>, DomainError> {
    let recurrence = show_type
        .recurrence()
        .ok_or_else(|| DomainError::NotRecurring(show_type.id().value().to_string()))?;

    if date.weekday() != recurrence.weekday() {
        return Err(DomainError::WeekdayMismatch {
            show_type: show_type.id().value().to_string(),
            expected: recurrence.weekday(),
            actual: date.weekday(),
        });
    }

    let time: NaiveTime = recurrence.default_time().as_naive_time();
    resolve_local(catalog.timezone(), date, time)
        .ok_or(DomainError::UnresolvableLocalTime { date, time })
}

/// Suggests the next slot of a show type that still needs teams.
///
/// Prefers the earliest unbooked slot at or after `not_before`, then the
/// earliest underbooked one. Returns `None` when every known slot is full.
#[must_use]
pub fn next_open_slot(
    classification: &Classification,
    show_type: &ShowTypeId,
    not_before: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    let earliest_in = |times: Option<&Vec<DateTime<Utc>>>| {
        times.and_then(|times| times.iter().filter(|t| **t >= not_before).min().copied())
    };

    earliest_in(classification.unbooked.get(show_type))
        .or_else(|| earliest_in(classification.underbooked.get(show_type)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_bounds() {
        assert!(SlotHorizon::new(0).is_err());
        assert!(SlotHorizon::new(1).is_ok());
        assert!(SlotHorizon::new(104).is_ok());
        assert!(matches!(
            SlotHorizon::new(105),
            Err(DomainError::InvalidHorizon { occurrences: 105 })
        ));
    }

    #[test]
    fn test_default_horizon() {
        assert_eq!(SlotHorizon::default().occurrences(), 8);
    }
}
