// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show capacity classification.
//!
//! Every distinct show time in a performance snapshot is placed into
//! exactly one capacity bucket, keyed by the show type it resolves to:
//!
//! | booked teams `k`        | regular show (needs `n`) | ad-hoc show |
//! |-------------------------|--------------------------|-------------|
//! | `k == 0`                | unbooked                 | unbooked    |
//! | `0 < k < n`             | underbooked              | underbooked |
//! | `k == n`                | fully booked             | underbooked |
//! | `k > n`                 | overbooked               | underbooked |
//!
//! Times that resolve to no show type are filed under the catalog's
//! catch-all show type as underbooked, whatever their count.
//!
//! Classification is **computed**, not stored. It is a pure function of
//! a complete performance snapshot and is always rebuilt from scratch.

use crate::catalog::ShowCatalog;
use crate::slots::Slot;
use crate::types::{Performance, ShowTypeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// How full a show occurrence is relative to its team target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityBucket {
    /// No teams booked.
    Unbooked,
    /// Some teams booked, fewer than required (or any for ad-hoc shows).
    Underbooked,
    /// Exactly the required number of teams.
    FullyBooked,
    /// More teams than required.
    Overbooked,
}

impl CapacityBucket {
    /// All buckets, in fill order.
    pub const ALL: [Self; 4] = [
        Self::Unbooked,
        Self::Underbooked,
        Self::FullyBooked,
        Self::Overbooked,
    ];

    /// Converts this bucket to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unbooked => "unbooked",
            Self::Underbooked => "underbooked",
            Self::FullyBooked => "fully_booked",
            Self::Overbooked => "overbooked",
        }
    }
}

impl std::fmt::Display for CapacityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the capacity bucket for a booked count.
///
/// `required` is `None` for ad-hoc show types, which have no notion of full.
#[must_use]
pub fn bucket_for(count: usize, required: Option<u32>) -> CapacityBucket {
    if count == 0 {
        return CapacityBucket::Unbooked;
    }
    let Some(required) = required else {
        return CapacityBucket::Underbooked;
    };
    let required: usize = usize::try_from(required).unwrap_or(usize::MAX);
    match count.cmp(&required) {
        std::cmp::Ordering::Less => CapacityBucket::Underbooked,
        std::cmp::Ordering::Equal => CapacityBucket::FullyBooked,
        std::cmp::Ordering::Greater => CapacityBucket::Overbooked,
    }
}

/// Show times per show type.
pub type SlotMap = BTreeMap<ShowTypeId, Vec<DateTime<Utc>>>;

/// The four capacity maps for one performance snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Slots with no teams.
    pub unbooked: SlotMap,
    /// Slots short of their target, and every ad-hoc or unresolved slot with bookings.
    pub underbooked: SlotMap,
    /// Slots at exactly their target.
    pub fully_booked: SlotMap,
    /// Slots over their target.
    pub overbooked: SlotMap,
}

impl Classification {
    /// Creates an empty classification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map for a bucket.
    #[must_use]
    pub const fn map(&self, bucket: CapacityBucket) -> &SlotMap {
        match bucket {
            CapacityBucket::Unbooked => &self.unbooked,
            CapacityBucket::Underbooked => &self.underbooked,
            CapacityBucket::FullyBooked => &self.fully_booked,
            CapacityBucket::Overbooked => &self.overbooked,
        }
    }

    const fn map_mut(&mut self, bucket: CapacityBucket) -> &mut SlotMap {
        match bucket {
            CapacityBucket::Unbooked => &mut self.unbooked,
            CapacityBucket::Underbooked => &mut self.underbooked,
            CapacityBucket::FullyBooked => &mut self.fully_booked,
            CapacityBucket::Overbooked => &mut self.overbooked,
        }
    }

    fn insert(&mut self, bucket: CapacityBucket, show_type: &ShowTypeId, time: DateTime<Utc>) {
        self.map_mut(bucket)
            .entry(show_type.clone())
            .or_default()
            .push(time);
    }

    /// Returns the bucket a `(show type, time)` pair was placed in, if any.
    #[must_use]
    pub fn bucket_of(&self, show_type: &ShowTypeId, time: DateTime<Utc>) -> Option<CapacityBucket> {
        CapacityBucket::ALL.into_iter().find(|bucket| {
            self.map(*bucket)
                .get(show_type)
                .is_some_and(|times| times.contains(&time))
        })
    }

    /// Returns whether all four maps are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        CapacityBucket::ALL
            .into_iter()
            .all(|bucket| self.map(bucket).is_empty())
    }

    /// Returns this classification with every time list sorted ascending.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        for bucket in CapacityBucket::ALL {
            for times in self.map_mut(bucket).values_mut() {
                times.sort_unstable();
            }
        }
        self
    }
}

/// Counts performances per exact show time.
fn count_by_time(performances: &[Performance]) -> BTreeMap<DateTime<Utc>, usize> {
    let mut counts: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
    for performance in performances {
        *counts.entry(performance.show_time).or_insert(0) += 1;
    }
    counts
}

fn classify_grouped_time(
    catalog: &ShowCatalog,
    classification: &mut Classification,
    time: DateTime<Utc>,
    count: usize,
) {
    match catalog.resolve(time) {
        Some(show_type) => {
            let bucket: CapacityBucket = bucket_for(count, show_type.required_teams());
            classification.insert(bucket, show_type.id(), time);
        }
        None => {
            classification.insert(CapacityBucket::Underbooked, catalog.catch_all().id(), time);
        }
    }
}

/// Classifies every distinct show time in a performance snapshot.
///
/// Performances are grouped by exact instant; there is no tolerance
/// window. Only times that appear in the snapshot are reported, so
/// nothing lands in `unbooked` here. Use [`classify_with_slots`] to
/// report empty slots as well.
///
/// Within each list, times appear in grouping order. Call
/// [`Classification::sorted`] when an ordering is needed.
#[must_use]
pub fn classify(catalog: &ShowCatalog, performances: &[Performance]) -> Classification {
    let mut classification: Classification = Classification::new();
    for (time, count) in count_by_time(performances) {
        classify_grouped_time(catalog, &mut classification, time, count);
    }
    classification
}

/// Classifies a snapshot together with enumerated catalog slots.
///
/// Each slot is classified under its own show type using the number of
/// performances at its instant, defaulting to zero. Remaining booked
/// times that no slot covers are classified as in [`classify`]. Every
/// instant is classified exactly once.
#[must_use]
pub fn classify_with_slots(
    catalog: &ShowCatalog,
    performances: &[Performance],
    slots: &[Slot],
) -> Classification {
    let counts: BTreeMap<DateTime<Utc>, usize> = count_by_time(performances);
    let mut classification: Classification = Classification::new();
    let mut covered: BTreeSet<DateTime<Utc>> = BTreeSet::new();

    for slot in slots {
        let Some(show_type) = catalog.get(&slot.show_type) else {
            continue;
        };
        if !covered.insert(slot.time) {
            continue;
        }
        let count: usize = counts.get(&slot.time).copied().unwrap_or(0);
        let bucket: CapacityBucket = bucket_for(count, show_type.required_teams());
        classification.insert(bucket, show_type.id(), slot.time);
    }

    for (time, count) in counts {
        if !covered.contains(&time) {
            classify_grouped_time(catalog, &mut classification, time, count);
        }
    }

    classification
}
