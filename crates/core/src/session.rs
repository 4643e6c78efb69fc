// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-scoped schedule cache.
//!
//! A `ScheduleSession` owns the show catalog, the slot horizon and the
//! current schedule snapshot. All reads go through the snapshot; all
//! writes go through `commit`, which persists to the store and then
//! reloads the whole collection.
//!
//! ## Invariants
//!
//! - The snapshot is only ever replaced wholesale, never patched.
//! - Every refresh advances the snapshot version by exactly one.
//! - The classifier always sees a complete snapshot.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{PerformanceIdAllocator, ScheduleSnapshot, TransitionResult};
use crate::store::{ScheduleStore, StoreContents};
use chrono::{DateTime, Utc};
use lineup_domain::{
    Classification, DomainError, Performance, ShowCatalog, ShowType, ShowTypeId, Slot,
    SlotHorizon, TeamName, classify_with_slots, find_redundant, next_open_slot, upcoming_slots,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The schedule cache for one running service.
#[derive(Debug, Clone)]
pub struct ScheduleSession {
    catalog: ShowCatalog,
    horizon: SlotHorizon,
    snapshot: Arc<ScheduleSnapshot>,
    ids: PerformanceIdAllocator,
}

impl ScheduleSession {
    /// Creates a session with an empty snapshot at version 0.
    #[must_use]
    pub fn new(catalog: ShowCatalog, horizon: SlotHorizon) -> Self {
        Self {
            catalog,
            horizon,
            snapshot: Arc::new(ScheduleSnapshot::new()),
            ids: PerformanceIdAllocator::new(),
        }
    }

    /// Creates a session and loads the store into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open<S: ScheduleStore + ?Sized>(
        catalog: ShowCatalog,
        horizon: SlotHorizon,
        store: &S,
    ) -> Result<Self, CoreError> {
        let mut session: Self = Self::new(catalog, horizon);
        session.refresh(store)?;
        Ok(session)
    }

    /// Reloads the complete collection from the store.
    ///
    /// # Returns
    ///
    /// The new snapshot version.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read. The previous snapshot
    /// stays in place.
    pub fn refresh<S: ScheduleStore + ?Sized>(&mut self, store: &S) -> Result<u64, CoreError> {
        let contents: StoreContents = store.load()?;
        let version: u64 = self.snapshot.version + 1;

        self.ids.observe(&contents.performances);
        self.snapshot = Arc::new(ScheduleSnapshot::from_contents(version, contents));

        info!(
            version,
            performances = self.snapshot.performances.len(),
            teams = self.snapshot.teams.len(),
            "Schedule refreshed"
        );
        Ok(version)
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ScheduleSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// The show catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ShowCatalog {
        &self.catalog
    }

    /// The slot horizon.
    #[must_use]
    pub const fn horizon(&self) -> SlotHorizon {
        self.horizon
    }

    /// Upcoming recurring slots from `now`.
    #[must_use]
    pub fn slots(&self, now: DateTime<Utc>) -> Vec<Slot> {
        upcoming_slots(&self.catalog, now, self.horizon)
    }

    /// Classifies the current snapshot, including empty upcoming slots.
    ///
    /// Every list in the result is sorted ascending.
    #[must_use]
    pub fn classification(&self, now: DateTime<Utc>) -> Classification {
        let snapshot: Arc<ScheduleSnapshot> = self.snapshot();
        classify_with_slots(&self.catalog, &snapshot.performances, &self.slots(now)).sorted()
    }

    /// Suggests the next slot of a show type that still needs teams.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(time))` for the earliest unbooked slot, or failing that the earliest underbooked one
    /// * `Ok(None)` if every upcoming slot is full
    ///
    /// # Errors
    ///
    /// Returns an error if the show type is unknown or has no recurring slot.
    pub fn suggest_next_slot(
        &self,
        show_type: &ShowTypeId,
        now: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, CoreError> {
        let definition: &ShowType = self
            .catalog
            .get(show_type)
            .ok_or_else(|| DomainError::ShowTypeNotFound(show_type.value().to_string()))?;
        if !definition.is_regular() {
            return Err(DomainError::NotRecurring(show_type.value().to_string()).into());
        }

        let suggestion: Option<DateTime<Utc>> =
            next_open_slot(&self.classification(now), show_type, now);
        debug!(show_type = %show_type, ?suggestion, "Suggested next slot");
        Ok(suggestion)
    }

    /// Existing performances that would make booking `team` into
    /// `candidate_times` redundant.
    #[must_use]
    pub fn check_redundant(
        &self,
        team: &TeamName,
        candidate_times: &BTreeSet<DateTime<Utc>>,
    ) -> Vec<Performance> {
        find_redundant(team, candidate_times, &self.snapshot.performances)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Applies a command, persists the result and reloads from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is rejected or the store write
    /// fails; the cached snapshot is then unchanged. If the write succeeds
    /// but the reload fails, returns [`CoreError::ReloadAfterWrite`]: the
    /// store holds the change and the cached snapshot is stale until the
    /// next successful [`Self::refresh`].
    pub fn commit<S: ScheduleStore + ?Sized>(
        &mut self,
        store: &mut S,
        command: Command,
    ) -> Result<TransitionResult, CoreError> {
        let result: TransitionResult =
            apply(&self.snapshot, &self.catalog, command, &mut self.ids)?;

        store.replace(result.new_snapshot.to_contents())?;
        let version: u64 = self.refresh(&*store).map_err(|err| match err {
            CoreError::Store(store_err) => {
                warn!(error = %store_err, "Reload after write failed; snapshot is stale");
                CoreError::ReloadAfterWrite(store_err)
            }
            other => other,
        })?;

        info!(
            action = %result.change.action,
            affected = result.change.affected.len(),
            version,
            "Committed schedule change"
        );
        Ok(result)
    }
}
