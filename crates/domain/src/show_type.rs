// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Show types: the named categories of slot a performance can occupy.
//!
//! A show type is either *regular* (it recurs weekly on a fixed weekday
//! at a fixed wall-clock time and needs a fixed number of teams) or
//! *ad-hoc* (specials, festivals). The three recurrence fields travel
//! together in [`Recurrence`], so a show type with only part of a
//! recurrence cannot be constructed.

use crate::error::DomainError;
use crate::types::ShowTypeId;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Wall-clock time of day (hour, minute) of a recurring slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u8,
    minute: u8,
}

impl SlotTime {
    /// Creates a new `SlotTime`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour` is not below 24 or `minute` is not below 60.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(hour: u32, minute: u32) -> Result<Self, DomainError> {
        if hour >= 24 || minute >= 60 {
            return Err(DomainError::InvalidSlotTime { hour, minute });
        }
        // Both values were range-checked above.
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parses an `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid 24-hour `HH:MM` time.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let parsed: NaiveTime = NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map_err(|_| DomainError::InvalidSlotTimeString(value.to_string()))?;
        Self::new(parsed.hour(), parsed.minute())
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Converts to a `NaiveTime` with zero seconds.
    #[must_use]
    pub fn as_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The weekly slot of a regular show type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    weekday: Weekday,
    default_time: SlotTime,
    required_teams: u32,
}

impl Recurrence {
    /// Creates a new `Recurrence`.
    #[must_use]
    pub const fn new(weekday: Weekday, default_time: SlotTime, required_teams: u32) -> Self {
        Self {
            weekday,
            default_time,
            required_teams,
        }
    }

    /// Returns the weekday the show recurs on.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the canonical wall-clock time of the slot.
    #[must_use]
    pub const fn default_time(&self) -> SlotTime {
        self.default_time
    }

    /// Returns the number of teams a fully booked occurrence has.
    #[must_use]
    pub const fn required_teams(&self) -> u32 {
        self.required_teams
    }
}

/// A catalog entry describing one kind of show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowType {
    id: ShowTypeId,
    display_name: String,
    recurrence: Option<Recurrence>,
}

impl ShowType {
    /// Creates a regular, weekly recurring show type.
    #[must_use]
    pub fn regular(
        id: &str,
        display_name: &str,
        weekday: Weekday,
        default_time: SlotTime,
        required_teams: u32,
    ) -> Self {
        Self {
            id: ShowTypeId::new(id),
            display_name: display_name.to_string(),
            recurrence: Some(Recurrence::new(weekday, default_time, required_teams)),
        }
    }

    /// Creates an ad-hoc show type with no fixed slot or team target.
    #[must_use]
    pub fn ad_hoc(id: &str, display_name: &str) -> Self {
        Self {
            id: ShowTypeId::new(id),
            display_name: display_name.to_string(),
            recurrence: None,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &ShowTypeId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the recurrence for regular show types.
    #[must_use]
    pub const fn recurrence(&self) -> Option<&Recurrence> {
        self.recurrence.as_ref()
    }

    /// Returns whether this show type recurs weekly.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Returns the weekday constraint, if any.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        self.recurrence.map(|r| r.weekday())
    }

    /// Returns the canonical slot time, if any.
    #[must_use]
    pub fn default_time(&self) -> Option<SlotTime> {
        self.recurrence.map(|r| r.default_time())
    }

    /// Returns the required team count, if any.
    #[must_use]
    pub fn required_teams(&self) -> Option<u32> {
        self.recurrence.map(|r| r.required_teams())
    }

    /// Returns whether a local wall-clock datetime falls on this show's slot.
    ///
    /// Only weekday, hour and minute are compared. Ad-hoc show types never match.
    #[must_use]
    pub fn matches_local(&self, local: &NaiveDateTime) -> bool {
        self.recurrence.is_some_and(|r| {
            local.weekday() == r.weekday()
                && local.hour() == u32::from(r.default_time().hour())
                && local.minute() == u32::from(r.default_time().minute())
        })
    }
}
