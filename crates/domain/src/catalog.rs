// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The show catalog: the fixed set of show types the theater runs.
//!
//! ## Invariants
//!
//! - At least one show type exists
//! - Show type identifiers are non-empty and unique
//! - Regular show types require at least one team
//! - No two regular show types share a `(weekday, hour, minute)` slot
//! - The catch-all show type exists and is ad-hoc
//!
//! A catalog that violates any of these is rejected at construction,
//! so reverse lookup of a show time can never be ambiguous.

use crate::error::DomainError;
use crate::show_type::{ShowType, SlotTime};
use crate::types::ShowTypeId;
use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// The validated, immutable show catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCatalog {
    timezone: Tz,
    show_types: Vec<ShowType>,
    catch_all: usize,
}

impl ShowCatalog {
    /// The timezone used when a catalog document does not name one.
    pub const DEFAULT_TIMEZONE: &'static str = "America/Los_Angeles";

    /// Identifier of the catch-all show type in the built-in catalog.
    pub const SPECIAL: &'static str = "special";

    /// Creates a validated catalog.
    ///
    /// # Arguments
    ///
    /// * `timezone` - Theater timezone used to read weekday and time of day
    /// * `show_types` - Catalog entries, in lookup order
    /// * `catch_all` - Identifier of the ad-hoc show type unresolvable times are filed under
    ///
    /// # Errors
    ///
    /// Returns an error if any catalog invariant is violated.
    pub fn new(
        timezone: Tz,
        show_types: Vec<ShowType>,
        catch_all: &ShowTypeId,
    ) -> Result<Self, DomainError> {
        validate_show_types(&show_types)?;

        let catch_all_index: usize = show_types
            .iter()
            .position(|s| s.id() == catch_all)
            .ok_or_else(|| DomainError::CatchAllNotFound(catch_all.value().to_string()))?;

        if show_types[catch_all_index].is_regular() {
            return Err(DomainError::CatchAllNotAdHoc(catch_all.value().to_string()));
        }

        Ok(Self {
            timezone,
            show_types,
            catch_all: catch_all_index,
        })
    }

    /// The theater's built-in catalog.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the built-in entries satisfy every invariant.
    pub fn theater_default() -> Result<Self, DomainError> {
        let timezone: Tz = parse_timezone(Self::DEFAULT_TIMEZONE)?;
        let show_types: Vec<ShowType> = vec![
            ShowType::regular(
                "cageMatch",
                "Cage Match",
                Weekday::Sun,
                SlotTime::new(19, 0)?,
                2,
            ),
            ShowType::regular(
                "haroldNight",
                "Harold Night",
                Weekday::Tue,
                SlotTime::new(20, 0)?,
                3,
            ),
            ShowType::regular(
                "fridayLate",
                "Friday Late Show",
                Weekday::Fri,
                SlotTime::new(21, 30)?,
                2,
            ),
            ShowType::regular(
                "saturdayShowcase",
                "Saturday Showcase",
                Weekday::Sat,
                SlotTime::new(19, 30)?,
                4,
            ),
            ShowType::ad_hoc(Self::SPECIAL, "Special Event"),
            ShowType::ad_hoc("festival", "Festival"),
        ];
        Self::new(timezone, show_types, &ShowTypeId::new(Self::SPECIAL))
    }

    /// Parses and validates a catalog from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the catalog is invalid.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: CatalogConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::CatalogParseError(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Builds a catalog from its configuration form.
    ///
    /// # Errors
    ///
    /// Returns an error if a field cannot be parsed or the catalog is invalid.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, DomainError> {
        let timezone: Tz =
            parse_timezone(config.timezone.as_deref().unwrap_or(Self::DEFAULT_TIMEZONE))?;
        let show_types: Vec<ShowType> = config
            .show_types
            .iter()
            .map(ShowTypeConfig::to_show_type)
            .collect::<Result<_, _>>()?;
        Self::new(timezone, show_types, &ShowTypeId::new(&config.catch_all))
    }

    /// Returns the configuration form of this catalog.
    #[must_use]
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            timezone: Some(self.timezone.name().to_string()),
            catch_all: self.catch_all().id().value().to_string(),
            show_types: self.show_types.iter().map(ShowTypeConfig::from).collect(),
        }
    }

    /// Returns a copy of this catalog evaluated in a different timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns the theater timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns all show types in catalog order.
    #[must_use]
    pub fn show_types(&self) -> &[ShowType] {
        &self.show_types
    }

    /// Returns the regular show types in catalog order.
    pub fn regular_show_types(&self) -> impl Iterator<Item = &ShowType> {
        self.show_types.iter().filter(|s| s.is_regular())
    }

    /// Looks up a show type by identifier.
    #[must_use]
    pub fn get(&self, id: &ShowTypeId) -> Option<&ShowType> {
        self.show_types.iter().find(|s| s.id() == id)
    }

    /// Returns the catch-all show type.
    #[must_use]
    pub fn catch_all(&self) -> &ShowType {
        &self.show_types[self.catch_all]
    }

    /// Reverse lookup: the show type whose slot an instant falls on.
    ///
    /// The instant is read in the theater timezone and matched on weekday,
    /// hour and minute. Returns `None` when no regular show type matches.
    #[must_use]
    pub fn resolve(&self, show_time: DateTime<Utc>) -> Option<&ShowType> {
        let local = show_time.with_timezone(&self.timezone).naive_local();
        self.show_types.iter().find(|s| s.matches_local(&local))
    }
}

/// Serialized form of a catalog, as read from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// IANA timezone name. Defaults to [`ShowCatalog::DEFAULT_TIMEZONE`].
    #[serde(default)]
    pub timezone: Option<String>,
    /// Identifier of the catch-all show type.
    pub catch_all: String,
    /// Catalog entries.
    pub show_types: Vec<ShowTypeConfig>,
}

/// Serialized form of a single show type.
///
/// `weekday`, `time` and `required_teams` must all be present (regular
/// show) or all be absent (ad-hoc show).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowTypeConfig {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Weekday name, e.g. `Sunday` or `sun`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    /// Slot time as `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Teams needed for a full show.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_teams: Option<u32>,
}

impl ShowTypeConfig {
    fn to_show_type(&self) -> Result<ShowType, DomainError> {
        match (&self.weekday, &self.time, self.required_teams) {
            (Some(weekday), Some(time), Some(required_teams)) => {
                let weekday: Weekday = Weekday::from_str(weekday.trim())
                    .map_err(|_| DomainError::InvalidWeekday(weekday.clone()))?;
                Ok(ShowType::regular(
                    &self.id,
                    &self.display_name,
                    weekday,
                    SlotTime::parse(time)?,
                    required_teams,
                ))
            }
            (None, None, None) => Ok(ShowType::ad_hoc(&self.id, &self.display_name)),
            _ => Err(DomainError::PartialRecurrence {
                show_type: self.id.clone(),
            }),
        }
    }
}

impl From<&ShowType> for ShowTypeConfig {
    fn from(show_type: &ShowType) -> Self {
        Self {
            id: show_type.id().value().to_string(),
            display_name: show_type.display_name().to_string(),
            weekday: show_type.weekday().map(|w| w.to_string()),
            time: show_type.default_time().map(|t| t.to_string()),
            required_teams: show_type.required_teams(),
        }
    }
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns an error if the name is not a known timezone.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

fn validate_show_types(show_types: &[ShowType]) -> Result<(), DomainError> {
    if show_types.is_empty() {
        return Err(DomainError::EmptyCatalog);
    }

    let mut seen_ids: BTreeSet<&ShowTypeId> = BTreeSet::new();
    let mut slots: BTreeMap<(u8, SlotTime), &ShowTypeId> = BTreeMap::new();

    for show_type in show_types {
        if show_type.id().value().trim().is_empty() {
            return Err(DomainError::InvalidShowTypeId(String::from(
                "Show type id cannot be empty",
            )));
        }
        if !seen_ids.insert(show_type.id()) {
            return Err(DomainError::DuplicateShowTypeId(
                show_type.id().value().to_string(),
            ));
        }

        let Some(recurrence) = show_type.recurrence() else {
            continue;
        };

        if recurrence.required_teams() == 0 {
            return Err(DomainError::InvalidRequiredTeams {
                show_type: show_type.id().value().to_string(),
                count: 0,
            });
        }

        let weekday_index: u8 = u8::try_from(recurrence.weekday().num_days_from_monday())
            .map_err(|_| DomainError::InvalidWeekday(recurrence.weekday().to_string()))?;
        let key = (weekday_index, recurrence.default_time());
        if let Some(first) = slots.insert(key, show_type.id()) {
            return Err(DomainError::SlotCollision {
                first: first.value().to_string(),
                second: show_type.id().value().to_string(),
                weekday: recurrence.weekday(),
                hour: recurrence.default_time().hour(),
                minute: recurrence.default_time().minute(),
            });
        }
    }

    Ok(())
}
