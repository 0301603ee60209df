// Copyright (c) 2025 Pocketledger Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Period registry: the set of rolling date ranges and the at-most-one-active
//! invariant.
//!
//! Periods are not a partition of time. They may overlap or leave gaps, and
//! transactions reference them only implicitly, by date-range membership
//! computed per query. Deleting or redefining a period never touches a
//! transaction.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{Period, PeriodSet};
use crate::store::{self, KvStore, KEY_PERIODS};

/// Fixed period length: end = start + 30 days, not calendar-month-aware.
pub const PERIOD_DAYS: i64 = 30;

pub struct PeriodRegistry<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> PeriodRegistry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        PeriodRegistry { store }
    }

    fn load(&self) -> PeriodSet {
        store::read_or_default(self.store, KEY_PERIODS)
    }

    fn save(&self, set: &PeriodSet) -> Result<()> {
        store::write_json(self.store, KEY_PERIODS, set)
    }

    /// All periods sorted by start date descending. Recomputed on every
    /// read; insertion order (newest prepended) breaks start-date ties.
    pub fn list(&self) -> Vec<Period> {
        let mut periods = self.load().periods;
        periods.sort_by(|a, b| b.start.cmp(&a.start));
        periods
    }

    pub fn get(&self, id: &str) -> Option<Period> {
        self.load().periods.into_iter().find(|p| p.id == id)
    }

    /// The active period, if any.
    pub fn active(&self) -> Option<Period> {
        let set = self.load();
        let active_id = set.active_id?;
        set.periods.into_iter().find(|p| p.id == active_id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.load().active_id.as_deref() == Some(id)
    }

    /// Create a period starting at `start`, spanning [`PERIOD_DAYS`] days,
    /// and make it the active one in the same write.
    pub fn create(&self, start: DateTime<Utc>, name: Option<String>) -> Result<Period> {
        let end = start + Duration::days(PERIOD_DAYS);
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => derive_name(start, end),
        };
        let period = Period {
            id: Uuid::new_v4().to_string(),
            name,
            start,
            end,
        };
        let mut set = self.load();
        set.periods.insert(0, period.clone());
        set.active_id = Some(period.id.clone());
        self.save(&set)?;
        Ok(period)
    }

    /// Make an existing period the active one. Unknown ids are a hard error
    /// so a stale id cannot silently leave the old period active.
    pub fn set_active(&self, id: &str) -> Result<()> {
        let mut set = self.load();
        if !set.periods.iter().any(|p| p.id == id) {
            return Err(Error::PeriodNotFound(id.to_string()).into());
        }
        set.active_id = Some(id.to_string());
        self.save(&set)
    }

    /// Remove a period. When the active one is removed and others remain,
    /// the survivor with the latest start date becomes active; when none
    /// remain, no period is active. Unknown ids return false without a
    /// write.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut set = self.load();
        let before = set.periods.len();
        set.periods.retain(|p| p.id != id);
        if set.periods.len() == before {
            return Ok(false);
        }
        if set.active_id.as_deref() == Some(id) {
            set.active_id = latest_start(&set.periods).map(|p| p.id.clone());
        }
        self.save(&set)?;
        Ok(true)
    }
}

/// Survivor with the maximum start date; earlier position wins ties, so the
/// result matches the head of `list()`.
fn latest_start(periods: &[Period]) -> Option<&Period> {
    periods
        .iter()
        .fold(None, |best: Option<&Period>, p| match best {
            Some(b) if b.start >= p.start => Some(b),
            _ => Some(p),
        })
}

/// Default display name for a date range, e.g. "Jan 1 - Jan 31".
pub fn derive_name(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}
