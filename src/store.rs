//! Daily progress state machine: rollover on load, streak advance on commit.
//!
//! The store never holds the record itself. Callers own a [`ProgressRecord`]
//! and hand it in by `&mut`; every mutating call writes the whole record
//! through to storage before returning.

use crate::catalog::Catalog;
use crate::errors::StoreError;
use crate::models::ProgressRecord;
use crate::storage::KeyValueStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

pub const STORAGE_KEY: &str = "internship-daily-tracker";

/// Result of [`DailyProgressStore::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitOutcome {
    /// The streak advanced on this commit. True at most once per calendar day.
    pub just_completed: bool,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct DailyProgressStore<S> {
    storage: S,
    catalog: Catalog,
}

impl<S: KeyValueStore> DailyProgressStore<S> {
    pub fn new(storage: S, catalog: Catalog) -> Self {
        Self { storage, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> ProgressRecord {
        self.load_at(today())
    }

    /// Reads the stored record, falling back to defaults, and applies rollover.
    /// Nothing is written.
    pub fn load_at(&self, today: NaiveDate) -> ProgressRecord {
        let Some(mut record) = self.read_record() else {
            return ProgressRecord::fresh(today);
        };
        self.roll_over_at(&mut record, today);
        record
    }

    pub fn roll_over(&self, record: &mut ProgressRecord) -> bool {
        self.roll_over_at(record, today())
    }

    /// Clears the per-day fields when the record was last saved on another day,
    /// then stamps it as today's. Returns whether anything was cleared.
    pub fn roll_over_at(&self, record: &mut ProgressRecord, today: NaiveDate) -> bool {
        let last_saved = record.last_saved_date.or(record.last_completed_date);
        let stale = last_saved != Some(today);
        if stale {
            debug!(?last_saved, %today, "rolling over daily progress");
            record.checked_items.clear();
            record.applications_today = 0;
        }
        record.last_saved_date = Some(today);
        stale
    }

    pub fn toggle_item(
        &self,
        record: &mut ProgressRecord,
        id: &str,
        value: bool,
    ) -> Result<(), StoreError> {
        if !self.catalog.contains(id) {
            return Err(StoreError::UnknownItem(id.to_string()));
        }
        record.checked_items.insert(id.to_string(), value);
        Ok(())
    }

    pub fn checked_count(&self, record: &ProgressRecord) -> usize {
        self.catalog.ids().filter(|id| record.is_checked(id)).count()
    }

    pub fn is_complete(&self, record: &ProgressRecord) -> bool {
        self.catalog.ids().all(|id| record.is_checked(id))
    }

    pub fn commit(&self, record: &mut ProgressRecord) -> CommitOutcome {
        self.commit_at(record, today())
    }

    pub fn commit_at(&self, record: &mut ProgressRecord, today: NaiveDate) -> CommitOutcome {
        let mut outcome = CommitOutcome::default();
        if self.is_complete(record) && record.last_completed_date != Some(today) {
            record.streak = record.streak.saturating_add(1);
            record.last_completed_date = Some(today);
            outcome.just_completed = true;
            info!(streak = record.streak, "all platforms checked for {today}");
        }

        record.last_saved_date = Some(today);
        self.persist(record);
        outcome
    }

    pub fn reset_today(&self, record: &mut ProgressRecord) {
        self.reset_today_at(record, today())
    }

    pub fn reset_today_at(&self, record: &mut ProgressRecord, today: NaiveDate) {
        record.checked_items.clear();
        record.last_saved_date = Some(today);
        self.persist(record);
    }

    pub fn adjust_application_count(&self, record: &mut ProgressRecord, delta: i64) {
        let next = i64::from(record.applications_today).saturating_add(delta);
        record.applications_today = next.clamp(0, i64::from(u32::MAX)) as u32;
        self.persist(record);
    }

    fn read_record(&self) -> Option<ProgressRecord> {
        match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("ignoring malformed progress record: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!("failed to read progress record: {err}");
                None
            }
        }
    }

    /// Write failures leave the in-memory record authoritative for the session.
    fn persist(&self, record: &ProgressRecord) {
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to encode progress record: {err}");
                return;
            }
        };
        match self.storage.set(STORAGE_KEY, &payload) {
            Ok(()) => debug!("progress record saved"),
            Err(err) => warn!("discarding progress record write: {err}"),
        }
    }
}
