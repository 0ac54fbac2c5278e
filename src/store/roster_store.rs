//! The per-location, per-week roster store.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::{watch, RwLock};
use tracing::info;

use crate::models::{IsoYearWeek, Roster, RosterKey, Shift, ShiftId};

/// One stored roster plus the channel its snapshots are published on.
struct RosterEntry {
    roster: Roster,
    tx: watch::Sender<Roster>,
}

impl RosterEntry {
    fn new() -> Self {
        let (tx, _) = watch::channel(Roster::default());
        Self {
            roster: Roster::default(),
            tx,
        }
    }

    fn publish(&self) {
        // Receivers may all have gone away; that is not an error.
        let _ = self.tx.send(self.roster.clone());
    }
}

/// Stores rosters keyed by (location, ISO week).
///
/// Writes are whole-record overwrites at the shift leaf with last-write-wins
/// semantics: there is no optimistic concurrency and no merge, so two
/// schedulers assigning overlapping shifts both succeed. The domain
/// tolerates this; a double-booking is reconciled by a human.
///
/// Every write publishes the new snapshot on the roster's watch channel, so
/// read-your-own-write is guaranteed through [`RosterStore::subscribe`],
/// never through a separate synchronous read path.
pub struct RosterStore {
    inner: RwLock<HashMap<RosterKey, RosterEntry>>,
}

impl RosterStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or overwrites one shift record.
    ///
    /// With `shift_id` of `None` a fresh id is minted and returned;
    /// otherwise the record at that id is replaced in full, never merged
    /// field by field. Fields omitted by the caller are gone after the
    /// write.
    pub async fn upsert_shift(
        &self,
        location: &str,
        week: IsoYearWeek,
        employee_id: &str,
        date: NaiveDate,
        shift_id: Option<ShiftId>,
        shift: Shift,
    ) -> ShiftId {
        let id = shift_id.unwrap_or_else(ShiftId::mint);
        let key = RosterKey::new(location, week);

        let mut inner = self.inner.write().await;
        let entry = inner.entry(key).or_insert_with(RosterEntry::new);
        entry
            .roster
            .shifts
            .entry(employee_id.to_string())
            .or_default()
            .entry(date)
            .or_default()
            .insert(id, shift);
        entry.publish();

        info!(
            location = %location,
            week = %week,
            employee_id = %employee_id,
            date = %date,
            shift_id = %id,
            "shift upserted"
        );
        id
    }

    /// Deletes one shift record. Unknown addresses are a no-op.
    pub async fn remove_shift(
        &self,
        location: &str,
        week: IsoYearWeek,
        employee_id: &str,
        date: NaiveDate,
        shift_id: ShiftId,
    ) {
        let key = RosterKey::new(location, week);
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.get_mut(&key) else {
            return;
        };

        let Some(by_date) = entry.roster.shifts.get_mut(employee_id) else {
            return;
        };
        let Some(by_id) = by_date.get_mut(&date) else {
            return;
        };
        if by_id.remove(&shift_id).is_none() {
            return;
        }

        // Prune empty buckets so snapshots stay tidy.
        if by_id.is_empty() {
            by_date.remove(&date);
        }
        if by_date.is_empty() {
            entry.roster.shifts.remove(employee_id);
        }
        entry.publish();

        info!(
            location = %location,
            week = %week,
            employee_id = %employee_id,
            date = %date,
            shift_id = %shift_id,
            "shift removed"
        );
    }

    /// Replaces the revenue figure for one date.
    pub async fn set_revenue(
        &self,
        location: &str,
        week: IsoYearWeek,
        date: NaiveDate,
        amount: Decimal,
    ) {
        let key = RosterKey::new(location, week);
        let mut inner = self.inner.write().await;
        let entry = inner.entry(key).or_insert_with(RosterEntry::new);
        entry.roster.revenue.insert(date, amount);
        entry.publish();
    }

    /// Returns the current snapshot of one roster, empty if none exists.
    pub async fn get_roster(&self, location: &str, week: IsoYearWeek) -> Roster {
        let key = RosterKey::new(location, week);
        let inner = self.inner.read().await;
        inner
            .get(&key)
            .map(|entry| entry.roster.clone())
            .unwrap_or_default()
    }

    /// Subscribes to snapshot updates for one roster.
    ///
    /// The receiver immediately holds the current snapshot and observes
    /// every subsequent write, including the subscriber's own.
    pub async fn subscribe(&self, location: &str, week: IsoYearWeek) -> watch::Receiver<Roster> {
        let key = RosterKey::new(location, week);
        let mut inner = self.inner.write().await;
        let entry = inner.entry(key).or_insert_with(RosterEntry::new);
        entry.tx.subscribe()
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
