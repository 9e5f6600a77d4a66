//! In-memory flight store for tests and the demo binary.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use telegram::FlightRecord;

use crate::{FlightStore, RegionUpdate, StoreError, TakeoffFix};

/// Vec-backed [`FlightStore`]. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct MemoryFlightStore {
    flights: RwLock<Vec<FlightRecord>>,
}

impl MemoryFlightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored record, in insertion order.
    pub fn flights(&self) -> Vec<FlightRecord> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<FlightRecord>> {
        self.flights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl FlightStore for MemoryFlightStore {
    fn existing_sids(&self) -> Result<HashSet<i64>, StoreError> {
        Ok(self.read().iter().map(|record| record.shr.sid).collect())
    }

    fn bulk_insert(&self, records: &[FlightRecord]) -> Result<usize, StoreError> {
        let mut flights = self
            .flights
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        flights.extend_from_slice(records);
        Ok(records.len())
    }

    fn scan_takeoffs(&self) -> Result<Vec<TakeoffFix>, StoreError> {
        Ok(self
            .read()
            .iter()
            .map(|record| TakeoffFix {
                sid: record.shr.sid,
                dep: record.dep.coordinates,
                shr_dep: record.shr.coordinates_dep,
            })
            .collect())
    }

    fn bulk_update_regions(&self, updates: &[RegionUpdate]) -> Result<usize, StoreError> {
        let mut flights = self
            .flights
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut updated = 0;
        for update in updates {
            for flight in flights.iter_mut().filter(|f| f.shr.sid == update.sid) {
                flight.region = update.region.clone();
                updated += 1;
            }
        }
        Ok(updated)
    }
}
