//! Storage seams for the ingestion pipeline.
//!
//! The pipeline is written against two small traits rather than a concrete
//! database so the persistence driver stays swappable:
//!
//! - [`RowSource`]: a finite stream of spreadsheet rows. Any iterator of
//!   `Vec<String>` is a row source.
//! - [`FlightStore`]: insert-if-absent-by-SID bulk persistence plus the
//!   two projections used by the region re-tagging tool.
//!
//! [`MemoryFlightStore`] backs tests and the demo binary. A driver-backed
//! implementation persists [`FlightRecord`] values in their serialized
//! camelCase layout (`shr` / `dep` / `arr` / `searchFields` subdocuments
//! plus `region`).

mod memory;

use std::collections::HashSet;

use telegram::{Coordinate, FlightRecord};
use thiserror::Error;

pub use memory::MemoryFlightStore;

/// Storage failure. Bulk operations are best-effort: the pipeline logs
/// these and keeps going.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Takeoff-coordinate projection of one stored flight, used when regions
/// are re-derived for records that are already persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffFix {
    pub sid: i64,
    /// Coordinates from the DEP telegram, when present.
    pub dep: Option<Coordinate>,
    /// Coordinates from the SHR `DEP/` clause, when present.
    pub shr_dep: Option<Coordinate>,
}

/// One region assignment produced by the re-tagging tool.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionUpdate {
    pub sid: i64,
    pub region: String,
}

/// Bulk persistence of flight records keyed by SID.
pub trait FlightStore: Send + Sync {
    /// SIDs already present in the store, for deduplication preload.
    fn existing_sids(&self) -> Result<HashSet<i64>, StoreError>;

    /// Unordered best-effort batch insert. Returns the number written.
    fn bulk_insert(&self, records: &[FlightRecord]) -> Result<usize, StoreError>;

    /// Takeoff-coordinate projection over every stored flight.
    fn scan_takeoffs(&self) -> Result<Vec<TakeoffFix>, StoreError>;

    /// Applies region assignments by SID. Returns the number updated.
    fn bulk_update_regions(&self, updates: &[RegionUpdate]) -> Result<usize, StoreError>;
}

/// A finite stream of spreadsheet rows; row 0 is the header.
pub trait RowSource {
    fn next_row(&mut self) -> Option<Vec<String>>;
}

impl<I> RowSource for I
where
    I: Iterator<Item = Vec<String>>,
{
    fn next_row(&mut self) -> Option<Vec<String>> {
        self.next()
    }
}
