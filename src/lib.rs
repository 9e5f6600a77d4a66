//! Flight-notification ingestion and federal-subject tagging.
//!
//! `skyfeed` turns spreadsheets of civilian-aviation flight notifications
//! into structured, queryable records. Each row carries three free-text
//! ICAO-style telegrams (the SHR main flight plan plus the DEP/ARR
//! confirmations); the pipeline parses them into a typed
//! [`FlightRecord`], resolves the federal subject containing the takeoff
//! coordinate, deduplicates by SID and bulk-persists the result.
//!
//! The workspace splits the stages into crates that this umbrella crate
//! re-exports and orchestrates:
//!
//! ```text
//! rows ──▶ telegram (parse) ──▶ regions (tag) ──▶ collector (dedup) ──▶ store
//! ```
//!
//! - [`telegram`]: coordinate/datetime codecs and the SHR/DEP/ARR parser;
//! - [`operator`]: `OPR/` clause extraction and operator classification;
//! - [`regions`]: GeoJSON boundary loading, containment index, cached
//!   region tagger;
//! - [`store`]: the row-source and flight-store seams with an in-memory
//!   implementation.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use skyfeed::{
//!     demo_rows, demo_shape_store, ingest_rows, IngestOptions, MemoryFlightStore, RegionTagger,
//! };
//!
//! let tagger = RegionTagger::new(Arc::new(demo_shape_store()));
//! let flights = MemoryFlightStore::new();
//! let report = ingest_rows(
//!     demo_rows().into_iter(),
//!     &flights,
//!     &tagger,
//!     &IngestOptions::default(),
//! )?;
//! assert_eq!(report.inserted as usize, flights.len());
//! # Ok::<(), skyfeed::IngestError>(())
//! ```
//!
//! ## Error policy
//!
//! Contract violations surface: a malformed header fails the upload with
//! [`IngestError::BadFormat`] before any row is consumed, and a corrupted
//! date field inside a constrained telegram clause panics. Data-quality
//! issues do not: unmatched clauses leave fields empty, unresolvable
//! takeoff points tag as [`UNRESOLVED_REGION`], duplicate SIDs are counted
//! and skipped, and failed bulk writes are logged while the run continues.

mod config;
mod demo;
mod pipeline;
mod retag;

pub use config::{
    ConfigError, IngestYamlConfig, RegionsYamlConfig, SkyfeedConfig, StoreYamlConfig,
    TaggerYamlConfig,
};
pub use demo::{demo_ingest, demo_rows, demo_shape_store, DEMO_SUBJECTS_GEOJSON};
pub use pipeline::{ingest_rows, IngestOptions, IngestReport};
pub use retag::{retag_regions, RetagOptions, RetagReport};

pub use operator::{classify, extract_and_classify, extract_opr, OperatorKind};
pub use regions::{
    load_dir, parse_collection, RegionError, RegionShape, RegionTagger, ShapeStore,
    SubjectGeometry, UNRESOLVED_REGION,
};
pub use store::{
    FlightStore, MemoryFlightStore, RegionUpdate, RowSource, StoreError, TakeoffFix,
};
pub use telegram::{
    parse_compact, parse_instant, parse_row, ArrBlock, Coordinate, DepBlock, FlightRecord,
    SearchFields, ShrBlock,
};

use thiserror::Error;

/// Failures of an ingestion or re-tagging run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The row stream ended before a header row was read.
    #[error("row stream is empty")]
    EmptyInput,

    /// The header row does not carry `shr`, `dep`, `arr` in columns 1–3.
    #[error("bad column layout: {0}")]
    BadFormat(String),

    /// The dedup preload or takeoff scan failed; bulk writes inside a run
    /// are logged instead of surfaced.
    #[error(transparent)]
    Store(#[from] StoreError),
}
