//! Federal-subject boundaries: loading, indexing and point tagging.
//!
//! The crate owns the geospatial half of the ingestion pipeline. A
//! directory of GeoJSON FeatureCollections (one feature per federal
//! subject) is loaded once into an immutable [`ShapeStore`] with a
//! containment index; the [`RegionTagger`] then resolves takeoff
//! coordinates to subject names behind a read-through cache.
//!
//! ```no_run
//! use std::sync::Arc;
//! use regions::{load_dir, RegionTagger};
//!
//! let store = Arc::new(load_dir("geojson")?);
//! let tagger = RegionTagger::new(store);
//! let name = tagger.tag(55.5, 37.5);
//! # Ok::<(), regions::RegionError>(())
//! ```
//!
//! Tagging never fails: an unknown point, an expired deadline or a missing
//! coordinate all resolve to the reserved sentinel
//! [`UNRESOLVED_REGION`].

mod index;
mod loader;
mod shape;
mod store;
mod tagger;

use thiserror::Error;

pub use loader::{load_dir, parse_collection};
pub use shape::{RegionShape, ShapeError, SubjectGeometry};
pub use store::ShapeStore;
pub use tagger::{RegionTagger, UNRESOLVED_REGION};

/// Fatal loader failures. Per-feature problems are logged and skipped;
/// these abort the load.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("failed to walk boundary directory: {0}")]
    Walk(String),
    #[error("no usable region features were loaded")]
    NoShapes,
}
