//! Region re-tagging over an already-populated flight store.
//!
//! Used after the boundary dataset changes: every stored flight gets its
//! `region` field re-derived from the persisted takeoff coordinates.

use rayon::prelude::*;
use regions::{RegionTagger, UNRESOLVED_REGION};
use store::{FlightStore, RegionUpdate};
use tracing::{error, info};

use crate::pipeline::takeoff_fix;
use crate::IngestError;

#[derive(Debug, Clone)]
pub struct RetagOptions {
    /// Region assignments per bulk update.
    pub update_batch: usize,
    /// Fixes tagged per parallel work unit.
    pub chunk_size: usize,
}

impl Default for RetagOptions {
    fn default() -> Self {
        Self {
            update_batch: 2_000,
            chunk_size: 50,
        }
    }
}

/// Counters emitted by one re-tagging run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetagReport {
    /// Stored flights scanned.
    pub scanned: u64,
    /// Region assignments confirmed by the store.
    pub updated: u64,
    /// Bulk updates that failed and were skipped.
    pub failed_batches: u64,
}

/// Re-derives the region of every stored flight and writes the
/// assignments back in bulk. Update failures are logged per batch and do
/// not abort the run.
pub fn retag_regions(
    store: &dyn FlightStore,
    tagger: &RegionTagger,
    options: &RetagOptions,
) -> Result<RetagReport, IngestError> {
    let fixes = store.scan_takeoffs()?;
    let mut report = RetagReport {
        scanned: fixes.len() as u64,
        ..RetagReport::default()
    };

    let updates: Vec<RegionUpdate> = fixes
        .par_chunks(options.chunk_size.max(1))
        .flat_map_iter(|chunk| {
            chunk.iter().map(|fix| RegionUpdate {
                sid: fix.sid,
                region: match takeoff_fix(fix.dep, fix.shr_dep) {
                    Some(point) => tagger.tag(point.lat, point.lon),
                    None => UNRESOLVED_REGION.to_string(),
                },
            })
        })
        .collect();

    for batch in updates.chunks(options.update_batch.max(1)) {
        match store.bulk_update_regions(batch) {
            Ok(updated) => report.updated += updated as u64,
            Err(err) => {
                report.failed_batches += 1;
                error!(error = %err, updates = batch.len(), "bulk region update failed");
            }
        }
    }

    info!(
        scanned = report.scanned,
        updated = report.updated,
        "region re-tagging finished"
    );
    Ok(report)
}
