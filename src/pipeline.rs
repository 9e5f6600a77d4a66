//! Ingestion pipeline: row stream in, deduplicated tagged records out.
//!
//! Topology (all channels bounded):
//!
//! ```text
//! reader ──jobs──▶ parser workers (parse + tag) ──results──▶ collector
//!   1                N = available parallelism                  1
//! ```
//!
//! The collector is the only writer into the SID set and the only caller
//! of the store, so SID uniqueness needs no further synchronization.
//! Closing the job channel drains the workers; the workers dropping their
//! result senders drains the collector.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use regions::{RegionTagger, UNRESOLVED_REGION};
use store::{FlightStore, RowSource};
use telegram::{Coordinate, FlightRecord};
use tracing::{debug, error, info};

use crate::IngestError;

/// Tuning knobs for one ingestion run.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Parser worker count; 0 means available parallelism.
    pub workers: usize,
    /// Capacity of the job and result channels.
    pub queue_capacity: usize,
    /// Records accumulated per bulk insert.
    pub batch_size: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            workers: 0,
            queue_capacity: 50_000,
            batch_size: 1_000,
        }
    }
}

/// Counters emitted by one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Data rows that reached the collector.
    pub rows: u64,
    /// Rows skipped because their SID was already known.
    pub duplicates: u64,
    /// Records accepted for insertion (SID not seen before).
    pub inserted: u64,
    /// Bulk insert batches flushed.
    pub batches: u64,
    /// Rows handled by each parser worker.
    pub worker_rows: Vec<u64>,
}

/// Streams `source` through the parser workers into `store`.
///
/// The first row must be the header (`shr`, `dep`, `arr` in columns 1–3,
/// case-insensitive); anything else fails with [`IngestError::BadFormat`]
/// before any data row is consumed. Duplicate SIDs, against the store and
/// within the upload alike, are skipped and counted. Bulk-insert failures
/// are logged and do not abort the run; prior batches stay written.
pub fn ingest_rows<S>(
    mut source: S,
    store: &dyn FlightStore,
    tagger: &RegionTagger,
    options: &IngestOptions,
) -> Result<IngestReport, IngestError>
where
    S: RowSource + Send,
{
    let header = source.next_row().ok_or(IngestError::EmptyInput)?;
    validate_header(&header)?;

    let mut seen = store.existing_sids()?;
    info!(existing = seen.len(), "loaded existing flight identifiers");

    let workers = effective_workers(options.workers);
    let capacity = options.queue_capacity.max(1);
    let batch_size = options.batch_size.max(1);

    let mut report = IngestReport::default();
    thread::scope(|scope| {
        let (job_tx, job_rx) = mpsc::sync_channel::<Vec<String>>(capacity);
        let (result_tx, result_rx) = mpsc::sync_channel::<FlightRecord>(capacity);
        let job_rx = Arc::new(Mutex::new(job_rx));

        scope.spawn(move || {
            while let Some(row) = source.next_row() {
                if job_tx.send(row).is_err() {
                    break;
                }
            }
        });

        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let job_rx = Arc::clone(&job_rx);
            let result_tx = result_tx.clone();
            handles.push(scope.spawn(move || {
                let mut handled = 0u64;
                loop {
                    let received = {
                        let receiver = job_rx.lock().unwrap_or_else(PoisonError::into_inner);
                        receiver.recv()
                    };
                    let Ok(row) = received else { break };
                    if result_tx.send(tag_row(&row, tagger)).is_err() {
                        break;
                    }
                    handled += 1;
                }
                debug!(worker, rows = handled, "parser worker drained");
                handled
            }));
        }
        // The collector keeps no senders or receivers of its own: workers
        // dropping their handles is what closes each channel.
        drop(result_tx);
        drop(job_rx);

        let mut buffer: Vec<FlightRecord> = Vec::with_capacity(batch_size);
        for record in result_rx {
            report.rows += 1;
            if !seen.insert(record.shr.sid) {
                report.duplicates += 1;
                continue;
            }
            report.inserted += 1;
            buffer.push(record);
            if buffer.len() >= batch_size {
                flush(store, &mut buffer, &mut report);
            }
        }
        flush(store, &mut buffer, &mut report);

        report.worker_rows = handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(handled) => handled,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect();
    });

    info!(
        rows = report.rows,
        inserted = report.inserted,
        duplicates = report.duplicates,
        batches = report.batches,
        "ingest finished"
    );
    Ok(report)
}

/// Parses one row and resolves its region tag.
fn tag_row(row: &[String], tagger: &RegionTagger) -> FlightRecord {
    let mut record = telegram::parse_row(row);
    record.region = match takeoff_fix(record.dep.coordinates, record.shr.coordinates_dep) {
        Some(fix) => tagger.tag(fix.lat, fix.lon),
        None => UNRESOLVED_REGION.to_string(),
    };
    record
}

/// Picks the takeoff coordinate: the DEP telegram wins over the SHR
/// `DEP/` clause, and the all-zero coordinate counts as absent.
pub(crate) fn takeoff_fix(
    dep: Option<Coordinate>,
    shr_dep: Option<Coordinate>,
) -> Option<Coordinate> {
    let fix = dep.or(shr_dep)?;
    (fix.lat != 0.0 || fix.lon != 0.0).then_some(fix)
}

fn validate_header(header: &[String]) -> Result<(), IngestError> {
    if header.len() < 4 {
        return Err(IngestError::BadFormat(format!(
            "expected at least 4 columns, got {}",
            header.len()
        )));
    }
    for (index, expected) in [(1, "shr"), (2, "dep"), (3, "arr")] {
        let actual = header[index].trim().to_lowercase();
        if actual != expected {
            return Err(IngestError::BadFormat(format!(
                "column {index} must be {expected:?}, got {actual:?}"
            )));
        }
    }
    Ok(())
}

fn effective_workers(configured: usize) -> usize {
    if configured > 0 {
        configured
    } else {
        thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1)
    }
}

fn flush(store: &dyn FlightStore, buffer: &mut Vec<FlightRecord>, report: &mut IngestReport) {
    if buffer.is_empty() {
        return;
    }
    match store.bulk_insert(buffer) {
        Ok(written) => {
            report.batches += 1;
            debug!(written, "flushed record batch");
        }
        Err(err) => error!(error = %err, records = buffer.len(), "bulk insert failed"),
    }
    buffer.clear();
}
