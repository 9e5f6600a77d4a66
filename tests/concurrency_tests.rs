//! Concurrency and thread-safety tests for the ingestion pipeline.

use std::sync::Arc;
use std::thread;

use skyfeed::{
    ingest_rows, parse_collection, parse_row, IngestOptions, MemoryFlightStore, RegionTagger,
    ShapeStore, UNRESOLVED_REGION,
};

const SUBJECTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [{
    "type": "Feature",
    "properties": { "name": "Московская область" },
    "geometry": { "type": "Polygon", "coordinates": [[
      [35.0, 54.0], [40.5, 54.0], [40.5, 57.0], [35.0, 57.0], [35.0, 54.0]
    ]]}
  }]
}"#;

fn shared_tagger() -> Arc<RegionTagger> {
    let shapes = parse_collection("subjects", SUBJECTS).unwrap();
    Arc::new(RegionTagger::new(Arc::new(
        ShapeStore::from_shapes(shapes).unwrap(),
    )))
}

fn shr_row(sid: i64, coord: &str) -> Vec<String> {
    vec![
        String::new(),
        format!("(SHR-ZZZZZ\n-ZZZZ0800\n-LINE\n-ZZZZ1030\n-DEP/{coord} DOF/240615 SID/{sid})"),
        String::new(),
        String::new(),
    ]
}

#[test]
fn tagger_is_consistent_across_threads() {
    let tagger = shared_tagger();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tagger = Arc::clone(&tagger);
            thread::spawn(move || {
                let mut names = Vec::new();
                for _ in 0..50 {
                    names.push(tagger.tag(55.5, 37.5));
                    names.push(tagger.tag(10.0, 10.0));
                }
                names
            })
        })
        .collect();

    for handle in handles {
        for (i, name) in handle.join().unwrap().into_iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(name, "Московская область");
            } else {
                assert_eq!(name, UNRESOLVED_REGION);
            }
        }
    }
}

#[test]
fn concurrent_parses_agree() {
    let row = shr_row(99, "5530N03730E");
    let expected = parse_row(&row);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let row = row.clone();
            thread::spawn(move || parse_row(&row))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn pipeline_preserves_sid_uniqueness_under_parallelism() {
    let tagger = shared_tagger();
    let store = MemoryFlightStore::new();

    // 400 rows over 100 distinct SIDs: every SID must be stored exactly once.
    let mut rows = vec![vec![
        "Центр".to_string(),
        "shr".to_string(),
        "dep".to_string(),
        "arr".to_string(),
    ]];
    for _pass in 0..4 {
        for sid in 0..100 {
            rows.push(shr_row(sid, "5530N03730E"));
        }
    }

    let options = IngestOptions {
        workers: 4,
        queue_capacity: 16,
        batch_size: 10,
    };
    let report = ingest_rows(rows.into_iter(), &store, &tagger, &options).unwrap();

    assert_eq!(report.rows, 400);
    assert_eq!(report.inserted, 100);
    assert_eq!(report.duplicates, 300);
    assert_eq!(report.worker_rows.len(), 4);
    assert_eq!(report.worker_rows.iter().sum::<u64>(), 400);
    assert_eq!(store.len(), 100);

    let mut sids: Vec<i64> = store.flights().iter().map(|f| f.shr.sid).collect();
    sids.sort_unstable();
    sids.dedup();
    assert_eq!(sids.len(), 100);
}

#[test]
fn bounded_channels_apply_backpressure_without_deadlock() {
    let tagger = shared_tagger();
    let store = MemoryFlightStore::new();

    let mut rows = vec![vec![
        String::new(),
        "shr".to_string(),
        "dep".to_string(),
        "arr".to_string(),
    ]];
    for sid in 0..500 {
        rows.push(shr_row(sid, "5530N03730E"));
    }

    // A one-slot queue forces every stage to block on its neighbor.
    let options = IngestOptions {
        workers: 2,
        queue_capacity: 1,
        batch_size: 1,
    };
    let report = ingest_rows(rows.into_iter(), &store, &tagger, &options).unwrap();
    assert_eq!(report.inserted, 500);
    assert_eq!(store.len(), 500);
}
