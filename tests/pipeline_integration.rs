//! End-to-end pipeline tests: rows in, tagged deduplicated records out.

use std::sync::Arc;

use skyfeed::{
    ingest_rows, parse_collection, retag_regions, FlightStore, IngestOptions, MemoryFlightStore,
    OperatorKind, RegionTagger, RetagOptions, ShapeStore, UNRESOLVED_REGION,
};

const SUBJECTS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "official_name:ru": "Московская область" },
      "geometry": { "type": "Polygon", "coordinates": [[
        [35.0, 54.0], [40.5, 54.0], [40.5, 57.0], [35.0, 57.0], [35.0, 54.0]
      ]]}
    },
    {
      "type": "Feature",
      "properties": { "official_name:ru": "Ленинградская область" },
      "geometry": { "type": "MultiPolygon", "coordinates": [[[
        [28.0, 58.5], [35.0, 58.5], [35.0, 61.0], [28.0, 61.0], [28.0, 58.5]
      ]]]}
    }
  ]
}"#;

fn tagger() -> RegionTagger {
    let shapes = parse_collection("test subjects", SUBJECTS).unwrap();
    RegionTagger::new(Arc::new(ShapeStore::from_shapes(shapes).unwrap()))
}

fn header() -> Vec<String> {
    vec!["Центр".into(), "SHR".into(), "DEP".into(), "ARR".into()]
}

fn shr_row(sid: i64, coord: &str, operator: &str) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "(SHR-ZZZZZ\n-ZZZZ0800\n-M0050/M0070 /ZONA {coord}/\n-ZZZZ1030\n-DEP/{coord} DOF/240615 OPR/{operator} TYP/BLA SID/{sid})"
        ),
        String::new(),
        String::new(),
    ]
}

#[test]
fn rows_are_parsed_tagged_and_stored() {
    let tagger = tagger();
    let store = MemoryFlightStore::new();
    let rows = vec![
        header(),
        shr_row(1001, "5530N03730E", "ООО АЭРОСЪЕМКА"),
        shr_row(1002, "5930N03030E", "ИП ИВАНОВ И.И."),
        shr_row(1003, "0101N00101E", "НЕКТО"),
    ];

    let report = ingest_rows(rows.into_iter(), &store, &tagger, &IngestOptions::default()).unwrap();
    assert_eq!(report.rows, 3);
    assert_eq!(report.inserted, 3);
    assert_eq!(report.duplicates, 0);
    assert_eq!(report.batches, 1);

    let flights = store.flights();
    assert_eq!(flights.len(), 3);

    let by_sid = |sid: i64| flights.iter().find(|f| f.shr.sid == sid).unwrap();
    assert_eq!(by_sid(1001).region, "Московская область");
    assert_eq!(by_sid(1001).shr.operator_type, OperatorKind::LegalEntity);
    assert_eq!(by_sid(1002).region, "Ленинградская область");
    assert_eq!(by_sid(1002).shr.operator_type, OperatorKind::NaturalPerson);
    assert_eq!(by_sid(1003).region, UNRESOLVED_REGION);
    assert_eq!(by_sid(1003).shr.flight_duration, Some(150.0));
}

#[test]
fn duplicate_sids_within_one_upload_are_skipped() {
    let tagger = tagger();
    let store = MemoryFlightStore::new();
    let rows = vec![
        header(),
        shr_row(42, "5530N03730E", "ООО ПЕРВАЯ"),
        shr_row(42, "5530N03730E", "ООО ВТОРАЯ"),
    ];

    let report = ingest_rows(rows.into_iter(), &store, &tagger, &IngestOptions::default()).unwrap();
    assert_eq!(report.rows, 2);
    assert_eq!(report.inserted, 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn sids_already_persisted_are_skipped() {
    let tagger = tagger();
    let store = MemoryFlightStore::new();

    let first = vec![header(), shr_row(7, "5530N03730E", "ООО ПЕРВАЯ")];
    ingest_rows(first.into_iter(), &store, &tagger, &IngestOptions::default()).unwrap();

    let second = vec![
        header(),
        shr_row(7, "5530N03730E", "ООО ПЕРВАЯ"),
        shr_row(8, "5530N03730E", "ООО ВТОРАЯ"),
    ];
    let report =
        ingest_rows(second.into_iter(), &store, &tagger, &IngestOptions::default()).unwrap();
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.inserted, 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn small_batches_flush_repeatedly() {
    let tagger = tagger();
    let store = MemoryFlightStore::new();
    let mut rows = vec![header()];
    for sid in 1..=5 {
        rows.push(shr_row(sid, "5530N03730E", "ООО РОМАШКА"));
    }

    let options = IngestOptions {
        batch_size: 2,
        ..IngestOptions::default()
    };
    let report = ingest_rows(rows.into_iter(), &store, &tagger, &options).unwrap();
    assert_eq!(report.inserted, 5);
    assert_eq!(report.batches, 3);
    assert_eq!(store.len(), 5);
}

#[test]
fn retag_rewrites_regions_from_stored_coordinates() {
    let tagger = tagger();
    let store = MemoryFlightStore::new();
    let rows = vec![
        header(),
        shr_row(21, "5530N03730E", "ООО РОМАШКА"),
        shr_row(22, "0101N00101E", "ООО РОМАШКА"),
    ];
    ingest_rows(rows.into_iter(), &store, &tagger, &IngestOptions::default()).unwrap();

    // Wipe the tags, then re-derive them from the persisted coordinates.
    store
        .bulk_update_regions(&[
            skyfeed::RegionUpdate {
                sid: 21,
                region: String::new(),
            },
            skyfeed::RegionUpdate {
                sid: 22,
                region: String::new(),
            },
        ])
        .unwrap();

    let report = retag_regions(&store, &tagger, &RetagOptions::default()).unwrap();
    assert_eq!(report.scanned, 2);
    assert_eq!(report.updated, 2);
    assert_eq!(report.failed_batches, 0);

    let flights = store.flights();
    let by_sid = |sid: i64| flights.iter().find(|f| f.shr.sid == sid).unwrap();
    assert_eq!(by_sid(21).region, "Московская область");
    assert_eq!(by_sid(22).region, UNRESOLVED_REGION);
}
