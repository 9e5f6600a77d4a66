//! Self-contained demo: an embedded boundary plus sample telegrams driven
//! through the full pipeline into the in-memory store. Used by the demo
//! binary and as an integration smoke test.

use std::sync::Arc;

use regions::{parse_collection, RegionTagger, ShapeStore};
use store::MemoryFlightStore;

use crate::pipeline::{ingest_rows, IngestOptions, IngestReport};
use crate::IngestError;

/// One rectangular stand-in boundary around the Moscow area.
pub const DEMO_SUBJECTS_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "official_name:ru": "Московская область" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[
          [35.0, 54.0], [40.5, 54.0], [40.5, 57.0], [35.0, 57.0], [35.0, 54.0]
        ]]
      }
    }
  ]
}"#;

/// Shape store built from the embedded demo boundary.
pub fn demo_shape_store() -> ShapeStore {
    let shapes = parse_collection("embedded demo", DEMO_SUBJECTS_GEOJSON)
        .expect("embedded demo collection parses");
    ShapeStore::from_shapes(shapes).expect("embedded demo collection is not empty")
}

/// Header plus a handful of sample rows, one of them a SID duplicate.
pub fn demo_rows() -> Vec<Vec<String>> {
    let row = |shr: &str, dep: &str, arr: &str| {
        vec![
            "Центр ЕС ОрВД".to_string(),
            shr.to_string(),
            dep.to_string(),
            arr.to_string(),
        ]
    };

    vec![
        vec![
            "Центр".to_string(),
            "SHR".to_string(),
            "DEP".to_string(),
            "ARR".to_string(),
        ],
        row(
            "(SHR-00724\n-ZZZZ0800\n-M0050/M0070 /ZONA 5530N03730E/\n-ZZZZ1030\n-DEP/5530N03730E DEST/5535N03735E DOF/240615 OPR/ООО АЭРОСЪЕМКА TYP/2BLA SID/7772187998)",
            "-ADD 240615 -ATD 0805 -ADEPZ 5530N03730E",
            "-ADA 240615 -ATA 1025 -ADARRZ 5535N03735E",
        ),
        row(
            "(SHR-ZZZZZ\n-ZZZZ0900\n-M0020/M0030 /ZONA 5545N03715E/\n-ZZZZ1100\n-DEP/5545N03715E DOF/240615 OPR/ИП ИВАНОВ И.И. SID/7772187999)",
            "",
            "",
        ),
        // Far outside the demo boundary: tagged with the sentinel.
        row(
            "(SHR-00931\n-ZZZZ0600\n-ZONA 4455N13245E/\n-ZZZZ0700\n-DEP/4455N13245E DOF/240616 OPR/ГРАЖДАНИН ПЕТРОВ SID/7772188000)",
            "",
            "",
        ),
        // Duplicate of the first SID; skipped by the collector.
        row(
            "(SHR-00724\n-ZZZZ0800\n-ZZZZ1030\n-DEP/5530N03730E DOF/240615 SID/7772187998)",
            "",
            "",
        ),
    ]
}

/// Runs the embedded rows through the full pipeline.
pub fn demo_ingest() -> Result<(IngestReport, MemoryFlightStore), IngestError> {
    let tagger = RegionTagger::new(Arc::new(demo_shape_store()));
    let flights = MemoryFlightStore::new();
    let report = ingest_rows(
        demo_rows().into_iter(),
        &flights,
        &tagger,
        &IngestOptions::default(),
    )?;
    Ok((report, flights))
}
