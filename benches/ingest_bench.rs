use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skyfeed::{parse_collection, parse_compact, parse_row, RegionTagger, ShapeStore};

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

const SHR: &str = "(SHR-00724\n-ZZZZ0800\n-M0050/M0070 /ZONA 5530N03730E/\n-ZZZZ1030\n-DEP/5530N03730E DEST/5535N03735E DOF/240615 OPR/ООО АЭРОСЪЕМКА TYP/2BLA SID/7772187998)";

fn bench_parse_row(c: &mut Criterion) {
    let row = vec![
        String::new(),
        SHR.to_string(),
        "-ADD 240615 -ATD 0805 -ADEPZ 5530N03730E".to_string(),
        "-ADA 240615 -ATA 1025 -ADARRZ 5535N03735E".to_string(),
    ];
    c.bench_function("parse_row", |b| b.iter(|| parse_row(black_box(&row))));
}

fn bench_parse_compact(c: &mut Criterion) {
    c.bench_function("parse_compact_dms", |b| {
        b.iter(|| parse_compact(black_box("553012N0373018E")))
    });
}

fn bench_tagger(c: &mut Criterion) {
    let shapes = parse_collection("bench", SUBJECTS).unwrap();
    let tagger = RegionTagger::new(Arc::new(ShapeStore::from_shapes(shapes).unwrap()));

    c.bench_function("tag_cached", |b| {
        b.iter(|| tagger.tag(black_box(55.5), black_box(37.5)))
    });

    let mut offset = 0u32;
    c.bench_function("tag_uncached", |b| {
        b.iter(|| {
            offset = offset.wrapping_add(1);
            let lat = 54.0 + f64::from(offset % 3_000) / 1_000.0;
            tagger.tag(black_box(lat), black_box(37.5))
        })
    });
}

criterion_group!(benches, bench_parse_row, bench_parse_compact, bench_tagger);
criterion_main!(benches);
