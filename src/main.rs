use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use skyfeed::{
    demo_rows, demo_shape_store, ingest_rows, MemoryFlightStore, RegionTagger, SkyfeedConfig,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SkyfeedConfig::from_file(path)?,
        None => SkyfeedConfig::default(),
    };

    let shapes = match skyfeed::load_dir(Path::new(&config.regions.dir)) {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!(error = %err, "no boundary dataset, using the embedded demo region");
            demo_shape_store()
        }
    };
    println!("{} subject boundaries loaded", shapes.len());

    let tagger = RegionTagger::with_limits(
        Arc::new(shapes),
        config.tagger.cache_limit,
        config.tagger.query_timeout(),
    );
    let flights = MemoryFlightStore::new();
    let report = ingest_rows(
        demo_rows().into_iter(),
        &flights,
        &tagger,
        &config.ingest.options(),
    )?;

    println!(
        "ingested {} rows: {} stored, {} duplicates, {} workers",
        report.rows,
        report.inserted,
        report.duplicates,
        report.worker_rows.len()
    );
    for flight in flights.flights() {
        println!("SID {:>12} → {}", flight.shr.sid, flight.region);
    }

    Ok(())
}
