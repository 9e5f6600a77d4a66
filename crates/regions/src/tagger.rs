//! Region tagger: cached point-to-subject resolution.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::store::ShapeStore;

/// Sentinel name returned when no subject contains the point, the lookup
/// times out, or the record carries no usable takeoff coordinate.
pub const UNRESOLVED_REGION: &str = "Регион не определен";

/// Cache entries kept before the map is cleared wholesale.
const DEFAULT_CACHE_LIMIT: usize = 10_000;

/// Per-query deadline; an expired lookup resolves to the sentinel.
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Exact coordinate bits; no quantization.
type CacheKey = (u64, u64);

/// Resolves coordinates to federal-subject names through the shape store,
/// memoizing answers in a concurrent read-through cache. The cache is
/// cleared wholesale once it grows past its limit; takeoff coordinates
/// repeat heavily in this workload.
pub struct RegionTagger {
    store: Arc<ShapeStore>,
    cache: RwLock<hashbrown::HashMap<CacheKey, String>>,
    cache_limit: usize,
    query_timeout: Duration,
}

impl RegionTagger {
    pub fn new(store: Arc<ShapeStore>) -> Self {
        Self::with_limits(store, DEFAULT_CACHE_LIMIT, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_limits(store: Arc<ShapeStore>, cache_limit: usize, query_timeout: Duration) -> Self {
        Self {
            store,
            cache: RwLock::new(hashbrown::HashMap::new()),
            cache_limit: cache_limit.max(1),
            query_timeout,
        }
    }

    /// Name of the subject containing the point. Never fails: misses and
    /// expired deadlines resolve to [`UNRESOLVED_REGION`], and every
    /// computed answer (the sentinel included) is cached.
    pub fn tag(&self, lat: f64, lon: f64) -> String {
        let key = (lat.to_bits(), lon.to_bits());
        if let Some(cached) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return cached.clone();
        }

        let deadline = Instant::now() + self.query_timeout;
        let name = self
            .store
            .locate_within(lat, lon, deadline)
            .map(|shape| shape.name.clone())
            .unwrap_or_else(|| UNRESOLVED_REGION.to_string());

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.insert(key, name.clone());
        if cache.len() > self.cache_limit {
            cache.clear();
        }
        name
    }

    /// Resolves a batch of identified points in parallel.
    pub fn tag_batch<I>(&self, points: &[(I, f64, f64)]) -> HashMap<I, String>
    where
        I: Copy + Eq + Hash + Send + Sync,
    {
        points
            .par_iter()
            .map(|&(id, lat, lon)| (id, self.tag(lat, lon)))
            .collect()
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn cached_entries(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_collection;

    fn tagger_with(limit: usize) -> RegionTagger {
        let text = r#"{"type":"FeatureCollection","features":[{
            "type":"Feature",
            "properties":{"name":"Московская область"},
            "geometry":{"type":"Polygon","coordinates":[[
                [35.0,54.0],[40.0,54.0],[40.0,57.0],[35.0,57.0],[35.0,54.0]]]}
        }]}"#;
        let shapes = parse_collection("test", text).unwrap();
        let store = Arc::new(ShapeStore::from_shapes(shapes).unwrap());
        RegionTagger::with_limits(store, limit, DEFAULT_QUERY_TIMEOUT)
    }

    #[test]
    fn inside_point_resolves_to_subject_name() {
        let tagger = tagger_with(DEFAULT_CACHE_LIMIT);
        assert_eq!(tagger.tag(55.5, 37.5), "Московская область");
    }

    #[test]
    fn outside_point_is_unresolved_and_cached() {
        let tagger = tagger_with(DEFAULT_CACHE_LIMIT);
        assert_eq!(tagger.tag(0.0, 0.0), UNRESOLVED_REGION);
        assert_eq!(tagger.cached_entries(), 1);
        // Second call answers from cache.
        assert_eq!(tagger.tag(0.0, 0.0), UNRESOLVED_REGION);
        assert_eq!(tagger.cached_entries(), 1);
    }

    #[test]
    fn cache_clears_wholesale_past_the_limit() {
        let tagger = tagger_with(2);
        tagger.tag(55.1, 37.1);
        tagger.tag(55.2, 37.2);
        assert_eq!(tagger.cached_entries(), 2);
        tagger.tag(55.3, 37.3);
        assert_eq!(tagger.cached_entries(), 0);
        tagger.tag(55.4, 37.4);
        assert_eq!(tagger.cached_entries(), 1);
    }

    #[test]
    fn batch_matches_single_point_answers() {
        let tagger = tagger_with(DEFAULT_CACHE_LIMIT);
        let points = vec![(1u32, 55.5, 37.5), (2u32, 0.0, 0.0), (3u32, 56.0, 39.0)];
        let tags = tagger.tag_batch(&points);
        assert_eq!(tags[&1], "Московская область");
        assert_eq!(tags[&2], UNRESOLVED_REGION);
        assert_eq!(tags[&3], "Московская область");
    }
}
