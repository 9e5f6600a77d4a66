//! Read-only catalogue of loaded subject shapes.

use std::time::{Duration, Instant};

use geo::Coord;
use serde_json::{json, Value};

use crate::index::SubjectIndex;
use crate::shape::{geometry_to_value, RegionShape};
use crate::tagger::UNRESOLVED_REGION;
use crate::RegionError;

/// The subject whose source dataset wraps past the antimeridian and needs
/// a longitude nudge when served back as GeoJSON.
const WRAPAROUND_SUBJECT: &str = "Чукотский автономный округ";

/// Immutable shape catalogue with its containment index. Built once by the
/// loader; shared read-only for the rest of the process.
pub struct ShapeStore {
    shapes: Vec<RegionShape>,
    index: SubjectIndex,
}

impl ShapeStore {
    /// Builds the catalogue and its index. A load that accepted zero
    /// shapes is a hard error.
    pub fn from_shapes(shapes: Vec<RegionShape>) -> Result<Self, RegionError> {
        if shapes.is_empty() {
            return Err(RegionError::NoShapes);
        }
        let index = SubjectIndex::build(&shapes);
        Ok(Self { shapes, index })
    }

    /// First shape containing the point, in load order, edge-inclusive.
    pub fn contains_point(&self, lat: f64, lon: f64) -> Option<&RegionShape> {
        self.locate_within(lat, lon, Instant::now() + Duration::from_secs(3))
    }

    pub(crate) fn locate_within(
        &self,
        lat: f64,
        lon: f64,
        deadline: Instant,
    ) -> Option<&RegionShape> {
        self.index
            .locate(&self.shapes, lat, lon, deadline)
            .map(|i| &self.shapes[i])
    }

    pub fn shapes(&self) -> &[RegionShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Deduplicated, alphabetically sorted subject names with the
    /// undetermined sentinel appended; the list external UIs present.
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.shapes.iter().map(|s| s.name.clone()).collect();
        names.sort();
        names.dedup();
        names.push(UNRESOLVED_REGION.to_string());
        names
    }

    /// Every shape as a GeoJSON feature for dataset export. The wraparound
    /// subject gets its longitudes west of −170° nudged by −0.0000005 to
    /// compensate a known dataset artifact; the stored geometry and the
    /// containment index are untouched.
    pub fn export_features(&self) -> Vec<Value> {
        self.shapes
            .iter()
            .map(|shape| {
                let geometry = if shape.name == WRAPAROUND_SUBJECT {
                    geometry_to_value(&shape.geometry, &wraparound_shift)
                } else {
                    geometry_to_value(&shape.geometry, &|c| c)
                };
                json!({
                    "region": shape.name,
                    "geojson": {
                        "type": "Feature",
                        "geometry": geometry,
                        "properties": {},
                    },
                })
            })
            .collect()
    }
}

fn wraparound_shift(c: Coord<f64>) -> Coord<f64> {
    if c.x > -170.0 {
        Coord {
            x: c.x - 0.000_000_5,
            y: c.y,
        }
    } else {
        c
    }
}
