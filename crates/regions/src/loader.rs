//! One-shot GeoJSON loader for the subject boundary files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::shape::{geometry_from_value, RegionShape};
use crate::store::ShapeStore;
use crate::RegionError;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Value,
}

/// Property keys probed after the official-name fields, in order.
const NAME_FALLBACK_KEYS: &[&str] = &[
    "alt_name:ru",
    "alt_name",
    "name:ru",
    "name",
    "int_name",
    "NAME",
    "region_name",
    "subject",
];

/// Walks `dir`, parses every `.geojson`/`.json` file and builds the shape
/// store. Unreadable or unparsable files and invalid features are skipped
/// with a warning; a load that accepts nothing at all fails.
pub fn load_dir(dir: impl AsRef<Path>) -> Result<ShapeStore, RegionError> {
    let dir = dir.as_ref();
    let mut shapes = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|err| RegionError::Walk(err.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_geojson = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                ext == "geojson" || ext == "json"
            })
            .unwrap_or(false);
        if !is_geojson {
            continue;
        }

        let label = path.display().to_string();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(file = %label, error = %err, "skipping unreadable boundary file");
                continue;
            }
        };
        match parse_collection(&label, &text) {
            Ok(parsed) => shapes.extend(parsed),
            Err(err) => warn!(file = %label, error = %err, "skipping unparsable boundary file"),
        }
    }

    info!(dir = %dir.display(), shapes = shapes.len(), "loaded subject boundaries");
    ShapeStore::from_shapes(shapes)
}

/// Parses one FeatureCollection document. Features with missing names fall
/// back to `Регион_<n>`; features with invalid geometry are skipped with a
/// warning.
pub fn parse_collection(label: &str, text: &str) -> Result<Vec<RegionShape>, serde_json::Error> {
    let collection: FeatureCollection = serde_json::from_str(text)?;

    let mut shapes = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let name = resolve_name(feature.properties.as_ref(), index);
        let Some(geometry) = feature.geometry else {
            warn!(file = %label, region = %name, "skipping feature without geometry");
            continue;
        };
        match geometry_from_value(&geometry.kind, &geometry.coordinates) {
            Ok(geometry) => shapes.push(RegionShape { name, geometry }),
            Err(err) => {
                warn!(file = %label, region = %name, error = %err, "skipping invalid feature");
            }
        }
    }
    Ok(shapes)
}

fn resolve_name(properties: Option<&Map<String, Value>>, index: usize) -> String {
    let fallback = || format!("Регион_{}", index + 1);
    let Some(properties) = properties else {
        return fallback();
    };

    let non_empty = |key: &str| {
        properties
            .get(key)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
    };

    non_empty("official_name:ru")
        .or_else(|| non_empty("official_name"))
        .or_else(|| non_empty("region"))
        .or_else(|| {
            NAME_FALLBACK_KEYS
                .iter()
                .copied()
                .find_map(|key| non_empty(key))
        })
        .unwrap_or_else(fallback)
}
