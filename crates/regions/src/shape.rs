//! Region shapes: typed geometry plus GeoJSON conversions.

use geo::{Coord, LineString, MultiPolygon, Point, Polygon};
use serde_json::{json, Value};
use thiserror::Error;

/// One federal subject: a name and its boundary geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub name: String,
    pub geometry: SubjectGeometry,
}

/// The geometry kinds accepted from subject boundary files.
#[derive(Debug, Clone, PartialEq)]
pub enum SubjectGeometry {
    Point(Point<f64>),
    Line(LineString<f64>),
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

/// Why a feature was rejected during loading. Rejected features are
/// skipped with a logged warning, they never abort the load.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("unsupported geometry type {0:?}")]
    UnsupportedType(String),
    #[error("feature has no geometry")]
    MissingGeometry,
    #[error("malformed {0} coordinates")]
    BadCoordinates(&'static str),
    #[error("polygon outer ring must have at least 4 points")]
    ShortRing,
    #[error("polygon ring is not closed")]
    UnclosedRing,
    #[error("MultiPolygon must contain at least one polygon")]
    EmptyMultiPolygon,
}

/// Builds a typed geometry from a GeoJSON `geometry` member.
/// Coordinates follow GeoJSON order: `[lon, lat]`.
pub(crate) fn geometry_from_value(kind: &str, coordinates: &Value) -> Result<SubjectGeometry, ShapeError> {
    match kind {
        "Point" => {
            let position = position(coordinates, "Point")?;
            Ok(SubjectGeometry::Point(Point::from(position)))
        }
        "LineString" => {
            let line = ring(coordinates, "LineString")?;
            if line.0.len() < 2 {
                return Err(ShapeError::BadCoordinates("LineString"));
            }
            Ok(SubjectGeometry::Line(line))
        }
        "Polygon" => Ok(SubjectGeometry::Polygon(polygon(coordinates)?)),
        "MultiPolygon" => {
            let polygons = coordinates
                .as_array()
                .ok_or(ShapeError::BadCoordinates("MultiPolygon"))?;
            if polygons.is_empty() {
                return Err(ShapeError::EmptyMultiPolygon);
            }
            let polygons = polygons
                .iter()
                .map(polygon)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SubjectGeometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
        other => Err(ShapeError::UnsupportedType(other.to_string())),
    }
}

fn position(value: &Value, kind: &'static str) -> Result<Coord<f64>, ShapeError> {
    let parts = value.as_array().ok_or(ShapeError::BadCoordinates(kind))?;
    if parts.len() < 2 {
        return Err(ShapeError::BadCoordinates(kind));
    }
    let x = parts[0].as_f64().ok_or(ShapeError::BadCoordinates(kind))?;
    let y = parts[1].as_f64().ok_or(ShapeError::BadCoordinates(kind))?;
    Ok(Coord { x, y })
}

fn ring(value: &Value, kind: &'static str) -> Result<LineString<f64>, ShapeError> {
    let points = value.as_array().ok_or(ShapeError::BadCoordinates(kind))?;
    let coords = points
        .iter()
        .map(|point| position(point, kind))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(coords))
}

fn polygon(value: &Value) -> Result<Polygon<f64>, ShapeError> {
    let rings = value.as_array().ok_or(ShapeError::BadCoordinates("Polygon"))?;
    if rings.is_empty() {
        return Err(ShapeError::BadCoordinates("Polygon"));
    }
    let mut rings = rings
        .iter()
        .map(|r| ring(r, "Polygon"))
        .collect::<Result<Vec<_>, _>>()?;

    let outer = rings.remove(0);
    if outer.0.len() < 4 {
        return Err(ShapeError::ShortRing);
    }
    let first = outer.0[0];
    let last = outer.0[outer.0.len() - 1];
    if first.x != last.x || first.y != last.y {
        return Err(ShapeError::UnclosedRing);
    }

    Ok(Polygon::new(outer, rings))
}

/// Serializes a geometry back to a GeoJSON `geometry` member, passing each
/// coordinate through `shift` (used for the dataset wrap-around fix on
/// read-out).
pub(crate) fn geometry_to_value<F>(geometry: &SubjectGeometry, shift: &F) -> Value
where
    F: Fn(Coord<f64>) -> Coord<f64>,
{
    let pair = |c: &Coord<f64>| {
        let c = shift(*c);
        json!([c.x, c.y])
    };
    let line = |l: &LineString<f64>| Value::Array(l.0.iter().map(pair).collect());
    let poly = |p: &Polygon<f64>| {
        let mut rings = vec![line(p.exterior())];
        rings.extend(p.interiors().iter().map(line));
        Value::Array(rings)
    };

    match geometry {
        SubjectGeometry::Point(point) => json!({
            "type": "Point",
            "coordinates": pair(&point.0),
        }),
        SubjectGeometry::Line(l) => json!({
            "type": "LineString",
            "coordinates": line(l),
        }),
        SubjectGeometry::Polygon(p) => json!({
            "type": "Polygon",
            "coordinates": poly(p),
        }),
        SubjectGeometry::MultiPolygon(mp) => json!({
            "type": "MultiPolygon",
            "coordinates": Value::Array(mp.0.iter().map(poly).collect()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn polygon_must_be_closed() {
        let open = json!([[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]);
        assert_eq!(
            geometry_from_value("Polygon", &open),
            Err(ShapeError::UnclosedRing)
        );
    }

    #[test]
    fn polygon_needs_four_points() {
        let triangle = json!([[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]]);
        assert_eq!(
            geometry_from_value("Polygon", &triangle),
            Err(ShapeError::ShortRing)
        );
    }

    #[test]
    fn multipolygon_must_not_be_empty() {
        assert_eq!(
            geometry_from_value("MultiPolygon", &json!([])),
            Err(ShapeError::EmptyMultiPolygon)
        );
    }

    #[test]
    fn unsupported_kind_is_rejected() {
        assert_eq!(
            geometry_from_value("GeometryCollection", &json!([])),
            Err(ShapeError::UnsupportedType("GeometryCollection".into()))
        );
    }

    #[test]
    fn roundtrips_a_polygon() {
        let coords = json!([[[37.0, 55.0], [38.0, 55.0], [38.0, 56.0], [37.0, 55.0]]]);
        let geometry = geometry_from_value("Polygon", &coords).unwrap();
        let value = geometry_to_value(&geometry, &|c| c);
        assert_eq!(value["type"], "Polygon");
        assert_eq!(value["coordinates"], coords);
    }
}
