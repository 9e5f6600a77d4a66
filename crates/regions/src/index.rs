//! Containment index over the polygonal subject shapes.
//!
//! A bounding-box prefilter sits in front of the exact edge-inclusive
//! containment test; the catalogue holds under a hundred federal subjects.
//! Entries keep the shape-store iteration order, so "first match wins" is
//! stable for overlapping boundaries.

use std::time::Instant;

use geo::{BoundingRect, Intersects, Point, Rect};

use crate::shape::{RegionShape, SubjectGeometry};

pub(crate) struct SubjectIndex {
    entries: Vec<Entry>,
}

struct Entry {
    shape: usize,
    bounds: Rect<f64>,
}

impl SubjectIndex {
    /// Indexes the polygonal shapes; points and lines have no interior and
    /// are left out.
    pub(crate) fn build(shapes: &[RegionShape]) -> Self {
        let entries = shapes
            .iter()
            .enumerate()
            .filter_map(|(i, shape)| {
                let bounds = match &shape.geometry {
                    SubjectGeometry::Polygon(polygon) => polygon.bounding_rect(),
                    SubjectGeometry::MultiPolygon(multi) => multi.bounding_rect(),
                    SubjectGeometry::Point(_) | SubjectGeometry::Line(_) => None,
                };
                bounds.map(|bounds| Entry { shape: i, bounds })
            })
            .collect();
        Self { entries }
    }

    /// Index of the first shape containing the point (edge-inclusive), in
    /// load order. Gives up and returns `None` once `deadline` passes.
    pub(crate) fn locate(
        &self,
        shapes: &[RegionShape],
        lat: f64,
        lon: f64,
        deadline: Instant,
    ) -> Option<usize> {
        let point = Point::new(lon, lat);
        for entry in &self.entries {
            if Instant::now() > deadline {
                return None;
            }
            if !covers(&entry.bounds, &point) {
                continue;
            }
            let hit = match &shapes[entry.shape].geometry {
                SubjectGeometry::Polygon(polygon) => polygon.intersects(&point),
                SubjectGeometry::MultiPolygon(multi) => multi.intersects(&point),
                SubjectGeometry::Point(_) | SubjectGeometry::Line(_) => false,
            };
            if hit {
                return Some(entry.shape);
            }
        }
        None
    }
}

fn covers(bounds: &Rect<f64>, point: &Point<f64>) -> bool {
    let (min, max) = (bounds.min(), bounds.max());
    point.x() >= min.x && point.x() <= max.x && point.y() >= min.y && point.y() <= max.y
}
