/*
   Copyright 2024 the geosphere contributors

   This file is part of geosphere.

   geosphere is free software: you can redistribute it and/or modify
   it under the terms of the GNU Affero General Public License as
   published by the Free Software Foundation, either version 3 of the
   License, or (at your option) any later version.

   geosphere is distributed in the hope that it will be useful, but
   WITHOUT ANY WARRANTY; without even the implied warranty of
   MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
   Affero General Public License for more details.

   You should have received a copy of the GNU Affero General Public
   License along with geosphere. If not, see
   <https://www.gnu.org/licenses/>.
*/

//! GeoJSON predicate helpers. These bridge the `geojson` crate's
//! geometry types to simple yes/no questions (does this ring contain
//! this point, what kind of geometry is this feature); they do not
//! attempt to cover a geometry with cells, which would require a
//! full cube-face projection this crate does not implement (see
//! [`crate::s2`]'s module docs).

use geojson::{Geometry, Value};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeoJsonError {
    #[error("expected a Polygon or MultiPolygon geometry, found {0:?}")]
    UnsupportedGeometry(&'static str),
    #[error("ring has fewer than 3 positions")]
    DegenerateRing,
}

/// The geometry type name, for dispatch/logging purposes.
pub fn geometry_kind(geometry: &Geometry) -> &'static str {
    match &geometry.value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Ray-casting point-in-polygon test against a `Polygon` or
/// `MultiPolygon` geometry's outer rings (holes are not subtracted;
/// a fuller treatment belongs to a real geometry crate, not this
/// predicate helper).
pub fn contains_point(geometry: &Geometry, lng: f64, lat: f64) -> Result<bool, GeoJsonError> {
    match &geometry.value {
        Value::Polygon(rings) => outer_ring_contains(rings, lng, lat),
        Value::MultiPolygon(polygons) => {
            for rings in polygons {
                if outer_ring_contains(rings, lng, lat)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        _ => Err(GeoJsonError::UnsupportedGeometry(geometry_kind(geometry))),
    }
}

fn outer_ring_contains(rings: &[Vec<Vec<f64>>], lng: f64, lat: f64) -> Result<bool, GeoJsonError> {
    let outer = rings.first().ok_or(GeoJsonError::DegenerateRing)?;
    if outer.len() < 3 {
        return Err(GeoJsonError::DegenerateRing);
    }
    Ok(ray_cast(outer, lng, lat))
}

/// Standard even-odd ray-casting test: count crossings of a
/// rightward ray from `(lng, lat)` against each ring edge.
fn ray_cast(ring: &[Vec<f64>], lng: f64, lat: f64) -> bool {
    let mut inside = false;
    let n = ring.len();
    for i in 0..n {
        let (x1, y1) = (ring[i][0], ring[i][1]);
        let (x2, y2) = (ring[(i + 1) % n][0], ring[(i + 1) % n][1]);

        let straddles = (y1 > lat) != (y2 > lat);
        if straddles {
            let x_at_lat = x1 + (lat - y1) / (y2 - y1) * (x2 - x1);
            if lng < x_at_lat {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::Geometry;

    fn square() -> Geometry {
        Geometry::new(Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
            vec![10.0, 0.0],
            vec![0.0, 0.0],
        ]]))
    }

    #[test]
    fn point_inside_square() {
        assert_eq!(contains_point(&square(), 5.0, 5.0), Ok(true));
    }

    #[test]
    fn point_outside_square() {
        assert_eq!(contains_point(&square(), 20.0, 20.0), Ok(false));
    }

    #[test]
    fn geometry_kind_reports_polygon() {
        assert_eq!(geometry_kind(&square()), "Polygon");
    }

    #[test]
    fn unsupported_geometry_errors() {
        let point = Geometry::new(Value::Point(vec![1.0, 2.0]));
        assert_eq!(
            contains_point(&point, 0.0, 0.0),
            Err(GeoJsonError::UnsupportedGeometry("Point"))
        );
    }
}
