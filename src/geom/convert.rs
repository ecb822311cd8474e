use geo_types::{Coord, LineString, Polygon};

use crate::coord::RdCoordinate;

/// Builds a `geo_types::Polygon` from a parsed ring, closing it if needed.
pub fn ring_to_polygon(ring: &[RdCoordinate<f64>]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring.iter().map(|c| Coord { x: c.x, y: c.y }).collect();
    // LineString::from does not close; Polygon::new does.
    Polygon::new(LineString::from(coords), vec![])
}

/// Flattens the exterior ring of a `geo_types::Polygon` into RD coordinates.
pub fn polygon_to_ring(polygon: &Polygon<f64>) -> Vec<RdCoordinate<f64>> {
    polygon
        .exterior()
        .coords()
        .map(|c| RdCoordinate::new(c.x, c.y))
        .collect()
}
