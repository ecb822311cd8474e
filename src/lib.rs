//! # rdgrid-rs
//!
//! Conversions between WGS84 GPS coordinates, the Dutch Rijksdriehoek (RD)
//! grid and Web Mercator slippy-map tiles. Every conversion is generic over
//! [`Scalar`] and works in `f32`, `f64` or fixed-point
//! [`rust_decimal::Decimal`].
//!
//! ### 1. WGS84 ↔ RD
//!
//! ```
//! use rdgrid_rs::{gps_to_rd, rd_to_gps};
//!
//! # fn main() -> Result<(), rdgrid_rs::RdError> {
//! let amsterdam = rd_to_gps(121605.0, 487759.0)?;
//! assert_eq!((amsterdam.latitude, amsterdam.longitude), (52.3767, 4.8968));
//!
//! let rd = gps_to_rd(amsterdam.latitude, amsterdam.longitude)?;
//! println!("{}", rd);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Slippy-map tiles
//!
//! ```
//! use rdgrid_rs::{GpsCoordinate, gps_to_tile, tile_to_gps};
//!
//! # fn main() -> Result<(), rdgrid_rs::RdError> {
//! let tile = gps_to_tile(12, 52.3767, 4.8968)?;
//! let centre: GpsCoordinate = tile_to_gps(12, tile.x, tile.y)?;
//! println!("{} centred at {:?}", tile, centre);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Fixed-point precision
//!
//! ```
//! use rdgrid_rs::rd_to_gps;
//! use rust_decimal_macros::dec;
//!
//! # fn main() -> Result<(), rdgrid_rs::RdError> {
//! let maastricht = rd_to_gps(dec!(176548), dec!(318068))?;
//! assert_eq!(maastricht.latitude, dec!(50.8520));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod coord;
pub mod core;
pub mod error;
pub mod geom;

pub use api::{
    GpsCoordinatesToRd, RdCoordinatesToGps, gps_to_rd_batch, polygon_to_gps, rd_to_gps_batch,
};
pub use coord::{
    GpsCoordinate, OsmTile, RdCoordinate, clamp_zoom, gps_to_rd, gps_to_tile, rd_to_gps,
    rd_to_gps_unrounded, tile_to_gps,
};
pub use crate::core::{
    AMERSFOORT_LAT, AMERSFOORT_LON, AMERSFOORT_RD_X, AMERSFOORT_RD_Y, CORDIC_ITERATIONS,
    EARTH_RADIUS, EXP_TAYLOR_TERMS, GPS_DECIMALS, Literal, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, Scalar,
    is_valid_gps, is_valid_gps_opt, is_valid_rd, is_valid_rd_opt, lit,
};
pub use error::RdError;
pub use geom::{
    parse_point, parse_polygon, polygon_to_ring, ring_to_polygon, try_parse_point,
    try_parse_polygon,
};

pub use geo_types;
pub use rust_decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), RdError> {
        let ring: Vec<RdCoordinate> =
            parse_polygon("POLYGON((121000 487000, 122000 487000, 122000 488000, 121000 487000))");
        assert_eq!(ring.len(), 4);

        let gps: Vec<GpsCoordinate> = ring.to_gps_batch().into_iter().collect::<Result<_, _>>()?;
        for (rd, gps) in ring.iter().zip(&gps) {
            let back = gps.to_rd()?;
            // bounded by the four-decimal rounding of the inverse
            assert!(rd.distance(Some(&back)) < 10.0);
        }

        let tiles: Vec<OsmTile> = gps.iter().map(|g| g.to_tile(14)).collect::<Result<_, _>>()?;
        assert!(tiles.iter().all(|t| t.zoom == 14));
        Ok(())
    }

    #[test]
    fn test_precisions_agree() -> Result<(), RdError> {
        let double = rd_to_gps(176548.0, 318068.0)?;
        let single = rd_to_gps(176548.0_f32, 318068.0_f32)?;
        let decimal = rd_to_gps(dec!(176548), dec!(318068))?;

        assert_abs_diff_eq!(f64::from(single.latitude), double.latitude, epsilon = 1e-4);
        assert_abs_diff_eq!(f64::from(single.longitude), double.longitude, epsilon = 1e-4);
        assert_eq!(decimal.latitude, dec!(50.852));
        assert_eq!(decimal.longitude, dec!(5.6932));
        Ok(())
    }

    #[test]
    fn test_point_text_to_tile() -> Result<(), RdError> {
        let point: RdCoordinate<Decimal> = "POINT(155000 463000)".parse()?;
        let tile = point.to_gps()?.to_tile(25)?;
        assert_eq!(tile.zoom, MAX_ZOOM_LEVEL);

        let centre: GpsCoordinate<Decimal> = tile.to_gps()?;
        assert!(centre.is_valid());
        Ok(())
    }

    #[test]
    fn test_optional_validity() {
        let missing: Option<f64> = None;
        assert!(!is_valid_rd_opt(missing, Some(463000.0)));
        assert!(is_valid_gps_opt(Some(52.0), Some(5.0)));
    }
}
