use log::debug;

use crate::coord::{GpsCoordinate, OsmTile};
use crate::core::constants::{
    EARTH_RADIUS, MAX_MERCATOR_LATITUDE, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL,
};
use crate::core::scalar::Scalar;
use crate::core::validity::is_valid_gps;
use crate::error::RdError;

/// Clamps a requested zoom level to [1, 20].
pub fn clamp_zoom(zoom: i32) -> u8 {
    zoom.clamp(i32::from(MIN_ZOOM_LEVEL), i32::from(MAX_ZOOM_LEVEL)) as u8
}

/// 2^zoom by repeated doubling, exact in every precision.
fn tiles_per_axis<T: Scalar>(zoom: u8) -> T {
    (0..zoom).fold(T::one(), |scale, _| scale + scale)
}

fn to_tile_index<T: Scalar>(value: T, last: u32) -> u32 {
    let value = value.to_f64();
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(last) {
        last
    } else {
        value as u32
    }
}

/// Returns the Web Mercator tile containing a WGS84 position.
///
/// Zoom is clamped to [1, 20] and latitude to the ±85.0511° square of the
/// projection. Tile indices are clamped to the grid, so longitude 180 falls in
/// the last column.
///
/// For `Decimal` the Mercator ordinate comes from the CORDIC and Taylor
/// kernels and is good to about 1e-6. At zoom 17 and above a point within a
/// few hundredths of a tile of a row boundary can land one row away from the
/// `f64` result.
///
/// # Example
/// ```
/// use rdgrid_rs::gps_to_tile;
///
/// # fn main() -> Result<(), rdgrid_rs::RdError> {
/// let tile = gps_to_tile(15, 52.3767, 4.8968)?;
/// assert_eq!((tile.zoom, tile.x, tile.y), (15, 16829, 10767));
/// # Ok(())
/// # }
/// ```
pub fn gps_to_tile<T: Scalar>(zoom: i32, lat: T, lon: T) -> Result<OsmTile, RdError> {
    if !is_valid_gps(lat, lon) {
        return Err(RdError::InvalidCoordinate(format!("GPS ({}, {})", lat, lon)));
    }

    let zoom = clamp_zoom(zoom);
    let scale: T = tiles_per_axis(zoom);
    let last = (1u32 << zoom) - 1;

    let max_lat = T::from_literal(MAX_MERCATOR_LATITUDE);
    let lat = if lat > max_lat {
        max_lat
    } else if lat < -max_lat {
        -max_lat
    } else {
        lat
    };

    let half_turn = T::from_i32(180);
    let tile_x = ((lon + half_turn) / (half_turn + half_turn) * scale).floor();

    let psi = lat.to_radians().mercator_psi();
    let two = T::from_i32(2);
    let tile_y = ((T::one() - psi / T::pi()) / two * scale).floor();

    let tile = OsmTile {
        zoom,
        x: to_tile_index(tile_x, last),
        y: to_tile_index(tile_y, last),
    };
    debug!("Transformed GPS ({}, {}) to tile {}", lat, lon, tile);
    Ok(tile)
}

/// Returns the WGS84 centre of a Web Mercator tile.
///
/// Zoom is clamped to [1, 20]; an index outside the grid at that zoom fails
/// with [`RdError::InvalidTile`].
pub fn tile_to_gps<T: Scalar>(
    zoom: i32,
    tile_x: u32,
    tile_y: u32,
) -> Result<GpsCoordinate<T>, RdError> {
    let zoom = clamp_zoom(zoom);
    let count = 1u32 << zoom;
    if tile_x >= count || tile_y >= count {
        return Err(RdError::InvalidTile {
            zoom,
            x: tile_x,
            y: tile_y,
        });
    }

    let radius = T::from_literal(EARTH_RADIUS);
    let half_circumference = T::pi() * radius;
    let tile_size = (half_circumference + half_circumference) / tiles_per_axis(zoom);
    let two = T::from_i32(2);
    let half_tile = tile_size / two;

    let center_x = T::from_u32(tile_x) * tile_size + half_tile - half_circumference;
    let center_y = half_circumference - (T::from_u32(tile_y) * tile_size + half_tile);

    let longitude = (center_x / radius).to_degrees();
    let half_pi = T::pi() / two;
    let latitude = (two * (center_y / radius).exp().atan() - half_pi).to_degrees();

    let gps = GpsCoordinate::new(latitude, longitude);
    debug!(
        "Transformed tile {}/{}/{} to GPS ({}, {})",
        zoom, tile_x, tile_y, gps.latitude, gps.longitude
    );
    Ok(gps)
}
