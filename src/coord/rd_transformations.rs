use log::debug;

use crate::coord::{GpsCoordinate, RdCoordinate};
use crate::core::coefficients::{RPQ, SPQ, SUM_E, SUM_N, Term};
use crate::core::constants::{
    AMERSFOORT_LAT, AMERSFOORT_LON, AMERSFOORT_RD_X, AMERSFOORT_RD_Y, GPS_DECIMALS,
};
use crate::core::scalar::{Scalar, lit};
use crate::core::validity::{is_valid_gps, is_valid_rd};
use crate::error::RdError;

/// Converts a WGS84 latitude/longitude to RD X/Y.
///
/// Evaluates the `rpq`/`spq` polynomials in the scaled offsets from
/// Amersfoort. Fails with [`RdError::InvalidCoordinate`] before any arithmetic
/// if the input is outside the GPS range.
///
/// # Example
/// ```
/// use rdgrid_rs::gps_to_rd;
///
/// # fn main() -> Result<(), rdgrid_rs::RdError> {
/// let rd = gps_to_rd(52.1551744, 5.38720621)?;
/// assert_eq!(rd.x, 155000.0);
/// assert_eq!(rd.y, 463000.0);
/// # Ok(())
/// # }
/// ```
pub fn gps_to_rd<T: Scalar>(lat: T, lon: T) -> Result<RdCoordinate<T>, RdError> {
    if !is_valid_gps(lat, lon) {
        return Err(RdError::InvalidCoordinate(format!("GPS ({}, {})", lat, lon)));
    }

    let scale = T::from_literal(lit(36, 2));
    let d_lat = scale * (lat - T::from_literal(AMERSFOORT_LAT));
    let d_lon = scale * (lon - T::from_literal(AMERSFOORT_LON));

    let mut x_offset = T::zero();
    let mut y_offset = T::zero();
    for p in 0..RPQ.len() {
        for q in 0..RPQ[p].len() {
            let weight = d_lat.powi(p as u32) * d_lon.powi(q as u32);
            x_offset = x_offset + T::from_literal(RPQ[p][q]) * weight;
            y_offset = y_offset + T::from_literal(SPQ[p][q]) * weight;
        }
    }

    let rd = RdCoordinate::new(
        T::from_literal(AMERSFOORT_RD_X) + x_offset,
        T::from_literal(AMERSFOORT_RD_Y) + y_offset,
    );
    debug!("Transformed GPS ({}, {}) to RD ({}, {})", lat, lon, rd.x, rd.y);
    Ok(rd)
}

/// Converts RD X/Y to WGS84, rounded to four decimals (about 11 m, the
/// accuracy of the approximation).
///
/// # Example
/// ```
/// use rdgrid_rs::rd_to_gps;
///
/// # fn main() -> Result<(), rdgrid_rs::RdError> {
/// let maastricht = rd_to_gps(176548.0, 318068.0)?;
/// assert_eq!(maastricht.latitude, 50.852);
/// assert_eq!(maastricht.longitude, 5.6932);
/// # Ok(())
/// # }
/// ```
pub fn rd_to_gps<T: Scalar>(x: T, y: T) -> Result<GpsCoordinate<T>, RdError> {
    let gps = rd_to_gps_unrounded(x, y)?;
    Ok(GpsCoordinate::new(
        gps.latitude.round_dp(GPS_DECIMALS),
        gps.longitude.round_dp(GPS_DECIMALS),
    ))
}

/// Converts RD X/Y to WGS84 without the final rounding step.
pub fn rd_to_gps_unrounded<T: Scalar>(x: T, y: T) -> Result<GpsCoordinate<T>, RdError> {
    if !is_valid_rd(x, y) {
        return Err(RdError::InvalidCoordinate(format!("RD ({}, {})", x, y)));
    }

    let scale = T::from_literal(lit(1, 5));
    let delta_x = (x - T::from_literal(AMERSFOORT_RD_X)) * scale;
    let delta_y = (y - T::from_literal(AMERSFOORT_RD_Y)) * scale;

    let arcseconds = T::from_i32(3600);
    let sum_n = evaluate(&SUM_N, delta_x, delta_y);
    let sum_e = evaluate(&SUM_E, delta_x, delta_y);

    let gps = GpsCoordinate::new(
        T::from_literal(AMERSFOORT_LAT) + sum_n / arcseconds,
        T::from_literal(AMERSFOORT_LON) + sum_e / arcseconds,
    );
    debug!(
        "Transformed RD ({}, {}) to GPS ({}, {})",
        x, y, gps.latitude, gps.longitude
    );
    Ok(gps)
}

fn evaluate<T: Scalar>(terms: &[Term], delta_x: T, delta_y: T) -> T {
    terms.iter().fold(T::zero(), |sum, term| {
        sum + T::from_literal(term.coefficient)
            * delta_x.powi(term.dx_power)
            * delta_y.powi(term.dy_power)
    })
}
