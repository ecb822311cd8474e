use log::debug;
use rayon::prelude::*;

use crate::coord::{GpsCoordinate, RdCoordinate};
use crate::core::scalar::Scalar;
use crate::error::RdError;
use crate::geom::parse::try_parse_polygon;

/// Parallel RD → WGS84 conversion over a slice of coordinates.
///
/// Each input yields its own `Result`, in input order, so one out-of-range
/// point does not abort the batch.
pub trait RdCoordinatesToGps<T: Scalar> {
    fn to_gps_batch(&self) -> Vec<Result<GpsCoordinate<T>, RdError>>;
}

impl<T: Scalar> RdCoordinatesToGps<T> for [RdCoordinate<T>] {
    fn to_gps_batch(&self) -> Vec<Result<GpsCoordinate<T>, RdError>> {
        debug!("Converting {} RD coordinates to GPS", self.len());
        self.par_iter().map(|c| c.to_gps()).collect()
    }
}

/// Parallel WGS84 → RD conversion over a slice of coordinates.
pub trait GpsCoordinatesToRd<T: Scalar> {
    fn to_rd_batch(&self) -> Vec<Result<RdCoordinate<T>, RdError>>;
}

impl<T: Scalar> GpsCoordinatesToRd<T> for [GpsCoordinate<T>] {
    fn to_rd_batch(&self) -> Vec<Result<RdCoordinate<T>, RdError>> {
        debug!("Converting {} GPS coordinates to RD", self.len());
        self.par_iter().map(|c| c.to_rd()).collect()
    }
}

pub fn gps_to_rd_batch<T: Scalar>(
    coords: &[GpsCoordinate<T>],
) -> Vec<Result<RdCoordinate<T>, RdError>> {
    coords.to_rd_batch()
}

pub fn rd_to_gps_batch<T: Scalar>(
    coords: &[RdCoordinate<T>],
) -> Vec<Result<GpsCoordinate<T>, RdError>> {
    coords.to_gps_batch()
}

/// Parses an RD `POLYGON((...))` and converts its ring to WGS84.
///
/// Unlike the batch helpers this is all-or-nothing: malformed text or any
/// vertex outside the RD range fails the whole polygon.
///
/// # Example
/// ```
/// use rdgrid_rs::polygon_to_gps;
///
/// # fn main() -> Result<(), rdgrid_rs::RdError> {
/// let ring = polygon_to_gps::<f64>("POLYGON((155000 463000, 156000 463000, 156000 464000))")?;
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring[0].latitude, 52.1552);
/// # Ok(())
/// # }
/// ```
pub fn polygon_to_gps<T: Scalar>(text: &str) -> Result<Vec<GpsCoordinate<T>>, RdError> {
    let ring = try_parse_polygon::<T>(text)?;
    ring.par_iter().map(|c| c.to_gps()).collect()
}
