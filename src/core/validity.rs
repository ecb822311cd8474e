use crate::core::constants::{GPS_EXTENTS, RD_EXTENTS};
use crate::core::scalar::Scalar;

/// Returns true when `(x, y)` lies inside the RD grid
/// (X in [0, 280000], Y in [300000, 625000]). NaN is never valid.
pub fn is_valid_rd<T: Scalar>(x: T, y: T) -> bool {
    within(x, RD_EXTENTS[0], RD_EXTENTS[2]) && within(y, RD_EXTENTS[1], RD_EXTENTS[3])
}

/// Returns true when latitude is in [-90, 90] and longitude in [-180, 180].
pub fn is_valid_gps<T: Scalar>(lat: T, lon: T) -> bool {
    within(lat, GPS_EXTENTS[0], GPS_EXTENTS[2]) && within(lon, GPS_EXTENTS[1], GPS_EXTENTS[3])
}

/// [`is_valid_rd`] for optional input; any missing component is invalid.
pub fn is_valid_rd_opt<T: Scalar>(x: Option<T>, y: Option<T>) -> bool {
    match (x, y) {
        (Some(x), Some(y)) => is_valid_rd(x, y),
        _ => false,
    }
}

/// [`is_valid_gps`] for optional input; any missing component is invalid.
pub fn is_valid_gps_opt<T: Scalar>(lat: Option<T>, lon: Option<T>) -> bool {
    match (lat, lon) {
        (Some(lat), Some(lon)) => is_valid_gps(lat, lon),
        _ => false,
    }
}

fn within<T: Scalar>(value: T, min: i32, max: i32) -> bool {
    value >= T::from_i32(min) && value <= T::from_i32(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rd_range_rejection() {
        assert!(!is_valid_rd(-1.0, 400000.0));
        assert!(!is_valid_rd(280001.0, 400000.0));
        assert!(!is_valid_rd(155000.0, 299999.0));
        assert!(!is_valid_rd(155000.0, 625001.0));
    }

    #[test]
    fn test_rd_bounds_are_inclusive() {
        assert!(is_valid_rd(0.0, 300000.0));
        assert!(is_valid_rd(280000.0_f32, 625000.0_f32));
        assert!(is_valid_rd(dec!(155000), dec!(463000)));
    }

    #[test]
    fn test_gps_range_rejection() {
        assert!(!is_valid_gps(91.0, 0.0));
        assert!(!is_valid_gps(0.0, 181.0));
        assert!(!is_valid_gps(-90.5_f32, 0.0));
        assert!(!is_valid_gps(dec!(0), dec!(-180.0001)));
        assert!(is_valid_gps(dec!(-90), dec!(180)));
        assert!(is_valid_gps(52.1551744, 5.38720621));
    }

    #[test]
    fn test_nan_is_invalid() {
        assert!(!is_valid_rd(f64::NAN, 400000.0));
        assert!(!is_valid_gps(52.0, f32::NAN));
    }

    #[test]
    fn test_optional_input() {
        assert!(is_valid_rd_opt(Some(155000.0), Some(463000.0)));
        assert!(!is_valid_rd_opt(None, Some(463000.0)));
        assert!(!is_valid_rd_opt::<f64>(None, None));
        assert!(is_valid_gps_opt(Some(dec!(52)), Some(dec!(5))));
        assert!(!is_valid_gps_opt::<Decimal>(Some(dec!(52)), None));
    }
}
