mod rd_transformations;
mod tile_transformations;

pub use rd_transformations::{gps_to_rd, rd_to_gps, rd_to_gps_unrounded};
pub use tile_transformations::{clamp_zoom, gps_to_tile, tile_to_gps};

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::core::constants::COORDINATE_EPSILON;
use crate::core::scalar::Scalar;
use crate::core::validity::{is_valid_gps, is_valid_rd};
use crate::error::RdError;
use crate::geom::parse::try_parse_point;

fn approx_eq<T: Scalar>(a: T, b: T) -> bool {
    (a - b).abs() < T::from_literal(COORDINATE_EPSILON)
}

/// A WGS84 position in degrees.
///
/// Values outside [-90, 90] / [-180, 180] can be represented but fail
/// [`GpsCoordinate::is_valid`] and every conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GpsCoordinate<T = f64> {
    pub latitude: T,
    pub longitude: T,
}

impl<T: Scalar> GpsCoordinate<T> {
    pub fn new(latitude: T, longitude: T) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_gps(self.latitude, self.longitude)
    }

    /// Converts to the RD grid.
    ///
    /// # Example
    /// ```
    /// use rdgrid_rs::GpsCoordinate;
    ///
    /// # fn main() -> Result<(), rdgrid_rs::RdError> {
    /// let rd = GpsCoordinate::<f64>::new(52.3767, 4.8968).to_rd()?;
    /// assert!((rd.x - 121606.3).abs() < 0.1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_rd(&self) -> Result<RdCoordinate<T>, RdError> {
        gps_to_rd(self.latitude, self.longitude)
    }

    /// Returns the slippy-map tile containing this position.
    pub fn to_tile(&self, zoom: i32) -> Result<OsmTile, RdError> {
        gps_to_tile(zoom, self.latitude, self.longitude)
    }
}

impl<T: Scalar> PartialEq for GpsCoordinate<T> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.latitude, other.latitude) && approx_eq(self.longitude, other.longitude)
    }
}

/// A position on the Dutch Rijksdriehoek grid, in metres.
///
/// Arithmetic is componentwise. Equality tolerates differences below 1e-6
/// because values come out of floating point polynomials.
///
/// # Example
/// ```
/// use rdgrid_rs::RdCoordinate;
///
/// # fn main() -> Result<(), rdgrid_rs::RdError> {
/// let a = RdCoordinate::new(155000.0, 463000.0);
/// let b: RdCoordinate = "POINT(155003 463004)".parse()?;
/// assert_eq!(a.distance(Some(&b)), 5.0);
/// assert_eq!(b - a, RdCoordinate::new(3.0, 4.0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RdCoordinate<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> RdCoordinate<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_rd(self.x, self.y)
    }

    /// Converts to WGS84, rounded to four decimals.
    pub fn to_gps(&self) -> Result<GpsCoordinate<T>, RdError> {
        rd_to_gps(self.x, self.y)
    }

    /// Euclidean distance to `other`; a missing neighbour is at distance zero.
    ///
    /// The larger offset is factored out before squaring, so the result does
    /// not overflow for any representable offset.
    pub fn distance(&self, other: Option<&Self>) -> T {
        let Some(other) = other else {
            return T::zero();
        };

        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        let (long, short) = if dx >= dy { (dx, dy) } else { (dy, dx) };
        if long.is_zero() {
            return T::zero();
        }
        let ratio = short / long;
        long * (T::one() + ratio * ratio).sqrt()
    }

    /// Componentwise division.
    ///
    /// Fails with [`RdError::DivisionByZero`] when either divisor component is
    /// zero and with [`RdError::ArithmeticOverflow`] when a quotient does not
    /// fit `T`.
    pub fn checked_div(self, divisor: Self) -> Result<Self, RdError> {
        if divisor.x.is_zero() || divisor.y.is_zero() {
            return Err(RdError::DivisionByZero);
        }
        match (self.x.checked_div(divisor.x), self.y.checked_div(divisor.y)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(RdError::ArithmeticOverflow(format!("{} / {}", self, divisor))),
        }
    }

    /// Componentwise multiplication, failing with
    /// [`RdError::ArithmeticOverflow`] when a product does not fit `T`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, RdError> {
        match (self.x.checked_mul(rhs.x), self.y.checked_mul(rhs.y)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(RdError::ArithmeticOverflow(format!("{} * {}", self, rhs))),
        }
    }
}

impl<T: Scalar> PartialEq for RdCoordinate<T> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl<T: Scalar> Add for RdCoordinate<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for RdCoordinate<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Overflow behaves like `T`'s own `*`: infinite for floats, a panic for
/// `Decimal`. Use [`RdCoordinate::checked_mul`] to get an error instead.
impl<T: Scalar> Mul for RdCoordinate<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Scalar> Div for RdCoordinate<T> {
    type Output = Result<Self, RdError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl<T: Scalar> fmt::Display for RdCoordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT({} {})", self.x, self.y)
    }
}

impl<T: Scalar> FromStr for RdCoordinate<T> {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_point(s)
    }
}

impl<T: Scalar> From<(T, T)> for RdCoordinate<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point<f64>> for RdCoordinate<f64> {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<RdCoordinate<f64>> for Point<f64> {
    fn from(coord: RdCoordinate<f64>) -> Self {
        Point::new(coord.x, coord.y)
    }
}

/// A slippy-map tile address. `zoom` is always within [1, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OsmTile {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

impl OsmTile {
    /// Centre of the tile in WGS84.
    pub fn to_gps<T: Scalar>(&self) -> Result<GpsCoordinate<T>, RdError> {
        tile_to_gps(i32::from(self.zoom), self.x, self.y)
    }
}

impl fmt::Display for OsmTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_arithmetic_is_componentwise() {
        let a = RdCoordinate::new(10.0, 20.0);
        let b = RdCoordinate::new(2.0, 4.0);
        assert_eq!(a + b, RdCoordinate::new(12.0, 24.0));
        assert_eq!(a - b, RdCoordinate::new(8.0, 16.0));
        assert_eq!(a * b, RdCoordinate::new(20.0, 80.0));
        assert_eq!((a / b).unwrap(), RdCoordinate::new(5.0, 5.0));
    }

    #[test]
    fn test_division_by_zero_component_fails() {
        let a = RdCoordinate::new(10.0, 20.0);
        assert_eq!(a / RdCoordinate::new(0.0, 4.0), Err(RdError::DivisionByZero));
        assert_eq!(a / RdCoordinate::new(2.0, 0.0), Err(RdError::DivisionByZero));
        assert_eq!(a / RdCoordinate::new(-0.0, 0.0), Err(RdError::DivisionByZero));

        let d = RdCoordinate::new(dec!(1), dec!(1));
        assert_eq!(
            d.checked_div(RdCoordinate::new(Decimal::ZERO, dec!(3))),
            Err(RdError::DivisionByZero)
        );
    }

    #[test]
    fn test_equality_tolerance() {
        let a = RdCoordinate::new(155000.0, 463000.0);
        assert_eq!(a, RdCoordinate::new(155000.0000005, 463000.0));
        assert_ne!(a, RdCoordinate::new(155000.00001, 463000.0));
        assert_ne!(a, RdCoordinate::new(155000.0, 463000.00001));

        let d = RdCoordinate::new(dec!(1.0000001), dec!(2));
        assert_eq!(d, RdCoordinate::new(dec!(1), dec!(2)));
        assert_ne!(d, RdCoordinate::new(dec!(1.000002), dec!(2)));
    }

    #[test]
    fn test_distance() {
        let a = RdCoordinate::new(0.0, 300000.0);
        let b = RdCoordinate::new(3.0, 300004.0);
        assert_eq!(a.distance(Some(&b)), 5.0);
        assert_eq!(a.distance(None), 0.0);

        let c = RdCoordinate::new(dec!(0), dec!(0));
        let d = RdCoordinate::new(dec!(6), dec!(8));
        assert_eq!(c.distance(Some(&d)), dec!(10));
    }

    #[test]
    fn test_distance_does_not_overflow_decimal() {
        let far = RdCoordinate::new(dec!(1e20), dec!(1e20));
        let origin = RdCoordinate::new(Decimal::ZERO, Decimal::ZERO);
        let expected = 1e20 * std::f64::consts::SQRT_2;
        let actual = Scalar::to_f64(far.distance(Some(&origin)));
        assert!(((actual - expected) / expected).abs() < 1e-12);
        assert_eq!(origin.distance(Some(&origin)), Decimal::ZERO);
    }

    #[test]
    fn test_division_overflow_is_an_error() {
        let big = RdCoordinate::new(dec!(1e10), dec!(1));
        let tiny = RdCoordinate::new(dec!(1e-20), dec!(1));
        assert!(matches!(big / tiny, Err(RdError::ArithmeticOverflow(_))));

        let big = RdCoordinate::new(1e300_f64, 1.0);
        let tiny = RdCoordinate::new(1e-300_f64, 1.0);
        assert!(matches!(big / tiny, Err(RdError::ArithmeticOverflow(_))));
    }

    #[test]
    fn test_checked_mul() -> Result<(), RdError> {
        let a = RdCoordinate::new(dec!(10), dec!(20));
        let b = RdCoordinate::new(dec!(2), dec!(4));
        assert_eq!(a.checked_mul(b)?, a * b);

        let max = RdCoordinate::new(Decimal::MAX, dec!(1));
        assert!(matches!(
            max.checked_mul(RdCoordinate::new(dec!(2), dec!(1))),
            Err(RdError::ArithmeticOverflow(_))
        ));
        Ok(())
    }

    #[test]
    fn test_display_and_parse() -> Result<(), RdError> {
        let coord = RdCoordinate::new(121605.5, 487759.0);
        assert_eq!(coord.to_string(), "POINT(121605.5 487759)");
        let parsed: RdCoordinate = coord.to_string().parse()?;
        assert_eq!(parsed, coord);
        Ok(())
    }

    #[test]
    fn test_geo_types_interop() {
        let point = Point::new(155000.0, 463000.0);
        let coord = RdCoordinate::from(point);
        assert!(coord.is_valid());
        let back: Point<f64> = coord.into();
        assert_eq!(back, point);
    }

    #[test]
    fn test_gps_validity() {
        assert!(GpsCoordinate::new(52.0, 5.0).is_valid());
        assert!(!GpsCoordinate::new(91.0, 0.0).is_valid());
        assert!(!GpsCoordinate::new(0.0_f32, 181.0).is_valid());
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), serde_json::Error> {
        let coord = RdCoordinate::new(155000.0, 463000.0);
        let json = serde_json::to_string(&coord)?;
        assert_eq!(json, r#"{"x":155000.0,"y":463000.0}"#);

        let tile: OsmTile = serde_json::from_str(r#"{"zoom":12,"x":2103,"y":1346}"#)?;
        assert_eq!(tile.to_string(), "12/2103/1346");
        Ok(())
    }
}
