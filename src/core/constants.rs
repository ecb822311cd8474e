use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::scalar::{Literal, lit};

/// Latitude of the Amersfoort reference point (WGS84, degrees)
pub const AMERSFOORT_LAT: Literal = lit(5_215_517_440, 8);

/// Longitude of the Amersfoort reference point (WGS84, degrees)
pub const AMERSFOORT_LON: Literal = lit(538_720_621, 8);

/// RD X of the Amersfoort reference point (metres)
pub const AMERSFOORT_RD_X: Literal = lit(155_000, 0);

/// RD Y of the Amersfoort reference point (metres)
pub const AMERSFOORT_RD_Y: Literal = lit(463_000, 0);

/// Earth radius used by the spherical Web Mercator projection (metres)
pub const EARTH_RADIUS: Literal = lit(6_378_137, 0);

/// π to the full precision of the decimal type
pub const PI_DECIMAL: Decimal = dec!(3.1415926535897932384626433833);

/// Valid RD ranges [min_x, min_y, max_x, max_y]
pub const RD_EXTENTS: [i32; 4] = [0, 300_000, 280_000, 625_000];

/// Valid GPS ranges [min_lat, min_lon, max_lat, max_lon]
pub const GPS_EXTENTS: [i32; 4] = [-90, -180, 90, 180];

/// Smallest zoom level a tile conversion accepts
pub const MIN_ZOOM_LEVEL: u8 = 1;

/// Largest zoom level a tile conversion accepts
pub const MAX_ZOOM_LEVEL: u8 = 20;

/// Latitude bound of the square Web Mercator world, atan(sinh(π)) in degrees
pub const MAX_MERCATOR_LATITUDE: Literal = lit(8_505_112_878, 8);

/// Tolerance used when comparing coordinates for equality
pub const COORDINATE_EPSILON: Literal = lit(1, 6);

/// Decimal places kept by the RD to GPS conversion (about 11 m)
pub const GPS_DECIMALS: u32 = 4;

/// Rotation steps of the decimal arctangent
pub const CORDIC_ITERATIONS: usize = 25;

/// Taylor terms of the decimal exponential
pub const EXP_TAYLOR_TERMS: u32 = 50;

/// Upper bound on Newton steps when inverting the Gudermannian in decimal
pub const MERCATOR_NEWTON_ITERATIONS: usize = 20;

/// Upper bound on Heron steps of the decimal square root
pub const SQRT_NEWTON_ITERATIONS: usize = 50;
