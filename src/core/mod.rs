pub mod coefficients;
pub mod constants;
pub(crate) mod kernels;
pub mod scalar;
pub mod validity;

pub use constants::{
    AMERSFOORT_LAT, AMERSFOORT_LON, AMERSFOORT_RD_X, AMERSFOORT_RD_Y, CORDIC_ITERATIONS,
    EARTH_RADIUS, EXP_TAYLOR_TERMS, GPS_DECIMALS, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL,
};
pub use scalar::{Literal, Scalar, lit};
pub use validity::{is_valid_gps, is_valid_gps_opt, is_valid_rd, is_valid_rd_opt};
