//! Polynomial coefficients of the approximate RD ↔ WGS84 transformation
//! (Schreutelkamp & Strang van Hees, NCG/Kadaster).
//!
//! These are empirical regression coefficients and are reproduced digit for
//! digit. The forward and inverse tables are independent fits, not exact
//! inverses of one another.

use crate::core::scalar::{Literal, lit};

const ZERO: Literal = lit(0, 0);

/// RD X offset coefficients, indexed `[p][q]` for `dLat^p * dLon^q`.
pub const RPQ: [[Literal; 5]; 4] = [
    [ZERO, lit(190_094_945, 3), lit(-8, 3), lit(-32_391, 3), ZERO],
    [lit(-705, 3), lit(-11_832_228, 3), ZERO, lit(-608, 3), ZERO],
    [ZERO, lit(-114_221, 3), ZERO, lit(148, 3), ZERO],
    [ZERO, lit(-2_340, 3), ZERO, ZERO, ZERO],
];

/// RD Y offset coefficients, indexed `[p][q]` for `dLat^p * dLon^q`.
pub const SPQ: [[Literal; 5]; 4] = [
    [ZERO, lit(433, 3), lit(3_638_893, 3), ZERO, lit(92, 3)],
    [lit(309_056_544, 3), lit(-32, 3), lit(-157_984, 3), ZERO, lit(-54, 3)],
    [lit(73_077, 3), ZERO, lit(-6_439, 3), ZERO, ZERO],
    [lit(59_788, 3), ZERO, ZERO, ZERO, ZERO],
];

/// One term `coefficient * dX^dx_power * dY^dy_power` of an inverse polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub coefficient: Literal,
    pub dx_power: u32,
    pub dy_power: u32,
}

const fn term(coefficient: Literal, dx_power: u32, dy_power: u32) -> Term {
    Term {
        coefficient,
        dx_power,
        dy_power,
    }
}

/// Latitude correction in arcseconds.
pub const SUM_N: [Term; 11] = [
    term(lit(323_565_389, 5), 0, 1),
    term(lit(-3_258_297, 5), 2, 0),
    term(lit(-2_475, 4), 0, 2),
    term(lit(-84_978, 5), 2, 1),
    term(lit(-655, 4), 0, 3),
    term(lit(-1_709, 5), 2, 2),
    term(lit(-738, 5), 1, 0),
    term(lit(53, 4), 4, 0),
    term(lit(-39, 5), 2, 3),
    term(lit(33, 5), 4, 1),
    term(lit(-12, 5), 1, 1),
];

/// Longitude correction in arcseconds.
pub const SUM_E: [Term; 12] = [
    term(lit(526_052_916, 5), 1, 0),
    term(lit(10_594_684, 5), 1, 1),
    term(lit(245_656, 5), 1, 2),
    term(lit(-81_885, 5), 3, 0),
    term(lit(5_594, 5), 1, 3),
    term(lit(-5_607, 5), 3, 1),
    term(lit(1_199, 5), 0, 1),
    term(lit(-256, 5), 3, 2),
    term(lit(128, 5), 1, 4),
    term(lit(22, 5), 0, 2),
    term(lit(-22, 5), 2, 0),
    term(lit(26, 5), 5, 0),
];
