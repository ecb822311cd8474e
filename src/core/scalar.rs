//! Numeric abstraction shared by the single, double and decimal precision paths.
//!
//! Every transform is written once against [`Scalar`]. `f32` and `f64` map the
//! transcendental operations onto the standard library, while
//! [`rust_decimal::Decimal`] routes them through the CORDIC/Taylor kernels in
//! [`crate::core::kernels`].

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::constants::{EXP_TAYLOR_TERMS, PI_DECIMAL};
use crate::core::kernels;

/// An exact decimal literal, `mantissa * 10^-scale`.
///
/// Constant tables are stored this way so the decimal path sees the published
/// digits exactly and the float paths see the correctly rounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub mantissa: i64,
    pub scale: u32,
}

/// Shorthand constructor for [`Literal`], usable in `const` tables.
pub const fn lit(mantissa: i64, scale: u32) -> Literal {
    Literal { mantissa, scale }
}

impl Literal {
    pub fn to_f64(self) -> f64 {
        self.mantissa as f64 / 10f64.powi(self.scale as i32)
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.mantissa, self.scale)
    }
}

/// Operations the coordinate transforms need from a number type.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialOrd
    + FromStr
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn from_literal(value: Literal) -> Self;
    fn from_i32(value: i32) -> Self;
    fn from_u32(value: u32) -> Self;
    /// Lossy conversion, used for logging and integer tile indices.
    fn to_f64(self) -> f64;
    fn pi() -> Self;
    fn abs(self) -> Self;
    fn floor(self) -> Self;
    /// Rounds to `dp` decimal places, midpoints away from zero.
    fn round_dp(self, dp: u32) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn atan(self) -> Self;
    /// Mercator ordinate `ln(tan φ + sec φ)` for a latitude in radians.
    fn mercator_psi(self) -> Self;
    /// `None` when the quotient overflows or is not finite.
    fn checked_div(self, rhs: Self) -> Option<Self>;
    /// `None` when the product overflows or is not finite.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn zero() -> Self {
        Self::from_i32(0)
    }

    fn one() -> Self {
        Self::from_i32(1)
    }

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Integer power by repeated multiplication.
    fn powi(self, exponent: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..exponent {
            result = result * self;
        }
        result
    }

    fn to_radians(self) -> Self {
        self * Self::pi() / Self::from_i32(180)
    }

    fn to_degrees(self) -> Self {
        self * Self::from_i32(180) / Self::pi()
    }
}

impl Scalar for f64 {
    fn from_literal(value: Literal) -> Self {
        value.to_f64()
    }

    fn from_i32(value: i32) -> Self {
        f64::from(value)
    }

    fn from_u32(value: u32) -> Self {
        f64::from(value)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn pi() -> Self {
        std::f64::consts::PI
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }

    fn floor(self) -> Self {
        f64::floor(self)
    }

    fn round_dp(self, dp: u32) -> Self {
        let factor = 10f64.powi(dp as i32);
        (self * factor).round() / factor
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn atan(self) -> Self {
        f64::atan(self)
    }

    fn mercator_psi(self) -> Self {
        (self.tan() + 1.0 / self.cos()).ln()
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs).filter(|quotient| quotient.is_finite())
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs).filter(|product| product.is_finite())
    }

    fn powi(self, exponent: u32) -> Self {
        f64::powi(self, exponent as i32)
    }
}

impl Scalar for f32 {
    fn from_literal(value: Literal) -> Self {
        value.to_f64() as f32
    }

    fn from_i32(value: i32) -> Self {
        value as f32
    }

    fn from_u32(value: u32) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn pi() -> Self {
        std::f32::consts::PI
    }

    fn abs(self) -> Self {
        f32::abs(self)
    }

    fn floor(self) -> Self {
        f32::floor(self)
    }

    fn round_dp(self, dp: u32) -> Self {
        let factor = 10f32.powi(dp as i32);
        (self * factor).round() / factor
    }

    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    fn exp(self) -> Self {
        f32::exp(self)
    }

    fn atan(self) -> Self {
        f32::atan(self)
    }

    fn mercator_psi(self) -> Self {
        (self.tan() + 1.0 / self.cos()).ln()
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs).filter(|quotient| quotient.is_finite())
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs).filter(|product| product.is_finite())
    }

    fn powi(self, exponent: u32) -> Self {
        f32::powi(self, exponent as i32)
    }
}

impl Scalar for Decimal {
    fn from_literal(value: Literal) -> Self {
        value.to_decimal()
    }

    fn from_i32(value: i32) -> Self {
        Decimal::from(value)
    }

    fn from_u32(value: u32) -> Self {
        Decimal::from(value)
    }

    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn pi() -> Self {
        PI_DECIMAL
    }

    fn abs(self) -> Self {
        Decimal::abs(&self)
    }

    fn floor(self) -> Self {
        Decimal::floor(&self)
    }

    fn round_dp(self, dp: u32) -> Self {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn sqrt(self) -> Self {
        kernels::sqrt(self)
    }

    fn exp(self) -> Self {
        kernels::exp(self, EXP_TAYLOR_TERMS)
    }

    fn atan(self) -> Self {
        kernels::atan(self, Decimal::ONE)
    }

    fn mercator_psi(self) -> Self {
        kernels::inverse_gudermannian(self)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Decimal::checked_mul(self, rhs)
    }
}
