//! Transcendental functions for the decimal precision path.
//!
//! `rust_decimal` ships no `atan`/`exp` in its default feature set, so the
//! decimal transforms use a CORDIC arctangent and a truncated Taylor
//! exponential. Iteration counts are fixed so results are reproducible.

use log::trace;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;

use crate::core::constants::{
    CORDIC_ITERATIONS, EXP_TAYLOR_TERMS, MERCATOR_NEWTON_ITERATIONS, PI_DECIMAL,
    SQRT_NEWTON_ITERATIONS,
};

/// atan(2^-i) for i in 0..25
const ATAN_TABLE: [Decimal; CORDIC_ITERATIONS] = [
    dec!(0.78539816339744830962),
    dec!(0.46364760900080611621),
    dec!(0.24497866312686415417),
    dec!(0.12435499454676143503),
    dec!(0.062418809995957348474),
    dec!(0.031239833430268276254),
    dec!(0.015623728620476830803),
    dec!(0.0078123410601011112965),
    dec!(0.0039062301319669718276),
    dec!(0.0019531225164788186851),
    dec!(0.0009765621895593194304),
    dec!(0.00048828121119489827547),
    dec!(0.00024414062014936176402),
    dec!(0.00012207031189367020424),
    dec!(0.000061035156174208775022),
    dec!(0.000030517578115526096862),
    dec!(0.000015258789061315762107),
    dec!(0.0000076293945311019702634),
    dec!(0.0000038146972656064962829),
    dec!(0.0000019073486328101870354),
    dec!(0.00000095367431640596087942),
    dec!(0.00000047683715820308885993),
    dec!(0.00000023841857910155798249),
    dec!(0.00000011920928955078068531),
    dec!(0.000000059604644775390554414),
];

/// Roughly the resolution of the 25-step CORDIC; smaller steps are noise.
const NEWTON_TOLERANCE: Decimal = dec!(0.00000001);

/// Angle of the vector `(x, y)` in radians, i.e. `atan(y / x)` extended to all
/// quadrants.
///
/// The vector is rotated towards the positive x axis by ±atan(2^-i) for each
/// table entry, accumulating the angle turned. Accurate to about 1e-7 rad.
///
/// This is vectoring mode: the input vector itself is driven onto the x axis,
/// so the accumulated angle is the result. Rotating a unit vector from `(1, 0)`
/// and rescaling by `x / current_x` afterwards does not converge to atan.
pub(crate) fn atan(y: Decimal, x: Decimal) -> Decimal {
    if x.is_zero() {
        return match y.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => PI_DECIMAL / Decimal::TWO,
            std::cmp::Ordering::Less => -PI_DECIMAL / Decimal::TWO,
            std::cmp::Ordering::Equal => Decimal::ZERO,
        };
    }

    // CORDIC only converges for |angle| < ~1.74 rad; fold the left half-plane.
    let (mut current_x, mut current_y, offset) = if x < Decimal::ZERO {
        let offset = if y < Decimal::ZERO { -PI_DECIMAL } else { PI_DECIMAL };
        (-x, -y, offset)
    } else {
        (x, y, Decimal::ZERO)
    };

    let mut angle = Decimal::ZERO;
    let mut factor = Decimal::ONE;
    for step in ATAN_TABLE {
        let (next_x, next_y) = if current_y > Decimal::ZERO {
            angle += step;
            (current_x + current_y * factor, current_y - current_x * factor)
        } else {
            angle -= step;
            (current_x - current_y * factor, current_y + current_x * factor)
        };
        current_x = next_x;
        current_y = next_y;
        factor *= dec!(0.5);
    }

    trace!("cordic atan({}, {}) = {} (residual y {})", y, x, angle + offset, current_y);
    angle + offset
}

/// `e^value` as the first `iterations` terms of its Taylor series.
///
/// Negative arguments are evaluated as `1 / e^-value`, since the alternating
/// series cancels catastrophically. Saturates at `Decimal::MAX` (or zero for
/// negative input) instead of overflowing.
pub(crate) fn exp(value: Decimal, iterations: u32) -> Decimal {
    if value.is_sign_negative() {
        let positive = exp(-value, iterations);
        if positive == Decimal::MAX {
            return Decimal::ZERO;
        }
        return Decimal::ONE.checked_div(positive).unwrap_or(Decimal::ZERO);
    }

    let mut term = Decimal::ONE;
    let mut result = Decimal::ONE;
    for n in 1..=iterations {
        term = match term
            .checked_mul(value)
            .and_then(|t| t.checked_div(Decimal::from(n)))
        {
            Some(next) => next,
            None => return Decimal::MAX,
        };
        result = match result.checked_add(term) {
            Some(sum) => sum,
            None => return Decimal::MAX,
        };
    }
    result
}

/// Square root by Heron's method, seeded from the `f64` estimate.
pub(crate) fn sqrt(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut guess = value
        .to_f64()
        .and_then(|v| Decimal::from_f64(v.sqrt()))
        .filter(|g| !g.is_zero())
        .unwrap_or(value);

    for _ in 0..SQRT_NEWTON_ITERATIONS {
        let next = (guess + value / guess) / Decimal::TWO;
        if next == guess {
            break;
        }
        guess = next;
    }
    guess
}

/// Inverse Gudermannian: the ψ for which `2·atan(exp ψ) − π/2 = phi`.
///
/// This equals `ln(tan φ + sec φ)`, the Mercator ordinate, but needs only the
/// exp and atan kernels. Newton's method on the Gudermannian (whose derivative
/// is `sech ψ = 2eψ / (1 + e2ψ)`) converges monotonically from `ψ = φ`.
pub(crate) fn inverse_gudermannian(phi: Decimal) -> Decimal {
    let half_pi = PI_DECIMAL / Decimal::TWO;
    let mut psi = phi;

    for iteration in 0..MERCATOR_NEWTON_ITERATIONS {
        let e = exp(psi, EXP_TAYLOR_TERMS);
        let gudermannian = Decimal::TWO * atan(e, Decimal::ONE) - half_pi;
        let slope = Decimal::TWO * e / (Decimal::ONE + e * e);
        if slope.is_zero() {
            break;
        }

        let step = (gudermannian - phi) / slope;
        psi -= step;
        if step.abs() < NEWTON_TOLERANCE {
            trace!("inverse gudermannian converged after {} steps", iteration + 1);
            break;
        }
    }
    psi
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Decimal, expected: f64, tolerance: f64) {
        let actual = actual.to_f64().unwrap_or(f64::NAN);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_atan_table_has_fixed_length() {
        assert_eq!(ATAN_TABLE.len(), 25);
        assert_eq!(CORDIC_ITERATIONS, 25);
    }

    #[test]
    fn test_atan_known_angles() {
        assert_close(atan(Decimal::ONE, Decimal::ONE), std::f64::consts::FRAC_PI_4, 5e-7);
        assert_close(atan(Decimal::ZERO, Decimal::ONE), 0.0, 5e-7);
        assert_close(atan(dec!(-1), Decimal::ONE), -std::f64::consts::FRAC_PI_4, 5e-7);
        assert_close(atan(dec!(23.1406926), Decimal::ONE), 23.1406926_f64.atan(), 5e-7);
    }

    #[test]
    fn test_atan_quadrants() {
        assert_close(atan(Decimal::ONE, dec!(-1)), 3.0 * std::f64::consts::FRAC_PI_4, 5e-7);
        assert_close(atan(dec!(-1), dec!(-1)), -3.0 * std::f64::consts::FRAC_PI_4, 5e-7);
        assert_close(atan(dec!(2), Decimal::ZERO), std::f64::consts::FRAC_PI_2, 1e-12);
        assert_eq!(atan(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_atan_is_deterministic() {
        let a = atan(dec!(0.3), Decimal::ONE);
        let b = atan(dec!(0.3), Decimal::ONE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_exp_matches_native() {
        assert_eq!(exp(Decimal::ZERO, EXP_TAYLOR_TERMS), Decimal::ONE);
        assert_close(exp(Decimal::ONE, EXP_TAYLOR_TERMS), std::f64::consts::E, 1e-12);
        assert_close(exp(PI_DECIMAL, EXP_TAYLOR_TERMS), std::f64::consts::PI.exp(), 1e-9);
        assert_close(exp(-PI_DECIMAL, EXP_TAYLOR_TERMS), (-std::f64::consts::PI).exp(), 1e-12);
    }

    #[test]
    fn test_exp_fewer_terms_is_coarser() {
        let coarse = exp(Decimal::TWO, 5);
        assert_close(coarse, 1.0 + 2.0 + 2.0 + 8.0 / 6.0 + 16.0 / 24.0 + 32.0 / 120.0, 1e-12);
        assert!(coarse < exp(Decimal::TWO, EXP_TAYLOR_TERMS));
    }

    #[test]
    fn test_exp_saturates_instead_of_overflowing() {
        assert_eq!(exp(dec!(1000), EXP_TAYLOR_TERMS), Decimal::MAX);
    }

    #[test]
    fn test_exp_negative_argument_decays_to_zero() {
        assert_eq!(exp(dec!(-1000), EXP_TAYLOR_TERMS), Decimal::ZERO);
        assert!(exp(dec!(-100), EXP_TAYLOR_TERMS) < dec!(0.000000000001));
        assert_close(exp(dec!(-1), EXP_TAYLOR_TERMS), (-1.0_f64).exp(), 1e-15);

        let expected = (-30.0_f64).exp();
        let actual = exp(dec!(-30), EXP_TAYLOR_TERMS).to_f64().unwrap_or(f64::NAN);
        assert!(((actual - expected) / expected).abs() < 1e-3, "got {actual}");
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(dec!(144)), dec!(12));
        assert_close(sqrt(dec!(2)), std::f64::consts::SQRT_2, 1e-15);
        assert_eq!(sqrt(dec!(-4)), Decimal::ZERO);
    }

    #[test]
    fn test_inverse_gudermannian_matches_mercator_formula() {
        for degrees in [0.0_f64, 10.0, 52.1551744, -33.9, 85.0511287798] {
            let phi = degrees.to_radians();
            let expected = (phi.tan() + 1.0 / phi.cos()).ln();
            let phi_decimal = Decimal::from_f64(phi).unwrap_or_default();
            assert_close(inverse_gudermannian(phi_decimal), expected, 1e-5);
        }
    }
}
