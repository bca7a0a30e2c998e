//! Decimal-safe arithmetic over `f64`.
//!
//! Binary floating point cannot represent most decimal fractions exactly, so
//! naive step arithmetic drifts (`0.1 + 0.2 != 0.3`). The functions here scale
//! both operands into the integer domain by a common power of ten before the
//! operation and scale the result back down, which keeps step- and money-like
//! arithmetic exact as long as the operands carry a bounded number of decimal
//! digits.

/// Decimal digits considered significant when sizing the common factor.
///
/// Rounding the operands at this precision first keeps IEEE representation
/// noise (e.g. `0.1 -> 0.1000000000000000055`) from inflating the factor.
const FRACTION_DIGITS: usize = 12;

/// Decimal-safe addition: `add(0.1, 0.2) == 0.3` exactly.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    let factor = common_factor_rounded(a, b);
    (a * factor + b * factor) / factor
}

/// Decimal-safe subtraction.
#[must_use]
pub fn sub(a: f64, b: f64) -> f64 {
    let factor = common_factor_rounded(a, b);
    (a * factor - b * factor) / factor
}

/// Decimal-safe multiplication: `mul(0.123, 0.12) == 0.01476` exactly.
#[must_use]
pub fn mul(a: f64, b: f64) -> f64 {
    let factor = common_factor_rounded(a, b);
    (a * factor) * (b * factor) / (factor * factor)
}

/// Decimal-safe division.
///
/// The ratio of the scaled operands equals the ratio of the originals, so no
/// scale-back step is needed.
#[must_use]
pub fn div(a: f64, b: f64) -> f64 {
    let factor = common_factor_rounded(a, b);
    (a * factor) / (b * factor)
}

/// Returns `10^max(decimal_places(a), decimal_places(b))` — the multiplier
/// that turns both operands into integers.
#[must_use]
pub fn common_factor(a: f64, b: f64) -> f64 {
    let places = decimal_places(a).max(decimal_places(b));
    10f64.powi(i32::try_from(places).unwrap_or(i32::MAX))
}

/// Counts significant decimal digits after the point in the decimal (not
/// binary) representation of `x`, accounting for scientific notation.
///
/// Integers, non-finite values, and values whose exponent covers the whole
/// fraction report 0.
#[must_use]
pub fn decimal_places(x: f64) -> u32 {
    let formatted = format!("{x:e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        // "NaN" / "inf" carry no decimal digits.
        return 0;
    };
    let fraction_len = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as i64);
    let exponent: i64 = exponent.parse().unwrap_or(0);
    u32::try_from(fraction_len - exponent).unwrap_or(0)
}

fn common_factor_rounded(a: f64, b: f64) -> f64 {
    common_factor(round_to_fixed(a), round_to_fixed(b))
}

/// Rounds `x` through its fixed-point decimal rendering at [`FRACTION_DIGITS`]
/// precision, shedding pathological digit counts produced by IEEE noise.
fn round_to_fixed(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{:.*}", FRACTION_DIGITS, x).parse().unwrap_or(x)
}
