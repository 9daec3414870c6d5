use {
    anyhow::{Result, ensure},
    bigdecimal::BigDecimal,
    num::{BigInt, BigRational, Integer, One, Signed, Zero},
    std::cmp::Ordering,
};

/// Renders an exact rational in decimal notation keeping `digits` significant
/// digits.
///
/// Token amounts and prices are ratios of on-chain integers so the rounding
/// happens on the exact integer remainder, half away from zero. Native float
/// rounding would corrupt the low digits of large amounts.
pub fn format_significant(value: &BigRational, digits: u32) -> Result<String> {
    ensure!(digits > 0, "need at least one significant digit");
    if value.numer().is_zero() {
        return Ok("0".to_string());
    }

    let numer = value.numer().abs();
    // `BigRational` keeps the denominator positive.
    let denom = value.denom().clone();
    let exponent = decimal_exponent(&numer, &denom);

    // Scale so that the integer part of the quotient carries exactly `digits`
    // digits, then divide with explicit remainder rounding.
    let shift = i64::from(digits) - 1 - exponent;
    let (scaled_numer, scaled_denom) = if shift >= 0 {
        (numer * BigInt::from(10u32).pow(shift as u32), denom)
    } else {
        (numer, denom * BigInt::from(10u32).pow((-shift) as u32))
    };
    let (mut rounded, remainder) = scaled_numer.div_rem(&scaled_denom);
    if remainder * 2u32 >= scaled_denom {
        rounded += BigInt::one();
    }
    if value.is_negative() {
        rounded = -rounded;
    }

    // `rounded * 10^-shift`; normalizing trims trailing fractional zeros.
    Ok(BigDecimal::new(rounded, shift).normalized().to_string())
}

/// The exponent of the leading significant digit:
/// `10^exponent <= numer / denom < 10^(exponent + 1)`.
///
/// Both inputs must be positive.
fn decimal_exponent(numer: &BigInt, denom: &BigInt) -> i64 {
    // The digit-count estimate is exact or one too high.
    let mut exponent = digit_count(numer) - digit_count(denom);
    if pow_cmp(numer, denom, exponent) == Ordering::Less {
        exponent -= 1;
    }
    exponent
}

fn digit_count(value: &BigInt) -> i64 {
    i64::try_from(value.magnitude().to_str_radix(10).len()).unwrap_or(i64::MAX)
}

/// Compares `numer / denom` against `10^exponent` without division.
fn pow_cmp(numer: &BigInt, denom: &BigInt, exponent: i64) -> Ordering {
    if exponent >= 0 {
        numer.cmp(&(denom * BigInt::from(10u32).pow(exponent as u32)))
    } else {
        (numer * BigInt::from(10u32).pow((-exponent) as u32)).cmp(denom)
    }
}
