use {
    anyhow::{Context, Result, ensure},
    num::{BigInt, BigRational, BigUint, Zero, bigint::Sign},
    primitive_types::U256,
    std::str::FromStr,
};

pub fn u256_to_big_uint(input: &U256) -> BigUint {
    let mut bytes = [0; 32];
    input.to_big_endian(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

pub fn u256_to_big_int(input: &U256) -> BigInt {
    BigInt::from_biguint(Sign::Plus, u256_to_big_uint(input))
}

pub fn u256_to_big_rational(input: &U256) -> BigRational {
    BigRational::new(u256_to_big_int(input), 1.into())
}

pub fn big_uint_to_u256(input: &BigUint) -> Result<U256> {
    let bytes = input.to_bytes_be();
    ensure!(bytes.len() <= 32, "too large");
    Ok(U256::from_big_endian(&bytes))
}

pub fn big_int_to_u256(input: &BigInt) -> Result<U256> {
    ensure!(input.sign() != Sign::Minus, "negative");
    big_uint_to_u256(input.magnitude())
}

pub fn big_rational_to_u256(ratio: &BigRational) -> Result<U256> {
    ensure!(!ratio.denom().is_zero(), "zero denominator");
    big_int_to_u256(&(ratio.numer() / ratio.denom()))
}

/// Floats in Rust have wrong bytes representation which leaks into
/// `BigRational` instance when converting from float.
///
/// This function converts a decimal string (e.g., `"0.1"`) to an exact
/// `BigRational`.
pub fn big_rational_from_decimal_str(s: &str) -> Result<BigRational> {
    let s = s.trim();
    let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s)
    };

    let parts: Vec<&str> = s.split('.').collect();
    match parts.len() {
        1 => {
            let numerator = BigInt::from_str(parts[0]).context("unable to parse integer part")?;
            Ok(BigRational::from_integer(numerator))
        }
        2 => {
            let integer_part = if parts[0].is_empty() {
                // Handle cases like ".5" as "0.5"
                BigInt::zero()
            } else {
                BigInt::from_str(parts[0]).context("unable to parse integer part")?
            };

            let fractional_part = if parts[1].is_empty() {
                // Handle cases like "1." as "1.0"
                BigInt::zero()
            } else {
                BigInt::from_str(parts[1]).context("unable to parse fractional part")?
            };

            let fractional_length = parts[1].len() as u32;

            let denominator = BigInt::from(10u32).pow(fractional_length);
            let numerator = integer_part * &denominator + fractional_part;
            Ok(BigRational::new(numerator, denominator))
        }
        _ => Err(anyhow::anyhow!("invalid decimal number")),
    }
    .map(|ratio| if is_negative { -ratio } else { ratio })
}

// Convenience:

pub trait U256Ext {
    fn to_big_int(&self) -> BigInt;
    fn to_big_rational(&self) -> BigRational;
}

impl U256Ext for U256 {
    fn to_big_int(&self) -> BigInt {
        u256_to_big_int(self)
    }

    fn to_big_rational(&self) -> BigRational {
        u256_to_big_rational(self)
    }
}
