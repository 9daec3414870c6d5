use {
    crate::token::Token,
    num::{BigInt, BigRational},
    number::{U256Ext, significant::format_significant},
    primitive_types::{H160, U256},
    std::cmp::Ordering,
    thiserror::Error,
};

#[derive(Debug, Error, Eq, PartialEq)]
pub enum AmountError {
    #[error("amounts denominated in different tokens: {0:?} and {1:?}")]
    TokenMismatch(H160, H160),
    #[error("amount addition overflow")]
    Overflow,
    #[error("amount subtraction underflow")]
    Underflow,
}

/// An integer quantity of token atoms tagged with the token it is denominated
/// in.
///
/// Amounts of different tokens must never be mixed, so there are no raw
/// `Add`/`Sub`/`Ord` impls. All arithmetic goes through the checked methods
/// which reject mismatched tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAmount {
    pub token: Token,
    pub amount: U256,
}

impl TokenAmount {
    pub fn new(token: Token, amount: impl Into<U256>) -> Self {
        Self {
            token,
            amount: amount.into(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// The amount in whole token units, `atoms / 10^decimals`, exactly.
    pub fn as_units(&self) -> BigRational {
        BigRational::new(
            self.amount.to_big_int(),
            BigInt::from(10u32).pow(u32::from(self.token.decimals)),
        )
    }

    /// Renders the unit amount at the given number of significant digits.
    pub fn to_significant(&self, digits: u32) -> anyhow::Result<String> {
        format_significant(&self.as_units(), digits)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, AmountError> {
        self.ensure_same_token(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self {
                token: self.token.clone(),
                amount,
            })
            .ok_or(AmountError::Overflow)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, AmountError> {
        self.ensure_same_token(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Self {
                token: self.token.clone(),
                amount,
            })
            .ok_or(AmountError::Underflow)
    }

    /// Compares two amounts of the same token.
    pub fn cmp_amount(&self, other: &Self) -> Result<Ordering, AmountError> {
        self.ensure_same_token(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn ensure_same_token(&self, other: &Self) -> Result<(), AmountError> {
        if self.token.address != other.token.address {
            return Err(AmountError::TokenMismatch(
                self.token.address,
                other.token.address,
            ));
        }
        Ok(())
    }
}
