use {
    crate::{order::SellOrder, token::Token},
    num::{BigInt, BigRational},
    number::{U256Ext, significant::format_significant},
    std::fmt,
    thiserror::Error,
};

#[derive(Debug, Error, Eq, PartialEq)]
pub enum PriceError {
    /// The order's ratio is undefined: one of its amounts is zero. A zero
    /// sell amount is a division by zero and a zero buy amount makes the
    /// price zero and thus uninvertible.
    #[error("order has no defined price")]
    NoPrice,
}

/// Exchange rate between two tokens: how many quote units one base unit buys.
///
/// The value is an exact rational of the order's integer amounts adjusted for
/// the tokens' decimals, so it can be rendered at any number of significant
/// digits on demand. It is strictly positive by construction which makes
/// [`Price::invert`] total.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Price {
    pub base: Token,
    pub quote: Token,
    pub value: BigRational,
}

impl Price {
    /// Derives the price of a sell order: the buy token is the quote, the
    /// sell token the base,
    /// `value = (buy / 10^buy.decimals) / (sell / 10^sell.decimals)`.
    pub fn from_order(order: &SellOrder) -> Result<Self, PriceError> {
        if order.sell_amount.is_zero() || order.buy_amount.is_zero() {
            return Err(PriceError::NoPrice);
        }
        let value = BigRational::new(
            order.buy_amount.amount.to_big_int()
                * BigInt::from(10u32).pow(u32::from(order.sell_amount.token.decimals)),
            order.sell_amount.amount.to_big_int()
                * BigInt::from(10u32).pow(u32::from(order.buy_amount.token.decimals)),
        );
        Ok(Self {
            base: order.sell_amount.token.clone(),
            quote: order.buy_amount.token.clone(),
            value,
        })
    }

    /// Swaps the quote/base convention. Its own inverse:
    /// `p.invert().invert() == p` exactly.
    pub fn invert(self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
            value: self.value.recip(),
        }
    }

    pub fn to_significant(&self, digits: u32) -> anyhow::Result<String> {
        format_significant(&self.value, digits)
    }

    /// The "X per Y" suffix the view layer appends to the formatted value.
    pub fn unit_label(&self) -> String {
        format!("{} per {}", self.quote.display(), self.base.display())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cannot fail for a non-zero digit count.
        let value = self.to_significant(5).map_err(|_| fmt::Error)?;
        write!(f, "{} {}", value, self.unit_label())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::amount::TokenAmount,
        number::conversions::big_rational_from_decimal_str,
        primitive_types::{H160, U256},
    };

    fn token(symbol: &str, decimals: u8) -> Token {
        let address = H160::from_low_u64_be(u64::from(symbol.as_bytes()[0]));
        Token::new(address, Some(symbol.to_string()), decimals)
    }

    fn order(
        sell_token: Token,
        sell_amount: impl Into<U256>,
        buy_token: Token,
        buy_amount: impl Into<U256>,
    ) -> SellOrder {
        SellOrder {
            sell_amount: TokenAmount::new(sell_token, sell_amount),
            buy_amount: TokenAmount::new(buy_token, buy_amount),
        }
    }

    #[test]
    fn price_is_quote_per_base() {
        // Selling 100 AT for at least 50 BT makes the minimum price
        // 0.5 BT per AT.
        let order = order(
            token("AT", 18),
            U256::from(100u64) * U256::exp10(18),
            token("BT", 18),
            U256::from(50u64) * U256::exp10(18),
        );
        let price = Price::from_order(&order).unwrap();
        assert_eq!(
            price.value,
            big_rational_from_decimal_str("0.5").unwrap()
        );
        assert_eq!(price.to_significant(5).unwrap(), "0.5");
        assert_eq!(price.unit_label(), "BT per AT");
    }

    #[test]
    fn adjusts_for_differing_decimals() {
        // 100 AT (18 decimals) for 50 BT (6 decimals) is still 0.5 BT per AT.
        let order = order(
            token("AT", 18),
            U256::from(100u64) * U256::exp10(18),
            token("BT", 6),
            U256::from(50u64) * U256::exp10(6),
        );
        let price = Price::from_order(&order).unwrap();
        assert_eq!(price.to_significant(5).unwrap(), "0.5");
    }

    #[test]
    fn zero_amounts_have_no_price() {
        let zero_buy = order(token("AT", 18), 100u64, token("BT", 18), 0u64);
        assert_eq!(Price::from_order(&zero_buy), Err(PriceError::NoPrice));

        let zero_sell = order(token("AT", 18), 0u64, token("BT", 18), 50u64);
        assert_eq!(Price::from_order(&zero_sell), Err(PriceError::NoPrice));
    }

    #[test]
    fn invert_round_trips_exactly() {
        let order = order(token("AT", 18), 100u64, token("BT", 18), 60u64);
        let price = Price::from_order(&order).unwrap();
        assert_eq!(price.clone().invert().invert(), price);
        assert_eq!(price.to_significant(5).unwrap(), "0.6");
        assert_eq!(price.invert().to_significant(5).unwrap(), "1.6667");
    }

    #[test]
    fn display_renders_value_and_unit() {
        let order = order(token("BT", 18), 2u64, token("AT", 18), 1u64);
        let price = Price::from_order(&order).unwrap();
        assert_eq!(price.to_string(), "0.5 AT per BT");
    }
}
