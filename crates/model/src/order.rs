//! Order types as recorded on-chain and their token-tagged form.

use {
    crate::{
        amount::TokenAmount,
        price::{Price, PriceError},
        token::Token,
    },
    number::serialization::DecimalU256,
    primitive_types::{H160, U256},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
};

/// The raw on-chain encoding of an order: two untagged integer amounts. Used
/// both for the auctioneer's initial order and for the settled clearing
/// order.
#[serde_as]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    #[serde_as(as = "DecimalU256")]
    pub sell_amount: U256,
    #[serde_as(as = "DecimalU256")]
    pub buy_amount: U256,
}

/// The settled clearing order for an auction. Absent while the chain has not
/// recorded one yet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearingPriceInfo {
    pub clearing_order: OrderData,
}

/// Per-auction chain facts. Token metadata is fetched separately by address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetails {
    pub auctioning_token: H160,
    pub bidding_token: H160,
    pub initial_auction_order: OrderData,
    /// Unix seconds.
    pub auction_start_date: u64,
    /// Unix seconds.
    pub auction_end_date: u64,
    /// Orders are cancellable until this unix timestamp.
    pub order_cancellation_end_date: u64,
}

/// An order whose amounts are tagged with their tokens.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellOrder {
    pub sell_amount: TokenAmount,
    pub buy_amount: TokenAmount,
}

/// Tags a raw order's amounts with the tokens they are denominated in.
/// `None` while either token's metadata has not loaded.
pub fn order_to_sell_order(
    order: &OrderData,
    sell_token: Option<&Token>,
    buy_token: Option<&Token>,
) -> Option<SellOrder> {
    Some(SellOrder {
        sell_amount: TokenAmount::new(sell_token?.clone(), order.sell_amount),
        buy_amount: TokenAmount::new(buy_token?.clone(), order.buy_amount),
    })
}

/// Normalizes a clearing order into the auction's canonical orientation.
///
/// The chain records the clearing order from the bidders' side: they sell the
/// bidding token and buy the auctioning token. Prices are displayed
/// bidding-per-auctioning though, so the sides swap: the chain's sell amount
/// becomes the buy side tagged with the bidding token and vice versa.
pub fn clearing_order_to_sell_order(
    order: &OrderData,
    bidding_token: Option<&Token>,
    auctioning_token: Option<&Token>,
) -> Option<SellOrder> {
    Some(SellOrder {
        sell_amount: TokenAmount::new(auctioning_token?.clone(), order.buy_amount),
        buy_amount: TokenAmount::new(bidding_token?.clone(), order.sell_amount),
    })
}

/// Derives the order's price, quote per base. See [`Price::from_order`].
pub fn order_to_price(order: &SellOrder) -> Result<Price, PriceError> {
    Price::from_order(order)
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn token(symbol: &str, id: u64) -> Token {
        Token::new(H160::from_low_u64_be(id), Some(symbol.to_string()), 18)
    }

    #[test]
    fn order_data_serialization_round_trip() {
        let order = OrderData {
            sell_amount: U256::exp10(18),
            buy_amount: 500u64.into(),
        };
        let value = json!({
            "sellAmount": "1000000000000000000",
            "buyAmount": "500",
        });
        assert_eq!(serde_json::to_value(order).unwrap(), value);
        assert_eq!(serde_json::from_value::<OrderData>(value).unwrap(), order);
    }

    #[test]
    fn auction_details_serialization() {
        let details = AuctionDetails {
            auctioning_token: H160::from_low_u64_be(1),
            bidding_token: H160::from_low_u64_be(2),
            initial_auction_order: OrderData {
                sell_amount: 100.into(),
                buy_amount: 50.into(),
            },
            auction_start_date: 100,
            auction_end_date: 200,
            order_cancellation_end_date: 150,
        };
        let value = serde_json::to_value(details).unwrap();
        assert_eq!(value["auctionEndDate"], 200);
        assert_eq!(value["initialAuctionOrder"]["sellAmount"], "100");
        assert_eq!(
            serde_json::from_value::<AuctionDetails>(value).unwrap(),
            details
        );
    }

    #[test]
    fn tagging_requires_both_tokens() {
        let order = OrderData {
            sell_amount: 100.into(),
            buy_amount: 50.into(),
        };
        let auctioning = token("AT", 1);
        let bidding = token("BT", 2);

        assert!(order_to_sell_order(&order, Some(&auctioning), None).is_none());
        assert!(order_to_sell_order(&order, None, Some(&bidding)).is_none());

        let tagged = order_to_sell_order(&order, Some(&auctioning), Some(&bidding)).unwrap();
        assert_eq!(tagged.sell_amount.token, auctioning);
        assert_eq!(tagged.sell_amount.amount, 100.into());
        assert_eq!(tagged.buy_amount.token, bidding);
        assert_eq!(tagged.buy_amount.amount, 50.into());
    }

    #[test]
    fn clearing_order_normalization_swaps_sides() {
        // Bidders sold 60 BT for 100 AT.
        let order = OrderData {
            sell_amount: 60.into(),
            buy_amount: 100.into(),
        };
        let auctioning = token("AT", 1);
        let bidding = token("BT", 2);

        let normalized =
            clearing_order_to_sell_order(&order, Some(&bidding), Some(&auctioning)).unwrap();
        assert_eq!(normalized.sell_amount.token, auctioning);
        assert_eq!(normalized.sell_amount.amount, 100.into());
        assert_eq!(normalized.buy_amount.token, bidding);
        assert_eq!(normalized.buy_amount.amount, 60.into());

        // 60 BT for 100 AT settles at 0.6 BT per AT.
        let price = order_to_price(&normalized).unwrap();
        assert_eq!(price.to_significant(5).unwrap(), "0.6");
    }
}
