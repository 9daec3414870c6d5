//! Domain types for the batch-auction UI core: tokens, token-tagged amounts,
//! sell orders, prices and the auction lifecycle state machine.

pub mod amount;
pub mod auction;
pub mod order;
pub mod price;
pub mod token;

pub use {
    amount::{AmountError, TokenAmount},
    auction::{AuctionIdentifier, AuctionState, classify, price_title},
    order::{
        AuctionDetails, ClearingPriceInfo, OrderData, SellOrder, clearing_order_to_sell_order,
        order_to_price, order_to_sell_order,
    },
    price::{Price, PriceError},
    token::Token,
};
