use {
    crate::derived::DerivedAuctionInfo,
    model::{ClearingPriceInfo, Price, clearing_order_to_sell_order, order_to_price},
};

/// Canonical precision for resolved prices.
pub const PRICE_DISPLAY_DIGITS: u32 = 5;

/// Resolves the currently relevant display price of an auction: the current
/// price while orders are being placed, the clearing/closing price
/// afterwards.
///
/// Total over absent inputs: `None` while the clearing order or the token
/// metadata has not loaded, or when the order's ratio is undefined. Never
/// panics on malformed chain data.
pub fn resolve_clearing_price(
    snapshot: &DerivedAuctionInfo,
    clearing_price_info: Option<&ClearingPriceInfo>,
    invert: bool,
) -> Option<Price> {
    let info = clearing_price_info?;
    let order = clearing_order_to_sell_order(
        &info.clearing_order,
        snapshot.bidding_token.as_ref(),
        snapshot.auctioning_token.as_ref(),
    )?;
    let price = match order_to_price(&order) {
        Ok(price) => price,
        Err(err) => {
            tracing::trace!(?err, "clearing order has no price");
            return None;
        }
    };
    Some(if invert { price.invert() } else { price })
}

/// The resolved price as the view renders it, `-` when it is absent.
pub fn format_clearing_price(
    snapshot: &DerivedAuctionInfo,
    clearing_price_info: Option<&ClearingPriceInfo>,
    invert: bool,
) -> String {
    resolve_clearing_price(snapshot, clearing_price_info, invert)
        .and_then(|price| {
            let value = price.to_significant(PRICE_DISPLAY_DIGITS).ok()?;
            Some(format!("{} {}", value, price.unit_label()))
        })
        .unwrap_or_else(|| "-".to_string())
}
