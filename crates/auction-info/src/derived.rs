use {
    model::{
        AuctionDetails, AuctionState, ClearingPriceInfo, Price, SellOrder, Token, classify,
        clearing_order_to_sell_order, order_to_price, order_to_sell_order,
    },
    primitive_types::H160,
    std::collections::HashMap,
};

/// One consistent snapshot of everything the view needs to render an auction.
///
/// Every field is independently possibly-absent until its chain read
/// resolves; no field's presence implies another's. Snapshots are immutable:
/// upstream changes produce a fresh snapshot that fully replaces the old one,
/// so consumers can never observe e.g. an `initial_price` computed from a
/// different `initial_auction_order` than the one in the same snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DerivedAuctionInfo {
    /// `None` while the chain facts needed to classify have not loaded.
    pub auction_state: Option<AuctionState>,
    pub auctioning_token: Option<Token>,
    pub bidding_token: Option<Token>,
    /// The auctioneer's starting offer.
    pub initial_auction_order: Option<SellOrder>,
    /// The minimum price implied by the initial order, bidding per
    /// auctioning.
    pub initial_price: Option<Price>,
    /// Present only once the auction has settled.
    pub clearing_order: Option<SellOrder>,
    pub auction_start_date: Option<u64>,
    pub auction_end_date: Option<u64>,
    pub order_cancellation_end_date: Option<u64>,
}

impl DerivedAuctionInfo {
    /// Assembles a snapshot from whatever chain reads have resolved so far.
    ///
    /// Pure: calling it twice with identical inputs yields identical
    /// snapshots. `initial_price` is rederived from the order passed in here
    /// on every call, never carried over from a previous snapshot.
    pub fn build(
        now: u64,
        details: Option<&AuctionDetails>,
        clearing_price_info: Option<&ClearingPriceInfo>,
        tokens: &HashMap<H160, Token>,
    ) -> Self {
        let auctioning_token = details.and_then(|details| tokens.get(&details.auctioning_token));
        let bidding_token = details.and_then(|details| tokens.get(&details.bidding_token));

        let initial_auction_order = details.and_then(|details| {
            order_to_sell_order(
                &details.initial_auction_order,
                auctioning_token,
                bidding_token,
            )
        });
        let initial_price = initial_auction_order
            .as_ref()
            .and_then(|order| match order_to_price(order) {
                Ok(price) => Some(price),
                Err(err) => {
                    tracing::trace!(?err, "initial auction order has no price");
                    None
                }
            });

        let clearing_order = clearing_price_info.and_then(|info| {
            clearing_order_to_sell_order(&info.clearing_order, bidding_token, auctioning_token)
        });

        let auction_state = details.map(|details| {
            classify(
                now,
                details.auction_start_date,
                details.auction_end_date,
                clearing_price_info.is_some(),
                now <= details.order_cancellation_end_date,
            )
        });

        Self {
            auction_state,
            auctioning_token: auctioning_token.cloned(),
            bidding_token: bidding_token.cloned(),
            initial_auction_order,
            initial_price,
            clearing_order,
            auction_start_date: details.map(|details| details.auction_start_date),
            auction_end_date: details.map(|details| details.auction_end_date),
            order_cancellation_end_date: details.map(|details| details.order_cancellation_end_date),
        }
    }
}
