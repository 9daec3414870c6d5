//! Reactive derivation layer of the auction UI: fetches per-auction chain
//! facts through a mockable provider boundary, assembles them into immutable
//! [`derived::DerivedAuctionInfo`] snapshots and resolves the currently
//! relevant display price.

pub mod derived;
pub mod fetching;
pub mod resolver;
pub mod stream;

pub use {
    derived::DerivedAuctionInfo,
    fetching::{AuctionInfoFetching, CachedTokenInfoFetcher},
    resolver::{PRICE_DISPLAY_DIGITS, format_clearing_price, resolve_clearing_price},
    stream::{SnapshotPublisher, poll_auction, spawn_polling},
};

#[cfg(any(test, feature = "test-util"))]
pub use fetching::MockAuctionInfoFetching;
