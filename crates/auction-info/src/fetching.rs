use {
    anyhow::Result,
    async_trait::async_trait,
    model::{AuctionDetails, AuctionIdentifier, ClearingPriceInfo, Token},
    primitive_types::H160,
    std::{collections::HashMap, sync::Arc},
    tokio::sync::Mutex,
};

/// Boundary to the chain data layer. Every read resolves independently; a
/// failed or pending read simply leaves the corresponding snapshot fields
/// unset. The core never writes to the chain.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait AuctionInfoFetching: Send + Sync {
    /// The static per-auction facts: tokens, initial order, timing.
    async fn auction_details(&self, identifier: AuctionIdentifier) -> Result<AuctionDetails>;

    /// The settled clearing order. `Ok(None)` while the chain has not
    /// recorded one yet.
    async fn clearing_price_info(
        &self,
        identifier: AuctionIdentifier,
    ) -> Result<Option<ClearingPriceInfo>>;

    /// Retrieves metadata for all given tokens. Tokens that fail to resolve
    /// are missing from the result and ignored.
    async fn token_infos(&self, addresses: &[H160]) -> HashMap<H160, Token>;
}

/// Caching decorator. Token metadata is immutable once fetched so it is
/// memoized forever; the other reads change with every block and pass
/// through.
pub struct CachedTokenInfoFetcher {
    inner: Arc<dyn AuctionInfoFetching>,
    cache: Mutex<HashMap<H160, Token>>,
}

impl CachedTokenInfoFetcher {
    pub fn new(inner: Arc<dyn AuctionInfoFetching>) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AuctionInfoFetching for CachedTokenInfoFetcher {
    async fn auction_details(&self, identifier: AuctionIdentifier) -> Result<AuctionDetails> {
        self.inner.auction_details(identifier).await
    }

    async fn clearing_price_info(
        &self,
        identifier: AuctionIdentifier,
    ) -> Result<Option<ClearingPriceInfo>> {
        self.inner.clearing_price_info(identifier).await
    }

    async fn token_infos(&self, addresses: &[H160]) -> HashMap<H160, Token> {
        let mut cache = self.cache.lock().await;

        let to_fetch: Vec<H160> = addresses
            .iter()
            .filter(|address| !cache.contains_key(address))
            .cloned()
            .collect();

        if !to_fetch.is_empty() {
            let fetched = self.inner.token_infos(to_fetch.as_slice()).await;
            cache.extend(fetched);
        }

        addresses
            .iter()
            .filter_map(|address| Some((*address, cache.get(address)?.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, maplit::hashmap};

    #[tokio::test]
    async fn caches_token_infos() {
        let address0 = H160::zero();
        let address1 = H160::from_low_u64_be(1);

        let mut mock = MockAuctionInfoFetching::new();
        mock.expect_token_infos().times(1).return_once(move |_| {
            hashmap! {
                address0 => Token::new(address0, Some("GNO".to_string()), 18),
            }
        });
        // The unresolved token is not cached, so asking for it again refetches.
        mock.expect_token_infos()
            .times(2)
            .returning(|_| HashMap::new());
        let fetcher = CachedTokenInfoFetcher::new(Arc::new(mock));

        // Second fetch is served from the cache; the times(1) constraint above
        // would fail otherwise.
        for _ in 0..2 {
            let infos = fetcher.token_infos(&[address0]).await;
            assert_eq!(infos[&address0].decimals, 18);
        }

        for _ in 0..2 {
            let infos = fetcher.token_infos(&[address1]).await;
            assert!(!infos.contains_key(&address1));
        }
    }
}
