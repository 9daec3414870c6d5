use {
    crate::{derived::DerivedAuctionInfo, fetching::AuctionInfoFetching},
    model::AuctionIdentifier,
    std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        time::{Duration, SystemTime, UNIX_EPOCH},
    },
    tokio::sync::watch,
};

/// Publishes snapshots for the currently selected auction into a watch
/// channel that consumers clone.
///
/// Every publish is tagged with the identifier the underlying reads were
/// issued for. When the selection changes while reads are in flight, their
/// late results no longer match and are dropped, so a stale response can
/// never overwrite the snapshot of a newer auction.
#[derive(Clone)]
pub struct SnapshotPublisher {
    inner: Arc<Inner>,
}

struct Inner {
    selected: Mutex<Option<AuctionIdentifier>>,
    sender: watch::Sender<DerivedAuctionInfo>,
}

impl SnapshotPublisher {
    pub fn new() -> (Self, watch::Receiver<DerivedAuctionInfo>) {
        let (sender, receiver) = watch::channel(DerivedAuctionInfo::default());
        let publisher = Self {
            inner: Arc::new(Inner {
                selected: Mutex::new(None),
                sender,
            }),
        };
        (publisher, receiver)
    }

    /// Selects a new auction. The current snapshot is replaced with an empty
    /// one immediately; results of reads issued for the previous auction
    /// become stale.
    pub fn select(&self, identifier: AuctionIdentifier) {
        *self.inner.selected.lock().unwrap() = Some(identifier);
        self.inner.sender.send_replace(DerivedAuctionInfo::default());
    }

    /// Deselects (navigating away from the auction view).
    pub fn clear(&self) {
        *self.inner.selected.lock().unwrap() = None;
        self.inner.sender.send_replace(DerivedAuctionInfo::default());
    }

    pub fn selected(&self) -> Option<AuctionIdentifier> {
        *self.inner.selected.lock().unwrap()
    }

    /// Publishes a snapshot produced for `identifier`. Returns whether it was
    /// accepted; stale results are discarded silently.
    pub fn publish(&self, identifier: AuctionIdentifier, snapshot: DerivedAuctionInfo) -> bool {
        let selected = self.inner.selected.lock().unwrap();
        if *selected != Some(identifier) {
            tracing::trace!(%identifier, "discarding stale auction snapshot");
            return false;
        }
        self.inner.sender.send_replace(snapshot);
        true
    }

    pub fn subscribe(&self) -> watch::Receiver<DerivedAuctionInfo> {
        self.inner.sender.subscribe()
    }
}

/// Performs one round of chain reads for the auction and assembles the
/// snapshot. Failed reads leave their fields unset.
pub async fn poll_auction(
    fetcher: &dyn AuctionInfoFetching,
    identifier: AuctionIdentifier,
    now: u64,
) -> DerivedAuctionInfo {
    let details = match fetcher.auction_details(identifier).await {
        Ok(details) => Some(details),
        Err(err) => {
            tracing::warn!(%identifier, ?err, "failed to get auction details");
            None
        }
    };
    let clearing_price_info = match fetcher.clearing_price_info(identifier).await {
        Ok(info) => info,
        Err(err) => {
            tracing::warn!(%identifier, ?err, "failed to get clearing price info");
            None
        }
    };
    let tokens = match &details {
        Some(details) => {
            fetcher
                .token_infos(&[details.auctioning_token, details.bidding_token])
                .await
        }
        None => HashMap::new(),
    };
    DerivedAuctionInfo::build(now, details.as_ref(), clearing_price_info.as_ref(), &tokens)
}

/// Selects the auction on the publisher and spawns a loop that keeps
/// publishing fresh snapshots until a different auction gets selected.
pub fn spawn_polling(
    publisher: SnapshotPublisher,
    fetcher: Arc<dyn AuctionInfoFetching>,
    identifier: AuctionIdentifier,
    poll_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    publisher.select(identifier);
    tokio::task::spawn(async move {
        loop {
            let snapshot = poll_auction(fetcher.as_ref(), identifier, unix_now()).await;
            if !publisher.publish(identifier, snapshot) {
                // A different auction was selected; this poller is obsolete.
                break;
            }
            tokio::time::sleep(poll_interval).await;
        }
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}
