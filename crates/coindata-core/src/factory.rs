//! Name → source construction.
//!
//! Adding an asset means adding a variant to [`AssetId`], a source type under
//! `adapters`, and one arm in [`SourceFactory::build`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::data_source::Source;
use crate::feed::FeedConfig;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::{AssetId, BtcSource, CoreError, EthSource};

/// Build the source registered under `name` (case-insensitive) with its
/// default feed.
///
/// # Errors
///
/// - [`ValidationError::UnknownSource`](crate::ValidationError::UnknownSource)
///   naming `name` when no asset matches; nothing is fetched in that case.
/// - [`CoreError::Feed`] when the feed cannot be fetched or parsed.
pub fn get_source(name: &str) -> Result<Box<dyn Source>, CoreError> {
    let asset = name.parse::<AssetId>()?;
    SourceFactory::default().build(asset)
}

/// Source constructor with an injectable transport and per-asset feed overrides.
#[derive(Clone)]
pub struct SourceFactory {
    http_client: Arc<dyn HttpClient>,
    feeds: BTreeMap<AssetId, FeedConfig>,
}

impl Default for SourceFactory {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()))
    }
}

impl SourceFactory {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            feeds: BTreeMap::new(),
        }
    }

    /// Replace the feed used for `asset`.
    pub fn with_feed(mut self, asset: AssetId, feed: FeedConfig) -> Self {
        self.feeds.insert(asset, feed);
        self
    }

    /// Feed that [`build`](Self::build) will load for `asset`.
    pub fn feed(&self, asset: AssetId) -> FeedConfig {
        self.feeds
            .get(&asset)
            .cloned()
            .unwrap_or_else(|| default_feed(asset))
    }

    pub fn get_source(&self, name: &str) -> Result<Box<dyn Source>, CoreError> {
        let asset = name.parse::<AssetId>()?;
        self.build(asset)
    }

    pub fn build(&self, asset: AssetId) -> Result<Box<dyn Source>, CoreError> {
        let feed = self.feed(asset);
        let client = self.http_client.as_ref();
        let source: Box<dyn Source> = match asset {
            AssetId::Btc => Box::new(BtcSource::from_feed(&feed, client)?),
            AssetId::Eth => Box::new(EthSource::from_feed(&feed, client)?),
        };
        Ok(source)
    }
}

/// Feed a source of `asset` loads unless overridden.
pub fn default_feed(asset: AssetId) -> FeedConfig {
    match asset {
        AssetId::Btc => BtcSource::default_feed(),
        AssetId::Eth => EthSource::default_feed(),
    }
}
