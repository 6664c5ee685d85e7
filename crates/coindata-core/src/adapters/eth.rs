use rust_decimal::Decimal;

use crate::data_source::{PricePoints, Source};
use crate::feed::{self, CsvLayout, FeedConfig};
use crate::http_client::HttpClient;
use crate::{AssetId, CalendarDate, FeedError, PriceSeries};

const ETH_FEED_URL: &str = "https://raw.githubusercontent.com/coinmetrics/data/master/csv/eth.csv";

/// ETH/USD prices, one per calendar day.
///
/// Feeds for this asset may publish several samples per day with full
/// timestamps in the date column; those are averaged into a single daily
/// price when the feed is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthSource {
    series: PriceSeries,
}

impl EthSource {
    pub fn default_feed() -> FeedConfig {
        FeedConfig::remote(ETH_FEED_URL).with_layout(CsvLayout::new("time", "PriceUSD"))
    }

    pub fn from_feed(config: &FeedConfig, client: &dyn HttpClient) -> Result<Self, FeedError> {
        feed::load(config, client).map(Self::from_series)
    }

    pub fn from_series(series: PriceSeries) -> Self {
        Self { series }
    }
}

impl Source for EthSource {
    fn asset(&self) -> AssetId {
        AssetId::Eth
    }

    fn price(&self, date: CalendarDate) -> Option<Decimal> {
        self.series.get(date)
    }

    fn range(&self, start: CalendarDate, end: CalendarDate) -> PricePoints<'_> {
        Box::new(self.series.range(start, end))
    }
}
