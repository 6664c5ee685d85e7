use rust_decimal::Decimal;

use crate::data_source::{PricePoints, Source};
use crate::feed::{self, CsvLayout, FeedConfig};
use crate::http_client::HttpClient;
use crate::{AssetId, CalendarDate, FeedError, PriceSeries};

const BTC_FEED_URL: &str = "https://raw.githubusercontent.com/coinmetrics/data/master/csv/btc.csv";

/// Daily BTC/USD closing prices.
///
/// The whole history is fetched once when the source is built and kept in
/// memory; lookups never touch the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BtcSource {
    series: PriceSeries,
}

impl BtcSource {
    /// Coin Metrics community daily CSV, `time` and `PriceUSD` columns.
    pub fn default_feed() -> FeedConfig {
        FeedConfig::remote(BTC_FEED_URL).with_layout(CsvLayout::new("time", "PriceUSD"))
    }

    pub fn from_feed(config: &FeedConfig, client: &dyn HttpClient) -> Result<Self, FeedError> {
        feed::load(config, client).map(Self::from_series)
    }

    pub fn from_series(series: PriceSeries) -> Self {
        Self { series }
    }
}

impl Source for BtcSource {
    fn asset(&self) -> AssetId {
        AssetId::Btc
    }

    fn price(&self, date: CalendarDate) -> Option<Decimal> {
        self.series.get(date)
    }

    fn range(&self, start: CalendarDate, end: CalendarDate) -> PricePoints<'_> {
        Box::new(self.series.range(start, end))
    }
}
