//! Price feed location, layout, fetch, and CSV parsing.
//!
//! A feed is a CSV document with a header row. One column holds the date
//! (a plain `YYYY-MM-DD` or a timestamp whose date part is used) and one
//! holds the price. Several rows for the same date are averaged, and every
//! stored price is rounded to cents with banker's rounding.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, trace};
use rust_decimal::Decimal;

use crate::http_client::{HttpClient, HttpRequest};
use crate::{CalendarDate, FeedError, PriceSeries};

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const PRICE_SCALE: u32 = 2;

/// Where a feed's CSV document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Remote(String),
    File(PathBuf),
}

impl Display for FeedLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Header names of the date and price columns.
///
/// When either name is missing from a two-column header the feed is read as
/// a plain document with the date first and the price second. A wider header
/// must name both columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLayout {
    pub date_column: String,
    pub price_column: String,
}

impl CsvLayout {
    pub fn new(date_column: impl Into<String>, price_column: impl Into<String>) -> Self {
        Self {
            date_column: date_column.into(),
            price_column: price_column.into(),
        }
    }

    fn resolve(&self, headers: &csv::StringRecord) -> Result<(usize, usize), FeedError> {
        if headers.len() < 2 {
            return Err(FeedError::MissingHeader);
        }

        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
        };

        match (find(self.date_column.as_str()), find(self.price_column.as_str())) {
            (Some(date), Some(price)) if date != price => Ok((date, price)),
            (Some(_), Some(_)) => Err(FeedError::MissingHeader),
            _ if headers.len() == 2 => Ok((0, 1)),
            (None, _) => Err(FeedError::MissingColumn {
                column: self.date_column.clone(),
            }),
            (_, None) => Err(FeedError::MissingColumn {
                column: self.price_column.clone(),
            }),
        }
    }
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self::new("date", "price")
    }
}

/// Everything needed to load one feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub location: FeedLocation,
    pub layout: CsvLayout,
    pub timeout_ms: u64,
    pub user_agent: Option<String>,
}

impl FeedConfig {
    pub fn remote(url: impl Into<String>) -> Self {
        Self::with_location(FeedLocation::Remote(url.into()))
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::with_location(FeedLocation::File(path.into()))
    }

    pub fn with_location(location: FeedLocation) -> Self {
        Self {
            location,
            layout: CsvLayout::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: None,
        }
    }

    pub fn with_layout(mut self, layout: CsvLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Fetch and parse a feed into a series.
pub fn load(config: &FeedConfig, client: &dyn HttpClient) -> Result<PriceSeries, FeedError> {
    let body = fetch(config, client)?;
    let series = parse_csv(&body, &config.layout)?;
    debug!(
        "loaded {} priced days from {}",
        series.len(),
        config.location
    );
    Ok(series)
}

/// Retrieve the raw feed document.
pub fn fetch(config: &FeedConfig, client: &dyn HttpClient) -> Result<String, FeedError> {
    match &config.location {
        FeedLocation::Remote(url) => {
            debug!("fetching feed {url}");
            let mut request = HttpRequest::get(url.as_str()).with_timeout_ms(config.timeout_ms);
            if let Some(user_agent) = &config.user_agent {
                request = request.with_header("user-agent", user_agent.as_str());
            }

            let response = client
                .execute(request)
                .map_err(|source| FeedError::Transport {
                    url: url.clone(),
                    source,
                })?;
            if !response.is_success() {
                return Err(FeedError::Status {
                    url: url.clone(),
                    status: response.status,
                });
            }

            debug!("fetched {} bytes from {url}", response.body.len());
            Ok(response.body)
        }
        FeedLocation::File(path) => {
            debug!("reading feed file {}", path.display());
            std::fs::read_to_string(path).map_err(|source| FeedError::Io {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Parse a CSV feed document.
///
/// Rows with an empty price cell are feed gaps and are skipped. A date or a
/// non-empty price that does not parse, or a negative price, rejects the
/// whole document.
pub fn parse_csv(body: &str, layout: &CsvLayout) -> Result<PriceSeries, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let (date_index, price_index) = layout.resolve(reader.headers()?)?;

    let mut days: BTreeMap<CalendarDate, (Decimal, u32)> = BTreeMap::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |position| position.line());
        rows += 1;

        let date_cell = record.get(date_index).unwrap_or_default();
        let date = parse_date_cell(date_cell).ok_or_else(|| FeedError::InvalidDate {
            line,
            value: date_cell.to_owned(),
        })?;

        let price_cell = record.get(price_index).unwrap_or_default();
        if price_cell.is_empty() {
            trace!("line {line}: no price for {date}");
            continue;
        }
        let price = parse_price_cell(price_cell).ok_or_else(|| FeedError::InvalidPrice {
            line,
            value: price_cell.to_owned(),
        })?;

        let (sum, count) = days.entry(date).or_insert((Decimal::ZERO, 0));
        *sum = sum
            .checked_add(price)
            .ok_or_else(|| FeedError::InvalidPrice {
                line,
                value: price_cell.to_owned(),
            })?;
        *count += 1;
    }

    debug!("parsed {rows} feed rows into {} days", days.len());
    Ok(days
        .into_iter()
        .map(|(date, (sum, count))| (date, (sum / Decimal::from(count)).round_dp(PRICE_SCALE)))
        .collect())
}

/// Date part of `2024-01-01`, `2024-01-01T13:00:00Z` or `2024-01-01 13:00:00`.
fn parse_date_cell(cell: &str) -> Option<CalendarDate> {
    let date_part = cell.split(['T', ' ']).next()?;
    CalendarDate::parse(date_part).ok()
}

fn parse_price_cell(cell: &str) -> Option<Decimal> {
    Decimal::from_str(cell)
        .or_else(|_| Decimal::from_scientific(cell))
        .ok()
        .filter(|price| !price.is_sign_negative())
}
