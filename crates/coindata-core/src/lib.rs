//! # coindata core
//!
//! Date-indexed historical price lookups for crypto assets.
//!
//! ## Overview
//!
//! - **[`Source`]**: point lookup (`price`) and inclusive range lookup
//!   (`range`) by calendar date
//! - **Asset sources** ([`BtcSource`], [`EthSource`]): fetch a CSV feed once
//!   at construction and answer every lookup from memory
//! - **Factory** ([`get_source`], [`SourceFactory`]): case-insensitive name
//!   to source
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Per-asset sources |
//! | [`data_source`] | The `Source` trait |
//! | [`domain`] | `CalendarDate`, `PriceSeries` |
//! | [`error`] | Core error types |
//! | [`factory`] | Name → source construction |
//! | [`feed`] | Feed location, CSV layout, fetch and parse |
//! | [`http_client`] | Blocking HTTP transport seam |
//! | [`source`] | Asset identifiers |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coindata_core::{get_source, CalendarDate};
//!
//! fn main() -> Result<(), coindata_core::CoreError> {
//!     let btc = get_source("BTC")?;
//!     let start = CalendarDate::parse("2024-01-01")?;
//!     let end = CalendarDate::parse("2024-01-31")?;
//!
//!     for (date, price) in btc.range(start, end) {
//!         println!("{date}: {price}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Missing prices
//!
//! A date without a published price (weekend gap, feed outage) makes
//! [`Source::price`] return `None`. It is not an error, and sources never
//! substitute a neighbouring day's value.
//!
//! ## Error Handling
//!
//! ```rust
//! use coindata_core::{get_source, CoreError, ValidationError};
//!
//! match get_source("doesnotexist") {
//!     Err(CoreError::Validation(ValidationError::UnknownSource { value })) => {
//!         assert_eq!(value, "doesnotexist");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod factory;
pub mod feed;
pub mod http_client;
pub mod source;

pub use adapters::{BtcSource, EthSource};

pub use data_source::{PricePoints, Source};

pub use domain::{CalendarDate, PriceSeries, SeriesRange};

pub use error::{CoreError, FeedError, ValidationError};

pub use factory::{default_feed, get_source, SourceFactory};

pub use feed::{CsvLayout, FeedConfig, FeedLocation};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use source::AssetId;
