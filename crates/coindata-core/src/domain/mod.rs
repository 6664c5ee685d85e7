//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CalendarDate`] | Date without time of day; the lookup key |
//! | [`PriceSeries`] | Chronological date → price mapping owned by a source |
//!
//! Prices are [`rust_decimal::Decimal`] values, rounded to cents when a feed
//! is parsed.

mod date;
mod series;

pub use date::CalendarDate;
pub use series::{PriceSeries, SeriesRange};
