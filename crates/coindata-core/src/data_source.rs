//! Source trait for date-indexed price lookups.
//!
//! A [`Source`] answers two questions about one asset: what was the price on
//! a given calendar date, and which prices were published inside a window.
//! A missing price is `None`, never an error; deciding what to do instead
//! (for example, asking for the previous day) is left to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use coindata_core::{get_source, CalendarDate};
//!
//! let source = get_source("btc")?;
//! let today = CalendarDate::today();
//! let price = source
//!     .price(today)
//!     .or_else(|| today.previous_day().and_then(|d| source.price(d)));
//! ```

use rust_decimal::Decimal;

use crate::{AssetId, CalendarDate};

/// Lazy, chronological `(date, price)` points borrowed from a source.
pub type PricePoints<'a> = Box<dyn Iterator<Item = (CalendarDate, Decimal)> + 'a>;

/// Date-indexed historical price lookups for one asset.
///
/// Only [`price`](Source::price) is required. The provided
/// [`range`](Source::range) walks the window one day at a time through
/// `price`; implementations backed by an ordered series should override it.
pub trait Source: Send + Sync {
    /// The asset this source serves.
    fn asset(&self) -> AssetId;

    /// Price published for `date`, or `None` when the feed has no value for it.
    fn price(&self, date: CalendarDate) -> Option<Decimal>;

    /// Points within `[start, end]`, oldest first, skipping dates without a
    /// price. Yields nothing when `start > end`. Calling it again with the
    /// same bounds yields the same points.
    fn range(&self, start: CalendarDate, end: CalendarDate) -> PricePoints<'_> {
        Box::new(DailyWalk {
            source: self,
            next: Some(start),
            end,
        })
    }
}

/// Day-by-day scan used by the default [`Source::range`].
struct DailyWalk<'a, S: ?Sized> {
    source: &'a S,
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl<S: Source + ?Sized> Iterator for DailyWalk<'_, S> {
    type Item = (CalendarDate, Decimal);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.next.filter(|day| *day <= self.end) {
            self.next = current.next_day();
            if let Some(price) = self.source.price(current) {
                return Some((current, price));
            }
        }
        self.next = None;
        None
    }
}
