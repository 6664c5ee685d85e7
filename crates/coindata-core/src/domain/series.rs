use std::collections::btree_map;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// Date-indexed daily prices backing a source.
///
/// Keys are unique and iteration is always chronological. A date missing from
/// the series means the feed published no price for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: BTreeMap<CalendarDate, Decimal>,
}

impl PriceSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: CalendarDate) -> Option<Decimal> {
        self.points.get(&date).copied()
    }

    /// Points within `[start, end]`, oldest first. Empty when `start > end`.
    pub fn range(&self, start: CalendarDate, end: CalendarDate) -> SeriesRange<'_> {
        let inner = (start <= end).then(|| self.points.range(start..=end));
        SeriesRange { inner }
    }

    pub fn iter(&self) -> SeriesRange<'_> {
        SeriesRange {
            inner: Some(self.points.range(..)),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(CalendarDate, Decimal)> for PriceSeries {
    /// Later entries for a repeated date replace earlier ones.
    fn from_iter<T: IntoIterator<Item = (CalendarDate, Decimal)>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = (CalendarDate, Decimal);
    type IntoIter = SeriesRange<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a window of a [`PriceSeries`].
#[derive(Debug, Clone)]
pub struct SeriesRange<'a> {
    inner: Option<btree_map::Range<'a, CalendarDate, Decimal>>,
}

impl Iterator for SeriesRange<'_> {
    type Item = (CalendarDate, Decimal);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(date, price)| (*date, *price))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |inner| inner.size_hint())
    }
}

impl DoubleEndedIterator for SeriesRange<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next_back()
            .map(|(date, price)| (*date, *price))
    }
}
