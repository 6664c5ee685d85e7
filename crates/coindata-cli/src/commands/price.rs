use coindata_core::{AssetId, CalendarDate, Source};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::PriceArgs;
use crate::output::Report;

use super::ticker;

#[derive(Debug, PartialEq, Serialize)]
pub struct PriceReport {
    asset: AssetId,
    requested: CalendarDate,
    /// Date the price was found on; the day before `requested` after a fallback.
    observed: Option<CalendarDate>,
    price: Option<Decimal>,
}

pub fn run(args: &PriceArgs, source: &dyn Source) -> PriceReport {
    lookup(source, args.date.unwrap_or_else(CalendarDate::today))
}

/// Price on `requested`, or on the previous day when none was published.
pub(super) fn lookup(source: &dyn Source, requested: CalendarDate) -> PriceReport {
    let found = source
        .price(requested)
        .map(|price| (requested, price))
        .or_else(|| {
            let previous = requested.previous_day()?;
            source.price(previous).map(|price| (previous, price))
        });

    PriceReport {
        asset: source.asset(),
        requested,
        observed: found.map(|(date, _)| date),
        price: found.map(|(_, price)| price),
    }
}

impl Report for PriceReport {
    fn text_lines(&self) -> Vec<String> {
        let asset = ticker(self.asset);
        let line = match (self.observed, self.price) {
            (Some(date), Some(price)) if date == self.requested => {
                format!("Price for {asset} on {date} is {price}")
            }
            (Some(date), Some(price)) => format!(
                "Price for {asset} on {} is unestablished, but the price on {date} was {price}",
                self.requested
            ),
            _ => format!("Price for {asset} on {} is unestablished", self.requested),
        };
        vec![line]
    }
}
