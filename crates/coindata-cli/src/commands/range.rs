use coindata_core::{AssetId, CalendarDate, Source};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::RangeArgs;
use crate::output::Report;

use super::ticker;

#[derive(Debug, Serialize)]
pub struct RangeReport {
    asset: AssetId,
    start: CalendarDate,
    end: CalendarDate,
    points: Vec<PricePoint>,
}

#[derive(Debug, PartialEq, Serialize)]
struct PricePoint {
    date: CalendarDate,
    price: Decimal,
}

pub fn run(args: &RangeArgs, source: &dyn Source) -> RangeReport {
    let end = args.end.unwrap_or_else(CalendarDate::today);
    collect(source, args.start, end)
}

fn collect(source: &dyn Source, start: CalendarDate, end: CalendarDate) -> RangeReport {
    RangeReport {
        asset: source.asset(),
        start,
        end,
        points: source
            .range(start, end)
            .map(|(date, price)| PricePoint { date, price })
            .collect(),
    }
}

impl Report for RangeReport {
    fn text_lines(&self) -> Vec<String> {
        if self.points.is_empty() {
            return vec![format!(
                "No {} prices between {} and {}",
                ticker(self.asset),
                self.start,
                self.end
            )];
        }

        self.points
            .iter()
            .map(|point| format!("{}  {}", point.date, point.price))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use coindata_core::{EthSource, PriceSeries};

    use super::*;

    fn day(value: &str) -> CalendarDate {
        CalendarDate::parse(value).expect("valid date")
    }

    fn source() -> EthSource {
        let series: PriceSeries = [
            (day("2024-01-01"), Decimal::new(2_281, 0)),
            (day("2024-01-03"), Decimal::new(220_950, 2)),
        ]
        .into_iter()
        .collect();
        EthSource::from_series(series)
    }

    #[test]
    fn lists_points_oldest_first() {
        let report = collect(&source(), day("2024-01-01"), day("2024-01-03"));
        assert_eq!(
            report.text_lines(),
            ["2024-01-01  2281", "2024-01-03  2209.50"]
        );
    }

    #[test]
    fn empty_window_is_reported() {
        let report = collect(&source(), day("2024-01-02"), day("2024-01-02"));
        assert!(report.points.is_empty());
        assert_eq!(
            report.text_lines(),
            ["No ETH prices between 2024-01-02 and 2024-01-02"]
        );
    }
}
