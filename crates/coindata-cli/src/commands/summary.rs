use coindata_core::{CalendarDate, Source};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cli::SummaryArgs;
use crate::output::Report;

use super::price::{self, PriceReport};

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    latest: PriceReport,
    month_start: CalendarDate,
    performance: Option<Performance>,
}

/// Day-over-day percentage changes between consecutive published prices.
#[derive(Debug, PartialEq, Serialize)]
struct Performance {
    average: Decimal,
    best: Decimal,
    worst: Decimal,
    samples: usize,
}

impl Performance {
    fn from_changes(changes: &[Decimal]) -> Option<Self> {
        let best = changes.iter().max()?.round_dp(2);
        let worst = changes.iter().min()?.round_dp(2);
        let total: Decimal = changes.iter().sum();
        let average = (total / Decimal::from(changes.len())).round_dp(2);

        Some(Self {
            average,
            best,
            worst,
            samples: changes.len(),
        })
    }
}

pub fn run(args: &SummaryArgs, source: &dyn Source) -> SummaryReport {
    summarize(source, args.as_of.unwrap_or_else(CalendarDate::today))
}

fn summarize(source: &dyn Source, as_of: CalendarDate) -> SummaryReport {
    let month_start = as_of.first_of_month();
    let points: Vec<_> = source.range(month_start, as_of).collect();
    let changes = daily_changes(&points);

    SummaryReport {
        latest: price::lookup(source, as_of),
        month_start,
        performance: Performance::from_changes(&changes),
    }
}

/// Percent change from each price to the next; zero prices are skipped as a base.
fn daily_changes(points: &[(CalendarDate, Decimal)]) -> Vec<Decimal> {
    points
        .windows(2)
        .filter_map(|pair| {
            let (previous, current) = (pair[0].1, pair[1].1);
            (current - previous)
                .checked_div(previous)
                .map(|ratio| ratio * Decimal::ONE_HUNDRED)
        })
        .collect()
}

impl Report for SummaryReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = self.latest.text_lines();
        match &self.performance {
            Some(performance) => lines.push(format!(
                "Average daily change of {:.2}%, best and worst daily change of {:.2}% and {:.2}%",
                performance.average, performance.best, performance.worst
            )),
            None => lines.push(format!(
                "Not enough prices since {} to measure daily change",
                self.month_start
            )),
        }
        lines
    }
}
