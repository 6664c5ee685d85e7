use std::collections::HashMap;

use coindata_core::{
    AssetId, BtcSource, CalendarDate, CsvLayout, EthSource, FeedConfig, HttpClient, HttpError,
    HttpRequest, HttpResponse, PriceSeries, Source,
};
use rust_decimal::Decimal;

/// Weekends and a two-day outage are missing on purpose.
const FEED: &str = "date,price\n\
    2024-01-01,100\n\
    2024-01-02,101.25\n\
    2024-01-03,110\n\
    2024-01-05,108.4\n\
    2024-01-08,99.99\n\
    2024-01-09,\n\
    2024-01-11,120.5\n";

struct CannedFeed;

impl HttpClient for CannedFeed {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
        Ok(HttpResponse::ok(FEED))
    }
}

/// Relies on the provided `range` implementation.
struct LookupOnlySource(HashMap<CalendarDate, Decimal>);

impl Source for LookupOnlySource {
    fn asset(&self) -> AssetId {
        AssetId::Btc
    }

    fn price(&self, date: CalendarDate) -> Option<Decimal> {
        self.0.get(&date).copied()
    }
}

struct SourceCase {
    name: &'static str,
    source: Box<dyn Source>,
}

fn feed() -> FeedConfig {
    FeedConfig::remote("https://example.test/prices.csv").with_layout(CsvLayout::default())
}

fn expected_series() -> PriceSeries {
    [
        ("2024-01-01", Decimal::new(100, 0)),
        ("2024-01-02", Decimal::new(10_125, 2)),
        ("2024-01-03", Decimal::new(110, 0)),
        ("2024-01-05", Decimal::new(10_840, 2)),
        ("2024-01-08", Decimal::new(9_999, 2)),
        ("2024-01-11", Decimal::new(12_050, 2)),
    ]
    .into_iter()
    .map(|(date, price)| (day(date), price))
    .collect()
}

fn source_cases() -> Vec<SourceCase> {
    vec![
        SourceCase {
            name: "btc",
            source: Box::new(BtcSource::from_feed(&feed(), &CannedFeed).expect("btc loads")),
        },
        SourceCase {
            name: "eth",
            source: Box::new(EthSource::from_feed(&feed(), &CannedFeed).expect("eth loads")),
        },
        SourceCase {
            name: "lookup-only",
            source: Box::new(LookupOnlySource(expected_series().iter().collect())),
        },
    ]
}

fn day(value: &str) -> CalendarDate {
    CalendarDate::parse(value).expect("valid date")
}

fn days_between(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    let mut days = Vec::new();
    let mut current = Some(start);
    while let Some(date) = current.filter(|date| *date <= end) {
        days.push(date);
        current = date.next_day();
    }
    days
}

#[test]
fn price_returns_stored_value_or_none_for_every_date() {
    let expected = expected_series();

    for case in source_cases() {
        for date in days_between(day("2023-12-25"), day("2024-01-20")) {
            assert_eq!(
                case.source.price(date),
                expected.get(date),
                "source '{}': price on {date}",
                case.name
            );
        }
    }
}

#[test]
fn gap_example_returns_none_and_range_skips_it() {
    for case in source_cases() {
        assert_eq!(case.source.price(day("2024-01-04")), None, "source '{}'", case.name);

        let points: Vec<_> = case.source.range(day("2024-01-03"), day("2024-01-05")).collect();
        assert_eq!(
            points,
            vec![
                (day("2024-01-03"), Decimal::new(110, 0)),
                (day("2024-01-05"), Decimal::new(10_840, 2)),
            ],
            "source '{}'",
            case.name
        );
    }
}

#[test]
fn range_is_sorted_bounded_and_unique_for_all_windows() {
    let window = days_between(day("2023-12-30"), day("2024-01-13"));

    for case in source_cases() {
        for (i, start) in window.iter().enumerate() {
            for end in &window[i..] {
                let points: Vec<_> = case.source.range(*start, *end).collect();

                assert!(
                    points.windows(2).all(|pair| pair[0].0 < pair[1].0),
                    "source '{}': {start}..={end} must be strictly ascending",
                    case.name
                );
                assert!(
                    points.iter().all(|(date, _)| start <= date && date <= end),
                    "source '{}': {start}..={end} must stay in bounds",
                    case.name
                );

                let expected: Vec<_> = expected_series().range(*start, *end).collect();
                assert_eq!(points, expected, "source '{}': {start}..={end}", case.name);
            }
        }
    }
}

#[test]
fn range_is_restartable() {
    for case in source_cases() {
        let first: Vec<_> = case.source.range(day("2024-01-01"), day("2024-01-31")).collect();
        let second: Vec<_> = case.source.range(day("2024-01-01"), day("2024-01-31")).collect();
        assert_eq!(first, second, "source '{}'", case.name);
        assert_eq!(first.len(), 6, "source '{}'", case.name);
    }
}

#[test]
fn inverted_range_is_empty() {
    for case in source_cases() {
        assert_eq!(
            case.source.range(day("2024-01-11"), day("2024-01-01")).count(),
            0,
            "source '{}'",
            case.name
        );
    }
}

#[test]
fn lookup_by_timestamp_uses_calendar_date() {
    let late_evening = time::macros::datetime!(2024-01-03 23:59:59 UTC);
    let just_after_midnight = time::macros::datetime!(2024-01-03 00:00:01);

    for case in source_cases() {
        assert_eq!(
            case.source.price(late_evening.into()),
            Some(Decimal::new(110, 0)),
            "source '{}'",
            case.name
        );
        assert_eq!(
            case.source.price(just_after_midnight.into()),
            Some(Decimal::new(110, 0)),
            "source '{}'",
            case.name
        );
    }
}
