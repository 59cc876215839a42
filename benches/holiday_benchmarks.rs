//! Performance benchmarks for the Japanese Public Holiday Engine.
//!
//! This benchmark suite covers the three query shapes callers use:
//! - Single date lookup
//! - Full-year listing
//! - Multi-year range listing
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use holiday_jp::{CalendarDate, HolidayCalendar, KeyFormat};

/// Creates a calendar with the shipped configuration.
fn create_test_calendar() -> HolidayCalendar {
    HolidayCalendar::load("./config/jp").expect("Failed to load config")
}

/// Benchmark: single date lookups, one ordinary day and one substitute holiday.
fn bench_single_date(c: &mut Criterion) {
    let calendar = create_test_calendar();
    let mut group = c.benchmark_group("single_date");

    for input in ["2019-05-07", "2019-05-06", "2020-03-20"] {
        let date = CalendarDate::parse(input).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(input), &date, |b, date| {
            b.iter(|| black_box(calendar.holiday_name(black_box(date)).unwrap()))
        });
    }
    group.finish();
}

/// Benchmark: one calendar year, holidays only.
fn bench_year_listing(c: &mut Criterion) {
    let calendar = create_test_calendar();
    let mut group = c.benchmark_group("year_listing");
    group.throughput(Throughput::Elements(365));

    group.bench_function("holidays_2020", |b| {
        b.iter(|| {
            black_box(
                calendar
                    .holidays_in_year(Some(2020), KeyFormat::IsoDate, true)
                    .unwrap(),
            )
        })
    });
    group.finish();
}

/// Benchmark: decade ranges in each key format.
fn bench_range_listing(c: &mut Criterion) {
    let calendar = create_test_calendar();
    let start = CalendarDate::from_ymd(2010, 1, 1).unwrap();
    let end = CalendarDate::from_ymd(2019, 12, 31).unwrap();

    let mut group = c.benchmark_group("range_listing");
    group.throughput(Throughput::Elements(3652));
    group.sample_size(20);

    for format in [KeyFormat::IsoDate, KeyFormat::Timestamp, KeyFormat::JulianDay] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{format:?}")),
            &format,
            |b, format| {
                b.iter(|| {
                    black_box(
                        calendar
                            .holidays_in_range(&start, &end, *format, false)
                            .unwrap(),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_date,
    bench_year_listing,
    bench_range_listing
);
criterion_main!(benches);
