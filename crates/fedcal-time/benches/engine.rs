//! Criterion benchmarks for holiday resolution and classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fedcal_time::{CalendarDate, HolidayEngine, RuleSet, YearCache};

/// Resolve one year with each rule table.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_holidays");
    for rule_set in [RuleSet::Gregorian, RuleSet::Legacy] {
        let engine = HolidayEngine::new(rule_set);
        group.bench_function(rule_set.as_str(), |b| {
            b.iter(|| engine.resolve_holidays(black_box(2024)));
        });
    }
    group.finish();
}

/// Classify every day of 2024, with and without a year cache.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let start = CalendarDate::from_ymd(2024, 1, 1).map(|d| d.serial()).unwrap_or(1);
    let days: Vec<CalendarDate> = (start..start + 366)
        .filter_map(|s| CalendarDate::from_serial(s).ok())
        .collect();

    let engine = HolidayEngine::default();
    group.bench_function("engine_year", |b| {
        b.iter(|| days.iter().filter(|&&d| engine.is_business_day(black_box(d))).count());
    });

    let cache = YearCache::new(engine);
    group.bench_function("cached_year", |b| {
        b.iter(|| {
            days.iter()
                .filter(|&&d| matches!(cache.classify(black_box(d)), Ok(k) if k.is_business_day()))
                .count()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_classify);
criterion_main!(benches);
