use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jiff::civil::Date;
use rrul::{Lang, Rule};

fn fixed_anchor() -> Date {
    Date::new(2025, 6, 14).unwrap()
}

// ---------------------------------------------------------------------------
// Parse benchmarks
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("simple", |b| {
        b.iter(|| Rule::parse(black_box("FREQ=DAILY")).unwrap());
    });

    group.bench_function("complex", |b| {
        b.iter(|| {
            Rule::parse(black_box(
                "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,TU,WE,TH,FR;COUNT=40;UNTIL=20271231T235959Z",
            ))
            .unwrap()
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Generation benchmarks
// ---------------------------------------------------------------------------

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let anchor = fixed_anchor();

    let daily = Rule::parse("FREQ=DAILY;COUNT=100").unwrap();
    group.bench_function("daily_100", |b| {
        b.iter(|| daily.generate(black_box(anchor), None, None));
    });

    let weekly = Rule::parse("FREQ=WEEKLY;BYDAY=MO,WE,FR;COUNT=100").unwrap();
    group.bench_function("weekly_multi_day_100", |b| {
        b.iter(|| weekly.generate(black_box(anchor), None, None));
    });

    let monthly = Rule::parse("FREQ=MONTHLY;BYDAY=FR;BYSETPOS=-1;COUNT=100").unwrap();
    group.bench_function("monthly_last_friday_100", |b| {
        b.iter(|| monthly.generate(black_box(anchor), None, None));
    });

    let yearly = Rule::parse("FREQ=YEARLY;COUNT=50").unwrap();
    group.bench_function("yearly_50", |b| {
        b.iter(|| yearly.generate(black_box(anchor), None, None));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Display benchmark (canonical serialization)
// ---------------------------------------------------------------------------

fn bench_display(c: &mut Criterion) {
    let mut group = c.benchmark_group("display");

    let rule =
        Rule::parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE,FR;UNTIL=20271231T235959Z").unwrap();
    group.bench_function("to_string", |b| {
        b.iter(|| black_box(&rule).to_string());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Describe benchmarks
// ---------------------------------------------------------------------------

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    let rule = Rule::parse("FREQ=MONTHLY;INTERVAL=2;BYDAY=FR;BYSETPOS=1;COUNT=12").unwrap();
    group.bench_function("english", |b| {
        b.iter(|| black_box(&rule).describe());
    });
    group.bench_function("spanish", |b| {
        b.iter(|| black_box(&rule).describe_in(Lang::Es));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_generate,
    bench_display,
    bench_describe
);
criterion_main!(benches);
