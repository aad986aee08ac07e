use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jph_time::{Date, HolidayCalendar, Japan};

fn criterion_benchmark(c: &mut Criterion) {
    let cal = Japan;
    let substitute = Date::from_ymd(2024, 8, 12).unwrap();
    let ordinary = Date::from_ymd(2024, 6, 18).unwrap();

    c.bench_function("holiday_name substitute", |b| {
        b.iter(|| cal.holiday_name(black_box(substitute)))
    });
    c.bench_function("holiday_name ordinary", |b| {
        b.iter(|| cal.holiday_name(black_box(ordinary)))
    });
    c.bench_function("holiday_list 2024", |b| {
        b.iter(|| cal.holiday_list(black_box(2024), 64))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
