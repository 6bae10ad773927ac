use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    BirthInstant, BoundaryFacts, CalculatorConfig, SajuChart, Script, Stem, calculate_saju,
    day_pillar, hour_pillar, transliterate,
};

fn pillar_bench(c: &mut Criterion) {
    let instant = BirthInstant::new(1996, 5, 13, 5, 5).unwrap();
    let facts = BoundaryFacts::new(true, true);
    let config = CalculatorConfig::default();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("day_pillar", |b| {
        b.iter(|| day_pillar(black_box(&instant), true))
    });
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(Stem::Gyeong), black_box(5)))
    });
    group.bench_function("calculate_saju", |b| {
        b.iter(|| calculate_saju(black_box(&instant), black_box(facts), &config))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let instant = BirthInstant::new(1996, 5, 13, 5, 5).unwrap();
    let saju = calculate_saju(
        &instant,
        BoundaryFacts::new(true, true),
        &CalculatorConfig::default(),
    )
    .unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("from_saju", |b| {
        b.iter(|| SajuChart::from_saju(black_box(saju)))
    });
    group.bench_function("transliterate_to_hanja", |b| {
        b.iter(|| transliterate(black_box("병자 계사 경술 기묘"), Script::Hanja))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, chart_bench);
criterion_main!(benches);
