//! Benchmarks for cc_display performance testing.
//!
//! Run with: cargo bench
//!
//! The engine is re-run on every keystroke of an input field, so the numbers
//! that matter here are single-call latencies.

use cc_display::{classify, classify_accepting, format_expiry, format_number, CardIssuer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Test card numbers
const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const AMEX: &str = "378282246310005";
const UNIONPAY: &str = "6240008631401148";
const UNKNOWN: &str = "9999999999999999";

/// Benchmark classification across the registry scan.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    group.bench_function("visa_early_match", |b| {
        b.iter(|| classify(black_box(VISA_16)))
    });

    group.bench_function("visa_formatted_input", |b| {
        b.iter(|| classify(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("unionpay_late_match", |b| {
        b.iter(|| classify(black_box(UNIONPAY)))
    });

    group.bench_function("unknown_full_scan", |b| {
        b.iter(|| classify(black_box(UNKNOWN)))
    });

    group.bench_function("restricted_set", |b| {
        let accepted = [CardIssuer::Visa, CardIssuer::Mastercard];
        b.iter(|| classify_accepting(black_box(AMEX), black_box(&accepted)))
    });

    group.finish();
}

/// Benchmark display formatting.
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let visa = classify(VISA_16);
    group.bench_function("visa_complete", |b| {
        b.iter(|| format_number(black_box(VISA_16), black_box(&visa)))
    });

    let partial = classify("41");
    group.bench_function("two_digits_typed", |b| {
        b.iter(|| format_number(black_box("41"), black_box(&partial)))
    });

    let amex = classify(AMEX);
    group.bench_function("amex_grouping", |b| {
        b.iter(|| format_number(black_box(AMEX), black_box(&amex)))
    });

    group.finish();
}

/// Benchmark expiry formatting.
fn bench_expiry(c: &mut Criterion) {
    let mut group = c.benchmark_group("expiry");

    group.bench_function("bare_digits", |b| b.iter(|| format_expiry(black_box("1218"))));
    group.bench_function("long_year", |b| b.iter(|| format_expiry(black_box("01/2025"))));
    group.bench_function("garbage", |b| b.iter(|| format_expiry(black_box("/"))));

    group.finish();
}

/// Benchmark the per-keystroke pipeline: classify then format.
fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke");

    group.bench_function("classify_and_format", |b| {
        b.iter(|| {
            let classification = classify(black_box(AMEX));
            format_number(black_box(AMEX), &classification)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_format,
    bench_expiry,
    bench_keystroke
);
criterion_main!(benches);
