//! Benchmarks for digit normalization throughput

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use numero_core::{is_digit_only, normalize, strip_non_digits};
use std::hint::black_box;

/// Generate test text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize, base_text: &str) -> String {
    let target_size = size_kb * 1024;
    let repetitions = target_size / base_text.len() + 1;

    base_text.repeat(repetitions)
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let ascii = "Order 12345 shipped on 2024-05-01. ";
    let persian = "سفارش ۱۲۳۴۵ در ۱۴۰۳/۰۲/۱۲ ارسال شد. ";
    let devanagari = "आदेश १२३४५ भेजा गया। ";
    let inputs = [
        ("ascii", generate_test_text(64, ascii)),
        ("persian", generate_test_text(64, persian)),
        ("devanagari", generate_test_text(64, devanagari)),
    ];

    for (name, text) in &inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(*name, |b| {
            b.iter(|| normalize(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");
    let digits = generate_test_text(16, "۰۱۲۳۴۵۶۷۸۹");
    let phone = generate_test_text(16, "+۹۸ (۹۱۲) ۳۴۵-۶۷۸۹ ");

    group.throughput(Throughput::Bytes(digits.len() as u64));
    group.bench_function("is_digit_only", |b| {
        b.iter(|| is_digit_only(black_box(&digits)));
    });

    group.throughput(Throughput::Bytes(phone.len() as u64));
    group.bench_function("strip_non_digits", |b| {
        b.iter(|| strip_non_digits(black_box(&phone), Some("+")));
    });

    group.finish();
}

criterion_group!(benches, benchmark_normalize, benchmark_helpers);
criterion_main!(benches);
