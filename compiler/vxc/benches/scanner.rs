//! Scanner throughput.
//!
//! Tokens are consumed in a tight loop without collecting, so this measures
//! scanning alone: no keyword lookup, no tree building.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vx_lexer_core::{next_token, SourceBuffer};

fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "public def func{i}(Int x, Int y) {{\n    val Int z = x * {i} + y # scale #\n    return z\n}}\n"
            )
        })
        .collect()
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                let buf = SourceBuffer::new(src);
                b.iter(|| {
                    let mut cursor = buf.cursor();
                    loop {
                        let (token, rest) = next_token(cursor);
                        if token.is_eof() {
                            break;
                        }
                        black_box(token);
                        cursor = rest;
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_long_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/identifiers");

    for len in [4, 16, 64] {
        let ident = "a".repeat(len);
        let source = std::iter::repeat(ident).take(1000).collect::<Vec<_>>().join(" ");
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &source, |b, src| {
            let buf = SourceBuffer::new(src);
            b.iter(|| vx_lexer_core::Tokens::new(black_box(&buf)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput, bench_long_identifiers);
criterion_main!(benches);
