// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use span_algebra::{
    merge::merge, subtract::subtract_ordered, subtract_from_super_spans, CategorizedSpan, Span,
};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Random mix of super and subtrahend spans over `[0, 10 * n)`.
fn random_spans(n: usize, seed: u64) -> Vec<CategorizedSpan<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let horizon = 10 * n as i64;

    (0..n)
        .map(|_| {
            let start = rng.gen_range(0..horizon);
            let width = rng.gen_range(1..=25);
            CategorizedSpan::new(Span::new(start, start + width), rng.gen_bool(0.5))
        })
        .collect()
}

fn untagged(spans: Vec<CategorizedSpan<i64>>) -> Vec<Span<i64>> {
    spans.into_iter().map(CategorizedSpan::into_span).collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtract_from_super_spans");

    for n in SIZES {
        let spans = random_spans(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &spans, |b, spans| {
            b.iter(|| subtract_from_super_spans(black_box(spans.as_slice()), 0))
        });
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtract_ordered");

    for n in SIZES {
        let spans = random_spans(n, 0xbead);
        let (supers, subtrahends): (Vec<_>, Vec<_>) =
            spans.into_iter().partition(CategorizedSpan::is_super);
        let supers = merge(&untagged(supers));
        let subtrahends = merge(&untagged(subtrahends));

        group.throughput(Throughput::Elements((supers.len() + subtrahends.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(supers, subtrahends),
            |b, (supers, subtrahends)| {
                b.iter(|| {
                    subtract_ordered(
                        black_box(supers.as_slice()),
                        black_box(subtrahends.as_slice()),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_sweep);
criterion_main!(benches);
