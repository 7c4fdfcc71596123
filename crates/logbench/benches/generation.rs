// Dweve Logbench - Serial vs. Parallel Log Analyzer Benchmark Pipeline
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Corpus generation throughput.
//!
//! Generation has to stay cheap relative to the analyzer runs it feeds;
//! this tracks line-sampling and full-corpus write cost across sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use logbench::workload::{sample_line, write_corpus};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_sample_line(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(99);
    c.bench_function("sample_line", |b| {
        b.iter(|| sample_line(&mut rng));
    });
}

fn bench_write_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_corpus");
    for &lines in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("corpus.txt");
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| write_corpus(&path, lines, &mut rng).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample_line, bench_write_corpus);
criterion_main!(benches);
