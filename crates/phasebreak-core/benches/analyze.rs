// Phasebreak - Parallel Phase Breakdown Analyzer
//
// Copyright (c) 2025 Phasebreak contributors.
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

//! Benchmarks for the analysis pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phasebreak_core::{analyze, BenchmarkRecord, Dataset, Report, SizeSelection};

fn wide_dataset(sizes: u64, thread_steps: u32) -> Dataset {
    let mut records = Vec::new();
    for s in 1..=sizes {
        let n = 10_000 * s;
        for step in 0..thread_steps {
            let threads = 1u32 << step;
            let scale = (n as f64).sqrt() / f64::from(threads).powf(0.9);
            let phases = [
                4.0 * scale,
                1.0 * scale,
                2.0 * scale,
                0.5 * scale,
                0.5 * scale,
            ];
            let total = phases.iter().sum();
            records.push(BenchmarkRecord::new(n, threads, phases, total).unwrap());
        }
    }
    Dataset::from_records(records).unwrap()
}

fn bench_analyze(c: &mut Criterion) {
    let dataset = wide_dataset(8, 6);
    c.bench_function("analyze_largest_size", |b| {
        b.iter(|| analyze(black_box(&dataset), SizeSelection::LargestAvailable).unwrap())
    });
}

fn bench_report(c: &mut Criterion) {
    let dataset = wide_dataset(8, 6);
    let analysis = analyze(&dataset, SizeSelection::LargestAvailable).unwrap();
    c.bench_function("report_from_analysis", |b| {
        b.iter(|| Report::from_analysis(black_box(&analysis)).unwrap())
    });
    let report = Report::from_analysis(&analysis).unwrap();
    c.bench_function("report_render_text", |b| {
        b.iter(|| black_box(&report).render_text())
    });
}

criterion_group!(benches, bench_analyze, bench_report);
criterion_main!(benches);
