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

//! Shared test fixtures for the phasebreak crates.
//!
//! Provides one canonical measurement set (two input sizes, thread
//! counts 1/2/4/8) in both record and CSV form, so loader, analysis,
//! and CLI tests all agree on the expected numbers.

use phasebreak_core::{BenchmarkRecord, Dataset};

/// The canonical measurement table as CSV text, headers included.
///
/// Mirrors [`breakdown_records`] row for row.
pub const SAMPLE_CSV: &str = "\
n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms
100000,1,4.2,1.1,2.3,0.6,0.8,9.0
100000,2,2.3,0.6,1.2,0.4,0.5,5.0
100000,4,1.3,0.4,0.7,0.3,0.3,3.0
100000,8,0.9,0.3,0.5,0.4,0.4,2.5
1000000,1,40.0,10.0,20.0,5.0,5.0,80.0
1000000,2,22.0,5.5,11.0,2.75,2.75,44.0
1000000,4,10.0,3.0,6.0,2.0,2.0,23.0
1000000,8,7.0,2.5,4.0,1.75,1.75,17.0
";

/// The canonical measurement set as validated records, in source order.
pub fn breakdown_records() -> Vec<BenchmarkRecord> {
    let rows: [(u64, u32, [f64; 5], f64); 8] = [
        (100_000, 1, [4.2, 1.1, 2.3, 0.6, 0.8], 9.0),
        (100_000, 2, [2.3, 0.6, 1.2, 0.4, 0.5], 5.0),
        (100_000, 4, [1.3, 0.4, 0.7, 0.3, 0.3], 3.0),
        (100_000, 8, [0.9, 0.3, 0.5, 0.4, 0.4], 2.5),
        (1_000_000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0),
        (1_000_000, 2, [22.0, 5.5, 11.0, 2.75, 2.75], 44.0),
        (1_000_000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0),
        (1_000_000, 8, [7.0, 2.5, 4.0, 1.75, 1.75], 17.0),
    ];
    rows.into_iter()
        .map(|(n, t, phases, total)| {
            BenchmarkRecord::new(n, t, phases, total)
                .unwrap_or_else(|e| panic!("fixture record n={n}, threads={t} invalid: {e}"))
        })
        .collect()
}

/// The canonical measurement set as a validated dataset.
pub fn breakdown_dataset() -> Dataset {
    Dataset::from_records(breakdown_records())
        .unwrap_or_else(|e| panic!("fixture dataset invalid: {e}"))
}

/// A table whose largest size has no single-thread record.
pub const CSV_WITHOUT_BASELINE: &str = "\
n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms
1000000,2,22.0,5.5,11.0,2.75,2.75,44.0
1000000,4,10.0,3.0,6.0,2.0,2.0,23.0
";

/// A table whose threads=4 row measured an exactly-zero phase.
pub const CSV_WITH_ZERO_PHASE: &str = "\
n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms
1000000,1,40.0,10.0,20.0,5.0,5.0,80.0
1000000,4,10.0,0.0,6.0,2.0,2.0,20.0
";

/// Named malformed tables for loader error-path tests.
///
/// Each entry is `(name, csv_text)`; every table must fail to load.
pub fn malformed_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "missing_column",
            "n,threads,build_furthest_ms,total_ms\n1000,1,40.0,80.0\n",
        ),
        (
            "non_numeric_field",
            "n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms\n1000,one,40.0,10.0,20.0,5.0,5.0,80.0\n",
        ),
        (
            "negative_time",
            "n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms\n1000,1,-40.0,10.0,20.0,5.0,5.0,80.0\n",
        ),
        (
            "duplicate_configuration",
            "n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms\n1000,1,40.0,10.0,20.0,5.0,5.0,80.0\n1000,1,39.0,10.0,20.0,5.0,5.0,79.0\n",
        ),
        (
            "total_disagrees_with_phases",
            "n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms\n1000,1,40.0,10.0,20.0,5.0,5.0,95.0\n",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_match_csv_row_count() {
        let rows = SAMPLE_CSV.lines().count() - 1;
        assert_eq!(breakdown_records().len(), rows);
    }

    #[test]
    fn test_dataset_has_both_sizes() {
        let d = breakdown_dataset();
        assert_eq!(d.distinct_sizes(), vec![100_000, 1_000_000]);
        assert_eq!(d.distinct_thread_counts(), vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_fixture_totals_match_phase_sums() {
        for r in breakdown_records() {
            assert!((r.total_ms() - r.phase_sum()).abs() < 1e-9);
        }
    }
}
