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

//! The immutable dataset and its query layer.

use crate::error::{AnalysisError, Result};
use crate::record::{BenchmarkRecord, ConfigKey};
use std::collections::HashMap;

/// Absolute drift allowed between `total_ms` and the phase sum.
pub const TOTAL_DRIFT_ABS_MS: f64 = 0.5;

/// Relative drift allowed between `total_ms` and the phase sum.
pub const TOTAL_DRIFT_REL: f64 = 0.01;

/// An ordered, immutable set of benchmark records.
///
/// Construction is the single validation point: duplicate configuration
/// keys and totals that disagree with the phase sum beyond tolerance are
/// rejected outright rather than resolved silently. After construction
/// the dataset is read-only; every query returns an independent subset
/// that preserves source order.
///
/// # Examples
///
/// ```
/// use phasebreak_core::{BenchmarkRecord, Dataset};
///
/// let dataset = Dataset::from_records(vec![
///     BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap(),
///     BenchmarkRecord::new(1000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.distinct_thread_counts(), vec![1, 4]);
/// assert_eq!(dataset.filter_by_size(1000).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDataset"))]
pub struct Dataset {
    records: Vec<BenchmarkRecord>,
}

/// Unvalidated mirror of [`Dataset`].
///
/// Deserialization is funneled through [`Dataset::from_records`], so the
/// duplicate-key and total-drift checks also apply to serialized data.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDataset {
    records: Vec<BenchmarkRecord>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDataset> for Dataset {
    type Error = AnalysisError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Self::from_records(raw.records)
    }
}

impl Dataset {
    /// Build a dataset from records in source order.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::DuplicateConfiguration`] when two records share
    ///   an `(input_size, thread_count)` key; both 1-based positions are
    ///   reported.
    /// - [`AnalysisError::TotalMismatch`] when a record's `total_ms`
    ///   drifts from its phase sum by more than
    ///   `max(`[`TOTAL_DRIFT_ABS_MS`]`, `[`TOTAL_DRIFT_REL`]` * total_ms)`.
    pub fn from_records(records: Vec<BenchmarkRecord>) -> Result<Self> {
        let mut seen: HashMap<ConfigKey, usize> = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if let Some(first) = seen.insert(record.key(), pos + 1) {
                return Err(AnalysisError::DuplicateConfiguration {
                    input_size: record.input_size(),
                    thread_count: record.thread_count(),
                    first_row: first,
                    duplicate_row: pos + 1,
                });
            }
            let tolerance_ms = TOTAL_DRIFT_ABS_MS.max(TOTAL_DRIFT_REL * record.total_ms());
            let drift = (record.total_ms() - record.phase_sum()).abs();
            if drift > tolerance_ms {
                return Err(AnalysisError::TotalMismatch {
                    input_size: record.input_size(),
                    thread_count: record.thread_count(),
                    total_ms: record.total_ms(),
                    phase_sum_ms: record.phase_sum(),
                    tolerance_ms,
                });
            }
        }
        Ok(Self { records })
    }

    /// All records in source order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records measured at input size `n`, in source order.
    pub fn filter_by_size(&self, n: u64) -> Vec<&BenchmarkRecord> {
        self.records.iter().filter(|r| r.input_size() == n).collect()
    }

    /// Records measured with `t` threads, in source order.
    pub fn filter_by_threads(&self, t: u32) -> Vec<&BenchmarkRecord> {
        self.records.iter().filter(|r| r.thread_count() == t).collect()
    }

    /// Sorted, deduplicated input sizes present in the dataset.
    pub fn distinct_sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.records.iter().map(|r| r.input_size()).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Sorted, deduplicated thread counts present in the dataset.
    pub fn distinct_thread_counts(&self) -> Vec<u32> {
        let mut threads: Vec<u32> = self.records.iter().map(|r| r.thread_count()).collect();
        threads.sort_unstable();
        threads.dedup();
        threads
    }
}

/// Sort a subset by ascending thread count.
///
/// The sort is stable: records with equal thread counts keep their
/// source order.
pub fn sorted_by_threads<'a>(mut subset: Vec<&'a BenchmarkRecord>) -> Vec<&'a BenchmarkRecord> {
    subset.sort_by_key(|r| r.thread_count());
    subset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u64, threads: u32, scale: f64) -> BenchmarkRecord {
        let phases = [40.0 * scale, 10.0 * scale, 20.0 * scale, 5.0 * scale, 5.0 * scale];
        BenchmarkRecord::new(n, threads, phases, 80.0 * scale).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record(1000, 1, 1.0),
            record(1000, 2, 0.55),
            record(1000, 4, 0.3),
            record(10_000, 1, 12.0),
            record(10_000, 4, 3.5),
        ])
        .unwrap()
    }

    #[test]
    fn test_preserves_source_order() {
        let d = dataset();
        let threads: Vec<u32> = d.records().iter().map(|r| r.thread_count()).collect();
        assert_eq!(threads, vec![1, 2, 4, 1, 4]);
    }

    #[test]
    fn test_filter_by_size() {
        let d = dataset();
        let subset = d.filter_by_size(10_000);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.input_size() == 10_000));
        // Filtering does not touch the dataset itself.
        assert_eq!(d.len(), 5);
    }

    #[test]
    fn test_filter_by_threads() {
        let d = dataset();
        let subset = d.filter_by_threads(1);
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.thread_count() == 1));
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        assert!(dataset().filter_by_size(77).is_empty());
    }

    #[test]
    fn test_distinct_sizes_sorted() {
        assert_eq!(dataset().distinct_sizes(), vec![1000, 10_000]);
    }

    #[test]
    fn test_distinct_thread_counts_sorted() {
        assert_eq!(dataset().distinct_thread_counts(), vec![1, 2, 4]);
    }

    #[test]
    fn test_sorted_by_threads_ascending() {
        let d = Dataset::from_records(vec![
            record(1000, 4, 0.3),
            record(1000, 1, 1.0),
            record(1000, 2, 0.55),
        ])
        .unwrap();
        let sorted = sorted_by_threads(d.filter_by_size(1000));
        let threads: Vec<u32> = sorted.iter().map(|r| r.thread_count()).collect();
        assert_eq!(threads, vec![1, 2, 4]);
    }

    #[test]
    fn test_sorted_by_threads_is_stable() {
        // Equal thread counts at different sizes keep source order.
        let d = Dataset::from_records(vec![
            record(2000, 2, 1.0),
            record(1000, 2, 1.0),
        ])
        .unwrap();
        let sorted = sorted_by_threads(d.records().iter().collect());
        assert_eq!(sorted[0].input_size(), 2000);
        assert_eq!(sorted[1].input_size(), 1000);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = Dataset::from_records(vec![
            record(1000, 1, 1.0),
            record(1000, 2, 0.55),
            record(1000, 1, 0.9),
        ])
        .unwrap_err();
        match err {
            AnalysisError::DuplicateConfiguration { first_row, duplicate_row, .. } => {
                assert_eq!(first_row, 1);
                assert_eq!(duplicate_row, 3);
            }
            other => panic!("expected DuplicateConfiguration, got {other}"),
        }
    }

    #[test]
    fn test_total_mismatch_rejected() {
        let bad = BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 95.0).unwrap();
        let err = Dataset::from_records(vec![bad]).unwrap_err();
        assert!(matches!(err, AnalysisError::TotalMismatch { .. }));
    }

    #[test]
    fn test_total_drift_within_tolerance_accepted() {
        // 80.6 vs phase sum 80.0 is within the 1% relative tolerance.
        let noisy = BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.6).unwrap();
        assert!(Dataset::from_records(vec![noisy]).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialization_rejects_duplicate_keys() {
        let row = r#"{"input_size":1000,"thread_count":1,"phase_ms":[40.0,10.0,20.0,5.0,5.0],"total_ms":80.0}"#;
        let json = format!("{{\"records\":[{row},{row}]}}");
        let err = serde_json::from_str::<Dataset>(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate configuration"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let d = dataset();
        let json = serde_json::to_string(&d).unwrap();
        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        let d = Dataset::from_records(vec![]).unwrap();
        assert!(d.is_empty());
        assert!(d.distinct_sizes().is_empty());
    }
}
