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

//! Derived scaling metrics.
//!
//! Every function here is a pure function of its input records: nothing
//! mutates the dataset and no rounding is applied. Rounding is a
//! presentation concern of the report formatter.

use crate::dataset::{sorted_by_threads, Dataset};
use crate::error::{AnalysisError, Result};
use crate::phase::Phase;
use crate::record::BenchmarkRecord;

/// Policy for choosing which input size to analyze.
///
/// The conventional choice is the largest measured size, where
/// bottlenecks are most visible; that convention is an explicit default
/// here, not a hidden one, and callers can pin any measured size
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeSelection {
    /// Analyze the largest input size present in the dataset (default).
    #[default]
    LargestAvailable,
    /// Analyze exactly this input size.
    Exact(u64),
}

/// Percentage of a configuration's total time spent in one phase.
///
/// # Errors
///
/// [`AnalysisError::DivisionByZero`] when the record's total time is zero.
pub fn percentage(record: &BenchmarkRecord, phase: Phase) -> Result<f64> {
    if record.total_ms() == 0.0 {
        return Err(AnalysisError::zero_total(
            record.input_size(),
            record.thread_count(),
        ));
    }
    Ok(record.phase_ms(phase) / record.total_ms() * 100.0)
}

/// Speedup of one phase relative to the baseline record.
///
/// # Errors
///
/// [`AnalysisError::DivisionByZero`] when the phase measured exactly zero
/// time in `record`. A zero denominator is a data anomaly, not an
/// infinite speedup.
pub fn phase_speedup(baseline: &BenchmarkRecord, record: &BenchmarkRecord, phase: Phase) -> Result<f64> {
    if record.phase_ms(phase) == 0.0 {
        return Err(AnalysisError::zero_phase(
            record.input_size(),
            record.thread_count(),
            phase,
        ));
    }
    Ok(baseline.phase_ms(phase) / record.phase_ms(phase))
}

/// Parallel efficiency of one phase, as a percentage.
///
/// `speedup / thread_count * 100`; defined exactly when the speedup is.
pub fn phase_efficiency(baseline: &BenchmarkRecord, record: &BenchmarkRecord, phase: Phase) -> Result<f64> {
    Ok(phase_speedup(baseline, record, phase)? / f64::from(record.thread_count()) * 100.0)
}

/// Total-time speedup of a configuration relative to the baseline.
///
/// # Errors
///
/// [`AnalysisError::DivisionByZero`] when the record's total time is zero.
pub fn total_speedup(baseline: &BenchmarkRecord, record: &BenchmarkRecord) -> Result<f64> {
    if record.total_ms() == 0.0 {
        return Err(AnalysisError::zero_total(
            record.input_size(),
            record.thread_count(),
        ));
    }
    Ok(baseline.total_ms() / record.total_ms())
}

/// Resolve the unique single-thread baseline within a same-size subset.
///
/// # Errors
///
/// [`AnalysisError::BaselineNotFound`] when no single-thread record
/// exists, [`AnalysisError::AmbiguousBaseline`] when more than one does.
pub fn resolve_baseline<'a>(
    subset: &[&'a BenchmarkRecord],
    input_size: u64,
) -> Result<&'a BenchmarkRecord> {
    let mut candidates = subset.iter().filter(|r| r.is_baseline());
    let baseline = candidates
        .next()
        .ok_or(AnalysisError::BaselineNotFound { input_size })?;
    let extras = candidates.count();
    if extras > 0 {
        return Err(AnalysisError::AmbiguousBaseline {
            input_size,
            count: extras + 1,
        });
    }
    Ok(baseline)
}

/// Derived metrics for one phase of one configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseMetrics {
    /// The phase these metrics describe.
    pub phase: Phase,
    /// Measured elapsed time.
    pub elapsed_ms: f64,
    /// Share of the configuration's total time, in percent.
    pub percentage: f64,
    /// Speedup relative to the baseline.
    pub speedup: f64,
    /// Parallel efficiency, in percent.
    pub efficiency: f64,
}

/// Derived metrics for one configuration (thread count) at the analyzed
/// input size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigMetrics {
    /// Worker thread count.
    pub thread_count: u32,
    /// Total elapsed time of the configuration.
    pub total_ms: f64,
    /// Total-time speedup relative to the baseline.
    pub total_speedup: f64,
    /// Per-phase metrics in canonical phase order.
    pub phases: Vec<PhaseMetrics>,
}

/// The full metric table for one input size, plus the records it was
/// derived from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakdownAnalysis {
    /// The analyzed input size.
    pub input_size: u64,
    /// The single-thread reference record.
    pub baseline: BenchmarkRecord,
    /// All records at this size, ascending by thread count.
    pub records: Vec<BenchmarkRecord>,
    /// Derived metrics per configuration, parallel to `records`.
    pub configs: Vec<ConfigMetrics>,
}

impl BreakdownAnalysis {
    /// Metrics for the configuration with the given thread count.
    pub fn config(&self, thread_count: u32) -> Option<&ConfigMetrics> {
        self.configs.iter().find(|c| c.thread_count == thread_count)
    }
}

/// Run the metrics engine over one input size of the dataset.
///
/// Resolves the input size per `selection`, resolves the single-thread
/// baseline, and derives percentage, speedup, and efficiency for every
/// phase of every configuration, plus total-time speedups.
///
/// # Errors
///
/// - [`AnalysisError::EmptySubset`] when the dataset is empty and the
///   largest size was requested.
/// - [`AnalysisError::BaselineNotFound`] /
///   [`AnalysisError::AmbiguousBaseline`] when the selected size has no
///   unique single-thread record (an `Exact` size with no records at all
///   also has no baseline).
/// - [`AnalysisError::DivisionByZero`] when any configuration carries a
///   zero total or zero phase time.
///
/// # Examples
///
/// ```
/// use phasebreak_core::{analyze, BenchmarkRecord, Dataset, SizeSelection};
///
/// let dataset = Dataset::from_records(vec![
///     BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap(),
///     BenchmarkRecord::new(1000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap(),
/// ])
/// .unwrap();
///
/// let analysis = analyze(&dataset, SizeSelection::default()).unwrap();
/// assert_eq!(analysis.input_size, 1000);
/// let at4 = analysis.config(4).unwrap();
/// assert!((at4.total_speedup - 80.0 / 23.0).abs() < 1e-12);
/// ```
pub fn analyze(dataset: &Dataset, selection: SizeSelection) -> Result<BreakdownAnalysis> {
    let input_size = match selection {
        SizeSelection::Exact(n) => n,
        SizeSelection::LargestAvailable => dataset
            .distinct_sizes()
            .last()
            .copied()
            .ok_or(AnalysisError::EmptySubset)?,
    };

    let subset = sorted_by_threads(dataset.filter_by_size(input_size));
    let baseline = resolve_baseline(&subset, input_size)?;

    let mut configs = Vec::with_capacity(subset.len());
    for record in &subset {
        let mut phases = Vec::with_capacity(Phase::COUNT);
        for phase in Phase::ALL {
            phases.push(PhaseMetrics {
                phase,
                elapsed_ms: record.phase_ms(phase),
                percentage: percentage(record, phase)?,
                speedup: phase_speedup(baseline, record, phase)?,
                efficiency: phase_efficiency(baseline, record, phase)?,
            });
        }
        configs.push(ConfigMetrics {
            thread_count: record.thread_count(),
            total_ms: record.total_ms(),
            total_speedup: total_speedup(baseline, record)?,
            phases,
        });
    }

    Ok(BreakdownAnalysis {
        input_size,
        baseline: baseline.clone(),
        records: subset.into_iter().cloned().collect(),
        configs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricTerm;

    fn baseline() -> BenchmarkRecord {
        BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap()
    }

    fn at_four_threads() -> BenchmarkRecord {
        BenchmarkRecord::new(1000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap()
    }

    fn two_size_dataset() -> Dataset {
        Dataset::from_records(vec![
            BenchmarkRecord::new(100, 1, [4.0, 1.0, 2.0, 0.5, 0.5], 8.0).unwrap(),
            baseline(),
            at_four_threads(),
        ])
        .unwrap()
    }

    #[test]
    fn test_percentage() {
        let b = baseline();
        assert_eq!(percentage(&b, Phase::BuildFurthest).unwrap(), 50.0);
        assert_eq!(percentage(&b, Phase::ScanSamples).unwrap(), 6.25);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let r = at_four_threads();
        let sum: f64 = Phase::ALL
            .iter()
            .map(|&p| percentage(&r, p).unwrap())
            .sum();
        assert!((sum - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_percentage_zero_total_fails() {
        let r = BenchmarkRecord::new(1000, 2, [0.0; 5], 0.0).unwrap();
        let err = percentage(&r, Phase::BuildFurthest).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::DivisionByZero { term: MetricTerm::Total, thread_count: 2, .. }
        ));
    }

    #[test]
    fn test_phase_speedup() {
        let sp = phase_speedup(&baseline(), &at_four_threads(), Phase::BuildFurthest).unwrap();
        assert_eq!(sp, 4.0);
    }

    #[test]
    fn test_baseline_speedup_is_one_and_efficiency_hundred() {
        let b = baseline();
        for phase in Phase::ALL {
            assert_eq!(phase_speedup(&b, &b, phase).unwrap(), 1.0);
            assert_eq!(phase_efficiency(&b, &b, phase).unwrap(), 100.0);
        }
    }

    #[test]
    fn test_zero_phase_time_is_an_error_not_infinity() {
        // Scenario: a phase measures 0 ms at threads=4 while nonzero at
        // the baseline.
        let anomalous =
            BenchmarkRecord::new(1000, 4, [10.0, 0.0, 6.0, 2.0, 2.0], 20.0).unwrap();
        let err = phase_speedup(&baseline(), &anomalous, Phase::SampleIntervals).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SampleIntervals"));
        assert!(msg.contains("threads=4"));
    }

    #[test]
    fn test_total_speedup() {
        let sp = total_speedup(&baseline(), &at_four_threads()).unwrap();
        assert!((sp - 3.478).abs() < 0.001);
    }

    #[test]
    fn test_efficiency() {
        let eff =
            phase_efficiency(&baseline(), &at_four_threads(), Phase::BuildFurthest).unwrap();
        assert_eq!(eff, 100.0);
    }

    #[test]
    fn test_resolve_baseline_missing() {
        let only_parallel = at_four_threads();
        let subset = vec![&only_parallel];
        let err = resolve_baseline(&subset, 1000).unwrap_err();
        assert!(matches!(err, AnalysisError::BaselineNotFound { input_size: 1000 }));
    }

    #[test]
    fn test_resolve_baseline_ambiguous() {
        // Same key is rejected by Dataset, so ambiguity can only arise
        // from a caller-assembled subset; the contract still holds.
        let a = baseline();
        let b = baseline();
        let subset = vec![&a, &b];
        let err = resolve_baseline(&subset, 1000).unwrap_err();
        assert!(matches!(err, AnalysisError::AmbiguousBaseline { count: 2, .. }));
    }

    #[test]
    fn test_analyze_defaults_to_largest_size() {
        let analysis = analyze(&two_size_dataset(), SizeSelection::LargestAvailable).unwrap();
        assert_eq!(analysis.input_size, 1000);
        assert_eq!(analysis.configs.len(), 2);
    }

    #[test]
    fn test_analyze_exact_size_override() {
        let analysis = analyze(&two_size_dataset(), SizeSelection::Exact(100)).unwrap();
        assert_eq!(analysis.input_size, 100);
        assert_eq!(analysis.configs.len(), 1);
    }

    #[test]
    fn test_analyze_orders_configs_by_threads() {
        let dataset = Dataset::from_records(vec![
            at_four_threads(),
            baseline(),
        ])
        .unwrap();
        let analysis = analyze(&dataset, SizeSelection::default()).unwrap();
        let threads: Vec<u32> = analysis.configs.iter().map(|c| c.thread_count).collect();
        assert_eq!(threads, vec![1, 4]);
        assert_eq!(analysis.records[0].thread_count(), 1);
    }

    #[test]
    fn test_analyze_empty_dataset() {
        let dataset = Dataset::from_records(vec![]).unwrap();
        let err = analyze(&dataset, SizeSelection::LargestAvailable).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySubset));
    }

    #[test]
    fn test_analyze_size_without_baseline() {
        let dataset = Dataset::from_records(vec![at_four_threads()]).unwrap();
        let err = analyze(&dataset, SizeSelection::Exact(1000)).unwrap_err();
        assert!(matches!(err, AnalysisError::BaselineNotFound { input_size: 1000 }));
    }

    #[test]
    fn test_analyze_unknown_exact_size_has_no_baseline() {
        let err = analyze(&two_size_dataset(), SizeSelection::Exact(42)).unwrap_err();
        assert!(matches!(err, AnalysisError::BaselineNotFound { input_size: 42 }));
    }
}
