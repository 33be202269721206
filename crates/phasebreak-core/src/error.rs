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

//! Error types for dataset validation and metric derivation.

use crate::phase::Phase;
use std::fmt;
use thiserror::Error;

/// The quantity whose denominator was zero in a metric derivation.
///
/// Used by [`AnalysisError::DivisionByZero`] so that error messages always
/// name the exact term, never a bare "division by zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricTerm {
    /// The total elapsed time of a configuration.
    Total,
    /// The elapsed time of one phase.
    Phase(Phase),
}

impl fmt::Display for MetricTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricTerm::Total => f.write_str("total time"),
            MetricTerm::Phase(p) => write!(f, "phase '{}'", p),
        }
    }
}

/// Analysis error types.
///
/// All errors are fatal for the analysis request that raised them; there
/// is no retry or recovery state. A zero measured time is surfaced as
/// [`AnalysisError::DivisionByZero`] with the offending configuration and
/// term, never coerced to `0` or infinity.
///
/// # Examples
///
/// ```
/// use phasebreak_core::{AnalysisError, MetricTerm, Phase};
///
/// let err = AnalysisError::DivisionByZero {
///     input_size: 1_000_000,
///     thread_count: 4,
///     term: MetricTerm::Phase(Phase::ScanSamples),
/// };
/// assert_eq!(
///     err.to_string(),
///     "division by zero deriving phase 'ScanSamples' at n=1000000, threads=4"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No single-thread record exists for the requested input size.
    #[error("no single-thread baseline for input size {input_size}")]
    BaselineNotFound {
        /// Input size for which the baseline was requested.
        input_size: u64,
    },

    /// More than one single-thread record exists for the requested input size.
    #[error("ambiguous baseline for input size {input_size}: {count} single-thread records")]
    AmbiguousBaseline {
        /// Input size for which the baseline was requested.
        input_size: u64,
        /// Number of candidate baseline records found.
        count: usize,
    },

    /// A metric denominator measured exactly zero.
    #[error("division by zero deriving {term} at n={input_size}, threads={thread_count}")]
    DivisionByZero {
        /// Input size of the offending configuration.
        input_size: u64,
        /// Thread count of the offending configuration.
        thread_count: u32,
        /// The term whose denominator was zero.
        term: MetricTerm,
    },

    /// A selector or query was applied to an empty subset.
    #[error("empty subset: no configurations to select from")]
    EmptySubset,

    /// Two records share the same `(input_size, thread_count)` key.
    ///
    /// Duplicate keys are rejected at dataset construction rather than
    /// resolved last-wins, so a report can never be computed from
    /// silently discarded measurements.
    #[error("duplicate configuration n={input_size}, threads={thread_count} (rows {first_row} and {duplicate_row})")]
    DuplicateConfiguration {
        /// Input size of the duplicated key.
        input_size: u64,
        /// Thread count of the duplicated key.
        thread_count: u32,
        /// 1-based row of the first occurrence.
        first_row: usize,
        /// 1-based row of the duplicate.
        duplicate_row: usize,
    },

    /// `total_ms` disagrees with the sum of phase times beyond tolerance.
    #[error("total {total_ms} ms disagrees with phase sum {phase_sum_ms} ms at n={input_size}, threads={thread_count} (tolerance {tolerance_ms} ms)")]
    TotalMismatch {
        /// Input size of the offending record.
        input_size: u64,
        /// Thread count of the offending record.
        thread_count: u32,
        /// Reported total elapsed time.
        total_ms: f64,
        /// Sum of the per-phase elapsed times.
        phase_sum_ms: f64,
        /// Allowed drift in milliseconds.
        tolerance_ms: f64,
    },

    /// A record field violates its domain bound.
    #[error("invalid record n={input_size}, threads={thread_count}: {reason}")]
    InvalidRecord {
        /// Input size of the offending record.
        input_size: u64,
        /// Thread count of the offending record.
        thread_count: u32,
        /// Which bound was violated.
        reason: String,
    },
}

impl AnalysisError {
    /// Division-by-zero error for a configuration's total time.
    pub fn zero_total(input_size: u64, thread_count: u32) -> Self {
        Self::DivisionByZero {
            input_size,
            thread_count,
            term: MetricTerm::Total,
        }
    }

    /// Division-by-zero error for one phase of a configuration.
    pub fn zero_phase(input_size: u64, thread_count: u32, phase: Phase) -> Self {
        Self::DivisionByZero {
            input_size,
            thread_count,
            term: MetricTerm::Phase(phase),
        }
    }

    /// Invalid-record error with a bound description.
    pub fn invalid_record(input_size: u64, thread_count: u32, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            input_size,
            thread_count,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for `Result` with [`AnalysisError`].
pub type Result<T> = std::result::Result<T, AnalysisError>;
