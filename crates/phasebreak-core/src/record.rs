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

//! Typed benchmark records.

use crate::error::{AnalysisError, Result};
use crate::phase::Phase;

/// Identity of one measured configuration within a dataset.
///
/// At most one [`BenchmarkRecord`] may carry a given key; duplicates are
/// rejected when the dataset is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigKey {
    /// Problem size N.
    pub input_size: u64,
    /// Number of worker threads.
    pub thread_count: u32,
}

/// One measured benchmark run.
///
/// Fields are validated once at construction and immutable afterwards.
/// All arithmetic on records happens in the metrics engine; a record is
/// pure data.
///
/// # Examples
///
/// ```
/// use phasebreak_core::{BenchmarkRecord, Phase};
///
/// let r = BenchmarkRecord::new(1_000_000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap();
/// assert_eq!(r.thread_count(), 4);
/// assert_eq!(r.phase_ms(Phase::BuildFurthest), 10.0);
/// assert_eq!(r.phase_sum(), 23.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRecord"))]
pub struct BenchmarkRecord {
    input_size: u64,
    thread_count: u32,
    phase_ms: [f64; Phase::COUNT],
    total_ms: f64,
}

/// Unvalidated mirror of [`BenchmarkRecord`].
///
/// Deserialization lands here first and is funneled through
/// [`BenchmarkRecord::new`], so serialized data cannot bypass the
/// construction bounds.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRecord {
    input_size: u64,
    thread_count: u32,
    phase_ms: [f64; Phase::COUNT],
    total_ms: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRecord> for BenchmarkRecord {
    type Error = AnalysisError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        Self::new(raw.input_size, raw.thread_count, raw.phase_ms, raw.total_ms)
    }
}

impl BenchmarkRecord {
    /// Create a validated record.
    ///
    /// `phase_ms` is in canonical phase order (see [`Phase::ALL`]).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRecord`] when `input_size` is zero,
    /// `thread_count` is zero, or any elapsed time is negative or
    /// non-finite.
    pub fn new(
        input_size: u64,
        thread_count: u32,
        phase_ms: [f64; Phase::COUNT],
        total_ms: f64,
    ) -> Result<Self> {
        if input_size == 0 {
            return Err(AnalysisError::invalid_record(
                input_size,
                thread_count,
                "input_size must be positive",
            ));
        }
        if thread_count == 0 {
            return Err(AnalysisError::invalid_record(
                input_size,
                thread_count,
                "thread_count must be at least 1",
            ));
        }
        for phase in Phase::ALL {
            let ms = phase_ms[phase.index()];
            if !ms.is_finite() || ms < 0.0 {
                return Err(AnalysisError::invalid_record(
                    input_size,
                    thread_count,
                    format!("{} must be a non-negative finite time, got {ms}", phase.column()),
                ));
            }
        }
        if !total_ms.is_finite() || total_ms < 0.0 {
            return Err(AnalysisError::invalid_record(
                input_size,
                thread_count,
                format!("total_ms must be a non-negative finite time, got {total_ms}"),
            ));
        }
        Ok(Self {
            input_size,
            thread_count,
            phase_ms,
            total_ms,
        })
    }

    /// Problem size N of this run.
    pub fn input_size(&self) -> u64 {
        self.input_size
    }

    /// Worker thread count of this run.
    pub fn thread_count(&self) -> u32 {
        self.thread_count
    }

    /// Total elapsed milliseconds of this run.
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    /// Elapsed milliseconds of one phase.
    pub fn phase_ms(&self, phase: Phase) -> f64 {
        self.phase_ms[phase.index()]
    }

    /// Sum of the per-phase elapsed times.
    ///
    /// Should agree with [`total_ms`](Self::total_ms) within measurement
    /// noise; the dataset constructor enforces the tolerance.
    pub fn phase_sum(&self) -> f64 {
        self.phase_ms.iter().sum()
    }

    /// Configuration identity of this record.
    pub fn key(&self) -> ConfigKey {
        ConfigKey {
            input_size: self.input_size,
            thread_count: self.thread_count,
        }
    }

    /// Whether this is a single-thread run, usable as a baseline.
    pub fn is_baseline(&self) -> bool {
        self.thread_count == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(threads: u32) -> BenchmarkRecord {
        BenchmarkRecord::new(1000, threads, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap()
    }

    #[test]
    fn test_accessors() {
        let r = record(1);
        assert_eq!(r.input_size(), 1000);
        assert_eq!(r.thread_count(), 1);
        assert_eq!(r.total_ms(), 80.0);
        assert_eq!(r.phase_ms(Phase::SampleIntervals), 10.0);
        assert!(r.is_baseline());
        assert!(!record(2).is_baseline());
    }

    #[test]
    fn test_phase_sum() {
        assert_eq!(record(1).phase_sum(), 80.0);
    }

    #[test]
    fn test_key_equality() {
        assert_eq!(record(4).key(), ConfigKey { input_size: 1000, thread_count: 4 });
        assert_ne!(record(4).key(), record(2).key());
    }

    #[test]
    fn test_rejects_zero_input_size() {
        let err = BenchmarkRecord::new(0, 1, [0.0; 5], 0.0).unwrap_err();
        assert!(err.to_string().contains("input_size"));
    }

    #[test]
    fn test_rejects_zero_thread_count() {
        let err = BenchmarkRecord::new(1000, 0, [0.0; 5], 0.0).unwrap_err();
        assert!(err.to_string().contains("thread_count"));
    }

    #[test]
    fn test_rejects_negative_phase_time() {
        let err = BenchmarkRecord::new(1000, 1, [1.0, -0.5, 1.0, 1.0, 1.0], 3.5).unwrap_err();
        assert!(err.to_string().contains("sample_intervals_ms"));
    }

    #[test]
    fn test_rejects_non_finite_total() {
        let err = BenchmarkRecord::new(1000, 1, [1.0; 5], f64::NAN).unwrap_err();
        assert!(err.to_string().contains("total_ms"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialization_rejects_zero_thread_count() {
        let json = r#"{"input_size":1000,"thread_count":0,"phase_ms":[1.0,1.0,1.0,1.0,1.0],"total_ms":5.0}"#;
        let err = serde_json::from_str::<BenchmarkRecord>(json).unwrap_err();
        assert!(err.to_string().contains("thread_count"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialization_rejects_negative_times() {
        let json = r#"{"input_size":1000,"thread_count":4,"phase_ms":[-5.0,1.0,1.0,1.0,1.0],"total_ms":-1.0}"#;
        assert!(serde_json::from_str::<BenchmarkRecord>(json).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let r = record(4);
        let json = serde_json::to_string(&r).unwrap();
        let back: BenchmarkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_zero_times_are_constructible() {
        // A zero measurement is valid data; it only fails later when used
        // as a denominator.
        let r = BenchmarkRecord::new(1000, 4, [0.0; 5], 0.0).unwrap();
        assert_eq!(r.total_ms(), 0.0);
    }
}
