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

//! Bottleneck and best-configuration selection.

use crate::error::{AnalysisError, Result};
use crate::phase::Phase;
use crate::record::BenchmarkRecord;

/// The phase consuming the largest share of the baseline's time.
///
/// Ties resolve to the phase that comes first in canonical order, so the
/// result is deterministic for any input.
///
/// # Examples
///
/// ```
/// use phasebreak_core::{bottleneck_phase, BenchmarkRecord, Phase};
///
/// let baseline = BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap();
/// assert_eq!(bottleneck_phase(&baseline), Phase::BuildFurthest);
/// ```
pub fn bottleneck_phase(baseline: &BenchmarkRecord) -> Phase {
    let mut best = Phase::ALL[0];
    for phase in Phase::ALL {
        // Strict comparison keeps the earliest phase on ties.
        if baseline.phase_ms(phase) > baseline.phase_ms(best) {
            best = phase;
        }
    }
    best
}

/// The record with the smallest total time in `subset`.
///
/// Equivalent to maximizing total speedup, since the baseline total is
/// constant across a same-size subset. Ties resolve to the smaller
/// thread count: equal speedup with fewer resources wins. No
/// monotonicity is assumed; adversarial data that regresses at higher
/// thread counts still yields the true optimum.
///
/// # Errors
///
/// [`AnalysisError::EmptySubset`] when `subset` is empty.
pub fn best_configuration<'a>(subset: &[&'a BenchmarkRecord]) -> Result<&'a BenchmarkRecord> {
    let mut records = subset.iter().copied();
    let mut best = records.next().ok_or(AnalysisError::EmptySubset)?;
    for record in records {
        if record.total_ms() < best.total_ms()
            || (record.total_ms() == best.total_ms() && record.thread_count() < best.thread_count())
        {
            best = record;
        }
    }
    Ok(best)
}
