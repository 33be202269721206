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

//! Derived numeric series for chart renderers.
//!
//! A renderer receives only already-derived series and labels, never raw
//! records; this module is the boundary between the analysis core and
//! any drawing backend.

use crate::metrics::BreakdownAnalysis;
use crate::phase::Phase;

/// Derived curves for one phase across all thread counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseCurve {
    /// The phase this curve describes.
    pub phase: Phase,
    /// Elapsed milliseconds per configuration.
    pub elapsed_ms: Vec<f64>,
    /// Percentage of total time per configuration.
    pub percent: Vec<f64>,
    /// Speedup vs the baseline per configuration.
    pub speedup: Vec<f64>,
}

/// Everything a chart renderer needs for one analyzed input size.
///
/// Each curve vector is parallel to `thread_counts`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakdownSeries {
    /// The analyzed input size, for titles.
    pub input_size: u64,
    /// Thread counts in ascending order (the x axis).
    pub thread_counts: Vec<u32>,
    /// One curve set per phase, in canonical phase order.
    pub phases: Vec<PhaseCurve>,
}

impl BreakdownSeries {
    /// Extract chart series from a completed analysis.
    pub fn from_analysis(analysis: &BreakdownAnalysis) -> Self {
        let thread_counts: Vec<u32> =
            analysis.configs.iter().map(|c| c.thread_count).collect();
        let phases = Phase::ALL
            .iter()
            .map(|&phase| PhaseCurve {
                phase,
                elapsed_ms: analysis
                    .configs
                    .iter()
                    .map(|c| c.phases[phase.index()].elapsed_ms)
                    .collect(),
                percent: analysis
                    .configs
                    .iter()
                    .map(|c| c.phases[phase.index()].percentage)
                    .collect(),
                speedup: analysis
                    .configs
                    .iter()
                    .map(|c| c.phases[phase.index()].speedup)
                    .collect(),
            })
            .collect();
        Self {
            input_size: analysis.input_size,
            thread_counts,
            phases,
        }
    }

    /// Title suffix naming the analyzed size, e.g. `(n=1,000,000)`.
    pub fn title_suffix(&self) -> String {
        format!("(n={})", format_count(self.input_size))
    }

    /// Number of configurations on the x axis.
    pub fn config_count(&self) -> usize {
        self.thread_counts.len()
    }
}

/// Format an integer with thousands separators for titles and reports.
///
/// # Examples
///
/// ```
/// use phasebreak_core::series::format_count;
///
/// assert_eq!(format_count(1_000_000), "1,000,000");
/// assert_eq!(format_count(950), "950");
/// ```
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
