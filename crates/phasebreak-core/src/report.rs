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

//! The structured analysis summary.
//!
//! [`Report`] is the contract handed to report consumers: the text
//! renderer here, the chart pipeline, or downstream comparison tooling
//! via the `serde` feature. Rounding happens only in the text renderer;
//! the structured values are unrounded.

use crate::error::Result;
use crate::metrics::BreakdownAnalysis;
use crate::phase::Phase;
use crate::record::BenchmarkRecord;
use crate::select::{best_configuration, bottleneck_phase};
use crate::series::format_count;
use std::fmt;

/// One phase's share of the baseline total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseShare {
    /// The phase.
    pub phase: Phase,
    /// Elapsed milliseconds at the baseline.
    pub elapsed_ms: f64,
    /// Share of the baseline total, in percent.
    pub percent: f64,
}

/// The baseline breakdown: where a single thread spends its time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineSummary {
    /// Baseline total elapsed time.
    pub total_ms: f64,
    /// Per-phase shares in canonical order.
    pub phases: Vec<PhaseShare>,
}

/// Per-phase and total speedups of one configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedupRow {
    /// Worker thread count.
    pub thread_count: u32,
    /// Phase speedups in canonical order.
    pub phase_speedups: Vec<f64>,
    /// Total-time speedup.
    pub total_speedup: f64,
}

/// The identified bottleneck and how its share evolves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BottleneckFinding {
    /// The phase consuming the largest share of baseline time.
    pub phase: Phase,
    /// Its share of total time at the baseline, in percent.
    pub baseline_share_percent: f64,
    /// Its share of total time at the best configuration, in percent.
    pub best_share_percent: f64,
}

/// The configuration that minimizes total time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestConfiguration {
    /// Worker thread count of the winning configuration.
    pub thread_count: u32,
    /// Its total elapsed time.
    pub total_ms: f64,
    /// The baseline total it is measured against.
    pub baseline_total_ms: f64,
    /// Total-time speedup over the baseline.
    pub total_speedup: f64,
}

/// Speedup and efficiency of one phase at the best configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseScaling {
    /// The phase.
    pub phase: Phase,
    /// Speedup at the best configuration.
    pub speedup: f64,
    /// Parallel efficiency at the best configuration, in percent.
    pub efficiency_percent: f64,
}

/// The structured analysis summary for one input size.
///
/// # Examples
///
/// ```
/// use phasebreak_core::{analyze, BenchmarkRecord, Dataset, Phase, Report, SizeSelection};
///
/// let dataset = Dataset::from_records(vec![
///     BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap(),
///     BenchmarkRecord::new(1000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap(),
/// ])
/// .unwrap();
/// let analysis = analyze(&dataset, SizeSelection::default()).unwrap();
/// let report = Report::from_analysis(&analysis).unwrap();
///
/// assert_eq!(report.bottleneck.phase, Phase::BuildFurthest);
/// assert_eq!(report.best.thread_count, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// The analyzed input size.
    pub input_size: u64,
    /// Baseline breakdown.
    pub baseline: BaselineSummary,
    /// Speedup table, one row per configuration ascending by threads.
    pub speedups: Vec<SpeedupRow>,
    /// Bottleneck finding.
    pub bottleneck: BottleneckFinding,
    /// Best configuration.
    pub best: BestConfiguration,
    /// Per-phase scaling at the best configuration, in canonical order.
    pub scaling: Vec<PhaseScaling>,
}

impl Report {
    /// Assemble the summary from a completed analysis.
    ///
    /// # Errors
    ///
    /// [`crate::AnalysisError::EmptySubset`] when the analysis holds no
    /// configurations (cannot happen for an analysis produced by
    /// [`crate::analyze`], which always contains at least the baseline).
    pub fn from_analysis(analysis: &BreakdownAnalysis) -> Result<Self> {
        let refs: Vec<&BenchmarkRecord> = analysis.records.iter().collect();
        let best_record = best_configuration(&refs)?;
        let bottleneck = bottleneck_phase(&analysis.baseline);

        // The analysis table is keyed by thread count, so the derived
        // shares for both baseline and best configuration are already
        // computed.
        let baseline_metrics = analysis
            .configs
            .first()
            .ok_or(crate::error::AnalysisError::EmptySubset)?;
        let best_metrics = analysis
            .config(best_record.thread_count())
            .ok_or(crate::error::AnalysisError::EmptySubset)?;

        let baseline = BaselineSummary {
            total_ms: analysis.baseline.total_ms(),
            phases: baseline_metrics
                .phases
                .iter()
                .map(|m| PhaseShare {
                    phase: m.phase,
                    elapsed_ms: m.elapsed_ms,
                    percent: m.percentage,
                })
                .collect(),
        };

        let speedups = analysis
            .configs
            .iter()
            .map(|c| SpeedupRow {
                thread_count: c.thread_count,
                phase_speedups: c.phases.iter().map(|m| m.speedup).collect(),
                total_speedup: c.total_speedup,
            })
            .collect();

        Ok(Self {
            input_size: analysis.input_size,
            baseline,
            speedups,
            bottleneck: BottleneckFinding {
                phase: bottleneck,
                baseline_share_percent: baseline_metrics.phases[bottleneck.index()].percentage,
                best_share_percent: best_metrics.phases[bottleneck.index()].percentage,
            },
            best: BestConfiguration {
                thread_count: best_metrics.thread_count,
                total_ms: best_metrics.total_ms,
                baseline_total_ms: analysis.baseline.total_ms(),
                total_speedup: best_metrics.total_speedup,
            },
            scaling: best_metrics
                .phases
                .iter()
                .map(|m| PhaseScaling {
                    phase: m.phase,
                    speedup: m.speedup,
                    efficiency_percent: m.efficiency,
                })
                .collect(),
        })
    }

    /// Render the human-readable text summary.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "BREAKDOWN ANALYSIS SUMMARY (n={})",
            format_count(self.input_size)
        )?;
        writeln!(f, "{rule}")?;

        writeln!(f, "\nBaseline (1 thread):")?;
        writeln!(f, "  Total: {:.2} ms", self.baseline.total_ms)?;
        for share in &self.baseline.phases {
            writeln!(
                f,
                "    {:<17} {:>8.2} ms ({:>5.1}%)",
                format!("{}:", share.phase),
                share.elapsed_ms,
                share.percent
            )?;
        }

        writeln!(f, "\nSpeedup vs 1 thread:")?;
        write!(f, "  {:<8}", "Threads")?;
        for phase in Phase::ALL {
            write!(f, " {:>16}", phase.label())?;
        }
        writeln!(f, " {:>8}", "Total")?;
        for row in &self.speedups {
            write!(f, "  {:<8}", row.thread_count)?;
            for speedup in &row.phase_speedups {
                write!(f, " {:>15.2}x", speedup)?;
            }
            writeln!(f, " {:>7.2}x", row.total_speedup)?;
        }

        writeln!(f, "\nKey findings:")?;
        writeln!(
            f,
            "  1. Best configuration: {} threads",
            self.best.thread_count
        )?;
        writeln!(f, "     - Total speedup: {:.2}x", self.best.total_speedup)?;
        writeln!(
            f,
            "     - Time: {:.2} ms (down from {:.2} ms)",
            self.best.total_ms, self.best.baseline_total_ms
        )?;
        writeln!(f, "  2. Primary bottleneck: {}", self.bottleneck.phase)?;
        writeln!(
            f,
            "     - {:.1}% of total time at 1 thread",
            self.bottleneck.baseline_share_percent
        )?;
        writeln!(
            f,
            "     - {:.1}% of total time at {} threads",
            self.bottleneck.best_share_percent, self.best.thread_count
        )?;
        writeln!(
            f,
            "  3. Phase scaling (1 -> {} threads):",
            self.best.thread_count
        )?;
        for scaling in &self.scaling {
            writeln!(
                f,
                "     - {:<17} {:>5.2}x speedup ({:>5.1}% efficiency)",
                format!("{}:", scaling.phase),
                scaling.speedup,
                scaling.efficiency_percent
            )?;
        }
        Ok(())
    }
}
