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

//! Core data model and analysis engine for parallel phase breakdowns.
//!
//! Given per-run measurements of a five-phase parallel algorithm (input
//! size, thread count, per-phase elapsed time, total elapsed time), this
//! crate derives the comparative scaling metrics: percentage-of-total,
//! speedup versus the single-thread baseline, and parallel efficiency.
//! It identifies the bottleneck phase and the best-performing
//! configuration and assembles a structured [`Report`].
//!
//! The pipeline is a strict synchronous sequence over an immutable
//! [`Dataset`]:
//!
//! ```text
//! Dataset -> query layer -> metrics engine -> selectors -> Report
//!                              \-> BreakdownSeries -> chart renderer
//! ```
//!
//! Loading the dataset from a delimited table lives in `phasebreak-csv`;
//! chart rendering lives in `phasebreak-chart` and only ever sees the
//! derived [`BreakdownSeries`], never raw records.
//!
//! # Examples
//!
//! ```
//! use phasebreak_core::{analyze, BenchmarkRecord, Dataset, Report, SizeSelection};
//!
//! let dataset = Dataset::from_records(vec![
//!     BenchmarkRecord::new(1000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap(),
//!     BenchmarkRecord::new(1000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap(),
//! ])
//! .unwrap();
//!
//! let analysis = analyze(&dataset, SizeSelection::LargestAvailable).unwrap();
//! let report = Report::from_analysis(&analysis).unwrap();
//! println!("{}", report.render_text());
//! ```

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod phase;
pub mod record;
pub mod report;
pub mod select;
pub mod series;

pub use dataset::{sorted_by_threads, Dataset, TOTAL_DRIFT_ABS_MS, TOTAL_DRIFT_REL};
pub use error::{AnalysisError, MetricTerm, Result};
pub use metrics::{
    analyze, percentage, phase_efficiency, phase_speedup, resolve_baseline, total_speedup,
    BreakdownAnalysis, ConfigMetrics, PhaseMetrics, SizeSelection,
};
pub use phase::{Phase, UnknownPhase};
pub use record::{BenchmarkRecord, ConfigKey};
pub use report::{
    BaselineSummary, BestConfiguration, BottleneckFinding, PhaseScaling, PhaseShare, Report,
    SpeedupRow,
};
pub use select::{best_configuration, bottleneck_phase};
pub use series::{BreakdownSeries, PhaseCurve};
