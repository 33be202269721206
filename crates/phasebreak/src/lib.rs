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

//! # Phasebreak - Parallel Phase Breakdown Analyzer
//!
//! Phasebreak takes per-phase benchmark timings measured at several
//! thread counts and derives where the time goes, how each phase scales,
//! and which configuration wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use phasebreak::{analyze, BenchmarkRecord, Dataset, Report, SizeSelection};
//!
//! let dataset = Dataset::from_records(vec![
//!     BenchmarkRecord::new(1_000_000, 1, [40.0, 10.0, 20.0, 5.0, 5.0], 80.0).unwrap(),
//!     BenchmarkRecord::new(1_000_000, 4, [10.0, 3.0, 6.0, 2.0, 2.0], 23.0).unwrap(),
//! ])
//! .unwrap();
//!
//! let analysis = analyze(&dataset, SizeSelection::LargestAvailable).unwrap();
//! let report = Report::from_analysis(&analysis).unwrap();
//!
//! assert_eq!(report.best.thread_count, 4);
//! println!("{}", report.render_text());
//! ```
//!
//! ## Modules
//!
//! - Core analysis types re-exported at the crate root
//! - [`csv`]: measurement table loading (feature = "csv")
//! - [`chart`](mod@chart): chart rendering (feature = "chart")

// Re-export core types
pub use phasebreak_core::{
    // Analysis entry points
    analyze,
    best_configuration,
    bottleneck_phase,
    percentage,
    phase_efficiency,
    phase_speedup,
    resolve_baseline,
    sorted_by_threads,
    total_speedup,
    // Errors
    AnalysisError,
    // Data model
    BenchmarkRecord,
    // Derived structures
    BreakdownAnalysis,
    BreakdownSeries,
    ConfigKey,
    ConfigMetrics,
    Dataset,
    MetricTerm,
    Phase,
    PhaseCurve,
    PhaseMetrics,
    Report,
    Result,
    SizeSelection,
    UnknownPhase,
};

// Re-export the loader
#[cfg(feature = "csv")]
pub mod csv {
    //! Measurement table loading
    pub use phasebreak_csv::{
        load_path, load_path_with_config, load_reader, load_reader_with_config, load_table,
        load_table_with_config, LoadConfig, LoadError,
    };
}

// Re-export the chart renderers
#[cfg(feature = "chart")]
pub mod chart {
    //! Chart rendering
    pub use phasebreak_chart::{
        chart_path, render_all, render_chart, ChartConfig, ChartError, ChartFormat, ChartKind,
    };
}
