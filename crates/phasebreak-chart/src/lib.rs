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

//! Chart rendering for phasebreak analyses.
//!
//! Takes the derived [`BreakdownSeries`](phasebreak_core::BreakdownSeries)
//! from the analysis core and renders four chart types (stacked times,
//! per-phase scaling, percentage shares, speedup curves) as PNG and SVG
//! files via plotters.

mod error;
mod render;

pub use error::{ChartError, Result};
pub use render::{
    chart_path, render_all, render_chart, ChartConfig, ChartFormat, ChartKind,
};
