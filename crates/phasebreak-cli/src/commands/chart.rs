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

//! Chart command - renders the breakdown chart set.

use super::analyze_input;
use crate::error::Result;
use colored::Colorize;
use phasebreak_chart::{render_all, ChartConfig, ChartFormat};
use phasebreak_core::BreakdownSeries;
use std::path::{Path, PathBuf};

/// Analyze a measurement table and render its chart set.
///
/// Renders every chart kind once per requested format into `out_dir`,
/// creating the directory if needed. An empty `formats` list means
/// both PNG and SVG.
///
/// # Errors
///
/// Returns `Err` if the table cannot be loaded, the analysis fails, or
/// any chart cannot be written.
pub fn chart(
    input: &Path,
    size: Option<u64>,
    out_dir: PathBuf,
    formats: Vec<ChartFormat>,
) -> Result<()> {
    let analysis = analyze_input(input, size)?;
    let series = BreakdownSeries::from_analysis(&analysis);

    let config = ChartConfig {
        out_dir,
        formats: if formats.is_empty() {
            ChartConfig::default().formats
        } else {
            formats
        },
        ..Default::default()
    };

    let paths = render_all(&series, &config)?;
    println!(
        "{} {} charts {}",
        "✓".green().bold(),
        paths.len(),
        series.title_suffix()
    );
    for path in paths {
        println!("  {}", path.display());
    }
    Ok(())
}
