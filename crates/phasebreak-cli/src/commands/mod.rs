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

//! CLI command implementations.

mod chart;
mod report;

pub use chart::chart;
pub use report::report;

use crate::error::{CliError, Result};
use phasebreak_core::{analyze, BreakdownAnalysis, SizeSelection};
use phasebreak_csv::load_path;
use std::path::Path;

/// Load a table and run the analysis both subcommands share.
///
/// Rejects `--size 0` up front: no record can carry a zero input size,
/// so the table load would be wasted work.
fn analyze_input(input: &Path, size: Option<u64>) -> Result<BreakdownAnalysis> {
    if size == Some(0) {
        return Err(CliError::invalid_input("--size must be a positive input size"));
    }
    let dataset = load_path(input)?;
    let selection = match size {
        Some(n) => SizeSelection::Exact(n),
        None => SizeSelection::LargestAvailable,
    };
    Ok(analyze(&dataset, selection)?)
}
