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

//! Report command - prints the breakdown analysis summary.

use super::analyze_input;
use crate::error::Result;
use phasebreak_core::Report;
use std::path::Path;

/// Analyze a measurement table and print the summary report.
///
/// With `json` set, the structured report is emitted as pretty-printed
/// JSON on stdout; otherwise the plain-text summary is printed.
///
/// # Errors
///
/// Returns `Err` if the table cannot be loaded, the requested size has
/// no single-thread baseline, or any metric denominator is zero.
pub fn report(input: &Path, size: Option<u64>, json: bool) -> Result<()> {
    let analysis = analyze_input(input, size)?;
    let report = Report::from_analysis(&analysis)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
