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

//! phasebreak command-line interface.

use clap::Parser;
use phasebreak_cli::cli::Commands;
use std::process::ExitCode;

/// phasebreak - parallel phase breakdown analyzer
///
/// Analyzes per-phase benchmark timings from a CSV measurement table,
/// reporting speedup, efficiency, and bottleneck findings, and rendering
/// breakdown charts.
///
/// # Examples
///
/// ```bash
/// # Print the analysis summary for the largest measured size
/// phasebreak report results.csv
///
/// # Analyze a specific input size as JSON
/// phasebreak report results.csv --size 100000 --json
///
/// # Render the chart set as SVG only
/// phasebreak chart results.csv --out-dir charts --format svg
/// ```
#[derive(Parser)]
#[command(name = "phasebreak")]
#[command(author, version, about = "phasebreak - parallel phase breakdown analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
