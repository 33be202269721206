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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::Result;
use clap::{Subcommand, ValueEnum};
use phasebreak_chart::ChartFormat;
use std::path::PathBuf;

/// Output format selector for the `chart` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Raster output.
    Png,
    /// Vector output.
    Svg,
}

impl From<FormatArg> for ChartFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ChartFormat::Png,
            FormatArg::Svg => ChartFormat::Svg,
        }
    }
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use phasebreak_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Print the breakdown analysis summary for a measurement table
    Report {
        /// Path to the measurement CSV
        input: PathBuf,

        /// Analyze this input size instead of the largest one
        #[arg(long)]
        size: Option<u64>,

        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render breakdown charts for a measurement table
    Chart {
        /// Path to the measurement CSV
        input: PathBuf,

        /// Analyze this input size instead of the largest one
        #[arg(long)]
        size: Option<u64>,

        /// Directory the chart files are written into
        #[arg(long, default_value = "charts")]
        out_dir: PathBuf,

        /// Image formats to emit (repeatable; default: png and svg)
        #[arg(long = "format", value_enum)]
        formats: Vec<FormatArg>,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    ///
    /// Returns `Err` when loading, analysis, rendering, or output fails;
    /// the message is printed by `main` and turned into a failure exit
    /// code.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Report { input, size, json } => commands::report(&input, size, json),
            Commands::Chart {
                input,
                size,
                out_dir,
                formats,
            } => commands::chart(
                &input,
                size,
                out_dir,
                formats.into_iter().map(Into::into).collect(),
            ),
        }
    }
}
