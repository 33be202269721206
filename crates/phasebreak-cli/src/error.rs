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

//! Structured error types for the phasebreak CLI.

use phasebreak_chart::ChartError;
use phasebreak_core::AnalysisError;
use phasebreak_csv::LoadError;
use thiserror::Error;

/// The main error type for CLI command execution.
///
/// Library errors pass through transparently so the user sees the
/// original diagnostic, not a CLI paraphrase of it.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the measurement table failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Deriving metrics or the report failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Rendering charts failed.
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Serializing the report as JSON failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument combination supplied by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for `Result` with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
