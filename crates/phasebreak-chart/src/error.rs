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

//! Error types for chart rendering.

use plotters::drawing::DrawingAreaErrorKind;
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Chart rendering error types.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The output directory could not be created.
    #[error("cannot create chart directory '{path}': {message}")]
    OutputDir {
        /// The directory that was requested.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// The series holds no configurations to draw.
    #[error("nothing to draw: the series has no configurations")]
    EmptySeries,

    /// Error from the drawing backend.
    ///
    /// Carried as a message because each backend has its own error type.
    #[error("drawing failed: {0}")]
    Backend(String),
}

/// Convenience type alias for `Result` with [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    /// Create an output-directory error with path context.
    pub fn output_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputDir {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl<E: StdError + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Self::Backend(e.to_string())
    }
}
