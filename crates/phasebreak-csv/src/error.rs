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

//! Error types for dataset loading.

use phasebreak_core::AnalysisError;
use std::path::PathBuf;
use thiserror::Error;

/// Dataset loading error types.
///
/// The loader never skips a bad row and continues: the first failure
/// aborts the load, so an analysis can never silently run over an
/// incomplete table.
///
/// # Examples
///
/// ```
/// use phasebreak_csv::LoadError;
///
/// let err = LoadError::MalformedRow {
///     row: 3,
///     column: "total_ms".to_string(),
///     value: "abc".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "malformed row 3: column 'total_ms' is not numeric, got 'abc'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input table does not exist or cannot be read.
    #[error("cannot read measurement table '{path}': {message}")]
    MissingSource {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// The header row lacks a required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A data row is missing a field or carries a non-numeric value.
    ///
    /// The row index is 1-based over data rows, matching how people
    /// count rows in the file below the header.
    #[error("malformed row {row}: column '{column}' is not numeric, got '{value}'")]
    MalformedRow {
        /// 1-based data row index.
        row: usize,
        /// Column whose field failed to parse.
        column: String,
        /// The offending field text.
        value: String,
    },

    /// A field parsed but violates its domain bound.
    #[error("invalid row {row}: {message}")]
    InvalidField {
        /// 1-based data row index.
        row: usize,
        /// Which bound was violated.
        message: String,
    },

    /// The table exceeds the configured row limit.
    #[error("row limit exceeded: table has more than {limit} rows")]
    RowLimit {
        /// Maximum allowed data rows.
        limit: usize,
    },

    /// Error from the underlying CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The loaded records do not form a valid dataset
    /// (duplicate configurations, drifting totals).
    #[error(transparent)]
    Dataset(#[from] AnalysisError),
}

/// Convenience type alias for `Result` with [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// Create a missing-source error with path context.
    pub fn missing_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MissingSource {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
