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

//! Load measurement tables into typed datasets.

use crate::error::{LoadError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use phasebreak_core::{BenchmarkRecord, Dataset, Phase};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Default maximum number of data rows.
///
/// A measurement table holds a handful of configurations; the limit only
/// guards against loading an unrelated giant file by mistake.
pub const DEFAULT_MAX_ROWS: usize = 100_000;

/// Column name of the input-size field.
pub const COLUMN_N: &str = "n";

/// Column name of the thread-count field.
pub const COLUMN_THREADS: &str = "threads";

/// Column name of the total-time field.
pub const COLUMN_TOTAL: &str = "total_ms";

/// Configuration for table loading.
///
/// # Examples
///
/// ```
/// use phasebreak_csv::LoadConfig;
///
/// let config = LoadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
///
/// // Tab-separated input
/// let config = LoadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// # let _ = config;
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,
    /// Whether to trim surrounding whitespace from headers and fields
    /// (default: `true`).
    pub trim: bool,
    /// Maximum number of data rows (default: [`DEFAULT_MAX_ROWS`]).
    pub max_rows: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Resolved positions of the required columns in the header row.
struct ColumnIndex {
    n: usize,
    threads: usize,
    phases: [usize; Phase::COUNT],
    total: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        let mut phases = [0usize; Phase::COUNT];
        for phase in Phase::ALL {
            phases[phase.index()] = find(phase.column())?;
        }
        Ok(Self {
            n: find(COLUMN_N)?,
            threads: find(COLUMN_THREADS)?,
            phases,
            total: find(COLUMN_TOTAL)?,
        })
    }
}

fn parse_field<T: FromStr>(
    record: &StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<T> {
    let raw = record.get(idx).ok_or_else(|| LoadError::MalformedRow {
        row,
        column: column.to_string(),
        value: "<missing>".to_string(),
    })?;
    raw.parse::<T>().map_err(|_| LoadError::MalformedRow {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Load a measurement table from CSV text with default configuration.
///
/// The table must carry a header row naming `n`, `threads`, the five
/// `<phase>_ms` columns, and `total_ms`. Row order is preserved; the
/// resulting [`Dataset`] is validated (unique configuration keys, totals
/// consistent with phase sums).
///
/// # Errors
///
/// - [`LoadError::MissingColumn`] when the header lacks a required column.
/// - [`LoadError::MalformedRow`] when a field is absent or non-numeric;
///   the 1-based data row and column name are reported.
/// - [`LoadError::InvalidField`] when a value parses but violates its
///   domain bound (zero input size, zero threads, negative time).
/// - [`LoadError::Dataset`] when the rows do not form a valid dataset.
///
/// # Examples
///
/// ```
/// use phasebreak_csv::load_table;
///
/// let csv = "\
/// n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms
/// 1000,1,40.0,10.0,20.0,5.0,5.0,80.0
/// 1000,4,10.0,3.0,6.0,2.0,2.0,23.0
/// ";
/// let dataset = load_table(csv).unwrap();
/// assert_eq!(dataset.len(), 2);
/// ```
pub fn load_table(csv: &str) -> Result<Dataset> {
    load_table_with_config(csv, LoadConfig::default())
}

/// Load a measurement table from CSV text with custom configuration.
pub fn load_table_with_config(csv: &str, config: LoadConfig) -> Result<Dataset> {
    load_reader_with_config(csv.as_bytes(), config)
}

/// Load a measurement table from any reader with default configuration.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset> {
    load_reader_with_config(reader, LoadConfig::default())
}

/// Load a measurement table from any reader with custom configuration.
pub fn load_reader_with_config<R: Read>(reader: R, config: LoadConfig) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim { Trim::All } else { Trim::None })
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        if row > config.max_rows {
            return Err(LoadError::RowLimit {
                limit: config.max_rows,
            });
        }
        let record = result?;

        let n: u64 = parse_field(&record, columns.n, row, COLUMN_N)?;
        let threads: u32 = parse_field(&record, columns.threads, row, COLUMN_THREADS)?;
        let mut phase_ms = [0.0f64; Phase::COUNT];
        for phase in Phase::ALL {
            phase_ms[phase.index()] =
                parse_field(&record, columns.phases[phase.index()], row, phase.column())?;
        }
        let total_ms: f64 = parse_field(&record, columns.total, row, COLUMN_TOTAL)?;

        let benchmark =
            BenchmarkRecord::new(n, threads, phase_ms, total_ms).map_err(|e| {
                LoadError::InvalidField {
                    row,
                    message: e.to_string(),
                }
            })?;
        records.push(benchmark);
    }

    Ok(Dataset::from_records(records)?)
}

/// Load a measurement table from a file path with default configuration.
///
/// # Errors
///
/// [`LoadError::MissingSource`] when the file does not exist or cannot
/// be opened, plus every error [`load_table`] can raise.
pub fn load_path(path: impl AsRef<Path>) -> Result<Dataset> {
    load_path_with_config(path, LoadConfig::default())
}

/// Load a measurement table from a file path with custom configuration.
pub fn load_path_with_config(path: impl AsRef<Path>, config: LoadConfig) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::missing_source(path, e))?;
    load_reader_with_config(BufReader::new(file), config)
}
