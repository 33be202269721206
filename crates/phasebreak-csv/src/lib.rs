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

//! CSV loader for phasebreak measurement tables.
//!
//! A measurement table is a CSV file with one row per `(n, threads)`
//! configuration and a header naming `n`, `threads`, the five
//! `<phase>_ms` columns, and `total_ms`. Column order does not matter;
//! rows are validated on load and the first bad row aborts.
//!
//! # Examples
//!
//! ```
//! use phasebreak_csv::load_table;
//!
//! let csv = "\
//! n,threads,build_furthest_ms,sample_intervals_ms,build_connections_ms,scan_samples_ms,scan_nonsample_ms,total_ms
//! 1000,1,40.0,10.0,20.0,5.0,5.0,80.0
//! ";
//! let dataset = load_table(csv).unwrap();
//! assert_eq!(dataset.len(), 1);
//! ```

mod error;
mod load;

pub use error::{LoadError, Result};
pub use load::{
    load_path, load_path_with_config, load_reader, load_reader_with_config, load_table,
    load_table_with_config, LoadConfig, COLUMN_N, COLUMN_THREADS, COLUMN_TOTAL, DEFAULT_MAX_ROWS,
};
