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

//! The fixed set of measured algorithm phases.

use std::fmt;
use std::str::FromStr;

/// One named stage of the measured algorithm.
///
/// The variant order is the canonical phase ordering used for tables,
/// chart series, and tie-breaking; it matches the column order of the
/// input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Furthest-point structure construction.
    BuildFurthest,
    /// Sampling of interval endpoints.
    SampleIntervals,
    /// Connection table construction.
    BuildConnections,
    /// Scan over sampled positions.
    ScanSamples,
    /// Scan over non-sample positions.
    ScanNonsample,
}

impl Phase {
    /// Number of phases.
    pub const COUNT: usize = 5;

    /// All phases in canonical order.
    pub const ALL: [Phase; Phase::COUNT] = [
        Phase::BuildFurthest,
        Phase::SampleIntervals,
        Phase::BuildConnections,
        Phase::ScanSamples,
        Phase::ScanNonsample,
    ];

    /// Position of this phase in the canonical ordering.
    pub fn index(self) -> usize {
        match self {
            Phase::BuildFurthest => 0,
            Phase::SampleIntervals => 1,
            Phase::BuildConnections => 2,
            Phase::ScanSamples => 3,
            Phase::ScanNonsample => 4,
        }
    }

    /// Column name of this phase in the input table.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasebreak_core::Phase;
    ///
    /// assert_eq!(Phase::BuildFurthest.column(), "build_furthest_ms");
    /// assert_eq!(Phase::ScanNonsample.column(), "scan_nonsample_ms");
    /// ```
    pub fn column(self) -> &'static str {
        match self {
            Phase::BuildFurthest => "build_furthest_ms",
            Phase::SampleIntervals => "sample_intervals_ms",
            Phase::BuildConnections => "build_connections_ms",
            Phase::ScanSamples => "scan_samples_ms",
            Phase::ScanNonsample => "scan_nonsample_ms",
        }
    }

    /// Human-readable phase label.
    pub fn label(self) -> &'static str {
        match self {
            Phase::BuildFurthest => "BuildFurthest",
            Phase::SampleIntervals => "SampleIntervals",
            Phase::BuildConnections => "BuildConnections",
            Phase::ScanSamples => "ScanSamples",
            Phase::ScanNonsample => "ScanNonsample",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a phase name does not match any known phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPhase(pub String);

impl fmt::Display for UnknownPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown phase '{}'", self.0)
    }
}

impl std::error::Error for UnknownPhase {}

impl FromStr for Phase {
    type Err = UnknownPhase;

    /// Parse a phase from its label or its input-table column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .iter()
            .copied()
            .find(|p| s == p.label() || s == p.column())
            .ok_or_else(|| UnknownPhase(s.to_string()))
    }
}
