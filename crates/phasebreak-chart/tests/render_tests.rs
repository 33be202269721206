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

//! Integration tests rendering real chart files into a temp directory.
//!
//! Only the SVG backend is exercised: bitmap output needs system fonts
//! for captions, which headless CI machines do not reliably carry.

use phasebreak_chart::{render_all, ChartConfig, ChartError, ChartFormat, ChartKind};
use phasebreak_core::{analyze, BreakdownSeries, SizeSelection};
use phasebreak_test::breakdown_dataset;
use std::fs;

fn sample_series() -> BreakdownSeries {
    let analysis = analyze(&breakdown_dataset(), SizeSelection::LargestAvailable).unwrap();
    BreakdownSeries::from_analysis(&analysis)
}

fn svg_config(out_dir: std::path::PathBuf) -> ChartConfig {
    ChartConfig {
        out_dir,
        formats: vec![ChartFormat::Svg],
        ..Default::default()
    }
}

#[test]
fn test_render_all_writes_every_chart() {
    let dir = tempfile::tempdir().unwrap();
    let series = sample_series();
    let paths = render_all(&series, &svg_config(dir.path().to_path_buf())).unwrap();

    assert_eq!(paths.len(), ChartKind::ALL.len());
    for path in &paths {
        let contents = fs::read_to_string(path).unwrap();
        assert!(!contents.is_empty(), "{} is empty", path.display());
        assert!(
            contents.contains("<svg"),
            "{} is not an SVG document",
            path.display()
        );
    }
}

#[test]
fn test_rendered_charts_carry_title_and_size() {
    let dir = tempfile::tempdir().unwrap();
    let series = sample_series();
    let paths = render_all(&series, &svg_config(dir.path().to_path_buf())).unwrap();

    let stacked = paths
        .iter()
        .find(|p| p.file_name().unwrap() == "breakdown_stacked.svg")
        .unwrap();
    let contents = fs::read_to_string(stacked).unwrap();
    assert!(contents.contains("1,000,000"));
}

#[test]
fn test_render_creates_missing_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let series = sample_series();
    render_all(&series, &svg_config(nested.clone())).unwrap();
    assert!(nested.join("breakdown_speedup.svg").exists());
}

#[test]
fn test_empty_series_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let empty = BreakdownSeries {
        input_size: 1000,
        thread_counts: vec![],
        phases: vec![],
    };
    let err = render_all(&empty, &svg_config(dir.path().to_path_buf())).unwrap_err();
    assert!(matches!(err, ChartError::EmptySeries));
}
