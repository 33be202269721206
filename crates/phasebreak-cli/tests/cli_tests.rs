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

//! End-to-end tests running the `phasebreak` binary.

use assert_cmd::Command;
use phasebreak_test::{malformed_csv_samples, CSV_WITHOUT_BASELINE, SAMPLE_CSV};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_table(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("results.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();
    path
}

fn phasebreak() -> Command {
    Command::cargo_bin("phasebreak").unwrap()
}

#[test]
fn test_report_defaults_to_largest_size() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);

    phasebreak()
        .arg("report")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BREAKDOWN ANALYSIS SUMMARY (n=1,000,000)",
        ))
        .stdout(predicate::str::contains("Best configuration: 8 threads"));
}

#[test]
fn test_report_exact_size() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);

    phasebreak()
        .arg("report")
        .arg(&input)
        .arg("--size")
        .arg("100000")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BREAKDOWN ANALYSIS SUMMARY (n=100,000)",
        ));
}

#[test]
fn test_report_json_output() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);

    let output = phasebreak()
        .arg("report")
        .arg(&input)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["input_size"], 1_000_000);
    assert!(report["best"]["thread_count"].is_u64());
    assert!(report["speedups"].as_array().unwrap().len() >= 2);
}

#[test]
fn test_report_missing_size_fails() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);

    phasebreak()
        .arg("report")
        .arg(&input)
        .arg("--size")
        .arg("555")
        .assert()
        .failure()
        .stderr(predicate::str::contains("baseline"));
}

#[test]
fn test_report_rejects_zero_size() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);

    phasebreak()
        .arg("report")
        .arg(&input)
        .arg("--size")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--size must be a positive input size"));
}

#[test]
fn test_report_without_baseline_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("no_baseline.csv");
    fs::write(&input, CSV_WITHOUT_BASELINE).unwrap();

    phasebreak()
        .arg("report")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no single-thread baseline for input size 1000000",
        ));
}

#[test]
fn test_report_missing_file_fails() {
    phasebreak()
        .arg("report")
        .arg("absent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn test_report_rejects_malformed_tables() {
    let dir = TempDir::new().unwrap();
    for (name, csv) in malformed_csv_samples() {
        let input = dir.path().join(format!("{name}.csv"));
        fs::write(&input, csv).unwrap();

        phasebreak()
            .arg("report")
            .arg(&input)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}

#[test]
fn test_chart_writes_svg_set() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);
    let out_dir = dir.path().join("charts");

    phasebreak()
        .arg("chart")
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--format")
        .arg("svg")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 charts (n=1,000,000)"));

    for stem in [
        "breakdown_stacked",
        "breakdown_scaling",
        "breakdown_percentage",
        "breakdown_speedup",
    ] {
        let path = out_dir.join(format!("{stem}.svg"));
        assert!(path.exists(), "{} missing", path.display());
    }
}

#[test]
fn test_chart_respects_size_flag() {
    let dir = TempDir::new().unwrap();
    let input = sample_table(&dir);
    let out_dir = dir.path().join("charts");

    phasebreak()
        .arg("chart")
        .arg(&input)
        .arg("--size")
        .arg("100000")
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--format")
        .arg("svg")
        .assert()
        .success()
        .stdout(predicate::str::contains("(n=100,000)"));
}

#[test]
fn test_unknown_subcommand_fails() {
    phasebreak().arg("frobnicate").assert().failure();
}
