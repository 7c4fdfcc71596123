// Dweve Logbench - Serial vs. Parallel Log Analyzer Benchmark Pipeline
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! End-to-end pipeline tests against a stub analyzer.

use logbench::{MetricsTable, Pipeline, PipelineConfig, StepStatus, WorkloadSpec};
use std::fs;
use std::path::Path;

const STUB_CSV: &str = "\
NumLines,SerialTime(s),ParallelTime(s),Speedup,Efficiency(%)
100,0.001200,0.000500,2.40,60.00
1000,0.012000,0.004000,3.00,75.00
10000,0.130000,0.036000,3.61,90.25
50000,0.640000,0.170000,3.76,94.12
100000,1.310000,0.340000,3.85,96.32
";

#[cfg(unix)]
fn install_stub_analyzer(project_root: &Path, csv: &str) {
    use std::os::unix::fs::PermissionsExt;

    let bin = project_root.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let exe = bin.join("run_benchmark");
    let script = format!("#!/bin/sh\ncat <<'CSV'\n{}CSV\n", csv);
    fs::write(&exe, script).unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn full_run_produces_table_and_charts() {
    let dir = tempfile::tempdir().unwrap();
    install_stub_analyzer(dir.path(), STUB_CSV);

    let config = PipelineConfig::new(dir.path()).without_build();
    let summary = Pipeline::new(config.clone()).run();

    assert!(summary.is_success(), "steps: {:?}", summary.steps);
    assert!(summary.warnings.is_empty());

    // All five default corpora exist with exact line counts.
    for spec in WorkloadSpec::default_set() {
        let corpus = config.data_path().join(&spec.name);
        let content = fs::read_to_string(&corpus).unwrap();
        assert_eq!(
            content.lines().count(),
            spec.line_count,
            "{} has wrong line count",
            spec.name
        );
    }

    // The captured artifact parses into the expected five rows.
    let raw = fs::read_to_string(config.artifact_path()).unwrap();
    let table = MetricsTable::parse(&raw).unwrap();
    assert_eq!(table.num_lines(), vec![100, 1000, 10000, 50000, 100000]);

    // Three non-empty chart artifacts.
    for chart in config.chart_paths() {
        let len = fs::metadata(&chart).unwrap().len();
        assert!(len > 0, "{} is empty", chart.display());
    }
}

#[cfg(unix)]
#[test]
fn divergent_analyzer_ratios_surface_as_warnings() {
    let dir = tempfile::tempdir().unwrap();
    // Speedup/efficiency columns are stale relative to the timings.
    let stale = "\
NumLines,SerialTime(s),ParallelTime(s),Speedup,Efficiency(%)
100,0.001000,0.000500,3.90,97.50
";
    install_stub_analyzer(dir.path(), stale);

    let config = PipelineConfig::new(dir.path())
        .without_build()
        .with_workloads(vec![WorkloadSpec::new("tiny.txt", 10)]);
    let summary = Pipeline::new(config.clone()).run();

    // Warnings do not block rendering.
    assert!(summary.is_success(), "steps: {:?}", summary.steps);
    assert!(!summary.warnings.is_empty());
    for chart in config.chart_paths() {
        assert!(chart.exists());
    }
}

#[test]
fn missing_analyzer_leaves_prior_artifact_untouched() {
    let dir = tempfile::tempdir().unwrap();

    let config = PipelineConfig::new(dir.path())
        .without_build()
        .with_workloads(vec![WorkloadSpec::new("tiny.txt", 10)]);

    // A stale artifact from some earlier run.
    fs::create_dir_all(config.results_path()).unwrap();
    fs::write(config.artifact_path(), STUB_CSV).unwrap();
    let before = fs::read(config.artifact_path()).unwrap();

    let summary = Pipeline::new(config.clone()).run();

    let after = fs::read(config.artifact_path()).unwrap();
    assert_eq!(before, after, "driver must not touch the stale artifact");

    // The analyzer step failed but the stale table still rendered.
    let run_step = summary
        .steps
        .iter()
        .find(|s| s.name == "run analyzer")
        .unwrap();
    assert!(matches!(run_step.status, StepStatus::Failed(_)));
    let parse_step = summary
        .steps
        .iter()
        .find(|s| s.name == "parse metrics")
        .unwrap();
    assert!(parse_step.status.is_ok());
    assert!(!summary.is_success());
}

#[cfg(unix)]
#[test]
fn garbage_analyzer_output_fails_parse_not_renders_garbage() {
    let dir = tempfile::tempdir().unwrap();
    install_stub_analyzer(dir.path(), "this is not tabular output at all\n");

    let config = PipelineConfig::new(dir.path())
        .without_build()
        .with_workloads(vec![WorkloadSpec::new("tiny.txt", 10)]);
    let summary = Pipeline::new(config.clone()).run();

    assert!(!summary.is_success());
    for chart in config.chart_paths() {
        assert!(!chart.exists(), "no chart should exist for a bad artifact");
    }
}
