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

//! Centralized pipeline configuration.
//!
//! Collects every path and knob of a benchmark run in one builder-style
//! struct so the orchestrator, driver, and renderers agree on layout.
//! Concurrent runs against the same paths are a caller responsibility;
//! nothing here locks files.

use crate::driver::DEFAULT_CANDIDATES;
use crate::metrics::REFERENCE_THREADS;
use crate::workload::WorkloadSpec;
use std::path::{Path, PathBuf};

/// Artifact file name under the results directory.
pub const ARTIFACT_NAME: &str = "benchmark_data.csv";

/// Time-comparison chart file name.
pub const TIME_CHART_NAME: &str = "serial_vs_parallel.png";

/// Speedup chart file name.
pub const SPEEDUP_CHART_NAME: &str = "speedup_analysis.png";

/// Efficiency chart file name.
pub const EFFICIENCY_CHART_NAME: &str = "efficiency_analysis.png";

/// Configuration for one pipeline run.
///
/// # Example
///
/// ```no_run
/// use logbench::config::PipelineConfig;
///
/// let config = PipelineConfig::default()
///     .with_project_root("bench")
///     .with_thread_count(8)
///     .without_build();
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory the analyzer runs in; all other paths resolve under it.
    pub project_root: PathBuf,
    /// Corpus directory, relative to the project root.
    pub data_dir: PathBuf,
    /// Results directory, relative to the project root.
    pub results_dir: PathBuf,
    /// Analyzer executable candidates, relative to the project root.
    pub executable_candidates: Vec<PathBuf>,
    /// Build command for the analyzer; `None` skips the build step.
    pub build_command: Option<Vec<String>>,
    /// Reference thread count for recomputed efficiency and the ideal
    /// speedup line.
    pub thread_count: u32,
    /// Corpora to generate.
    pub workloads: Vec<WorkloadSpec>,
}

impl PipelineConfig {
    /// Creates a configuration rooted at `project_root` with defaults for
    /// everything else.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            data_dir: PathBuf::from("data"),
            results_dir: PathBuf::from("results"),
            executable_candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
            build_command: Some(vec!["make".to_string(), "all".to_string()]),
            thread_count: REFERENCE_THREADS,
            workloads: WorkloadSpec::default_set(),
        }
    }

    /// Sets the project root.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Sets the corpus directory (relative to the project root).
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the results directory (relative to the project root).
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Replaces the analyzer executable candidate list.
    pub fn with_executable_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.executable_candidates = candidates;
        self
    }

    /// Sets the analyzer build command.
    pub fn with_build_command(mut self, command: Vec<String>) -> Self {
        self.build_command = Some(command);
        self
    }

    /// Disables the analyzer build step.
    pub fn without_build(mut self) -> Self {
        self.build_command = None;
        self
    }

    /// Sets the reference thread count.
    pub fn with_thread_count(mut self, threads: u32) -> Self {
        self.thread_count = threads;
        self
    }

    /// Replaces the workload set.
    pub fn with_workloads(mut self, workloads: Vec<WorkloadSpec>) -> Self {
        self.workloads = workloads;
        self
    }

    /// Absolute corpus directory.
    pub fn data_path(&self) -> PathBuf {
        self.project_root.join(&self.data_dir)
    }

    /// Absolute results directory.
    pub fn results_path(&self) -> PathBuf {
        self.project_root.join(&self.results_dir)
    }

    /// Absolute raw-artifact path.
    pub fn artifact_path(&self) -> PathBuf {
        self.results_path().join(ARTIFACT_NAME)
    }

    /// Absolute candidate executable paths, in probe order.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        self.executable_candidates
            .iter()
            .map(|c| self.project_root.join(c))
            .collect()
    }

    /// Absolute time-comparison chart path.
    pub fn time_chart_path(&self) -> PathBuf {
        self.results_path().join(TIME_CHART_NAME)
    }

    /// Absolute speedup chart path.
    pub fn speedup_chart_path(&self) -> PathBuf {
        self.results_path().join(SPEEDUP_CHART_NAME)
    }

    /// Absolute efficiency chart path.
    pub fn efficiency_chart_path(&self) -> PathBuf {
        self.results_path().join(EFFICIENCY_CHART_NAME)
    }

    /// All three chart paths in render order.
    pub fn chart_paths(&self) -> [PathBuf; 3] {
        [
            self.time_chart_path(),
            self.speedup_chart_path(),
            self.efficiency_chart_path(),
        ]
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = PipelineConfig::default();
        assert_eq!(config.thread_count, REFERENCE_THREADS);
        assert_eq!(config.workloads.len(), 5);
        assert_eq!(config.artifact_path(), Path::new("./results/benchmark_data.csv"));
        assert_eq!(
            config.candidate_paths(),
            vec![
                PathBuf::from("./bin/run_benchmark.exe"),
                PathBuf::from("./bin/run_benchmark"),
            ]
        );
        assert_eq!(
            config.build_command.as_deref(),
            Some(&["make".to_string(), "all".to_string()][..])
        );
    }

    #[test]
    fn test_builder_overrides() {
        let config = PipelineConfig::new("/bench")
            .with_data_dir("corpora")
            .with_results_dir("out")
            .with_thread_count(8)
            .without_build();

        assert_eq!(config.data_path(), Path::new("/bench/corpora"));
        assert_eq!(config.time_chart_path(), Path::new("/bench/out/serial_vs_parallel.png"));
        assert_eq!(config.thread_count, 8);
        assert!(config.build_command.is_none());
    }

    #[test]
    fn test_chart_paths_order() {
        let config = PipelineConfig::new("/p");
        let [time, speedup, efficiency] = config.chart_paths();
        assert!(time.ends_with(TIME_CHART_NAME));
        assert!(speedup.ends_with(SPEEDUP_CHART_NAME));
        assert!(efficiency.ends_with(EFFICIENCY_CHART_NAME));
    }
}
