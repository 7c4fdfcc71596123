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

//! Best-effort sequential benchmark pipeline.
//!
//! Sequences corpus generation, the external analyzer build and run, metric
//! parsing, and the three chart renders. Every step yields an explicit
//! [`StepResult`]; the aggregate outcome is a reduction over those results,
//! not an exception unwinding path. A failed step is reported and the run
//! continues, except where a later step has a hard data dependency that is
//! actually missing (no parseable metrics table means the renders are
//! skipped, not rendered empty).
//!
//! A failed analyzer run does not prevent parsing: the parse step reads the
//! artifact file from disk, so a stale artifact from an earlier run still
//! produces charts. That fallback is the orchestrator's choice; the driver
//! itself never pretends a missing run succeeded.

use crate::charts;
use crate::config::PipelineConfig;
use crate::driver::AnalyzerDriver;
use crate::error::BenchError;
use crate::metrics::{MetricsTable, ValidationWarning};
use crate::workload;
use serde::Serialize;
use std::fs;
use std::process::Command;

/// Outcome of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    /// The step completed.
    Ok,
    /// The step did not run; the reason explains why.
    Skipped(String),
    /// The step ran and failed.
    Failed(String),
}

impl StepStatus {
    /// Whether the step completed successfully.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether the step ran and failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One named step and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// Human-readable step name.
    pub name: String,
    /// What happened.
    pub status: StepStatus,
}

impl StepResult {
    fn new(name: &str, status: StepStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
        }
    }
}

/// The reduced outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Every step in execution order.
    pub steps: Vec<StepResult>,
    /// Non-fatal metric validation findings.
    pub warnings: Vec<ValidationWarning>,
}

impl RunSummary {
    /// True when no step failed (skipped steps do not count against
    /// success; their cause already failed).
    pub fn is_success(&self) -> bool {
        !self.steps.iter().any(|s| s.status.is_failed())
    }

    /// The failed steps, in order.
    pub fn failed_steps(&self) -> Vec<&StepResult> {
        self.steps.iter().filter(|s| s.status.is_failed()).collect()
    }
}

/// Sequences the full benchmark pipeline over one [`PipelineConfig`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline over the given configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration this pipeline runs against.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the full pipeline, discarding per-step notifications.
    pub fn run(&self) -> RunSummary {
        self.run_with(|_| {})
    }

    /// Runs the full pipeline, handing each [`StepResult`] to `observe`
    /// as it completes.
    pub fn run_with<F>(&self, mut observe: F) -> RunSummary
    where
        F: FnMut(&StepResult),
    {
        let mut steps: Vec<StepResult> = Vec::new();
        let mut warnings: Vec<ValidationWarning> = Vec::new();

        let mut record = |steps: &mut Vec<StepResult>, result: StepResult| {
            tracing::info!(step = %result.name, status = ?result.status, "pipeline step");
            observe(&result);
            steps.push(result);
        };

        // Step 1: synthesize the corpora.
        let status = match workload::generate_all(
            &self.config.data_path(),
            &self.config.workloads,
            &mut rand::thread_rng(),
        ) {
            Ok(()) => StepStatus::Ok,
            Err(e) => StepStatus::Failed(e.to_string()),
        };
        record(&mut steps, StepResult::new("generate workloads", status));

        // Step 2: build the analyzer (external, tolerated on failure).
        let status = match &self.config.build_command {
            None => StepStatus::Skipped("no build command configured".to_string()),
            Some(command) => self.run_build(command),
        };
        record(&mut steps, StepResult::new("build analyzer", status));

        // Step 3: run the analyzer and capture its output.
        let driver = AnalyzerDriver::new(&self.config.project_root, self.config.artifact_path())
            .with_candidates(self.config.candidate_paths());
        let status = match driver.capture() {
            Ok(_) => StepStatus::Ok,
            Err(e) => StepStatus::Failed(e.to_string()),
        };
        record(&mut steps, StepResult::new("run analyzer", status));

        // Step 4: parse whatever artifact is on disk. A fresh capture and
        // a stale file from an earlier run are equally acceptable here.
        let artifact_path = self.config.artifact_path();
        let table = match fs::read_to_string(&artifact_path) {
            Ok(raw) => match MetricsTable::parse(&raw) {
                Ok(table) => {
                    warnings = table.validate(self.config.thread_count);
                    record(&mut steps, StepResult::new("parse metrics", StepStatus::Ok));
                    Some(table)
                }
                Err(e) => {
                    record(
                        &mut steps,
                        StepResult::new("parse metrics", StepStatus::Failed(e.to_string())),
                    );
                    None
                }
            },
            Err(e) => {
                let err = BenchError::io_error(&artifact_path, e);
                record(
                    &mut steps,
                    StepResult::new("parse metrics", StepStatus::Failed(err.to_string())),
                );
                None
            }
        };

        // Steps 5-7: renders are independent of one another, but all
        // hard-depend on a parsed table.
        let renders: [(&str, Box<dyn Fn(&MetricsTable) -> crate::error::Result<()>>); 3] = [
            (
                "render time comparison",
                Box::new({
                    let path = self.config.time_chart_path();
                    move |t: &MetricsTable| charts::render_time_comparison(t, &path)
                }),
            ),
            (
                "render speedup",
                Box::new({
                    let path = self.config.speedup_chart_path();
                    let threads = self.config.thread_count;
                    move |t: &MetricsTable| charts::render_speedup(t, &path, threads)
                }),
            ),
            (
                "render efficiency",
                Box::new({
                    let path = self.config.efficiency_chart_path();
                    move |t: &MetricsTable| charts::render_efficiency(t, &path)
                }),
            ),
        ];

        for (name, render) in renders {
            let status = match &table {
                None => StepStatus::Skipped("no metrics table".to_string()),
                Some(table) => match render(table) {
                    Ok(()) => StepStatus::Ok,
                    Err(e) => StepStatus::Failed(e.to_string()),
                },
            };
            record(&mut steps, StepResult::new(name, status));
        }

        RunSummary { steps, warnings }
    }

    fn run_build(&self, command: &[String]) -> StepStatus {
        let Some((program, args)) = command.split_first() else {
            return StepStatus::Skipped("empty build command".to_string());
        };

        tracing::info!(command = ?command, "building analyzer");
        match Command::new(program)
            .args(args)
            .current_dir(&self.config.project_root)
            .output()
        {
            Ok(output) if output.status.success() => StepStatus::Ok,
            Ok(output) => StepStatus::Failed(format!(
                "build exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )),
            Err(e) => StepStatus::Failed(format!("could not invoke '{}': {}", program, e)),
        }
    }
}
