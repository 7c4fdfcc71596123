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

//! Command implementations with per-step console narration.
//!
//! Every step announces success or failure distinctly; nothing fails
//! silently. Each function returns `true` when its operation had no failed
//! step, which the binary maps onto the process exit status.

use colored::Colorize;
use logbench::metrics::ValidationWarning;
use logbench::{charts, AnalyzerDriver, MetricsTable, Pipeline, PipelineConfig, StepResult, StepStatus};
use std::fs;

fn banner(title: &str) {
    println!("{}", "=".repeat(70));
    println!("{}", title);
    println!("{}", "=".repeat(70));
}

fn narrate(step: &StepResult) {
    match &step.status {
        StepStatus::Ok => println!("  {} {}", "✓".green().bold(), step.name),
        StepStatus::Skipped(reason) => {
            println!("  {} {} ({})", "~".yellow().bold(), step.name, reason)
        }
        StepStatus::Failed(reason) => {
            println!("  {} {}: {}", "✗".red().bold(), step.name, reason)
        }
    }
}

fn narrate_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        println!("  {} {}", "!".yellow().bold(), warning);
    }
}

/// Runs the full pipeline with narration; optionally dumps the summary as
/// JSON afterwards.
pub fn run_full(config: &PipelineConfig, json: bool) -> bool {
    banner("LOGBENCH - BENCHMARK AND VISUALIZATION");

    let summary = Pipeline::new(config.clone()).run_with(narrate);
    narrate_warnings(&summary.warnings);

    println!("{}", "=".repeat(70));
    if summary.is_success() {
        println!("{}", "All benchmark and visualization steps complete".green());
    } else {
        let failed: Vec<&str> = summary
            .failed_steps()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        println!("{} {}", "Failed steps:".red(), failed.join(", "));
    }

    println!("\nGenerated files:");
    println!("  - {}", config.artifact_path().display());
    for chart in config.chart_paths() {
        println!("  - {}", chart.display());
    }

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(dump) => println!("{}", dump),
            Err(e) => eprintln!("could not serialize summary: {}", e),
        }
    }

    summary.is_success()
}

/// Generates the workload corpora only.
pub fn generate(config: &PipelineConfig) -> bool {
    banner("LOGBENCH - WORKLOAD GENERATION");

    let data_dir = config.data_path();
    match logbench::workload::generate_all(&data_dir, &config.workloads, &mut rand::thread_rng()) {
        Ok(()) => {
            for spec in &config.workloads {
                println!(
                    "  {} {} ({} lines)",
                    "✓".green().bold(),
                    data_dir.join(&spec.name).display(),
                    spec.line_count
                );
            }
            true
        }
        Err(e) => {
            println!("  {} generate workloads: {}", "✗".red().bold(), e);
            false
        }
    }
}

/// Runs the analyzer and captures the raw artifact only.
pub fn bench(config: &PipelineConfig) -> bool {
    banner("LOGBENCH - ANALYZER RUN");

    let driver = AnalyzerDriver::new(&config.project_root, config.artifact_path())
        .with_candidates(config.candidate_paths());
    match driver.capture() {
        Ok(raw) => {
            println!(
                "  {} captured {} bytes to {}",
                "✓".green().bold(),
                raw.len(),
                config.artifact_path().display()
            );
            true
        }
        Err(e) => {
            println!("  {} run analyzer: {}", "✗".red().bold(), e);
            false
        }
    }
}

/// Parses an existing artifact and renders all three charts.
pub fn render(config: &PipelineConfig) -> bool {
    banner("LOGBENCH - CHART RENDERING");

    let artifact = config.artifact_path();
    let raw = match fs::read_to_string(&artifact) {
        Ok(raw) => raw,
        Err(e) => {
            println!(
                "  {} read artifact {}: {}",
                "✗".red().bold(),
                artifact.display(),
                e
            );
            return false;
        }
    };

    let table = match MetricsTable::parse(&raw) {
        Ok(table) => table,
        Err(e) => {
            println!("  {} parse metrics: {}", "✗".red().bold(), e);
            return false;
        }
    };
    println!("  {} parse metrics ({} rows)", "✓".green().bold(), table.len());
    narrate_warnings(&table.validate(config.thread_count));

    let mut ok = true;
    let renders: [(&str, Box<dyn Fn() -> logbench::Result<()>>); 3] = [
        (
            "render time comparison",
            Box::new({
                let path = config.time_chart_path();
                let table = table.clone();
                move || charts::render_time_comparison(&table, &path)
            }),
        ),
        (
            "render speedup",
            Box::new({
                let path = config.speedup_chart_path();
                let table = table.clone();
                let threads = config.thread_count;
                move || charts::render_speedup(&table, &path, threads)
            }),
        ),
        (
            "render efficiency",
            Box::new({
                let path = config.efficiency_chart_path();
                let table = table.clone();
                move || charts::render_efficiency(&table, &path)
            }),
        ),
    ];

    for (name, render) in renders {
        match render() {
            Ok(()) => println!("  {} {}", "✓".green().bold(), name),
            Err(e) => {
                println!("  {} {}: {}", "✗".red().bold(), name, e);
                ok = false;
            }
        }
    }

    ok
}
