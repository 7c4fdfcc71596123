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

//! Logbench Command Line Interface
//!
//! Drives the benchmark pipeline end to end, or one stage at a time.
//!
//! # Examples
//!
//! ```bash
//! # Full pipeline: generate corpora, build + run the analyzer, render charts
//! logbench
//!
//! # Generate the workload corpora only
//! logbench generate
//!
//! # Run the analyzer and capture the raw artifact only
//! logbench bench --no-build
//!
//! # Re-render charts from an existing artifact
//! logbench render --results-dir results
//! ```

mod commands;

use clap::{Parser, Subcommand};
use logbench::PipelineConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Serial vs. parallel log analyzer benchmark pipeline.
#[derive(Parser)]
#[command(name = "logbench")]
#[command(author, version, about = "Serial vs. parallel log analyzer benchmark pipeline", long_about = None)]
struct Cli {
    /// Project root the analyzer runs in; all other paths resolve under it
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Corpus directory, relative to the project root
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Results directory, relative to the project root
    #[arg(long, global = true, default_value = "results")]
    results_dir: PathBuf,

    /// Reference thread count for the ideal speedup and efficiency lines
    #[arg(long, global = true, default_value_t = 4)]
    threads: u32,

    /// Skip the analyzer build step
    #[arg(long, global = true)]
    no_build: bool,

    /// Emit the run summary as JSON after the narration
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline (the default when no subcommand is given)
    Run,
    /// Generate the workload corpora only
    Generate,
    /// Run the external analyzer and capture the raw artifact only
    Bench,
    /// Parse an existing artifact and render all three charts
    Render,
}

impl Cli {
    fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::new(&self.project_root)
            .with_data_dir(&self.data_dir)
            .with_results_dir(&self.results_dir)
            .with_thread_count(self.threads);
        if self.no_build {
            config = config.without_build();
        }
        config
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();

    let ok = match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => commands::run_full(&config, cli.json),
        Commands::Generate => commands::generate(&config),
        Commands::Bench => commands::bench(&config),
        Commands::Render => commands::render(&config),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
