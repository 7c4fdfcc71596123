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

//! Logbench Benchmark Pipeline
//!
//! Characterizes an external log analyzer's serial vs. parallel performance:
//!
//! - **Workload generation**: synthetic log corpora of controlled scale and
//!   statistical shape
//! - **Measurement capture**: drives the external timed analyzer and
//!   persists its tabular stdout as the raw artifact
//! - **Metrics**: parses and validates the artifact into a typed table
//! - **Charts**: renders time-comparison, speedup, and efficiency PNGs
//!
//! ## Usage
//!
//! Run the full pipeline:
//! ```bash
//! cargo run --package logbench-cli
//! ```
//!
//! Or drive it from code:
//! ```no_run
//! use logbench::{Pipeline, PipelineConfig};
//!
//! let summary = Pipeline::new(PipelineConfig::default()).run();
//! assert!(summary.is_success());
//! ```
//!
//! The pipeline is a single synchronous control flow; the "parallel" in
//! serial-vs-parallel refers to the external analyzer's internals. Running
//! two pipelines against the same paths concurrently is undefined and left
//! to callers to avoid.

pub mod charts;
pub mod config;
pub mod driver;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod workload;

// Re-export key types for convenience
pub use charts::{render_efficiency, render_speedup, render_time_comparison};
pub use config::PipelineConfig;
pub use driver::AnalyzerDriver;
pub use error::{BenchError, Result};
pub use metrics::{
    BenchmarkRow, MetricField, MetricsTable, ValidationWarning, REFERENCE_THREADS,
};
pub use pipeline::{Pipeline, RunSummary, StepResult, StepStatus};
pub use workload::{Level, WorkloadSpec};

/// Standard corpus sizes, in log lines.
pub mod sizes {
    /// Small corpus: quick smoke measurements.
    pub const SMALL: usize = 100;
    /// Medium corpus.
    pub const MEDIUM: usize = 1_000;
    /// Large corpus.
    pub const LARGE: usize = 10_000;
    /// Extra-large corpus.
    pub const XLARGE: usize = 50_000;
    /// Stress corpus: ~100k lines, dominates analyzer run time.
    pub const XXLARGE: usize = 100_000;
}
