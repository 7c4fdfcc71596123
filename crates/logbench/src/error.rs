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

//! Structured error types for the benchmark pipeline.
//!
//! This module provides type-safe error handling using `thiserror`. All
//! pipeline operations return `Result<T, BenchError>` for consistent error
//! reporting.
//!
//! Note that metric validation findings are deliberately *not* errors: a
//! parsed table whose supplied ratios diverge from recomputation yields
//! [`ValidationWarning`](crate::metrics::ValidationWarning) values alongside
//! the table instead of failing the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmark pipeline operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// The main error type for benchmark pipeline operations.
///
/// Each variant corresponds to one failure class of the pipeline and
/// carries enough context for a user-facing message without a backtrace.
#[derive(Error, Debug)]
pub enum BenchError {
    /// An expected input file or executable was not found.
    ///
    /// Recoverable at the orchestrator level: the run continues and later
    /// steps may fall back to stale artifacts on disk.
    #[error("analyzer executable not found (searched: {searched})")]
    MissingArtifact {
        /// The candidate paths that were probed, in order.
        searched: String,
    },

    /// The external analyzer ran but exited with a non-zero status.
    ///
    /// Carries the exit status and captured standard error so the failure
    /// can be surfaced verbatim. No artifact is written in this case.
    #[error("analyzer failed ({status}): {stderr}")]
    ExecutionFailure {
        /// Formatted exit status of the analyzer process.
        status: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// The raw artifact does not match the expected tabular schema.
    ///
    /// Always fatal to the current run's metrics and rendering phase;
    /// no partial table is ever produced.
    #[error("artifact parse error: {0}")]
    Parse(String),

    /// A chart could not be rendered to its output file.
    #[error("failed to render '{path}': {message}")]
    Render {
        /// The chart output path.
        path: PathBuf,
        /// The backend error message.
        message: String,
    },

    /// I/O operation failed (file read, write, or directory creation).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

impl BenchError {
    /// Create an I/O error with file path context.
    ///
    /// # Arguments
    ///
    /// * `path` - The file path that caused the error
    /// * `source` - The underlying I/O error
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a render error with output path context.
    pub fn render(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Render {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Returns true when the error means "input absent" rather than
    /// "operation attempted and failed".
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingArtifact { .. })
    }
}
