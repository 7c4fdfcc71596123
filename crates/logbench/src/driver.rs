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

//! Driving the external timed analyzer.
//!
//! The analyzer is a zero-argument executable whose standard output is the
//! raw benchmark artifact. Discovery is a small fixed protocol: probe an
//! ordered list of candidate paths (the `.exe`-suffixed build first, then
//! the unsuffixed one) and take the first that exists. The captured stdout
//! is persisted verbatim; this module never interprets it.
//!
//! The invocation is a blocking wait with no timeout: the analyzer's run
//! time is data-size dependent and bounding it is a caller concern.

use crate::error::{BenchError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Candidate executable paths, probed in order, relative to the project
/// root. The Windows build lands next to the Unix one.
pub const DEFAULT_CANDIDATES: &[&str] = &["bin/run_benchmark.exe", "bin/run_benchmark"];

/// Locates and runs the external analyzer, persisting its stdout as the
/// raw measurement artifact.
#[derive(Debug, Clone)]
pub struct AnalyzerDriver {
    project_root: PathBuf,
    candidates: Vec<PathBuf>,
    artifact_path: PathBuf,
}

impl AnalyzerDriver {
    /// Creates a driver with the default candidate list.
    ///
    /// # Arguments
    ///
    /// * `project_root` - Directory the analyzer runs in (it reads its
    ///   corpora via relative paths)
    /// * `artifact_path` - Where the captured stdout is persisted
    pub fn new(project_root: impl Into<PathBuf>, artifact_path: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let candidates = DEFAULT_CANDIDATES
            .iter()
            .map(|c| project_root.join(c))
            .collect();
        Self {
            project_root,
            candidates,
            artifact_path: artifact_path.into(),
        }
    }

    /// Replaces the candidate list (absolute paths, probed in order).
    pub fn with_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.candidates = candidates;
        self
    }

    /// The artifact destination.
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Returns the first existing candidate executable, if any.
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .find(|c| c.is_file())
            .map(PathBuf::as_path)
    }

    fn searched(&self) -> String {
        self.candidates
            .iter()
            .map(|c| c.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Runs the analyzer and persists its stdout, overwriting any prior
    /// artifact. Returns the captured text.
    ///
    /// # Errors
    ///
    /// * [`BenchError::MissingArtifact`]: no candidate exists; any prior
    ///   artifact file is left untouched.
    /// * [`BenchError::ExecutionFailure`]: the analyzer exited non-zero;
    ///   no artifact is written.
    /// * [`BenchError::Io`]: the process could not be spawned, or the
    ///   results directory / artifact file could not be written.
    pub fn capture(&self) -> Result<String> {
        let exe = self.locate().ok_or_else(|| BenchError::MissingArtifact {
            searched: self.searched(),
        })?;

        tracing::info!(exe = %exe.display(), "running analyzer");
        let output = Command::new(exe)
            .current_dir(&self.project_root)
            .output()
            .map_err(|e| BenchError::io_error(exe, e))?;

        if !output.status.success() {
            return Err(BenchError::ExecutionFailure {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let captured = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(bytes = captured.len(), "captured analyzer output");

        if let Some(dir) = self.artifact_path.parent() {
            fs::create_dir_all(dir).map_err(|e| BenchError::io_error(dir, e))?;
        }
        fs::write(&self.artifact_path, &captured)
            .map_err(|e| BenchError::io_error(&self.artifact_path, e))?;

        Ok(captured)
    }
}
