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

//! The parsed, validated representation of one benchmark run.
//!
//! The raw artifact is comma-separated tabular text whose header names the
//! five measurement columns. Columns are matched by exact name, order
//! independent; columns beyond the required five (the analyzer prepends the
//! corpus file name) are ignored. Any row that fails to parse is fatal for
//! the whole artifact: there are no partial tables.
//!
//! Supplied `Speedup` and `Efficiency(%)` values are treated as
//! authoritative for rendering, but [`MetricsTable::validate`] recomputes
//! both from the timing columns and flags rows that diverge beyond
//! tolerance, so stale or mismatched analyzer output cannot pass silently.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference thread count of the external analyzer's parallel path.
pub const REFERENCE_THREADS: u32 = 4;

/// Relative divergence tolerated between supplied and recomputed ratios.
///
/// Sized for the analyzer's two-decimal output precision.
pub const RELATIVE_TOLERANCE: f64 = 0.05;

/// Absolute divergence floor for near-zero speedup values.
pub const SPEEDUP_FLOOR: f64 = 0.01;

/// Absolute divergence floor for efficiency, in percentage points.
pub const EFFICIENCY_FLOOR: f64 = 0.5;

const REQUIRED_COLUMNS: &[&str] = &[
    "NumLines",
    "SerialTime(s)",
    "ParallelTime(s)",
    "Speedup",
    "Efficiency(%)",
];

/// One measurement sample: a single corpus size timed serially and in
/// parallel, with the analyzer's own derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    /// Corpus size in log lines.
    #[serde(rename = "NumLines")]
    pub num_lines: u64,
    /// Serial wall-clock time in seconds.
    #[serde(rename = "SerialTime(s)")]
    pub serial_time_s: f64,
    /// Parallel wall-clock time in seconds.
    #[serde(rename = "ParallelTime(s)")]
    pub parallel_time_s: f64,
    /// Analyzer-supplied speedup (serial / parallel).
    #[serde(rename = "Speedup")]
    pub speedup: f64,
    /// Analyzer-supplied efficiency as a percentage of linear scaling.
    #[serde(rename = "Efficiency(%)")]
    pub efficiency_pct: f64,
}

impl BenchmarkRow {
    /// Speedup recomputed from the timing columns, or `None` when the
    /// parallel time is zero and no finite ratio exists.
    pub fn recomputed_speedup(&self) -> Option<f64> {
        (self.parallel_time_s > 0.0).then(|| self.serial_time_s / self.parallel_time_s)
    }

    /// Efficiency recomputed from the timing columns at `threads`.
    pub fn recomputed_efficiency(&self, threads: u32) -> Option<f64> {
        self.recomputed_speedup()
            .map(|speedup| 100.0 * speedup / threads as f64)
    }
}

/// Which derived metric a validation finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricField {
    Speedup,
    Efficiency,
}

impl MetricField {
    /// Returns the artifact column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speedup => "Speedup",
            Self::Efficiency => "Efficiency(%)",
        }
    }
}

/// A non-fatal finding: a supplied ratio diverges from its recomputation.
///
/// Warnings are surfaced, never acted on: the supplied value stays in the
/// table untouched so charts always show what the analyzer reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationWarning {
    /// Corpus size of the offending row.
    pub num_lines: u64,
    /// Which derived column diverged.
    pub field: MetricField,
    /// The analyzer-supplied value.
    pub supplied: f64,
    /// The value recomputed from the timing columns.
    pub recomputed: f64,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: supplied {} = {:.3} diverges from recomputed {:.3}",
            self.num_lines,
            self.field.as_str(),
            self.supplied,
            self.recomputed
        )
    }
}

/// An ordered sequence of [`BenchmarkRow`], sorted ascending by corpus
/// size. Owned by one benchmark run, consumed read-only by the renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricsTable {
    rows: Vec<BenchmarkRow>,
}

impl MetricsTable {
    /// Parses a raw captured artifact into a table.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Parse`] when a required column is missing,
    /// any field fails to parse, a row has `NumLines == 0`, or a timing
    /// is negative. A failed row poisons the entire artifact.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(raw.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| BenchError::parse(e.to_string()))?
            .clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *required) {
                return Err(BenchError::parse(format!(
                    "missing required column '{}'",
                    required
                )));
            }
        }

        let mut rows = Vec::new();
        for (i, record) in reader.deserialize::<BenchmarkRow>().enumerate() {
            let row = record
                .map_err(|e| BenchError::parse(format!("data row {}: {}", i + 1, e)))?;
            if row.num_lines == 0 {
                return Err(BenchError::parse(format!(
                    "data row {}: NumLines must be positive",
                    i + 1
                )));
            }
            if row.serial_time_s < 0.0 || row.parallel_time_s < 0.0 {
                return Err(BenchError::parse(format!(
                    "data row {}: negative timing",
                    i + 1
                )));
            }
            rows.push(row);
        }

        // Stable, so ties keep their input order.
        rows.sort_by_key(|row| row.num_lines);

        Ok(Self { rows })
    }

    /// Builds a table from rows already in hand (sorted on insertion).
    pub fn from_rows(mut rows: Vec<BenchmarkRow>) -> Self {
        rows.sort_by_key(|row| row.num_lines);
        Self { rows }
    }

    /// The rows, ascending by `NumLines`.
    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    /// Number of measurement rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The corpus-size column, ascending.
    pub fn num_lines(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.num_lines).collect()
    }

    /// Recomputes the derived ratios at `threads` and flags rows whose
    /// supplied values diverge beyond tolerance.
    ///
    /// Rows with a zero parallel time are skipped: no finite recomputation
    /// exists for them. Findings never block rendering and never mutate
    /// the table.
    pub fn validate(&self, threads: u32) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for row in &self.rows {
            let Some(speedup) = row.recomputed_speedup() else {
                continue;
            };
            if diverges(row.speedup, speedup, SPEEDUP_FLOOR) {
                warnings.push(ValidationWarning {
                    num_lines: row.num_lines,
                    field: MetricField::Speedup,
                    supplied: row.speedup,
                    recomputed: speedup,
                });
            }

            let efficiency = 100.0 * speedup / threads as f64;
            if diverges(row.efficiency_pct, efficiency, EFFICIENCY_FLOOR) {
                warnings.push(ValidationWarning {
                    num_lines: row.num_lines,
                    field: MetricField::Efficiency,
                    supplied: row.efficiency_pct,
                    recomputed: efficiency,
                });
            }
        }

        warnings
    }
}

fn diverges(supplied: f64, recomputed: f64, floor: f64) -> bool {
    let tolerance = (RELATIVE_TOLERANCE * recomputed.abs()).max(floor);
    (supplied - recomputed).abs() > tolerance
}
