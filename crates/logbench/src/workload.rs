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

//! Synthetic log corpus generation.
//!
//! Generates stress-test log files of controlled scale and statistical
//! shape for the external analyzer to chew on. Every line is drawn
//! independently: a uniformly chosen severity level, a source address from
//! a fixed 50-entry pool, a message from the pool keyed by that line's own
//! level, and a timestamp jittered around "now".
//!
//! Line format: `YYYY-MM-DD HH:MM:SS <LEVEL> <source> <message>`.
//!
//! All sampling functions take an explicit random source so callers control
//! reproducibility: production code passes [`rand::thread_rng`], tests pass
//! a seeded [`StdRng`](rand::rngs::StdRng).

use crate::error::{BenchError, Result};
use chrono::{Duration, Local};
use once_cell::sync::Lazy;
use rand::Rng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Number of distinct synthetic source addresses.
pub const SOURCE_COUNT: usize = 50;

/// Timestamp jitter bound, in hours on either side of "now".
const JITTER_HOURS: i64 = 100;

static SOURCES: Lazy<Vec<String>> = Lazy::new(|| {
    (1..=SOURCE_COUNT)
        .map(|i| format!("192.168.0.{}", i))
        .collect()
});

/// The fixed pool of synthetic source addresses (`192.168.0.1` through
/// `192.168.0.50`).
pub fn sources() -> &'static [String] {
    &SOURCES
}

const INFO_MESSAGES: &[&str] = &[
    "User login successful",
    "Service started",
    "Request completed",
    "Data synchronized",
    "Cache updated",
    "Connection established",
];

const ERROR_MESSAGES: &[&str] = &[
    "Database connection failed",
    "Timeout occurred",
    "File not found",
    "Permission denied",
    "Memory allocation failed",
    "Service unavailable",
];

const WARNING_MESSAGES: &[&str] = &[
    "Disk usage high",
    "Memory usage high",
    "Slow response time",
    "Cache miss rate increasing",
    "Network latency detected",
];

const DEBUG_MESSAGES: &[&str] = &[
    "Debugging mode enabled",
    "Debugging trace point",
    "Variable dump requested",
    "Performance monitor active",
];

/// Log severity levels recognized by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Error,
    Warning,
    Debug,
}

impl Level {
    /// Returns the level token as it appears in a log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Debug => "DEBUG",
        }
    }

    /// Returns all levels.
    pub fn all() -> &'static [Level] {
        &[Self::Info, Self::Error, Self::Warning, Self::Debug]
    }

    /// Returns the message pool for this level.
    ///
    /// Message selection MUST be conditioned on the line's own level;
    /// cross-pool messages would skew the analyzer's category counts.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Self::Info => INFO_MESSAGES,
            Self::Error => ERROR_MESSAGES,
            Self::Warning => WARNING_MESSAGES,
            Self::Debug => DEBUG_MESSAGES,
        }
    }

    /// Parses a level token, returning `None` for anything unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "INFO" => Some(Self::Info),
            "ERROR" => Some(Self::Error),
            "WARNING" => Some(Self::Warning),
            "DEBUG" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// A named corpus of a fixed target line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Output file name, relative to the data directory.
    pub name: String,
    /// Exact number of log lines to generate.
    pub line_count: usize,
}

impl WorkloadSpec {
    /// Creates a new workload spec.
    pub fn new(name: impl Into<String>, line_count: usize) -> Self {
        Self {
            name: name.into(),
            line_count,
        }
    }

    /// The default five-corpus benchmark set, smallest first.
    pub fn default_set() -> Vec<WorkloadSpec> {
        vec![
            Self::new("log_small.txt", crate::sizes::SMALL),
            Self::new("log_medium.txt", crate::sizes::MEDIUM),
            Self::new("log_large.txt", crate::sizes::LARGE),
            Self::new("log_xlarge.txt", crate::sizes::XLARGE),
            Self::new("log_xxlarge.txt", crate::sizes::XXLARGE),
        ]
    }
}

fn sample_timestamp<R: Rng + ?Sized>(rng: &mut R) -> String {
    let offset = Duration::hours(rng.gen_range(-JITTER_HOURS..=JITTER_HOURS))
        + Duration::minutes(rng.gen_range(0..60))
        + Duration::seconds(rng.gen_range(0..60));
    (Local::now() + offset).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Draws one level uniformly at random.
pub fn sample_level<R: Rng + ?Sized>(rng: &mut R) -> Level {
    let all = Level::all();
    all[rng.gen_range(0..all.len())]
}

/// Draws one complete log line.
///
/// The returned string has no trailing newline; [`write_corpus`] appends
/// one per line.
pub fn sample_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let level = sample_level(rng);
    let source = &sources()[rng.gen_range(0..SOURCE_COUNT)];
    let pool = level.messages();
    let message = pool[rng.gen_range(0..pool.len())];

    format!(
        "{} {} {} {}",
        sample_timestamp(rng),
        level.as_str(),
        source,
        message
    )
}

/// Writes a corpus of exactly `line_count` log lines to `path`.
///
/// An unwritable destination fails with an I/O error carrying the path;
/// there is no partial retry.
///
/// # Arguments
///
/// * `path` - Destination file, overwritten if present
/// * `line_count` - Exact number of lines to emit
/// * `rng` - Random source for all per-line draws
pub fn write_corpus<R: Rng + ?Sized>(path: &Path, line_count: usize, rng: &mut R) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::io_error(path, e))?;
    let mut writer = BufWriter::new(file);

    for _ in 0..line_count {
        writeln!(writer, "{}", sample_line(rng)).map_err(|e| BenchError::io_error(path, e))?;
    }

    writer.flush().map_err(|e| BenchError::io_error(path, e))
}

/// Generates every corpus in `specs` under `data_dir`, creating the
/// directory first.
pub fn generate_all<R: Rng + ?Sized>(
    data_dir: &Path,
    specs: &[WorkloadSpec],
    rng: &mut R,
) -> Result<()> {
    fs::create_dir_all(data_dir).map_err(|e| BenchError::io_error(data_dir, e))?;

    for spec in specs {
        let path = data_dir.join(&spec.name);
        tracing::debug!(corpus = %spec.name, lines = spec.line_count, "generating corpus");
        write_corpus(&path, spec.line_count, rng)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_source_pool() {
        assert_eq!(sources().len(), SOURCE_COUNT);
        assert_eq!(sources()[0], "192.168.0.1");
        assert_eq!(sources()[49], "192.168.0.50");
    }

    #[test]
    fn test_message_pool_sizes() {
        assert_eq!(Level::Info.messages().len(), 6);
        assert_eq!(Level::Error.messages().len(), 6);
        assert_eq!(Level::Warning.messages().len(), 5);
        assert_eq!(Level::Debug.messages().len(), 4);
    }

    #[test]
    fn test_level_round_trip() {
        for level in Level::all() {
            assert_eq!(Level::from_token(level.as_str()), Some(*level));
        }
        assert_eq!(Level::from_token("TRACE"), None);
    }

    #[test]
    fn test_line_shape() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let line = sample_line(&mut rng);
            let mut parts = line.splitn(4, ' ');
            let date = parts.next().unwrap();
            let time = parts.next().unwrap();
            let level_token = parts.next().unwrap();
            let rest = parts.next().unwrap();

            let stamp = format!("{} {}", date, time);
            assert!(
                NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S").is_ok(),
                "bad timestamp in line: {}",
                line
            );

            let level = Level::from_token(level_token).expect("unknown level token");

            let mut tail = rest.splitn(2, ' ');
            let source = tail.next().unwrap();
            let message = tail.next().unwrap();
            assert!(sources().iter().any(|s| s == source));
            assert!(
                level.messages().contains(&message),
                "message '{}' not in {} pool",
                message,
                level.as_str()
            );
        }
    }

    #[test]
    fn test_write_corpus_exact_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        let mut rng = StdRng::seed_from_u64(42);

        write_corpus(&path, 250, &mut rng).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 250);
        for line in content.lines() {
            let token = line.split(' ').nth(2).unwrap();
            assert!(Level::from_token(token).is_some());
        }
    }

    #[test]
    fn test_write_corpus_unwritable_path() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = write_corpus(Path::new("/nonexistent-dir/corpus.txt"), 10, &mut rng)
            .expect_err("writing into a missing directory must fail");
        assert!(matches!(err, BenchError::Io { .. }));
    }

    #[test]
    fn test_default_set() {
        let set = WorkloadSpec::default_set();
        assert_eq!(set.len(), 5);
        assert_eq!(set[0], WorkloadSpec::new("log_small.txt", 100));
        assert_eq!(set[4].line_count, 100_000);

        // Sizes are strictly increasing.
        for pair in set.windows(2) {
            assert!(pair[0].line_count < pair[1].line_count);
        }
    }

    #[test]
    fn test_generate_all() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let specs = vec![
            WorkloadSpec::new("a.txt", 10),
            WorkloadSpec::new("b.txt", 20),
        ];
        let mut rng = StdRng::seed_from_u64(3);

        generate_all(&data_dir, &specs, &mut rng).unwrap();

        let a = std::fs::read_to_string(data_dir.join("a.txt")).unwrap();
        let b = std::fs::read_to_string(data_dir.join("b.txt")).unwrap();
        assert_eq!(a.lines().count(), 10);
        assert_eq!(b.lines().count(), 20);
    }
}
