// Dweve Crunch - Compressor Benchmark Harness
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

//! Centralized benchmark configuration.
//!
//! Covers where inputs come from, which algorithms run, how tasks are
//! scheduled, and where (and whether) the report is persisted.

use crate::error::{BenchError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default extension used for input discovery.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Default report file stem, written next to the inputs.
pub const DEFAULT_REPORT_STEM: &str = "compression_results";

/// Where benchmark inputs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Every file in a directory whose extension matches one of `extensions`.
    Directory {
        /// Directory to scan.
        path: PathBuf,
        /// Accepted extensions, without the leading dot.
        extensions: Vec<String>,
        /// Descend into subdirectories.
        recursive: bool,
    },
    /// An explicit, ordered list of files.
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// Scans `path` for files with the default extension.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        InputSource::Directory {
            path: path.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            recursive: false,
        }
    }

    /// Directory the report defaults to for this source.
    pub fn base_dir(&self) -> PathBuf {
        match self {
            InputSource::Directory { path, .. } => path.clone(),
            InputSource::Files(_) => PathBuf::from("."),
        }
    }
}

impl Default for InputSource {
    fn default() -> Self {
        InputSource::directory(".")
    }
}

/// Report serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// JSON document with rows and failures.
    Json,
}

impl ReportFormat {
    /// File extension used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Task scheduling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One task at a time on the calling thread.
    #[default]
    Sequential,
    /// Tasks distributed over a dedicated worker pool.
    Parallel {
        /// Worker count; `None` uses one worker per logical CPU.
        max_threads: Option<usize>,
    },
}

/// Benchmark configuration.
///
/// # Example
///
/// ```no_run
/// use crunch_bench::core::config::{BenchConfig, ExecutionMode, ReportFormat};
/// use std::time::Duration;
///
/// let config = BenchConfig::for_directory("texts")
///     .with_algorithms(vec!["Zlib".into(), "LZ4".into()])
///     .with_execution(ExecutionMode::Parallel { max_threads: Some(4) })
///     .with_task_timeout(Duration::from_secs(30))
///     .with_report_format(ReportFormat::Json);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Where inputs come from.
    pub input_source: InputSource,
    /// Explicit report path; `None` derives one from the input source.
    pub output_destination: Option<PathBuf>,
    /// Algorithm subset to run; `None` runs every registered algorithm.
    pub algorithms: Option<Vec<String>>,
    /// Whether the report is written to disk.
    pub persist_report: bool,
    /// Report serialization format.
    pub report_format: ReportFormat,
    /// Task scheduling strategy.
    pub execution: ExecutionMode,
    /// Optional per-task time limit.
    pub task_timeout: Option<Duration>,
    /// Directory for compressed outputs; `None` discards them.
    pub artifact_dir: Option<PathBuf>,
}

impl BenchConfig {
    /// Creates a configuration scanning `dir` for `.txt` files.
    pub fn for_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            input_source: InputSource::directory(dir),
            ..Self::default()
        }
    }

    /// Creates a configuration over an explicit file list.
    pub fn for_files(files: Vec<PathBuf>) -> Self {
        Self {
            input_source: InputSource::Files(files),
            ..Self::default()
        }
    }

    /// Sets the input source.
    pub fn with_input_source(mut self, source: InputSource) -> Self {
        self.input_source = source;
        self
    }

    /// Replaces the accepted extensions of a directory source.
    pub fn with_extensions(mut self, exts: Vec<String>) -> Self {
        if let InputSource::Directory { extensions, .. } = &mut self.input_source {
            *extensions = exts
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect();
        }
        self
    }

    /// Enables recursive discovery for a directory source.
    pub fn with_recursive(mut self, value: bool) -> Self {
        if let InputSource::Directory { recursive, .. } = &mut self.input_source {
            *recursive = value;
        }
        self
    }

    /// Sets an explicit report destination.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_destination = Some(path.into());
        self
    }

    /// Restricts the run to the named algorithms.
    pub fn with_algorithms(mut self, names: Vec<String>) -> Self {
        self.algorithms = if names.is_empty() { None } else { Some(names) };
        self
    }

    /// Sets whether the report is written to disk.
    pub fn with_persist_report(mut self, persist: bool) -> Self {
        self.persist_report = persist;
        self
    }

    /// Sets the report format.
    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    /// Sets the scheduling strategy.
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Sets a per-task time limit.
    pub fn with_task_timeout(mut self, timeout: Duration) -> Self {
        self.task_timeout = Some(timeout);
        self
    }

    /// Saves each compressed output into `dir`.
    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = Some(dir.into());
        self
    }

    /// Returns the report path this configuration writes to.
    ///
    /// An explicit destination wins; otherwise the report lands next to the
    /// inputs as `compression_results.<ext>`.
    pub fn report_path(&self) -> PathBuf {
        match &self.output_destination {
            Some(path) => path.clone(),
            None => self.input_source.base_dir().join(format!(
                "{}.{}",
                DEFAULT_REPORT_STEM,
                self.report_format.extension()
            )),
        }
    }

    /// Returns whether `path` is this configuration's own report file.
    pub fn is_report_file(&self, path: &Path) -> bool {
        let report = self.report_path();
        if path == report {
            return true;
        }
        match (path.canonicalize(), report.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Checks the configuration for values the harness cannot honour.
    pub fn validate(&self) -> Result<()> {
        if let InputSource::Directory { extensions, .. } = &self.input_source {
            if extensions.is_empty() || extensions.iter().any(|e| e.is_empty()) {
                return Err(BenchError::invalid_config(
                    "extensions",
                    "at least one non-empty extension is required",
                ));
            }
        }
        if let InputSource::Files(files) = &self.input_source {
            if files.is_empty() {
                return Err(BenchError::invalid_config(
                    "input_source",
                    "explicit file list is empty",
                ));
            }
        }
        if let ExecutionMode::Parallel {
            max_threads: Some(0),
        } = self.execution
        {
            return Err(BenchError::invalid_config(
                "max_threads",
                "must be at least 1",
            ));
        }
        if self.task_timeout == Some(Duration::ZERO) {
            return Err(BenchError::invalid_config(
                "task_timeout",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_source: InputSource::default(),
            output_destination: None,
            algorithms: None,
            persist_report: true,
            report_format: ReportFormat::Csv,
            execution: ExecutionMode::Sequential,
            task_timeout: None,
            artifact_dir: None,
        }
    }
}
