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

//! Benchmark commands: `run` and `list`.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand, ValueEnum};
use crunch_bench::{BenchConfig, ExecutionMode, InputSource, ReportFormat};
use std::path::PathBuf;
use std::time::Duration;

/// Benchmark commands.
///
/// # Commands
///
/// - **Run**: Benchmark every selected compressor over every input
/// - **List**: Show the registered compressors
#[derive(Subcommand)]
pub enum BenchCommands {
    /// Benchmark compressors over a set of inputs
    ///
    /// Compresses every input once with every selected algorithm, prints one
    /// line per result, a results table and a summary, and saves the table
    /// as a CSV (or JSON) report.
    Run(RunArgs),

    /// List registered compression algorithms
    ///
    /// Prints the algorithm names in the order they run.
    List,
}

impl BenchCommands {
    /// Execute the benchmark command.
    ///
    /// # Errors
    ///
    /// Returns `Err` on invalid arguments or a fatal benchmark error.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BenchCommands::Run(args) => commands::run(&args),
            BenchCommands::List => commands::list(),
        }
    }
}

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Arguments of `crunch run`.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Input files (overrides directory discovery)
    #[arg(value_name = "FILE", conflicts_with = "dir")]
    pub files: Vec<PathBuf>,

    /// Directory to scan for inputs (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// File extension to include (repeatable)
    #[arg(short, long = "ext", value_name = "EXT", default_value = "txt")]
    pub extensions: Vec<String>,

    /// Scan subdirectories too
    #[arg(short, long)]
    pub recursive: bool,

    /// Comma-separated algorithm names (defaults to all)
    #[arg(short, long, value_delimiter = ',', value_name = "NAMES")]
    pub algorithms: Vec<String>,

    /// Report file path (defaults to compression_results.<format> next to the inputs)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not write a report file
    #[arg(long, conflicts_with = "output")]
    pub no_save: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Run tasks in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker thread cap (implies --parallel)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Per-task timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Directory to save compressed outputs in
    #[arg(long, value_name = "DIR")]
    pub artifacts: Option<PathBuf>,

    /// Suppress per-result lines
    #[arg(short, long)]
    pub quiet: bool,
}

impl RunArgs {
    /// Builds the benchmark configuration these arguments describe.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for a zero thread count or zero
    /// timeout.
    pub fn to_config(&self) -> Result<BenchConfig, CliError> {
        if self.threads == Some(0) {
            return Err(CliError::invalid_argument("--threads", "must be at least 1"));
        }
        if self.timeout_ms == Some(0) {
            return Err(CliError::invalid_argument(
                "--timeout-ms",
                "must be greater than zero",
            ));
        }

        let source = if self.files.is_empty() {
            InputSource::directory(self.dir.clone().unwrap_or_else(|| PathBuf::from(".")))
        } else {
            InputSource::Files(self.files.clone())
        };

        let execution = if self.parallel || self.threads.is_some() {
            ExecutionMode::Parallel {
                max_threads: self.threads,
            }
        } else {
            ExecutionMode::Sequential
        };

        let mut config = BenchConfig::default()
            .with_input_source(source)
            .with_extensions(self.extensions.clone())
            .with_recursive(self.recursive)
            .with_algorithms(self.algorithms.clone())
            .with_persist_report(!self.no_save)
            .with_report_format(self.format.into())
            .with_execution(execution);

        if let Some(path) = &self.output {
            config = config.with_output(path);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_task_timeout(Duration::from_millis(ms));
        }
        if let Some(dir) = &self.artifacts {
            config = config.with_artifact_dir(dir);
        }

        Ok(config)
    }
}
