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

//! End-to-end benchmark session: load, run, aggregate, report.

use crate::core::{builtin_registry, BenchConfig, CompressorRegistry};
use crate::error::{BenchError, Result};
use crate::harness::{BenchmarkRunner, NoProgress, ProgressObserver, ResultSet, RunnerConfig};
use crate::inputs::load_inputs;
use crate::reporters::export_report;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Phase of a benchmark session.
///
/// A session moves `Idle → LoadingInputs → ExecutingTasks → Aggregated →
/// Reported` and returns to `Idle` once [`BenchmarkSession::execute`]
/// returns, whether it succeeded or not. `Reported` is skipped when report
/// persistence is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunPhase {
    /// No run in progress.
    #[default]
    Idle,
    /// Discovering and reading inputs.
    LoadingInputs,
    /// Running benchmark tasks.
    ExecutingTasks,
    /// All tasks finished; results collected.
    Aggregated,
    /// Report written.
    Reported,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunPhase::Idle => "idle",
            RunPhase::LoadingInputs => "loading-inputs",
            RunPhase::ExecutingTasks => "executing-tasks",
            RunPhase::Aggregated => "aggregated",
            RunPhase::Reported => "reported",
        };
        f.write_str(s)
    }
}

/// Outcome of a completed session.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Every task outcome, in enumeration order.
    pub results: ResultSet,
    /// Where the report was written, if it was persisted.
    pub report_path: Option<PathBuf>,
    /// Number of inputs benchmarked, readable or not.
    pub input_count: usize,
    /// Names of the algorithms that ran, in registry order.
    pub algorithms: Vec<String>,
    /// Last phase reached before returning to idle.
    pub final_phase: RunPhase,
}

/// Drives one benchmark run from configuration to persisted report.
///
/// # Example
///
/// ```no_run
/// use crunch_bench::core::BenchConfig;
/// use crunch_bench::session::BenchmarkSession;
///
/// let config = BenchConfig::for_directory("texts");
/// let summary = BenchmarkSession::new(config).execute()?;
/// println!("{} results", summary.results.completed_count());
/// # Ok::<(), crunch_bench::BenchError>(())
/// ```
pub struct BenchmarkSession {
    config: BenchConfig,
    registry: CompressorRegistry,
    observer: Arc<dyn ProgressObserver>,
    phase: RunPhase,
}

impl BenchmarkSession {
    /// Creates a session over the built-in compressors.
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            registry: builtin_registry().clone(),
            observer: Arc::new(NoProgress),
            phase: RunPhase::Idle,
        }
    }

    /// Replaces the compressor registry.
    pub fn with_registry(mut self, registry: CompressorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Attaches a progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Current phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Session configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs the session to completion.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, unknown algorithm names, a missing or
    /// empty input source, an empty algorithm selection, and report write
    /// failures. Per-task failures are recorded in the result set instead.
    pub fn execute(&mut self) -> Result<RunSummary> {
        let outcome = self.run_phases();
        self.transition(RunPhase::Idle);
        outcome
    }

    fn run_phases(&mut self) -> Result<RunSummary> {
        self.config.validate()?;

        let selected = match &self.config.algorithms {
            Some(names) => self.registry.select(names)?,
            None => self.registry.clone(),
        };
        if selected.is_empty() {
            return Err(BenchError::NoAlgorithms);
        }

        self.transition(RunPhase::LoadingInputs);
        let config = &self.config;
        let entries = load_inputs(&config.input_source, |path| config.is_report_file(path))?;

        self.transition(RunPhase::ExecutingTasks);
        let runner = BenchmarkRunner::new(RunnerConfig::from(&self.config))
            .with_observer(Arc::clone(&self.observer));
        let results = runner.run_entries(&entries, &selected)?;
        self.transition(RunPhase::Aggregated);

        let report_path = if self.config.persist_report {
            let path = self.config.report_path();
            export_report(&results, &path, self.config.report_format)?;
            info!("report written to {}", path.display());
            self.transition(RunPhase::Reported);
            Some(path)
        } else {
            None
        };

        Ok(RunSummary {
            results,
            report_path,
            input_count: entries.len(),
            algorithms: selected.names().into_iter().map(String::from).collect(),
            final_phase: self.phase,
        })
    }

    fn transition(&mut self, next: RunPhase) {
        tracing::debug!(from = %self.phase, to = %next, "session phase");
        self.phase = next;
    }
}

impl fmt::Debug for BenchmarkSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkSession")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
