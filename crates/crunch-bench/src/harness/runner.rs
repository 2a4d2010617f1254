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

//! Benchmark runner: enumerates and executes every (input, algorithm) task.

use crate::core::{BenchConfig, CompressorRegistry, ExecutionMode};
use crate::error::{BenchError, Result};
use crate::harness::artifacts::save_artifact;
use crate::harness::progress::{NoProgress, ProgressObserver};
use crate::harness::results::{ResultSet, TaskOutcome};
use crate::harness::task::BenchmarkTask;
use crate::inputs::{InputEntry, InputPayload};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Execution settings for a [`BenchmarkRunner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Sequential or parallel scheduling.
    pub execution: ExecutionMode,
    /// Per-task timeout; `None` waits indefinitely.
    pub task_timeout: Option<Duration>,
    /// Directory for compressed outputs; `None` discards them.
    pub artifact_dir: Option<PathBuf>,
}

impl From<&BenchConfig> for RunnerConfig {
    fn from(config: &BenchConfig) -> Self {
        Self {
            execution: config.execution,
            task_timeout: config.task_timeout,
            artifact_dir: config.artifact_dir.clone(),
        }
    }
}

/// Runs every registered compressor over every input, once.
///
/// Per-task failures are recorded in the [`ResultSet`] and never abort the
/// run. The result order is input-major, registry-minor in both execution
/// modes.
///
/// # Example
///
/// ```
/// use crunch_bench::core::{CompressorRegistry, FnCompressor};
/// use crunch_bench::harness::BenchmarkRunner;
/// use crunch_bench::inputs::InputPayload;
///
/// let registry = CompressorRegistry::new()
///     .with(FnCompressor::new("Copy", |b| Ok(b.to_vec())))
///     .unwrap();
/// let inputs = vec![InputPayload::new("hello", b"hello".to_vec())];
///
/// let results = BenchmarkRunner::sequential().run(&inputs, &registry).unwrap();
/// assert_eq!(results.completed_count(), 1);
/// ```
pub struct BenchmarkRunner {
    config: RunnerConfig,
    observer: Arc<dyn ProgressObserver>,
}

impl BenchmarkRunner {
    /// Creates a runner with the given settings.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            config,
            observer: Arc::new(NoProgress),
        }
    }

    /// Creates a sequential runner with no timeout and no artifacts.
    pub fn sequential() -> Self {
        Self::new(RunnerConfig::default())
    }

    /// Attaches a progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Returns the runner settings.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Benchmarks loaded inputs against every compressor in `registry`.
    pub fn run(&self, inputs: &[InputPayload], registry: &CompressorRegistry) -> Result<ResultSet> {
        let entries: Vec<InputEntry> = inputs.iter().cloned().map(InputEntry::Loaded).collect();
        self.run_entries(&entries, registry)
    }

    /// Benchmarks input entries, including unavailable ones, against every
    /// compressor in `registry`.
    ///
    /// # Errors
    ///
    /// - [`BenchError::NoInputs`] if `entries` is empty
    /// - [`BenchError::NoAlgorithms`] if `registry` is empty
    /// - [`BenchError::ThreadPool`] if the parallel worker pool cannot start
    pub fn run_entries(
        &self,
        entries: &[InputEntry],
        registry: &CompressorRegistry,
    ) -> Result<ResultSet> {
        if entries.is_empty() {
            return Err(BenchError::NoInputs);
        }
        if registry.is_empty() {
            return Err(BenchError::NoAlgorithms);
        }

        let tasks = plan_tasks(entries, registry);
        let total = tasks.len();
        info!(
            inputs = entries.len(),
            algorithms = registry.len(),
            tasks = total,
            "starting benchmark run"
        );
        self.observer.on_run_start(total);

        let start = Instant::now();
        let outcomes: Vec<TaskOutcome> = match self.config.execution {
            ExecutionMode::Sequential => tasks
                .iter()
                .map(|task| self.execute_task(task, total))
                .collect(),
            ExecutionMode::Parallel { max_threads } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(max_threads.unwrap_or(0))
                    .thread_name(|i| format!("crunch-worker-{}", i))
                    .build()
                    .map_err(|e| BenchError::ThreadPool(e.to_string()))?;
                // Indexed collect keeps every outcome at its task's position.
                pool.install(|| {
                    tasks
                        .par_iter()
                        .map(|task| self.execute_task(task, total))
                        .collect()
                })
            }
        };

        let results: ResultSet = outcomes.into_iter().collect();
        info!(
            completed = results.completed_count(),
            failed = results.failure_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "benchmark run finished"
        );
        self.observer.on_run_finish(&results);
        Ok(results)
    }

    fn execute_task(&self, task: &BenchmarkTask<'_>, total: usize) -> TaskOutcome {
        let info = task.info(total);
        self.observer.on_task_start(&info);

        let execution = task.execute(self.config.task_timeout);

        match &execution.outcome {
            TaskOutcome::Completed(result) => debug!(
                source = %result.source_label,
                algorithm = %result.algorithm_name,
                input_size = result.input_size,
                output_size = result.output_size,
                elapsed_s = result.elapsed_seconds(),
                "task completed"
            ),
            TaskOutcome::Failed(failure) => warn!(
                source = %failure.source_label,
                algorithm = %failure.algorithm_name,
                kind = failure.kind.as_str(),
                "task failed: {}",
                failure.message
            ),
        }

        if let (Some(dir), Some(output)) = (&self.config.artifact_dir, &execution.output) {
            if let Err(e) = save_artifact(dir, task.source_label(), task.algorithm_name(), output) {
                warn!(
                    source = %task.source_label(),
                    algorithm = %task.algorithm_name(),
                    "failed to save compressed output: {}",
                    e
                );
            }
        }

        self.observer.on_task_finish(&info, &execution.outcome);
        execution.outcome
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::sequential()
    }
}

impl std::fmt::Debug for BenchmarkRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenchmarkRunner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Enumerates the cross-product of `entries` and `registry`, input-major.
pub fn plan_tasks<'a>(
    entries: &'a [InputEntry],
    registry: &'a CompressorRegistry,
) -> Vec<BenchmarkTask<'a>> {
    entries
        .iter()
        .flat_map(|entry| registry.iter().map(move |compressor| (entry, compressor)))
        .enumerate()
        .map(|(index, (entry, compressor))| BenchmarkTask::new(index, entry, compressor))
        .collect()
}
