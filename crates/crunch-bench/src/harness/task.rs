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

//! A single (input, compressor) benchmark task.

use crate::core::{measure_once, Compressor, Measurement};
use crate::harness::progress::TaskInfo;
use crate::harness::results::{BenchmarkResult, FailureKind, TaskFailure, TaskOutcome};
use crate::inputs::{InputEntry, InputPayload};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// One unit of work: run `compressor` once over `input`.
#[derive(Debug, Clone)]
pub struct BenchmarkTask<'a> {
    /// Position in (input, algorithm) enumeration order.
    pub index: usize,
    /// The input to compress.
    pub input: &'a InputEntry,
    /// The compressor to invoke.
    pub compressor: &'a Arc<dyn Compressor>,
}

/// What executing a task produced.
#[derive(Debug, Clone)]
pub struct TaskExecution {
    /// Result or failure marker.
    pub outcome: TaskOutcome,
    /// Compressed bytes, kept only for successful tasks.
    pub output: Option<Vec<u8>>,
}

impl<'a> BenchmarkTask<'a> {
    /// Creates a task.
    pub fn new(index: usize, input: &'a InputEntry, compressor: &'a Arc<dyn Compressor>) -> Self {
        Self {
            index,
            input,
            compressor,
        }
    }

    /// Label of the task's input.
    pub fn source_label(&self) -> &str {
        self.input.label()
    }

    /// Name of the task's compressor.
    pub fn algorithm_name(&self) -> &str {
        self.compressor.name()
    }

    /// Progress descriptor for this task.
    pub fn info(&self, total: usize) -> TaskInfo<'_> {
        TaskInfo {
            index: self.index,
            total,
            source_label: self.source_label(),
            algorithm_name: self.algorithm_name(),
            input_size: self.input.payload().map(InputPayload::size),
        }
    }

    /// Executes the task exactly once.
    ///
    /// With a timeout the compressor runs on its own thread; if it does not
    /// answer in time the task is recorded as [`FailureKind::TimedOut`] and
    /// the thread is left to finish on its own.
    pub fn execute(&self, timeout: Option<Duration>) -> TaskExecution {
        let payload = match self.input {
            InputEntry::Loaded(payload) => payload,
            InputEntry::Unavailable { reason, .. } => {
                return self.failed(FailureKind::InputUnavailable, reason.clone());
            }
        };

        let measurement = match timeout {
            None => measure_once(self.compressor.as_ref(), payload.bytes()),
            Some(limit) => match self.measure_with_timeout(payload, limit) {
                Ok(m) => m,
                Err(failure) => return failure,
            },
        };

        self.finish(payload, measurement)
    }

    fn measure_with_timeout(
        &self,
        payload: &InputPayload,
        limit: Duration,
    ) -> Result<Measurement, TaskExecution> {
        let (tx, rx) = mpsc::channel();
        let compressor = Arc::clone(self.compressor);
        let bytes = payload.shared_bytes();

        let spawned = thread::Builder::new()
            .name(format!("crunch-task-{}", self.index))
            .spawn(move || {
                let _ = tx.send(measure_once(compressor.as_ref(), &bytes));
            });
        if let Err(e) = spawned {
            return Err(self.failed(
                FailureKind::CompressionFailure,
                format!("failed to spawn task thread: {}", e),
            ));
        }

        match rx.recv_timeout(limit) {
            Ok(measurement) => Ok(measurement),
            Err(RecvTimeoutError::Timeout) => Err(self.failed(
                FailureKind::TimedOut,
                format!("exceeded timeout of {} ms", limit.as_millis()),
            )),
            Err(RecvTimeoutError::Disconnected) => Err(self.failed(
                FailureKind::CompressionFailure,
                "task thread exited without a result",
            )),
        }
    }

    fn finish(&self, payload: &InputPayload, measurement: Measurement) -> TaskExecution {
        match measurement.output {
            Ok(output) if output.is_empty() && !payload.is_empty() => {
                self.failed(FailureKind::CompressionFailure, "produced no output")
            }
            Ok(output) => {
                let result = BenchmarkResult::new(
                    payload.label(),
                    self.algorithm_name(),
                    payload.size() as u64,
                    output.len() as u64,
                    measurement.duration,
                );
                TaskExecution {
                    outcome: TaskOutcome::Completed(result),
                    output: Some(output),
                }
            }
            Err(e) => self.failed(FailureKind::CompressionFailure, e.message()),
        }
    }

    fn failed(&self, kind: FailureKind, message: impl Into<String>) -> TaskExecution {
        TaskExecution {
            outcome: TaskOutcome::Failed(TaskFailure::new(
                self.source_label(),
                self.algorithm_name(),
                kind,
                message,
            )),
            output: None,
        }
    }
}
