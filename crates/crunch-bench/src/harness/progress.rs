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

//! Progress notifications.
//!
//! Observers are called outside the timed region of every task.

use crate::harness::results::{ResultSet, TaskOutcome};

/// Describes the task a notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskInfo<'a> {
    /// Position in enumeration order.
    pub index: usize,
    /// Number of tasks in the run.
    pub total: usize,
    /// Input label.
    pub source_label: &'a str,
    /// Compressor name.
    pub algorithm_name: &'a str,
    /// Input length, if the input was loaded.
    pub input_size: Option<usize>,
}

/// Receives progress events from a [`BenchmarkRunner`](crate::harness::BenchmarkRunner).
///
/// In parallel mode the task callbacks arrive from worker threads in no
/// particular order.
pub trait ProgressObserver: Send + Sync {
    /// Called once before any task runs.
    fn on_run_start(&self, _total_tasks: usize) {}

    /// Called before a task's timed region.
    fn on_task_start(&self, _task: &TaskInfo<'_>) {}

    /// Called after a task's timed region.
    fn on_task_finish(&self, _task: &TaskInfo<'_>, _outcome: &TaskOutcome) {}

    /// Called once after every task has finished.
    fn on_run_finish(&self, _results: &ResultSet) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
