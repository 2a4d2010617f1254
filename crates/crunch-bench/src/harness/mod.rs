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

//! Benchmark harness.
//!
//! # Modules
//!
//! - `task`: a single timed (input, algorithm) invocation
//! - `runner`: task enumeration and execution
//! - `results`: result records and the ordered result set
//! - `aggregator`: derived views over a result set
//! - `progress`: progress notifications
//! - `artifacts`: compressed output persistence

pub mod aggregator;
pub mod artifacts;
pub mod progress;
pub mod results;
pub mod runner;
pub mod task;

pub use aggregator::{
    aggregate_results, algorithm_totals, best_ratio_per_input, fastest_per_input,
    AggregatedResults, AlgorithmTotals,
};
pub use artifacts::{artifact_path, save_artifact};
pub use progress::{NoProgress, ProgressObserver, TaskInfo};
pub use results::{
    BenchmarkResult, FailureKind, Ratio, ResultSet, TaskFailure, TaskOutcome, NOT_APPLICABLE,
};
pub use runner::{plan_tasks, BenchmarkRunner, RunnerConfig};
pub use task::{BenchmarkTask, TaskExecution};
