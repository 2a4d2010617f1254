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

//! Derived views over a [`ResultSet`].
//!
//! Every view is recomputed from the result set on demand; nothing here is
//! cached or carried across runs.

use crate::harness::results::{BenchmarkResult, Ratio, ResultSet};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Run-wide timing summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResults {
    /// Number of tasks executed.
    pub total_tasks: usize,
    /// Number of tasks that produced a result.
    pub completed: usize,
    /// Number of tasks that failed.
    pub failed: usize,
    /// Sum of the elapsed times of completed tasks.
    pub total_duration: Duration,
    /// Mean elapsed time of completed tasks.
    pub avg_duration: Duration,
    /// Fastest task, as `source/algorithm`.
    pub fastest: Option<String>,
    /// Slowest task, as `source/algorithm`.
    pub slowest: Option<String>,
}

/// Per-algorithm totals within one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmTotals {
    /// Algorithm name.
    pub algorithm_name: String,
    /// Inputs compressed successfully.
    pub inputs: usize,
    /// Tasks that failed.
    pub failures: usize,
    /// Sum of input sizes over successful tasks.
    pub total_input_bytes: u64,
    /// Sum of output sizes over successful tasks.
    pub total_output_bytes: u64,
    /// Sum of elapsed times over successful tasks.
    pub total_elapsed: Duration,
    /// `total_output_bytes / total_input_bytes`.
    pub overall_ratio: Ratio,
}

/// Summarises task counts and timings.
pub fn aggregate_results(results: &ResultSet) -> AggregatedResults {
    let completed: Vec<&BenchmarkResult> = results.completed().collect();
    let total_duration: Duration = completed.iter().map(|r| r.elapsed).sum();
    let avg_duration = if completed.is_empty() {
        Duration::ZERO
    } else {
        total_duration / completed.len() as u32
    };

    let task_name = |r: &&BenchmarkResult| format!("{}/{}", r.source_label, r.algorithm_name);
    let fastest = completed.iter().min_by_key(|r| r.elapsed).map(task_name);
    let slowest = completed.iter().max_by_key(|r| r.elapsed).map(task_name);

    AggregatedResults {
        total_tasks: results.len(),
        completed: completed.len(),
        failed: results.failure_count(),
        total_duration,
        avg_duration,
        fastest,
        slowest,
    }
}

/// Lowest-ratio result for each input, in input order.
///
/// Inputs whose ratio is not applicable (empty inputs) are skipped. Ties go
/// to the earlier algorithm in registry order.
pub fn best_ratio_per_input(results: &ResultSet) -> Vec<&BenchmarkResult> {
    pick_per_input(results, |candidate, best| {
        match (candidate.ratio.value(), best.ratio.value()) {
            (Some(c), Some(b)) => c < b,
            _ => false,
        }
    })
    .into_iter()
    .filter(|r| r.ratio.is_applicable())
    .collect()
}

/// Shortest-elapsed result for each input, in input order.
pub fn fastest_per_input(results: &ResultSet) -> Vec<&BenchmarkResult> {
    pick_per_input(results, |candidate, best| candidate.elapsed < best.elapsed)
}

/// Totals for each algorithm, in the order algorithms first appear.
pub fn algorithm_totals(results: &ResultSet) -> Vec<AlgorithmTotals> {
    let mut totals: Vec<AlgorithmTotals> = Vec::new();

    for outcome in results {
        let name = outcome.algorithm_name();
        let idx = match totals.iter().position(|t| t.algorithm_name == name) {
            Some(idx) => idx,
            None => {
                totals.push(AlgorithmTotals {
                    algorithm_name: name.to_string(),
                    inputs: 0,
                    failures: 0,
                    total_input_bytes: 0,
                    total_output_bytes: 0,
                    total_elapsed: Duration::ZERO,
                    overall_ratio: Ratio::NotApplicable,
                });
                totals.len() - 1
            }
        };

        let entry = &mut totals[idx];
        match outcome.as_result() {
            Some(r) => {
                entry.inputs += 1;
                entry.total_input_bytes += r.input_size;
                entry.total_output_bytes += r.output_size;
                entry.total_elapsed += r.elapsed;
            }
            None => entry.failures += 1,
        }
    }

    for entry in &mut totals {
        entry.overall_ratio = Ratio::compute(entry.total_input_bytes, entry.total_output_bytes);
    }

    totals
}

/// Keeps one result per source label, replacing it whenever `better` says a
/// later candidate beats the current pick.
fn pick_per_input<F>(results: &ResultSet, better: F) -> Vec<&BenchmarkResult>
where
    F: Fn(&BenchmarkResult, &BenchmarkResult) -> bool,
{
    let mut picks: Vec<&BenchmarkResult> = Vec::new();

    for result in results.completed() {
        match picks
            .iter_mut()
            .find(|p| p.source_label == result.source_label)
        {
            Some(current) => {
                if better(result, current) {
                    *current = result;
                }
            }
            None => picks.push(result),
        }
    }

    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::results::{FailureKind, TaskFailure, TaskOutcome};

    fn ok(label: &str, algo: &str, input: u64, output: u64, ms: u64) -> TaskOutcome {
        TaskOutcome::Completed(BenchmarkResult::new(
            label,
            algo,
            input,
            output,
            Duration::from_millis(ms),
        ))
    }

    fn failed(label: &str, algo: &str) -> TaskOutcome {
        TaskOutcome::Failed(TaskFailure::new(
            label,
            algo,
            FailureKind::CompressionFailure,
            "boom",
        ))
    }

    fn sample() -> ResultSet {
        vec![
            ok("en", "A", 100, 40, 5),
            ok("en", "B", 100, 30, 9),
            ok("fr", "A", 200, 50, 2),
            failed("fr", "B"),
            ok("empty", "A", 0, 8, 1),
            ok("empty", "B", 0, 4, 3),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_aggregate_results() {
        let agg = aggregate_results(&sample());
        assert_eq!(agg.total_tasks, 6);
        assert_eq!(agg.completed, 5);
        assert_eq!(agg.failed, 1);
        assert_eq!(agg.total_duration, Duration::from_millis(20));
        assert_eq!(agg.avg_duration, Duration::from_millis(4));
        assert_eq!(agg.fastest.as_deref(), Some("empty/A"));
        assert_eq!(agg.slowest.as_deref(), Some("en/B"));
    }

    #[test]
    fn test_aggregate_empty() {
        let agg = aggregate_results(&ResultSet::new());
        assert_eq!(agg.total_tasks, 0);
        assert_eq!(agg.avg_duration, Duration::ZERO);
        assert!(agg.fastest.is_none());
    }

    #[test]
    fn test_best_ratio_per_input() {
        let set = sample();
        let best: Vec<(&str, &str)> = best_ratio_per_input(&set)
            .iter()
            .map(|r| (r.source_label.as_str(), r.algorithm_name.as_str()))
            .collect();
        assert_eq!(best, vec![("en", "B"), ("fr", "A")]);
    }

    #[test]
    fn test_fastest_per_input() {
        let set = sample();
        let fastest: Vec<(&str, &str)> = fastest_per_input(&set)
            .iter()
            .map(|r| (r.source_label.as_str(), r.algorithm_name.as_str()))
            .collect();
        assert_eq!(fastest, vec![("en", "A"), ("fr", "A"), ("empty", "A")]);
    }

    #[test]
    fn test_algorithm_totals() {
        let totals = algorithm_totals(&sample());
        assert_eq!(totals.len(), 2);

        let a = &totals[0];
        assert_eq!(a.algorithm_name, "A");
        assert_eq!(a.inputs, 3);
        assert_eq!(a.failures, 0);
        assert_eq!(a.total_input_bytes, 300);
        assert_eq!(a.total_output_bytes, 98);
        assert_eq!(a.total_elapsed, Duration::from_millis(8));

        let b = &totals[1];
        assert_eq!(b.inputs, 2);
        assert_eq!(b.failures, 1);
        assert_eq!(b.overall_ratio, Ratio::Value(34.0 / 100.0));
    }
}
