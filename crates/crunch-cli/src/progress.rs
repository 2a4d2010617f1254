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

//! Console progress reporting for benchmark runs.

use colored::Colorize;
use crunch_bench::harness::{ResultSet, TaskInfo, TaskOutcome};
use crunch_bench::ProgressObserver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Prints one line per finished task to stderr.
///
/// Counters are atomic so the observer can be shared with parallel workers.
#[derive(Debug)]
pub struct ConsoleProgress {
    total: AtomicUsize,
    processed: AtomicUsize,
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    verbose: bool,
    start_time: Instant,
}

impl ConsoleProgress {
    /// Creates a progress printer; when `verbose` is false only the final
    /// tally is printed.
    pub fn new(verbose: bool) -> Self {
        Self {
            total: AtomicUsize::new(0),
            processed: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            verbose,
            start_time: Instant::now(),
        }
    }

    /// Number of tasks finished so far.
    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    /// Number of tasks that succeeded so far.
    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::Relaxed)
    }

    /// Number of tasks that failed so far.
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed)
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_run_start(&self, total_tasks: usize) {
        self.total.store(total_tasks, Ordering::Relaxed);
    }

    fn on_task_finish(&self, task: &TaskInfo<'_>, outcome: &TaskOutcome) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        let status = if outcome.is_success() {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
            "✓".green().bold()
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
            "✗".red().bold()
        };

        if self.verbose {
            eprintln!(
                "{} [{}/{}] {}",
                status,
                processed,
                task.total,
                format_outcome(outcome)
            );
        }
    }

    fn on_run_finish(&self, _results: &ResultSet) {
        let elapsed = self.start_time.elapsed();
        eprintln!(
            "Progress: [{}/{}] {} succeeded, {} failed in {:.2} s",
            self.processed(),
            self.total.load(Ordering::Relaxed),
            self.succeeded(),
            self.failed(),
            elapsed.as_secs_f64()
        );
    }
}

/// Formats one task outcome as a single line.
///
/// Times show six decimals and ratios two.
pub fn format_outcome(outcome: &TaskOutcome) -> String {
    match outcome {
        TaskOutcome::Completed(r) => format!(
            "{} / {}: {} -> {} bytes, {:.6} s, ratio {:.2}",
            r.source_label,
            r.algorithm_name,
            r.input_size,
            r.output_size,
            r.elapsed_seconds(),
            r.ratio
        ),
        TaskOutcome::Failed(f) => format!(
            "{} / {}: {} ({})",
            f.source_label,
            f.algorithm_name,
            f.message,
            f.kind.as_str()
        ),
    }
}
