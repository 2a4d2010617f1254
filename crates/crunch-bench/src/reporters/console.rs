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

//! Console reporter for benchmark results.

use crate::harness::{aggregate_results, best_ratio_per_input, ResultSet};
use crate::reporters::table::{build_rows, ReportRow, REPORT_COLUMNS};
use std::fmt::Write;

/// Formats `rows` as an aligned text table.
///
/// Times are shown with six decimals and ratios with two; the persisted
/// reports keep full precision.
pub fn format_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.source.clone(),
                row.algorithm.clone(),
                row.input_size.to_string(),
                row.output_size.to_string(),
                format!("{:.6}", row.compression_time_s),
                format!("{:.2}", row.compression_ratio),
            ]
        })
        .collect();

    let mut widths = REPORT_COLUMNS.map(str::len);
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = REPORT_COLUMNS
        .iter()
        .zip(widths)
        .map(|(name, w)| format!("{:<w$}", name, w = w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());
    let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(rule));

    for line in &cells {
        let formatted: Vec<String> = line
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                // Text columns left-aligned, numbers right-aligned.
                if i < 2 {
                    format!("{:<w$}", cell, w = w)
                } else {
                    format!("{:>w$}", cell, w = w)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", formatted.join("  ").trim_end());
    }

    out
}

/// Formats the run summary: counts, best ratio per input, and failures.
pub fn format_summary(results: &ResultSet) -> String {
    let agg = aggregate_results(results);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Tasks: {} ({} completed, {} failed)",
        agg.total_tasks, agg.completed, agg.failed
    );
    let _ = writeln!(
        out,
        "Total compression time: {:.6} s",
        agg.total_duration.as_secs_f64()
    );

    let best = best_ratio_per_input(results);
    if !best.is_empty() {
        let _ = writeln!(out, "\nBest ratio per input:");
        for r in best {
            let _ = writeln!(
                out,
                "  {}: {} ({:.2})",
                r.source_label, r.algorithm_name, r.ratio
            );
        }
    }

    if agg.failed > 0 {
        let _ = writeln!(out, "\nFailures:");
        for failure in results.failures() {
            let _ = writeln!(out, "  {}", failure);
        }
    }

    out
}

/// Prints the results table to stdout.
pub fn print_table(results: &ResultSet) {
    print!("{}", format_table(&build_rows(results)));
}

/// Prints the run summary to stdout.
pub fn print_summary(results: &ResultSet) {
    print!("{}", format_summary(results));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{BenchmarkResult, FailureKind, TaskFailure, TaskOutcome};
    use std::time::Duration;

    fn results() -> ResultSet {
        vec![
            TaskOutcome::Completed(BenchmarkResult::new(
                "english",
                "Zlib",
                1000,
                412,
                Duration::from_micros(1250),
            )),
            TaskOutcome::Completed(BenchmarkResult::new(
                "english",
                "LZ4",
                1000,
                600,
                Duration::from_micros(90),
            )),
            TaskOutcome::Completed(BenchmarkResult::new("empty", "Zlib", 0, 8, Duration::ZERO)),
            TaskOutcome::Failed(TaskFailure::new(
                "empty",
                "LZ4",
                FailureKind::CompressionFailure,
                "boom",
            )),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_format_table() {
        let table = format_table(&build_rows(&results()));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Source"));
        assert!(lines[0].ends_with("Compression Ratio"));
        assert!(lines[2].contains("0.001250"));
        assert!(lines[2].ends_with("0.41"));
        assert!(lines[4].ends_with("n/a"));
    }

    #[test]
    fn test_format_summary() {
        let summary = format_summary(&results());
        assert!(summary.contains("Tasks: 4 (3 completed, 1 failed)"));
        assert!(summary.contains("english: Zlib (0.41)"));
        assert!(!summary.contains("empty: "));
        assert!(summary.contains("empty / LZ4 [compression-failure]: boom"));
    }
}
