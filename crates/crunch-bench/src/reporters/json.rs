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

//! JSON export for benchmark reports.

use crate::error::{BenchError, Result};
use crate::harness::{
    aggregate_results, algorithm_totals, AggregatedResults, AlgorithmTotals, ResultSet,
    TaskFailure,
};
use crate::reporters::table::{build_rows, ReportRow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// JSON report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// RFC 3339 timestamp of report generation.
    pub generated_at: String,
    /// One row per successful task, in result-set order.
    pub rows: Vec<ReportRow>,
    /// Failed tasks, in result-set order.
    pub failures: Vec<TaskFailure>,
    /// Per-algorithm totals.
    pub totals: Vec<AlgorithmTotals>,
    /// Run-wide timing summary.
    pub summary: AggregatedResults,
}

impl JsonReport {
    /// Builds the report document for `results`, stamped with the current time.
    pub fn from_results(results: &ResultSet) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            rows: build_rows(results),
            failures: results.failures().cloned().collect(),
            totals: algorithm_totals(results),
            summary: aggregate_results(results),
        }
    }
}

/// Writes the report for `results` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`BenchError::ReportWriteFailure`] if serialization or the write
/// fails.
pub fn export_json(results: &ResultSet, path: &Path) -> Result<()> {
    let report = JsonReport::from_results(results);
    let json = serde_json::to_string_pretty(&report).map_err(|e| BenchError::report_write(path, e))?;

    fs::write(path, json).map_err(|e| BenchError::report_write(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{BenchmarkResult, FailureKind, Ratio, TaskOutcome};
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_json() {
        let results: ResultSet = vec![
            TaskOutcome::Completed(BenchmarkResult::new(
                "en",
                "Zlib",
                10,
                2,
                Duration::from_millis(1),
            )),
            TaskOutcome::Completed(BenchmarkResult::new("empty", "Zlib", 0, 8, Duration::ZERO)),
            TaskOutcome::Failed(TaskFailure::new(
                "en",
                "Bad",
                FailureKind::TimedOut,
                "late",
            )),
        ]
        .into_iter()
        .collect();

        let temp = NamedTempFile::new().unwrap();
        export_json(&results, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("\"Compression Ratio\": \"n/a\""));

        let report: JsonReport = serde_json::from_str(&content).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].compression_ratio, Ratio::Value(0.2));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind, FailureKind::TimedOut);
        assert_eq!(report.summary.total_tasks, 3);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }
}
