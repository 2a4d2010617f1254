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

//! The fixed report schema.

use crate::harness::{BenchmarkResult, Ratio, ResultSet};
use serde::{Deserialize, Serialize};

/// Report column headers, in order.
pub const REPORT_COLUMNS: [&str; 6] = [
    "Source",
    "Algorithm",
    "Input Size (bytes)",
    "Output Size (bytes)",
    "Compression Time (s)",
    "Compression Ratio",
];

/// One report row, projected from a [`BenchmarkResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Algorithm")]
    pub algorithm: String,
    #[serde(rename = "Input Size (bytes)")]
    pub input_size: u64,
    #[serde(rename = "Output Size (bytes)")]
    pub output_size: u64,
    #[serde(rename = "Compression Time (s)")]
    pub compression_time_s: f64,
    #[serde(rename = "Compression Ratio")]
    pub compression_ratio: Ratio,
}

impl ReportRow {
    /// Renders the row as text fields in [`REPORT_COLUMNS`] order.
    ///
    /// Floats use Rust's shortest round-trip formatting, so they parse back
    /// to the identical value.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.source.clone(),
            self.algorithm.clone(),
            self.input_size.to_string(),
            self.output_size.to_string(),
            self.compression_time_s.to_string(),
            self.compression_ratio.to_string(),
        ]
    }
}

impl From<&BenchmarkResult> for ReportRow {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            source: result.source_label.clone(),
            algorithm: result.algorithm_name.clone(),
            input_size: result.input_size,
            output_size: result.output_size,
            compression_time_s: result.elapsed_seconds(),
            compression_ratio: result.ratio,
        }
    }
}

/// Projects every successful result into a row, in result-set order.
pub fn build_rows(results: &ResultSet) -> Vec<ReportRow> {
    results.completed().map(ReportRow::from).collect()
}
