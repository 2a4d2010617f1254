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

//! Benchmark reporters.
//!
//! Every reporter projects the same fixed row schema ([`REPORT_COLUMNS`])
//! from a [`ResultSet`](crate::harness::ResultSet).
//!
//! # Modules
//!
//! - `table`: row schema and projection
//! - `csv`: CSV export
//! - `json`: JSON export
//! - `console`: console output formatting

pub mod console;
pub mod csv;
pub mod json;
pub mod table;

use crate::core::ReportFormat;
use crate::error::Result;
use crate::harness::ResultSet;
use std::path::Path;

pub use self::console::{format_summary, format_table, print_summary, print_table};
pub use self::csv::{export_csv, to_csv_string, write_csv};
pub use self::json::{export_json, JsonReport};
pub use self::table::{build_rows, ReportRow, REPORT_COLUMNS};

/// Writes the report for `results` to `path` in the given format.
pub fn export_report(results: &ResultSet, path: &Path, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Csv => export_csv(results, path),
        ReportFormat::Json => export_json(results, path),
    }
}
