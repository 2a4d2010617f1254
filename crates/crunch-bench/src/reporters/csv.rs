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

//! CSV export.

use crate::error::{BenchError, Result};
use crate::harness::ResultSet;
use crate::reporters::table::{build_rows, ReportRow, REPORT_COLUMNS};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a header row followed by `rows` to `writer`.
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> ::csv::Result<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .quote_style(::csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(REPORT_COLUMNS)?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders `rows` as a CSV document.
pub fn to_csv_string(rows: &[ReportRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer).map_err(|e| BenchError::report_write("<memory>", e))?;
    String::from_utf8(buffer).map_err(|e| BenchError::report_write("<memory>", e))
}

/// Writes the report for `results` to `path` as CSV.
///
/// # Errors
///
/// Returns [`BenchError::ReportWriteFailure`] if the file cannot be created
/// or written.
pub fn export_csv(results: &ResultSet, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::report_write(path, e))?;
    write_csv(&build_rows(results), file).map_err(|e| BenchError::report_write(path, e))
}
