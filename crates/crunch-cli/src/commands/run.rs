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

//! `crunch run`.

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::progress::ConsoleProgress;
use colored::Colorize;
use crunch_bench::harness::algorithm_totals;
use crunch_bench::reporters::{print_summary, print_table};
use crunch_bench::BenchmarkSession;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs a benchmark session and prints its results.
///
/// # Errors
///
/// Returns `Err` on invalid arguments, a fatal benchmark error, or a report
/// that could not be written.
pub fn run(args: &RunArgs) -> Result<(), CliError> {
    let config = args.to_config()?;
    debug!("run configuration: {:?}", config);
    info!(
        "Benchmark session starting ({})",
        config.input_source.base_dir().display()
    );
    let progress = Arc::new(ConsoleProgress::new(!args.quiet));

    let summary = BenchmarkSession::new(config)
        .with_observer(progress)
        .execute()?;

    println!();
    println!("{}", "═".repeat(60).bright_blue());
    println!(
        "{} {} inputs × {} algorithms",
        "Compression Benchmark:".bright_blue().bold(),
        summary.input_count,
        summary.algorithms.len()
    );
    println!("{}", "═".repeat(60).bright_blue());
    print_table(&summary.results);

    println!();
    print_summary(&summary.results);

    println!();
    println!("{}", "Per algorithm:".bright_cyan());
    for totals in algorithm_totals(&summary.results) {
        println!(
            "  {:<8} {:>10} -> {:>10} bytes  {:.6} s  ratio {:.2}",
            totals.algorithm_name,
            totals.total_input_bytes,
            totals.total_output_bytes,
            totals.total_elapsed.as_secs_f64(),
            totals.overall_ratio
        );
    }

    info!(
        "Benchmark session finished: {} completed, {} failed",
        summary.results.completed_count(),
        summary.results.failure_count()
    );

    if let Some(path) = &summary.report_path {
        info!("Report written to {}", path.display());
        println!();
        println!(
            "{} {}",
            "Results saved to".green(),
            path.display().to_string().bright_white()
        );
    }

    Ok(())
}
