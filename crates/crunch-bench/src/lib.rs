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

//! Crunch compressor benchmark harness.
//!
//! Runs every registered compressor once over every input, measures output
//! size and wall-clock time, and reports the results as a table.
//!
//! ## Features
//!
//! - **Pluggable compressors**: anything implementing [`Compressor`], or a
//!   plain function wrapped in [`FnCompressor`]
//! - **Built-in backends**: Zlib, LZMA, Brotli, Gzip, Snappy, LZ4 and Zstd,
//!   each behind a cargo feature
//! - **Deterministic results**: input-major, algorithm-minor ordering in
//!   both sequential and parallel execution
//! - **Reports**: CSV, JSON and console output sharing one row schema
//!
//! ## Usage
//!
//! ```no_run
//! use crunch_bench::{BenchConfig, BenchmarkSession};
//!
//! let summary = BenchmarkSession::new(BenchConfig::for_directory("texts")).execute()?;
//! crunch_bench::reporters::print_table(&summary.results);
//! # Ok::<(), crunch_bench::BenchError>(())
//! ```

pub mod backends;
pub mod core;
pub mod error;
pub mod harness;
pub mod inputs;
pub mod reporters;
pub mod session;

pub use crate::core::{
    builtin_registry, BenchConfig, CompressionError, Compressor, CompressorRegistry,
    ExecutionMode, FnCompressor, InputSource, ReportFormat,
};
pub use error::{BenchError, Result};
pub use harness::{
    BenchmarkResult, BenchmarkRunner, FailureKind, ProgressObserver, Ratio, ResultSet,
    RunnerConfig, TaskFailure, TaskInfo, TaskOutcome,
};
pub use inputs::{InputEntry, InputPayload};
pub use session::{BenchmarkSession, RunPhase, RunSummary};
