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

//! Error types for benchmark operations.
//!
//! Per-task problems (an unreadable input, a failing compressor) never
//! surface here: they are absorbed into the [`ResultSet`](crate::harness::ResultSet)
//! as failure entries. `BenchError` covers the whole-run failures that stop a
//! benchmark or prevent its report from being recorded.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A declared input could not be read.
    #[error("Input '{label}' is unavailable: {message}")]
    InputUnavailable {
        /// Label of the input
        label: String,
        /// Underlying cause
        message: String,
    },

    /// The configured input directory does not exist or is not a directory.
    #[error("Input source '{}' does not exist or is not a directory", path.display())]
    InputSourceMissing {
        /// Directory that was requested
        path: PathBuf,
    },

    /// A compressor raised an error or produced no output.
    #[error("Compressor '{algorithm}' failed: {message}")]
    CompressionFailure {
        /// Algorithm name
        algorithm: String,
        /// Underlying cause
        message: String,
    },

    /// The report sink could not be written.
    #[error("Failed to write report to '{}': {message}", path.display())]
    ReportWriteFailure {
        /// Report destination
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// Input discovery found nothing to benchmark.
    #[error("No inputs found to benchmark")]
    NoInputs,

    /// The registry (or the selected subset of it) is empty.
    #[error("No compression algorithms registered")]
    NoAlgorithms,

    /// An algorithm name that is not in the registry was requested.
    #[error("Unknown algorithm '{name}' (available: {available})")]
    UnknownAlgorithm {
        /// Requested name
        name: String,
        /// Comma-separated list of registered names
        available: String,
    },

    /// Two compressors with the same name were registered.
    #[error("Algorithm '{name}' is already registered")]
    DuplicateAlgorithm {
        /// Conflicting name
        name: String,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The worker pool for parallel execution could not be built.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl BenchError {
    /// Create an input-unavailable error from an I/O failure.
    pub fn input_unavailable(label: impl Into<String>, source: &io::Error) -> Self {
        Self::InputUnavailable {
            label: label.into(),
            message: source.to_string(),
        }
    }

    /// Create a report write failure with destination context.
    pub fn report_write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ReportWriteFailure {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns whether this error ends the whole run.
    ///
    /// Input and compression failures are scoped to their tasks and are
    /// recorded rather than propagated.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            BenchError::InputUnavailable { .. } | BenchError::CompressionFailure { .. }
        )
    }
}
