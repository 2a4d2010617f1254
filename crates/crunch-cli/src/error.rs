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

//! Structured error types for the Crunch CLI.

use crunch_bench::BenchError;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust
/// use crunch_cli::error::CliError;
///
/// let err = CliError::invalid_argument("--threads", "must be at least 1");
/// assert!(err.to_string().contains("--threads"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A command-line argument has an unusable value.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidArgument {
        /// Flag or argument name
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The benchmark could not run or its report could not be written.
    #[error(transparent)]
    Bench(#[from] BenchError),
}

impl CliError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
