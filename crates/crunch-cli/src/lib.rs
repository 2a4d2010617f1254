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

//! Crunch CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **run**: Benchmark every selected compressor over every input and save
//!   the results table
//! - **list**: Show the registered compression algorithms
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use crunch_cli::cli::Commands;
//!
//! #[derive(Parser)]
//! struct Cli {
//!     #[command(subcommand)]
//!     command: Commands,
//! }
//!
//! let cli = Cli::parse_from(["crunch", "run", "--dir", "texts", "--parallel"]);
//! cli.command.execute()?;
//! # Ok::<(), crunch_cli::error::CliError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod progress;

pub use error::CliError;
