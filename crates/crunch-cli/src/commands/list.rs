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

//! `crunch list`.

use crate::error::CliError;
use crunch_bench::{builtin_registry, CompressorRegistry};

/// Formats the algorithm names of `registry`, one per line, in run order.
pub fn format_list(registry: &CompressorRegistry) -> String {
    registry
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>2}. {}\n", i + 1, name))
        .collect()
}

/// Prints the built-in algorithms.
pub fn list() -> Result<(), CliError> {
    print!("{}", format_list(builtin_registry()));
    Ok(())
}
