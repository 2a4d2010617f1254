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

//! Zstandard backend.

use crate::core::{CompressionError, Compressor};

/// Zstandard single-frame compression.
#[derive(Debug, Clone, Copy)]
pub struct ZstdCompressor {
    level: i32,
}

impl ZstdCompressor {
    /// Creates a Zstandard backend at the given level.
    pub fn with_level(level: i32) -> Self {
        Self { level }
    }
}

impl Default for ZstdCompressor {
    fn default() -> Self {
        Self {
            level: ::zstd::DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl Compressor for ZstdCompressor {
    fn name(&self) -> &str {
        "Zstd"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(::zstd::bulk::compress(input, self.level)?)
    }
}
