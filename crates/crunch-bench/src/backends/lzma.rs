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

//! LZMA backend producing `.xz` containers via `xz2`.

use crate::core::{CompressionError, Compressor};
use std::io::Write;
use xz2::write::XzEncoder;

/// Default preset, matching the `xz` command-line tool.
const DEFAULT_PRESET: u32 = 6;

/// LZMA2 in an `.xz` container.
#[derive(Debug, Clone, Copy)]
pub struct LzmaCompressor {
    preset: u32,
}

impl LzmaCompressor {
    /// Creates an LZMA backend with the given preset (0-9).
    pub fn with_preset(preset: u32) -> Self {
        Self {
            preset: preset.min(9),
        }
    }
}

impl Default for LzmaCompressor {
    fn default() -> Self {
        Self {
            preset: DEFAULT_PRESET,
        }
    }
}

impl Compressor for LzmaCompressor {
    fn name(&self) -> &str {
        "LZMA"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut encoder = XzEncoder::new(Vec::with_capacity(input.len() / 2), self.preset);
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }
}
