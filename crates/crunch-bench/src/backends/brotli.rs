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

//! Brotli backend.

use crate::core::{CompressionError, Compressor};
use ::brotli::enc::BrotliEncoderParams;

/// Brotli with explicit quality and window size.
#[derive(Debug, Clone, Copy)]
pub struct BrotliCompressor {
    quality: i32,
    lgwin: i32,
}

impl BrotliCompressor {
    /// Creates a Brotli backend with the given quality (0-11) and window
    /// (10-24, log2 of the window size).
    pub fn new(quality: i32, lgwin: i32) -> Self {
        Self {
            quality: quality.clamp(0, 11),
            lgwin: lgwin.clamp(10, 24),
        }
    }
}

impl Default for BrotliCompressor {
    fn default() -> Self {
        Self::new(11, 22)
    }
}

impl Compressor for BrotliCompressor {
    fn name(&self) -> &str {
        "Brotli"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let params = BrotliEncoderParams {
            quality: self.quality,
            lgwin: self.lgwin,
            ..Default::default()
        };
        let mut reader = input;
        let mut output = Vec::with_capacity(input.len() / 2);
        ::brotli::BrotliCompress(&mut reader, &mut output, &params)?;
        Ok(output)
    }
}
