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

//! DEFLATE-based backends: zlib and gzip framing via `flate2`.

use crate::core::{CompressionError, Compressor};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use std::io::Write;

/// zlib-framed DEFLATE.
#[derive(Debug, Clone, Copy)]
pub struct ZlibCompressor {
    level: Compression,
}

impl ZlibCompressor {
    /// Creates a zlib backend at the given level (0-9).
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self {
            level: Compression::default(),
        }
    }
}

impl Compressor for ZlibCompressor {
    fn name(&self) -> &str {
        "Zlib"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(input.len() / 2), self.level);
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }
}

/// gzip-framed DEFLATE.
#[derive(Debug, Clone, Copy)]
pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    /// Creates a gzip backend at the given level (0-9).
    pub fn with_level(level: u32) -> Self {
        Self {
            level: Compression::new(level.min(9)),
        }
    }
}

impl Default for GzipCompressor {
    fn default() -> Self {
        Self {
            level: Compression::best(),
        }
    }
}

impl Compressor for GzipCompressor {
    fn name(&self) -> &str {
        "Gzip"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(input.len() / 2), self.level);
        encoder.write_all(input)?;
        Ok(encoder.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::{GzDecoder, ZlibDecoder};
    use std::io::Read;

    #[test]
    fn test_zlib_header() {
        let out = ZlibCompressor::default().compress(b"hello hello hello").unwrap();
        // CMF byte for deflate with a 32K window
        assert_eq!(out[0], 0x78);

        let mut decoded = Vec::new();
        ZlibDecoder::new(&out[..]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"hello hello hello");
    }

    #[test]
    fn test_gzip_magic() {
        let out = GzipCompressor::default().compress(b"payload").unwrap();
        assert_eq!(&out[..2], &[0x1f, 0x8b]);

        let mut decoded = Vec::new();
        GzDecoder::new(&out[..]).read_to_end(&mut decoded).unwrap();
        assert_eq!(decoded, b"payload");
    }

    #[test]
    fn test_level_is_clamped() {
        let c = ZlibCompressor::with_level(42);
        assert_eq!(c.level.level(), 9);
    }
}
