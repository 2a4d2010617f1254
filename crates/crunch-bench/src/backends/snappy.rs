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

//! Snappy backend (raw block format) via `snap`.

use crate::core::{CompressionError, Compressor};

/// Snappy raw block compression, without stream framing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnappyCompressor;

impl Compressor for SnappyCompressor {
    fn name(&self) -> &str {
        "Snappy"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        snap::raw::Encoder::new()
            .compress_vec(input)
            .map_err(|e| CompressionError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snappy_decodes_back() {
        let data = b"snappy snappy snappy".to_vec();
        let out = SnappyCompressor.compress(&data).unwrap();
        let decoded = snap::raw::Decoder::new().decompress_vec(&out).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_snappy_empty_input() {
        // The raw format still encodes the (zero) uncompressed length.
        assert_eq!(SnappyCompressor.compress(b"").unwrap(), vec![0]);
    }
}
