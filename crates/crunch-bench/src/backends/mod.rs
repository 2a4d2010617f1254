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

//! Built-in compression backends.
//!
//! Each backend wraps one general-purpose lossless compressor behind the
//! [`Compressor`] capability. Backends are gated by cargo features (all
//! enabled by default) and register in a fixed order.
//!
//! | Name | Crate | Output |
//! |------|-------|--------|
//! | `Zlib` | flate2 | zlib stream, default level |
//! | `LZMA` | xz2 | .xz container, preset 6 |
//! | `Brotli` | brotli | quality 11, window 22 |
//! | `Gzip` | flate2 | gzip member, level 9 |
//! | `Snappy` | snap | raw block |
//! | `LZ4` | lz4_flex | LZ4 frame |
//! | `Zstd` | zstd | zstd frame, level 3 |

#[cfg(feature = "brotli")]
mod brotli;
#[cfg(feature = "deflate")]
mod deflate;
#[cfg(feature = "lz4")]
mod lz4;
#[cfg(feature = "lzma")]
mod lzma;
#[cfg(feature = "snappy")]
mod snappy;
#[cfg(feature = "zstd")]
mod zstd;

use crate::core::Compressor;
use std::sync::Arc;

#[cfg(feature = "brotli")]
pub use self::brotli::BrotliCompressor;
#[cfg(feature = "deflate")]
pub use self::deflate::{GzipCompressor, ZlibCompressor};
#[cfg(feature = "lz4")]
pub use self::lz4::Lz4Compressor;
#[cfg(feature = "lzma")]
pub use self::lzma::LzmaCompressor;
#[cfg(feature = "snappy")]
pub use self::snappy::SnappyCompressor;
#[cfg(feature = "zstd")]
pub use self::zstd::ZstdCompressor;

/// Returns one instance of every enabled backend, in registration order.
pub fn builtin_compressors() -> Vec<Arc<dyn Compressor>> {
    #[allow(unused_mut)]
    let mut compressors: Vec<Arc<dyn Compressor>> = Vec::new();

    #[cfg(feature = "deflate")]
    compressors.push(Arc::new(ZlibCompressor::default()));
    #[cfg(feature = "lzma")]
    compressors.push(Arc::new(LzmaCompressor::default()));
    #[cfg(feature = "brotli")]
    compressors.push(Arc::new(BrotliCompressor::default()));
    #[cfg(feature = "deflate")]
    compressors.push(Arc::new(GzipCompressor::default()));
    #[cfg(feature = "snappy")]
    compressors.push(Arc::new(SnappyCompressor));
    #[cfg(feature = "lz4")]
    compressors.push(Arc::new(Lz4Compressor));
    #[cfg(feature = "zstd")]
    compressors.push(Arc::new(ZstdCompressor::default()));

    compressors
}
