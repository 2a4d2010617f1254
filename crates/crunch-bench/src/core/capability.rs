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

//! The compressor capability.
//!
//! A compressor is an opaque, named transformation from a byte buffer to a
//! (hopefully smaller) byte buffer. The harness invokes every registered
//! capability the same way and never inspects its name beyond labelling
//! results with it.

use std::fmt;
use thiserror::Error;

/// Error returned by a compressor that could not produce output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompressionError {
    message: String,
}

impl CompressionError {
    /// Creates a compression error with the given cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the underlying cause.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for CompressionError {
    fn from(source: std::io::Error) -> Self {
        Self::new(source.to_string())
    }
}

/// A named compression capability.
///
/// Implementations must accept inputs of any length, including empty
/// buffers, and must be safe to call repeatedly from several threads. The
/// harness re-invokes `compress` on every task and does not memoize, so an
/// implementation should be deterministic for a single call. Internal library
/// state (lazy tables, reusable buffers) is allowed as long as it stays
/// invisible to callers.
///
/// # Examples
///
/// ```
/// use crunch_bench::core::{CompressionError, Compressor};
///
/// struct Identity;
///
/// impl Compressor for Identity {
///     fn name(&self) -> &str {
///         "Identity"
///     }
///
///     fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
///         Ok(input.to_vec())
///     }
/// }
///
/// assert_eq!(Identity.compress(b"abc").unwrap(), b"abc");
/// ```
pub trait Compressor: Send + Sync {
    /// Human-readable algorithm name, unique within a registry.
    fn name(&self) -> &str;

    /// Compresses `input` into a new buffer.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

impl fmt::Debug for dyn Compressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compressor")
            .field("name", &self.name())
            .finish()
    }
}

/// Boxed compression function accepted by [`FnCompressor`].
pub type CompressFn =
    Box<dyn Fn(&[u8]) -> Result<Vec<u8>, CompressionError> + Send + Sync + 'static>;

/// Adapts a plain function or closure into a [`Compressor`].
///
/// # Examples
///
/// ```
/// use crunch_bench::core::{Compressor, FnCompressor};
///
/// let truncate = FnCompressor::new("Truncate", |input| Ok(input.iter().take(2).copied().collect()));
/// assert_eq!(truncate.name(), "Truncate");
/// assert_eq!(truncate.compress(b"abcdef").unwrap(), b"ab");
/// ```
pub struct FnCompressor {
    name: String,
    func: CompressFn,
}

impl FnCompressor {
    /// Wraps `func` under the given algorithm name.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, CompressionError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }
}

impl Compressor for FnCompressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        (self.func)(input)
    }
}

impl fmt::Debug for FnCompressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCompressor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_compressor_delegates() {
        let rev = FnCompressor::new("Reverse", |input| {
            let mut out = input.to_vec();
            out.reverse();
            Ok(out)
        });
        assert_eq!(rev.name(), "Reverse");
        assert_eq!(rev.compress(b"abc").unwrap(), b"cba");
        assert!(rev.compress(b"").unwrap().is_empty());
    }

    #[test]
    fn test_fn_compressor_failure() {
        let failing = FnCompressor::new("Broken", |_| Err(CompressionError::new("no dictionary")));
        let err = failing.compress(b"data").unwrap_err();
        assert_eq!(err.message(), "no dictionary");
        assert_eq!(err.to_string(), "no dictionary");
    }

    #[test]
    fn test_compression_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "sink closed");
        let err: CompressionError = io_err.into();
        assert_eq!(err.message(), "sink closed");
    }

    #[test]
    fn test_compression_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CompressionError::new("bad window"));
        assert_eq!(err.to_string(), "bad window");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_debug_dyn_compressor() {
        let boxed: Box<dyn Compressor> = Box::new(FnCompressor::new("Copy", |i| Ok(i.to_vec())));
        let dbg = format!("{:?}", boxed);
        assert!(dbg.contains("Copy"));
    }
}
