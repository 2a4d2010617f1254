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

//! Single-pass timing primitives.
//!
//! A benchmark task is timed exactly once: no warm-up and no repetition.
//! The timed region covers the compressor call and nothing else.

use crate::core::capability::{CompressionError, Compressor};
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Output of a single timed compressor invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Compressed bytes, or the compressor's error.
    pub output: Result<Vec<u8>, CompressionError>,
    /// Wall-clock time spent inside the compressor call.
    pub duration: Duration,
}

impl Measurement {
    /// Returns the duration in seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// Returns the output length if the call succeeded.
    pub fn output_len(&self) -> Option<usize> {
        self.output.as_ref().ok().map(Vec::len)
    }
}

/// Invokes `compressor` once on `input` between two monotonic timestamps.
///
/// A panic inside the compressor is caught and reported as a
/// [`CompressionError`] so that one misbehaving backend cannot take down
/// the whole run. The time until the unwind is still recorded.
///
/// # Example
///
/// ```
/// use crunch_bench::core::{measure_once, FnCompressor};
///
/// let copy = FnCompressor::new("Copy", |b| Ok(b.to_vec()));
/// let m = measure_once(&copy, b"payload");
/// assert_eq!(m.output_len(), Some(7));
/// ```
pub fn measure_once(compressor: &dyn Compressor, input: &[u8]) -> Measurement {
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| compressor.compress(input)));
    let duration = start.elapsed();

    let output = match outcome {
        Ok(result) => result,
        Err(payload) => Err(CompressionError::new(format!(
            "compressor panicked: {}",
            panic_message(payload.as_ref())
        ))),
    };

    Measurement { output, duration }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
