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

//! Core benchmark infrastructure.
//!
//! Provides the compressor capability, the ordered registry, single-pass
//! measurement, and centralized configuration.
//!
//! # Modules
//!
//! - `capability`: The `Compressor` trait and closure adapter
//! - `registry`: Insertion-ordered compressor registry
//! - `measurement`: Single-pass timing of one compressor call
//! - `config`: Centralized benchmark configuration

pub mod capability;
pub mod config;
pub mod measurement;
pub mod registry;

pub use capability::{CompressFn, CompressionError, Compressor, FnCompressor};
pub use config::{BenchConfig, ExecutionMode, InputSource, ReportFormat, DEFAULT_EXTENSION};
pub use measurement::{measure_once, Measurement};
pub use registry::{builtin_registry, CompressorRegistry};
