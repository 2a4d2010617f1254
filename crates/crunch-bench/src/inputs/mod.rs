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

//! Benchmark inputs.
//!
//! Inputs are loaded once per run and shared read-only between tasks. An
//! input that was declared but could not be read is kept as
//! [`InputEntry::Unavailable`] so that its tasks are recorded as failed
//! instead of silently disappearing from the report.

pub mod discovery;
pub mod loader;

pub use discovery::discover_files;
pub use loader::{label_for, load_inputs};

use std::sync::Arc;

/// One immutable input buffer with its report label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPayload {
    label: String,
    bytes: Arc<[u8]>,
}

impl InputPayload {
    /// Creates a payload from a label and its bytes.
    pub fn new(label: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }

    /// Label used in reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw input bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the input bytes.
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Input length in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// An input as seen by the runner: either loaded, or known to be unreadable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEntry {
    /// Successfully loaded input.
    Loaded(InputPayload),
    /// Declared input that could not be read.
    Unavailable {
        /// Label the input would have carried.
        label: String,
        /// Why it could not be read.
        reason: String,
    },
}

impl InputEntry {
    /// Label of this entry.
    pub fn label(&self) -> &str {
        match self {
            InputEntry::Loaded(payload) => payload.label(),
            InputEntry::Unavailable { label, .. } => label,
        }
    }

    /// Returns the payload if the input was loaded.
    pub fn payload(&self) -> Option<&InputPayload> {
        match self {
            InputEntry::Loaded(payload) => Some(payload),
            InputEntry::Unavailable { .. } => None,
        }
    }
}

impl From<InputPayload> for InputEntry {
    fn from(payload: InputPayload) -> Self {
        InputEntry::Loaded(payload)
    }
}
