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

//! Ordered compressor registry.
//!
//! The registry maps algorithm names to capabilities and preserves insertion
//! order, so every run over the same registry enumerates algorithms in the
//! same sequence. Names are unique and compared case-insensitively.

use crate::backends;
use crate::core::capability::Compressor;
use crate::error::{BenchError, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Process-wide registry of the compiled-in backends.
static BUILTIN_REGISTRY: Lazy<CompressorRegistry> = Lazy::new(CompressorRegistry::with_builtins);

/// Returns the shared registry holding every built-in backend.
///
/// The registry is initialized on first use and is immutable afterwards.
pub fn builtin_registry() -> &'static CompressorRegistry {
    &BUILTIN_REGISTRY
}

/// An insertion-ordered collection of compressors keyed by name.
///
/// # Example
///
/// ```
/// use crunch_bench::core::{CompressorRegistry, FnCompressor};
/// use std::sync::Arc;
///
/// let mut registry = CompressorRegistry::new();
/// registry.register(Arc::new(FnCompressor::new("Copy", |b| Ok(b.to_vec())))).unwrap();
/// assert!(registry.get("copy").is_some());
/// assert!(registry.register(Arc::new(FnCompressor::new("COPY", |b| Ok(b.to_vec())))).is_err());
/// ```
#[derive(Clone, Default)]
pub struct CompressorRegistry {
    entries: Vec<Arc<dyn Compressor>>,
}

impl CompressorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a registry holding every backend enabled at compile time.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for compressor in backends::builtin_compressors() {
            // Built-in names are distinct, so registration cannot fail.
            if let Err(e) = registry.register(compressor) {
                tracing::warn!("skipping built-in backend: {}", e);
            }
        }
        registry
    }

    /// Registers a compressor at the end of the iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::DuplicateAlgorithm`] if a compressor with the same
    /// name (ignoring ASCII case) is already registered.
    pub fn register(&mut self, compressor: Arc<dyn Compressor>) -> Result<()> {
        if self.get(compressor.name()).is_some() {
            return Err(BenchError::DuplicateAlgorithm {
                name: compressor.name().to_string(),
            });
        }
        self.entries.push(compressor);
        Ok(())
    }

    /// Builder-style registration.
    pub fn with(mut self, compressor: impl Compressor + 'static) -> Result<Self> {
        self.register(Arc::new(compressor))?;
        Ok(self)
    }

    /// Looks up a compressor by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Compressor>> {
        self.entries
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Returns the registered names in iteration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|c| c.name()).collect()
    }

    /// Iterates compressors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Compressor>> {
        self.entries.iter()
    }

    /// Number of registered compressors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the subset of this registry named in `names`.
    ///
    /// The subset keeps registry order regardless of the order of `names`,
    /// and repeated names are ignored. An empty `names` slice selects every
    /// compressor.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownAlgorithm`] for the first name that is not
    /// registered.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<CompressorRegistry> {
        if names.is_empty() {
            return Ok(self.clone());
        }

        for name in names {
            if self.get(name.as_ref()).is_none() {
                return Err(BenchError::UnknownAlgorithm {
                    name: name.as_ref().to_string(),
                    available: self.names().join(", "),
                });
            }
        }

        let entries = self
            .entries
            .iter()
            .filter(|c| {
                names
                    .iter()
                    .any(|n| c.name().eq_ignore_ascii_case(n.as_ref()))
            })
            .cloned()
            .collect();

        Ok(CompressorRegistry { entries })
    }
}

impl std::fmt::Debug for CompressorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<'a> IntoIterator for &'a CompressorRegistry {
    type Item = &'a Arc<dyn Compressor>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Compressor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capability::FnCompressor;

    fn copy(name: &str) -> FnCompressor {
        FnCompressor::new(name, |b| Ok(b.to_vec()))
    }

    fn sample() -> CompressorRegistry {
        CompressorRegistry::new()
            .with(copy("Alpha"))
            .and_then(|r| r.with(copy("Beta")))
            .and_then(|r| r.with(copy("Gamma")))
            .unwrap()
    }

    #[test]
    fn test_insertion_order() {
        let registry = sample();
        assert_eq!(registry.names(), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = sample();
        let err = registry.register(Arc::new(copy("beta"))).unwrap_err();
        assert_eq!(
            err,
            BenchError::DuplicateAlgorithm {
                name: "beta".to_string()
            }
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let registry = sample();
        assert_eq!(registry.get("GAMMA").map(|c| c.name()), Some("Gamma"));
        assert!(registry.get("delta").is_none());
    }

    #[test]
    fn test_select_keeps_registry_order() {
        let registry = sample();
        let subset = registry.select(&["gamma", "alpha", "Alpha"]).unwrap();
        assert_eq!(subset.names(), vec!["Alpha", "Gamma"]);
    }

    #[test]
    fn test_select_empty_means_all() {
        let registry = sample();
        let none: [&str; 0] = [];
        assert_eq!(registry.select(&none).unwrap().names(), registry.names());
    }

    #[test]
    fn test_select_unknown() {
        let registry = sample();
        match registry.select(&["Delta"]) {
            Err(BenchError::UnknownAlgorithm { name, available }) => {
                assert_eq!(name, "Delta");
                assert_eq!(available, "Alpha, Beta, Gamma");
            }
            other => panic!("expected UnknownAlgorithm, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_registry_is_shared() {
        let a = builtin_registry() as *const CompressorRegistry;
        let b = builtin_registry() as *const CompressorRegistry;
        assert_eq!(a, b);
        assert_eq!(
            builtin_registry().names(),
            CompressorRegistry::with_builtins().names()
        );
    }
}
