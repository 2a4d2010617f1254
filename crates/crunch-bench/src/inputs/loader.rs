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

//! Input loading.

use crate::core::config::InputSource;
use crate::error::{BenchError, Result};
use crate::inputs::discovery::discover_files;
use crate::inputs::{InputEntry, InputPayload};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Derives a report label from a file path (its stem).
pub fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Assigns every path a distinct report label.
///
/// The stem is used when no other path shares it. Otherwise the label grows
/// to the path relative to `root` without its extension (`a/en`), then with
/// it (`fr.md`). Labels always use `/` as separator. A clash that survives
/// all of that (the same file listed twice) gets a `#n` suffix.
pub fn assign_labels(paths: &[PathBuf], root: Option<&Path>) -> Vec<String> {
    let candidates: Vec<[String; 3]> = paths
        .iter()
        .map(|path| label_candidates(path, root))
        .collect();

    let mut labels: Vec<String> = candidates
        .iter()
        .enumerate()
        .map(|(i, own)| {
            (0..own.len())
                .find(|&level| {
                    candidates
                        .iter()
                        .enumerate()
                        .all(|(j, other)| j == i || other[level] != own[level])
                })
                .map_or_else(|| own[2].clone(), |level| own[level].clone())
        })
        .collect();

    let mut taken = HashSet::with_capacity(labels.len());
    for label in &mut labels {
        if !taken.insert(label.clone()) {
            let mut n = 2;
            while taken.contains(&format!("{}#{}", label, n)) {
                n += 1;
            }
            *label = format!("{}#{}", label, n);
            taken.insert(label.clone());
        }
    }
    labels
}

fn label_candidates(path: &Path, root: Option<&Path>) -> [String; 3] {
    let stem = label_for(path);
    let relative = root
        .and_then(|r| path.strip_prefix(r).ok())
        .unwrap_or(path);
    let with_ext = join_components(relative);
    if with_ext.is_empty() {
        return [stem.clone(), stem.clone(), stem];
    }
    let without_ext = join_components(&relative.with_extension(""));
    [stem, without_ext, with_ext]
}

fn join_components(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Loads every input declared by `source`, in a stable order.
///
/// Files that cannot be read are returned as [`InputEntry::Unavailable`];
/// they do not fail the load. Paths for which `exclude` returns `true` are
/// skipped during directory discovery.
///
/// # Errors
///
/// - [`BenchError::InputSourceMissing`] if a directory source does not exist
/// - [`BenchError::NoInputs`] if the source yields no files at all
pub fn load_inputs<F>(source: &InputSource, exclude: F) -> Result<Vec<InputEntry>>
where
    F: Fn(&Path) -> bool,
{
    let (paths, root): (Vec<PathBuf>, Option<&Path>) = match source {
        InputSource::Directory {
            path,
            extensions,
            recursive,
        } => (
            discover_files(path, extensions, *recursive, exclude)?,
            Some(path.as_path()),
        ),
        InputSource::Files(files) => (files.clone(), None),
    };

    if paths.is_empty() {
        return Err(BenchError::NoInputs);
    }

    let labels = assign_labels(&paths, root);
    Ok(paths
        .iter()
        .zip(labels)
        .map(|(path, label)| load_one(path, label))
        .collect())
}

fn load_one(path: &Path, label: String) -> InputEntry {
    match fs::read(path) {
        Ok(bytes) => {
            tracing::debug!("loaded input '{}' ({} bytes)", label, bytes.len());
            InputEntry::Loaded(InputPayload::new(label, bytes))
        }
        Err(e) => {
            let err = BenchError::input_unavailable(&label, &e);
            tracing::warn!("{} ({})", err, path.display());
            InputEntry::Unavailable {
                label,
                reason: e.to_string(),
            }
        }
    }
}
