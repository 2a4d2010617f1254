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

//! Input file discovery.

use crate::error::{BenchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects files under `dir` whose extension is one of `extensions`.
///
/// Only the top level is scanned unless `recursive` is set. Paths for which
/// `exclude` returns `true` (typically the run's own report file) are
/// skipped. The result is sorted by path, so repeated runs over the same
/// directory enumerate inputs identically.
///
/// # Errors
///
/// Returns [`BenchError::InputSourceMissing`] if `dir` is not a directory.
pub fn discover_files<F>(
    dir: &Path,
    extensions: &[String],
    recursive: bool,
    exclude: F,
) -> Result<Vec<PathBuf>>
where
    F: Fn(&Path) -> bool,
{
    if !dir.is_dir() {
        return Err(BenchError::InputSourceMissing {
            path: dir.to_path_buf(),
        });
    }

    let walker = if recursive {
        WalkDir::new(dir)
    } else {
        WalkDir::new(dir).max_depth(1)
    };

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable directory entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_extension(path, extensions))
        .filter(|path| !exclude(path))
        .collect();

    files.sort();
    tracing::debug!("discovered {} input files in {}", files.len(), dir.display());
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
