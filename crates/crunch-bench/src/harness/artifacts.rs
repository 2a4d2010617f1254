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

//! Compressed output persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path of the artifact for one (input, algorithm) pair:
/// `<dir>/<label>_compressed_<algorithm in lowercase>.bin`.
///
/// Labels of nested inputs (`a/en`) map to subdirectories of `dir`. Root,
/// `.` and `..` segments are dropped, so the path never leaves `dir`.
pub fn artifact_path(dir: &Path, source_label: &str, algorithm_name: &str) -> PathBuf {
    let segments: Vec<&str> = source_label
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != "." && *s != "..")
        .collect();
    let (stem, parents) = match segments.split_last() {
        Some((last, parents)) => (*last, parents),
        None => ("input", &[][..]),
    };

    let mut path = dir.to_path_buf();
    path.extend(parents);
    path.push(format!(
        "{}_compressed_{}.bin",
        stem,
        algorithm_name.to_lowercase()
    ));
    path
}

/// Writes compressed bytes to their artifact path, creating directories as
/// needed.
pub fn save_artifact(
    dir: &Path,
    source_label: &str,
    algorithm_name: &str,
    bytes: &[u8],
) -> io::Result<PathBuf> {
    let path = artifact_path(dir, source_label, algorithm_name);
    fs::create_dir_all(path.parent().unwrap_or(dir))?;
    fs::write(&path, bytes)?;
    Ok(path)
}
