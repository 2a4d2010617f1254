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

//! End-to-end harness scenarios.
//!
//! Covers:
//! - Ratio and size accounting for known compressors
//! - Degenerate (empty) inputs
//! - Result ordering across inputs, algorithms and execution modes
//! - Failure isolation
//! - Report round-trips through the `csv` reader

use crunch_bench::core::{CompressionError, CompressorRegistry, ExecutionMode, FnCompressor};
use crunch_bench::harness::{
    best_ratio_per_input, BenchmarkRunner, FailureKind, Ratio, ResultSet, RunnerConfig,
};
use crunch_bench::inputs::InputPayload;
use crunch_bench::reporters::{build_rows, export_csv, to_csv_string, ReportRow, REPORT_COLUMNS};
use crunch_bench::{builtin_registry, BenchConfig, BenchmarkSession, ReportFormat};
use proptest::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

/// Run-length encoding into (count, byte) pairs.
fn rle(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::new();
    let mut iter = input.iter().peekable();
    while let Some(&byte) = iter.next() {
        let mut count: u8 = 1;
        while count < u8::MAX && iter.peek() == Some(&&byte) {
            iter.next();
            count += 1;
        }
        out.push(count);
        out.push(byte);
    }
    Ok(out)
}

fn rle_registry() -> CompressorRegistry {
    CompressorRegistry::new()
        .with(FnCompressor::new("RLE", rle))
        .unwrap()
}

fn two_algorithms() -> CompressorRegistry {
    CompressorRegistry::new()
        .with(FnCompressor::new("Copy", |b| Ok(b.to_vec())))
        .unwrap()
        .with(FnCompressor::new("RLE", rle))
        .unwrap()
}

fn key(set: &ResultSet) -> Vec<(String, String, u64, u64)> {
    set.completed()
        .map(|r| {
            (
                r.source_label.clone(),
                r.algorithm_name.clone(),
                r.input_size,
                r.output_size,
            )
        })
        .collect()
}

// ============================================================================
// Size and ratio accounting
// ============================================================================

#[test]
fn test_run_of_ten_compresses_to_one_token() {
    let inputs = vec![InputPayload::new("run", b"aaaaaaaaaa".to_vec())];
    let results = BenchmarkRunner::sequential()
        .run(&inputs, &rle_registry())
        .unwrap();

    let r = results.completed().next().unwrap();
    assert_eq!(r.input_size, 10);
    assert_eq!(r.output_size, 2);
    assert_eq!(r.ratio, Ratio::Value(0.2));
}

#[test]
fn test_empty_input_has_no_ratio() {
    let inputs = vec![InputPayload::new("empty", Vec::<u8>::new())];
    let results = BenchmarkRunner::sequential()
        .run(&inputs, &rle_registry())
        .unwrap();

    let r = results.completed().next().unwrap();
    assert_eq!(r.input_size, 0);
    assert_eq!(r.output_size, 0);
    assert_eq!(r.ratio, Ratio::NotApplicable);
}

#[test]
fn test_builtins_handle_empty_input() {
    let inputs = vec![InputPayload::new("empty", Vec::<u8>::new())];
    let results = BenchmarkRunner::sequential()
        .run(&inputs, builtin_registry())
        .unwrap();

    assert_eq!(results.len(), builtin_registry().len());
    assert!(results.all_succeeded());
    assert!(results.completed().all(|r| r.ratio == Ratio::NotApplicable));
}

#[test]
fn test_builtins_shrink_repetitive_text() {
    let text = "the quick brown fox jumps over the lazy dog\n".repeat(200);
    let inputs = vec![InputPayload::new("fox", text.into_bytes())];
    let results = BenchmarkRunner::sequential()
        .run(&inputs, builtin_registry())
        .unwrap();

    for r in results.completed() {
        let ratio = r.ratio.value().unwrap();
        assert!(ratio < 0.5, "{} ratio {} too high", r.algorithm_name, ratio);
    }
}

// ============================================================================
// Ordering and determinism
// ============================================================================

#[test]
fn test_rows_follow_input_then_algorithm_order() {
    let inputs = vec![
        InputPayload::new("in1", vec![7u8; 100]),
        InputPayload::new("in2", vec![9u8; 200]),
    ];
    let results = BenchmarkRunner::sequential()
        .run(&inputs, &two_algorithms())
        .unwrap();

    let order: Vec<(String, String)> = key(&results)
        .into_iter()
        .map(|(s, a, _, _)| (s, a))
        .collect();
    let expected: Vec<(String, String)> = [
        ("in1", "Copy"),
        ("in1", "RLE"),
        ("in2", "Copy"),
        ("in2", "RLE"),
    ]
    .iter()
    .map(|(s, a)| (s.to_string(), a.to_string()))
    .collect();
    assert_eq!(order, expected);
}

#[test]
fn test_sequential_runs_are_repeatable() {
    let inputs = vec![
        InputPayload::new("a", b"abababababab".to_vec()),
        InputPayload::new("b", b"zzzzzzzzzzzzzzzzzzzzzzzzz".to_vec()),
    ];
    let runner = BenchmarkRunner::sequential();
    let first = runner.run(&inputs, builtin_registry()).unwrap();
    let second = runner.run(&inputs, builtin_registry()).unwrap();
    assert_eq!(key(&first), key(&second));
}

#[test]
fn test_parallel_order_equals_sequential_order() {
    let inputs: Vec<InputPayload> = (0..6)
        .map(|i| InputPayload::new(format!("in{}", i), vec![i as u8; 500 * (i + 1)]))
        .collect();
    let parallel = BenchmarkRunner::new(RunnerConfig {
        execution: ExecutionMode::Parallel {
            max_threads: Some(3),
        },
        ..RunnerConfig::default()
    })
    .run(&inputs, builtin_registry())
    .unwrap();
    let sequential = BenchmarkRunner::sequential()
        .run(&inputs, builtin_registry())
        .unwrap();

    assert_eq!(key(&parallel), key(&sequential));
}

#[test]
fn test_parallel_order_ignores_completion_order() {
    // Earlier inputs sleep longer, so tasks finish in reverse order.
    let registry = CompressorRegistry::new()
        .with(FnCompressor::new("Delayed", |b| {
            std::thread::sleep(Duration::from_millis(60 - (b.len() / 10) as u64));
            Ok(b.to_vec())
        }))
        .unwrap()
        .with(FnCompressor::new("RLE", rle))
        .unwrap();
    let inputs: Vec<InputPayload> = (0..6)
        .map(|i| InputPayload::new(format!("in{}", i), vec![b'x'; 100 * (i + 1)]))
        .collect();

    let results = BenchmarkRunner::new(RunnerConfig {
        execution: ExecutionMode::Parallel {
            max_threads: Some(4),
        },
        ..RunnerConfig::default()
    })
    .run(&inputs, &registry)
    .unwrap();

    let order: Vec<(String, String)> = results
        .completed()
        .map(|r| (r.source_label.clone(), r.algorithm_name.clone()))
        .collect();
    let expected: Vec<(String, String)> = (0..6)
        .flat_map(|i| {
            ["Delayed", "RLE"]
                .into_iter()
                .map(move |a| (format!("in{}", i), a.to_string()))
        })
        .collect();
    assert_eq!(order, expected);
    assert_eq!(
        key(&results),
        key(&BenchmarkRunner::sequential().run(&inputs, &registry).unwrap())
    );
}

// ============================================================================
// Failure isolation
// ============================================================================

#[test]
fn test_failing_compressor_does_not_remove_other_results() {
    let registry = two_algorithms()
        .with(FnCompressor::new("AlwaysFails", |_| {
            Err(CompressionError::new("not today"))
        }))
        .unwrap()
        .with(FnCompressor::new("Panics", |_| panic!("kaboom")))
        .unwrap();
    let inputs = vec![
        InputPayload::new("x", b"xxxx".to_vec()),
        InputPayload::new("y", b"yyyy".to_vec()),
    ];
    let results = BenchmarkRunner::sequential().run(&inputs, &registry).unwrap();

    assert_eq!(results.len(), 8);
    assert_eq!(results.completed_count(), 4);
    assert_eq!(results.failure_count(), 4);
    assert!(results
        .failures()
        .all(|f| f.kind == FailureKind::CompressionFailure));
    assert!(results
        .failures()
        .any(|f| f.message.contains("kaboom")));
}

#[test]
fn test_slow_compressor_times_out() {
    let registry = CompressorRegistry::new()
        .with(FnCompressor::new("Slow", |b| {
            std::thread::sleep(Duration::from_millis(400));
            Ok(b.to_vec())
        }))
        .unwrap()
        .with(FnCompressor::new("Copy", |b| Ok(b.to_vec())))
        .unwrap();
    let runner = BenchmarkRunner::new(RunnerConfig {
        task_timeout: Some(Duration::from_millis(25)),
        ..RunnerConfig::default()
    });

    let results = runner
        .run(&[InputPayload::new("x", b"data".to_vec())], &registry)
        .unwrap();
    assert_eq!(
        results.get(0).and_then(|o| o.as_failure()).map(|f| f.kind),
        Some(FailureKind::TimedOut)
    );
    assert!(results.get(1).unwrap().is_success());
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_csv_round_trip_is_exact() {
    let inputs = vec![
        InputPayload::new("run", b"aaaaaaaaaa".to_vec()),
        InputPayload::new("empty", Vec::<u8>::new()),
    ];
    let results = BenchmarkRunner::sequential()
        .run(&inputs, &two_algorithms())
        .unwrap();
    let rows = build_rows(&results);

    let text = to_csv_string(&rows).unwrap();
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(headers, REPORT_COLUMNS);

    let parsed: Vec<ReportRow> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(parsed, rows);
}

#[test]
fn test_session_report_on_disk() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("english.txt"), "hello hello hello hello").unwrap();
    fs::write(dir.path().join("french.txt"), "bonjour bonjour bonjour").unwrap();
    fs::write(dir.path().join("notes.md"), "ignored").unwrap();

    let summary = BenchmarkSession::new(BenchConfig::for_directory(dir.path()))
        .execute()
        .unwrap();
    let path = summary.report_path.unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<ReportRow> = reader.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2 * builtin_registry().len());
    assert_eq!(rows[0].source, "english");
    assert_eq!(rows[0].algorithm, builtin_registry().names()[0]);
    assert_eq!(rows.last().unwrap().source, "french");
}

#[test]
fn test_recursive_session_keeps_inputs_with_shared_stems_apart() {
    let dir = tempdir().unwrap();
    let artifacts = tempdir().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("a").join("en.txt"), "aaaaaaaaaaaaaaaa").unwrap();
    fs::write(dir.path().join("b").join("en.txt"), "bbbbbbbb").unwrap();
    fs::write(dir.path().join("fr.txt"), "cccc").unwrap();
    fs::write(dir.path().join("fr.md"), "dd").unwrap();

    let config = BenchConfig::for_directory(dir.path())
        .with_extensions(vec!["txt".to_string(), "md".to_string()])
        .with_recursive(true)
        .with_persist_report(false)
        .with_artifact_dir(artifacts.path());
    let summary = BenchmarkSession::new(config)
        .with_registry(rle_registry())
        .execute()
        .unwrap();

    let labels: Vec<&str> = summary
        .results
        .completed()
        .map(|r| r.source_label.as_str())
        .collect();
    assert_eq!(labels, ["a/en", "b/en", "fr.md", "fr.txt"]);
    assert_eq!(best_ratio_per_input(&summary.results).len(), 4);

    let saved = walkdir::WalkDir::new(artifacts.path())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count();
    assert_eq!(saved, 4);
    assert!(artifacts
        .path()
        .join("a")
        .join("en_compressed_rle.bin")
        .is_file());
}

#[test]
fn test_json_session_includes_failures() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "aaaa").unwrap();
    let registry = rle_registry()
        .with(FnCompressor::new("Broken", |_| Err(CompressionError::new("nope"))))
        .unwrap();
    let config = BenchConfig::for_directory(dir.path())
        .with_report_format(ReportFormat::Json)
        .with_output(dir.path().join("out.json"));

    let summary = BenchmarkSession::new(config)
        .with_registry(registry)
        .execute()
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(summary.report_path.unwrap()).unwrap()).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["failures"][0]["algorithm_name"], "Broken");
}

#[test]
fn test_export_csv_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let results = BenchmarkRunner::sequential()
        .run(&[InputPayload::new("run", b"aaaa".to_vec())], &rle_registry())
        .unwrap();
    export_csv(&results, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("run,RLE,4,2,"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_ratio_is_output_over_input(input in proptest::collection::vec(any::<u8>(), 1..512)) {
        let results = BenchmarkRunner::sequential()
            .run(&[InputPayload::new("p", input.clone())], &two_algorithms())
            .unwrap();
        for r in results.completed() {
            prop_assert_eq!(r.input_size, input.len() as u64);
            prop_assert_eq!(r.ratio, Ratio::Value(r.output_size as f64 / r.input_size as f64));
        }
    }
}
