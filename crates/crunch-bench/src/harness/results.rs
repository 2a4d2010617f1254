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

//! Result records and the ordered result set.

use crate::error::BenchError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Sentinel written in place of a ratio that cannot be computed.
pub const NOT_APPLICABLE: &str = "n/a";

/// Compression ratio: output size divided by input size (lower is better).
///
/// A zero-length input has no meaningful ratio; it is flagged as
/// [`Ratio::NotApplicable`] instead of being divided by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    /// `output_size / input_size`.
    Value(f64),
    /// The input was empty.
    NotApplicable,
}

impl Ratio {
    /// Computes the ratio for the given sizes.
    ///
    /// # Example
    ///
    /// ```
    /// use crunch_bench::harness::Ratio;
    ///
    /// assert_eq!(Ratio::compute(10, 2), Ratio::Value(0.2));
    /// assert_eq!(Ratio::compute(0, 20), Ratio::NotApplicable);
    /// ```
    pub fn compute(input_size: u64, output_size: u64) -> Self {
        if input_size == 0 {
            Ratio::NotApplicable
        } else {
            Ratio::Value(output_size as f64 / input_size as f64)
        }
    }

    /// Returns the numeric ratio, if applicable.
    pub fn value(&self) -> Option<f64> {
        match self {
            Ratio::Value(v) => Some(*v),
            Ratio::NotApplicable => None,
        }
    }

    /// Returns whether a numeric ratio is present.
    pub fn is_applicable(&self) -> bool {
        matches!(self, Ratio::Value(_))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Value(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Ratio::NotApplicable => write!(f, "{:>1$}", NOT_APPLICABLE, f.width().unwrap_or(0)),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Ratio::Value(v) => serializer.serialize_f64(*v),
            Ratio::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatioVisitor;

        impl Visitor<'_> for RatioVisitor {
            type Value = Ratio;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a number or \"{}\"", NOT_APPLICABLE)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Ratio, E> {
                Ok(Ratio::Value(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Ratio, E> {
                Ok(Ratio::Value(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Ratio, E> {
                Ok(Ratio::Value(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Ratio, E> {
                if v == NOT_APPLICABLE {
                    return Ok(Ratio::NotApplicable);
                }
                v.parse::<f64>()
                    .map(Ratio::Value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(RatioVisitor)
    }
}

/// Metrics from one successful task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Label of the input.
    pub source_label: String,
    /// Name of the compressor.
    pub algorithm_name: String,
    /// Input length in bytes.
    pub input_size: u64,
    /// Compressed length in bytes.
    pub output_size: u64,
    /// Wall-clock time of the single compressor call.
    pub elapsed: Duration,
    /// `output_size / input_size`, or not applicable for empty inputs.
    pub ratio: Ratio,
}

impl BenchmarkResult {
    /// Builds a result, deriving the ratio from the sizes.
    pub fn new(
        source_label: impl Into<String>,
        algorithm_name: impl Into<String>,
        input_size: u64,
        output_size: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            source_label: source_label.into(),
            algorithm_name: algorithm_name.into(),
            input_size,
            output_size,
            elapsed,
            ratio: Ratio::compute(input_size, output_size),
        }
    }

    /// Elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Bytes saved relative to the input (negative if the output grew).
    pub fn bytes_saved(&self) -> i64 {
        self.input_size as i64 - self.output_size as i64
    }
}

/// Why a task produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// The input could not be read.
    InputUnavailable,
    /// The compressor raised an error, panicked, or produced no output.
    CompressionFailure,
    /// The compressor exceeded the configured per-task timeout.
    TimedOut,
}

impl FailureKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InputUnavailable => "input-unavailable",
            FailureKind::CompressionFailure => "compression-failure",
            FailureKind::TimedOut => "timed-out",
        }
    }
}

/// Failure marker for one (input, algorithm) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    /// Label of the input.
    pub source_label: String,
    /// Name of the compressor.
    pub algorithm_name: String,
    /// Failure category.
    pub kind: FailureKind,
    /// Underlying cause.
    pub message: String,
}

impl TaskFailure {
    /// Creates a failure marker.
    pub fn new(
        source_label: impl Into<String>,
        algorithm_name: impl Into<String>,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_label: source_label.into(),
            algorithm_name: algorithm_name.into(),
            kind,
            message: message.into(),
        }
    }

    /// Converts the marker into the matching [`BenchError`].
    pub fn to_error(&self) -> BenchError {
        match self.kind {
            FailureKind::InputUnavailable => BenchError::InputUnavailable {
                label: self.source_label.clone(),
                message: self.message.clone(),
            },
            FailureKind::CompressionFailure | FailureKind::TimedOut => {
                BenchError::CompressionFailure {
                    algorithm: self.algorithm_name.clone(),
                    message: self.message.clone(),
                }
            }
        }
    }
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} [{}]: {}",
            self.source_label,
            self.algorithm_name,
            self.kind.as_str(),
            self.message
        )
    }
}

/// Outcome of one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskOutcome {
    /// The task produced metrics.
    Completed(BenchmarkResult),
    /// The task failed; the run continued.
    Failed(TaskFailure),
}

impl TaskOutcome {
    /// Label of the input this outcome belongs to.
    pub fn source_label(&self) -> &str {
        match self {
            TaskOutcome::Completed(r) => &r.source_label,
            TaskOutcome::Failed(f) => &f.source_label,
        }
    }

    /// Name of the compressor this outcome belongs to.
    pub fn algorithm_name(&self) -> &str {
        match self {
            TaskOutcome::Completed(r) => &r.algorithm_name,
            TaskOutcome::Failed(f) => &f.algorithm_name,
        }
    }

    /// Returns the metrics if the task succeeded.
    pub fn as_result(&self) -> Option<&BenchmarkResult> {
        match self {
            TaskOutcome::Completed(r) => Some(r),
            TaskOutcome::Failed(_) => None,
        }
    }

    /// Returns the failure marker if the task failed.
    pub fn as_failure(&self) -> Option<&TaskFailure> {
        match self {
            TaskOutcome::Completed(_) => None,
            TaskOutcome::Failed(f) => Some(f),
        }
    }

    /// Returns whether the task succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, TaskOutcome::Completed(_))
    }
}

/// Ordered, append-only collection of task outcomes.
///
/// Outcomes appear in (input, algorithm) enumeration order regardless of
/// how tasks were scheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    outcomes: Vec<TaskOutcome>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty result set with room for `capacity` outcomes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    /// Appends an outcome.
    pub fn push(&mut self, outcome: TaskOutcome) {
        self.outcomes.push(outcome);
    }

    /// Iterates all outcomes in order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter()
    }

    /// Iterates successful results in order.
    pub fn completed(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.outcomes.iter().filter_map(TaskOutcome::as_result)
    }

    /// Iterates failure markers in order.
    pub fn failures(&self) -> impl Iterator<Item = &TaskFailure> {
        self.outcomes.iter().filter_map(TaskOutcome::as_failure)
    }

    /// Returns the outcome at `index`.
    pub fn get(&self, index: usize) -> Option<&TaskOutcome> {
        self.outcomes.get(index)
    }

    /// All outcomes as a slice.
    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    /// Total number of outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of successful tasks.
    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    /// Number of failed tasks.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Returns whether every task succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(TaskOutcome::is_success)
    }
}

impl FromIterator<TaskOutcome> for ResultSet {
    fn from_iter<I: IntoIterator<Item = TaskOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TaskOutcome;
    type IntoIter = std::slice::Iter<'a, TaskOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_compute() {
        assert_eq!(Ratio::compute(10, 2), Ratio::Value(0.2));
        assert_eq!(Ratio::compute(4, 8), Ratio::Value(2.0));
        assert_eq!(Ratio::compute(0, 0), Ratio::NotApplicable);
        assert_eq!(Ratio::compute(0, 12).value(), None);
    }

    #[test]
    fn test_ratio_display() {
        assert_eq!(format!("{:.2}", Ratio::Value(0.123456)), "0.12");
        assert_eq!(format!("{}", Ratio::Value(0.5)), "0.5");
        assert_eq!(format!("{:>5}", Ratio::NotApplicable), "  n/a");
    }

    #[test]
    fn test_ratio_json() {
        let json = serde_json::to_string(&vec![Ratio::Value(0.25), Ratio::NotApplicable]).unwrap();
        assert_eq!(json, r#"[0.25,"n/a"]"#);
        let back: Vec<Ratio> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Ratio::Value(0.25), Ratio::NotApplicable]);
        let whole: Ratio = serde_json::from_str("1").unwrap();
        assert_eq!(whole, Ratio::Value(1.0));
        assert!(serde_json::from_str::<Ratio>(r#""bogus""#).is_err());
    }

    #[test]
    fn test_result_derives_ratio() {
        let r = BenchmarkResult::new("en", "Zlib", 100, 40, Duration::from_millis(3));
        assert_eq!(r.ratio, Ratio::Value(0.4));
        assert_eq!(r.bytes_saved(), 60);
        assert!((r.elapsed_seconds() - 0.003).abs() < 1e-12);

        let empty = BenchmarkResult::new("empty", "Zlib", 0, 8, Duration::ZERO);
        assert_eq!(empty.ratio, Ratio::NotApplicable);
        assert_eq!(empty.bytes_saved(), -8);
    }

    #[test]
    fn test_failure_to_error() {
        let f = TaskFailure::new("en", "LZ4", FailureKind::InputUnavailable, "gone");
        assert!(matches!(f.to_error(), BenchError::InputUnavailable { .. }));

        let f = TaskFailure::new("en", "LZ4", FailureKind::TimedOut, "too slow");
        assert_eq!(
            f.to_error(),
            BenchError::CompressionFailure {
                algorithm: "LZ4".to_string(),
                message: "too slow".to_string()
            }
        );
        assert_eq!(f.to_string(), "en / LZ4 [timed-out]: too slow");
    }

    #[test]
    fn test_result_set_views() {
        let mut set = ResultSet::new();
        set.push(TaskOutcome::Completed(BenchmarkResult::new(
            "a",
            "X",
            10,
            5,
            Duration::ZERO,
        )));
        set.push(TaskOutcome::Failed(TaskFailure::new(
            "a",
            "Y",
            FailureKind::CompressionFailure,
            "boom",
        )));

        assert_eq!(set.len(), 2);
        assert_eq!(set.completed_count(), 1);
        assert_eq!(set.failure_count(), 1);
        assert!(!set.all_succeeded());
        assert_eq!(set.get(1).map(|o| o.algorithm_name()), Some("Y"));
        assert_eq!(
            set.iter().map(|o| o.source_label()).collect::<Vec<_>>(),
            vec!["a", "a"]
        );
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let outcome = TaskOutcome::Failed(TaskFailure::new(
            "a",
            "Y",
            FailureKind::TimedOut,
            "late",
        ));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["kind"], "TimedOut");
    }
}
