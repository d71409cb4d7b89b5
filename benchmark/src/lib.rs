// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Vowelbench Benchmarking Framework
//!
//! Measurement framework for comparing the vowelbench scanner variants
//! against each other over the standard synthetic corpora.
//!
//! # Benchmark Categories
//!
//! - **Scan**: every scanner variant against every standard corpus
//! - **Table Build**: transition-table construction cost
//! - **Corpus Gen**: synthetic corpus generation cost per class
//! - **Baseline**: no-op measurement floor
//!
//! # Data Output
//!
//! All benchmarks output JSON files with standardized metrics, including
//! the corpus fingerprints needed to compare runs.

pub mod harness;
pub mod metrics;
pub mod reporter;

pub use harness::BenchmarkHarness;
pub use metrics::{
    BenchmarkCategory, BenchmarkReport, BenchmarkResult, LatencyMetrics, SystemInfo,
    ThroughputMetrics,
};
pub use reporter::JsonReporter;
