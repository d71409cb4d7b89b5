// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI tool to run all benchmarks and generate reports.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use vowelbench_benchmark::harness::{measure, BenchmarkHarness};
use vowelbench_benchmark::{
    BenchmarkCategory, BenchmarkReport, BenchmarkResult, JsonReporter, LatencyMetrics,
};
use vowelbench_core::{build_transition_table, Corpus, CorpusClass, ScanStrategy, SuiteConfig};

#[derive(Parser)]
#[command(name = "run_benchmarks")]
#[command(about = "Run vowelbench scanner benchmarks and generate JSON reports")]
struct Args {
    /// Output directory for benchmark data (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of iterations for each benchmark
    #[arg(short, long, default_value_t = 100)]
    iterations: u64,

    /// Categories to run (all if not specified)
    #[arg(short, long)]
    category: Option<Vec<String>>,

    /// Corpus generation seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Suite configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run in quick mode (fewer iterations)
    #[arg(long)]
    quick: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let mut config = match &args.config {
        Some(path) => SuiteConfig::load(path).context("loading suite configuration")?,
        None => SuiteConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let iterations = if args.quick { 10 } else { args.iterations };
    let output_dir = args.output.unwrap_or_else(|| config.output_dir.clone());

    println!("Vowelbench Benchmark Suite");
    println!("==========================");
    println!("Output directory: {:?}", output_dir);
    println!("Iterations: {}", iterations);
    println!("Seed: {:#x}", config.seed);
    println!();

    let reporter = JsonReporter::new(&output_dir)?;
    let mut report = BenchmarkReport::new();

    // Determine which categories to run
    let run_all = args.category.is_none();
    let categories: Vec<String> = args.category.unwrap_or_default();

    let should_run =
        |cat: &str| -> bool { run_all || categories.iter().any(|c| c.eq_ignore_ascii_case(cat)) };

    let harness = BenchmarkHarness::new()
        .warmup(config.harness.warmup)
        .iterations(iterations)
        .keep_samples(config.harness.keep_samples);

    // Scan benchmarks need the corpora; generate them once up front.
    let corpora = if should_run("scan") {
        println!("Generating corpora...");
        generate_corpora(&config)?
    } else {
        Vec::new()
    };

    if should_run("scan") {
        println!("Running scan benchmarks...");
        run_scan_benchmarks(&mut report, &harness, &corpora);
    }

    if should_run("table_build") {
        println!("Running table build benchmarks...");
        run_table_build_benchmark(&mut report, &harness);
    }

    if should_run("corpus_gen") {
        println!("Running corpus generation benchmarks...");
        run_corpus_gen_benchmarks(&mut report, &config, iterations);
    }

    if should_run("baseline") {
        println!("Running baseline benchmarks...");
        run_baseline_benchmark(&mut report, &harness);
    }

    // Save report
    let path = reporter.save(&report)?;
    println!();
    println!("Benchmark report saved to: {:?}", path);
    println!();

    // Print summary
    print_summary(&report);

    Ok(())
}

fn generate_corpora(config: &SuiteConfig) -> anyhow::Result<Vec<(CorpusClass, Corpus)>> {
    let mut corpora = Vec::with_capacity(CorpusClass::ALL.len());
    for class in CorpusClass::ALL {
        let spec = config.corpus_spec(class);
        let (corpus, elapsed) = measure(|| spec.generate());
        let corpus = corpus.with_context(|| format!("generating corpus {}", class))?;
        debug!(
            class = %class,
            strings = corpus.len(),
            bytes = corpus.total_bytes(),
            ?elapsed,
            "corpus ready"
        );
        corpora.push((class, corpus));
    }
    Ok(corpora)
}

fn run_scan_benchmarks(
    report: &mut BenchmarkReport,
    harness: &BenchmarkHarness,
    corpora: &[(CorpusClass, Corpus)],
) {
    for (class, corpus) in corpora {
        for strategy in ScanStrategy::ALL {
            let samples = harness.run_scan(corpus, strategy);

            report.add_result(
                BenchmarkResult::latency(
                    format!("{}/{}", strategy.name(), class.name()),
                    BenchmarkCategory::Scan,
                    samples,
                    harness.should_keep_samples(),
                )
                .with_metadata("strategy", strategy.name())
                .with_metadata("corpus", class.name())
                .with_metadata("corpus_fingerprint", format!("{:08x}", corpus.fingerprint()))
                .with_metadata("corpus_strings", corpus.len())
                .with_metadata("corpus_bytes", corpus.total_bytes()),
            );

            println!("  ✓ {}/{}", strategy.name(), class.name());
        }
    }
}

fn run_table_build_benchmark(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    let samples = harness.run(|| {
        std::hint::black_box(build_transition_table());
    });

    report.add_result(BenchmarkResult::latency(
        "build_transition_table",
        BenchmarkCategory::TableBuild,
        samples,
        harness.should_keep_samples(),
    ));
    println!("  ✓ build_transition_table");
}

fn run_corpus_gen_benchmarks(report: &mut BenchmarkReport, config: &SuiteConfig, iterations: u64) {
    // Long corpora are megabytes each; cap the iteration count.
    let harness = BenchmarkHarness::new().warmup(2).iterations(iterations.min(20));

    for class in CorpusClass::ALL {
        let spec = config.corpus_spec(class);
        let samples = harness.run(|| {
            std::hint::black_box(spec.generate().ok());
        });

        report.add_result(
            BenchmarkResult::latency(
                format!("corpus_gen/{}", class.name()),
                BenchmarkCategory::CorpusGen,
                samples,
                harness.should_keep_samples(),
            )
            .with_metadata("corpus", class.name()),
        );
        println!("  ✓ corpus_gen/{}", class.name());
    }
}

fn run_baseline_benchmark(report: &mut BenchmarkReport, harness: &BenchmarkHarness) {
    fn noop() -> u64 {
        0
    }

    let samples = harness.run(|| {
        std::hint::black_box(noop());
    });

    report.add_result(BenchmarkResult::latency(
        "noop",
        BenchmarkCategory::Baseline,
        samples,
        harness.should_keep_samples(),
    ));
    println!("  ✓ noop");
}

fn print_summary(report: &BenchmarkReport) {
    println!("Summary");
    println!("-------");
    println!();

    for result in &report.results {
        if let Some(latency) = &result.latency {
            println!(
                "{}: median={}, p99={}",
                result.name,
                LatencyMetrics::format_latency(latency.median_ns),
                LatencyMetrics::format_latency(latency.p99_ns)
            );
        }
    }
}
