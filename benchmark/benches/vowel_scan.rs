// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Scanner variant benchmarks over the standard corpora.
//!
//! One group per corpus class, one benchmark per variant. Each iteration
//! scans every string in the corpus, so the numbers compare loop shapes
//! over identical inputs.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::time::Duration;
use vowelbench_core::{CorpusClass, ScanStrategy};

fn bench_vowel_scan(c: &mut Criterion) {
    for class in CorpusClass::ALL {
        let corpus = class.load();

        let mut group = c.benchmark_group(format!("vowel_scan/{}", class.name()));
        group.measurement_time(Duration::from_secs(5));
        group.throughput(Throughput::Bytes(corpus.total_bytes()));

        for strategy in ScanStrategy::ALL {
            group.bench_function(strategy.name(), |b| {
                b.iter(|| {
                    for s in corpus.strings() {
                        black_box(strategy.scan(black_box(s.as_str())));
                    }
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_vowel_scan);
criterion_main!(benches);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_corpora_load() {
        for class in CorpusClass::ALL {
            let corpus = class.load();
            assert!(!corpus.is_empty());
            assert!(corpus.total_bytes() > 0);
        }
    }
}
