//! Benchmarks for the mint path: generation plus both normalization passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coffer_core::{ChaChaRoller, CoinRules, CurrencyBundle, CurrencyStandard};
use coffer_treasure::{generate, normalize};

fn bench_generate(c: &mut Criterion) {
    let mut roller = ChaChaRoller::seeded(42);
    c.bench_function("generate_tier17", |b| {
        b.iter(|| {
            black_box(generate(
                black_box(21.0),
                &CurrencyBundle::ZERO,
                &mut roller,
                1.0,
            ))
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let coins = CoinRules {
        use_electrum: false,
        use_platinum: false,
        currency_standard: CurrencyStandard::SilverStandard,
        ..CoinRules::default()
    };
    let bundle = CurrencyBundle::new(123, 45, 6, 78, 9);
    c.bench_function("normalize_silver_economy", |b| {
        b.iter(|| black_box(normalize(black_box(&bundle), &coins)));
    });
}

criterion_group!(benches, bench_generate, bench_normalize);
criterion_main!(benches);
