//! Throughput of encoding and decoding a mix of version shapes.

use codec::{decode, encode, Version};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const SAMPLES: [&str; 8] = [
    "1.0",
    "2.31.0",
    "1!2012.2",
    "3.12.0rc2",
    "0.9.1b4.post1",
    "1.0.dev7",
    "4.5.6.7.post3.dev2",
    "10.0a1.dev0",
];

fn versions() -> Vec<Version> {
    SAMPLES
        .iter()
        .map(|text| text.parse().expect("benchmark samples parse"))
        .collect()
}

fn encode_decode_benches(c: &mut Criterion) {
    let versions = versions();
    let words: Vec<u64> = versions
        .iter()
        .map(|v| encode(v).expect("benchmark samples encode"))
        .collect();

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(versions.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(encode(black_box(version)).ok());
            }
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            for &word in &words {
                black_box(decode(black_box(word)));
            }
        });
    });

    group.bench_function("sort_by_key", |b| {
        b.iter(|| {
            let mut keys = words.clone();
            keys.reverse();
            keys.sort_unstable();
            black_box(keys);
        });
    });

    group.finish();
}

criterion_group!(benches, encode_decode_benches);
criterion_main!(benches);
