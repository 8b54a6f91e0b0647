//! Micro-benchmarks for identity derivation and chain verification.
//!
//! Nothing here is performance-critical — the whole system is a teaching
//! tool — but the digest sits on the hot path of every append, and a
//! baseline number keeps regressions honest.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chronicle_ledger::digest::record_digest;
use chronicle_ledger::Ledger;

fn bench_record_digest(c: &mut Criterion) {
    let t = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
    let previous = "a".repeat(64);

    c.bench_function("record_digest/short_payload", |b| {
        b.iter(|| {
            record_digest(
                black_box("Alice pays Bob 10"),
                black_box(1),
                black_box(&previous),
                black_box(t),
            )
        })
    });

    let long_payload = "x".repeat(4096);
    c.bench_function("record_digest/4k_payload", |b| {
        b.iter(|| {
            record_digest(
                black_box(&long_payload),
                black_box(1),
                black_box(&previous),
                black_box(t),
            )
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut ledger = Ledger::new();
    for i in 1..=1000 {
        ledger.append(format!("transfer #{}", i), i);
    }

    c.bench_function("verify/1000_records", |b| {
        b.iter(|| black_box(&ledger).verify())
    });
}

criterion_group!(benches, bench_record_digest, bench_verify);
criterion_main!(benches);
