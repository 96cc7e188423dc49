// benches/numutil_benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numutil::{binary_search, combination, is_prime, mod_pow, prime_factorization, sieve_of_eratosthenes, sort_vec};

fn bench_integer_math(c: &mut Criterion) {
    c.bench_function("sieve_of_eratosthenes 1e6", |b| {
        b.iter(|| sieve_of_eratosthenes(black_box(1_000_000)))
    });
    c.bench_function("is_prime 1e9+7", |b| b.iter(|| is_prime(black_box(1_000_000_007))));
    c.bench_function("mod_pow 1e9+7", |b| {
        b.iter(|| mod_pow(black_box(123_456_789), black_box(1_000_000_005), black_box(1_000_000_007)))
    });
    c.bench_function("combination 66 33", |b| b.iter(|| combination(black_box(66), black_box(33))));
    c.bench_function("prime_factorization 2^3*3^2*1e9+7", |b| {
        b.iter(|| prime_factorization(black_box(72 * 1_000_000_007)))
    });
}

fn bench_sequences(c: &mut Criterion) {
    let values: Vec<i64> = (0..100_000).map(|i| (i * 7919) % 100_003).collect();
    let mut sorted = values.clone();
    sort_vec(&mut sorted);

    c.bench_function("sort_vec 1e5", |b| {
        b.iter(|| {
            let mut copy = values.clone();
            sort_vec(&mut copy);
            copy
        })
    });
    c.bench_function("binary_search 1e5", |b| b.iter(|| binary_search(&sorted, black_box(&54_321))));
}

criterion_group!(benches, bench_integer_math, bench_sequences);
criterion_main!(benches);
