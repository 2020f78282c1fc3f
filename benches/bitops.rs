use bitkit::{add, count_set_bits, find_msb, little_to_big_endian, multiply_by_n, set_bits};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_bitops(c: &mut Criterion) {
    c.bench_function("count_set_bits 256", |b| {
        b.iter(|| (0..=u8::MAX).map(|x| count_set_bits(black_box(x)) as u32).sum::<u32>())
    });

    c.bench_function("find_msb 256", |b| {
        b.iter(|| (0..=u8::MAX).map(|x| find_msb(black_box(x)) as u32).sum::<u32>())
    });

    c.bench_function("add i8", |b| b.iter(|| add(black_box(-77), black_box(113))));

    c.bench_function("multiply_by_n", |b| {
        b.iter(|| multiply_by_n(black_box(0xB7), black_box(0xFF)))
    });

    c.bench_function("little_to_big_endian", |b| {
        b.iter(|| little_to_big_endian(black_box(0x1234_5678)))
    });

    c.bench_function("set_bits", |b| {
        b.iter(|| set_bits(black_box(0xAA), black_box(5), black_box(3), black_box(0b101)))
    });
}

criterion_group!(benches, bench_bitops);
criterion_main!(benches);
