use criterion::{criterion_group, criterion_main, Criterion};

fn mean(c: &mut Criterion) {
    c.bench_function("average (short)", |b| {
        let v = [1, 2, 3, 4, 5];
        b.iter(|| average::calculate_average(&v));
    });

    c.bench_function("average (long)", |b| {
        let v: Vec<i32> = (0..100_000).collect();
        b.iter(|| average::calculate_average(&v));
    });

    c.bench_function("average (float)", |b| {
        let v: Vec<f64> = (0..100_000).map(|x| f64::from(x) * 0.5).collect();
        b.iter(|| average::calculate_average(&v));
    });
}

criterion_group!(benches, mean);
criterion_main!(benches);
