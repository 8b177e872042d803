#[macro_use]
extern crate criterion;
extern crate mandelbrot;

use criterion::Criterion;
use mandelbrot::{render, Strategy, ViewportConfig};

fn bench_strategies(c: &mut Criterion) {
    for strategy in Strategy::ALL.iter() {
        let config =
            ViewportConfig::new(200, 150, (-2.0, 1.0), (-1.5, 1.5), 200, *strategy).unwrap();
        c.bench_function(&format!("render 200x150 {}", strategy), move |b| {
            b.iter(|| render(&config).unwrap())
        });
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
