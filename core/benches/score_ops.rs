use core::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pegduo_core::{JottoConfig, JottoEngine, Peg};

fn bench_score_guess(c: &mut Criterion) {
    use Peg::*;

    let mut engine = JottoEngine::new(JottoConfig::new(8, 10, false));
    engine
        .set_code(&[Red, Green, Blue, Yellow, Orange, Brown, Red, Green])
        .unwrap();
    let guess = [Green, Red, Blue, Brown, Yellow, Orange, Green, Red];

    c.bench_function("score_guess_8", |b| {
        b.iter(|| engine.score_guess(black_box(&guess)).unwrap())
    });
}

criterion_group!(benches, bench_score_guess);
criterion_main!(benches);
