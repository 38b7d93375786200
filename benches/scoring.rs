use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pinfall::{Game, RuleSet};

fn bench_perfect_game(c: &mut Criterion) {
    let rolls = [10i64; 12];
    c.bench_function("score_perfect_game", |b| {
        b.iter(|| {
            let mut game = Game::default();
            game.play_from_list(black_box(&rolls)).unwrap()
        })
    });
}

fn bench_marathon_spares(c: &mut Criterion) {
    // A 100-frame variant full of spares keeps the bonus look-ahead busy.
    let rules = RuleSet::default().with_frames(100);
    let mut rolls: Vec<i64> = Vec::with_capacity(201);
    for _ in 0..100 {
        rolls.extend_from_slice(&[9, 1]);
    }
    rolls.push(10);

    c.bench_function("score_marathon_spares", |b| {
        b.iter(|| {
            let mut game = Game::new(rules.clone());
            game.play_from_list(black_box(&rolls)).unwrap()
        })
    });
}

criterion_group!(benches, bench_perfect_game, bench_marathon_spares);
criterion_main!(benches);
