use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snekbyte::core::{GameConfig, GameState, Grid, SimpleRng};
use snekbyte::types::Cell;

fn bench_step(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("game_step", |b| {
        let mut game = GameState::new(&config, false, 12345);
        b.iter(|| {
            if game.game_over() {
                game = GameState::new(&config, false, 12345);
            }
            game.step();
            black_box(game.score());
        })
    });
}

fn bench_free_cell_crowded(c: &mut Criterion) {
    // Placement on a mostly-occupied grid exercises the scan fallback.
    let grid = Grid::new(32, 22);
    let free = Cell::new(31, 21);

    c.bench_function("random_free_cell_crowded", |b| {
        let mut rng = SimpleRng::new(7);
        b.iter(|| black_box(grid.random_free_cell(&mut rng, |cell| cell != free)))
    });
}

fn bench_wonq_session(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("wonq_game_step", |b| {
        let mut game = GameState::new(&config, true, 999);
        b.iter(|| {
            if game.game_over() {
                game = GameState::new(&config, true, 999);
            }
            game.step();
            black_box(game.obstacles().len());
        })
    });
}

criterion_group!(benches, bench_step, bench_free_cell_crowded, bench_wonq_session);
criterion_main!(benches);
