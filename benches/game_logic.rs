use criterion::{black_box, criterion_group, criterion_main, Criterion};
use twenty48::core::{Board, GameState, GameSnapshot};
use twenty48::types::Direction;

fn bench_apply_move(c: &mut Criterion) {
    let board = Board::from_values([[2, 2, 4, 0], [0, 4, 4, 8], [2, 0, 2, 16], [8, 8, 0, 2]]);
    let state = GameState::from_board(board, 12345);

    c.bench_function("apply_move_left", |b| {
        b.iter(|| {
            let mut game = state.clone();
            game.apply_move(black_box(Direction::Left))
        })
    });
}

fn bench_has_any_move(c: &mut Criterion) {
    // Terminal board is the worst case: every pair in every direction scanned.
    let board = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    let state = GameState::from_board(board, 12345);

    c.bench_function("has_any_move_terminal", |b| {
        b.iter(|| black_box(&state).has_any_move())
    });
}

fn bench_spawn_tile(c: &mut Criterion) {
    let state = GameState::from_board(Board::new(), 12345);

    c.bench_function("spawn_random_tile", |b| {
        b.iter(|| {
            let mut game = state.clone();
            game.spawn_random_tile()
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = GameState::new(12345);
    let mut out = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut out)))
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_has_any_move,
    bench_spawn_tile,
    bench_snapshot_into
);
criterion_main!(benches);
