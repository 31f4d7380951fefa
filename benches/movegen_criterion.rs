use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbiter_chess::game_state::GameState;
use arbiter_chess::move_generation::check_status::inspect_check_status;
use arbiter_chess::move_generation::legal_move_apply::apply_move_to_game;
use arbiter_chess::move_generation::move_generator::generate_all_moves;

/// A quiet developed position reached by a fixed opening sequence.
fn developed_position() -> GameState {
    let mut game = GameState::new_game();
    for (start, stop) in [
        ((6, 4), (4, 4)), // pawn two forward
        ((1, 4), (3, 4)), // mirrored reply
        ((7, 6), (5, 5)), // knight out
        ((0, 1), (2, 2)), // knight out
        ((7, 5), (4, 2)), // bishop out
        ((0, 5), (3, 2)), // mirrored bishop
    ] {
        game = apply_move_to_game(&game, &start, &stop).expect("opening sequence is legal");
    }
    game
}

fn bench_movegen(c: &mut Criterion) {
    let startpos = GameState::new_game();
    let developed = developed_position();

    // Correctness guards before benchmarking.
    assert_eq!(generate_all_moves(&startpos).len(), 20);
    assert!(!generate_all_moves(&developed).is_empty());

    let mut group = c.benchmark_group("movegen");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(30);

    group.bench_function("all_moves_startpos", |b| {
        b.iter(|| generate_all_moves(black_box(&startpos)).len())
    });
    group.bench_function("all_moves_developed", |b| {
        b.iter(|| generate_all_moves(black_box(&developed)).len())
    });
    group.bench_function("check_status_developed", |b| {
        b.iter(|| inspect_check_status(black_box(&developed), black_box(developed.turn)))
    });

    group.finish();
}

criterion_group!(movegen_benches, bench_movegen);
criterion_main!(movegen_benches);
