use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chessgame_engine::coretypes::{PieceKind, Square};
use chessgame_engine::fen::{Fen, START_FEN};
use chessgame_engine::*;

pub fn criterion_apply_move_benchmark(c: &mut Criterion) {
    let start = Position::start_position();
    let promotion = Position::parse_fen("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let castling =
        Position::parse_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();

    c.bench_function("apply_move: e2e4", |b| {
        b.iter(|| black_box(start).apply_move(Square::E2, Square::E4, None))
    });
    c.bench_function("apply_move: e7e8q", |b| {
        b.iter(|| {
            black_box(promotion).apply_move(Square::E7, Square::E8, Some(PieceKind::Queen))
        })
    });
    c.bench_function("apply_move: e1g1", |b| {
        b.iter(|| black_box(castling).apply_move(Square::E1, Square::G1, None))
    });
    c.bench_function("get_legal_moves: start_position", |b| {
        b.iter(|| black_box(start).get_legal_moves())
    });
    c.bench_function("parse_fen + to_fen: start_position", |b| {
        b.iter(|| Position::parse_fen(black_box(START_FEN)).map(|position| position.to_fen()))
    });
    c.bench_function("game: make_move + undo", |b| {
        let request = MoveRequest::new("g1", "f3", None);
        let mut game = Game::new();
        b.iter(|| {
            game.make_move(black_box(&request)).unwrap();
            game.undo().unwrap()
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().without_plots();
    targets = criterion_apply_move_benchmark
}
criterion_main!(benches);
