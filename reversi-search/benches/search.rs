use criterion::*;

use reversi_rules::{Board, Player};
use reversi_search::choose_move;

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move");
    group.sample_size(20);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| choose_move(black_box(Board::initial()), Player::Black, depth))
        });
    }

    group.finish();
}

criterion_group!(search, criterion_search);
criterion_main!(search);
