use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweepfield_core::*;

const TIERS: [(&str, Coord, Coord, CellCount); 3] = [
    ("classic", 20, 10, 15),
    ("expert", 30, 16, 99),
    ("sparse_large", 200, 200, 400),
];

fn bench_new_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("new_game");
    for (name, width, height, mines) in TIERS {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(BoardEngine::new_game(width, height, mines, Some(seed)).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for (name, width, height, mines) in TIERS {
        let config = GameConfig::new(width, height, mines).unwrap();
        let grid = Grid::new(config, RandomMineGenerator::new(Some(1))).unwrap();
        group.bench_function(name, |b| b.iter(|| black_box(ClusterIndex::partition(&grid))));
    }
    group.finish();
}

fn bench_reveal_all_hidden(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_every_cell");
    for (name, width, height, mines) in TIERS {
        let engine = BoardEngine::new_game(width, height, mines, Some(3)).unwrap();
        let safe: Vec<_> = engine
            .grid()
            .cells()
            .filter(|(_, cell)| !cell.is_mine())
            .map(|(coords, _)| coords)
            .collect();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut engine = engine.clone();
                for &coords in &safe {
                    engine.reveal(coords).unwrap();
                }
                black_box(engine.state())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_new_game, bench_partition, bench_reveal_all_hidden);
criterion_main!(benches);
