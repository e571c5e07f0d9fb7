//! Benchmarks for grid editing and export.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tilepaint::editor::{CellPos, Grid, TileSymbol, serialize};

fn filled_grid(rows: usize, cols: usize) -> Grid {
    let wall = TileSymbol::try_from('w').unwrap();
    let mut grid = Grid::new(rows, cols);
    for r in 0..rows {
        grid = grid.with_cell(CellPos::new(r, r % cols), wall);
    }
    grid
}

fn bench_serialize(c: &mut Criterion) {
    let grid = filled_grid(64, 64);
    c.bench_function("serialize_64x64", |b| b.iter(|| serialize(black_box(&grid))));
}

fn bench_with_cell(c: &mut Criterion) {
    let grid = filled_grid(64, 64);
    let key = TileSymbol::try_from('k').unwrap();
    c.bench_function("with_cell_64x64", |b| {
        b.iter(|| grid.with_cell(black_box(CellPos::new(32, 32)), key))
    });
}

criterion_group!(benches, bench_serialize, bench_with_cell);
criterion_main!(benches);
