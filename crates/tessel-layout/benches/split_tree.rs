//! Benchmarks for split tree edits and queries.
//!
//! Run with: cargo bench -p tessel-layout

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tessel_layout::{Direction, FocusDirection, Node, PaneId, Rect, Size, SplitTree};

const BOUNDS: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};

/// Build a tree of `n` panes, alternating split directions.
fn make_tree(n: u64) -> SplitTree<PaneId> {
    let mut tree = SplitTree::new(PaneId(0));
    for id in 1..n {
        let leaves = tree.leaves();
        let anchor = leaves[(id as usize * 7) % leaves.len()];
        let direction = if id % 2 == 0 {
            Direction::Right
        } else {
            Direction::Down
        };
        tree = tree.insert(PaneId(id), &anchor, direction).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_tree/insert");
    for n in [4, 16, 64, 256] {
        let tree = make_tree(n);
        let anchor = tree.leaves()[n as usize / 2];
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| black_box(tree.insert(PaneId(u64::MAX), &anchor, Direction::Right)))
        });
    }
    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_tree/resize");
    for n in [4, 16, 64, 256] {
        let tree = make_tree(n);
        let target = Node::Leaf(tree.leaves()[n as usize - 1]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| black_box(tree.resize(&target, 12.0, Direction::Left, BOUNDS)))
        });
    }
    group.finish();
}

fn bench_equalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_tree/equalize");
    for n in [4, 16, 64, 256] {
        let tree = make_tree(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| black_box(tree.equalize()))
        });
    }
    group.finish();
}

fn bench_spatial_focus(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_tree/spatial_focus");
    let size = Size::new(BOUNDS.width, BOUNDS.height);
    for n in [4, 16, 64, 256] {
        let tree = make_tree(n);
        let from = Node::Leaf(tree.leaves()[n as usize / 3]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| {
                black_box(tree.focus_target(
                    FocusDirection::Spatial(Direction::Right),
                    &from,
                    Some(size),
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_resize,
    bench_equalize,
    bench_spatial_focus
);
criterion_main!(benches);
