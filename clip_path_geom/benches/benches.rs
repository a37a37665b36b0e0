use clip_path_geom::{bezier::CubicBezier, core::math::vec2, path::*};
use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use std::f64::consts::TAU;

/// Closed smooth blob of `node_count` nodes around `(cx, cy)` with a radius alternating between
/// `r` and `0.8 * r`.
fn blob(node_count: usize, cx: f64, cy: f64, r: f64) -> Path {
    let step = TAU / node_count as f64;
    let handle_len = r * step / 3.0;
    let nodes = (0..node_count)
        .map(|i| {
            let angle = step * i as f64;
            let radius = if i % 2 == 0 { r } else { 0.8 * r };
            let (s, c) = angle.sin_cos();
            let pos = vec2(cx + radius * c, cy + radius * s);
            let tangent = vec2(-s, c).scale(handle_len);
            PathNode::new(pos, pos - tangent, pos + tangent, NodeType::Smooth)
        })
        .collect();

    Path::new(nodes, true)
}

fn bench_curve_intersects(b: &mut Bencher, curves: &(CubicBezier, CubicBezier)) {
    b.iter(|| curves.0.intersects(&curves.1))
}

fn curve_intersects_group(c: &mut Criterion) {
    let arch = CubicBezier::new(
        vec2(0.0, 0.0),
        vec2(0.0, 100.0),
        vec2(100.0, 100.0),
        vec2(100.0, 0.0),
    );
    let wave = CubicBezier::new(
        vec2(-10.0, 50.0),
        vec2(40.0, -50.0),
        vec2(60.0, 150.0),
        vec2(110.0, 50.0),
    );

    c.bench_function("curve_intersects", |b| {
        bench_curve_intersects(b, &(arch, wave))
    });
}

fn bench_boolean(b: &mut Bencher, paths: &(Path, Path), op: BooleanOp) {
    let options = PathBooleanOptions::new();
    b.iter(|| paths.0.boolean(&paths.1, op, &options))
}

fn path_boolean_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_boolean");
    let node_counts = &[8, 32, 128];
    for &n in node_counts {
        let paths = (blob(n, 0.0, 0.0, 100.0), blob(n, 60.0, 10.0, 100.0));
        group.bench_with_input(BenchmarkId::new("union_blobs", n), &paths, |b, p| {
            bench_boolean(b, p, BooleanOp::Or)
        });
        group.bench_with_input(BenchmarkId::new("subtract_blobs", n), &paths, |b, p| {
            bench_boolean(b, p, BooleanOp::Not)
        });
    }

    group.finish();
}

fn path_contains_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_contains");
    let node_counts = &[8, 128, 1024];
    for &n in node_counts {
        let path = blob(n, 0.0, 0.0, 100.0);
        group.bench_with_input(BenchmarkId::new("blob_center", n), &path, |b, p| {
            b.iter(|| p.contains_point(vec2(0.5, 0.5)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    curve_intersects_group,
    path_boolean_group,
    path_contains_group,
);
criterion_main!(benches);
