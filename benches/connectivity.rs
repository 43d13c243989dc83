//! Benchmarks for connected-region extraction.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use islet::algo::connectivity::{extract_connected_regions, ConnectivityOptions, ExtractionMode};
use islet::mesh::{DataArray, LinkedMesh};
use islet::prelude::*;
use nalgebra::Point3;

/// `islands` separate n x n triangulated grids laid out along x.
fn create_islands(n: usize, islands: usize) -> PolyData {
    let mut points = Vec::with_capacity(islands * (n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(islands * n * n * 2);

    for k in 0..islands {
        let base = points.len();
        let x0 = (k * (n + 2)) as f64;
        for j in 0..=n {
            for i in 0..=n {
                points.push(Point3::new(x0 + i as f64, j as f64, 0.0));
            }
        }

        for j in 0..n {
            for i in 0..n {
                let v00 = base + j * (n + 1) + i;
                let v10 = v00 + 1;
                let v01 = v00 + (n + 1);
                let v11 = v01 + 1;

                faces.push([v00, v10, v11]);
                faces.push([v00, v11, v01]);
            }
        }
    }

    build_from_triangles(&points, &faces).unwrap()
}

fn bench_links(c: &mut Criterion) {
    let mesh = create_islands(100, 4);

    c.bench_function("build_links_4x100x100", |b| {
        b.iter(|| LinkedMesh::build(&mesh).unwrap().links().degree(PointId::new(0)))
    });
}

fn bench_modes(c: &mut Criterion) {
    let mesh = create_islands(100, 4);
    let mut group = c.benchmark_group("extract");

    let modes = [
        ("largest", ConnectivityOptions::default()),
        (
            "all_colored",
            ConnectivityOptions::default()
                .with_mode(ExtractionMode::AllRegions)
                .with_color_regions(true),
        ),
        (
            "cell_seeded",
            ConnectivityOptions::default()
                .with_mode(ExtractionMode::CellSeededRegions)
                .with_seeds([0]),
        ),
        (
            "closest_point",
            ConnectivityOptions::default()
                .with_mode(ExtractionMode::ClosestPointRegion)
                .with_closest_point(Point3::new(150.0, 50.0, 0.0)),
        ),
    ];

    for (name, options) in modes.iter() {
        group.bench_with_input(BenchmarkId::new("mode", name), options, |b, options| {
            b.iter(|| extract_connected_regions(&mesh, options).unwrap())
        });
    }
    group.finish();
}

fn bench_scalar_gate(c: &mut Criterion) {
    let mut mesh = create_islands(100, 4);
    let scalars = mesh.positions().iter().map(|p| p.y.sin()).collect();
    mesh.set_point_scalars(DataArray::scalars_f64("wave", scalars))
        .unwrap();

    let options = ConnectivityOptions::default()
        .with_mode(ExtractionMode::AllRegions)
        .with_scalar_range(-0.5, 0.5)
        .with_full_scalar_connectivity(true);

    c.bench_function("extract_scalar_full", |b| {
        b.iter(|| extract_connected_regions(&mesh, &options).unwrap())
    });
}

fn bench_closest_point_parallel(c: &mut Criterion) {
    let mesh = create_islands(300, 2);
    let mut group = c.benchmark_group("closest_point");

    for parallel in [false, true] {
        let options = ConnectivityOptions::default()
            .with_mode(ExtractionMode::ClosestPointRegion)
            .with_closest_point(Point3::new(10.0, 10.0, 0.0))
            .with_parallel(parallel);
        group.bench_with_input(BenchmarkId::new("parallel", parallel), &options, |b, options| {
            b.iter(|| extract_connected_regions(&mesh, options).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_links,
    bench_modes,
    bench_scalar_gate,
    bench_closest_point_parallel
);
criterion_main!(benches);
