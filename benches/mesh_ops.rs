//! Benchmarks for mesh construction and spatial queries.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use trigon::geom::Point;
use trigon::mesh::TriangleMesh;

/// Build the vertex and face lists of an `n` by `n` grid of unit squares,
/// each split into two triangles.
fn grid(n: usize) -> (Vec<Point>, Vec<[usize; 3]>) {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(2 * n * n);

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point::new(i as f64, j as f64));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;
            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    (vertices, faces)
}

fn grid_mesh(n: usize) -> TriangleMesh {
    let (vertices, faces) = grid(n);
    TriangleMesh::from_triangles(&vertices, &faces).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let (vertices, faces) = grid(8);
    c.bench_function("build_grid_8x8", |b| {
        b.iter(|| TriangleMesh::from_triangles(black_box(&vertices), black_box(&faces)).unwrap())
    });
}

fn bench_point_location(c: &mut Criterion) {
    let mesh = grid_mesh(16);

    c.bench_function("locate_interior_hit", |b| {
        b.iter(|| mesh.locate(black_box(Point::new(13.3, 9.6))).unwrap().id())
    });

    c.bench_function("contains_point_miss", |b| {
        b.iter(|| mesh.contains_point(black_box(Point::new(-5.0, -5.0))))
    });
}

fn bench_neighbor_queries(c: &mut Criterion) {
    let mesh = grid_mesh(16);

    c.bench_function("neighbors_full_sweep", |b| {
        b.iter(|| {
            let mut total = 0;
            for id in mesh.triangle_ids() {
                total += mesh.neighbors_of(id).unwrap().len();
            }
            total
        })
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_point_location,
    bench_neighbor_queries
);
criterion_main!(benches);
