//! Benchmarks for mesh construction and the quality passes.

use criterion::{criterion_group, criterion_main, Criterion};
use meshgauge::prelude::*;
use nalgebra::Point3;

fn grid_vertices_and_faces(n: usize) -> (Vec<Point3<f64>>, Vec<[usize; 3]>) {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    // Create grid vertices
    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }

    // Create triangles
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

fn quad_grid_mesh(n: usize) -> HalfEdgeMesh {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n);

    for j in 0..=n {
        for i in 0..=n {
            // Mild height ripple so the faces are not all identical
            let z = 0.1 * ((i as f64) * 0.7).sin() * ((j as f64) * 0.9).cos();
            vertices.push(Point3::new(i as f64, j as f64, z));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push(vec![v00, v10, v11, v01]);
        }
    }

    build_from_polygons(&vertices, &faces).unwrap()
}

fn bench_mesh_construction(c: &mut Criterion) {
    let (vertices, faces) = grid_vertices_and_faces(10);

    c.bench_function("build_grid_10x10", |b| {
        b.iter(|| {
            let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();
            mesh
        });
    });
}

fn bench_triangle_passes(c: &mut Criterion) {
    let (vertices, faces) = grid_vertices_and_faces(50);
    let mesh: HalfEdgeMesh = build_from_triangles(&vertices, &faces).unwrap();

    c.bench_function("triangle_aspect_ratio_50x50", |b| {
        b.iter(|| {
            let mut quality = TriangleQuality::new(&mesh);
            quality.aspect_ratio().unwrap()
        });
    });

    c.bench_function("triangle_skewness_50x50", |b| {
        b.iter(|| {
            let mut quality = TriangleQuality::new(&mesh);
            quality.skewness().unwrap()
        });
    });
}

fn bench_polygon_passes(c: &mut Criterion) {
    let mesh = quad_grid_mesh(30);

    c.bench_function("polygon_aspect_ratio_30x30", |b| {
        b.iter(|| {
            let mut quality = PolygonQuality::with_seed(&mesh, 7);
            quality.aspect_ratio().unwrap()
        });
    });

    c.bench_function("polygon_warping_30x30", |b| {
        b.iter(|| {
            let mut quality = PolygonQuality::with_seed(&mesh, 7);
            quality.warping().unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_mesh_construction,
    bench_triangle_passes,
    bench_polygon_passes
);
criterion_main!(benches);
