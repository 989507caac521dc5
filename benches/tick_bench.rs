//! Tick, mesh and trail throughput.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use orrery::{
    geometry::UnitSphereMesh,
    options::{Options, TessellationOptions},
    scene::Scene,
    trail::RibbonTrail,
};

fn mesh_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_sphere_mesh");
    for density in [10, 20, 60] {
        let tessellation = TessellationOptions {
            segments: density,
            rings: density,
        };
        group.bench_function(format!("{density}x{density}"), |b| {
            b.iter(|| black_box(UnitSphereMesh::new(black_box(&tessellation))));
        });
    }
    group.finish();
}

fn tick_benchmark(c: &mut Criterion) {
    let Ok(mut scene) = Scene::new(&Options::default()) else {
        return;
    };
    c.bench_function("scene_tick", |b| b.iter(|| scene.tick()));
}

fn trail_benchmark(c: &mut Criterion) {
    let Ok(mut trail) = RibbonTrail::new(4000, 0.01) else {
        return;
    };
    let mut t = 0.0_f32;
    c.bench_function("ribbon_add_strip", |b| {
        b.iter(|| {
            t += 0.05;
            let p = Vec3::new(t.cos(), t.sin(), 0.0);
            black_box(trail.add_strip(p * 0.9, p * 1.1, 1.0))
        });
    });
}

criterion_group!(benches, mesh_benchmark, tick_benchmark, trail_benchmark);
criterion_main!(benches);
