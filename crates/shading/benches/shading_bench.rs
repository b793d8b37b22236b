//! Benchmarks for the three reflection models over a default sphere.
//!
//! Each shading call recomputes the normal field and visits every one of
//! the resolution² points, so these numbers scale quadratically with
//! resolution.

use criterion::{criterion_group, criterion_main, Criterion};
use shading::{
    shade_combined, shade_diffuse, shade_specular, Camera, Light, Surface, SurfaceParams,
    DEFAULT_SHININESS,
};
use std::hint::black_box;

fn bench_shading(c: &mut Criterion) {
    let surface = Surface::generate(&SurfaceParams {
        resolution: 100,
        ..Default::default()
    })
    .unwrap();
    let light = Light::default();
    let camera = Camera::default();

    c.bench_function("diffuse_sphere_100", |b| {
        b.iter(|| shade_diffuse(black_box(&surface), black_box(&light)).unwrap())
    });

    c.bench_function("specular_sphere_100", |b| {
        b.iter(|| {
            shade_specular(
                black_box(&surface),
                black_box(&light),
                black_box(&camera),
                DEFAULT_SHININESS,
            )
            .unwrap()
        })
    });

    c.bench_function("combined_sphere_100", |b| {
        b.iter(|| {
            shade_combined(
                black_box(&surface),
                black_box(&light),
                black_box(&camera),
                DEFAULT_SHININESS,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_shading);
criterion_main!(benches);
