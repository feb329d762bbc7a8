use cgmath::{Vector2, Vector3};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quadblit::math::{inset_remap, rotate, texel_delta};

pub fn remap_grid(c: &mut Criterion) {
    let delta = texel_delta(1280, 720);

    c.bench_function("inset_remap 64x64", |b| {
        b.iter(|| {
            for y in 0..64 {
                for x in 0..64 {
                    let p = Vector2::new(x as f32 / 63.0, y as f32 / 63.0);
                    black_box(inset_remap(black_box(p), delta));
                }
            }
        })
    });
}

pub fn axis_rotate(c: &mut Criterion) {
    let v = Vector3::new(0.3, -1.2, 0.4);
    let axis = Vector3::new(0.0, 1.0, 0.5);

    c.bench_function("rotate", |b| {
        b.iter(|| rotate(black_box(v), black_box(0.7), black_box(axis)))
    });
}

criterion_group!(benches, remap_grid, axis_rotate);
criterion_main!(benches);
