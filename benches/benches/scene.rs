// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use mapmark_scene::{MarkerId, Scene};
use mapmark_sprite::{MarkerStyle, PixelPoint, PixelSize};

const VIEW: PixelSize = PixelSize::new(640, 480);
const CENTER: PixelPoint = PixelPoint::new(1000, 800);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_u32(&mut self, upper_exclusive: u32) -> u32 {
        if upper_exclusive == 0 {
            return 0;
        }
        self.next_u32() % upper_exclusive
    }
}

fn background() -> RgbImage {
    RgbImage::from_fn(2000, 1600, |x, y| {
        Rgb([(x % 251) as u8, (y % 241) as u8, ((x ^ y) % 256) as u8])
    })
}

/// Markers spread over `spread` pixels around the center: a small spread
/// stacks them on top of each other, a large one keeps most of them apart.
fn build_scene(n: u32, spread: u32, seed: u64) -> (Scene, Vec<MarkerId>) {
    let mut scene = Scene::new(CENTER, VIEW, background()).expect("valid scene");
    let face = RgbImage::from_pixel(64, 64, Rgb([20, 160, 90]));
    let mut rng = Lcg::new(seed);
    let ids = (0..n)
        .map(|_| {
            let p = PixelPoint::new(
                CENTER.x - spread / 2 + rng.gen_range_u32(spread),
                CENTER.y - spread / 2 + rng.gen_range_u32(spread),
            );
            scene
                .add_marker(p, MarkerStyle::default(), &face)
                .expect("valid marker")
        })
        .collect();
    scene.draw();
    (scene, ids)
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapmark_scene");
    group.sample_size(30);

    for &n in &[8_u32, 64] {
        group.bench_function(format!("full_redraw(n={n})"), |b| {
            b.iter_batched(
                || build_scene(n, 400, 1).0,
                |mut scene| {
                    scene.draw();
                    black_box(scene.draw_order().len());
                },
                BatchSize::LargeInput,
            );
        });

        for &(label, spread) in &[("stacked", 40_u32), ("spread", 560)] {
            group.bench_function(format!("move_bottom_{label}(n={n})"), |b| {
                b.iter_batched(
                    || build_scene(n, spread, 7),
                    |(mut scene, ids)| {
                        // The bottom of the stack drags every overlapping
                        // marker above it through an erase and redraw.
                        let id = scene.draw_order().first().copied().unwrap_or(ids[0]);
                        let p = scene.marker_position(id).expect("registered");
                        scene.move_marker(id, PixelPoint::new(p.x + 3, p.y + 2));
                        black_box(scene.draw_order().len());
                    },
                    BatchSize::LargeInput,
                );
            });

            group.bench_function(format!("move_top_{label}(n={n})"), |b| {
                b.iter_batched(
                    || build_scene(n, spread, 7),
                    |(mut scene, ids)| {
                        let id = scene.draw_order().last().copied().unwrap_or(ids[0]);
                        let p = scene.marker_position(id).expect("registered");
                        scene.move_marker(id, PixelPoint::new(p.x + 3, p.y + 2));
                        black_box(scene.draw_order().len());
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
