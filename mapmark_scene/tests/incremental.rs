// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random move and pan sequences checked against full redraws.

use image::Rgb;
use mapmark_scene::{CenterUpdate, Scene};
use mapmark_sprite::{MarkerStyle, Orientation, PixelPoint, PixelSize};

mod common;

use common::{Lcg, MarkerSpec, add, assert_stack_matches_drawn, background, reference};

const WORLD: PixelSize = PixelSize::new(1200, 900);
const VIEW: PixelSize = PixelSize::new(480, 360);

fn specs() -> Vec<MarkerSpec> {
    let styles = [
        MarkerStyle::default(),
        MarkerStyle::default()
            .with_content(PixelSize::new(32, 24))
            .with_border(PixelSize::new(2, 3))
            .with_tint(Rgb([0, 0, 255])),
        MarkerStyle::default()
            .with_content(PixelSize::new(48, 48))
            .with_split(kurbo::Vec2::new(0.35, 0.25))
            .with_tint(Rgb([255, 200, 0])),
    ];
    (0..10_u8)
        .map(|i| {
            let style = styles[usize::from(i) % styles.len()];
            let preferred = Orientation::ALL[usize::from(i) % 4];
            MarkerSpec::new(style, 23 * i).with_preferred(preferred)
        })
        .collect()
}

fn step(rng: &mut Lcg, value: u32, radius: u32, limit: u32) -> u32 {
    let next = (i64::from(value) + rng.offset(radius)).clamp(0, i64::from(limit) - 1);
    u32::try_from(next).expect("clamped into the background")
}

fn run(seed: u64, steps: usize) {
    let mut rng = Lcg::new(seed);
    let center = PixelPoint::new(600, 450);
    let mut scene = Scene::new(center, VIEW, background(WORLD.width, WORLD.height))
        .expect("valid scene");
    let specs = specs();
    let ids: Vec<_> = specs
        .iter()
        .map(|spec| {
            let position = PixelPoint::new(
                step(&mut rng, center.x, 150, WORLD.width),
                step(&mut rng, center.y, 120, WORLD.height),
            );
            add(&mut scene, position, spec)
        })
        .collect();
    scene.draw();
    assert_stack_matches_drawn(&scene);

    for i in 0..steps {
        if i % 10 == 9 {
            let c = scene.viewport().center();
            let next = PixelPoint::new(
                step(&mut rng, c.x, 40, WORLD.width),
                step(&mut rng, c.y, 40, WORLD.height),
            );
            if scene.set_center(next) == CenterUpdate::Moved {
                scene.draw();
            }
        } else {
            let id = ids[rng.below(10) as usize];
            let p = scene.marker_position(id).expect("registered");
            let next = if rng.below(12) == 0 {
                // Jump away from, or back into, the visible region.
                PixelPoint::new(rng.below(WORLD.width), rng.below(WORLD.height))
            } else {
                PixelPoint::new(
                    step(&mut rng, p.x, 40, WORLD.width),
                    step(&mut rng, p.y, 40, WORLD.height),
                )
            };
            scene.move_marker(id, next);
        }

        assert_stack_matches_drawn(&scene);
        let fresh = reference(&scene, &specs);
        assert!(
            scene.output() == fresh.output(),
            "seed {seed}, step {i}: incremental output differs from a full redraw"
        );
    }
}

#[test]
fn random_moves_match_full_redraw() {
    run(1, 120);
}

#[test]
fn random_moves_match_full_redraw_other_seed() {
    run(0x5EED_2004, 120);
}

#[test]
fn crowded_moves_match_full_redraw() {
    // Every marker starts on the same spot, so every move cascades.
    let mut rng = Lcg::new(99);
    let center = PixelPoint::new(600, 450);
    let mut scene = Scene::new(center, VIEW, background(WORLD.width, WORLD.height))
        .expect("valid scene");
    let specs = specs();
    let ids: Vec<_> = specs.iter().map(|s| add(&mut scene, center, s)).collect();
    scene.draw();
    for i in 0..60 {
        let id = ids[rng.below(10) as usize];
        let p = scene.marker_position(id).expect("registered");
        scene.move_marker(
            id,
            PixelPoint::new(
                step(&mut rng, p.x, 12, WORLD.width),
                step(&mut rng, p.y, 12, WORLD.height),
            ),
        );
        assert_stack_matches_drawn(&scene);
        if i % 5 == 4 {
            let fresh = reference(&scene, &specs);
            assert!(
                scene.output() == fresh.output(),
                "step {i}: incremental output differs from a full redraw"
            );
        }
    }
}
