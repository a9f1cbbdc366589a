// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four markers wander around a panning map.
//!
//! Every tenth step pans the viewport by up to 10 pixels per axis; the other
//! steps nudge each marker by up to 10 pixels per axis, staying inside the
//! visible region. The final frame is written as a PNG.
//!
//! ```text
//! RUST_LOG=debug cargo run -p mapmark_demos --example random_walk -- walk.png
//! ```

use image::Rgb;
use mapmark_demos::{init_logging, output_path, portrait, street_map};
use mapmark_scene::{CenterUpdate, Scene};
use mapmark_sprite::{MarkerStyle, PixelPoint, PixelSize};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STEPS: u32 = 2_000;
const STRIDE: u32 = 10;

/// Moves `value` by `STRIDE` in a random direction, or not at all, if the
/// result stays within `lo..hi`.
fn wander(rng: &mut StdRng, value: u32, lo: u32, hi: u32) -> u32 {
    match rng.random_range(0..3) {
        1 if value + STRIDE < hi => value + STRIDE,
        2 if value >= lo + STRIDE => value - STRIDE,
        _ => value,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let view = PixelSize::new(640, 480);
    let mut center = PixelPoint::new(5335, 3263);
    let map = street_map(6000, 4000);
    let bounds = PixelSize::new(map.width(), map.height());
    let mut scene = Scene::new(center, view, map)?;

    let face = portrait(64, Rgb([90, 160, 220]));
    let tints = [
        Rgb([255, 0, 0]),
        Rgb([0, 255, 0]),
        Rgb([0, 0, 255]),
        Rgb([127, 127, 127]),
    ];
    let mut ids = Vec::with_capacity(tints.len());
    for tint in tints {
        ids.push(scene.add_marker(center, MarkerStyle::default().with_tint(tint), &face)?);
    }
    scene.draw();

    let mut rng = StdRng::seed_from_u64(2004);
    let (half_w, half_h) = (view.width / 2, view.height / 2);
    for step in 0..STEPS {
        if step % 10 == 0 {
            center = PixelPoint::new(
                wander(&mut rng, center.x, half_w, bounds.width - half_w),
                wander(&mut rng, center.y, half_h, bounds.height - half_h),
            );
            if scene.set_center(center) == CenterUpdate::Moved {
                scene.draw();
            }
        } else {
            let visible = scene.viewport().projection();
            let origin = visible.world_origin();
            let size = visible.size();
            for &id in &ids {
                let Some(p) = scene.marker_position(id) else {
                    continue;
                };
                let next = PixelPoint::new(
                    wander(&mut rng, p.x, origin.x, origin.x + size.width),
                    wander(&mut rng, p.y, origin.y, origin.y + size.height),
                );
                scene.move_marker(id, next);
            }
        }
        if step % 500 == 0 {
            log::info!("step {step}: {:?}", scene.debug_info());
        }
    }

    let path = output_path("random_walk");
    scene.output().save(&path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
