// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markers placed along every edge and corner of the viewport.
//!
//! Each marker prefers its default orientation; the ones that would cross an
//! edge are turned away from it. The resolved orientations are logged and the
//! frame is written as a PNG.

use image::Rgb;
use mapmark_demos::{init_logging, output_path, portrait, street_map};
use mapmark_scene::Scene;
use mapmark_sprite::{MarkerStyle, PixelPoint, PixelSize};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let view = PixelSize::new(640, 480);
    let center = PixelPoint::new(1000, 800);
    let mut scene = Scene::new(center, view, street_map(2000, 1600))?;

    // Screen positions, inset from the edges by less than a marker's extent.
    let (w, h) = (view.width, view.height);
    let spots = [
        ("top-left", 20, 20),
        ("top", w / 2, 20),
        ("top-right", w - 20, 20),
        ("right", w - 20, h / 2),
        ("bottom-right", w - 20, h - 20),
        ("bottom", w / 2, h - 20),
        ("bottom-left", 20, h - 20),
        ("left", 20, h / 2),
        ("middle", w / 2, h / 2),
    ];
    let face = portrait(64, Rgb([240, 240, 240]));
    let mut placed = Vec::with_capacity(spots.len());
    for (i, (name, sx, sy)) in spots.into_iter().enumerate() {
        let world = PixelPoint::new(center.x - w / 2 + sx, center.y - h / 2 + sy);
        let hue = u8::try_from(i * 28).unwrap_or(u8::MAX);
        let style = MarkerStyle::default().with_tint(Rgb([hue, 64, 255 - hue]));
        placed.push((name, scene.add_marker(world, style, &face)?));
    }
    scene.draw();

    for (name, id) in placed {
        let orientation = scene.marker(id).and_then(|m| m.drawn_orientation());
        log::info!("{name:>12}: {orientation:?}");
    }

    let path = output_path("edge_orientations");
    scene.output().save(&path)?;
    log::info!("wrote {}", path.display());
    Ok(())
}
