// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(dead_code, reason = "not every test crate uses every helper")]

use image::{Rgb, RgbImage};
use mapmark_scene::{MarkerId, Scene, SceneConfig};
use mapmark_sprite::{MarkerStyle, Orientation, PixelPoint};

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    pub fn below(&mut self, upper_exclusive: u32) -> u32 {
        if upper_exclusive == 0 {
            return 0;
        }
        self.next_u32() % upper_exclusive
    }

    /// Uniform in `-radius..=radius`.
    pub fn offset(&mut self, radius: u32) -> i64 {
        i64::from(self.below(2 * radius + 1)) - i64::from(radius)
    }
}

/// A background with a distinct color at nearly every pixel.
pub fn background(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            x.to_le_bytes()[0],
            y.to_le_bytes()[0],
            (x / 256 + 16 * (y / 256)).to_le_bytes()[0],
        ])
    })
}

/// A striped portrait of `width` x `height`.
pub fn portrait(width: u32, height: u32, seed: u8) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let band = ((x + 2 * y) / 5).to_le_bytes()[0];
        Rgb([seed, band, seed.wrapping_add(band)])
    })
}

/// What a test registers for one marker, kept to rebuild scenes from scratch.
#[derive(Clone)]
pub struct MarkerSpec {
    pub style: MarkerStyle,
    pub source: RgbImage,
    pub preferred: Orientation,
}

impl MarkerSpec {
    pub fn new(style: MarkerStyle, seed: u8) -> Self {
        let content = style.content;
        Self {
            style,
            source: portrait(content.width, content.height, seed),
            preferred: Orientation::NorthWest,
        }
    }

    pub fn with_preferred(mut self, preferred: Orientation) -> Self {
        self.preferred = preferred;
        self
    }
}

/// Registers `spec` at `position` and applies its preferred orientation.
pub fn add(scene: &mut Scene, position: PixelPoint, spec: &MarkerSpec) -> MarkerId {
    let id = scene
        .add_marker(position, spec.style, &spec.source)
        .expect("marker spec is valid");
    scene.set_marker_orientation(id, spec.preferred);
    id
}

/// A fresh scene showing what `scene` shows, with its markers registered in
/// draw order followed by the undrawn ones, painted by one full redraw.
pub fn reference(scene: &Scene, specs: &[MarkerSpec]) -> Scene {
    let viewport = scene.viewport();
    let config = SceneConfig::default()
        .with_center(viewport.projection().center)
        .with_viewport_size(viewport.size())
        .with_fill(scene.fill());
    let mut fresh =
        Scene::with_config(config, scene.background().clone()).expect("same config is valid");
    let stacked = scene.draw_order();
    let undrawn = scene.marker_ids().filter(|id| !stacked.contains(id));
    for id in stacked.iter().copied().chain(undrawn) {
        let position = scene.marker_position(id).expect("registered marker");
        add(&mut fresh, position, &specs[id.as_usize()]);
    }
    fresh.draw();
    fresh
}

/// Checks that the draw-order stack holds exactly the drawn markers, once each.
pub fn assert_stack_matches_drawn(scene: &Scene) {
    let stacked = scene.draw_order();
    for id in scene.marker_ids() {
        let drawn = scene.marker(id).expect("registered").is_drawn();
        let count = stacked.iter().filter(|s| **s == id).count();
        assert_eq!(
            count,
            usize::from(drawn),
            "{id:?} drawn = {drawn} but stacked {count} times"
        );
    }
}
