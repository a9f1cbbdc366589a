// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Mapmark demos.
//!
//! The demos are headless: instead of opening a window they log what happens
//! and write the final composited frame as a PNG file. Run them with
//! `RUST_LOG=debug` to see every full redraw, or `RUST_LOG=trace` to also see
//! move cascades.

use std::path::PathBuf;

use image::{Rgb, RgbImage};

/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Path of the PNG a demo writes: the first command line argument, or
/// `<name>.png` in the working directory.
#[must_use]
pub fn output_path(name: &str) -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(format!("{name}.png")), PathBuf::from)
}

/// A procedural street map: city blocks separated by a street grid, with a
/// diagonal avenue and a river.
#[must_use]
pub fn street_map(width: u32, height: u32) -> RgbImage {
    const BLOCK: u32 = 120;
    const STREET: u32 = 14;
    RgbImage::from_fn(width, height, |x, y| {
        let river = (i64::from(y) - i64::from(x) / 3 - i64::from(height) / 2).abs() < 40;
        let avenue = (i64::from(x) - i64::from(y)).rem_euclid(900) < 22;
        let street = x % BLOCK < STREET || y % BLOCK < STREET;
        if river {
            Rgb([70, 120, 190])
        } else if avenue {
            Rgb([250, 230, 160])
        } else if street {
            Rgb([245, 245, 240])
        } else {
            // Vary block colors a little so panning is visible.
            let shade = ((x / BLOCK * 7 + y / BLOCK * 13) % 24).to_le_bytes()[0];
            Rgb([200 + shade, 215 + shade / 2, 190])
        }
    })
}

/// A simple round face on a colored backdrop, `size` pixels square.
#[must_use]
pub fn portrait(size: u32, backdrop: Rgb<u8>) -> RgbImage {
    let c = f64::from(size) / 2.0;
    let r = f64::from(size) * 0.4;
    RgbImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (f64::from(x) + 0.5 - c, f64::from(y) + 0.5 - c);
        let d = (dx * dx + dy * dy).sqrt();
        let eye = |ex: f64| {
            let (ddx, ddy) = (dx - ex * r, dy + 0.25 * r);
            (ddx * ddx + ddy * ddy).sqrt() < r * 0.12
        };
        let smile = d < r * 0.65 && d > r * 0.5 && dy > r * 0.2;
        if d > r {
            backdrop
        } else if eye(-0.35) || eye(0.35) || smile {
            Rgb([40, 30, 20])
        } else {
            Rgb([250, 210, 60])
        }
    })
}
