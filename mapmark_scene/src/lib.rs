// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapmark Scene: a panning viewport over a background raster with
//! incrementally updated markers.
//!
//! A [`Scene`] owns a background image, an even-sized output raster, and any
//! number of [`Marker`](mapmark_sprite::Marker)s placed at world positions.
//! It provides:
//! - A [`Viewport`] whose center can be moved anywhere on the background; near
//!   an edge the visible region is clipped instead of rejected.
//! - Full redraws ([`Scene::draw`]) that repaint the background and every
//!   visible marker.
//! - Incremental moves ([`Scene::move_marker`]) that erase and redraw only the
//!   markers the mover is entangled with, and put the mover on top.
//!
//! The scene is single threaded and synchronous: every mutation takes
//! `&mut self` and finishes before returning.
//!
//! ## Minimal example
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use mapmark_scene::{CenterUpdate, Scene};
//! use mapmark_sprite::{MarkerStyle, PixelPoint, PixelSize};
//!
//! let background = RgbImage::from_pixel(2000, 1500, Rgb([40, 90, 40]));
//! let mut scene = Scene::new(
//!     PixelPoint::new(1000, 750),
//!     PixelSize::new(640, 480),
//!     background,
//! )
//! .unwrap();
//!
//! let portrait = RgbImage::from_pixel(64, 64, Rgb([200, 180, 20]));
//! let id = scene
//!     .add_marker(PixelPoint::new(1000, 750), MarkerStyle::default(), &portrait)
//!     .unwrap();
//! scene.draw();
//! assert_eq!(scene.draw_order(), &[id]);
//!
//! scene.move_marker(id, PixelPoint::new(1010, 750));
//!
//! if scene.set_center(PixelPoint::new(1100, 750)) == CenterUpdate::Moved {
//!     scene.draw();
//! }
//! ```
//!
//! ## Move cascades
//!
//! Markers are kept in a draw-order stack. Moving a marker erases it together
//! with every marker stacked above it whose frame overlaps the mover or one of
//! the markers already collected, in reverse stack order. The collected
//! markers other than the mover are then redrawn in stack order, and the mover
//! is drawn at its new position on top. Markers stacked below the mover are
//! never touched: the mover's backup already holds their pixels.
//!
//! ## Logging
//!
//! Full redraws are reported with `log::debug!`, move cascades and ignored
//! requests with `log::trace!`.

mod error;
mod order;
mod scene;
mod viewport;

pub use error::SceneError;
pub use scene::{MarkerId, Scene, SceneConfig, SceneDebugInfo};
pub use viewport::{CenterUpdate, Projection, Viewport, ViewportDebugInfo};
