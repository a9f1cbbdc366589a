// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapmark Sprite: movable map markers with exact draw/erase.
//!
//! A [`Marker`] is a rectangular *photo* (a resampled source image inside a
//! tinted border) attached to a tapered *flag* that points at the marker's
//! anchor. Markers come in four diagonal orientations, and an orientation
//! resolver turns a marker away from canvas edges it would cross.
//!
//! Drawing saves every canvas pixel the marker overwrites, so
//! [`Marker::erase`] restores the canvas byte for byte. Overlapping markers
//! must be erased in the reverse order they were drawn; the `mapmark_scene`
//! crate keeps that discipline for a whole scene.
//!
//! ## Minimal example
//!
//! ```rust
//! use image::{Rgb, RgbImage};
//! use mapmark_sprite::{Marker, MarkerStyle, Orientation, PixelPoint};
//!
//! let portrait = RgbImage::from_pixel(64, 64, Rgb([0, 128, 255]));
//! let mut marker = Marker::new(MarkerStyle::default(), &portrait).unwrap();
//!
//! let background = RgbImage::from_pixel(320, 240, Rgb([0xCC, 0xCC, 0xCC]));
//! let mut canvas = background.clone();
//!
//! // Too close to the top edge for a north-facing marker.
//! marker.set_origin(Some(PixelPoint::new(160, 20)));
//! assert!(marker.draw(&mut canvas));
//! assert_eq!(marker.drawn_orientation(), Some(Orientation::SouthEast));
//!
//! marker.erase(&mut canvas);
//! assert_eq!(canvas, background);
//! ```
//!
//! ## Geometry
//!
//! With `L = content + 2 * border` and `O = round(L * split)`, every
//! orientation occupies an `(O.x + L.x) × (O.y + L.y)` bounding box: an
//! `O.x`-wide flag column next to the `L.x × L.y` photo. See
//! [`MarkerGeometry`] for the individual rectangles and [`CutMask`] for the
//! flag shape.

mod error;
mod geom;
mod marker;
mod mask;
mod orient;
mod raster;

pub use error::{Axis, MarkerError};
pub use geom::{PixelPoint, PixelRect, PixelSize};
pub use marker::{Marker, MarkerStyle};
pub use mask::{ColumnSpan, CutMask, MarkerGeometry};
pub use orient::{Orientation, Placement, resolve};
