// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker sprites and their draw/erase state machine.

use core::fmt;

use image::{Rgb, RgbImage, imageops};
use kurbo::Vec2;

use crate::error::MarkerError;
use crate::geom::{PixelPoint, PixelRect, PixelSize};
use crate::mask::{CutMask, MarkerGeometry};
use crate::orient::{self, Orientation};
use crate::raster::{self, Backup};

/// Construction parameters of a [`Marker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    /// Size the source image is resampled to.
    pub content: PixelSize,
    /// Tinted border around the content on each side.
    pub border: PixelSize,
    /// Fractional split point; `split.x` sizes the flag arm and `split.y` the
    /// photo's vertical offset from the anchor.
    pub split: Vec2,
    /// Flag and border color.
    pub tint: Rgb<u8>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            content: PixelSize::new(64, 64),
            border: PixelSize::new(4, 4),
            split: Vec2::new(0.2, 0.4),
            tint: Rgb([0xFF, 0x00, 0x00]),
        }
    }
}

impl MarkerStyle {
    /// Sets the content size.
    #[must_use]
    pub fn with_content(mut self, content: PixelSize) -> Self {
        self.content = content;
        self
    }

    /// Sets the border thickness.
    #[must_use]
    pub fn with_border(mut self, border: PixelSize) -> Self {
        self.border = border;
        self
    }

    /// Sets the split point.
    #[must_use]
    pub fn with_split(mut self, split: Vec2) -> Self {
        self.split = split;
        self
    }

    /// Sets the tint.
    #[must_use]
    pub fn with_tint(mut self, tint: Rgb<u8>) -> Self {
        self.tint = tint;
        self
    }
}

/// What a drawn marker covered, and the pixels it covered up.
struct DrawnState {
    orientation: Orientation,
    frame: PixelRect,
    flag: Backup,
    photo: Backup,
}

/// A movable sprite that can draw itself onto a canvas and exactly undo it.
///
/// A marker is either not drawn, or drawn in exactly one orientation while
/// holding backups of every canvas pixel it overwrote. [`Marker::erase`]
/// writes those backups back. The caller is responsible for erasing markers in
/// the reverse order they were drawn wherever they overlap.
pub struct Marker {
    geometry: MarkerGeometry,
    tint: Rgb<u8>,
    sprite: RgbImage,
    masks: [CutMask; 4],
    preferred: Orientation,
    origin: Option<PixelPoint>,
    drawn: Option<DrawnState>,
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("geometry", &self.geometry)
            .field("tint", &self.tint)
            .field("preferred", &self.preferred)
            .field("origin", &self.origin)
            .field("drawn_orientation", &self.drawn_orientation())
            .field("drawn_frame", &self.drawn_frame())
            .finish_non_exhaustive()
    }
}

impl Marker {
    /// Builds a marker from `style`, resampling `source` into its content area.
    ///
    /// The marker starts without an origin and is not drawn.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::EmptySource`] for a source without pixels, and
    /// any error of [`MarkerGeometry::new`].
    pub fn new(style: MarkerStyle, source: &RgbImage) -> Result<Self, MarkerError> {
        let geometry = MarkerGeometry::new(style.content, style.border, style.split)?;
        if source.width() == 0 || source.height() == 0 {
            return Err(MarkerError::EmptySource);
        }
        let sprite = render_sprite(&geometry, style.tint, source);
        let masks = Orientation::ALL.map(|o| geometry.cut_mask(o));
        Ok(Self {
            geometry,
            tint: style.tint,
            sprite,
            masks,
            preferred: Orientation::default(),
            origin: None,
            drawn: None,
        })
    }

    /// Sets the screen position of the anchor, or `None` when off-canvas.
    ///
    /// Takes effect at the next draw; an outstanding drawing is unaffected.
    pub fn set_origin(&mut self, origin: Option<PixelPoint>) {
        self.origin = origin;
    }

    /// Current screen position of the anchor.
    #[must_use]
    pub fn origin(&self) -> Option<PixelPoint> {
        self.origin
    }

    /// Sets the orientation used when no canvas edge forces another one.
    pub fn set_preferred_orientation(&mut self, orientation: Orientation) {
        self.preferred = orientation;
    }

    /// Orientation used when no canvas edge forces another one.
    #[must_use]
    pub fn preferred_orientation(&self) -> Orientation {
        self.preferred
    }

    /// Draws the marker onto `canvas` at its origin.
    ///
    /// Returns `true` if the marker is drawn afterwards. Drawing an already
    /// drawn marker does nothing and returns `true`. Returns `false` without
    /// touching the canvas if there is no origin, the origin lies outside the
    /// canvas, or the canvas cannot hold the marker in the resolved
    /// orientation.
    pub fn draw(&mut self, canvas: &mut RgbImage) -> bool {
        if self.drawn.is_some() {
            return true;
        }
        let Some(origin) = self.origin else {
            return false;
        };
        let canvas_size = PixelSize::new(canvas.width(), canvas.height());
        let extent = self.geometry.extent();
        if origin.x >= canvas_size.width
            || extent.width > canvas_size.width
            || origin.y >= canvas_size.height
            || extent.height > canvas_size.height
        {
            log::trace!("marker at {origin} cannot fit a {canvas_size} canvas");
            return false;
        }

        let orientation = orient::resolve(canvas_size, origin, self.preferred, extent)
            .or_preferred(self.preferred);
        let flag_rect = self.geometry.flag_rect(orientation, origin);
        let photo_rect = self.geometry.photo_rect(orientation, origin);
        let (Some(flag), Some(photo)) = (
            Backup::capture(canvas, flag_rect),
            Backup::capture(canvas, photo_rect),
        ) else {
            log::trace!("marker at {origin} leaves the canvas as {orientation:?}");
            return false;
        };

        raster::fill_masked(
            canvas,
            flag_rect,
            &self.masks[orientation.index()],
            self.tint,
        );
        imageops::replace(canvas, &self.sprite, photo_rect.x0, photo_rect.y0);

        let frame = self
            .geometry
            .local_frame(orientation)
            .translate(i64::from(origin.x), i64::from(origin.y));
        self.drawn = Some(DrawnState {
            orientation,
            frame,
            flag,
            photo,
        });
        true
    }

    /// Restores the canvas pixels covered by the last draw.
    ///
    /// Does nothing if the marker is not drawn.
    pub fn erase(&mut self, canvas: &mut RgbImage) {
        if let Some(state) = self.drawn.take() {
            state.photo.restore(canvas);
            state.flag.restore(canvas);
        }
    }

    /// Forgets the current drawing without touching any canvas.
    ///
    /// Used when the canvas the marker was drawn onto has been repainted.
    pub fn reset_drawn(&mut self) {
        self.drawn = None;
    }

    /// Returns `true` while the marker is drawn.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.drawn.is_some()
    }

    /// Orientation of the current drawing.
    #[must_use]
    pub fn drawn_orientation(&self) -> Option<Orientation> {
        self.drawn.as_ref().map(|s| s.orientation)
    }

    /// Canvas bounding box of the current drawing.
    #[must_use]
    pub fn drawn_frame(&self) -> Option<PixelRect> {
        self.drawn.as_ref().map(|s| s.frame)
    }

    /// Canvas rectangles overwritten by the current drawing, flag first.
    #[must_use]
    pub fn drawn_regions(&self) -> Option<[PixelRect; 2]> {
        self.drawn
            .as_ref()
            .map(|s| [s.flag.rect(), s.photo.rect()])
    }

    /// Derived sizes.
    #[must_use]
    pub fn geometry(&self) -> &MarkerGeometry {
        &self.geometry
    }

    /// Border-padded photo pixels.
    #[must_use]
    pub fn sprite(&self) -> &RgbImage {
        &self.sprite
    }

    /// Flag and border color.
    #[must_use]
    pub fn tint(&self) -> Rgb<u8> {
        self.tint
    }

    /// Flag mask of `orientation`.
    #[must_use]
    pub fn cut_mask(&self, orientation: Orientation) -> &CutMask {
        &self.masks[orientation.index()]
    }

    /// Bounding box of `orientation` relative to the anchor.
    #[must_use]
    pub fn local_frame(&self, orientation: Orientation) -> PixelRect {
        self.geometry.local_frame(orientation)
    }
}

/// A tinted `length` raster with `source` resampled into the content area.
fn render_sprite(geometry: &MarkerGeometry, tint: Rgb<u8>, source: &RgbImage) -> RgbImage {
    let length = geometry.length();
    let content = geometry.content();
    let border = geometry.border();
    let mut sprite = RgbImage::from_pixel(length.width, length.height, tint);
    let (x, y) = (i64::from(border.width), i64::from(border.height));
    if source.dimensions() == (content.width, content.height) {
        imageops::replace(&mut sprite, source, x, y);
    } else {
        let resized = imageops::resize(
            source,
            content.width,
            content.height,
            imageops::FilterType::CatmullRom,
        );
        imageops::replace(&mut sprite, &resized, x, y);
    }
    sprite
}
