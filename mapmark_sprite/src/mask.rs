// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker geometry and the tapered flag cut masks.

use core::ops::RangeInclusive;

use kurbo::Vec2;

use crate::error::{Axis, MarkerError};
use crate::geom::{PixelPoint, PixelRect, PixelSize};
use crate::orient::Orientation;

/// Derived sizes of a marker sprite.
///
/// A marker is drawn as a rectangular *photo* of size [`length`](Self::length)
/// next to a *flag* region [`offset`](Self::offset)`.width` wide and
/// [`extent`](Self::extent)`.height` tall. The flag region is only partially
/// painted, through an orientation's [`CutMask`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerGeometry {
    content: PixelSize,
    border: PixelSize,
    split: Vec2,
    length: PixelSize,
    offset: PixelSize,
    extent: PixelSize,
}

impl MarkerGeometry {
    /// Computes the geometry of a sprite with `content` pixels surrounded by
    /// `border`, split at the fractional point `split`.
    ///
    /// # Errors
    ///
    /// - [`MarkerError::SplitOutOfRange`] if either split component is outside
    ///   `[0, 1]`.
    /// - [`MarkerError::EmptyContent`] if either content dimension is zero.
    /// - [`MarkerError::SizeOverflow`] if the padded sprite size does not fit
    ///   in `u32`.
    /// - [`MarkerError::ZeroFlagWidth`] if the horizontal split rounds to zero
    ///   pixels.
    pub fn new(content: PixelSize, border: PixelSize, split: Vec2) -> Result<Self, MarkerError> {
        for (axis, value) in [(Axis::X, split.x), (Axis::Y, split.y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MarkerError::SplitOutOfRange { axis, value });
            }
        }
        if content.is_empty() {
            return Err(MarkerError::EmptyContent(content));
        }
        let overflow = || MarkerError::SizeOverflow { content, border };
        let length = padded(content, border).ok_or_else(overflow)?;
        let offset = PixelSize::new(
            scale_rounded(length.width, split.x),
            scale_rounded(length.height, split.y),
        );
        if offset.width == 0 {
            return Err(MarkerError::ZeroFlagWidth {
                split_x: split.x,
                sprite_width: length.width,
            });
        }
        let extent = offset
            .width
            .checked_add(length.width)
            .zip(offset.height.checked_add(length.height))
            .map(|(w, h)| PixelSize::new(w, h))
            .ok_or_else(overflow)?;
        Ok(Self {
            content,
            border,
            split,
            length,
            offset,
            extent,
        })
    }

    /// Size of the source content area inside the border.
    #[must_use]
    pub fn content(&self) -> PixelSize {
        self.content
    }

    /// Border thickness on each side.
    #[must_use]
    pub fn border(&self) -> PixelSize {
        self.border
    }

    /// Fractional split point.
    #[must_use]
    pub fn split(&self) -> Vec2 {
        self.split
    }

    /// Padded photo size, `content + 2 * border`.
    #[must_use]
    pub fn length(&self) -> PixelSize {
        self.length
    }

    /// Flag arm size, `round(length * split)`.
    #[must_use]
    pub fn offset(&self) -> PixelSize {
        self.offset
    }

    /// Full bounding box size of the marker in any orientation.
    #[must_use]
    pub fn extent(&self) -> PixelSize {
        self.extent
    }

    /// Size of the flag region (and of each cut mask).
    #[must_use]
    pub fn flag_size(&self) -> PixelSize {
        PixelSize::new(self.offset.width, self.extent().height)
    }

    /// Bounding box of `orientation` relative to the anchor.
    #[must_use]
    pub fn local_frame(&self, orientation: Orientation) -> PixelRect {
        let extent = self.extent();
        let (w, h) = (i64::from(extent.width), i64::from(extent.height));
        let (x0, x1) = if orientation.is_west() { (0, w) } else { (-w, 0) };
        let (y0, y1) = if orientation.is_north() { (-h, 0) } else { (0, h) };
        PixelRect::new(x0, y0, x1, y1)
    }

    /// Canvas rectangle covered by the flag region for an anchor at `origin`.
    #[must_use]
    pub fn flag_rect(&self, orientation: Orientation, origin: PixelPoint) -> PixelRect {
        let (ox, oy) = (i64::from(origin.x), i64::from(origin.y));
        let arm = i64::from(self.offset.width);
        let h = i64::from(self.extent().height);
        let x = if orientation.is_west() { ox } else { ox - arm };
        let y = if orientation.is_north() { oy - h } else { oy };
        PixelRect::from_origin_size(x, y, self.flag_size())
    }

    /// Canvas rectangle covered by the photo for an anchor at `origin`.
    #[must_use]
    pub fn photo_rect(&self, orientation: Orientation, origin: PixelPoint) -> PixelRect {
        let (ox, oy) = (i64::from(origin.x), i64::from(origin.y));
        let arm_x = i64::from(self.offset.width);
        let arm_y = i64::from(self.offset.height);
        let len_x = i64::from(self.length.width);
        let h = i64::from(self.extent().height);
        let x = if orientation.is_west() {
            ox + arm_x
        } else {
            ox - arm_x - len_x
        };
        let y = if orientation.is_north() { oy - h } else { oy + arm_y };
        PixelRect::from_origin_size(x, y, self.length)
    }

    /// Builds the flag cut mask for `orientation`.
    ///
    /// Each column of the flag region is filled between two monotone cubic
    /// boundaries. Both boundaries share the taper
    /// `g(i) = i + i²/w - i³/w²` (with `w` the flag width) and differ in base
    /// and slope, which are picked per orientation so that the flag narrows to
    /// a point at the anchor and widens to the photo's height next to it.
    #[must_use]
    pub fn cut_mask(&self, orientation: Orientation) -> CutMask {
        let width = self.offset.width;
        let height = self.extent().height;
        let w = width as f32;
        let arm_y = self.offset.height as f32;
        let len_y = self.length.height as f32;
        let h = height as f32;
        let s0 = (arm_y - 1.0) / w;
        let s1 = (h - 1.0) / w;

        let (near, far) = match orientation {
            Orientation::NorthWest => (Curve::new(0.0, s0), Curve::new(0.0, s1)),
            Orientation::NorthEast => (Curve::new(arm_y, -s0), Curve::new(h, -s1)),
            Orientation::SouthWest => (Curve::new(h, -s1), Curve::new(h, -s0)),
            Orientation::SouthEast => (Curve::new(0.0, s1), Curve::new(len_y, s0)),
        };

        let last_row = i64::from(height) - 1;
        let row = |p: f32| (last_row - round_to_i64(p)).clamp(0, last_row);
        let spans = (0..width)
            .map(|i| {
                let g = taper(i as f32, w);
                let (a, b) = (row(far.at(g)), row(near.at(g)));
                ColumnSpan {
                    top: to_row(a.min(b)),
                    bottom: to_row(a.max(b)),
                }
            })
            .collect();

        CutMask {
            size: PixelSize::new(width, height),
            spans,
        }
    }
}

/// `base + slope * g`.
#[derive(Clone, Copy)]
struct Curve {
    base: f32,
    slope: f32,
}

impl Curve {
    const fn new(base: f32, slope: f32) -> Self {
        Self { base, slope }
    }

    fn at(self, g: f32) -> f32 {
        self.base + self.slope * g
    }
}

/// `content + 2 * border`, or `None` on overflow.
fn padded(content: PixelSize, border: PixelSize) -> Option<PixelSize> {
    let axis = |c: u32, b: u32| b.checked_mul(2).and_then(|b2| c.checked_add(b2));
    Some(PixelSize::new(
        axis(content.width, border.width)?,
        axis(content.height, border.height)?,
    ))
}

fn taper(i: f32, w: f32) -> f32 {
    i + i * i / w - i * i * i / (w * w)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "taper values are bounded by the sprite height"
)]
fn round_to_i64(v: f32) -> i64 {
    v.round() as i64
}

fn to_row(v: i64) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the product is rounded and bounded by `len`"
)]
fn scale_rounded(len: u32, fraction: f64) -> u32 {
    (f64::from(len) * fraction).round() as u32
}

/// Filled rows of one mask column, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnSpan {
    /// First filled row.
    pub top: u32,
    /// Last filled row.
    pub bottom: u32,
}

impl ColumnSpan {
    /// Rows covered by this span.
    #[must_use]
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.top..=self.bottom
    }
}

/// Binary mask over a marker's flag region.
///
/// Every column holds exactly one contiguous run of set pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutMask {
    size: PixelSize,
    spans: Vec<ColumnSpan>,
}

impl CutMask {
    /// Mask size; equal to [`MarkerGeometry::flag_size`].
    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Per-column filled spans, left to right.
    #[must_use]
    pub fn spans(&self) -> &[ColumnSpan] {
        &self.spans
    }

    /// Returns `true` if the mask is set at `(x, y)`.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.spans
            .get(x as usize)
            .is_some_and(|span| span.rows().contains(&y))
    }

    /// Number of set pixels.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.spans
            .iter()
            .map(|s| u64::from(s.bottom - s.top) + 1)
            .sum()
    }
}
