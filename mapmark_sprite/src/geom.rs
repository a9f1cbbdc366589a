// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel geometry shared by markers and scenes.

use core::fmt;

/// A pixel position in world (background) or screen (canvas) space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl PixelPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for PixelPoint {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A width and height in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl PixelSize {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the rectangle `(0, 0)..(width, height)`.
    #[must_use]
    pub fn to_rect(self) -> PixelRect {
        PixelRect::new(0, 0, i64::from(self.width), i64::from(self.height))
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned pixel rectangle given by two absolute corners.
///
/// `(x0, y0)` is the near corner and `(x1, y1)` the far corner; the far corner
/// is *not* a width/height delta. Corners are signed because marker frames are
/// expressed relative to an anchor and may extend to its left or above it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Near corner column.
    pub x0: i64,
    /// Near corner row.
    pub y0: i64,
    /// Far corner column.
    pub x1: i64,
    /// Far corner row.
    pub y1: i64,
}

impl PixelRect {
    /// Creates a rectangle from its two corners.
    #[must_use]
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates a rectangle from a near corner and a size.
    #[must_use]
    pub fn from_origin_size(x: i64, y: i64, size: PixelSize) -> Self {
        Self::new(
            x,
            y,
            x + i64::from(size.width),
            y + i64::from(size.height),
        )
    }

    /// Horizontal extent, `x1 - x0`.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    /// Vertical extent, `y1 - y0`.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    /// Returns this rectangle shifted by `(dx, dy)`.
    #[must_use]
    pub const fn translate(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Returns `true` unless one rectangle lies entirely left of, above, right
    /// of, or below the other.
    ///
    /// Corners are inclusive, so rectangles that share only an edge overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        if self.x1 < other.x0 || other.x1 < self.x0 {
            return false;
        }
        if self.y1 < other.y0 || other.y1 < self.y0 {
            return false;
        }
        true
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }
}

impl From<PixelRect> for kurbo::Rect {
    fn from(r: PixelRect) -> Self {
        Self::new(r.x0 as f64, r.y0 as f64, r.x1 as f64, r.y1 as f64)
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]..[{}, {}]", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelRect, PixelSize};

    #[test]
    fn overlap_counts_shared_edges() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(10, 10, 20, 20);
        assert!(a.overlaps(&b), "corner contact is an overlap");
        assert!(b.overlaps(&a), "overlap is symmetric");

        let c = PixelRect::new(11, 0, 20, 10);
        assert!(!a.overlaps(&c), "c lies strictly to the right of a");
        let d = PixelRect::new(0, -20, 10, -1);
        assert!(!a.overlaps(&d), "d lies strictly above a");
    }

    #[test]
    fn overlap_handles_containment() {
        let outer = PixelRect::new(-50, -50, 50, 50);
        let inner = PixelRect::new(-1, -1, 1, 1);
        assert!(outer.overlaps(&inner), "containment is an overlap");
        assert!(outer.contains_rect(&inner), "inner lies within outer");
        assert!(!inner.contains_rect(&outer), "outer does not fit in inner");
    }

    #[test]
    fn translate_and_sizes() {
        let r = PixelRect::from_origin_size(3, 4, PixelSize::new(5, 6));
        assert_eq!(r, PixelRect::new(3, 4, 8, 10));
        assert_eq!(r.width(), 5);
        assert_eq!(r.height(), 6);
        assert_eq!(r.translate(-3, -4), PixelRect::new(0, 0, 5, 6));
        assert_eq!(PixelSize::new(5, 6).to_rect(), PixelRect::new(0, 0, 5, 6));
    }

    #[test]
    fn converts_to_kurbo() {
        let r: kurbo::Rect = PixelRect::new(-2, 0, 8, 4).into();
        assert_eq!(r, kurbo::Rect::new(-2.0, 0.0, 8.0, 4.0));
    }
}
