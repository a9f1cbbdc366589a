// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use mapmark_sprite::{PixelPoint, PixelRect, PixelSize};

use crate::error::SceneError;

/// Outcome of [`Viewport::set_center`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum CenterUpdate {
    /// At least one axis changed; the scene needs a full redraw.
    Moved,
    /// The center is unchanged.
    Unchanged,
    /// Both axes were out of bounds; nothing changed.
    Rejected,
}

/// The part of the background shown through the viewport.
///
/// Extents are measured from `center`. Away from the background's edges each
/// extent is half the viewport size; near an edge the extent facing it shrinks
/// to the distance to the edge, so the visible region is off-center inside the
/// viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Projection {
    /// Center the extents were computed for.
    pub center: PixelPoint,
    /// Columns visible left of the center.
    pub left: u32,
    /// Columns visible from the center rightwards, center included.
    pub right: u32,
    /// Rows visible above the center.
    pub top: u32,
    /// Rows visible from the center downwards, center included.
    pub bottom: u32,
}

impl Projection {
    fn compute(size: PixelSize, bounds: PixelSize, center: PixelPoint) -> Self {
        let (half_w, half_h) = (size.width / 2, size.height / 2);
        Self {
            center,
            left: center.x.min(half_w),
            right: (bounds.width - center.x).min(half_w),
            top: center.y.min(half_h),
            bottom: (bounds.height - center.y).min(half_h),
        }
    }

    /// Top-left visible background pixel.
    #[must_use]
    pub fn world_origin(&self) -> PixelPoint {
        PixelPoint::new(self.center.x - self.left, self.center.y - self.top)
    }

    /// Size of the visible background region.
    #[must_use]
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.left + self.right, self.top + self.bottom)
    }

    /// The visible background region, in world coordinates.
    #[must_use]
    pub fn world_rect(&self) -> PixelRect {
        let origin = self.world_origin();
        PixelRect::from_origin_size(i64::from(origin.x), i64::from(origin.y), self.size())
    }

    /// Returns `true` if the world position `p` is visible.
    #[must_use]
    pub fn contains(&self, p: PixelPoint) -> bool {
        let origin = self.world_origin();
        p.x >= origin.x
            && p.x < self.center.x + self.right
            && p.y >= origin.y
            && p.y < self.center.y + self.bottom
    }
}

/// A fixed-size window onto a background raster.
///
/// The center may be moved freely inside the background, but the
/// [`Projection`] the scene paints with is only recomputed by
/// [`Viewport::update_projection`]. Until then, world positions keep mapping
/// to the canvas as it was last painted.
#[derive(Clone, Debug)]
pub struct Viewport {
    size: PixelSize,
    bounds: PixelSize,
    center: PixelPoint,
    projection: Projection,
}

impl Viewport {
    /// Creates a viewport of `size` centered on `center` over a background of
    /// size `bounds`.
    ///
    /// # Errors
    ///
    /// - [`SceneError::EmptyViewport`] if `size` has a zero dimension.
    /// - [`SceneError::OddViewport`] if either dimension of `size` is odd.
    /// - [`SceneError::CenterOutOfBounds`] if `center` is not a background
    ///   pixel.
    pub fn new(
        size: PixelSize,
        center: PixelPoint,
        bounds: PixelSize,
    ) -> Result<Self, SceneError> {
        if size.is_empty() {
            return Err(SceneError::EmptyViewport);
        }
        if size.width % 2 != 0 || size.height % 2 != 0 {
            return Err(SceneError::OddViewport {
                width: size.width,
                height: size.height,
            });
        }
        if center.x >= bounds.width || center.y >= bounds.height {
            return Err(SceneError::CenterOutOfBounds { center, bounds });
        }
        Ok(Self {
            size,
            bounds,
            center,
            projection: Projection::compute(size, bounds, center),
        })
    }

    /// Viewport (and output raster) size.
    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Background size.
    #[must_use]
    pub fn bounds(&self) -> PixelSize {
        self.bounds
    }

    /// Requested center, in world coordinates.
    #[must_use]
    pub fn center(&self) -> PixelPoint {
        self.center
    }

    /// Projection as of the last [`update_projection`](Self::update_projection).
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Moves the center.
    ///
    /// Each axis is taken over only if it lies inside the background; the
    /// other axis keeps its value. The projection is not updated.
    pub fn set_center(&mut self, center: PixelPoint) -> CenterUpdate {
        let x_ok = center.x < self.bounds.width;
        let y_ok = center.y < self.bounds.height;
        if !x_ok && !y_ok {
            return CenterUpdate::Rejected;
        }
        let next = PixelPoint::new(
            if x_ok { center.x } else { self.center.x },
            if y_ok { center.y } else { self.center.y },
        );
        if next == self.center {
            return CenterUpdate::Unchanged;
        }
        self.center = next;
        CenterUpdate::Moved
    }

    /// Recomputes the projection for the current center and returns it.
    pub fn update_projection(&mut self) -> Projection {
        self.projection = Projection::compute(self.size, self.bounds, self.center);
        self.projection
    }

    /// Background region shown by the current projection.
    #[must_use]
    pub fn visible_world_rect(&self) -> PixelRect {
        self.projection.world_rect()
    }

    /// Output pixel the projection's [`world_origin`](Projection::world_origin)
    /// lands on.
    #[must_use]
    pub fn screen_origin(&self) -> PixelPoint {
        let p = &self.projection;
        PixelPoint::new(self.size.width / 2 - p.left, self.size.height / 2 - p.top)
    }

    /// Maps a world position to the output raster; `None` if not visible.
    #[must_use]
    pub fn world_to_screen(&self, p: PixelPoint) -> Option<PixelPoint> {
        let proj = &self.projection;
        proj.contains(p).then(|| {
            PixelPoint::new(
                p.x + self.size.width / 2 - proj.center.x,
                p.y + self.size.height / 2 - proj.center.y,
            )
        })
    }

    /// Returns a snapshot of the viewport state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            size: self.size,
            bounds: self.bounds,
            center: self.center,
            projection: self.projection,
            visible_world_rect: self.visible_world_rect().into(),
        }
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Viewport size.
    pub size: PixelSize,
    /// Background size.
    pub bounds: PixelSize,
    /// Requested center.
    pub center: PixelPoint,
    /// Projection in effect.
    pub projection: Projection,
    /// World-space rectangle currently visible.
    pub visible_world_rect: kurbo::Rect,
}
