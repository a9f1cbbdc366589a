// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker orientations and the edge-aware orientation resolver.

use crate::geom::{PixelPoint, PixelSize};

/// One of the four diagonal-cut placements of a marker around its anchor.
///
/// The compass name tells which corner of the sprite's bounding box sits on
/// the anchor's far side: a north-west marker extends up and to the right of
/// its anchor, so the anchor is the box's bottom-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends up and right of the anchor.
    #[default]
    NorthWest,
    /// Extends up and left of the anchor.
    NorthEast,
    /// Extends down and right of the anchor.
    SouthWest,
    /// Extends down and left of the anchor.
    SouthEast,
}

impl Orientation {
    /// All orientations in table order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Index of this orientation in [`Orientation::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    /// Returns `true` for orientations that extend above the anchor.
    #[must_use]
    pub const fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// Returns `true` for orientations that extend right of the anchor.
    #[must_use]
    pub const fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }
}

/// Result of [`resolve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// The preferred orientation can be used as is.
    Unconstrained,
    /// The canvas edges force this orientation.
    Forced(Orientation),
}

impl Placement {
    /// Returns the forced orientation, or `preferred` when unconstrained.
    #[must_use]
    pub const fn or_preferred(self, preferred: Orientation) -> Orientation {
        match self {
            Self::Unconstrained => preferred,
            Self::Forced(o) => o,
        }
    }
}

/// Decides whether a marker anchored at `origin` may keep its `preferred`
/// orientation on a canvas of size `canvas`.
///
/// `extent` is the marker's full bounding box size (flag arm plus photo).
/// Sides are checked left/right first and then top/bottom; whenever the
/// preferred orientation is one of the valid choices for the crossed edge or
/// corner, the marker keeps it. Otherwise the orientation is turned clockwise
/// away from the crossed edges:
///
/// | crossed | forced |
/// |---|---|
/// | bottom | north-west |
/// | top | south-east |
/// | right | south-east |
/// | left | north-west |
/// | bottom-right | north-east |
/// | top-right | south-east |
/// | bottom-left | north-west |
/// | top-left | south-west |
#[must_use]
pub fn resolve(
    canvas: PixelSize,
    origin: PixelPoint,
    preferred: Orientation,
    extent: PixelSize,
) -> Placement {
    use Orientation::{NorthEast, NorthWest, SouthEast, SouthWest};

    let keep_or = |valid: &[Orientation], forced: Orientation| {
        if valid.contains(&preferred) {
            Placement::Unconstrained
        } else {
            Placement::Forced(forced)
        }
    };

    let (ox, oy) = (u64::from(origin.x), u64::from(origin.y));
    let (ew, eh) = (u64::from(extent.width), u64::from(extent.height));
    let (cw, ch) = (u64::from(canvas.width), u64::from(canvas.height));

    let clear_of_top = oy >= eh;
    let clear_of_bottom = oy + eh <= ch;

    if ox >= ew {
        if ox + ew <= cw {
            match (clear_of_top, clear_of_bottom) {
                (true, true) => Placement::Unconstrained,
                (true, false) => keep_or(&[NorthEast, NorthWest], NorthWest),
                (false, _) => keep_or(&[SouthEast, SouthWest], SouthEast),
            }
        } else {
            match (clear_of_top, clear_of_bottom) {
                (true, true) => keep_or(&[SouthEast, NorthEast], SouthEast),
                (true, false) => keep_or(&[NorthEast], NorthEast),
                (false, _) => keep_or(&[SouthEast], SouthEast),
            }
        }
    } else {
        match (clear_of_top, clear_of_bottom) {
            (true, true) => keep_or(&[SouthWest, NorthWest], NorthWest),
            (true, false) => keep_or(&[NorthWest], NorthWest),
            (false, _) => keep_or(&[SouthWest], SouthWest),
        }
    }
}
