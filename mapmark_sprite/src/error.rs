// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker construction errors.

use crate::geom::PixelSize;

/// Axis of a split fraction, used in [`MarkerError::SplitOutOfRange`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

/// Error returned when a marker's style cannot produce a drawable sprite.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MarkerError {
    /// A split fraction was outside `[0, 1]` or not a number.
    #[error("split fraction {value} on the {axis:?} axis is outside [0, 1]")]
    SplitOutOfRange {
        /// Offending axis.
        axis: Axis,
        /// Offending value.
        value: f64,
    },
    /// The content area has a zero dimension.
    #[error("marker content size {0} has a zero dimension")]
    EmptyContent(PixelSize),
    /// The horizontal split rounds to a zero-width flag.
    #[error("split fraction {split_x} of sprite width {sprite_width} leaves no room for the flag")]
    ZeroFlagWidth {
        /// Horizontal split fraction.
        split_x: f64,
        /// Padded sprite width the fraction was applied to.
        sprite_width: u32,
    },
    /// The padded sprite size does not fit in `u32` pixels.
    #[error("marker content {content} with border {border} overflows the sprite size")]
    SizeOverflow {
        /// Requested content size.
        content: PixelSize,
        /// Requested border thickness.
        border: PixelSize,
    },
    /// The source image has no pixels.
    #[error("source image is empty")]
    EmptySource,
}
