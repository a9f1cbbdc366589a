// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene construction errors.

use mapmark_sprite::{MarkerError, PixelPoint, PixelSize};

/// Error returned when a scene or one of its markers cannot be built.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A viewport dimension is odd, so the center pixel is ambiguous.
    #[error("viewport size {width}x{height} must be even in both dimensions")]
    OddViewport {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A viewport dimension is zero.
    #[error("viewport has no pixels")]
    EmptyViewport,
    /// The initial center lies outside the background.
    #[error("center {center} lies outside the {bounds} background")]
    CenterOutOfBounds {
        /// Requested center.
        center: PixelPoint,
        /// Background size.
        bounds: PixelSize,
    },
    /// A marker style or source image was rejected.
    #[error(transparent)]
    Marker(#[from] MarkerError),
}
