// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas sub-rectangle backups and masked fills.

use image::{Rgb, RgbImage, imageops};

use crate::geom::{PixelRect, PixelSize};
use crate::mask::CutMask;

/// Pixels copied out of a canvas rectangle, restorable verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Backup {
    rect: PixelRect,
    pixels: RgbImage,
}

impl Backup {
    /// Copies `rect` out of `canvas`; `None` if it does not lie within it.
    pub(crate) fn capture(canvas: &RgbImage, rect: PixelRect) -> Option<Self> {
        let (x, y, w, h) = canvas_span(canvas, rect)?;
        let pixels = imageops::crop_imm(canvas, x, y, w, h).to_image();
        Some(Self { rect, pixels })
    }

    /// Writes the saved pixels back to where they came from.
    pub(crate) fn restore(&self, canvas: &mut RgbImage) {
        imageops::replace(canvas, &self.pixels, self.rect.x0, self.rect.y0);
    }

    pub(crate) fn rect(&self) -> PixelRect {
        self.rect
    }
}

/// Paints `tint` into every mask pixel of `rect`, which must match the mask
/// size and lie within `canvas`.
pub(crate) fn fill_masked(canvas: &mut RgbImage, rect: PixelRect, mask: &CutMask, tint: Rgb<u8>) {
    let Some((x0, y0, w, h)) = canvas_span(canvas, rect) else {
        return;
    };
    debug_assert_eq!(
        PixelSize::new(w, h),
        mask.size(),
        "flag rectangle and mask disagree in size"
    );
    for (x, span) in (x0..x0 + w).zip(mask.spans()) {
        for row in span.rows().take_while(|row| *row < h) {
            canvas.put_pixel(x, y0 + row, tint);
        }
    }
}

/// Converts `rect` to `(x, y, width, height)` if it lies within `canvas`.
fn canvas_span(canvas: &RgbImage, rect: PixelRect) -> Option<(u32, u32, u32, u32)> {
    let (cw, ch) = canvas.dimensions();
    if rect.x0 < 0 || rect.y0 < 0 || rect.x1 > i64::from(cw) || rect.y1 > i64::from(ch) {
        return None;
    }
    Some((
        u32::try_from(rect.x0).ok()?,
        u32::try_from(rect.y0).ok()?,
        u32::try_from(rect.width()).ok()?,
        u32::try_from(rect.height()).ok()?,
    ))
}
