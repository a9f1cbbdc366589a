// Copyright 2025 the Mapmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use image::{Rgb, RgbImage, imageops};
use mapmark_sprite::{Marker, MarkerStyle, Orientation, PixelPoint, PixelRect, PixelSize};
use smallvec::SmallVec;

use crate::error::SceneError;
use crate::order::DrawOrder;
use crate::viewport::{CenterUpdate, Viewport, ViewportDebugInfo};

/// Stable handle of a marker registered with a [`Scene`].
///
/// Ids are assigned in registration order, starting at zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct MarkerId(u32);

impl MarkerId {
    /// Returns this id as a `usize` index.
    #[inline]
    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw numeric id.
    #[inline]
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Construction parameters of a [`Scene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    /// Initial viewport center, in background coordinates.
    pub center: PixelPoint,
    /// Output raster size; both dimensions must be even.
    pub viewport_size: PixelSize,
    /// Color of output pixels not covered by the background.
    pub fill: Rgb<u8>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            center: PixelPoint::new(0, 0),
            viewport_size: PixelSize::new(640, 480),
            fill: Rgb([0xCC, 0xCC, 0xCC]),
        }
    }
}

impl SceneConfig {
    /// Sets the initial center.
    #[must_use]
    pub fn with_center(mut self, center: PixelPoint) -> Self {
        self.center = center;
        self
    }

    /// Sets the viewport size.
    #[must_use]
    pub fn with_viewport_size(mut self, size: PixelSize) -> Self {
        self.viewport_size = size;
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_fill(mut self, fill: Rgb<u8>) -> Self {
        self.fill = fill;
        self
    }
}

#[derive(Debug)]
struct Entry {
    marker: Marker,
    position: PixelPoint,
    // Applied whenever the marker itself is placed, never during a cascade.
    preferred: Orientation,
}

/// Markers a move has to erase and redraw, mover first.
type Entangled = SmallVec<[(MarkerId, PixelRect); 8]>;

/// A viewport over a background raster with markers painted on top.
///
/// The scene owns the output raster. [`Scene::draw`] repaints it from scratch,
/// while [`Scene::move_marker`] updates it incrementally: only the mover and
/// the markers stacked above it that it is entangled with are erased and
/// redrawn. Either way the output matches what a full redraw of the markers,
/// in [`draw_order`](Scene::draw_order), would produce.
#[derive(Debug)]
pub struct Scene {
    background: RgbImage,
    output: RgbImage,
    viewport: Viewport,
    fill: Rgb<u8>,
    entries: Vec<Entry>,
    order: DrawOrder<MarkerId>,
}

impl Scene {
    /// Creates a scene of `viewport_size` centered on `center` and paints it.
    ///
    /// # Errors
    ///
    /// See [`Scene::with_config`].
    pub fn new(
        center: PixelPoint,
        viewport_size: PixelSize,
        background: RgbImage,
    ) -> Result<Self, SceneError> {
        Self::with_config(
            SceneConfig::default()
                .with_center(center)
                .with_viewport_size(viewport_size),
            background,
        )
    }

    /// Creates a scene from `config` and paints it.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Viewport::new`] for the configured size and
    /// center.
    pub fn with_config(config: SceneConfig, background: RgbImage) -> Result<Self, SceneError> {
        let bounds = PixelSize::new(background.width(), background.height());
        let viewport = Viewport::new(config.viewport_size, config.center, bounds)?;
        let size = viewport.size();
        let mut scene = Self {
            background,
            output: RgbImage::from_pixel(size.width, size.height, config.fill),
            viewport,
            fill: config.fill,
            entries: Vec::new(),
            order: DrawOrder::default(),
        };
        scene.draw();
        Ok(scene)
    }

    /// Moves the viewport center; see [`Viewport::set_center`].
    ///
    /// An out-of-bounds axis keeps its current value, so a request whose only
    /// in-bounds axis already matches the center reports
    /// [`CenterUpdate::Unchanged`]. Nothing is repainted. Call
    /// [`draw`](Self::draw) on [`CenterUpdate::Moved`].
    pub fn set_center(&mut self, center: PixelPoint) -> CenterUpdate {
        let update = self.viewport.set_center(center);
        if update == CenterUpdate::Rejected {
            log::trace!("center {center} rejected");
        }
        update
    }

    /// Repaints the output from scratch.
    ///
    /// Recomputes the projection, copies the visible background, and draws
    /// every visible marker in registration order.
    pub fn draw(&mut self) {
        let projection = self.viewport.update_projection();
        for px in self.output.pixels_mut() {
            *px = self.fill;
        }
        let src = projection.world_origin();
        let size = projection.size();
        let patch =
            imageops::crop_imm(&self.background, src.x, src.y, size.width, size.height).to_image();
        let dst = self.viewport.screen_origin();
        imageops::replace(&mut self.output, &patch, i64::from(dst.x), i64::from(dst.y));

        self.order.clear();
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.marker.reset_drawn();
            entry.marker.set_preferred_orientation(entry.preferred);
            let origin = self.viewport.world_to_screen(entry.position);
            entry.marker.set_origin(origin);
            if origin.is_some() && entry.marker.draw(&mut self.output) {
                self.order.push(id_at(index));
            }
        }
        log::debug!(
            "full redraw: {} of {} markers drawn, projection {:?}",
            self.order.len(),
            self.entries.len(),
            projection
        );
    }

    /// Registers a marker at the world position `position`.
    ///
    /// The marker is not drawn until the next [`draw`](Self::draw) or
    /// [`move_marker`](Self::move_marker) of it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Marker`] if the marker cannot be built.
    pub fn add_marker(
        &mut self,
        position: PixelPoint,
        style: MarkerStyle,
        source: &RgbImage,
    ) -> Result<MarkerId, SceneError> {
        let marker = Marker::new(style, source)?;
        let id = id_at(self.entries.len());
        self.entries.push(Entry {
            preferred: marker.preferred_orientation(),
            marker,
            position,
        });
        Ok(id)
    }

    /// Moves a marker to the world position `position` and updates the output.
    ///
    /// The mover ends up on top of every other marker. Unknown ids and
    /// unchanged positions are ignored.
    pub fn move_marker(&mut self, id: MarkerId, position: PixelPoint) {
        let Some(entry) = self.entries.get(id.as_usize()) else {
            log::trace!("move of unknown marker {id:?} ignored");
            return;
        };
        if entry.position == position {
            return;
        }

        if let Some(k) = self.order.position(id) {
            let entangled = self.entangled_from(k);
            for (other, _) in entangled.iter().rev() {
                self.entries[other.as_usize()].marker.erase(&mut self.output);
            }
            self.order.remove(id);
            for (other, _) in entangled.iter().skip(1) {
                let redrawn = self.entries[other.as_usize()].marker.draw(&mut self.output);
                debug_assert!(redrawn, "an erased marker redraws at its old origin");
            }
            log::trace!(
                "moving {id:?} from stack position {k} disturbed {} markers",
                entangled.len() - 1
            );
        }

        let entry = &mut self.entries[id.as_usize()];
        entry.position = position;
        entry.marker.set_preferred_orientation(entry.preferred);
        let origin = self.viewport.world_to_screen(position);
        entry.marker.set_origin(origin);
        if origin.is_some() && entry.marker.draw(&mut self.output) {
            self.order.push(id);
        }
    }

    /// Sets the orientation a marker prefers where no canvas edge interferes.
    ///
    /// Takes effect the next time the marker is placed by [`draw`](Self::draw)
    /// or by moving it. Unknown ids are ignored.
    pub fn set_marker_orientation(&mut self, id: MarkerId, orientation: Orientation) {
        match self.entries.get_mut(id.as_usize()) {
            Some(entry) => entry.preferred = orientation,
            None => log::trace!("orientation of unknown marker {id:?} ignored"),
        }
    }

    /// Collects the marker at stack position `k` and every marker stacked
    /// above it whose frame overlaps one already collected.
    fn entangled_from(&self, k: usize) -> Entangled {
        let mut entangled = Entangled::new();
        let stack = self.order.as_slice();
        for (i, &id) in stack.iter().enumerate().skip(k) {
            let Some(frame) = self.entries[id.as_usize()].marker.drawn_frame() else {
                continue;
            };
            if i == k || entangled.iter().any(|(_, f)| f.overlaps(&frame)) {
                entangled.push((id, frame));
            }
        }
        entangled
    }

    /// The composited output raster.
    #[must_use]
    pub fn output(&self) -> &RgbImage {
        &self.output
    }

    /// The background raster.
    #[must_use]
    pub fn background(&self) -> &RgbImage {
        &self.background
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Fill color of uncovered output pixels.
    #[must_use]
    pub fn fill(&self) -> Rgb<u8> {
        self.fill
    }

    /// Returns the marker with `id`.
    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.entries.get(id.as_usize()).map(|e| &e.marker)
    }

    /// Returns the world position of the marker with `id`.
    #[must_use]
    pub fn marker_position(&self, id: MarkerId) -> Option<PixelPoint> {
        self.entries.get(id.as_usize()).map(|e| e.position)
    }

    /// Drawn markers, bottom first.
    #[must_use]
    pub fn draw_order(&self) -> &[MarkerId] {
        self.order.as_slice()
    }

    /// Number of registered markers.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.entries.len()
    }

    /// Ids of all registered markers, in registration order.
    pub fn marker_ids(&self) -> impl Iterator<Item = MarkerId> + '_ {
        (0..self.entries.len()).map(id_at)
    }

    /// Returns a snapshot of the scene state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> SceneDebugInfo {
        let viewport = self.viewport.debug_info();
        SceneDebugInfo {
            viewport,
            visible_world_rect: viewport.visible_world_rect,
            marker_count: self.entries.len(),
            drawn_count: self.order.len(),
        }
    }
}

fn id_at(index: usize) -> MarkerId {
    MarkerId(u32::try_from(index).expect("too many markers for MarkerId (u32)"))
}

/// Debug snapshot of a [`Scene`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneDebugInfo {
    /// Viewport state.
    pub viewport: ViewportDebugInfo,
    /// World-space rectangle currently visible.
    pub visible_world_rect: kurbo::Rect,
    /// Number of registered markers.
    pub marker_count: usize,
    /// Number of markers currently drawn.
    pub drawn_count: usize,
}
