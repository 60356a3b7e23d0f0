//! The overlay component.
//!
//! `GeoOverlay` anchors one opaque drawable element to a geographic region
//! and keeps it in lock-step with the host view's pan/zoom state. The
//! element's internal drawing space is sized exactly once; afterwards the
//! overlay only ever moves and rescales the element as a whole, so its
//! contents never need redrawing on zoom.

use geo_types::Coord;
use glam::DVec2;

use super::options::OverlayOptions;
use super::viewport::{drawing_extent, ViewportState};
use crate::element::{OverlayElement, INTERACTIVE_CLASS, OVERLAY_CLASS, ZOOM_ANIMATED_CLASS};
use crate::error::OverlayError;
use crate::geo::GeoRegion;
use crate::host::{HostView, ViewEvent};

/// A vector overlay that behaves like a native map layer.
///
/// The overlay is held by the host's layer manager, which calls
/// [`attach`](Self::attach), forwards view notifications to
/// [`notify`](Self::notify) while attached, and calls
/// [`detach`](Self::detach) on teardown. All other operations are safe to
/// call at any time: lifecycle operations degrade to no-ops without a live
/// host view, coordinate conversions surface [`OverlayError::NotAttached`].
pub struct GeoOverlay {
    region: GeoRegion,
    options: OverlayOptions,
    element: Box<dyn OverlayElement>,
    attached: bool,
    interactive_registered: bool,
    /// Fixed drawing-space extent, materialized on the first sync and never
    /// recomputed.
    extent: Option<DVec2>,
    /// Screen-space state from the most recent sync. Replaced wholesale,
    /// never field-by-field.
    viewport: Option<ViewportState>,
}

impl GeoOverlay {
    /// Creates an overlay covering `region`, driving `element`.
    ///
    /// The element capability is owned exclusively by the overlay from here
    /// on; no other party may mutate its position, size, or transform. The
    /// overlay marker class is applied immediately; interactivity and the
    /// zoom-animation marker are resolved at attach time, when the host is
    /// known.
    pub fn new(
        region: GeoRegion,
        options: OverlayOptions,
        mut element: Box<dyn OverlayElement>,
    ) -> Result<Self, OverlayError> {
        options.validate()?;
        element.add_class(OVERLAY_CLASS);

        Ok(Self {
            region,
            options,
            element,
            attached: false,
            interactive_registered: false,
            extent: None,
            viewport: None,
        })
    }

    /// Creates an overlay with default options (one meter per drawing unit,
    /// non-interactive).
    pub fn with_defaults(
        region: GeoRegion,
        element: Box<dyn OverlayElement>,
    ) -> Result<Self, OverlayError> {
        Self::new(region, OverlayOptions::default(), element)
    }

    /// Attaches the overlay to a live host view: marks the element, appends
    /// it to the layering surface, and performs an immediate full sync.
    ///
    /// From this point the host's layer manager delivers view notifications
    /// through [`notify`](Self::notify). No-op if already attached.
    pub fn attach(&mut self, host: &dyn HostView) {
        if self.attached {
            return;
        }

        if host.zoom_animated() {
            self.element.add_class(ZOOM_ANIMATED_CLASS);
        }

        if self.options.interactive {
            self.element.add_class(INTERACTIVE_CLASS);
            self.element.set_interactive_target(true);
            self.interactive_registered = true;
        }

        self.element.append_to_surface();
        self.attached = true;
        log::debug!("overlay attached, syncing to host view");

        self.sync_view(host);
    }

    /// Detaches the overlay: removes the element from the layering surface
    /// and stops all event handling.
    ///
    /// Notifications delivered after this point are no-ops, including a
    /// late animated-zoom callback racing teardown. No-op if not attached.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }

        self.element.remove_from_surface();
        if self.interactive_registered {
            self.element.set_interactive_target(false);
            self.element.remove_class(INTERACTIVE_CLASS);
            self.interactive_registered = false;
        }

        self.attached = false;
        self.viewport = None;
        log::debug!("overlay detached");
    }

    /// Handles a view notification from the host.
    ///
    /// Pan, zoom, and view-reset all resynchronize; an animated zoom applies
    /// the interim transform. Ignored entirely while not attached.
    pub fn notify(&mut self, host: &dyn HostView, event: &ViewEvent) {
        if !self.attached {
            return;
        }

        match *event {
            ViewEvent::Pan | ViewEvent::Zoom | ViewEvent::ViewReset => self.sync_view(host),
            ViewEvent::AnimatedZoom { zoom, center } => self.animate_zoom(host, zoom, center),
        }
    }

    /// Recomputes the element's on-screen position and size from the host's
    /// current projection of the region corners.
    ///
    /// The drawing-space extent is materialized on the first call and fixed
    /// permanently; a view reset re-anchors the pixel rectangle but never
    /// resizes the drawing space.
    pub fn sync_view(&mut self, host: &dyn HostView) {
        if !self.attached {
            return;
        }

        let extent = match self.extent {
            Some(extent) => extent,
            None => {
                let extent = drawing_extent(&self.region, self.options.unit);
                self.element.set_content_extent(extent);
                self.extent = Some(extent);
                log::debug!(
                    "drawing extent fixed at {:.1} x {:.1} units",
                    extent.x,
                    extent.y
                );
                extent
            }
        };

        let nw_pixel = host.geo_to_screen_pixel(self.region.north_west());
        let se_pixel = host.geo_to_screen_pixel(self.region.south_east());

        let state = ViewportState::from_corners(nw_pixel, se_pixel, extent);
        self.viewport = Some(state);

        self.element.set_position(state.position);
        self.element.set_size(state.size);
    }

    /// Applies the interim transform for an animated zoom toward
    /// `target_zoom` centered on `target_center`.
    ///
    /// A single translate+scale pair is handed to the element so the host
    /// renderer can interpolate it smoothly; nothing else changes. The
    /// settled zoom event that follows the animation resynchronizes to
    /// exact position and size.
    fn animate_zoom(&mut self, host: &dyn HostView, target_zoom: f64, target_center: Coord<f64>) {
        let scale = host.zoom_scale(target_zoom);
        let offset =
            host.geo_to_screen_pixel_toward(self.region.north_west(), target_zoom, target_center);

        self.element.set_transform(offset, scale);
    }

    /// Converts a geographic coordinate to drawing-space coordinates.
    ///
    /// For coordinates within the region the result lies within
    /// `[0, drawing extent]` up to projection approximation error; outside
    /// the region it is undefined but non-crashing. Fails with
    /// [`OverlayError::NotAttached`] before the first sync.
    pub fn geo_to_local(
        &self,
        host: &dyn HostView,
        coord: Coord<f64>,
    ) -> Result<DVec2, OverlayError> {
        let viewport = self.viewport.ok_or(OverlayError::NotAttached)?;
        let pixel = host.geo_to_screen_pixel(coord);

        Ok((pixel - viewport.position) / viewport.pixels_per_unit)
    }

    /// Converts drawing-space coordinates back to a geographic coordinate.
    ///
    /// Exact left inverse of [`geo_to_local`](Self::geo_to_local) up to
    /// floating-point rounding.
    pub fn local_to_geo(
        &self,
        host: &dyn HostView,
        local: DVec2,
    ) -> Result<Coord<f64>, OverlayError> {
        let viewport = self.viewport.ok_or(OverlayError::NotAttached)?;
        let pixel = local * viewport.pixels_per_unit + viewport.position;

        Ok(host.screen_pixel_to_geo(pixel))
    }

    /// The drawing-space size of one screen pixel at the current zoom.
    ///
    /// Content renderers use this for resolution-aware detail such as line
    /// thickness. Both axes share the single horizontal conversion factor.
    pub fn pixel_size_in_local_units(&self) -> Result<DVec2, OverlayError> {
        let viewport = self.viewport.ok_or(OverlayError::NotAttached)?;

        Ok(DVec2::splat(1.0 / viewport.pixels_per_unit))
    }

    /// Reorders the element in front of its siblings. Silent no-op when not
    /// attached.
    pub fn bring_to_front(&mut self) {
        if self.attached {
            self.element.bring_to_front();
        }
    }

    /// Reorders the element behind its siblings. Silent no-op when not
    /// attached.
    pub fn bring_to_back(&mut self) {
        if self.attached {
            self.element.bring_to_back();
        }
    }

    /// The geographic region this overlay covers.
    pub fn region(&self) -> &GeoRegion {
        &self.region
    }

    /// The options this overlay was constructed with.
    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// The root element capability.
    pub fn element(&self) -> &dyn OverlayElement {
        self.element.as_ref()
    }

    /// Mutable access to the root element capability, for embedders that
    /// need to hand it to a drawing library.
    pub fn element_mut(&mut self) -> &mut dyn OverlayElement {
        self.element.as_mut()
    }

    /// Whether the overlay is currently attached to a host view.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The fixed drawing-space extent, or `None` before the first sync.
    pub fn drawing_extent(&self) -> Option<DVec2> {
        self.extent
    }

    /// The most recent screen-space state, or `None` while detached.
    pub fn viewport(&self) -> Option<&ViewportState> {
        self.viewport.as_ref()
    }
}
