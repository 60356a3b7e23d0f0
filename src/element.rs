//! Root element capability.
//!
//! The overlay owns one opaque drawable root element and drives it through
//! this trait: simple translate/scale positioning primitives plus layering
//! surface plumbing. What the element actually is (an SVG node, a canvas,
//! a compositor surface) is the embedder's business; the overlay never
//! inspects or mutates its contents.

use glam::DVec2;

/// Marker class identifying overlay root elements on the layering surface.
pub const OVERLAY_CLASS: &str = "geo-overlay";

/// Marker class for elements that participate in animated zoom transforms.
pub const ZOOM_ANIMATED_CLASS: &str = "geo-overlay-zoom-animated";

/// Marker class for elements registered as interactive targets.
pub const INTERACTIVE_CLASS: &str = "geo-overlay-interactive";

/// Element-lifecycle capabilities consumed by the overlay.
///
/// Implementations mutate one concrete element; the overlay is its sole
/// driver once constructed. All methods are infallible: element plumbing has
/// no failure modes the overlay could meaningfully handle.
pub trait OverlayElement {
    /// Adds a marker class to the element.
    fn add_class(&mut self, class: &str);

    /// Removes a marker class from the element.
    fn remove_class(&mut self, class: &str);

    /// Fixes the element's internal drawing-space extent (the viewBox
    /// equivalent). Set once per overlay; the addressable space never
    /// changes afterwards, which is what lets content scale implicitly.
    fn set_content_extent(&mut self, extent: DVec2);

    /// Positions the element's top-left corner in screen pixels.
    fn set_position(&mut self, pos: DVec2);

    /// Sets the element's rendered size in screen pixels.
    fn set_size(&mut self, size: DVec2);

    /// Applies a combined translate+scale transform, replacing any previous
    /// transform. Used only during animated zoom; the next sync restores
    /// exact position/size.
    fn set_transform(&mut self, translate: DVec2, scale: f64);

    /// Appends the element to the host's layering surface.
    fn append_to_surface(&mut self);

    /// Removes the element from the layering surface.
    fn remove_from_surface(&mut self);

    /// Reorders the element in front of its siblings.
    fn bring_to_front(&mut self);

    /// Reorders the element behind its siblings.
    fn bring_to_back(&mut self);

    /// Registers or unregisters the element as a pointer-event target in
    /// the host's generic interactive-target mechanism.
    fn set_interactive_target(&mut self, on: bool);
}
