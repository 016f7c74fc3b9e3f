// SPDX-License-Identifier: MPL-2.0
//! View transform applied to the displayed resource.
//!
//! The transform only affects how the resource is rendered; the resource
//! itself is never modified.

use super::newtypes::{RotationAngle, ZoomPercent};

/// Zoom level and rotation angle of the current viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewTransform {
    zoom: ZoomPercent,
    rotation: RotationAngle,
}

impl ViewTransform {
    /// Creates a transform at 100% zoom with no rotation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increases zoom by one step. No-op at the maximum.
    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
    }

    /// Decreases zoom by one step. No-op at the minimum.
    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
    }

    /// Rotates the view 90° clockwise.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_clockwise();
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomPercent {
        self.zoom
    }

    #[must_use]
    pub fn rotation(&self) -> RotationAngle {
        self.rotation
    }

    #[must_use]
    pub fn is_min_zoom(&self) -> bool {
        self.zoom.is_min()
    }

    #[must_use]
    pub fn is_max_zoom(&self) -> bool {
        self.zoom.is_max()
    }

    /// Returns true when the rendered width and height are swapped.
    #[must_use]
    pub fn swaps_dimensions(&self) -> bool {
        self.rotation.swaps_dimensions()
    }

    /// Multiplier applied to the natural size of the resource.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        self.zoom.as_factor()
    }

    /// Returns the rendered size for a resource of the given natural size.
    #[must_use]
    pub fn rendered_size(&self, width: u32, height: u32) -> (f32, f32) {
        let (w, h) = if self.rotation.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        };
        #[allow(clippy::cast_precision_loss)]
        let scaled = (w as f32 * self.scale_factor(), h as f32 * self.scale_factor());
        (scaled.0.max(1.0), scaled.1.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transform_is_identity() {
        let transform = ViewTransform::new();
        assert_eq!(transform.zoom().value(), 100);
        assert_eq!(transform.rotation().degrees(), 0);
    }

    #[test]
    fn repeated_zoom_in_stops_at_300() {
        let mut transform = ViewTransform::new();
        for _ in 0..20 {
            transform.zoom_in();
        }
        assert_eq!(transform.zoom().value(), 300);
    }

    #[test]
    fn repeated_zoom_out_stops_at_25() {
        let mut transform = ViewTransform::new();
        for _ in 0..20 {
            transform.zoom_out();
        }
        assert_eq!(transform.zoom().value(), 25);
        assert!(transform.is_min_zoom());
        assert!(!transform.is_max_zoom());
    }

    #[test]
    fn rotate_four_times_is_identity() {
        let mut transform = ViewTransform::new();
        transform.zoom_in();
        let before = transform;
        for _ in 0..4 {
            transform.rotate();
        }
        assert_eq!(transform, before);
    }

    #[test]
    fn rendered_size_swaps_on_quarter_turn() {
        let mut transform = ViewTransform::new();
        transform.rotate();
        transform.zoom_out();
        transform.zoom_out();
        let (w, h) = transform.rendered_size(400, 200);
        assert!((w - 100.0).abs() < f32::EPSILON);
        assert!((h - 200.0).abs() < f32::EPSILON);
    }
}
