// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for view values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom percentage bounds (25% to 300%, in steps of 25%).
pub mod zoom_bounds {
    /// Minimum zoom percentage.
    pub const MIN_PERCENT: u16 = 25;
    /// Maximum zoom percentage.
    pub const MAX_PERCENT: u16 = 300;
    /// Default zoom percentage.
    pub const DEFAULT_PERCENT: u16 = 100;
    /// Zoom step for zoom in/out operations.
    pub const STEP: u16 = 25;
}

// =============================================================================
// ZoomPercent
// =============================================================================

/// Zoom percentage, guaranteed to be within 25%–300% and on the 25% grid.
///
/// Out-of-range requests clamp to the nearest bound instead of failing, so
/// callers never have to validate zoom values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoomPercent(u16);

impl ZoomPercent {
    /// Creates a new zoom percentage.
    ///
    /// The value is snapped to the nearest multiple of the zoom step and then
    /// clamped to the valid range.
    #[must_use]
    pub fn new(percent: i32) -> Self {
        let step = i32::from(zoom_bounds::STEP);
        let snapped = percent.saturating_add(step / 2).div_euclid(step) * step;
        let clamped = snapped.clamp(
            i32::from(zoom_bounds::MIN_PERCENT),
            i32::from(zoom_bounds::MAX_PERCENT),
        );
        // Clamped into [25, 300], always fits in u16.
        Self(u16::try_from(clamped).unwrap_or(zoom_bounds::DEFAULT_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_PERCENT
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_PERCENT
    }

    /// Increases zoom by one step, saturating at the maximum.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + zoom_bounds::STEP).min(zoom_bounds::MAX_PERCENT))
    }

    /// Decreases zoom by one step, saturating at the minimum.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(
            self.0
                .saturating_sub(zoom_bounds::STEP)
                .max(zoom_bounds::MIN_PERCENT),
        )
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_PERCENT)
    }
}

// =============================================================================
// RotationAngle
// =============================================================================

/// Rotation angle in 90° increments.
///
/// The value is always one of: 0°, 90°, 180°, or 270°.
///
/// # Example
///
/// ```
/// use lens_share::domain::ui::RotationAngle;
///
/// let angle = RotationAngle::default();
/// assert_eq!(angle.degrees(), 0);
///
/// let full = angle
///     .rotate_clockwise()
///     .rotate_clockwise()
///     .rotate_clockwise()
///     .rotate_clockwise();
/// assert_eq!(full, angle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, normalizing to valid 90° increments.
    ///
    /// Any value is rounded down to a 90° increment, then wrapped to 0-270°.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Rotates 90° clockwise, wrapping at 360°.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    /// Returns true if the angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }

    /// Returns true if width and height should be swapped when rendering.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.0 == 90 || self.0 == 270
    }
}
