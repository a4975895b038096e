//! Panel geometry: anchored points, sizes, slide directions.
//!
//! Coordinates follow the host's anchored-position convention: positive Y
//! is up and positive X is right. A panel sliding in "from the top" therefore
//! rests above its on-screen anchor while hidden.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Gap left between the panel edge and the visible area when off-screen.
pub const OFF_SCREEN_MARGIN: f32 = 10.0;

/// A 2D point or offset in anchored-position space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component (positive is right)
    pub x: f32,
    /// Vertical component (positive is up)
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `from` and `to`.
    ///
    /// `t` is clamped to `[0, 1]`, so the result never overshoots either
    /// endpoint. `t = 1` returns `to` exactly.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t >= 1.0 {
            return to;
        }
        Self {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Panel extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in layout units
    pub width: f32,
    /// Height in layout units
    pub height: f32,
}

impl Size {
    /// Create a size
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Edge the panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Enters from above
    #[default]
    FromTop,
    /// Enters from below
    FromBottom,
    /// Enters from the left edge
    FromLeft,
    /// Enters from the right edge
    FromRight,
}

impl SlideDirection {
    /// All directions, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::FromTop,
        Self::FromBottom,
        Self::FromLeft,
        Self::FromRight,
    ];

    /// The direction on the same axis with the opposite sign.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::FromTop => Self::FromBottom,
            Self::FromBottom => Self::FromTop,
            Self::FromLeft => Self::FromRight,
            Self::FromRight => Self::FromLeft,
        }
    }

    /// Offset from the on-screen anchor to the off-screen anchor for a
    /// panel of the given size.
    #[must_use]
    pub fn offset(self, size: Size) -> Vec2 {
        let vertical = size.height + OFF_SCREEN_MARGIN;
        let horizontal = size.width + OFF_SCREEN_MARGIN;
        match self {
            Self::FromTop => Vec2::new(0.0, vertical),
            Self::FromBottom => Vec2::new(0.0, -vertical),
            Self::FromLeft => Vec2::new(-horizontal, 0.0),
            Self::FromRight => Vec2::new(horizontal, 0.0),
        }
    }
}

impl std::fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FromTop => write!(f, "from_top"),
            Self::FromBottom => write!(f, "from_bottom"),
            Self::FromLeft => write!(f, "from_left"),
            Self::FromRight => write!(f, "from_right"),
        }
    }
}

/// Compute the off-screen anchor for a panel.
///
/// Without an enclosing frame there is nothing to slide out of, so the
/// off-screen anchor collapses onto the on-screen anchor.
#[must_use]
pub fn off_screen_anchor(
    on_screen: Vec2,
    size: Size,
    direction: SlideDirection,
    has_frame: bool,
) -> Vec2 {
    if !has_frame {
        return on_screen;
    }
    on_screen + direction.offset(size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_top_adds_height_plus_margin() {
        let off = off_screen_anchor(
            Vec2::ZERO,
            Size::new(200.0, 50.0),
            SlideDirection::FromTop,
            true,
        );
        assert_eq!(off, Vec2::new(0.0, 60.0));
    }

    #[test]
    fn test_each_direction_axis_and_sign() {
        let on = Vec2::new(5.0, -5.0);
        let size = Size::new(100.0, 40.0);
        assert_eq!(
            off_screen_anchor(on, size, SlideDirection::FromBottom, true),
            Vec2::new(5.0, -55.0)
        );
        assert_eq!(
            off_screen_anchor(on, size, SlideDirection::FromLeft, true),
            Vec2::new(-105.0, -5.0)
        );
        assert_eq!(
            off_screen_anchor(on, size, SlideDirection::FromRight, true),
            Vec2::new(115.0, -5.0)
        );
    }

    #[test]
    fn test_no_frame_degenerates_to_on_screen() {
        let on = Vec2::new(12.0, 34.0);
        for direction in SlideDirection::ALL {
            assert_eq!(
                off_screen_anchor(on, Size::new(80.0, 20.0), direction, false),
                on
            );
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in SlideDirection::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 60.0);
        let b = Vec2::ZERO;
        assert_eq!(Vec2::lerp(a, b, 0.0), a);
        assert_eq!(Vec2::lerp(a, b, 1.0), b);
        assert_eq!(Vec2::lerp(a, b, 0.5), Vec2::new(0.0, 30.0));
    }

    #[test]
    fn test_lerp_clamps() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(3.0, 3.0);
        assert_eq!(Vec2::lerp(a, b, -2.0), a);
        assert_eq!(Vec2::lerp(a, b, 7.0), b);
        assert_eq!(Vec2::lerp(a, b, f32::NAN), a);
    }

    #[test]
    fn test_direction_serde_snake_case() {
        let json = serde_json::to_string(&SlideDirection::FromRight).unwrap();
        assert_eq!(json, "\"from_right\"");
        let parsed: SlideDirection = serde_json::from_str("\"from_bottom\"").unwrap();
        assert_eq!(parsed, SlideDirection::FromBottom);
        assert_eq!(SlideDirection::FromLeft.to_string(), "from_left");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_direction() -> impl Strategy<Value = SlideDirection> {
            prop::sample::select(SlideDirection::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn prop_opposite_offset_reconstructs_anchor(
                direction in any_direction(),
                x in -4096i32..4096,
                y in -4096i32..4096,
                width in 0u16..2048,
                height in 0u16..2048,
            ) {
                let on = Vec2::new(x as f32, y as f32);
                let size = Size::new(f32::from(width), f32::from(height));
                let off = off_screen_anchor(on, size, direction, true);
                prop_assert_eq!(off + direction.opposite().offset(size), on);
            }

            #[test]
            fn prop_lerp_stays_between_endpoints(t in -1.0f32..2.0, a in -500.0f32..500.0, b in -500.0f32..500.0) {
                let p = Vec2::lerp(Vec2::new(a, 0.0), Vec2::new(b, 0.0), t);
                prop_assert!(p.x >= a.min(b) - 1e-3 && p.x <= a.max(b) + 1e-3);
            }
        }
    }
}
