//! The host panel seam.
//!
//! The controller never owns layout; it reads the panel's anchored position
//! and size once, then writes positions back while animating.

use crate::geometry::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// A positioned UI element the controller can move.
pub trait Panel {
    /// Current anchored position
    fn anchored_position(&self) -> Vec2;

    /// Move the panel
    fn set_anchored_position(&mut self, position: Vec2);

    /// Current size
    fn size(&self) -> Size;

    /// Whether the panel sits inside a coordinate frame (canvas, window,
    /// parent container) it can slide out of.
    fn has_enclosing_frame(&self) -> bool {
        true
    }
}

/// Plain-data panel for hosts that sync positions themselves, and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPanel {
    /// Anchored position
    pub position: Vec2,
    /// Extent
    pub size: Size,
    /// Whether an enclosing frame exists
    pub framed: bool,
}

impl RectPanel {
    /// A framed panel at `position`
    #[must_use]
    pub const fn new(position: Vec2, size: Size) -> Self {
        Self {
            position,
            size,
            framed: true,
        }
    }

    /// Mark the panel as having no enclosing frame
    #[must_use]
    pub const fn unframed(mut self) -> Self {
        self.framed = false;
        self
    }
}

impl Panel for RectPanel {
    fn anchored_position(&self) -> Vec2 {
        self.position
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn has_enclosing_frame(&self) -> bool {
        self.framed
    }
}

impl<P: Panel + ?Sized> Panel for Box<P> {
    fn anchored_position(&self) -> Vec2 {
        (**self).anchored_position()
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        (**self).set_anchored_position(position);
    }

    fn size(&self) -> Size {
        (**self).size()
    }

    fn has_enclosing_frame(&self) -> bool {
        (**self).has_enclosing_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_panel_roundtrip_position() {
        let mut panel = RectPanel::new(Vec2::new(1.0, 2.0), Size::new(10.0, 5.0));
        assert!(panel.has_enclosing_frame());
        panel.set_anchored_position(Vec2::new(3.0, 4.0));
        assert_eq!(panel.anchored_position(), Vec2::new(3.0, 4.0));
        assert_eq!(panel.size(), Size::new(10.0, 5.0));
    }

    #[test]
    fn test_unframed() {
        let panel = RectPanel::new(Vec2::ZERO, Size::new(1.0, 1.0)).unframed();
        assert!(!panel.has_enclosing_frame());
    }

    #[test]
    fn test_boxed_panel_delegates() {
        let mut panel: Box<dyn Panel> =
            Box::new(RectPanel::new(Vec2::ZERO, Size::new(8.0, 8.0)).unframed());
        panel.set_anchored_position(Vec2::new(-1.0, 0.0));
        assert_eq!(panel.anchored_position(), Vec2::new(-1.0, 0.0));
        assert!(!panel.has_enclosing_frame());
    }
}
