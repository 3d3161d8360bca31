//! Scroll State Module
//!
//! Horizontal viewport over the segment strip:
//! - Offset clamped to `[0, max(content - visible, 0)]`
//! - User drags gated by `scroll_enabled`
//! - Programmatic centering on the selected segment (always allowed)

use tracing::trace;

use crate::types::Frame;

// =============================================================================
// VIEWPORT
// =============================================================================

/// Horizontal scroll state of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    offset_x: f32,
    visible_width: f32,
    content_width: f32,
    /// Whether user drags may scroll.
    pub scroll_enabled: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            visible_width: 0.0,
            content_width: 0.0,
            scroll_enabled: true,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    #[inline]
    pub fn visible_width(&self) -> f32 {
        self.visible_width
    }

    #[inline]
    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Largest valid offset.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.visible_width).max(0.0)
    }

    /// Update both extents; the offset is re-clamped.
    pub fn set_extents(&mut self, visible_width: f32, content_width: f32) {
        self.visible_width = visible_width.max(0.0);
        self.content_width = content_width.max(0.0);
        self.offset_x = self.offset_x.clamp(0.0, self.max_offset());
    }

    /// Set the offset (clamped to valid range).
    ///
    /// Returns `true` if the offset changed.
    pub fn set_offset(&mut self, x: f32) -> bool {
        let clamped = x.clamp(0.0, self.max_offset());
        if clamped == self.offset_x {
            return false;
        }
        self.offset_x = clamped;
        true
    }

    /// Scroll by a user drag of `delta_x` (content follows the finger).
    ///
    /// Returns `true` if scrolling occurred, `false` if disabled or already
    /// at the boundary.
    pub fn scroll_by(&mut self, delta_x: f32) -> bool {
        if !self.scroll_enabled {
            return false;
        }
        let moved = self.set_offset(self.offset_x - delta_x);
        trace!(delta_x, offset_x = self.offset_x, moved, "viewport drag");
        moved
    }

    /// Offset that centers `frame` in the viewport, clamped.
    pub fn centered_offset(&self, frame: Frame) -> f32 {
        (frame.mid_x() - self.visible_width / 2.0).clamp(0.0, self.max_offset())
    }

    /// Scroll so `frame` is centered as far as the content allows.
    ///
    /// Returns the new offset.
    pub fn center_on(&mut self, frame: Frame) -> f32 {
        let target = self.centered_offset(frame);
        self.offset_x = target;
        target
    }
}
