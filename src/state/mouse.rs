//! Touch Module - Touch events and hit-testing
//!
//! Maps a touch point back to a segment index, and turns raw pointer input
//! (including crossterm mouse events) into the touch gestures the control
//! understands.
//!
//! # API
//!
//! - `hit_area(bounds, enlarge)` - Rectangle in which touches count
//! - `segment_at(point, scroll_x, layout, enlarge)` - Segment under a touch
//! - `TouchEvent::from_crossterm(event, origin, cell)` - Terminal mouse adapter
//! - `TouchTracker` - Tap vs drag classification

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use crate::layout::LayoutResult;
use crate::types::{point, EdgeInsets, Frame, Point, Size, WidthStyle};

/// Movement (in points) after which a touch counts as a drag instead of a tap.
pub const DRAG_THRESHOLD: f32 = 4.0;

// =============================================================================
// TYPES
// =============================================================================

/// Touch gesture phase, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Began(Point),
    Moved(Point),
    Ended(Point),
    Cancelled,
}

impl TouchEvent {
    /// Convert a terminal mouse event to a touch event.
    ///
    /// `origin` is the terminal cell at the control's top-left corner and
    /// `cell` the size of one cell in control units. The touch lands on the
    /// center of the clicked cell. Only the left button participates.
    pub fn from_crossterm(event: &MouseEvent, origin: (u16, u16), cell: Size) -> Option<Self> {
        let column = event.column as i32 - origin.0 as i32;
        let row = event.row as i32 - origin.1 as i32;
        let at = point(
            column as f32 * cell.width + cell.width / 2.0,
            row as f32 * cell.height + cell.height / 2.0,
        );
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::Began(at)),
            MouseEventKind::Drag(MouseButton::Left) => Some(Self::Moved(at)),
            MouseEventKind::Up(MouseButton::Left) => Some(Self::Ended(at)),
            _ => None,
        }
    }
}

// =============================================================================
// GESTURE TRACKING
// =============================================================================

/// What a touch update means for the control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Nothing to do yet.
    Pending,
    /// Horizontal drag by `dx` since the previous update.
    Drag { dx: f32 },
    /// Released without dragging; select at this point.
    Tap(Point),
    /// Released after a drag, or cancelled.
    Finished,
}

/// Tracks one touch from press to release.
#[derive(Debug, Default)]
pub struct TouchTracker {
    anchor: Option<Point>,
    last: Option<Point>,
    dragging: bool,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed an event; `draggable` gates whether movement becomes a drag.
    pub fn update(&mut self, event: TouchEvent, draggable: bool) -> Gesture {
        match event {
            TouchEvent::Began(at) => {
                self.anchor = Some(at);
                self.last = Some(at);
                self.dragging = false;
                Gesture::Pending
            }
            TouchEvent::Moved(at) => {
                let Some(anchor) = self.anchor else {
                    return Gesture::Pending;
                };
                if !self.dragging && draggable && (at.x - anchor.x).abs() >= DRAG_THRESHOLD {
                    self.dragging = true;
                }
                let previous = self.last.replace(at).unwrap_or(anchor);
                if self.dragging {
                    Gesture::Drag { dx: at.x - previous.x }
                } else {
                    Gesture::Pending
                }
            }
            TouchEvent::Ended(at) => {
                let dragged = self.dragging;
                self.reset();
                if dragged {
                    Gesture::Finished
                } else {
                    Gesture::Tap(at)
                }
            }
            TouchEvent::Cancelled => {
                self.reset();
                Gesture::Finished
            }
        }
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.last = None;
        self.dragging = false;
    }
}

// =============================================================================
// HIT TESTING
// =============================================================================

/// Bounds grown by the enlarge insets; touches outside are ignored.
pub fn hit_area(bounds: Size, enlarge: EdgeInsets) -> Frame {
    Frame::from_size(bounds).outset(enlarge)
}

/// Segment under a touch at `touch` with the viewport scrolled to `scroll_x`.
///
/// Returns `None` outside the hit area or past the last segment.
pub fn segment_at(
    touch: Point,
    scroll_x: f32,
    layout: &LayoutResult,
    enlarge: EdgeInsets,
) -> Option<usize> {
    if layout.is_empty() || !hit_area(layout.bounds, enlarge).contains(touch) {
        return None;
    }

    let position = touch.x + scroll_x;
    let index = match layout.width_style {
        WidthStyle::Fixed => {
            if layout.segment_width <= 0.0 {
                return None;
            }
            // Truncate toward zero: touches in the left enlarge margin hit segment 0.
            let raw = (position / layout.segment_width).trunc();
            if raw < 0.0 {
                return None;
            }
            raw as usize
        }
        WidthStyle::Dynamic => layout.offsets[1..].partition_point(|&end| end < position),
    };

    trace!(x = touch.x, scroll_x, index, "hit test");
    (index < layout.segment_count).then_some(index)
}
