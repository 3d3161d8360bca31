//! Selection indicator geometry.
//!
//! Computes where the stripe, box filler and arrow of the selected segment
//! go, in content coordinates, for every [`SelectionStyle`] and
//! [`IndicatorLocation`]. Offsets under the dynamic width policy come from
//! the prefix sums cached on [`LayoutResult`].

use crate::layout::{LayoutResult, Measurement};
use crate::types::{point, Frame, IndicatorLocation, Point, SelectionStyle, WidthStyle};

/// Which retained indicator node a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Stripe,
    /// Translucent filler behind the selected segment's content.
    Box,
    Arrow,
}

/// Closed triangle in the arrow node's local coordinates; used as its clip mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPath {
    pub apex: Point,
    pub base: [Point; 2],
}

impl ArrowPath {
    /// Vertices in drawing order: apex, then the two base corners.
    pub fn points(&self) -> [Point; 3] {
        [self.apex, self.base[0], self.base[1]]
    }
}

/// Vertical position of the indicator.
fn indicator_y(measurement: &Measurement<'_>, layout: &LayoutResult) -> f32 {
    let config = measurement.config;
    match config.indicator_location {
        IndicatorLocation::Down => {
            layout.bounds.height - config.indicator_height + config.indicator_insets.bottom
        }
        IndicatorLocation::Up => config.indicator_insets.top,
        IndicatorLocation::None => 0.0,
    }
}

/// Frame of the stripe (or arrow) for the segment at `index`.
pub fn indicator_frame(measurement: &Measurement<'_>, layout: &LayoutResult, index: usize) -> Frame {
    let config = measurement.config;
    let height = config.indicator_height;
    let insets = config.indicator_insets;
    let y = indicator_y(measurement, layout);
    let segment = layout.segment_frame(index);

    match config.selection_style {
        SelectionStyle::Arrow => Frame::new(segment.mid_x() - height, y, height * 2.0, height),
        SelectionStyle::TextWidthStripe
            if layout.width_style == WidthStyle::Fixed
                && measurement.indicator_content_width(index) <= segment.width =>
        {
            let content = measurement.indicator_content_width(index);
            Frame::new(
                segment.mid_x() - content / 2.0 + insets.left,
                y,
                content - insets.right,
                height,
            )
        }
        _ => Frame::new(
            segment.x + insets.left,
            y,
            segment.width - insets.right,
            height,
        ),
    }
}

/// Full-height filler behind the selected segment (box style).
pub fn filler_frame(layout: &LayoutResult, index: usize) -> Frame {
    layout.segment_frame(index)
}

/// Triangle pointing at the selected segment.
///
/// With the indicator at the bottom the apex points up; at the top it points
/// down. There is no arrow without an indicator location.
pub fn arrow_path(frame: Frame, location: IndicatorLocation) -> Option<ArrowPath> {
    let (w, h) = (frame.width, frame.height);
    match location {
        IndicatorLocation::Down => Some(ArrowPath {
            apex: point(w / 2.0, 0.0),
            base: [point(0.0, h), point(w, h)],
        }),
        IndicatorLocation::Up => Some(ArrowPath {
            apex: point(w / 2.0, h),
            base: [point(w, 0.0), point(0.0, 0.0)],
        }),
        IndicatorLocation::None => None,
    }
}
