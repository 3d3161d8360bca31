//! Draw pass.
//!
//! Turns the cached layout into draw commands for every segment and builds
//! the retained indicator nodes for the selected one.
//!
//! Order within a pass: background, then per segment its title/image,
//! divider and borders. Indicator nodes are retained and not part of the
//! command stream.

use super::scene::{DrawCommand, IndicatorNode, Placement, Scene};
use crate::indicator::{arrow_path, filler_frame, indicator_frame, IndicatorKind};
use crate::layout::{border_frames, place_segment, LayoutResult, Measurement};
use crate::types::{Frame, SelectionStyle};

/// Indicator nodes a selection style uses, with their z-order.
pub fn indicator_kinds(style: SelectionStyle) -> &'static [(IndicatorKind, Placement)] {
    match style {
        SelectionStyle::TextWidthStripe | SelectionStyle::FullWidthStripe => {
            &[(IndicatorKind::Stripe, Placement::Front)]
        }
        SelectionStyle::Box => &[
            (IndicatorKind::Stripe, Placement::Front),
            (IndicatorKind::Box, Placement::Back),
        ],
        SelectionStyle::Arrow => &[(IndicatorKind::Arrow, Placement::Front)],
    }
}

/// Node geometry and color for one indicator kind at segment `index`.
pub fn indicator_node(
    measurement: &Measurement<'_>,
    layout: &LayoutResult,
    kind: IndicatorKind,
    index: usize,
) -> IndicatorNode {
    let config = measurement.config;
    match kind {
        IndicatorKind::Stripe => IndicatorNode {
            frame: indicator_frame(measurement, layout, index),
            color: config.indicator_color,
            mask: None,
        },
        IndicatorKind::Box => IndicatorNode {
            frame: filler_frame(layout, index),
            color: config
                .indicator_box_color
                .with_opacity(config.indicator_box_opacity),
            mask: None,
        },
        IndicatorKind::Arrow => {
            let frame = indicator_frame(measurement, layout, index);
            IndicatorNode {
                frame,
                color: config.indicator_color,
                mask: arrow_path(frame, config.indicator_location),
            }
        }
    }
}

/// Emit the segment content of one pass.
pub fn draw_segments<S: Scene + ?Sized>(
    measurement: &Measurement<'_>,
    layout: &LayoutResult,
    scene: &mut S,
) {
    let config = measurement.config;
    let content_width = layout.total_width.max(layout.bounds.width);
    scene.begin_frame(content_width);
    scene.draw(DrawCommand::FillRect {
        frame: Frame::new(0.0, 0.0, content_width, layout.bounds.height),
        color: config.background_color,
    });

    for index in 0..layout.segment_count {
        let placement = place_segment(measurement, layout, index);
        let selected = config.is_selected(index);

        if let Some(image_frame) = placement.image {
            let image = config
                .contents
                .get(index)
                .and_then(|content| content.image_for(selected));
            if let Some(image) = image {
                scene.draw(DrawCommand::Image {
                    frame: image_frame,
                    image: image.clone(),
                });
            }
        }
        if let (Some(frame), Some(text)) = (placement.title, measurement.styled_title(index)) {
            scene.draw(DrawCommand::Text { frame, text });
        }
        if let Some(frame) = placement.divider {
            scene.draw(DrawCommand::FillRect {
                frame,
                color: config.vertical_divider_color,
            });
        }
        for frame in border_frames(placement.segment, config.borders, config.border_width) {
            scene.draw(DrawCommand::FillRect {
                frame,
                color: config.border_color,
            });
        }
    }
}
