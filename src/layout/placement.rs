//! Per-segment content placement.
//!
//! Where the title and image of each segment land inside its rectangle,
//! plus the divider and border strokes around it. All coordinates are in
//! content space (before the viewport offset) and snapped up to whole
//! points.

use super::text_measure::Measurement;
use super::types::LayoutResult;
use crate::content::SegmentContent;
use crate::types::{BorderType, Frame, ImagePosition, IndicatorLocation, SelectionStyle};

/// Geometry of one segment for a draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlacement {
    pub index: usize,
    /// The whole segment, full control height.
    pub segment: Frame,
    pub title: Option<Frame>,
    pub image: Option<Frame>,
    /// Divider on the segment's leading edge (never for the first segment).
    pub divider: Option<Frame>,
}

/// Place the content of segment `index`.
pub fn place_segment(
    measurement: &Measurement<'_>,
    layout: &LayoutResult,
    index: usize,
) -> SegmentPlacement {
    let config = measurement.config;
    let segment = layout.segment_frame(index);
    let height = layout.bounds.height;
    let indicator = config.indicator_height;
    let lead = if config.indicator_location == IndicatorLocation::Up {
        indicator
    } else {
        0.0
    };

    let (title, image) = match config.contents.get(index) {
        Some(SegmentContent::Text(_)) => {
            let text = measurement.title_size(index);
            let reserved = if config.selection_style != SelectionStyle::Box {
                indicator
            } else {
                0.0
            };
            let y = ((height - reserved) / 2.0 - text.height / 2.0 + lead).round();
            let x = segment.x + (segment.width - text.width) / 2.0;
            (Some(Frame::new(x, y, text.width, text.height).ceil()), None)
        }
        Some(SegmentContent::Image { .. }) => {
            let img = measurement.image_size(index);
            let y = (height - indicator).round() / 2.0 - img.height / 2.0 + lead;
            let x = segment.x + (segment.width - img.width) / 2.0;
            (None, Some(Frame::new(x, y, img.width, img.height).ceil()))
        }
        Some(SegmentContent::TextAndImage { .. }) => {
            let (title, image) = place_combined(measurement, segment, height, index);
            (Some(title), Some(image))
        }
        None => (None, None),
    };

    let divider = (config.vertical_divider_enabled && index > 0).then(|| {
        let width = config.vertical_divider_width;
        Frame::new(
            segment.x - width / 2.0,
            indicator * 2.0,
            width,
            height - indicator * 4.0,
        )
    });

    SegmentPlacement {
        index,
        segment,
        title,
        image,
        divider,
    }
}

/// Title and image frames of a combined segment, centered as a unit.
fn place_combined(
    measurement: &Measurement<'_>,
    segment: Frame,
    height: f32,
    index: usize,
) -> (Frame, Frame) {
    let config = measurement.config;
    let spacing = config.text_image_spacing;
    let text = measurement.title_size(index);
    let img = measurement.image_size(index);

    let mut image_y = ((height - img.height) / 2.0).ceil();
    let mut text_y = ((height - text.height) / 2.0).ceil();
    let image_x;
    let text_x;

    match config.image_position {
        ImagePosition::LeftOfText => {
            let whitespace = segment.width - text.width - img.width - spacing;
            image_x = segment.x + whitespace / 2.0;
            text_x = image_x + img.width + spacing;
        }
        ImagePosition::RightOfText => {
            let whitespace = segment.width - text.width - img.width - spacing;
            text_x = segment.x + whitespace / 2.0;
            image_x = text_x + text.width + spacing;
        }
        position => {
            image_x = segment.x + (segment.width - img.width) / 2.0;
            text_x = segment.x + (segment.width - text.width) / 2.0;
            let whitespace = height - img.height - text.height - spacing;
            match position {
                ImagePosition::AboveText => {
                    image_y = (whitespace / 2.0).ceil();
                    text_y = image_y + img.height + spacing;
                }
                ImagePosition::BelowText => {
                    text_y = (whitespace / 2.0).ceil();
                    image_y = text_y + text.height + spacing;
                }
                _ => {}
            }
        }
    }

    (
        Frame::new(text_x, text_y, text.width, text.height).ceil(),
        Frame::new(image_x, image_y, img.width, img.height).ceil(),
    )
}

/// Border strokes for the requested edges, inside `segment`.
pub fn border_frames(segment: Frame, borders: BorderType, width: f32) -> Vec<Frame> {
    let mut frames = Vec::new();
    if borders.contains(BorderType::TOP) {
        frames.push(Frame::new(segment.x, segment.y, segment.width, width));
    }
    if borders.contains(BorderType::LEFT) {
        frames.push(Frame::new(segment.x, segment.y, width, segment.height));
    }
    if borders.contains(BorderType::BOTTOM) {
        frames.push(Frame::new(
            segment.x,
            segment.max_y() - width,
            segment.width,
            width,
        ));
    }
    if borders.contains(BorderType::RIGHT) {
        frames.push(Frame::new(
            segment.max_x() - width,
            segment.y,
            width,
            segment.height,
        ));
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControlConfiguration;
    use crate::content::Image;
    use crate::layout::segments::compute_layout;
    use crate::layout::text_measure::MonospaceMeasurer;
    use crate::types::{size, ZERO_INSETS};

    fn place(cfg: &ControlConfiguration, bounds: (f32, f32), index: usize) -> SegmentPlacement {
        let measurer = MonospaceMeasurer::cells();
        let m = Measurement::new(cfg, &measurer);
        let layout = compute_layout(&m, size(bounds.0, bounds.1));
        place_segment(&m, &layout, index)
    }

    fn text_config(titles: &[&str]) -> ControlConfiguration {
        ControlConfiguration {
            contents: titles.iter().map(|t| SegmentContent::Text((*t).into())).collect(),
            segment_insets: ZERO_INSETS,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_centered_below_top_indicator() {
        // 40 tall, indicator 4 on top: (40 - 4) / 2 - 1 / 2 + 4 = 21.5 -> 22
        let mut cfg = text_config(&["abcd", "ef"]);
        cfg.indicator_height = 4.0;
        let p = place(&cfg, (100.0, 40.0), 1);
        assert_eq!(p.segment, Frame::new(50.0, 0.0, 50.0, 40.0));
        assert_eq!(p.title, Some(Frame::new(74.0, 22.0, 2.0, 1.0)));
        assert!(p.image.is_none());
    }

    #[test]
    fn test_text_box_style_reserves_no_space() {
        let mut cfg = text_config(&["ab"]);
        cfg.indicator_height = 4.0;
        cfg.indicator_location = IndicatorLocation::Down;
        cfg.selection_style = SelectionStyle::Box;
        let p = place(&cfg, (10.0, 41.0), 0);
        // 41 / 2 - 0.5 = 20
        assert_eq!(p.title.map(|f| f.y), Some(20.0));
    }

    #[test]
    fn test_divider_skips_first_segment() {
        let mut cfg = text_config(&["a", "b"]);
        cfg.vertical_divider_enabled = true;
        cfg.indicator_height = 2.0;
        cfg.vertical_divider_width = 2.0;
        assert!(place(&cfg, (100.0, 30.0), 0).divider.is_none());
        assert_eq!(
            place(&cfg, (100.0, 30.0), 1).divider,
            Some(Frame::new(49.0, 4.0, 2.0, 22.0))
        );
    }

    #[test]
    fn test_image_left_of_text_centered_as_unit() {
        let cfg = ControlConfiguration {
            contents: vec![SegmentContent::TextAndImage {
                title: "abcd".into(),
                image: Image::new("icon", 10.0, 10.0),
                selected: None,
            }],
            image_position: ImagePosition::LeftOfText,
            text_image_spacing: 2.0,
            segment_insets: ZERO_INSETS,
            ..Default::default()
        };
        let p = place(&cfg, (40.0, 20.0), 0);
        // whitespace = 40 - 4 - 10 - 2 = 24
        assert_eq!(p.image, Some(Frame::new(12.0, 5.0, 10.0, 10.0)));
        assert_eq!(p.title.map(|f| f.x), Some(24.0));
    }

    #[test]
    fn test_image_above_text() {
        let cfg = ControlConfiguration {
            contents: vec![SegmentContent::TextAndImage {
                title: "ab".into(),
                image: Image::new("icon", 10.0, 10.0),
                selected: None,
            }],
            image_position: ImagePosition::AboveText,
            text_image_spacing: 1.0,
            segment_insets: ZERO_INSETS,
            ..Default::default()
        };
        let p = place(&cfg, (20.0, 20.0), 0);
        // whitespace = 20 - 10 - 1 - 1 = 8
        assert_eq!(p.image, Some(Frame::new(5.0, 4.0, 10.0, 10.0)));
        assert_eq!(p.title, Some(Frame::new(9.0, 15.0, 2.0, 1.0)));
    }

    #[test]
    fn test_image_only_centered_below_indicator() {
        let cfg = ControlConfiguration {
            contents: vec![SegmentContent::Image {
                image: Image::new("a", 10.0, 10.0),
                selected: None,
            }],
            ..Default::default()
        };
        let p = place(&cfg, (40.0, 30.0), 0);
        // (30 - 5) / 2 - 10 / 2 + 5 = 12.5 -> 13
        assert_eq!(p.image, Some(Frame::new(15.0, 13.0, 10.0, 10.0)));
        assert!(p.title.is_none());
    }

    #[test]
    fn test_image_right_of_text() {
        let cfg = ControlConfiguration {
            contents: vec![SegmentContent::TextAndImage {
                title: "abcd".into(),
                image: Image::new("icon", 10.0, 10.0),
                selected: None,
            }],
            image_position: ImagePosition::RightOfText,
            text_image_spacing: 2.0,
            segment_insets: ZERO_INSETS,
            ..Default::default()
        };
        let p = place(&cfg, (40.0, 20.0), 0);
        // whitespace = 24, text starts at 12, image after text + spacing
        assert_eq!(p.title, Some(Frame::new(12.0, 10.0, 4.0, 1.0)));
        assert_eq!(p.image, Some(Frame::new(18.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_image_below_text() {
        let cfg = ControlConfiguration {
            contents: vec![SegmentContent::TextAndImage {
                title: "ab".into(),
                image: Image::new("icon", 10.0, 10.0),
                selected: None,
            }],
            image_position: ImagePosition::BelowText,
            text_image_spacing: 1.0,
            segment_insets: ZERO_INSETS,
            ..Default::default()
        };
        let p = place(&cfg, (20.0, 20.0), 0);
        // whitespace = 8, title at 4, image at 4 + 1 + 1
        assert_eq!(p.title, Some(Frame::new(9.0, 4.0, 2.0, 1.0)));
        assert_eq!(p.image, Some(Frame::new(5.0, 6.0, 10.0, 10.0)));
    }

    #[test]
    fn test_border_frames() {
        let segment = Frame::new(10.0, 0.0, 50.0, 20.0);
        let frames = border_frames(segment, BorderType::TOP | BorderType::RIGHT, 1.0);
        assert_eq!(
            frames,
            vec![Frame::new(10.0, 0.0, 50.0, 1.0), Frame::new(59.0, 0.0, 1.0, 20.0)]
        );
        assert!(border_frames(segment, BorderType::NONE, 1.0).is_empty());
    }
}
