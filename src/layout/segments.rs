//! Segment width policies.
//!
//! - **Fixed**: one width for every segment, the larger of an even share of
//!   the bounds and the widest segment's required width.
//! - **Dynamic**: each segment gets its own required width. With
//!   `stretch_to_fill`, leftover bounds width is split evenly across
//!   segments.

use tracing::debug;

use super::text_measure::Measurement;
use super::types::LayoutResult;
use crate::types::{Size, WidthStyle};

/// Compute segment widths for the given bounds.
pub fn compute_layout(measurement: &Measurement<'_>, bounds: Size) -> LayoutResult {
    let config = measurement.config;
    let count = config.segment_count();
    if count == 0 {
        return LayoutResult::empty(config.width_style, bounds);
    }

    let layout = match config.width_style {
        WidthStyle::Fixed => {
            let even_share = bounds.width / count as f32;
            let segment_width =
                (0..count).fold(even_share, |widest, i| widest.max(measurement.required_width(i)));
            LayoutResult::fixed(bounds, count, segment_width)
        }
        WidthStyle::Dynamic => {
            let mut widths: Vec<f32> = (0..count).map(|i| measurement.required_width(i)).collect();
            let natural: f32 = widths.iter().sum();
            if config.stretch_to_fill && natural < bounds.width {
                let slack = (bounds.width - natural) / count as f32;
                for width in &mut widths {
                    *width += slack;
                }
            }
            LayoutResult::dynamic(bounds, widths)
        }
    };

    debug!(
        segments = count,
        policy = ?layout.width_style,
        total_width = layout.total_width,
        "segment layout computed"
    );
    layout
}
