//! Layout result types.

use crate::types::{Frame, Size, WidthStyle, ZERO_SIZE};

/// Derived segment geometry.
///
/// Recomputed whenever the configuration or the bounds change; never
/// persisted. Under [`WidthStyle::Dynamic`] the per-segment widths and their
/// prefix sums are cached here so offset lookups are O(1).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub width_style: WidthStyle,
    /// Bounds the layout was computed for.
    pub bounds: Size,
    pub segment_count: usize,
    /// Uniform segment width (Fixed). Under Dynamic this is the even share
    /// `bounds.width / segment_count` and is not used for geometry.
    pub segment_width: f32,
    /// Per-segment widths (Dynamic only, empty under Fixed).
    pub widths: Vec<f32>,
    /// `offsets[i]` = sum of `widths[..i]`; `segment_count + 1` entries
    /// (Dynamic only).
    pub offsets: Vec<f32>,
    /// Width of all segments laid end to end.
    pub total_width: f32,
}

impl Default for LayoutResult {
    fn default() -> Self {
        Self::empty(WidthStyle::Fixed, ZERO_SIZE)
    }
}

impl LayoutResult {
    /// Layout with no segments.
    pub fn empty(width_style: WidthStyle, bounds: Size) -> Self {
        Self {
            width_style,
            bounds,
            segment_count: 0,
            segment_width: 0.0,
            widths: Vec::new(),
            offsets: Vec::new(),
            total_width: 0.0,
        }
    }

    /// Uniform-width layout.
    pub fn fixed(bounds: Size, segment_count: usize, segment_width: f32) -> Self {
        Self {
            width_style: WidthStyle::Fixed,
            bounds,
            segment_count,
            segment_width,
            widths: Vec::new(),
            offsets: Vec::new(),
            total_width: segment_width * segment_count as f32,
        }
    }

    /// Per-segment layout; builds the prefix sums.
    pub fn dynamic(bounds: Size, widths: Vec<f32>) -> Self {
        let mut offsets = Vec::with_capacity(widths.len() + 1);
        let mut running = 0.0;
        offsets.push(running);
        for width in &widths {
            running += width;
            offsets.push(running);
        }
        let segment_count = widths.len();
        Self {
            width_style: WidthStyle::Dynamic,
            bounds,
            segment_count,
            segment_width: if segment_count > 0 {
                bounds.width / segment_count as f32
            } else {
                0.0
            },
            widths,
            offsets,
            total_width: running,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment_count == 0
    }

    /// Left edge of segment `index`.
    pub fn offset_of(&self, index: usize) -> f32 {
        match self.width_style {
            WidthStyle::Fixed => self.segment_width * index as f32,
            WidthStyle::Dynamic => self
                .offsets
                .get(index)
                .copied()
                .unwrap_or(self.total_width),
        }
    }

    /// Width allotted to segment `index`.
    pub fn width_of(&self, index: usize) -> f32 {
        match self.width_style {
            WidthStyle::Fixed => self.segment_width,
            WidthStyle::Dynamic => self.widths.get(index).copied().unwrap_or(0.0),
        }
    }

    /// Full-height rectangle of segment `index` in content coordinates.
    pub fn segment_frame(&self, index: usize) -> Frame {
        Frame::new(
            self.offset_of(index),
            0.0,
            self.width_of(index),
            self.bounds.height,
        )
    }
}
