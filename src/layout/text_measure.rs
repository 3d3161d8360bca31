//! Text Measurement
//!
//! The measurement adapter between segment content and the layout engine.
//!
//! Glyph metrics come from a host-supplied [`TextMeasurer`]. The engine only
//! ever asks "how big is this string in this style"; shaping, font fallback
//! and rasterization stay with the host. [`MonospaceMeasurer`] is a
//! stand-in for hosts without a text stack (terminals, tests) and counts
//! display columns with `unicode-width`:
//! - ASCII characters: 1 column
//! - CJK characters: 2 columns (fullwidth)
//! - Zero-width characters: 0 columns

use unicode_width::UnicodeWidthChar;

use crate::config::ControlConfiguration;
use crate::content::{SegmentContent, StyledText, TextStyle, Title};
use crate::types::{size, Size, ZERO_SIZE};

/// Measure the display width of a single line in columns.
pub fn string_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Widest line and line count of a (possibly multi-line) string.
pub fn text_columns_and_lines(s: &str) -> (usize, usize) {
    if s.is_empty() {
        return (0, 0);
    }
    s.split('\n')
        .fold((0, 0), |(widest, lines), line| (widest.max(string_width(line)), lines + 1))
}

// =============================================================================
// Measurer
// =============================================================================

/// Raw metrics for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Distance of the lowest glyph below the baseline. Negative, like font
    /// descender metrics.
    pub descender: f32,
}

/// Host text-measurement backend.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Fixed-advance measurer.
///
/// With `per_point` set, advance/line height/descender are fractions of the
/// font size; otherwise they are absolute (one terminal cell per column).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance: f32,
    pub line_height: f32,
    pub descender: f32,
    pub per_point: bool,
}

impl MonospaceMeasurer {
    /// Typical monospace proportions relative to the font size.
    pub const fn proportional() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
            descender: -0.2,
            per_point: true,
        }
    }

    /// Terminal cells: one unit per column, one unit per line.
    pub const fn cells() -> Self {
        Self {
            advance: 1.0,
            line_height: 1.0,
            descender: 0.0,
            per_point: false,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::proportional()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let unit = if self.per_point { style.font_size } else { 1.0 };
        let (columns, lines) = text_columns_and_lines(text);
        TextMetrics {
            width: columns as f32 * self.advance * unit,
            height: lines as f32 * self.line_height * unit,
            descender: self.descender * unit,
        }
    }
}

// =============================================================================
// Segment measurement
// =============================================================================

/// Measures segment content against a configuration.
///
/// Built fresh for each layout or draw pass; it borrows everything and
/// caches nothing.
pub struct Measurement<'a> {
    pub config: &'a ControlConfiguration,
    pub measurer: &'a dyn TextMeasurer,
}

impl<'a> Measurement<'a> {
    pub fn new(config: &'a ControlConfiguration, measurer: &'a dyn TextMeasurer) -> Self {
        Self { config, measurer }
    }

    /// Title size of segment `index`, rounded up to whole points.
    ///
    /// Plain titles in the control's own style also include the descender
    /// so glyph tails are not clipped. Out-of-range indices and image-only
    /// segments measure as zero.
    pub fn title_size(&self, index: usize) -> Size {
        let Some(title) = self.config.contents.get(index).and_then(SegmentContent::title) else {
            return ZERO_SIZE;
        };

        match title {
            Title::Plain(raw) => match self.formatted(raw, index) {
                Some(styled) => self.styled_size(&styled),
                None => {
                    let style = self.config.title_style_for(self.config.is_selected(index));
                    let m = self.measurer.measure(raw, &style);
                    size(m.width.ceil(), (m.height - m.descender).ceil())
                }
            },
            Title::Styled(styled) => self.styled_size(styled),
        }
    }

    /// Native size of the segment's (unselected) image.
    pub fn image_size(&self, index: usize) -> Size {
        self.config
            .contents
            .get(index)
            .and_then(SegmentContent::image)
            .map(|image| image.size)
            .unwrap_or(ZERO_SIZE)
    }

    /// Width the segment's content occupies, before insets.
    pub fn content_width(&self, index: usize) -> f32 {
        match self.config.contents.get(index) {
            Some(SegmentContent::Text(_)) => self.title_size(index).width,
            Some(SegmentContent::Image { .. }) => self.image_size(index).width,
            Some(SegmentContent::TextAndImage { .. }) => {
                let text = self.title_size(index).width;
                let image = self.image_size(index).width;
                if self.config.image_position.is_horizontal() {
                    image + self.config.text_image_spacing + text
                } else {
                    image.max(text)
                }
            }
            None => 0.0,
        }
    }

    /// Width of the widest element of the content, which the text-width
    /// indicator stripe hugs.
    pub fn indicator_content_width(&self, index: usize) -> f32 {
        self.title_size(index).width.max(self.image_size(index).width)
    }

    /// Width the segment needs including the configured segment insets.
    pub fn required_width(&self, index: usize) -> f32 {
        let insets = &self.config.segment_insets;
        self.content_width(index) + insets.left + insets.right
    }

    /// The title as it should be drawn.
    pub fn styled_title(&self, index: usize) -> Option<StyledText> {
        let title = self.config.contents.get(index)?.title()?;
        Some(match title {
            Title::Styled(styled) => styled.clone(),
            Title::Plain(raw) => self.formatted(raw, index).unwrap_or_else(|| {
                StyledText::new(
                    raw.clone(),
                    self.config.title_style_for(self.config.is_selected(index)),
                )
            }),
        })
    }

    fn formatted(&self, raw: &str, index: usize) -> Option<StyledText> {
        let formatter = self.config.title_formatter.as_ref()?;
        formatter(self.config, raw, index, self.config.is_selected(index))
    }

    fn styled_size(&self, styled: &StyledText) -> Size {
        let m = self.measurer.measure(&styled.text, &styled.style);
        size(m.width.ceil(), m.height.ceil())
    }
}
