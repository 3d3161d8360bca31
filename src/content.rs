//! Segment content and text styling.
//!
//! Each segment is exactly one [`SegmentContent`] value: a title, an image, or
//! both. The ordering of the content list defines the segment indices.

use crate::error::{Result, SegmentedError};
use crate::types::{Attr, Rgba, Size};

// =============================================================================
// Text styling
// =============================================================================

/// Fully resolved text style.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f32,
    pub color: Rgba,
    pub attrs: Attr,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 19.0,
            color: Rgba::BLACK,
            attrs: Attr::NONE,
        }
    }
}

impl TextStyle {
    /// Apply an override on top of this style. Unset override fields keep
    /// the base value.
    pub fn merged(&self, over: &TextStyleOverride) -> Self {
        Self {
            font_size: over.font_size.unwrap_or(self.font_size),
            color: over.color.unwrap_or(self.color),
            attrs: over.attrs.unwrap_or(self.attrs),
        }
    }
}

/// Partial text style; `None` fields fall through to the base style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextStyleOverride {
    pub font_size: Option<f32>,
    pub color: Option<Rgba>,
    pub attrs: Option<Attr>,
}

impl TextStyleOverride {
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }

    pub fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs = Some(attrs);
        self
    }
}

/// A run of text carrying its own style (pre-styled rich text).
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub style: TextStyle,
}

impl StyledText {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A segment title.
#[derive(Debug, Clone, PartialEq)]
pub enum Title {
    /// Styled by the control's title styles (or its title formatter).
    Plain(String),
    /// Drawn as-is; control styles and formatter are not applied.
    Styled(StyledText),
}

impl Title {
    /// The raw characters, regardless of styling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Styled(styled) => &styled.text,
        }
    }
}

impl From<&str> for Title {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for Title {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<StyledText> for Title {
    fn from(value: StyledText) -> Self {
        Self::Styled(value)
    }
}

// =============================================================================
// Images
// =============================================================================

/// Handle to a bitmap owned by the renderer.
///
/// The engine only needs the native size; `key` is whatever the renderer
/// uses to find the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub key: String,
    pub size: Size,
}

impl Image {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            size: crate::types::size(width, height),
        }
    }
}

// =============================================================================
// Segment content
// =============================================================================

/// What a single segment displays.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    Text(Title),
    Image {
        image: Image,
        /// Swapped in while the segment is selected.
        selected: Option<Image>,
    },
    TextAndImage {
        title: Title,
        image: Image,
        selected: Option<Image>,
    },
}

impl SegmentContent {
    /// One text segment per title.
    pub fn from_titles<I, T>(titles: I) -> Vec<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Title>,
    {
        titles.into_iter().map(|t| Self::Text(t.into())).collect()
    }

    /// One image segment per image. `selected` is either empty or pairs
    /// up with `images`.
    pub fn from_images(images: Vec<Image>, selected: Vec<Image>) -> Result<Vec<Self>> {
        let selected = pair_selected(&images, selected)?;
        Ok(images
            .into_iter()
            .zip(selected)
            .map(|(image, selected)| Self::Image { image, selected })
            .collect())
    }

    /// Combined segments. Fails unless there is exactly one title per image.
    pub fn from_images_and_titles<T: Into<Title>>(
        images: Vec<Image>,
        selected: Vec<Image>,
        titles: Vec<T>,
    ) -> Result<Vec<Self>> {
        if images.len() != titles.len() {
            return Err(SegmentedError::LengthMismatch {
                images: images.len(),
                titles: titles.len(),
            });
        }
        let selected = pair_selected(&images, selected)?;
        Ok(images
            .into_iter()
            .zip(selected)
            .zip(titles)
            .map(|((image, selected), title)| Self::TextAndImage {
                title: title.into(),
                image,
                selected,
            })
            .collect())
    }

    pub fn title(&self) -> Option<&Title> {
        match self {
            Self::Text(title) | Self::TextAndImage { title, .. } => Some(title),
            Self::Image { .. } => None,
        }
    }

    pub fn image(&self) -> Option<&Image> {
        match self {
            Self::Image { image, .. } | Self::TextAndImage { image, .. } => Some(image),
            Self::Text(_) => None,
        }
    }

    /// Image to draw for the given selection state. Falls back to the normal
    /// image when no selected variant exists.
    pub fn image_for(&self, is_selected: bool) -> Option<&Image> {
        match self {
            Self::Image { image, selected } | Self::TextAndImage { image, selected, .. } => {
                if is_selected {
                    Some(selected.as_ref().unwrap_or(image))
                } else {
                    Some(image)
                }
            }
            Self::Text(_) => None,
        }
    }
}

fn pair_selected(images: &[Image], selected: Vec<Image>) -> Result<Vec<Option<Image>>> {
    if selected.is_empty() {
        return Ok(vec![None; images.len()]);
    }
    if selected.len() != images.len() {
        return Err(SegmentedError::SelectedImagesMismatch {
            images: images.len(),
            selected: selected.len(),
        });
    }
    Ok(selected.into_iter().map(Some).collect())
}

/// Kind of content a control displays, derived from its segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Text,
    Images,
    TextImages,
}

impl ContentKind {
    /// Classify a content list. An empty list counts as text.
    pub fn of(contents: &[SegmentContent]) -> Self {
        let mut has_text = false;
        let mut has_image = false;
        for content in contents {
            match content {
                SegmentContent::Text(_) => has_text = true,
                SegmentContent::Image { .. } => has_image = true,
                SegmentContent::TextAndImage { .. } => return Self::TextImages,
            }
        }
        match (has_text, has_image) {
            (false, true) => Self::Images,
            (true, true) => Self::TextImages,
            _ => Self::Text,
        }
    }
}
