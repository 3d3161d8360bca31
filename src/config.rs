//! Control configuration.
//!
//! [`ControlConfiguration`] is the property bag a [`SegmentedControl`] owns.
//! Hosts mutate it through [`SegmentedControl::configure`] (or the typed
//! setters), after which [`ControlConfiguration::normalize`] re-establishes
//! the invariants and the cached layout is dropped.
//!
//! [`SegmentedControl`]: crate::SegmentedControl
//! [`SegmentedControl::configure`]: crate::SegmentedControl::configure

use std::fmt;
use std::rc::Rc;

use crate::content::{ContentKind, SegmentContent, StyledText, TextStyle, TextStyleOverride};
use crate::types::{
    insets, BorderType, EdgeInsets, ImagePosition, IndicatorLocation, Rgba, SelectionStyle,
    WidthStyle, ZERO_INSETS,
};

/// "No segment selected".
pub const NO_SEGMENT: Option<usize> = None;

/// Per-segment title formatting hook.
///
/// Called with the configuration, the raw title, the segment index and
/// whether that segment is selected. Returning `None` falls back to the
/// configured title styles.
pub type TitleFormatter = Rc<dyn Fn(&ControlConfiguration, &str, usize, bool) -> Option<StyledText>>;

pub struct ControlConfiguration {
    /// One entry per segment; order defines the segment index.
    pub contents: Vec<SegmentContent>,
    /// Selected segment, or [`NO_SEGMENT`].
    pub selected: Option<usize>,

    pub width_style: WidthStyle,
    pub selection_style: SelectionStyle,
    pub indicator_location: IndicatorLocation,
    pub indicator_height: f32,
    pub indicator_color: Rgba,
    pub indicator_box_color: Rgba,
    pub indicator_box_opacity: f32,
    pub background_color: Rgba,

    /// Padding added on each side of a segment's content when sizing it.
    pub segment_insets: EdgeInsets,
    pub indicator_insets: EdgeInsets,
    /// How far outside the bounds a touch still counts.
    pub enlarge_insets: EdgeInsets,

    pub vertical_divider_enabled: bool,
    pub vertical_divider_color: Rgba,
    pub vertical_divider_width: f32,

    pub image_position: ImagePosition,
    pub text_image_spacing: f32,

    pub borders: BorderType,
    pub border_color: Rgba,
    pub border_width: f32,

    pub title_style: TextStyleOverride,
    pub selected_title_style: TextStyleOverride,
    pub title_formatter: Option<TitleFormatter>,

    pub user_draggable: bool,
    pub touch_enabled: bool,
    pub animate_user_selection: bool,
    pub stretch_to_fill: bool,
}

impl Default for ControlConfiguration {
    fn default() -> Self {
        Self {
            contents: Vec::new(),
            selected: Some(0),
            width_style: WidthStyle::Fixed,
            selection_style: SelectionStyle::TextWidthStripe,
            indicator_location: IndicatorLocation::Up,
            indicator_height: 5.0,
            indicator_color: Rgba::INDICATOR_BLUE,
            indicator_box_color: Rgba::INDICATOR_BLUE,
            indicator_box_opacity: 0.2,
            background_color: Rgba::WHITE,
            segment_insets: insets(0.0, 5.0, 0.0, 5.0),
            indicator_insets: ZERO_INSETS,
            enlarge_insets: insets(0.0, 5.0, 0.0, 5.0),
            vertical_divider_enabled: false,
            vertical_divider_color: Rgba::BLACK,
            vertical_divider_width: 1.0,
            image_position: ImagePosition::BehindText,
            text_image_spacing: 0.0,
            borders: BorderType::NONE,
            border_color: Rgba::BLACK,
            border_width: 1.0,
            title_style: TextStyleOverride::default(),
            selected_title_style: TextStyleOverride::default(),
            title_formatter: None,
            user_draggable: true,
            touch_enabled: true,
            animate_user_selection: true,
            stretch_to_fill: false,
        }
    }
}

impl ControlConfiguration {
    pub fn segment_count(&self) -> usize {
        self.contents.len()
    }

    pub fn content_kind(&self) -> ContentKind {
        ContentKind::of(&self.contents)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Title style for unselected segments.
    pub fn resolved_title_style(&self) -> TextStyle {
        TextStyle::default().merged(&self.title_style)
    }

    /// Title style for the selected segment, layered over the normal style.
    pub fn resolved_selected_title_style(&self) -> TextStyle {
        self.resolved_title_style().merged(&self.selected_title_style)
    }

    pub fn title_style_for(&self, is_selected: bool) -> TextStyle {
        if is_selected {
            self.resolved_selected_title_style()
        } else {
            self.resolved_title_style()
        }
    }

    /// Re-establish invariants after a mutation.
    ///
    /// - pure image content always uses the fixed width policy
    /// - no indicator location means no indicator height
    /// - a selection past the end becomes [`NO_SEGMENT`]
    pub fn normalize(&mut self) {
        if self.content_kind() == ContentKind::Images {
            self.width_style = WidthStyle::Fixed;
        }
        if self.indicator_location == IndicatorLocation::None {
            self.indicator_height = 0.0;
        }
        if self.selected.is_some_and(|i| i >= self.segment_count()) {
            self.selected = NO_SEGMENT;
        }
    }
}

impl fmt::Debug for ControlConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlConfiguration")
            .field("segments", &self.contents.len())
            .field("selected", &self.selected)
            .field("width_style", &self.width_style)
            .field("selection_style", &self.selection_style)
            .field("indicator_location", &self.indicator_location)
            .field("indicator_height", &self.indicator_height)
            .field("has_title_formatter", &self.title_formatter.is_some())
            .finish_non_exhaustive()
    }
}
