//! Core types for spark-segmented.
//!
//! Geometry, color and style enums shared by the layout engine, the
//! indicator geometry, hit-testing and the renderer. Sizes, points and edge
//! insets reuse Taffy's geometry types so hosts that already lay out with
//! Taffy can pass values straight through.

// =============================================================================
// Geometry
// =============================================================================

/// Width/height pair in points.
pub type Size = taffy::Size<f32>;

/// A point in control-local coordinates (origin at the control's top-left).
pub type Point = taffy::Point<f32>;

/// Edge insets (`left`, `right`, `top`, `bottom`).
pub type EdgeInsets = taffy::Rect<f32>;

/// Create a [`Size`].
#[inline]
pub const fn size(width: f32, height: f32) -> Size {
    taffy::Size { width, height }
}

/// Create a [`Point`].
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    taffy::Point { x, y }
}

/// Create [`EdgeInsets`] in UIKit argument order (top, left, bottom, right).
#[inline]
pub const fn insets(top: f32, left: f32, bottom: f32, right: f32) -> EdgeInsets {
    taffy::Rect {
        left,
        right,
        top,
        bottom,
    }
}

pub const ZERO_SIZE: Size = size(0.0, 0.0);

/// Zero insets.
pub const ZERO_INSETS: EdgeInsets = insets(0.0, 0.0, 0.0, 0.0);

/// An axis-aligned rectangle.
///
/// Every rectangle the engine hands to a renderer goes through
/// [`Frame::ceil`] first so text and images land on whole points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new frame.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Frame at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn size(&self) -> Size {
        size(self.width, self.height)
    }

    /// Check if a point is inside this frame (min edges inclusive, max edges exclusive).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.max_x() && p.y >= self.y && p.y < self.max_y()
    }

    /// Grow the frame outward by the given insets.
    pub fn outset(&self, by: EdgeInsets) -> Self {
        Self::new(
            self.x - by.left,
            self.y - by.top,
            self.width + by.left + by.right,
            self.height + by.top + by.bottom,
        )
    }

    /// Round every component up to a whole point.
    pub fn ceil(&self) -> Self {
        Self::new(
            self.x.ceil(),
            self.y.ceil(),
            self.width.ceil(),
            self.height.ceil(),
        )
    }

    /// Linear interpolation between two frames.
    #[inline]
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Self::new(
            mix(a.x, b.x),
            mix(a.y, b.y),
            mix(a.width, b.width),
            mix(a.height, b.height),
        )
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// The stock indicator tint.
    pub const INDICATOR_BLUE: Self = Self::from_rgb_int(0x34b5e5);

    /// Create from 0xRRGGBB integer format.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Same color with alpha scaled by `opacity` (0.0 - 1.0).
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
    }
}

// =============================================================================
// Border edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which edges of each segment get a border stroke.
    ///
    /// Composable: `BorderType::TOP | BorderType::BOTTOM`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BorderType: u8 {
        const NONE = 0;
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

// =============================================================================
// Style enums
// =============================================================================

/// Visual style of the selection indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelectionStyle {
    /// Stripe as wide as the selected segment's content.
    #[default]
    TextWidthStripe = 0,
    /// Stripe spanning the whole segment.
    FullWidthStripe = 1,
    /// Full-width stripe plus a translucent box filling the segment.
    Box = 2,
    /// Small triangle under (or over) the segment's midpoint.
    Arrow = 3,
}

/// Edge the selection indicator sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum IndicatorLocation {
    #[default]
    Up = 0,
    Down = 1,
    /// No indicator stripe; forces the indicator height to 0.
    None = 2,
}

/// How total width is partitioned between segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum WidthStyle {
    /// One uniform width for every segment.
    #[default]
    Fixed = 0,
    /// Each segment sized to its own content.
    Dynamic = 1,
}

/// Where the image sits relative to the title in combined segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ImagePosition {
    #[default]
    BehindText = 0,
    LeftOfText = 1,
    RightOfText = 2,
    AboveText = 3,
    BelowText = 4,
}

impl ImagePosition {
    /// Image and title share the row (widths add up).
    #[inline]
    pub const fn is_horizontal(&self) -> bool {
        matches!(self, Self::LeftOfText | Self::RightOfText)
    }
}
