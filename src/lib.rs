//! # spark-segmented
//!
//! Segmented control engine for Rust UI hosts.
//!
//! A row of selectable segments (text, images, or both) with a moving
//! selection indicator. The crate computes geometry and state; drawing is
//! delegated to a [`Scene`] the host implements, and the selection is also
//! published as a [spark-signals](https://github.com/RLabs-Inc/spark-signals)
//! signal for reactive hosts.
//!
//! ## Architecture
//!
//! ```text
//! ControlConfiguration → Measurement → compute_layout → LayoutResult
//!                                                      ├→ draw pass → Scene commands
//!                                                      ├→ indicator geometry → Scene nodes
//!                                                      └→ hit-testing ← touches
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, colors, style enums, bitflags
//! - [`content`] - Segment content and text styles
//! - [`config`] - The control's property bag
//! - [`layout`] - Measurement adapter and width policies
//! - [`indicator`] - Selection indicator geometry
//! - [`state`] - Hit-testing, viewport, animation, change notification
//! - [`renderer`] - Scene interface and draw pass
//! - [`control`] - [`SegmentedControl`] and its selection state machine

pub mod config;
pub mod content;
pub mod control;
pub mod error;
pub mod indicator;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{ControlConfiguration, TitleFormatter, NO_SEGMENT};

pub use content::{
    ContentKind, Image, SegmentContent, StyledText, TextStyle, TextStyleOverride, Title,
};

pub use control::SegmentedControl;

pub use error::{Result, SegmentedError};

pub use indicator::{arrow_path, filler_frame, indicator_frame, ArrowPath, IndicatorKind};

pub use layout::{
    compute_layout, place_segment, string_width, LayoutResult, Measurement, MonospaceMeasurer,
    SegmentPlacement, TextMeasurer, TextMetrics,
};

pub use renderer::{CommitRecord, DrawCommand, IndicatorNode, Placement, RecordingScene, Scene};

pub use state::{
    segment_at, ListenerId, TouchEvent, Transition, Viewport, INDICATOR_ANIMATION_DURATION,
};
