//! Layout Module
//!
//! Segment sizing and content placement.
//!
//! # Architecture
//!
//! 1. [`Measurement`] turns segment content into sizes through the host's
//!    [`TextMeasurer`]
//! 2. [`compute_layout`] partitions the bounds into segment widths under the
//!    fixed or dynamic policy, producing a cached [`LayoutResult`]
//! 3. [`place_segment`] positions titles, images and dividers inside each
//!    segment for the draw pass
//!
//! # Example
//!
//! ```
//! use spark_segmented::config::ControlConfiguration;
//! use spark_segmented::content::SegmentContent;
//! use spark_segmented::layout::{compute_layout, Measurement, MonospaceMeasurer};
//! use spark_segmented::types::size;
//!
//! let config = ControlConfiguration {
//!     contents: vec![SegmentContent::Text("A".into()), SegmentContent::Text("B".into())],
//!     ..Default::default()
//! };
//! let measurer = MonospaceMeasurer::cells();
//! let layout = compute_layout(&Measurement::new(&config, &measurer), size(80.0, 3.0));
//! assert_eq!(layout.segment_width, 40.0);
//! ```

mod placement;
mod segments;
mod text_measure;
mod types;

pub use placement::*;
pub use segments::*;
pub use text_measure::*;
pub use types::*;
