//! State Module - Runtime state of the control
//!
//! - **Mouse** - Touch events, gesture tracking, segment hit-testing
//! - **Scroll** - Horizontal viewport over the segment strip
//! - **Animate** - Immediate vs animated indicator commits
//! - **Selection** - Change notification and the reactive selection mirror

mod animate;
mod mouse;
mod scroll;
mod selection;

pub use animate::*;
pub use mouse::*;
pub use scroll::*;
pub use selection::*;
