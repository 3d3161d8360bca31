//! Renderer Module
//!
//! The control emits declarative draw commands and drives retained
//! indicator nodes through the [`Scene`] trait. [`RecordingScene`] is the
//! in-memory implementation.

mod draw;
mod scene;

pub use draw::*;
pub use scene::*;
