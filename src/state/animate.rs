//! Indicator Animation
//!
//! Frame transitions for the retained indicator nodes.
//!
//! # Pattern
//!
//! - A commit is either immediate or animated (150 ms, linear)
//! - An animated commit starts from whatever the node currently shows
//! - A new commit replaces an in-flight one (last write wins)
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use spark_segmented::state::FrameAnimation;
//! use spark_segmented::types::Frame;
//!
//! let mut anim = FrameAnimation::new(
//!     Frame::new(0.0, 0.0, 100.0, 5.0),
//!     Frame::new(100.0, 0.0, 100.0, 5.0),
//!     Duration::from_millis(150),
//! );
//! anim.advance(Duration::from_millis(75));
//! assert!((anim.current().x - 50.0).abs() < 1e-3);
//! ```

use std::time::Duration;

use crate::types::Frame;

/// Duration of an animated indicator move.
pub const INDICATOR_ANIMATION_DURATION: Duration = Duration::from_millis(150);

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Progress curve of an animated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timing {
    #[default]
    Linear,
}

impl Timing {
    /// Map linear progress `t` (0..=1) through the curve.
    #[inline]
    pub fn ease(self, t: f32) -> f32 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
        }
    }
}

/// How a frame commit reaches the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Jump to the new frame with no implicit animation.
    #[default]
    Immediate,
    Animated { duration: Duration, timing: Timing },
}

impl Transition {
    /// The standard indicator animation.
    pub const fn animated() -> Self {
        Self::Animated {
            duration: INDICATOR_ANIMATION_DURATION,
            timing: Timing::Linear,
        }
    }

    #[inline]
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }
}

// =============================================================================
// FRAME ANIMATION
// =============================================================================

/// An in-flight move between two frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimation {
    from: Frame,
    to: Frame,
    duration: Duration,
    timing: Timing,
    elapsed: Duration,
}

impl FrameAnimation {
    /// Linear animation from `from` to `to`.
    pub fn new(from: Frame, to: Frame, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            timing: Timing::Linear,
            elapsed: Duration::ZERO,
        }
    }

    /// Animation for a commit, or `None` for an immediate one.
    pub fn for_transition(from: Frame, to: Frame, transition: Transition) -> Option<Self> {
        match transition {
            Transition::Immediate => None,
            Transition::Animated { duration, timing } => Some(Self {
                timing,
                ..Self::new(from, to, duration)
            }),
        }
    }

    #[inline]
    pub fn target(&self) -> Frame {
        self.to
    }

    /// Advance the clock.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Frame shown at the current time.
    pub fn current(&self) -> Frame {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Frame::lerp(self.from, self.to, self.timing.ease(t))
    }
}
