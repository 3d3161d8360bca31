//! Scene interface between the control and a concrete renderer.
//!
//! The control never rasterizes anything itself. Each draw pass emits
//! declarative [`DrawCommand`]s in content coordinates, and the selection
//! indicator lives in retained [`IndicatorNode`]s the control attaches,
//! detaches and commits frames to. The scene applies the viewport offset.

use std::collections::HashMap;
use std::time::Duration;

use crate::content::{Image, StyledText};
use crate::indicator::{ArrowPath, IndicatorKind};
use crate::state::{FrameAnimation, Transition};
use crate::types::{Frame, Rgba};

// =============================================================================
// COMMANDS AND NODES
// =============================================================================

/// One immediate-mode drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { frame: Frame, color: Rgba },
    Text { frame: Frame, text: StyledText },
    Image { frame: Frame, image: Image },
}

/// Z-order of a retained node relative to the segment content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Above all content.
    Front,
    /// Below all content.
    Back,
}

/// Retained indicator visual.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorNode {
    pub frame: Frame,
    pub color: Rgba,
    /// Clip triangle in node-local coordinates (arrow style).
    pub mask: Option<ArrowPath>,
}

// =============================================================================
// SCENE TRAIT
// =============================================================================

/// Rendering backend the control drives.
pub trait Scene {
    /// Start a draw pass; discards the previous pass's commands.
    fn begin_frame(&mut self, content_width: f32);

    fn draw(&mut self, command: DrawCommand);

    fn is_attached(&self, kind: IndicatorKind) -> bool;

    fn attach(&mut self, kind: IndicatorKind, placement: Placement);

    fn detach(&mut self, kind: IndicatorKind);

    /// Move an attached node to `node`, jumping or interpolating.
    fn commit(&mut self, kind: IndicatorKind, node: IndicatorNode, transition: Transition);

    /// Scroll the content so `offset_x` is at the viewport's left edge.
    fn scroll_to(&mut self, offset_x: f32, animated: bool);
}

// =============================================================================
// RECORDING SCENE
// =============================================================================

/// A committed frame as the scene received it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRecord {
    pub kind: IndicatorKind,
    pub frame: Frame,
    pub transition: Transition,
}

#[derive(Debug, Clone)]
struct RetainedNode {
    placement: Placement,
    node: Option<IndicatorNode>,
    animation: Option<FrameAnimation>,
}

/// In-memory scene that records everything it is told.
///
/// Headless hosts can use it as a display list; it also interpolates
/// animated commits so the presented frame can be sampled with
/// [`RecordingScene::presented_frame`] after [`RecordingScene::tick`].
#[derive(Debug, Clone, Default)]
pub struct RecordingScene {
    commands: Vec<DrawCommand>,
    nodes: HashMap<IndicatorKind, RetainedNode>,
    commits: Vec<CommitRecord>,
    scrolls: Vec<(f32, bool)>,
    content_width: f32,
    frames_drawn: usize,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the latest draw pass.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every commit since creation (or the last [`clear_history`](Self::clear_history)).
    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    /// Every `(offset, animated)` scroll request.
    pub fn scrolls(&self) -> &[(f32, bool)] {
        &self.scrolls
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn clear_history(&mut self) {
        self.commits.clear();
        self.scrolls.clear();
    }

    /// Attached node kinds.
    pub fn attached(&self) -> Vec<IndicatorKind> {
        let mut kinds: Vec<_> = self.nodes.keys().copied().collect();
        kinds.sort_by_key(|kind| *kind as u8);
        kinds
    }

    pub fn placement(&self, kind: IndicatorKind) -> Option<Placement> {
        self.nodes.get(&kind).map(|n| n.placement)
    }

    /// Last committed node of an attached kind.
    pub fn node(&self, kind: IndicatorKind) -> Option<&IndicatorNode> {
        self.nodes.get(&kind)?.node.as_ref()
    }

    /// Frame currently on screen, mid-animation included.
    pub fn presented_frame(&self, kind: IndicatorKind) -> Option<Frame> {
        let retained = self.nodes.get(&kind)?;
        match &retained.animation {
            Some(animation) => Some(animation.current()),
            None => retained.node.as_ref().map(|n| n.frame),
        }
    }

    /// Advance running animations.
    pub fn tick(&mut self, dt: Duration) {
        for retained in self.nodes.values_mut() {
            if let Some(animation) = retained.animation.as_mut() {
                animation.advance(dt);
                if animation.is_finished() {
                    retained.animation = None;
                }
            }
        }
    }
}

impl Scene for RecordingScene {
    fn begin_frame(&mut self, content_width: f32) {
        self.commands.clear();
        self.content_width = content_width;
        self.frames_drawn += 1;
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn is_attached(&self, kind: IndicatorKind) -> bool {
        self.nodes.contains_key(&kind)
    }

    fn attach(&mut self, kind: IndicatorKind, placement: Placement) {
        self.nodes.entry(kind).or_insert(RetainedNode {
            placement,
            node: None,
            animation: None,
        });
    }

    fn detach(&mut self, kind: IndicatorKind) {
        self.nodes.remove(&kind);
    }

    fn commit(&mut self, kind: IndicatorKind, node: IndicatorNode, transition: Transition) {
        let Some(retained) = self.nodes.get_mut(&kind) else {
            return;
        };
        let shown = match &retained.animation {
            Some(animation) => Some(animation.current()),
            None => retained.node.as_ref().map(|n| n.frame),
        };
        retained.animation =
            shown.and_then(|from| FrameAnimation::for_transition(from, node.frame, transition));
        self.commits.push(CommitRecord {
            kind,
            frame: node.frame,
            transition,
        });
        retained.node = Some(node);
    }

    fn scroll_to(&mut self, offset_x: f32, animated: bool) {
        self.scrolls.push((offset_x, animated));
    }
}
