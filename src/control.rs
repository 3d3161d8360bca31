//! The segmented control.
//!
//! [`SegmentedControl`] owns the configuration, caches the layout, and runs
//! the selection state machine: unselected or selected at an index, entered
//! through programmatic calls or touches. Every committed change repositions
//! the indicator nodes (immediately or animated), centers the viewport on
//! the selected segment, updates the reactive selection signal and, when
//! asked to, notifies observers exactly once.
//!
//! # Example
//!
//! ```
//! use spark_segmented::{SegmentedControl, types::{point, size}};
//!
//! let mut control = SegmentedControl::with_titles(["A", "B", "C"]);
//! control.set_bounds(size(300.0, 40.0));
//! control.touches_ended(point(150.0, 20.0));
//! assert_eq!(control.selected_segment_index(), Some(1));
//! ```

use spark_signals::Signal;
use tracing::{debug, warn};

use crate::config::{ControlConfiguration, TitleFormatter, NO_SEGMENT};
use crate::content::{Image, SegmentContent, Title};
use crate::error::{Result, SegmentedError};
use crate::indicator::{self, IndicatorKind};
use crate::layout::{compute_layout, LayoutResult, Measurement, MonospaceMeasurer, TextMeasurer};
use crate::renderer::{draw_segments, indicator_kinds, indicator_node, RecordingScene, Scene};
use crate::state::{
    segment_at, Gesture, ListenerId, SelectionNotifier, TouchEvent, TouchTracker, Transition,
    Viewport,
};
use crate::types::{Frame, Point, SelectionStyle, Size, WidthStyle, ZERO_SIZE};

const ALL_INDICATOR_KINDS: [IndicatorKind; 3] =
    [IndicatorKind::Stripe, IndicatorKind::Box, IndicatorKind::Arrow];

pub struct SegmentedControl<S: Scene = RecordingScene> {
    config: ControlConfiguration,
    measurer: Box<dyn TextMeasurer>,
    scene: S,
    bounds: Size,
    layout: Option<LayoutResult>,
    /// Indicator nodes need fresh frames after a relayout.
    indicator_stale: bool,
    needs_display: bool,
    viewport: Viewport,
    tracker: TouchTracker,
    notifier: SelectionNotifier,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl SegmentedControl<RecordingScene> {
    /// Text segments, one per title.
    pub fn with_titles<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Title>,
    {
        Self::with_contents(SegmentContent::from_titles(titles), RecordingScene::new())
    }

    /// Image segments. `selected` is empty or has one image per segment.
    pub fn with_images(images: Vec<Image>, selected: Vec<Image>) -> Result<Self> {
        let contents = SegmentContent::from_images(images, selected)?;
        Ok(Self::with_contents(contents, RecordingScene::new()))
    }

    /// Combined segments; fails on a title/image count mismatch.
    pub fn with_images_and_titles<T: Into<Title>>(
        images: Vec<Image>,
        selected: Vec<Image>,
        titles: Vec<T>,
    ) -> Result<Self> {
        let contents = SegmentContent::from_images_and_titles(images, selected, titles)?;
        Ok(Self::with_contents(contents, RecordingScene::new()))
    }

    /// Decoding a control from an archive is not supported.
    pub fn from_archive(_archive: &[u8]) -> Result<Self> {
        Err(SegmentedError::Unsupported("archive decoding"))
    }
}

impl<S: Scene> SegmentedControl<S> {
    /// Control over `contents` rendering into `scene`.
    pub fn with_contents(contents: Vec<SegmentContent>, scene: S) -> Self {
        let mut config = ControlConfiguration {
            contents,
            ..Default::default()
        };
        config.normalize();
        let mut viewport = Viewport::new();
        viewport.scroll_enabled = config.user_draggable;
        let notifier = SelectionNotifier::new(config.selected);
        Self {
            config,
            measurer: Box::new(MonospaceMeasurer::default()),
            scene,
            bounds: ZERO_SIZE,
            layout: None,
            indicator_stale: false,
            needs_display: true,
            viewport,
            tracker: TouchTracker::new(),
            notifier,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn config(&self) -> &ControlConfiguration {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn segment_count(&self) -> usize {
        self.config.segment_count()
    }

    pub fn selected_segment_index(&self) -> Option<usize> {
        self.config.selected
    }

    /// Whether a draw pass is pending.
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Reactive mirror of the selection; `-1` while nothing is selected.
    pub fn selection_signal(&self) -> Signal<i32> {
        self.notifier.signal()
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Mutate the configuration, then re-normalize and invalidate.
    ///
    /// Writing `selected` here neither scrolls the viewport nor commits
    /// indicator frames until the next `draw`. Use
    /// `set_selected_segment_index*` when the selection should be scrolled
    /// into view.
    pub fn configure(&mut self, f: impl FnOnce(&mut ControlConfiguration)) {
        let style = self.config.selection_style;
        let selected = self.config.selected;

        f(&mut self.config);
        self.config.normalize();

        if self.config.selection_style != style {
            self.detach_indicators();
        }
        if self.config.selected != selected {
            if self.config.selected.is_none() {
                self.detach_indicators();
            }
            self.notifier.sync(self.config.selected);
        }
        self.viewport.scroll_enabled = self.config.user_draggable;
        self.invalidate_layout();
    }

    pub fn set_contents(&mut self, contents: Vec<SegmentContent>) {
        self.configure(|cfg| cfg.contents = contents);
    }

    pub fn set_width_style(&mut self, width_style: WidthStyle) {
        self.configure(|cfg| cfg.width_style = width_style);
    }

    pub fn set_selection_style(&mut self, selection_style: SelectionStyle) {
        self.configure(|cfg| cfg.selection_style = selection_style);
    }

    pub fn set_title_formatter(&mut self, formatter: Option<TitleFormatter>) {
        self.configure(|cfg| cfg.title_formatter = formatter);
    }

    /// Replace the text measurement backend.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
        self.invalidate_layout();
    }

    /// Host view bounds changed.
    pub fn set_bounds(&mut self, bounds: Size) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.invalidate_layout();
        self.ensure_layout();
        if let Some(index) = self.config.selected {
            self.commit_indicators(index, Transition::Immediate);
            self.scroll_to_segment(index, false);
        }
    }

    /// Whether the control is part of a host view hierarchy.
    ///
    /// Value-changed listeners only fire while hosted.
    pub fn set_hosted(&mut self, hosted: bool) {
        self.notifier.set_hosted(hosted);
        if hosted && self.config.segment_count() > 0 {
            self.ensure_layout();
            self.needs_display = true;
        }
    }

    pub fn is_hosted(&self) -> bool {
        self.notifier.is_hosted()
    }

    // =========================================================================
    // OBSERVERS
    // =========================================================================

    /// Callback fired with the new index on every notifying change.
    pub fn on_index_change(&mut self, callback: impl FnMut(usize) + 'static) {
        self.notifier.set_index_change(Some(Box::new(callback)));
    }

    pub fn clear_index_change(&mut self) {
        self.notifier.set_index_change(None);
    }

    pub fn add_value_changed_listener(
        &mut self,
        listener: impl FnMut(usize) + 'static,
    ) -> ListenerId {
        self.notifier.add_listener(Box::new(listener))
    }

    pub fn remove_value_changed_listener(&mut self, id: ListenerId) -> bool {
        self.notifier.remove_listener(id)
    }

    // =========================================================================
    // LAYOUT
    // =========================================================================

    /// Current layout, recomputed if stale.
    pub fn layout(&mut self) -> &LayoutResult {
        let Self {
            config,
            measurer,
            bounds,
            layout,
            viewport,
            ..
        } = self;
        layout.get_or_insert_with(|| {
            let result = compute_layout(&Measurement::new(config, &**measurer), *bounds);
            viewport.set_extents(bounds.width, result.total_width);
            result
        })
    }

    fn ensure_layout(&mut self) {
        self.layout();
    }

    fn invalidate_layout(&mut self) {
        self.layout = None;
        self.indicator_stale = true;
        self.needs_display = true;
    }

    /// Frame of the selection stripe (or arrow), or `None` while unselected.
    pub fn indicator_frame(&mut self) -> Option<Frame> {
        let index = self.config.selected?;
        self.ensure_layout();
        let layout = self.layout.as_ref()?;
        let measurement = Measurement::new(&self.config, &*self.measurer);
        Some(indicator::indicator_frame(&measurement, layout, index))
    }

    /// Segment under a control-local point at the current scroll offset.
    pub fn segment_at_point(&mut self, at: Point) -> Option<usize> {
        self.ensure_layout();
        let layout = self.layout.as_ref()?;
        segment_at(at, self.viewport.offset_x(), layout, self.config.enlarge_insets)
    }

    // =========================================================================
    // DRAWING
    // =========================================================================

    /// Run a draw pass into the scene.
    ///
    /// Indicator nodes for the current style are attached here if missing,
    /// and get fresh frames after a relayout.
    pub fn draw(&mut self) {
        self.ensure_layout();
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let measurement = Measurement::new(&self.config, &*self.measurer);
        draw_segments(&measurement, layout, &mut self.scene);

        if let Some(index) = self.config.selected {
            for &(kind, placement) in indicator_kinds(self.config.selection_style) {
                let attached = self.scene.is_attached(kind);
                if !attached {
                    self.scene.attach(kind, placement);
                }
                if !attached || self.indicator_stale {
                    let node = indicator_node(&measurement, layout, kind, index);
                    self.scene.commit(kind, node, Transition::Immediate);
                }
            }
            self.indicator_stale = false;
        }
        self.needs_display = false;
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Select without animation or notification.
    pub fn set_selected_segment_index(&mut self, index: Option<usize>) {
        self.set_selected_segment_index_with(index, false, false);
    }

    /// Select, optionally animated, without notification.
    pub fn set_selected_segment_index_animated(&mut self, index: Option<usize>, animated: bool) {
        self.set_selected_segment_index_with(index, animated, false);
    }

    /// The selection primitive.
    ///
    /// `None` removes the indicator and never notifies. An index past the
    /// last segment is ignored.
    pub fn set_selected_segment_index_with(
        &mut self,
        index: Option<usize>,
        animated: bool,
        notify: bool,
    ) {
        match index {
            None => self.clear_selection(),
            Some(index) if index >= self.config.segment_count() => {
                warn!(
                    index,
                    segments = self.config.segment_count(),
                    "selection index out of range, ignored"
                );
            }
            Some(index) => self.transition_to(index, animated, notify),
        }
    }

    fn clear_selection(&mut self) {
        self.config.selected = NO_SEGMENT;
        self.detach_indicators();
        self.notifier.sync(NO_SEGMENT);
        self.needs_display = true;
        debug!("selection cleared");
    }

    fn transition_to(&mut self, index: usize, animated: bool, notify: bool) {
        if self.config.selected != Some(index) {
            self.config.selected = Some(index);
            // selected title style can change measurement
            self.invalidate_layout();
        }
        self.needs_display = true;
        self.ensure_layout();
        self.scroll_to_segment(index, animated);

        let newly_attached = self.attach_indicators();
        if animated {
            if newly_attached {
                self.commit_indicators(index, Transition::Immediate);
            }
            self.commit_indicators(index, Transition::animated());
        } else {
            self.commit_indicators(index, Transition::Immediate);
        }

        self.notifier.sync(Some(index));
        debug!(index, animated, notify, "selection committed");
        if notify {
            self.notifier.notify(index);
        }
    }

    /// Attach the current style's nodes. Returns `true` if any was missing.
    fn attach_indicators(&mut self) -> bool {
        let mut attached_any = false;
        for &(kind, placement) in indicator_kinds(self.config.selection_style) {
            if !self.scene.is_attached(kind) {
                self.scene.attach(kind, placement);
                attached_any = true;
            }
        }
        attached_any
    }

    fn detach_indicators(&mut self) {
        for kind in ALL_INDICATOR_KINDS {
            if self.scene.is_attached(kind) {
                self.scene.detach(kind);
            }
        }
    }

    fn commit_indicators(&mut self, index: usize, transition: Transition) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let measurement = Measurement::new(&self.config, &*self.measurer);
        for &(kind, _) in indicator_kinds(self.config.selection_style) {
            if self.scene.is_attached(kind) {
                let node = indicator_node(&measurement, layout, kind, index);
                self.scene.commit(kind, node, transition);
            }
        }
        self.indicator_stale = false;
    }

    fn scroll_to_segment(&mut self, index: usize, animated: bool) {
        let Some(layout) = self.layout.as_ref() else {
            return;
        };
        let offset = self.viewport.center_on(layout.segment_frame(index));
        self.scene.scroll_to(offset, animated);
    }

    // =========================================================================
    // TOUCH
    // =========================================================================

    /// A touch was released at `at` (control-local).
    ///
    /// Selects the segment under the touch unless touch is disabled, the
    /// touch misses every segment, or that segment is already selected.
    pub fn touches_ended(&mut self, at: Point) {
        if !self.config.touch_enabled {
            return;
        }
        let Some(index) = self.segment_at_point(at) else {
            return;
        };
        if self.config.selected == Some(index) {
            return;
        }
        let animated = self.config.animate_user_selection;
        self.transition_to(index, animated, true);
    }

    /// Feed a touch gesture event.
    ///
    /// Horizontal drags scroll the viewport when the control is draggable;
    /// a release without a drag is a tap.
    /// Disabling touch stops taps from selecting; dragging still scrolls.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        match self.tracker.update(event, self.config.user_draggable) {
            Gesture::Drag { dx } => {
                self.ensure_layout();
                if self.viewport.scroll_by(dx) {
                    self.scene.scroll_to(self.viewport.offset_x(), false);
                }
            }
            Gesture::Tap(at) if self.config.touch_enabled => self.touches_ended(at),
            Gesture::Tap(_) => {}
            Gesture::Pending | Gesture::Finished => {}
        }
    }
}
