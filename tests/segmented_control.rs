//! Public API behavior of the segmented control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use spark_segmented::{
    compute_layout, insets, point, size, ControlConfiguration, Image, IndicatorKind,
    IndicatorLocation, Measurement, MonospaceMeasurer, Scene, SegmentContent, SegmentedControl,
    SegmentedError, SelectionStyle, StyledText, TextStyle, TitleFormatter, TouchEvent, Transition,
    WidthStyle, ZERO_INSETS,
};
use spark_signals::effect;

// =============================================================================
// Helpers
// =============================================================================

fn setup(titles: &[&str], width: f32) -> SegmentedControl {
    let mut control = SegmentedControl::with_titles(titles.iter().copied());
    control.set_text_measurer(MonospaceMeasurer::cells());
    control.set_bounds(size(width, 40.0));
    control
}

fn record(control: &mut SegmentedControl) -> Rc<RefCell<Vec<usize>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    control.on_index_change(move |i| sink.borrow_mut().push(i));
    log
}

fn text_config(titles: &[&str], width_style: WidthStyle) -> ControlConfiguration {
    ControlConfiguration {
        contents: SegmentContent::from_titles(titles.iter().copied()),
        width_style,
        ..Default::default()
    }
}

// =============================================================================
// Selection state
// =============================================================================

#[test]
fn test_selected_index_round_trips() {
    let mut control = setup(&["One", "Two", "Three", "Four"], 200.0);
    for i in 0..4 {
        control.set_selected_segment_index(Some(i));
        assert_eq!(control.selected_segment_index(), Some(i));
        assert!(control.indicator_frame().is_some());
    }
}

#[test]
fn test_no_segment_removes_indicator() {
    let mut control = setup(&["A", "B"], 100.0);
    control.configure(|cfg| cfg.selection_style = SelectionStyle::Box);
    control.set_selected_segment_index(Some(0));
    assert_eq!(control.scene().attached().len(), 2);

    control.set_selected_segment_index(None);
    assert!(control.scene().attached().is_empty());
    assert_eq!(control.indicator_frame(), None);

    control.draw();
    assert!(control.scene().attached().is_empty());
}

#[test]
fn test_three_text_segments_example() {
    let mut control = SegmentedControl::with_titles(["A", "B", "C"]);
    control.set_bounds(size(300.0, 40.0));
    assert_eq!(control.layout().segment_width, 100.0);

    control.touches_ended(point(150.0, 20.0));
    assert_eq!(control.selected_segment_index(), Some(1));

    control.configure(|cfg| {
        cfg.selection_style = SelectionStyle::FullWidthStripe;
        cfg.indicator_location = IndicatorLocation::Down;
    });
    control.set_selected_segment_index(Some(2));
    let frame = control.indicator_frame().unwrap();
    assert_eq!(frame.x, 200.0);
    assert_eq!(frame.width, 100.0);
    assert_eq!(frame.y, 35.0);
}

// =============================================================================
// Notification
// =============================================================================

#[test]
fn test_touching_selected_segment_is_silent() {
    let mut control = setup(&["A", "B", "C"], 300.0);
    control.set_selected_segment_index(Some(1));
    let log = record(&mut control);

    control.touches_ended(point(150.0, 20.0));
    assert!(log.borrow().is_empty());

    control.touches_ended(point(250.0, 20.0));
    assert_eq!(*log.borrow(), vec![2]);
}

#[test]
fn test_animated_first_selection_notifies_once() {
    let mut control = setup(&["A", "B", "C"], 300.0);
    let log = record(&mut control);

    control.set_selected_segment_index_with(Some(1), true, true);
    assert_eq!(*log.borrow(), vec![1]);

    // attach, place immediately, then animate
    let transitions: Vec<_> = control
        .scene()
        .commits()
        .iter()
        .map(|c| c.transition)
        .collect();
    assert_eq!(transitions, vec![Transition::Immediate, Transition::animated()]);

    control.scene_mut().clear_history();
    control.set_selected_segment_index_with(Some(2), true, true);
    assert_eq!(*log.borrow(), vec![1, 2]);
    let transitions: Vec<_> = control
        .scene()
        .commits()
        .iter()
        .map(|c| c.transition)
        .collect();
    assert_eq!(transitions, vec![Transition::animated()]);
}

#[test]
fn test_programmatic_selection_without_notify() {
    let mut control = setup(&["A", "B"], 100.0);
    let log = record(&mut control);
    control.set_selected_segment_index(Some(1));
    control.set_selected_segment_index_animated(Some(0), true);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_value_changed_listeners_need_host() {
    let mut control = setup(&["A", "B"], 100.0);
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let id = control.add_value_changed_listener(move |_| counter.set(counter.get() + 1));

    control.touches_ended(point(75.0, 10.0));
    assert_eq!(hits.get(), 0);

    control.set_hosted(true);
    control.touches_ended(point(25.0, 10.0));
    assert_eq!(hits.get(), 1);

    assert!(control.remove_value_changed_listener(id));
    control.touches_ended(point(75.0, 10.0));
    assert_eq!(hits.get(), 1);
}

#[test]
fn test_selection_signal_tracks_commits() {
    let mut control = setup(&["A", "B", "C"], 300.0);
    let signal = control.selection_signal();
    assert_eq!(signal.get(), 0);
    control.set_selected_segment_index(None);
    assert_eq!(signal.get(), -1);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let watched = signal.clone();
    let _effect = effect(move || sink.borrow_mut().push(watched.get()));

    control.set_selected_segment_index(Some(2));
    control.touches_ended(point(50.0, 10.0));
    control.set_selected_segment_index(None);
    assert_eq!(*seen.borrow(), vec![-1, 2, 0, -1]);
}

// =============================================================================
// Layout properties
// =============================================================================

#[test]
fn test_fixed_width_is_order_invariant() {
    let measurer = MonospaceMeasurer::cells();
    let a = text_config(&["short", "a much longer one", "mid"], WidthStyle::Fixed);
    let b = text_config(&["mid", "short", "a much longer one"], WidthStyle::Fixed);
    let la = compute_layout(&Measurement::new(&a, &measurer), size(30.0, 10.0));
    let lb = compute_layout(&Measurement::new(&b, &measurer), size(30.0, 10.0));
    assert_eq!(la.segment_width, lb.segment_width);
    assert_eq!(la.segment_width, 27.0);
}

#[test]
fn test_dynamic_widths_sum_to_total() {
    let measurer = MonospaceMeasurer::default();
    let cfg = text_config(&["Mon", "Tuesday", "W", "Thursday!"], WidthStyle::Dynamic);
    let layout = compute_layout(&Measurement::new(&cfg, &measurer), size(100.0, 40.0));
    let sum: f32 = layout.widths.iter().sum();
    assert_eq!(sum, layout.total_width);
    assert_eq!(layout.offsets.last().copied(), Some(layout.total_width));
}

#[test]
fn test_stretch_fills_bounds() {
    let measurer = MonospaceMeasurer::cells();
    let mut cfg = text_config(&["a", "bbb", "cc"], WidthStyle::Dynamic);
    cfg.stretch_to_fill = true;
    let layout = compute_layout(&Measurement::new(&cfg, &measurer), size(120.0, 10.0));
    assert!((layout.total_width - 120.0).abs() <= layout.segment_count as f32);
}

#[test]
fn test_hit_test_inverts_layout() {
    let mut control = setup(&["a", "bb", "ccc", "dddd", "eeeee"], 173.0);
    let count = control.segment_count();
    for i in 0..count {
        let center = control.layout().segment_frame(i).mid_x();
        assert_eq!(control.segment_at_point(point(center, 20.0)), Some(i));
    }
}

#[test]
fn test_dynamic_hit_test_beyond_segments() {
    let mut control = setup(&["ab", "abcd"], 100.0);
    control.configure(|cfg| {
        cfg.width_style = WidthStyle::Dynamic;
        cfg.segment_insets = ZERO_INSETS;
    });
    assert_eq!(control.segment_at_point(point(1.0, 5.0)), Some(0));
    assert_eq!(control.segment_at_point(point(3.0, 5.0)), Some(1));
    assert_eq!(control.segment_at_point(point(50.0, 5.0)), None);

    let log = record(&mut control);
    control.touches_ended(point(50.0, 5.0));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_title_formatter_drives_measurement() {
    let mut control = setup(&["a", "b"], 10.0);
    control.set_selected_segment_index(None);
    let formatter: TitleFormatter = Rc::new(
        |_: &ControlConfiguration, raw: &str, _: usize, selected: bool| {
            let text = if selected {
                format!("[{raw}]")
            } else {
                raw.to_string()
            };
            Some(StyledText::new(text, TextStyle::default()))
        },
    );
    control.configure(|cfg| {
        cfg.width_style = WidthStyle::Dynamic;
        cfg.segment_insets = ZERO_INSETS;
        cfg.title_formatter = Some(formatter);
    });
    assert_eq!(control.layout().widths, vec![1.0, 1.0]);

    control.set_selected_segment_index(Some(1));
    assert_eq!(control.layout().widths, vec![1.0, 3.0]);
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_image_title_mismatch_fails() {
    let images = vec![Image::new("a", 20.0, 20.0), Image::new("b", 20.0, 20.0)];
    let result = SegmentedControl::with_images_and_titles(images, Vec::new(), vec!["x", "y", "z"]);
    assert!(matches!(
        result,
        Err(SegmentedError::LengthMismatch {
            images: 2,
            titles: 3
        })
    ));
}

#[test]
fn test_image_control_forces_fixed_width() {
    let images = vec![Image::new("a", 20.0, 20.0), Image::new("b", 40.0, 20.0)];
    let mut control = SegmentedControl::with_images(images, Vec::new()).unwrap();
    control.set_width_style(WidthStyle::Dynamic);
    assert_eq!(control.config().width_style, WidthStyle::Fixed);
}

#[test]
fn test_archive_construction_unsupported() {
    let err = SegmentedControl::from_archive(b"archived").err();
    assert_eq!(err, Some(SegmentedError::Unsupported("archive decoding")));
}

// =============================================================================
// Viewport and touch input
// =============================================================================

#[test]
fn test_selection_centers_viewport() {
    // 5 segments of 17 (7 columns + 5/5 insets) in a 40 wide viewport
    let mut control = setup(&["Segment"; 5], 40.0);
    assert_eq!(control.viewport().max_offset(), 45.0);

    control.set_selected_segment_index(Some(3));
    assert_eq!(control.viewport().offset_x(), 39.5);
    assert_eq!(control.scene().scrolls().last(), Some(&(39.5, false)));

    control.set_selected_segment_index_animated(Some(4), true);
    assert_eq!(control.viewport().offset_x(), 45.0);
    assert_eq!(control.scene().scrolls().last(), Some(&(45.0, true)));
}

#[test]
fn test_drag_scrolls_then_tap_uses_offset() {
    let mut control = setup(&["Segment"; 5], 40.0);
    let log = record(&mut control);

    control.handle_touch(TouchEvent::Began(point(30.0, 1.0)));
    control.handle_touch(TouchEvent::Moved(point(10.0, 1.0)));
    control.handle_touch(TouchEvent::Ended(point(10.0, 1.0)));
    assert_eq!(control.viewport().offset_x(), 20.0);
    assert_eq!(control.selected_segment_index(), Some(0));

    // 5 + 20 = 25 lands in segment 1 (17..34)
    control.handle_touch(TouchEvent::Began(point(5.0, 1.0)));
    control.handle_touch(TouchEvent::Ended(point(5.0, 1.0)));
    assert_eq!(control.selected_segment_index(), Some(1));
    assert_eq!(*log.borrow(), vec![1]);
}

#[test]
fn test_drag_disabled_when_not_draggable() {
    let mut control = setup(&["Segment"; 5], 40.0);
    control.configure(|cfg| cfg.user_draggable = false);
    control.handle_touch(TouchEvent::Began(point(30.0, 1.0)));
    control.handle_touch(TouchEvent::Moved(point(20.0, 1.0)));
    control.handle_touch(TouchEvent::Ended(point(20.0, 1.0)));
    assert_eq!(control.viewport().offset_x(), 0.0);
    // without a drag the release is a tap on segment 1 (17..34)
    assert_eq!(control.selected_segment_index(), Some(1));
}

#[test]
fn test_crossterm_click_selects() {
    let mut control = setup(&["A", "B", "C"], 30.0);
    control.configure(|cfg| cfg.segment_insets = ZERO_INSETS);
    control.set_bounds(size(30.0, 3.0));

    let press = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 14,
        row: 6,
        modifiers: KeyModifiers::NONE,
    };
    let release = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        ..press
    };
    for event in [press, release] {
        if let Some(touch) = TouchEvent::from_crossterm(&event, (2, 5), size(1.0, 1.0)) {
            control.handle_touch(touch);
        }
    }
    // column 12 of the control, cell center 12.5
    assert_eq!(control.selected_segment_index(), Some(1));
}

#[test]
fn test_enlarged_hit_area() {
    let mut control = setup(&["A", "B"], 100.0);
    control.configure(|cfg| cfg.enlarge_insets = insets(0.0, 8.0, 0.0, 8.0));
    assert_eq!(control.segment_at_point(point(-6.0, 10.0)), Some(0));
    assert_eq!(control.segment_at_point(point(-9.0, 10.0)), None);
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_draw_attaches_and_clears_dirty_flag() {
    let mut control = setup(&["A", "B"], 100.0);
    control.configure(|cfg| cfg.selected = Some(1));
    assert!(control.needs_display());
    assert!(!control.scene().is_attached(IndicatorKind::Stripe));

    control.draw();
    assert!(!control.needs_display());
    assert!(control.scene().is_attached(IndicatorKind::Stripe));
    assert_eq!(control.scene().frames_drawn(), 1);
    assert_eq!(control.selection_signal().get(), 1);
}

#[test]
fn test_animation_lands_on_target() {
    let mut control = setup(&["A", "B", "C"], 300.0);
    control.configure(|cfg| cfg.selection_style = SelectionStyle::FullWidthStripe);
    control.set_selected_segment_index(Some(0));
    control.set_selected_segment_index_animated(Some(2), true);

    let scene = control.scene_mut();
    assert_eq!(scene.presented_frame(IndicatorKind::Stripe).map(|f| f.x), Some(0.0));
    scene.tick(Duration::from_millis(150));
    assert_eq!(scene.presented_frame(IndicatorKind::Stripe).map(|f| f.x), Some(200.0));
}

#[test]
fn test_arrow_style_uses_arrow_node() {
    let mut control = setup(&["A", "B"], 100.0);
    control.set_selection_style(SelectionStyle::Arrow);
    control.set_selected_segment_index(Some(1));
    let node = control.scene().node(IndicatorKind::Arrow).cloned().unwrap();
    assert_eq!(node.frame.mid_x(), 75.0);
    assert!(node.mask.is_some());
    assert!(!control.scene().is_attached(IndicatorKind::Stripe));
}
