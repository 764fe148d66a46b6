use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use carousel::pager::PointerInput;
use carousel::{CarouselConfig, CarouselSlider, PagedContainer};
use raylib::prelude::*;

const BOUNDS: Rectangle = Rectangle { x: 0.0, y: 0.0, width: 400.0, height: 316.0 };

fn slider(items: usize, show_indicators: bool) -> (CarouselSlider, Rc<RefCell<Vec<usize>>>) {
    let taps = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&taps);
    let config = CarouselConfig::new(items)
        .unwrap()
        .with_duration(Duration::from_millis(3000))
        .with_indicators(show_indicators);
    let mut slider = CarouselSlider::new(config, move |page| sink.borrow_mut().push(page));
    slider.set_bounds(BOUNDS);
    (slider, taps)
}

fn idle() -> PointerInput {
    PointerInput::idle(Vector2::new(-1.0, -1.0))
}

fn tap(slider: &mut CarouselSlider, point: Vector2) {
    slider.update(0.0, &PointerInput::press(point));
    slider.update(0.0, &PointerInput::release(point));
}

#[test]
fn tapping_the_centered_card_reports_its_page() {
    let (mut slider, taps) = slider(3, false);
    tap(&mut slider, Vector2::new(200.0, 150.0));
    assert_eq!(*taps.borrow(), vec![0]);
}

#[test]
fn tapping_the_gutter_reports_nothing() {
    let (mut slider, taps) = slider(3, false);
    tap(&mut slider, Vector2::new(10.0, 150.0));
    assert!(taps.borrow().is_empty());
}

#[test]
fn neighbour_peeks_in_at_reduced_scale() {
    let (slider, _) = slider(3, false);
    let items = slider.visible_items();
    let pages: Vec<_> = items.iter().map(|item| item.page()).collect();
    assert_eq!(pages, vec![0, 1]);
    assert_eq!(items[0].transform().scale_y, 1.0);
    assert!((items[1].transform().alpha - 0.7).abs() < 1e-6);
}

#[test]
fn indicators_are_off_by_default() {
    let (slider, _) = slider(3, false);
    assert!(slider.indicator_row().is_none());
    assert_eq!(slider.pager_bounds().height, 300.0);
}

#[test]
fn enabled_indicators_get_a_row_below_the_spacer() {
    let (slider, _) = slider(3, true);
    let row = slider.indicator_row().unwrap();
    assert_eq!(slider.pager_bounds().height, 290.0);
    assert_eq!(row.y, 306.0);
    assert_eq!(row.height, 10.0);
    assert_eq!(slider.indicators().dot_count(), 3);
}

#[test]
fn idle_slider_advances_and_dots_follow() {
    let (mut slider, _) = slider(3, true);
    slider.update(0.0, &idle());
    slider.update(3.0, &idle());
    assert_eq!(slider.auto_advance().cursor(), 1);

    for _ in 0..60 {
        slider.update(1.0 / 60.0, &idle());
    }
    assert_eq!(slider.pager().settled_page(), 1);
    assert_eq!(slider.indicators().sizes(), vec![6.0, 10.0, 6.0]);
}

#[test]
fn drag_lets_pending_wait_fire_but_blocks_rescheduling() {
    let (mut slider, _) = slider(3, false);
    slider.update(0.0, &idle());
    assert!(slider.auto_advance().is_pending());

    let grab = Vector2::new(250.0, 150.0);
    slider.update(0.0, &PointerInput::press(Vector2::new(300.0, 150.0)));
    slider.update(0.0, &PointerInput::hold(grab));
    assert!(slider.pager().is_dragged());

    // The wait launched before the drag still runs out
    slider.update(3.0, &PointerInput::hold(grab));
    assert_eq!(slider.auto_advance().cursor(), 1);
    assert!(slider.pager().is_dragged());
    assert_eq!(slider.pager().settled_page(), 0);
    assert!(!slider.auto_advance().is_pending());

    slider.update(10.0, &PointerInput::hold(grab));
    assert_eq!(slider.auto_advance().cursor(), 1);

    slider.update(0.0, &PointerInput::release(grab));
    assert!(!slider.pager().is_dragged());
    assert!(slider.auto_advance().is_pending());
}

fn settle(slider: &mut CarouselSlider) {
    for _ in 0..60 {
        slider.update(1.0 / 60.0, &idle());
    }
}

#[test]
fn swipe_after_advance_under_resting_finger_is_a_drag() {
    let (mut slider, taps) = slider(3, false);
    slider.update(0.0, &idle());
    slider.update(2.9, &idle());

    let finger = Vector2::new(300.0, 150.0);
    slider.update(0.0, &PointerInput::press(finger));
    slider.update(0.2, &PointerInput::hold(finger));
    assert_eq!(slider.auto_advance().cursor(), 1);
    assert!(!slider.pager().is_dragged());

    let swiped = Vector2::new(150.0, 150.0);
    slider.update(0.01, &PointerInput::hold(swiped));
    assert!(slider.pager().is_dragged());

    slider.update(0.01, &PointerInput::release(swiped));
    assert!(taps.borrow().is_empty());

    settle(&mut slider);
    assert_eq!(slider.pager().settled_page(), 1);
}

#[test]
fn still_finger_does_not_revert_advance() {
    let (mut slider, taps) = slider(3, false);
    slider.update(0.0, &idle());
    slider.update(2.9, &idle());

    let finger = Vector2::new(200.0, 150.0);
    slider.update(0.0, &PointerInput::press(finger));
    slider.update(0.2, &PointerInput::hold(finger));
    for _ in 0..40 {
        slider.update(1.0 / 60.0, &PointerInput::hold(finger));
    }
    slider.update(0.0, &PointerInput::release(finger));

    assert!(taps.borrow().is_empty());
    assert_eq!(slider.pager().settled_page(), 1);
    assert_eq!(slider.auto_advance().cursor(), 1);
}

#[test]
fn tap_on_moving_card_catches_it_without_reporting() {
    let (mut slider, taps) = slider(3, false);
    slider.update(0.0, &idle());
    slider.update(3.0, &idle());
    slider.update(0.2, &idle());
    assert!(slider.pager().offset_fraction() > 0.5);

    tap(&mut slider, Vector2::new(200.0, 150.0));
    assert!(taps.borrow().is_empty());

    settle(&mut slider);
    assert_eq!(slider.pager().settled_page(), 1);
}
