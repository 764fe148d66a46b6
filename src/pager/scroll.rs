use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::container::PagedContainer;
use crate::pager::input::{PointerInput, contains};
use crate::pager::state::PagerPhase;

#[derive(Clone, Copy)]
struct Press {
    origin: Vector2,
    /// Position the drag measures its travel from.
    start_position: f32,
    dragging: bool,
    /// Cleared when the pages moved under the finger, by a caught scroll or
    /// one started during the press. Only a still press can end as a tap.
    still: bool,
}

struct ScrollAnimation {
    tween: ease::Tween,
    elapsed: f32,
    target: usize,
}

/// Horizontal pager driven by pointer drags and programmatic scrolls.
///
/// Position is measured in pages: page `i` is centered when `position == i`.
/// The pointer gesture and the scroll animation are tracked apart; the phase
/// is derived from both.
pub struct Pager {
    page_count: usize,
    settled_page: usize,
    position: f32,
    page_stride: f32,
    press: Option<Press>,
    scroll: Option<ScrollAnimation>,
}

impl Pager {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            settled_page: 0,
            position: 0.0,
            page_stride: 0.0,
            press: None,
            scroll: None,
        }
    }

    pub fn phase(&self) -> PagerPhase {
        match (&self.press, &self.scroll) {
            (Some(press), _) if press.dragging => PagerPhase::Dragging,
            (Some(_), _) => PagerPhase::Pressed,
            (None, Some(_)) => PagerPhase::Scrolling,
            (None, None) => PagerPhase::Idle,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Pixels between the origins of two neighbouring pages.
    pub fn set_page_stride(&mut self, stride: f32) {
        self.page_stride = stride.max(0.0);
    }

    fn last_page(&self) -> f32 {
        self.page_count.saturating_sub(1) as f32
    }

    /// Feeds one frame of pointer input. Returns the pointer position when a
    /// press inside `bounds` ended as a tap: no drag, and the pages stood
    /// still for the whole press.
    pub fn handle_pointer(&mut self, input: &PointerInput, bounds: Rectangle) -> Option<Vector2> {
        // 1. A new press catches the pager, stopping a scroll where it is
        if input.pressed && contains(bounds, input.position) {
            let caught_scroll = self.scroll.take().is_some();
            self.press = Some(Press {
                origin: input.position,
                start_position: self.position,
                dragging: false,
                still: !caught_scroll,
            });
        }

        let mut press = self.press?;
        let dx = input.position.x - press.origin.x;

        if input.down {
            // 2. Past the slop the press turns into a drag and takes over from
            // any scroll started meanwhile
            if !press.dragging && dx.abs() > TOUCH_SLOP {
                press.dragging = true;
                press.start_position = self.position;
                self.scroll = None;
                debug!(page = self.settled_page, "drag started");
            }

            // 3. Follow the finger, minus the slop it took to start dragging
            if press.dragging && self.page_stride > 0.0 {
                let travel = dx - TOUCH_SLOP * dx.signum();
                self.position = (press.start_position - travel / self.page_stride).clamp(0.0, self.last_page());
            }
            self.press = Some(press);
        }

        if input.released || !input.down {
            self.press = None;

            // 4. A drag snaps to a page and never counts as a tap
            if press.dragging {
                let target = self.snap_target(press.start_position);
                debug!(target, position = self.position, "drag released");
                self.scroll_to(target);
                return None;
            }

            // 5. Pages moved under a still finger: let a running scroll
            // finish, or snap a caught one to the nearest page
            if !press.still {
                if self.scroll.is_none() {
                    self.scroll_to(self.position.round() as usize);
                }
                return None;
            }

            return Some(input.position);
        }

        None
    }

    fn snap_target(&self, start_position: f32) -> usize {
        let travelled = self.position - start_position;
        let target = if travelled >= SNAP_THRESHOLD {
            self.position.ceil()
        } else if travelled <= -SNAP_THRESHOLD {
            self.position.floor()
        } else {
            self.position.round()
        };
        target.clamp(0.0, self.last_page()) as usize
    }

    fn scroll_to(&mut self, page: usize) {
        let target = page.min(self.page_count.saturating_sub(1));

        // Already there: settle without animating
        if (self.position - target as f32).abs() < f32::EPSILON {
            self.position = target as f32;
            self.settled_page = target;
            self.scroll = None;
            return;
        }

        // The finger stays down; only the tap is lost
        if let Some(press) = self.press.as_mut() {
            press.still = false;
        }
        self.scroll = Some(ScrollAnimation {
            tween: ease::Tween::new(ease::cubic_out, self.position, target as f32, SCROLL_ANIMATION_DURATION),
            elapsed: 0.0,
            target,
        });
    }

    /// Advances the scroll animation. Settles on the target once it completes.
    pub fn update(&mut self, dt: f32) {
        let Some(scroll) = self.scroll.as_mut() else {
            return;
        };
        scroll.elapsed += dt;
        self.position = scroll.tween.apply(dt);

        if scroll.elapsed >= SCROLL_ANIMATION_DURATION {
            let target = scroll.target;
            self.position = target as f32;
            self.settled_page = target;
            self.scroll = None;
        }
    }
}

impl PagedContainer for Pager {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn settled_page(&self) -> usize {
        self.settled_page
    }

    fn offset_fraction(&self) -> f32 {
        self.position - self.settled_page as f32
    }

    fn is_dragged(&self) -> bool {
        self.phase() == PagerPhase::Dragging
    }

    fn animate_to_page(&mut self, page: usize) -> bool {
        if self.is_dragged() {
            debug!(page, "scroll request refused while dragging");
            return false;
        }
        self.scroll_to(page);
        true
    }
}
