use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::debug;

use crate::container::PagedContainer;
use crate::timer::KeyedTimer;

/// Moves the container one page forward every `duration` while idle.
///
/// The cursor is the page the timer last navigated to. It can drift from the
/// container's settled page when the user swipes between two advances.
#[derive(Debug)]
pub struct AutoAdvance {
    cursor: usize,
    page_count: NonZeroUsize,
    timer: KeyedTimer<usize>,
}

impl AutoAdvance {
    pub fn new(page_count: NonZeroUsize, duration: Duration) -> Self {
        Self {
            cursor: 0,
            page_count,
            timer: KeyedTimer::new(duration),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn duration(&self) -> Duration {
        self.timer.delay()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn next_page(&self) -> usize {
        (self.cursor + 1) % self.page_count.get()
    }

    /// Runs one frame: fires a due advance, then reschedules if idle.
    ///
    /// The drag flag is only consulted when scheduling. A wait that started
    /// before the user grabbed the pager still fires.
    pub fn update<C: PagedContainer>(&mut self, dt: f32, container: &mut C) {
        // Fire first: request the scroll, then move the cursor
        if let Some(key) = self.timer.tick(Duration::from_secs_f32(dt.max(0.0))) {
            if container.is_dragged() {
                debug!(cursor = key, "advance fired during drag");
            }
            let next = self.next_page();
            let accepted = container.animate_to_page(next);
            debug!(from = key, to = next, accepted, "auto-advance");
            self.cursor = next;
        }

        // Scheduling boundary: only an idle container gets a new wait
        if !container.is_dragged() {
            self.timer.rekey(self.cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeContainer {
        pages: usize,
        settled: usize,
        dragged: bool,
        requests: Vec<usize>,
    }

    impl PagedContainer for FakeContainer {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn settled_page(&self) -> usize {
            self.settled
        }

        fn offset_fraction(&self) -> f32 {
            0.0
        }

        fn is_dragged(&self) -> bool {
            self.dragged
        }

        fn animate_to_page(&mut self, page: usize) -> bool {
            self.requests.push(page);
            self.settled = page;
            true
        }
    }

    fn count(pages: usize) -> NonZeroUsize {
        NonZeroUsize::new(pages).unwrap()
    }

    fn container(pages: usize) -> FakeContainer {
        FakeContainer {
            pages,
            ..Default::default()
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for pages in 2..7 {
            let mut c = container(pages);
            let mut auto = AutoAdvance::new(count(pages), Duration::from_secs(1));
            auto.update(0.0, &mut c);
            for _ in 0..pages {
                auto.update(1.0, &mut c);
            }
            assert_eq!(auto.cursor(), 0, "pages = {pages}");
            assert_eq!(c.requests.len(), pages);
        }
    }

    #[test]
    fn no_scheduling_while_dragged() {
        let mut c = container(3);
        c.dragged = true;
        let mut auto = AutoAdvance::new(count(3), Duration::from_secs(1));

        auto.update(0.0, &mut c);
        auto.update(5.0, &mut c);

        assert!(!auto.is_pending());
        assert!(c.requests.is_empty());
    }

    #[test]
    fn wait_started_before_drag_still_fires() {
        let mut c = container(3);
        let mut auto = AutoAdvance::new(count(3), Duration::from_secs(3));
        auto.update(0.0, &mut c);
        auto.update(1.0, &mut c);

        c.dragged = true;
        auto.update(2.0, &mut c);

        assert_eq!(c.requests, vec![1]);
        assert_eq!(auto.cursor(), 1);
        assert!(!auto.is_pending());

        c.dragged = false;
        auto.update(0.0, &mut c);
        assert!(auto.is_pending());
    }

    #[test]
    fn single_page_advances_once() {
        let mut c = container(1);
        let mut auto = AutoAdvance::new(count(1), Duration::from_secs(1));
        auto.update(0.0, &mut c);
        auto.update(1.0, &mut c);
        auto.update(1.0, &mut c);
        auto.update(1.0, &mut c);

        assert_eq!(c.requests, vec![0]);
        assert!(!auto.is_pending());
    }
}
