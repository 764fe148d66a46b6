use raylib::prelude::*;
use tracing::debug;

use crate::auto_advance::AutoAdvance;
use crate::carousel::config::CarouselConfig;
use crate::carousel::indicators::DotIndicators;
use crate::carousel::item::{CarouselItem, PageFrame};
use crate::constants::*;
use crate::container::PagedContainer;
use crate::pager::{Pager, PointerInput};
use crate::transform::PageSnapshot;

/// Auto-advancing paged carousel.
///
/// Lays out a column: the pager, a fixed spacer, then (when enabled) the dot
/// row. Call [`update`](Self::update) once per frame before drawing.
pub struct CarouselSlider {
    config: CarouselConfig,
    pager: Pager,
    auto_advance: AutoAdvance,
    indicators: DotIndicators,
    on_item_click: Box<dyn FnMut(usize)>,
    bounds: Rectangle,
}

impl CarouselSlider {
    pub fn new(config: CarouselConfig, on_item_click: impl FnMut(usize) + 'static) -> Self {
        let pager = Pager::new(config.item_count());
        let auto_advance = AutoAdvance::new(config.page_count(), config.duration);
        let indicators = DotIndicators::new(
            config.item_count(),
            config.dot_shape,
            config.dot_color,
            config.dot_size,
            pager.settled_page(),
        );
        Self {
            config,
            pager,
            auto_advance,
            indicators,
            on_item_click: Box::new(on_item_click),
            bounds: Rectangle::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn auto_advance(&self) -> &AutoAdvance {
        &self.auto_advance
    }

    pub fn indicators(&self) -> &DotIndicators {
        &self.indicators
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
        self.pager.set_page_stride(self.page_width() + self.config.page_spacing);
    }

    pub fn pager_bounds(&self) -> Rectangle {
        let mut reserved = SPACER_HEIGHT;
        if self.config.show_indicators {
            reserved += self.config.dot_size;
        }
        Rectangle::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            (self.bounds.height - reserved).max(0.0),
        )
    }

    pub fn indicator_row(&self) -> Option<Rectangle> {
        if !self.config.show_indicators {
            return None;
        }
        let pager = self.pager_bounds();
        Some(Rectangle::new(
            self.bounds.x,
            pager.y + pager.height + SPACER_HEIGHT,
            self.bounds.width,
            self.config.dot_size,
        ))
    }

    fn page_width(&self) -> f32 {
        (self.bounds.width - 2.0 * self.config.content_padding).max(0.0)
    }

    fn slot(&self, page: usize) -> Rectangle {
        let pager = self.pager_bounds();
        let stride = self.page_width() + self.config.page_spacing;
        let x = pager.x + self.config.content_padding + (page as f32 - self.pager.position()) * stride;
        Rectangle::new(x, pager.y, self.page_width(), pager.height)
    }

    /// Cards that overlap the pager this frame, all built from one snapshot.
    pub fn visible_items(&self) -> Vec<CarouselItem> {
        let pager = self.pager_bounds();
        let snapshot = PageSnapshot::of(&self.pager);
        (0..self.config.item_count())
            .filter_map(|page| {
                let slot = self.slot(page);
                let visible = slot.x + slot.width > pager.x && slot.x < pager.x + pager.width;
                visible.then(|| CarouselItem::new(page, self.config.item_shape, &snapshot, slot))
            })
            .collect()
    }

    pub fn update(&mut self, dt: f32, pointer: &PointerInput) {
        // 1. Pointer first, so a tap hits the cards where they were drawn
        if let Some(point) = self.pager.handle_pointer(pointer, self.pager_bounds()) {
            let hit = self.visible_items().into_iter().find(|item| item.contains(point));
            if let Some(item) = hit {
                debug!(page = item.page(), "item tapped");
                (self.on_item_click)(item.page());
            }
        }

        // 2. Move the pages, then let the timer see this frame's drag state
        self.pager.update(dt);
        self.auto_advance.update(dt, &mut self.pager);

        // 3. Dots follow wherever the pager settled
        self.indicators.update(dt, self.pager.settled_page());
    }

    /// Draws every visible card, calling `content` for each page's inner area.
    pub fn draw<D, F>(&self, d: &mut D, mut content: F)
    where
        D: RaylibDraw,
        F: FnMut(&mut D, PageFrame),
    {
        for item in self.visible_items() {
            item.draw(d, self.config.card_color, &mut content);
        }
        if let Some(row) = self.indicator_row() {
            self.indicators.draw(d, row);
        }
    }
}
