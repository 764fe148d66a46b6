use raylib::prelude::*;

use crate::constants::*;
use crate::container::PagedContainer;

/// Paging position read once per frame, so every card in that frame sees the
/// same values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSnapshot {
    pub settled_page: usize,
    pub offset_fraction: f32,
}

impl PageSnapshot {
    pub fn new(settled_page: usize, offset_fraction: f32) -> Self {
        Self { settled_page, offset_fraction }
    }

    pub fn of<C: PagedContainer>(container: &C) -> Self {
        Self::new(container.settled_page(), container.offset_fraction())
    }

    /// Scroll position in page units.
    pub fn position(&self) -> f32 {
        self.settled_page as f32 + self.offset_fraction
    }

    /// Distance in pages between the viewport and `page`.
    pub fn page_offset(&self, page: usize) -> f32 {
        ((self.settled_page as f32 - page as f32) + self.offset_fraction).abs()
    }
}

/// Scale in `[MIN_CARD_SCALE, MAX_CARD_SCALE]`, shrinking linearly over one page.
pub fn card_scale(snapshot: &PageSnapshot, page: usize) -> f32 {
    let offset = snapshot.page_offset(page).clamp(0.0, 1.0);
    raylib::core::math::lerp(MIN_CARD_SCALE, MAX_CARD_SCALE, 1.0 - offset)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub alpha: f32,
    pub scale_y: f32,
}

impl CardTransform {
    pub fn for_page(snapshot: &PageSnapshot, page: usize) -> Self {
        let scale = card_scale(snapshot, page);
        Self { alpha: scale, scale_y: scale }
    }

    /// Scales `rect` vertically around its center.
    pub fn apply(&self, rect: Rectangle) -> Rectangle {
        let height = rect.height * self.scale_y;
        Rectangle::new(rect.x, rect.y + (rect.height - height) * 0.5, rect.width, height)
    }
}
