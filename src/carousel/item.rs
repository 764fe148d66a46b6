use raylib::prelude::*;

use crate::pager::contains;
use crate::shape::Shape;
use crate::transform::{CardTransform, PageSnapshot};

/// What the content callback gets for one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub page: usize,
    /// Card area after the vertical scale.
    pub bounds: Rectangle,
    /// Opacity to draw the page content with.
    pub alpha: f32,
}

/// One card of the carousel, transformed by its distance to the viewport.
#[derive(Debug, Clone, Copy)]
pub struct CarouselItem {
    page: usize,
    shape: Shape,
    transform: CardTransform,
    bounds: Rectangle,
}

impl CarouselItem {
    /// `slot` is the untransformed card area the pager laid out for `page`.
    pub fn new(page: usize, shape: Shape, snapshot: &PageSnapshot, slot: Rectangle) -> Self {
        let transform = CardTransform::for_page(snapshot, page);
        Self {
            page,
            shape,
            transform,
            bounds: transform.apply(slot),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn transform(&self) -> CardTransform {
        self.transform
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn contains(&self, point: Vector2) -> bool {
        contains(self.bounds, point)
    }

    pub fn frame(&self) -> PageFrame {
        PageFrame {
            page: self.page,
            bounds: self.bounds,
            alpha: self.transform.alpha,
        }
    }

    pub fn draw<D, F>(&self, d: &mut D, card_color: Color, content: &mut F)
    where
        D: RaylibDraw,
        F: FnMut(&mut D, PageFrame),
    {
        self.shape.draw(d, self.bounds, card_color.fade(self.transform.alpha));
        content(d, self.frame());
    }
}
