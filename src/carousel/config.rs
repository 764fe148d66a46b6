use std::num::NonZeroUsize;
use std::time::Duration;

use raylib::prelude::*;

use crate::constants::*;
use crate::error::CarouselError;
use crate::shape::Shape;

const DEFAULT_CARD_COLOR: Color = Color { r: 44, g: 44, b: 52, a: 255 };
const DEFAULT_DOT_COLOR: Color = Color { r: 245, g: 245, b: 245, a: 255 };

/// Appearance and timing of a [`CarouselSlider`](crate::carousel::CarouselSlider).
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    item_count: NonZeroUsize,
    pub item_shape: Shape,
    pub card_color: Color,
    pub duration: Duration,
    pub dot_shape: Shape,
    pub dot_color: Color,
    pub dot_size: f32,
    pub page_spacing: f32,
    pub content_padding: f32,
    /// Dot indicators are laid out and drawn only when set.
    pub show_indicators: bool,
}

impl CarouselConfig {
    pub fn new(item_count: usize) -> Result<Self, CarouselError> {
        let item_count = NonZeroUsize::new(item_count).ok_or(CarouselError::EmptyCarousel)?;
        Ok(Self {
            item_count,
            item_shape: Shape::default_item(),
            card_color: DEFAULT_CARD_COLOR,
            duration: DEFAULT_DURATION,
            dot_shape: Shape::default_dot(),
            dot_color: DEFAULT_DOT_COLOR,
            dot_size: DEFAULT_DOT_SIZE,
            page_spacing: DEFAULT_PAGE_SPACING,
            content_padding: CONTENT_PADDING,
            show_indicators: false,
        })
    }

    /// Fixed at construction so the auto-advance modulo never sees zero.
    pub fn item_count(&self) -> usize {
        self.item_count.get()
    }

    pub fn page_count(&self) -> NonZeroUsize {
        self.item_count
    }

    pub fn with_item_shape(mut self, shape: Shape) -> Self {
        self.item_shape = shape;
        self
    }

    pub fn with_card_color(mut self, color: Color) -> Self {
        self.card_color = color;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_dots(mut self, shape: Shape, color: Color, size: f32) -> Self {
        self.dot_shape = shape;
        self.dot_color = color;
        self.dot_size = size;
        self
    }

    pub fn with_page_spacing(mut self, spacing: f32) -> Self {
        self.page_spacing = spacing;
        self
    }

    pub fn with_indicators(mut self, show: bool) -> Self {
        self.show_indicators = show;
        self
    }
}
