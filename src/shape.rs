use raylib::prelude::*;

use crate::constants::DEFAULT_ITEM_RADIUS;

const ROUNDED_SEGMENTS: i32 = 12;

/// Outline used for cards and dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle,
    Rounded { radius: f32 },
    Circle,
}

impl Shape {
    pub fn default_item() -> Self {
        Shape::Rounded { radius: DEFAULT_ITEM_RADIUS }
    }

    pub fn default_dot() -> Self {
        Shape::Circle
    }

    /// Raylib expresses corner rounding relative to the shorter side.
    pub fn roundness(&self, rect: Rectangle) -> f32 {
        let short_side = rect.width.min(rect.height);
        if short_side <= 0.0 {
            return 0.0;
        }
        match *self {
            Shape::Rectangle => 0.0,
            Shape::Rounded { radius } => (radius * 2.0 / short_side).min(1.0),
            Shape::Circle => 1.0,
        }
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, rect: Rectangle, color: Color) {
        match *self {
            Shape::Rectangle => d.draw_rectangle_rec(rect, color),
            Shape::Circle if rect.width == rect.height => {
                let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
                d.draw_circle_v(center, rect.width * 0.5, color);
            }
            _ => d.draw_rectangle_rounded(rect, self.roundness(rect), ROUNDED_SEGMENTS, color),
        }
    }
}
