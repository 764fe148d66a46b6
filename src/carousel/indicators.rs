use raylib::prelude::*;

use crate::constants::*;
use crate::shape::Shape;

/// Size a dot is heading toward: full when it marks the settled page.
pub fn dot_target_size(index: usize, settled_page: usize, dot_size: f32) -> f32 {
    if index == settled_page {
        dot_size
    } else {
        dot_size * INACTIVE_DOT_RATIO
    }
}

struct DotAnimation {
    size: f32,
    target: f32,
    tween: Option<ease::Tween>,
    elapsed: f32,
}

impl DotAnimation {
    fn new(size: f32) -> Self {
        Self { size, target: size, tween: None, elapsed: 0.0 }
    }

    fn retarget(&mut self, target: f32) {
        if target == self.target {
            return;
        }
        self.target = target;
        self.elapsed = 0.0;
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.size, target, DOT_ANIMATION_DURATION));
    }

    fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.elapsed += dt;
        self.size = tween.apply(dt);
        if self.elapsed >= DOT_ANIMATION_DURATION {
            self.size = self.target;
            self.tween = None;
        }
    }
}

/// Row of page dots whose sizes follow the settled page.
pub struct DotIndicators {
    shape: Shape,
    color: Color,
    dot_size: f32,
    dots: Vec<DotAnimation>,
}

impl DotIndicators {
    pub fn new(dot_count: usize, shape: Shape, color: Color, dot_size: f32, settled_page: usize) -> Self {
        let dots = (0..dot_count)
            .map(|i| DotAnimation::new(dot_target_size(i, settled_page, dot_size)))
            .collect();
        Self { shape, color, dot_size, dots }
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn sizes(&self) -> Vec<f32> {
        self.dots.iter().map(|dot| dot.size).collect()
    }

    pub fn update(&mut self, dt: f32, settled_page: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.retarget(dot_target_size(i, settled_page, self.dot_size));
            dot.update(dt);
        }
    }

    /// Width of the row when every dot sits at its current size.
    pub fn row_width(&self) -> f32 {
        let sizes: f32 = self.dots.iter().map(|dot| dot.size).sum();
        sizes + DOT_SPACING * self.dots.len().saturating_sub(1) as f32
    }

    /// Rectangles of the dots, centered horizontally in `row` and vertically
    /// within a line as tall as a full-size dot.
    pub fn layout(&self, row: Rectangle) -> Vec<Rectangle> {
        let mut x = row.x + (row.width - self.row_width()) * 0.5;
        let center_y = row.y + self.dot_size * 0.5;
        self.dots
            .iter()
            .map(|dot| {
                let rect = Rectangle::new(x, center_y - dot.size * 0.5, dot.size, dot.size);
                x += dot.size + DOT_SPACING;
                rect
            })
            .collect()
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, row: Rectangle) {
        for rect in self.layout(row) {
            self.shape.draw(d, rect, self.color);
        }
    }
}
