use raylib::prelude::*;

/// Pointer state sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Vector2,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

impl PointerInput {
    pub fn idle(position: Vector2) -> Self {
        Self { position, pressed: false, down: false, released: false }
    }

    pub fn press(position: Vector2) -> Self {
        Self { position, pressed: true, down: true, released: false }
    }

    pub fn hold(position: Vector2) -> Self {
        Self { position, pressed: false, down: true, released: false }
    }

    pub fn release(position: Vector2) -> Self {
        Self { position, pressed: false, down: false, released: true }
    }

    /// Left mouse button; raylib maps the primary touch point onto it.
    pub fn from_mouse(rl: &RaylibHandle) -> Self {
        Self {
            position: rl.get_mouse_position(),
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
        }
    }
}

pub(crate) fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}
