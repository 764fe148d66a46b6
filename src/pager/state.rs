#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPhase {
    Idle,      // Resting on the settled page
    Pressed,   // Pointer down, not yet past the touch slop
    Dragging,  // Pointer is moving the pages
    Scrolling, // Tweening toward a target page
}
