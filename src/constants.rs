use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 1280;           // Default demo window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default demo window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000); // Time between auto-advances
pub const DEFAULT_DOT_SIZE: f32 = 10.0;       // Diameter of the active dot
pub const DEFAULT_PAGE_SPACING: f32 = 16.0;   // Gap between neighbouring cards
pub const DEFAULT_ITEM_RADIUS: f32 = 16.0;    // Corner radius of the default card shape
pub const CONTENT_PADDING: f32 = 32.0;        // Horizontal inset of the pager content
pub const SPACER_HEIGHT: f32 = 16.0;          // Gap between the pager and the dot row

pub const MIN_CARD_SCALE: f32 = 0.7;          // Scale/alpha of a card one page away or more
pub const MAX_CARD_SCALE: f32 = 1.0;          // Scale/alpha of the settled card

pub const DOT_SPACING: f32 = 4.0;             // Gap between dots
pub const INACTIVE_DOT_RATIO: f32 = 0.6;      // Inactive dot size relative to the active one
pub const DOT_ANIMATION_DURATION: f32 = 0.4;  // Dot resize animation (seconds)

pub const SCROLL_ANIMATION_DURATION: f32 = 0.5; // Programmatic page scroll (seconds)
pub const TOUCH_SLOP: f32 = 8.0;              // Pointer travel before a press becomes a drag (pixels)
pub const SNAP_THRESHOLD: f32 = 0.25;         // Page fraction a drag must cover to flip the page
