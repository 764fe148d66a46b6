//! Auto-advancing image carousel for raylib: paged swiping, cards that shrink
//! and fade with distance, and optional dot page indicators.

pub mod auto_advance;
pub mod carousel;
pub mod constants;
pub mod container;
pub mod error;
pub mod pager;
pub mod shape;
pub mod texture_loader;
pub mod timer;
pub mod transform;

pub use carousel::{CarouselConfig, CarouselSlider, PageFrame};
pub use container::PagedContainer;
pub use error::CarouselError;
