mod config;
mod indicators;
mod item;
mod slider;

pub use config::CarouselConfig;
pub use indicators::{DotIndicators, dot_target_size};
pub use item::{CarouselItem, PageFrame};
pub use slider::CarouselSlider;
