use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// Auto-advance wraps modulo the page count, so it must not be zero.
    #[error("a carousel needs at least one item")]
    EmptyCarousel,
}
