/// A horizontally paged layout owned outside the carousel.
///
/// The carousel only reads paging state and asks for programmatic scrolls;
/// user gestures mutate the container on their own.
pub trait PagedContainer {
    fn page_count(&self) -> usize;

    /// Page the container last came to rest on, in `[0, page_count)`.
    fn settled_page(&self) -> usize;

    /// Progress of an in-flight scroll relative to the settled page.
    fn offset_fraction(&self) -> f32;

    fn is_dragged(&self) -> bool;

    /// Starts a scroll animation toward `page`. Returns false when the
    /// request was refused.
    fn animate_to_page(&mut self, page: usize) -> bool;
}
