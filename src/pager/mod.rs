mod input;
mod scroll;
mod state;

pub use input::PointerInput;
pub(crate) use input::contains;
pub use scroll::Pager;
pub use state::PagerPhase;
