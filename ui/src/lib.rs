//! Presentation pieces shared by the console views.

mod empty_state;
mod loading;
mod modal;
mod search;
mod stat_card;

pub use empty_state::EmptyState;
pub use loading::{LoadingCards, LoadingRows};
pub use modal::Modal;
pub use search::SearchInput;
pub use stat_card::StatCard;
