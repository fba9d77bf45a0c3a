pub mod card;
pub mod deck;
pub mod deck_catalog;
pub mod viewer_state;

pub use card::Card;
pub use deck::Deck;
pub use deck_catalog::DeckCatalog;
pub use viewer_state::ViewerState;
