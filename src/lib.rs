pub mod catalog;
pub mod config;
pub mod error;
pub mod fonts;
pub mod import;
pub mod models;
pub mod sizing;
pub mod viewer;

pub use config::ViewerConfig;
pub use error::{Error, Result};
pub use models::{Card, Deck, DeckCatalog, ViewerState};
pub use viewer::{DeckViewer, RenderedCard};
