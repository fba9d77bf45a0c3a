//! Fixed settings for the viewer window and deck discovery.
use std::path::PathBuf;

pub const DECKS_DIR: &str = "Card Decks/Japanese";

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Root scanned recursively for deck files, relative to the working directory.
    pub decks_dir: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub card_wrap_width: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            decks_dir: PathBuf::from(DECKS_DIR),
            window_title: "Flashcards, Inc".to_string(),
            window_size: [900.0, 600.0],
            card_wrap_width: 680.0,
        }
    }
}
