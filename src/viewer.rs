//! Deck viewer controller.
//! Owns the catalog, the loaded deck and the viewer state; the UI only forwards commands here.

use crate::error::{Error, Result};
use crate::import::json::load_deck;
use crate::models::{Deck, DeckCatalog, ViewerState};
use crate::sizing::size_for;

/// What the card area should show right now.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCard {
    pub text: String,
    pub font_size: f32,
    pub showing_front: bool,
}

pub struct DeckViewer {
    catalog: DeckCatalog,
    deck: Option<Deck>,
    state: ViewerState,
}

impl DeckViewer {
    pub fn new(catalog: DeckCatalog) -> Self {
        Self {
            catalog,
            deck: None,
            state: ViewerState::default(),
        }
    }

    pub fn catalog(&self) -> &DeckCatalog {
        &self.catalog
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Loads the deck listed under `display_name` and starts at its first card, front up.
    /// On failure the current deck and state are left as they were.
    pub fn load(&mut self, display_name: &str) -> Result<()> {
        let path = self
            .catalog
            .path_for(display_name)
            .ok_or_else(|| Error::DeckNotFound(display_name.to_string()))?;

        let deck = load_deck(display_name, path)?;
        self.deck = Some(deck);
        self.state = ViewerState::default();
        Ok(())
    }

    pub fn flip(&mut self) {
        if self.deck.is_some() {
            self.state.flip();
        }
    }

    pub fn next(&mut self) {
        if let Some(deck) = &self.deck {
            self.state.next(deck.len());
        }
    }

    pub fn previous(&mut self) {
        if self.deck.is_some() {
            self.state.previous();
        }
    }

    /// `None` until a deck has been loaded.
    pub fn render(&self) -> Option<RenderedCard> {
        let card = self.deck.as_ref()?.get(self.state.current_index)?;
        let showing_front = self.state.showing_front;
        let text = card.text_for(showing_front);
        let font_size = size_for(&text, showing_front);

        Some(RenderedCard {
            text,
            font_size,
            showing_front,
        })
    }

    pub fn position_label(&self) -> Option<String> {
        self.deck
            .as_ref()
            .map(|deck| self.state.position_label(deck.len()))
    }
}
