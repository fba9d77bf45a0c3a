//! Card is one flashcard: a prompt glyph on the front, romanization and translation on the back.
//! Every field is optional, missing ones render as a placeholder.
use serde::Deserialize;

/// Text shown when a face has nothing to display.
pub const PLACEHOLDER: &str = "?";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub radical: Option<String>,
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
}

impl Card {
    /// Trimmed radical, or the placeholder.
    pub fn front_text(&self) -> String {
        match self.radical.as_deref().map(str::trim) {
            Some(radical) if !radical.is_empty() => radical.to_string(),
            _ => PLACEHOLDER.to_string(),
        }
    }

    /// Non-empty trimmed romaji and english, one per line, romaji first.
    pub fn back_text(&self) -> String {
        let parts: Vec<&str> = [self.romaji.as_deref(), self.english.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            parts.join("\n")
        }
    }

    pub fn text_for(&self, showing_front: bool) -> String {
        if showing_front {
            self.front_text()
        } else {
            self.back_text()
        }
    }
}
