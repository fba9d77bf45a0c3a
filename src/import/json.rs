//! Reading deck files.
//! A deck file is a JSON array of card objects.

use crate::error::{Error, Result};
use crate::models::{Card, Deck};
use std::fs;
use std::path::Path;

/// Reads and parses the deck at `path`, naming it `display_name`.
/// Fails if the file is missing or unreadable, is not a JSON array of cards, or holds no cards.
pub fn load_deck(display_name: &str, path: &Path) -> Result<Deck> {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if !path.exists() {
        return Err(Error::DeckNotFound(display_name.to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        file: file.clone(),
        source,
    })?;

    let cards: Vec<Card> = serde_json::from_str(&contents).map_err(|source| Error::Parse {
        file: file.clone(),
        source,
    })?;

    if cards.is_empty() {
        return Err(Error::EmptyDeck(file));
    }

    log::info!("Deck '{}' loaded from '{}' ({} cards)", display_name, path.display(), cards.len());
    Ok(Deck {
        name: display_name.to_string(),
        cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("elements.json");
        fs::write(
            &path,
            r#"[
  {"radical": "木", "romaji": "ki", "english": "tree"},
  {"radical": "火", "romaji": "hi", "english": "fire"}
]"#,
        )
        .unwrap();

        let deck = load_deck("Elements", &path).unwrap();
        assert_eq!(deck.name, "Elements");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards[0].radical.as_deref(), Some("木"));
        assert_eq!(deck.cards[1].english.as_deref(), Some("fire"));
    }

    #[test]
    fn test_cards_with_missing_fields_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sparse.json");
        fs::write(&path, r#"[{}, {"romaji": "mizu"}]"#).unwrap();

        let deck = load_deck("Sparse", &path).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards[0], Card::default());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_deck("Gone", &dir.path().join("gone.json"));
        assert!(matches!(result, Err(Error::DeckNotFound(name)) if name == "Gone"));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = load_deck("Broken", &path);
        assert!(matches!(result, Err(Error::Parse { file, .. }) if file == "broken.json"));
    }

    #[test]
    fn test_load_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe]).unwrap();

        let result = load_deck("Binary", &path);
        assert!(matches!(result, Err(Error::Read { file, .. }) if file == "binary.json"));
    }

    #[test]
    fn test_load_object_instead_of_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, r#"{"radical": "木"}"#).unwrap();

        assert!(matches!(load_deck("Object", &path), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_load_empty_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "[]").unwrap();

        let err = load_deck("Empty", &path).unwrap_err();
        assert!(matches!(err, Error::EmptyDeck(_)));
        assert_eq!(err.to_string(), "Failed to load empty.json:\nDeck is empty");
    }
}
