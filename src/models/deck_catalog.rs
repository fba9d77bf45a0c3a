//! Index of every deck file found at startup, keyed by display name
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default)]
pub struct DeckCatalog {
    entries: BTreeMap<String, PathBuf>,
}

impl DeckCatalog {
    /// Adds an entry, returning the path it replaced if the name was taken.
    pub fn insert(&mut self, display_name: String, path: PathBuf) -> Option<PathBuf> {
        self.entries.insert(display_name, path)
    }

    /// Display names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn first_name(&self) -> Option<&str> {
        self.names().next()
    }

    pub fn path_for(&self, display_name: &str) -> Option<&Path> {
        self.entries.get(display_name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sorted() {
        let mut catalog = DeckCatalog::default();
        catalog.insert("Kanji N4".to_string(), PathBuf::from("b.json"));
        catalog.insert("Bonus Kanji".to_string(), PathBuf::from("a.json"));
        catalog.insert("Hiragana".to_string(), PathBuf::from("c.json"));

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Bonus Kanji", "Hiragana", "Kanji N4"]);
        assert_eq!(catalog.first_name(), Some("Bonus Kanji"));
    }

    #[test]
    fn test_insert_replaces_duplicate_name() {
        let mut catalog = DeckCatalog::default();
        assert_eq!(catalog.insert("Kana".to_string(), PathBuf::from("one/kana.json")), None);

        let replaced = catalog.insert("Kana".to_string(), PathBuf::from("two/kana.json"));
        assert_eq!(replaced, Some(PathBuf::from("one/kana.json")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.path_for("Kana"), Some(Path::new("two/kana.json")));
    }

    #[test]
    fn test_unknown_name() {
        let catalog = DeckCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.path_for("Missing"), None);
        assert_eq!(catalog.first_name(), None);
    }
}
