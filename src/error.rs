use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No .json files found in {} or its subfolders", .0.display())]
    CatalogEmpty(PathBuf),
    #[error("Could not find file for {0}")]
    DeckNotFound(String),
    #[error("Failed to load {file}:\n{source}")]
    Read {
        file: String,
        source: std::io::Error,
    },
    #[error("Failed to load {file}:\n{source}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
    #[error("Failed to load {0}:\nDeck is empty")]
    EmptyDeck(String),
}

impl Error {
    /// Fatal errors end the process, everything else leaves the selection screen up.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CatalogEmpty(_))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::CatalogEmpty(_) | Self::DeckNotFound(_) => "Error",
            _ => "Load Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_catalog_is_fatal() {
        assert!(Error::CatalogEmpty(PathBuf::from("Card Decks/Japanese")).is_fatal());
        assert!(!Error::DeckNotFound("Kana".to_string()).is_fatal());
        assert!(!Error::EmptyDeck("kana.json".to_string()).is_fatal());
    }

    #[test]
    fn test_messages() {
        let err = Error::CatalogEmpty(PathBuf::from("decks"));
        assert_eq!(err.to_string(), "No .json files found in decks or its subfolders");

        let err = Error::EmptyDeck("kana.json".to_string());
        assert_eq!(err.to_string(), "Failed to load kana.json:\nDeck is empty");
        assert_eq!(err.title(), "Load Error");
    }
}
