//! Deck discovery
//!
//! Walks the decks directory once at startup and indexes every `.json` file
//! under a display name derived from its file stem.

use crate::error::{Error, Result};
use crate::models::DeckCatalog;
use std::path::Path;
use walkdir::WalkDir;

/// Turns a file stem into a display name: `-` and `_` become spaces, then
/// each cased letter is upper-cased if it follows an uncased character and
/// lower-cased otherwise. Kana, kanji, digits and spaces are all uncased.
pub fn display_name(stem: &str) -> String {
    let mut name = String::with_capacity(stem.len());
    let mut prev_is_cased = false;

    for ch in stem.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        let is_cased = ch.is_lowercase() || ch.is_uppercase();
        if !is_cased {
            name.push(ch);
        } else if prev_is_cased {
            name.extend(ch.to_lowercase());
        } else {
            name.extend(ch.to_uppercase());
        }
        prev_is_cased = is_cased;
    }

    name
}

fn is_deck_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Builds the catalog from every deck file below `root`.
///
/// A missing root counts as empty. Returns `Error::CatalogEmpty` when nothing is found.
pub fn build_catalog(root: &Path) -> Result<DeckCatalog> {
    let mut catalog = DeckCatalog::default();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                if err.depth() > 0 {
                    log::warn!("Skipping unreadable entry: {err}");
                }
                None
            }
        })
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_deck_file(path) {
            continue;
        }

        let Some(stem) = path.file_stem().map(|stem| stem.to_string_lossy()) else {
            continue;
        };

        let name = display_name(&stem);
        if let Some(previous) = catalog.insert(name.clone(), path.to_path_buf()) {
            log::warn!(
                "Deck '{}' at '{}' shadows '{}'",
                name,
                path.display(),
                previous.display()
            );
        }
    }

    if catalog.is_empty() {
        return Err(Error::CatalogEmpty(root.to_path_buf()));
    }

    log::info!("Found {} decks in '{}'", catalog.len(), root.display());
    Ok(catalog)
}
