use std::{
    fs,
    path::Path,
};

use super::{
    models::{
        CardId,
        VocabItem,
    },
    FlashyError,
};

pub const DEMO_SOURCE_LABEL: &str = "Urdu";
pub const DEMO_TARGET_LABEL: &str = "English";

const DEMO_CARDS: &[(&str, &str)] =
    &[("سلام", "Hello"), ("شکریہ", "Thank you"), ("پانی", "Water")];

/// A parsed vocabulary file: the two header labels from the CSV plus one
/// item per data row. Ids are assigned by row order on every read.
#[derive(Debug, Clone)]
pub struct Deck {
    pub source_label: String,
    pub target_label: String,
    pub items: Vec<VocabItem>,
}

impl Deck {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Built-in three-card fallback used when no vocabulary file can be found.
pub fn demo_deck() -> Deck {
    let items = DEMO_CARDS
        .iter()
        .enumerate()
        .map(|(i, (source, target))| VocabItem {
            id: CardId(i as u32),
            source: source.to_string(),
            target: target.to_string(),
        })
        .collect();

    Deck {
        source_label: DEMO_SOURCE_LABEL.to_string(),
        target_label: DEMO_TARGET_LABEL.to_string(),
        items,
    }
}

pub fn read_deck(path: &Path) -> Result<Deck, FlashyError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(FlashyError::MalformedDeck(path.display().to_string()));
    }

    let source_label = headers.get(0).unwrap_or("").to_string();
    let target_label = headers.get(1).unwrap_or("").to_string();

    let mut items = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        items.push(VocabItem {
            id: CardId(i as u32),
            source: record.get(0).unwrap_or("").to_string(),
            target: record.get(1).unwrap_or("").to_string(),
        });
    }

    Ok(Deck { source_label, target_label, items })
}

/// Full overwrite of `path` with the given rows, keeping the original
/// header labels so the progress file stays the same shape as the dataset.
pub fn write_deck(
    path: &Path,
    source_label: &str,
    target_label: &str,
    items: &[VocabItem],
) -> Result<(), FlashyError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([source_label, target_label])?;
    for item in items {
        writer.write_record([item.source.as_str(), item.target.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_deck_path(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn round_trip_preserves_rows_and_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_deck_path(&dir, "deck.csv");

        let deck = demo_deck();
        write_deck(&path, &deck.source_label, &deck.target_label, &deck.items).unwrap();

        let reloaded = read_deck(&path).unwrap();
        assert_eq!(reloaded.source_label, "Urdu");
        assert_eq!(reloaded.target_label, "English");
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.items[1].source, "شکریہ");
        assert_eq!(reloaded.items[1].target, "Thank you");
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("deck.csv");

        write_deck(&path, "Front", "Back", &[]).unwrap();
        assert!(path.exists());

        let deck = read_deck(&path).unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.source_label, "Front");
    }

    #[test]
    fn duplicate_rows_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_deck_path(&dir, "dupes.csv");
        std::fs::write(&path, "Urdu,English\nپانی,Water\nپانی,Water\n").unwrap();

        let deck = read_deck(&path).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.items[0].source, deck.items[1].source);
        assert_ne!(deck.items[0].id, deck.items[1].id);
    }

    #[test]
    fn single_column_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_deck_path(&dir, "narrow.csv");
        std::fs::write(&path, "Urdu\nسلام\n").unwrap();

        let result = read_deck(&path);
        assert!(matches!(result, Err(FlashyError::MalformedDeck(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_deck_path(&dir, "nope.csv");
        assert!(read_deck(&path).is_err());
    }
}
