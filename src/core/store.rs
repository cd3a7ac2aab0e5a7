use std::{
    fs,
    path::PathBuf,
};

use log::{
    info,
    warn,
};
use rand::seq::IndexedRandom;

use super::{
    deck::{
        self,
        Deck,
    },
    models::{
        CardId,
        DataSource,
        ProgressSummary,
        SessionStats,
        VocabItem,
    },
    FlashyError,
};
use crate::persistence::get_data_file_path;

pub const ORIGINAL_FILE: &str = "urdu_words.csv";
pub const PROGRESS_FILE: &str = "words_to_learn.csv";

#[derive(Debug, Clone)]
pub struct StorePaths {
    pub original: PathBuf,
    pub progress: PathBuf,
}

impl StorePaths {
    /// Default locations under the per-user app data directory.
    pub fn default_paths() -> Self {
        Self {
            original: get_data_file_path(ORIGINAL_FILE),
            progress: get_data_file_path(PROGRESS_FILE),
        }
    }

    /// Keeps the progress file next to a user-supplied dataset.
    pub fn for_dataset(original: PathBuf) -> Self {
        let progress = match original.parent() {
            Some(parent) => parent.join(PROGRESS_FILE),
            None => PathBuf::from(PROGRESS_FILE),
        };
        Self { original, progress }
    }
}

#[derive(Debug, Clone)]
struct UndoEntry {
    item: VocabItem,
    learned_before: u32,
}

/// Owns the set of not-yet-learned items, the single-slot undo buffer and the
/// session counters, and mirrors every mutation to the progress file.
#[derive(Debug)]
pub struct LearningStore {
    paths: StorePaths,
    source_label: String,
    target_label: String,
    working_set: Vec<VocabItem>,
    undo_slot: Option<UndoEntry>,
    stats: SessionStats,
    demo_fallback: bool,
}

impl LearningStore {
    pub fn new(paths: StorePaths) -> Self {
        Self {
            paths,
            source_label: deck::DEMO_SOURCE_LABEL.to_string(),
            target_label: deck::DEMO_TARGET_LABEL.to_string(),
            working_set: Vec::new(),
            undo_slot: None,
            stats: SessionStats::new(),
            demo_fallback: true,
        }
    }

    /// Disables the built-in demo deck, leaving only the on-disk sources.
    pub fn set_demo_fallback(&mut self, enabled: bool) {
        self.demo_fallback = enabled;
    }

    /// Loads the working set: saved progress if present and non-empty, else
    /// the original dataset, else the demo deck. On a read error the store is
    /// left empty and the error is returned for the caller to surface; the
    /// store itself stays usable.
    pub fn load(&mut self) -> Result<DataSource, FlashyError> {
        self.working_set.clear();
        self.undo_slot = None;

        match self.resolve_deck(true) {
            Ok((deck, source)) => {
                info!("Loaded {} card(s) from {:?}", deck.len(), source);
                self.install_deck(deck);
                Ok(source)
            }
            Err(e) => {
                self.stats.original_count = 0;
                Err(e)
            }
        }
    }

    /// One uniformly random item from the working set. Sampling is with
    /// replacement across calls, so a card may repeat before being learned.
    pub fn pick_next(&self) -> Option<VocabItem> {
        self.working_set.choose(&mut rand::rng()).cloned()
    }

    /// Removes the identified card from the working set, remembers it in the
    /// undo slot and saves progress. Silently does nothing when the set is
    /// empty or the id is not a member.
    pub fn mark_known(&mut self, id: CardId) {
        let Some(pos) = self.working_set.iter().position(|item| item.id == id) else {
            return;
        };

        let item = self.working_set.remove(pos);
        self.undo_slot =
            Some(UndoEntry { item, learned_before: self.stats.learned_this_session });
        self.stats.learned_this_session += 1;

        self.persist_logged();
    }

    /// Puts the last marked-known card back and restores the session counter
    /// to its pre-removal value. Returns false when there is nothing to undo,
    /// which is a normal condition rather than an error.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.undo_slot.take() else {
            return false;
        };

        self.working_set.push(entry.item);
        self.stats.learned_this_session = entry.learned_before;
        self.persist_logged();
        true
    }

    /// Deletes the progress file and reloads from the original dataset (or
    /// demo deck). Unlike `persist`, failures here propagate to the caller.
    pub fn reset(&mut self) -> Result<DataSource, FlashyError> {
        if self.paths.progress.exists() {
            fs::remove_file(&self.paths.progress)?;
        }

        let (deck, source) = self.resolve_deck(false)?;
        self.install_deck(deck);
        self.stats.learned_this_session = 0;
        self.undo_slot = None;

        info!("Progress reset, reloaded from {:?}", source);
        Ok(source)
    }

    /// Serializes the working set to the progress file, replacing it in full.
    pub fn persist(&self) -> Result<(), FlashyError> {
        deck::write_deck(
            &self.paths.progress,
            &self.source_label,
            &self.target_label,
            &self.working_set,
        )
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let total = self.stats.original_count;
        let learned = total.saturating_sub(self.working_set.len());
        let percentage =
            if total > 0 { learned as f32 / total as f32 * 100.0 } else { 0.0 };
        ProgressSummary { learned, total, percentage }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn can_undo(&self) -> bool {
        self.undo_slot.is_some()
    }

    pub fn remaining(&self) -> usize {
        self.working_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    fn install_deck(&mut self, deck: Deck) {
        self.source_label = deck.source_label;
        self.target_label = deck.target_label;
        self.working_set = deck.items;
        self.stats.original_count = self.working_set.len();
    }

    /// The load fallback chain. `include_progress` is false during a reset,
    /// which must not resurrect the file it just deleted.
    fn resolve_deck(&self, include_progress: bool) -> Result<(Deck, DataSource), FlashyError> {
        if include_progress && self.paths.progress.exists() {
            let deck = deck::read_deck(&self.paths.progress)?;
            if !deck.is_empty() {
                return Ok((deck, DataSource::Progress));
            }
        }

        if self.paths.original.exists() {
            let deck = deck::read_deck(&self.paths.original)?;
            if !deck.is_empty() {
                return Ok((deck, DataSource::Original));
            }
        }

        if self.demo_fallback {
            return Ok((deck::demo_deck(), DataSource::BuiltinDemo));
        }

        Err(FlashyError::NoData)
    }

    fn persist_logged(&self) {
        if let Err(e) = self.persist() {
            warn!("Failed to save progress: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LearningStore {
        let paths = StorePaths {
            original: dir.path().join("urdu_words.csv"),
            progress: dir.path().join("words_to_learn.csv"),
        };
        LearningStore::new(paths)
    }

    fn write_dataset(dir: &tempfile::TempDir, rows: &[(&str, &str)]) {
        let mut content = String::from("Urdu,English\n");
        for (source, target) in rows {
            content.push_str(&format!("{},{}\n", source, target));
        }
        fs::write(dir.path().join("urdu_words.csv"), content).unwrap();
    }

    #[test]
    fn load_prefers_progress_over_original() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);
        fs::write(dir.path().join("words_to_learn.csv"), "Urdu,English\nسلام,Hello\n").unwrap();

        let mut store = store_in(&dir);
        let source = store.load().unwrap();

        assert_eq!(source, DataSource::Progress);
        assert_eq!(store.remaining(), 1);
        assert_eq!(store.stats().original_count, 1);
    }

    #[test]
    fn load_skips_empty_progress_file() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello")]);
        fs::write(dir.path().join("words_to_learn.csv"), "Urdu,English\n").unwrap();

        let mut store = store_in(&dir);
        assert_eq!(store.load().unwrap(), DataSource::Original);
        assert_eq!(store.remaining(), 1);
    }

    #[test]
    fn load_falls_back_to_demo_deck() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.load().unwrap(), DataSource::BuiltinDemo);
        assert_eq!(store.remaining(), 3);
    }

    #[test]
    fn load_without_any_source_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_demo_fallback(false);

        let result = store.load();
        assert!(matches!(result, Err(FlashyError::NoData)));
        assert!(store.is_empty());
        assert!(store.pick_next().is_none());
    }

    #[test]
    fn corrupt_dataset_yields_empty_store_and_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("urdu_words.csv"), "Urdu\nسلام\n").unwrap();

        let mut store = store_in(&dir);
        assert!(store.load().is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn pick_next_samples_from_working_set() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);

        let mut store = store_in(&dir);
        store.load().unwrap();

        for _ in 0..20 {
            let card = store.pick_next().unwrap();
            assert!(card.source == "سلام" || card.source == "شکریہ");
        }
    }

    #[test]
    fn mark_known_removes_item_and_counts_it() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();

        store.mark_known(card.id);

        assert_eq!(store.remaining(), 1);
        assert_eq!(store.stats().learned_this_session, 1);
        assert!(store.pick_next().map(|c| c.id) != Some(card.id));

        let summary = store.progress_summary();
        assert_eq!((summary.learned, summary.total), (1, 2));
        assert!((summary.percentage - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn mark_known_with_stale_id_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();

        store.mark_known(card.id);
        store.mark_known(card.id); // Already removed

        assert_eq!(store.stats().learned_this_session, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn undo_restores_item_and_counter() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();

        store.mark_known(card.id);
        assert!(store.can_undo());
        assert!(store.undo());

        assert_eq!(store.remaining(), 2);
        assert_eq!(store.stats().learned_this_session, 0);
        assert!(!store.can_undo());
        assert_eq!(store.progress_summary().learned, 0);
    }

    #[test]
    fn undo_with_empty_slot_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello")]);

        let mut store = store_in(&dir);
        store.load().unwrap();

        assert!(!store.undo());
        assert_eq!(store.remaining(), 1);
        assert_eq!(store.stats().learned_this_session, 0);
    }

    #[test]
    fn undo_slot_is_single_level() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you"), ("پانی", "Water")]);

        let mut store = store_in(&dir);
        store.load().unwrap();

        let first = store.pick_next().unwrap();
        store.mark_known(first.id);
        let second = store.pick_next().unwrap();
        store.mark_known(second.id);

        // Only the second removal can be undone.
        assert!(store.undo());
        assert_eq!(store.remaining(), 2);
        assert_eq!(store.stats().learned_this_session, 1);
        assert!(!store.undo());
    }

    #[test]
    fn persist_then_load_round_trips_working_set() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you"), ("پانی", "Water")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();
        store.mark_known(card.id); // Persists as a side effect

        // Simulated restart.
        let mut reopened = store_in(&dir);
        assert_eq!(reopened.load().unwrap(), DataSource::Progress);
        assert_eq!(reopened.remaining(), 2);

        let mut sources: Vec<String> = Vec::new();
        while let Some(item) = reopened.pick_next() {
            sources.push(item.source.clone());
            reopened.mark_known(item.id);
        }
        sources.sort();
        assert!(!sources.contains(&card.source));
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn reset_deletes_progress_and_reloads_original() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();
        store.mark_known(card.id);

        let source = store.reset().unwrap();
        assert_eq!(source, DataSource::Original);
        assert_eq!(store.remaining(), 2);
        assert_eq!(store.stats().learned_this_session, 0);
        assert!(!store.can_undo());
        assert!(!dir.path().join("words_to_learn.csv").exists());
    }

    #[test]
    fn reset_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();
        store.mark_known(card.id);

        store.reset().unwrap();
        let after_first: usize = store.remaining();
        store.reset().unwrap();

        assert_eq!(store.remaining(), after_first);
        assert_eq!(store.stats().learned_this_session, 0);
    }

    #[test]
    fn duplicate_rows_are_separate_learning_units() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("پانی", "Water"), ("پانی", "Water")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();

        store.mark_known(card.id);

        // The other physical occurrence is still there to learn.
        assert_eq!(store.remaining(), 1);
        let survivor = store.pick_next().unwrap();
        assert_eq!(survivor.source, "پانی");
        assert_ne!(survivor.id, card.id);
    }

    #[test]
    fn progress_summary_with_empty_store_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_demo_fallback(false);
        let _ = store.load();

        let summary = store.progress_summary();
        assert_eq!((summary.learned, summary.total), (0, 0));
        assert_eq!(summary.percentage, 0.0);
    }

    #[test]
    fn mutations_keep_progress_file_current() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(&dir, &[("سلام", "Hello"), ("شکریہ", "Thank you")]);

        let mut store = store_in(&dir);
        store.load().unwrap();
        let card = store.pick_next().unwrap();

        store.mark_known(card.id);
        let after_mark = fs::read_to_string(dir.path().join("words_to_learn.csv")).unwrap();
        assert_eq!(after_mark.lines().count(), 2); // Header + one remaining row

        store.undo();
        let after_undo = fs::read_to_string(dir.path().join("words_to_learn.csv")).unwrap();
        assert_eq!(after_undo.lines().count(), 3);
    }
}
