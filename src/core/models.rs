use chrono::{
    DateTime,
    Local,
};

/// Stable identifier assigned to each row when a deck is loaded. The source
/// CSV has no key column, so duplicate rows are only distinguishable by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabItem {
    pub id: CardId,
    pub source: String, // Term in the language being learned
    pub target: String, // Translation shown on the back of the card
}

/// Which file (or fallback) `load` ended up reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Progress,
    Original,
    BuiltinDemo,
}

#[derive(Debug, Clone)]
pub struct SessionStats {
    pub original_count: usize,
    pub learned_this_session: u32,
    pub started_at: DateTime<Local>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self { original_count: 0, learned_this_session: 0, started_at: Local::now() }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub learned: usize,
    pub total: usize,
    pub percentage: f32,
}
