pub mod deck;
pub mod errors;
pub mod models;
pub mod store;

pub use errors::FlashyError;
pub use models::{ CardId, DataSource, ProgressSummary, SessionStats, VocabItem };
pub use store::{ LearningStore, StorePaths };
