use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashyError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("CSV error: {0}")]
    Csv(Box<csv::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck file needs at least two columns: {0}")]
    MalformedDeck(String),

    #[error("No vocabulary data found")]
    NoData,

    #[error("FlashyError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FlashyError {
    fn from(error: std::io::Error) -> Self {
        FlashyError::Io(Box::new(error))
    }
}

impl From<csv::Error> for FlashyError {
    fn from(error: csv::Error) -> Self {
        FlashyError::Csv(Box::new(error))
    }
}
