use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgnError {
    #[error("config error: {0}")]
    Config(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("could not read spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("spreadsheet has no worksheet: {0}")]
    EmptyWorkbook(String),

    #[error("header row not found (no row starting with \"{0}\")")]
    HeaderRowNotFound(String),

    #[error("header row has no \"{0}\" column")]
    MissingColumn(String),

    #[error("rating for the opponent could not be found: header row has none of {0}")]
    NoRatingColumn(String),

    #[error("player name not found (no row starting with \"{0}\")")]
    MissingPlayerName(String),

    #[error("error writing PGN file: {0}")]
    PgnWrite(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PgnError {
    /// True for failures caused by the input spreadsheet's content or layout.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            PgnError::FileNotFound(_)
                | PgnError::Workbook(_)
                | PgnError::EmptyWorkbook(_)
                | PgnError::HeaderRowNotFound(_)
                | PgnError::MissingColumn(_)
                | PgnError::NoRatingColumn(_)
                | PgnError::MissingPlayerName(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PgnError>;
