use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbarioError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Row {row} is missing required column '{field}'")]
    MalformedRow { row: usize, field: &'static str },

    #[error("Remote store is not configured")]
    RemoteUnavailable,

    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    #[error("Speech synthesis is not available on this system")]
    SpeechUnavailable,

    #[error("VerbarioError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for VerbarioError {
    fn from(error: std::io::Error) -> Self {
        VerbarioError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for VerbarioError {
    fn from(error: reqwest::Error) -> Self {
        VerbarioError::Reqwest(Box::new(error))
    }
}

impl From<calamine::Error> for VerbarioError {
    fn from(error: calamine::Error) -> Self {
        VerbarioError::Spreadsheet(error.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for VerbarioError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        VerbarioError::Spreadsheet(error.to_string())
    }
}
