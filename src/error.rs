use thiserror::Error;

/// Public suffix engine error types
#[derive(Error, Debug)]
pub enum SuffixError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid rule '{source_text}': {message}")]
    InvalidRule {
        source_text: String,
        message: String,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SuffixError>;
