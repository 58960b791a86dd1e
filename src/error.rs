use thiserror::Error;

/// Result type for jcst operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced at the crate boundary
#[derive(Error, Debug)]
pub enum Error {
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Lexical error at line {line}, column {column}: {message}")]
    Lexical {
        line: usize,
        column: usize,
        message: String,
    },
}
