use thiserror::Error;

#[derive(Debug, Error)]
pub enum HexDumpSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("hex dump parse error (line {line}): {message}")]
    Parse { line: u64, message: String },
}
