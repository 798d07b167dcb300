mod hexdump;

pub use hexdump::HexDumpFileSource;

use thiserror::Error;

/// One candidate frame lifted from a dump, tagged with its record
/// (the 1-based line number in the file).
#[derive(Debug, Clone)]
pub struct FrameEvent {
    pub record: u64,
    pub data: Vec<u8>,
}

pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("hex dump parse error: {0}")]
    HexDump(String),
}

impl From<hexdump::error::HexDumpSourceError> for SourceError {
    fn from(value: hexdump::error::HexDumpSourceError) -> Self {
        match value {
            hexdump::error::HexDumpSourceError::Io(err) => SourceError::Io(err),
            hexdump::error::HexDumpSourceError::Parse { line, message } => {
                SourceError::HexDump(format!("line {line}: {message}"))
            }
        }
    }
}
