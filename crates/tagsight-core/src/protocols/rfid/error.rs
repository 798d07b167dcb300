use thiserror::Error;

/// Errors returned by RFID frame parsing and reading.
///
/// Both variants are terminal for the decode attempt; no partial frame
/// is returned. A checksum mismatch is not an error (see
/// `RfidFrame::checksum_valid`).
#[derive(Debug, Error)]
pub enum RfidError {
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("bad start marker: {value:#04x}")]
    BadStartMarker { value: u8 },
}
