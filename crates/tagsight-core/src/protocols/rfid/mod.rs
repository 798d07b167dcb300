//! RFID scanner frame decoding.
//!
//! The parser validates the fixed start marker, then extracts the
//! length-delimited payload and the additive checksum that follows it.
//! A checksum mismatch does not fail decoding; the parsed frame carries
//! both checksums so callers can apply their own policy. Type code 0x17
//! marks tag read content; all other codes pass through unclassified.
//!
//! Byte offsets and protocol constants live in `layout`, safe byte
//! access in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{FrameKind, RfidFrame, parse_frame};
