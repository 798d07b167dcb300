//! Hex-dump source implementation.
//!
//! This module provides a `FrameSource` backed by scanner dump files:
//! one line per received message, written as hex byte tokens. It
//! handles file I/O and token decoding, emitting raw frame events for
//! the analysis pipeline.

pub mod error;
pub mod parser;
pub mod reader;

pub use parser::HexDumpFileSource;
