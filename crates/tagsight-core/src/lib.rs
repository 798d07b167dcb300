//! Tagsight core library for offline RFID scanner dump analysis.
//!
//! This crate implements the decode pipeline used by the CLI: hex-dump
//! sources feed the analysis layer, which drives the frame decoder
//! (layout/reader/parser) and aggregates results into a deterministic
//! report. Parsing is byte-oriented and side-effect free; all I/O is
//! isolated in `source` modules. Protocol conventions are captured in
//! readers so parsers stay minimal.
//!
//! Invariants:
//! - Report outputs are deterministic and stable across runs.
//! - A frame that decodes structurally always appears in the report,
//!   checksum mismatch or not; the mismatch is a reported flag.
//! - Decode failures are terminal per record; no partial frames.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use tagsight_core::analyze_hexdump_file;
//!
//! let report = analyze_hexdump_file(Path::new("capture.hex"))?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod analysis;
mod protocols;
mod source;

pub use analysis::{AnalysisError, analyze_hexdump_file, analyze_source};
pub use protocols::rfid::error::RfidError;
pub use protocols::rfid::{FrameKind, RfidFrame, parse_frame};
pub use source::{FrameEvent, FrameSource, HexDumpFileSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the input carries no capture time.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Aggregated decode report with deterministic ordering.
///
/// # Examples
/// ```
/// use tagsight_core::make_stub_report;
///
/// let report = make_stub_report("capture.hex", 123);
/// assert_eq!(report.report_version, tagsight_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    /// Input dump metadata.
    pub input: InputInfo,

    /// Decode totals for the whole dump.
    pub summary: DecodeSummary,
    /// Decoded frames in record order.
    pub frames: Vec<FrameSummary>,
    /// Structural decode failures in record order.
    pub failures: Vec<DecodeFailure>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "tagsight").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input dump metadata embedded in reports.
///
/// # Examples
/// ```
/// use tagsight_core::InputInfo;
///
/// let input = InputInfo {
///     path: "capture.hex".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the analyzer.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Decode totals across every record in the dump.
///
/// # Examples
/// ```
/// use tagsight_core::DecodeSummary;
///
/// let summary = DecodeSummary::default();
/// assert_eq!(summary.records_total, 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeSummary {
    /// Records read from the source.
    pub records_total: u64,
    /// Records that decoded into a structural frame.
    pub frames_decoded: u64,
    /// Decoded frames carrying tag read content (type 0x17).
    pub tag_frames: u64,
    /// Decoded frames whose received checksum did not match.
    pub checksum_failures: u64,
    /// Records rejected with a structural decode error.
    pub decode_errors: u64,
}

/// One decoded frame, rendered for reporting.
///
/// Payload and suffix bytes are lowercase hex strings; numeric fields
/// keep their wire values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSummary {
    /// Record number (1-based line in the dump).
    pub record: u64,
    /// Frame kind label ("tag_data" or "unknown").
    pub kind: String,
    /// Instruction/message type byte.
    pub type_code: u8,
    /// Declared payload length.
    pub length: u8,
    /// Payload bytes as contiguous lowercase hex.
    pub data: String,
    /// Checksum byte received on the wire.
    pub checksum: u8,
    /// Checksum recomputed over type, length, and payload.
    pub computed_checksum: u8,
    /// Whether received and computed checksums agree.
    pub checksum_valid: bool,
    /// Trailing bytes after the checksum, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Single structural decode failure record.
///
/// # Examples
/// ```
/// use tagsight_core::DecodeFailure;
///
/// let failure = DecodeFailure {
///     record: 5,
///     error: "bad start marker: 0x00".to_string(),
/// };
/// assert_eq!(failure.record, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeFailure {
    /// Record number (1-based line in the dump).
    pub record: u64,
    /// Human-readable decode error.
    pub error: String,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use tagsight_core::make_stub_report;
///
/// let report = make_stub_report("capture.hex", 123);
/// assert!(report.frames.is_empty());
/// assert_eq!(report.summary.records_total, 0);
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "tagsight".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        summary: DecodeSummary::default(),
        frames: vec![],
        failures: vec![],
    }
}
