use crate::protocols::rfid::error::RfidError;
use crate::protocols::rfid::{FrameKind, RfidFrame};
use crate::{DecodeFailure, FrameSummary};

pub fn build_frame_summary(record: u64, frame: &RfidFrame) -> FrameSummary {
    FrameSummary {
        record,
        kind: kind_label(frame.kind).to_string(),
        type_code: frame.type_code,
        length: frame.length,
        data: hex_string(&frame.data),
        checksum: frame.checksum,
        computed_checksum: frame.computed_checksum,
        checksum_valid: frame.checksum_valid(),
        suffix: if frame.suffix.is_empty() {
            None
        } else {
            Some(hex_string(&frame.suffix))
        },
    }
}

pub fn build_failure(record: u64, err: &RfidError) -> DecodeFailure {
    DecodeFailure {
        record,
        error: err.to_string(),
    }
}

fn kind_label(kind: FrameKind) -> &'static str {
    match kind {
        FrameKind::TagData => "tag_data",
        FrameKind::Unknown(_) => "unknown",
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
