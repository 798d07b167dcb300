use super::error::RfidError;
use super::layout;
use super::reader::RfidReader;

/// Semantic kind of a decoded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Tag read content (type code 0x17).
    TagData,
    /// Any other type code, carried through for the caller.
    Unknown(u8),
}

/// A decoded scanner frame.
///
/// Holds both the received and the computed checksum; a mismatch does
/// not fail decoding, so callers can choose their own policy (discard,
/// log, request retransmission).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfidFrame {
    pub head: u8,
    pub kind: FrameKind,
    pub type_code: u8,
    pub length: u8,
    pub data: Vec<u8>,
    pub checksum: u8,
    pub computed_checksum: u8,
    /// Bytes after the checksum (terminator, vendor footer); not validated.
    pub suffix: Vec<u8>,
}

impl RfidFrame {
    /// Whether the received checksum matches the computed one.
    pub fn checksum_valid(&self) -> bool {
        self.checksum == self.computed_checksum
    }

    /// Re-encode the frame, suffix included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut raw =
            Vec::with_capacity(layout::DATA_OFFSET + self.data.len() + 1 + self.suffix.len());
        raw.push(self.head);
        raw.push(self.type_code);
        raw.push(self.length);
        raw.extend_from_slice(&self.data);
        raw.push(self.checksum);
        raw.extend_from_slice(&self.suffix);
        raw
    }
}

/// Decode one frame starting at offset 0 of `raw`.
///
/// The buffer must hold the full declared frame (head, type, length,
/// payload, checksum); trailing bytes are retained as an opaque suffix.
/// No resynchronization is attempted; a misaligned buffer fails with
/// `BadStartMarker` and the caller owns recovery.
pub fn parse_frame(raw: &[u8]) -> Result<RfidFrame, RfidError> {
    let reader = RfidReader::new(raw);
    reader.require_len(layout::MIN_LEN)?;

    let head = reader.read_u8(layout::HEAD_OFFSET)?;
    if head != layout::START_MARKER {
        return Err(RfidError::BadStartMarker { value: head });
    }

    let type_code = reader.read_u8(layout::TYPE_OFFSET)?;
    let length = reader.read_u8(layout::LENGTH_OFFSET)?;

    let checksum_offset = layout::DATA_OFFSET + length as usize;
    reader.require_len(checksum_offset + 1)?;
    let data = reader.read_slice(layout::DATA_OFFSET..checksum_offset)?;
    let checksum = reader.read_u8(checksum_offset)?;
    let suffix = reader.read_tail(checksum_offset + 1);

    let kind = if type_code == layout::TYPE_TAG_DATA {
        FrameKind::TagData
    } else {
        FrameKind::Unknown(type_code)
    };

    Ok(RfidFrame {
        head,
        kind,
        type_code,
        length,
        data: data.to_vec(),
        checksum,
        computed_checksum: compute_checksum(type_code, length, data),
        suffix: suffix.to_vec(),
    })
}

/// 8-bit additive checksum over type, length, and payload.
pub fn compute_checksum(type_code: u8, length: u8, data: &[u8]) -> u8 {
    let sum = u32::from(type_code)
        + u32::from(length)
        + data.iter().map(|&b| u32::from(b)).sum::<u32>();
    (sum % 256) as u8
}

#[cfg(test)]
mod tests {
    use super::{FrameKind, compute_checksum, parse_frame};

    // Tag report captured from the scanner: 19 payload bytes, checksum
    // 0x0f, CRLF terminator plus vendor footer.
    const TAG_REPORT: &[u8] = &[
        0xbb, 0x17, 0x13, 0x30, 0x00, 0xe2, 0x00, 0x00, 0x1d, 0x25, 0x03, 0x02, 0x58, 0x16,
        0x50, 0xe7, 0xa5, 0x75, 0x8d, 0x20, 0x1f, 0x01, 0x0f, 0x0d, 0x0a, 0x7e, 0x7e, 0x08,
        0x73, 0x00, 0xef, 0x94,
    ];

    #[test]
    fn parse_tag_report() {
        let frame = parse_frame(TAG_REPORT).unwrap();
        assert_eq!(frame.head, 0xbb);
        assert_eq!(frame.kind, FrameKind::TagData);
        assert_eq!(frame.length, 0x13);
        assert_eq!(frame.data.len(), 19);
        assert_eq!(frame.data[0], 0x30);
        assert_eq!(frame.checksum, 0x0f);
        assert_eq!(frame.computed_checksum, 0x0f);
        assert!(frame.checksum_valid());
        assert_eq!(
            frame.suffix,
            [0x0d, 0x0a, 0x7e, 0x7e, 0x08, 0x73, 0x00, 0xef, 0x94]
        );
    }

    #[test]
    fn length_byte_is_a_binary_count() {
        // 0x13 declares 19 payload bytes, not 13.
        let frame = parse_frame(TAG_REPORT).unwrap();
        assert_eq!(frame.data.len(), 19);
        assert_eq!(usize::from(frame.length), frame.data.len());
    }

    #[test]
    fn parse_heartbeat_as_unknown_kind() {
        let frame = parse_frame(&[0xbb, 0x40, 0x02, 0x00, 0x01, 0x43]).unwrap();
        assert_eq!(frame.kind, FrameKind::Unknown(0x40));
        assert!(frame.checksum_valid());
        assert!(frame.suffix.is_empty());
    }

    #[test]
    fn parse_empty_payload() {
        let frame = parse_frame(&[0xbb, 0x22, 0x00, 0x22]).unwrap();
        assert_eq!(frame.length, 0);
        assert!(frame.data.is_empty());
        assert!(frame.checksum_valid());
    }

    #[test]
    fn checksum_mismatch_still_decodes() {
        let frame = parse_frame(&[0xbb, 0x17, 0x02, 0xaa, 0xbb, 0x00]).unwrap();
        assert_eq!(frame.kind, FrameKind::TagData);
        assert_eq!(frame.computed_checksum, 0x7e);
        assert_eq!(frame.checksum, 0x00);
        assert!(!frame.checksum_valid());
    }

    #[test]
    fn parse_short_header() {
        let err = parse_frame(&[0xbb, 0x17]).unwrap_err();
        assert!(err.to_string().contains("frame too short"));
    }

    #[test]
    fn parse_truncated_payload() {
        // Declares 0x13 payload bytes but carries only two.
        let err = parse_frame(&[0xbb, 0x17, 0x13, 0x30, 0x00]).unwrap_err();
        assert!(err.to_string().contains("frame too short"));
    }

    #[test]
    fn parse_bad_start_marker() {
        let err = parse_frame(&[0x00, 0x17, 0x13, 0x30, 0x00]).unwrap_err();
        assert!(err.to_string().contains("bad start marker"));
    }

    #[test]
    fn checksum_is_deterministic() {
        let frame = parse_frame(TAG_REPORT).unwrap();
        let again = parse_frame(TAG_REPORT).unwrap();
        assert_eq!(frame.computed_checksum, again.computed_checksum);
        assert_eq!(
            compute_checksum(frame.type_code, frame.length, &frame.data),
            frame.computed_checksum
        );
    }

    #[test]
    fn reencode_round_trips() {
        let frame = parse_frame(TAG_REPORT).unwrap();
        assert_eq!(frame.to_bytes(), TAG_REPORT);
        assert_eq!(parse_frame(&frame.to_bytes()).unwrap(), frame);
    }
}
