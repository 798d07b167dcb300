use std::path::Path;

use thiserror::Error;

use crate::source::{FrameEvent, FrameSource, HexDumpFileSource, SourceError};
use crate::{Report, make_stub_report};

mod records;

use records::{build_failure, build_frame_summary};

use crate::protocols::rfid::{FrameKind, parse_frame};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn analyze_hexdump_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = HexDumpFileSource::open(path)?;
    analyze_source(path, source)
}

/// Decode every record the source yields and aggregate the report.
///
/// Frames and failures keep input order by record, so the output is
/// deterministic for a given dump.
pub fn analyze_source<S: FrameSource>(
    path: &Path,
    mut source: S,
) -> Result<Report, AnalysisError> {
    let mut report = make_stub_report(&path.display().to_string(), path.metadata()?.len());

    while let Some(FrameEvent { record, data }) = source.next_frame()? {
        report.summary.records_total += 1;
        match parse_frame(&data) {
            Ok(frame) => {
                report.summary.frames_decoded += 1;
                if frame.kind == FrameKind::TagData {
                    report.summary.tag_frames += 1;
                }
                if !frame.checksum_valid() {
                    report.summary.checksum_failures += 1;
                }
                report.frames.push(build_frame_summary(record, &frame));
            }
            Err(err) => {
                report.summary.decode_errors += 1;
                report.failures.push(build_failure(record, &err));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::analyze_source;
    use crate::source::{FrameEvent, FrameSource, SourceError};

    struct VecSource {
        events: std::vec::IntoIter<FrameEvent>,
    }

    impl VecSource {
        fn new(frames: Vec<(u64, Vec<u8>)>) -> Self {
            let events = frames
                .into_iter()
                .map(|(record, data)| FrameEvent { record, data })
                .collect::<Vec<_>>()
                .into_iter();
            Self { events }
        }
    }

    impl FrameSource for VecSource {
        fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
            Ok(self.events.next())
        }
    }

    #[test]
    fn totals_agree_with_records() {
        let source = VecSource::new(vec![
            (1, vec![0xbb, 0x17, 0x02, 0xaa, 0xbb, 0x7e]),
            (2, vec![0xbb, 0x40, 0x02, 0x00, 0x01, 0x43]),
            (3, vec![0xbb, 0x17, 0x02, 0xaa, 0xbb, 0x00]),
            (4, vec![0x00, 0x17]),
        ]);
        let report = analyze_source(Path::new("."), source).unwrap();

        assert_eq!(report.summary.records_total, 4);
        assert_eq!(report.summary.frames_decoded, 3);
        assert_eq!(report.summary.tag_frames, 2);
        assert_eq!(report.summary.checksum_failures, 1);
        assert_eq!(report.summary.decode_errors, 1);
        assert_eq!(report.frames.len(), 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].record, 4);
    }

    #[test]
    fn frames_keep_record_order() {
        let source = VecSource::new(vec![
            (2, vec![0xbb, 0x22, 0x00, 0x22]),
            (5, vec![0xbb, 0x23, 0x00, 0x23]),
        ]);
        let report = analyze_source(Path::new("."), source).unwrap();
        let records: Vec<u64> = report.frames.iter().map(|f| f.record).collect();
        assert_eq!(records, [2, 5]);
    }
}
