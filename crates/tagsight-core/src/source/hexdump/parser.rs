use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::source::{FrameEvent, FrameSource, SourceError};

use super::reader::{decode_line, is_skippable_line};

/// Frame source backed by a scanner dump file.
///
/// Each non-blank, non-comment line is one candidate frame; the emitted
/// record number is the 1-based line number, so diagnostics point back
/// into the file.
pub struct HexDumpFileSource {
    lines: Lines<BufReader<File>>,
    line_no: u64,
}

impl HexDumpFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl FrameSource for HexDumpFileSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line.map_err(SourceError::from)?;
            self.line_no += 1;
            if is_skippable_line(&line) {
                continue;
            }
            let data = decode_line(&line, self.line_no).map_err(SourceError::from)?;
            return Ok(Some(FrameEvent {
                record: self.line_no,
                data,
            }));
        }
    }
}
