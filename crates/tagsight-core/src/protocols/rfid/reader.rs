use super::error::RfidError;

pub struct RfidReader<'a> {
    raw: &'a [u8],
}

impl<'a> RfidReader<'a> {
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), RfidError> {
        if self.raw.len() < needed {
            return Err(RfidError::TooShort {
                needed,
                actual: self.raw.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, RfidError> {
        self.raw.get(offset).copied().ok_or(RfidError::TooShort {
            needed: offset + 1,
            actual: self.raw.len(),
        })
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], RfidError> {
        self.raw.get(range.clone()).ok_or(RfidError::TooShort {
            needed: range.end,
            actual: self.raw.len(),
        })
    }

    /// Bytes from `offset` to the end of the buffer; empty when `offset`
    /// is at or past the end.
    pub fn read_tail(&self, offset: usize) -> &'a [u8] {
        self.raw.get(offset..).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::RfidReader;

    #[test]
    fn read_u8_in_and_out_of_bounds() {
        let reader = RfidReader::new(&[0xbb, 0x17]);
        assert_eq!(reader.read_u8(1).unwrap(), 0x17);
        assert!(reader.read_u8(2).is_err());
    }

    #[test]
    fn read_tail_clamps_to_empty() {
        let reader = RfidReader::new(&[0xbb, 0x17, 0x00]);
        assert_eq!(reader.read_tail(1), &[0x17, 0x00]);
        assert!(reader.read_tail(3).is_empty());
        assert!(reader.read_tail(10).is_empty());
    }
}
