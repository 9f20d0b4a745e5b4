use super::error::WireError;

/// Big-endian reader over a complete DNS message.
///
/// `pos` is always absolute from the start of the message so compression
/// pointers can be followed with [`WireCursor::at`] without moving the
/// main cursor.
#[derive(Debug, Clone, Copy)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// A second cursor over the same buffer, positioned at `pos`.
    pub fn at(&self, pos: usize) -> Self {
        Self { buf: self.buf, pos }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn seek(&mut self, pos: usize) -> Result<(), WireError> {
        if pos > self.buf.len() {
            return Err(self.out_of_range(pos, 0));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(len)
            .ok_or_else(|| self.out_of_range(self.pos, len))?;
        let bytes = self
            .buf
            .get(self.pos..end)
            .ok_or_else(|| self.out_of_range(self.pos, len))?;
        self.pos = end;
        Ok(bytes)
    }

    /// Byte at an absolute offset; does not move the cursor.
    pub fn peek_u8_at(&self, pos: usize) -> Result<u8, WireError> {
        self.buf
            .get(pos)
            .copied()
            .ok_or_else(|| self.out_of_range(pos, 1))
    }

    fn out_of_range(&self, pos: usize, len: usize) -> WireError {
        WireError::OutOfRange {
            pos,
            len,
            size: self.buf.len(),
        }
    }
}
