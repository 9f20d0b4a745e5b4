/// Issues DNS transaction ids.
///
/// The counter is advanced before each use and wraps from 65535 to 0, so it
/// can never produce a value outside the 16-bit header field.
#[derive(Debug, Clone)]
pub struct TransactionIdCounter {
    last: u16,
}

impl TransactionIdCounter {
    /// `last` is treated as already issued; the first `next()` returns
    /// `last + 1` (wrapping).
    pub fn new(last: u16) -> Self {
        Self { last }
    }

    /// Starts from an unpredictable point.
    pub fn random() -> Self {
        Self::new(fastrand::u16(..))
    }

    #[inline]
    pub fn next(&mut self) -> u16 {
        self.last = self.last.wrapping_add(1);
        self.last
    }

    pub fn last_issued(&self) -> u16 {
        self.last
    }
}

impl Default for TransactionIdCounter {
    fn default() -> Self {
        Self::random()
    }
}
