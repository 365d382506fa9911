//! Fixed-capacity rendering of `nonce || counter` candidate messages.

use core::fmt::{self, Write};

use crate::error::{Result, SolveError};

/// Capacity of the candidate buffer in bytes.
///
/// A rendered message must stay strictly below this, so at most
/// `MESSAGE_CAPACITY - 1` bytes are ever hashed.
pub const MESSAGE_CAPACITY: usize = 512;

/// Decimal digits in `u64::MAX`.
pub const MAX_COUNTER_DIGITS: usize = 20;

/// Stack buffer holding one rendered candidate.
///
/// Writes past the usable length fail instead of truncating.
pub struct MessageBuffer {
    bytes: [u8; MESSAGE_CAPACITY],
    len: usize,
}

impl MessageBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        MessageBuffer {
            bytes: [0u8; MESSAGE_CAPACITY],
            len: 0,
        }
    }

    /// Render `nonce` followed by the decimal digits of `counter`.
    ///
    /// The previous contents are discarded. Fails with
    /// [`SolveError::MessageOverflow`] when the result would reach the
    /// buffer capacity.
    pub fn render(&mut self, nonce: &[u8], counter: u64) -> Result<&[u8]> {
        self.len = 0;
        let overflow = SolveError::MessageOverflow {
            counter,
            capacity: MESSAGE_CAPACITY,
        };

        self.push_bytes(nonce).map_err(|_| overflow)?;
        write!(self, "{}", counter).map_err(|_| overflow)?;

        Ok(self.as_bytes())
    }

    /// The bytes rendered so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of rendered bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been rendered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push_bytes(&mut self, data: &[u8]) -> fmt::Result {
        let end = self.len + data.len();
        if end >= MESSAGE_CAPACITY {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(data);
        self.len = end;
        Ok(())
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_bytes(s.as_bytes())
    }
}
