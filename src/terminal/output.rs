//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then drained to the sink in a single
/// `write()` syscall so the terminal never sees a half-drawn update.
///
/// The buffer knows nothing about lines or cursor bookkeeping; it is the
/// only code in the crate that touches the external sink.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical status block (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor up `n` lines.
    #[inline]
    pub fn cursor_up(&mut self, n: usize) {
        // CSI n A
        write!(self.data, "\x1b[{n}A").unwrap();
    }

    /// Move cursor down `n` lines.
    #[inline]
    pub fn cursor_down(&mut self, n: usize) {
        // CSI n B
        write!(self.data, "\x1b[{n}B").unwrap();
    }

    /// Erase from the cursor to the end of the line.
    #[inline]
    pub fn erase_to_eol(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Return the cursor to column zero.
    #[inline]
    pub fn carriage_return(&mut self) {
        self.data.push(b'\r');
    }

    /// Advance the cursor to the next line.
    #[inline]
    pub fn newline(&mut self) {
        self.data.push(b'\n');
    }

    /// Drain the buffer to a sink in a single syscall.
    ///
    /// On success the buffer is cleared. On failure it is left intact,
    /// so the pending bytes are resent by the next flush rather than
    /// silently lost. An empty buffer performs no syscall at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    pub fn flush_to<W: Write>(&mut self, sink: &mut W) -> std::io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        sink.write_all(&self.data)?;
        sink.flush()?;
        self.data.clear();
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_movement_sequences() {
        let mut out = OutputBuffer::new();
        out.cursor_up(2);
        out.cursor_down(13);
        assert_eq!(out.as_bytes(), b"\x1b[2A\x1b[13B");
    }

    #[test]
    fn test_erase_and_returns() {
        let mut out = OutputBuffer::new();
        out.carriage_return();
        out.erase_to_eol();
        out.newline();
        out.write_str("done");
        assert_eq!(out.as_bytes(), b"\r\x1b[K\ndone");
    }

    #[test]
    fn test_flush_clears_on_success() {
        let mut out = OutputBuffer::new();
        let mut sink = Vec::new();
        out.write_str("hello");
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hello");
        assert!(out.is_empty());
    }

    #[test]
    fn test_flush_retains_on_failure() {
        let mut out = OutputBuffer::new();
        out.write_str("pending");
        assert!(out.flush_to(&mut FailingSink).is_err());
        assert_eq!(out.as_bytes(), b"pending");

        // A later flush to a working sink resends the same bytes.
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"pending");
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_flush_is_noop() {
        let mut out = OutputBuffer::new();
        // FailingSink errors on any write; an empty buffer must not reach it.
        out.flush_to(&mut FailingSink).unwrap();
        assert_eq!(out.len(), 0);
    }
}
