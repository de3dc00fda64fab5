//! `LineWriter`: the addressable-overwrite facade.
//!
//! The writer reserves a block of terminal lines at construction and
//! lets any number of producers overwrite individual lines in place.
//! All state lives behind one lock, held for the whole move/erase/write
//! byte sequence of each operation, so concurrent writes are emitted
//! whole and never interleave.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::tty::IsTty;
use parking_lot::Mutex;

use crate::actor::FlusherActor;
use crate::cursor::Movement;
use crate::error::{Error, Result};
use crate::terminal::OutputBuffer;

/// Interval between background flushes unless reconfigured.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(200);

/// Mutable writer state, guarded by a single lock.
struct Shared {
    /// Number of addressable lines. Grows, never shrinks.
    lines: usize,
    /// Cursor row within the block, 0-indexed from the top.
    curr_line: usize,
    /// Accumulated, not-yet-flushed output.
    output: OutputBuffer,
    /// The external sink. Never closed by the writer.
    sink: Box<dyn Write + Send>,
    /// Set exactly once, by `close`.
    closed: bool,
}

impl Shared {
    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::Closed)
        } else {
            Ok(())
        }
    }

    /// Emit the vertical movement that puts the cursor on `target` and
    /// update the bookkeeping.
    fn move_cursor_to(&mut self, target: usize) -> Result<()> {
        if target > self.lines - 1 {
            return Err(Error::LineOutOfRange {
                line: target,
                lines: self.lines,
            });
        }
        match Movement::between(self.curr_line, target) {
            Movement::Stay => {}
            Movement::Up(n) => self.output.cursor_up(n),
            Movement::Down(n) => self.output.cursor_down(n),
        }
        self.curr_line = target;
        Ok(())
    }

    /// Move, erase, content: one unit, always under the caller's lock.
    fn overwrite(&mut self, target: usize, text: &str) -> Result<()> {
        self.move_cursor_to(target)?;
        self.output.carriage_return();
        self.output.erase_to_eol();
        self.output.write_str(text);
        Ok(())
    }

    fn flush_sink(&mut self) -> io::Result<()> {
        self.output.flush_to(&mut self.sink)
    }
}

/// Maintains a block of terminal lines that can each be overwritten in
/// place.
///
/// Output is buffered; bytes reach the sink on an explicit
/// [`flush`](Self::flush), at [`close`](Self::close), or on the next
/// tick of the background flusher (every
/// [`DEFAULT_FLUSH_INTERVAL`] unless reconfigured). The writer is
/// `Send + Sync`; share it by reference or `Arc` across producer
/// threads.
///
/// # Example
///
/// ```rust,ignore
/// use lineflow::LineWriter;
///
/// let writer = LineWriter::new(2)?;
/// writer.write_line(0, "worker 1: 40%")?;
/// writer.write_line(1, "worker 2: 71%")?;
/// writer.flush()?;
/// writer.close()?;
/// ```
pub struct LineWriter {
    shared: Arc<Mutex<Shared>>,
    /// The one live flusher. Taken exactly once at close; swapped (never
    /// duplicated) on reconfiguration.
    flusher: Mutex<Option<FlusherActor>>,
}

impl LineWriter {
    /// Create a writer over standard output, maintaining `lines` lines.
    ///
    /// Reserves vertical space by emitting `lines - 1` newlines into the
    /// buffer and starts the background flusher at
    /// [`DEFAULT_FLUSH_INTERVAL`].
    ///
    /// # Errors
    ///
    /// [`Error::NotATerminal`] if stdout is not an interactive terminal;
    /// [`Error::InvalidLineCount`] if `lines < 1`.
    pub fn new(lines: usize) -> Result<Self> {
        let stdout = io::stdout();
        if !stdout.is_tty() {
            return Err(Error::NotATerminal);
        }
        Self::with_sink(lines, stdout)
    }

    /// Create a writer over an arbitrary sink, maintaining `lines` lines.
    ///
    /// No TTY requirement: this is the testing/injection form, usable
    /// with any capturing sink.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLineCount`] if `lines < 1`.
    pub fn with_sink<W: Write + Send + 'static>(lines: usize, sink: W) -> Result<Self> {
        if lines < 1 {
            return Err(Error::InvalidLineCount(lines));
        }

        let mut output = OutputBuffer::new();
        for _ in 0..lines - 1 {
            output.newline();
        }

        let shared = Arc::new(Mutex::new(Shared {
            lines,
            curr_line: lines - 1,
            output,
            sink: Box::new(sink),
            closed: false,
        }));
        let flusher = Self::spawn_flusher(&shared, DEFAULT_FLUSH_INTERVAL);

        Ok(Self {
            shared,
            flusher: Mutex::new(Some(flusher)),
        })
    }

    fn spawn_flusher(shared: &Arc<Mutex<Shared>>, interval: Duration) -> FlusherActor {
        let shared = Arc::clone(shared);
        FlusherActor::spawn(interval, move || shared.lock().flush_sink())
    }

    /// Overwrite line `n` with `text`.
    ///
    /// `text` must not contain newlines or escape sequences; the cursor
    /// bookkeeping cannot see through them.
    ///
    /// # Errors
    ///
    /// [`Error::LineOutOfRange`] if `n` is outside the block,
    /// [`Error::Closed`] after close.
    pub fn write_line(&self, n: usize, text: &str) -> Result<()> {
        let mut state = self.shared.lock();
        state.ensure_open()?;
        state.overwrite(n, text)
    }

    /// Overwrite the last line with `text`. Returns the last line's
    /// index.
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] after close.
    pub fn write_last_line(&self, text: &str) -> Result<usize> {
        let mut state = self.shared.lock();
        state.ensure_open()?;
        let last = state.lines - 1;
        state.overwrite(last, text)?;
        Ok(last)
    }

    /// Grow the block by one line at the bottom and write `text` there.
    /// Returns the new line's index.
    ///
    /// This is the only operation that changes the line count.
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] after close.
    pub fn write_new_line(&self, text: &str) -> Result<usize> {
        let mut state = self.shared.lock();
        state.ensure_open()?;
        let last = state.lines - 1;
        state.move_cursor_to(last)?;
        state.output.newline();
        state.output.carriage_return();
        state.lines += 1;
        state.curr_line = state.lines - 1;
        state.output.write_str(text);
        Ok(state.curr_line)
    }

    /// Drain all buffered bytes to the sink.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the sink fails (the buffer is retained for
    /// retry), [`Error::Closed`] after close.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.shared.lock();
        state.ensure_open()?;
        state.flush_sink()?;
        Ok(())
    }

    /// Replace the background flusher with one ticking every `interval`.
    ///
    /// The old flusher is stopped (including its final flush) and the
    /// replacement started while the flusher slot is locked, so two live
    /// flushers can never coexist. `interval` must be nonzero.
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] after close.
    pub fn set_flush_interval(&self, interval: Duration) -> Result<()> {
        let mut slot = self.flusher.lock();
        self.shared.lock().ensure_open()?;
        if let Some(old) = slot.take() {
            old.stop();
        }
        *slot = Some(Self::spawn_flusher(&self.shared, interval));
        Ok(())
    }

    /// Close the writer: move to the last line, emit a trailing newline,
    /// stop the background flusher, and flush everything.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the final flush fails; [`Error::Closed`] on a
    /// second call. A second call never signals the flusher again.
    pub fn close(&self) -> Result<()> {
        let mut slot = self.flusher.lock();
        {
            let mut state = self.shared.lock();
            state.ensure_open()?;
            let last = state.lines - 1;
            state.move_cursor_to(last)?;
            state.output.newline();
            state.output.carriage_return();
            state.closed = true;
        }

        // The flusher's final flush drains the buffer; it must run
        // without us holding the state lock.
        if let Some(flusher) = slot.take() {
            flusher.stop();
        }

        // Usually a no-op after the final flush above; surfaces a
        // failing sink to the caller, which the background flush cannot.
        self.shared.lock().flush_sink()?;
        Ok(())
    }

    /// Number of maintained lines.
    pub fn line_count(&self) -> usize {
        self.shared.lock().lines
    }
}
