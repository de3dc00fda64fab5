//! # Lineflow
//!
//! An addressable multi-line terminal writer for live progress displays.
//!
//! Lineflow maintains a fixed (growable) block of lines at the bottom of
//! the terminal and lets many producers overwrite any of them in place,
//! without redrawing the screen or scrolling. Think one status line per
//! worker, each updating independently.
//!
//! ## Core Concepts
//!
//! - **Addressable overwrite**: move the cursor to a line, erase it,
//!   rewrite it, as one atomic unit per call
//! - **Buffered emission**: escape sequences accumulate in memory and
//!   reach the terminal in a single write
//! - **Background flush**: a dedicated thread drains the buffer on a
//!   configurable interval (200ms by default)
//! - **One lock, whole writes**: concurrent producers serialize per
//!   operation, so emitted byte sequences never interleave
//!
//! ## Example
//!
//! ```rust,ignore
//! use lineflow::LineWriter;
//!
//! let writer = LineWriter::new(2)?;
//! writer.write_line(0, "worker 1: 40%")?;
//! writer.write_line(1, "worker 2: 71%")?;
//! writer.flush()?;
//! writer.close()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod cursor;
pub mod error;
pub mod terminal;
pub mod writer;

// Re-exports for convenience
pub use actor::FlusherActor;
pub use cursor::Movement;
pub use error::{Error, Result};
pub use terminal::{style, OutputBuffer, Style};
pub use writer::{LineWriter, DEFAULT_FLUSH_INTERVAL};
