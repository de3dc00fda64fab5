//! Terminal byte-level concerns: buffered ANSI output and SGR styling.

mod output;
mod style;

pub use output::OutputBuffer;
pub use style::{style, Style, RESET};
