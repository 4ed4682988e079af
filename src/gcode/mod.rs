//! G-code line handling for the masking pass.
//!
//! Lines are treated as opaque text except for the few words the pass cares
//! about: the move code at the start of a line and the intensity word of a
//! marking move.

pub mod elider;
pub mod matcher;
pub mod reclassify;

pub use elider::{Elision, RedundancyElider};
pub use matcher::{MarkingMove, MarkingMoveMatcher};
pub use reclassify::{Reclassified, Reclassifier};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GCodeError {
    #[error("line {line}: malformed intensity value '{value}'")]
    MalformedIntensity { line: usize, value: String },
}

/// True when `line` starts with the command `code` (leading whitespace
/// ignored) and the code is not the prefix of a longer number.
pub fn is_command(line: &str, code: &str) -> bool {
    match line.trim_start().strip_prefix(code) {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_digit()),
        None => false,
    }
}

/// A travel move is essential when it mentions any of `words` anywhere on the
/// line, e.g. a feed rate or a Y position.
pub fn is_essential_travel(line: &str, words: &[char]) -> bool {
    line.contains(words)
}
