//! One-line lookback that drops redundant travel moves.
//!
//! In a run of consecutive travel moves only the last destination matters,
//! unless a move carries one of the essential words (feed rate, Y position).
//! Such a move is never dropped.

use super::{is_command, is_essential_travel};

/// What happened to the previously pending line when a new one arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Elision {
    /// Nothing was pending.
    Buffered,
    /// The pending line must be written out.
    Emit(String),
    /// The pending line was redundant and has been discarded.
    Dropped(String),
}

#[derive(Debug, Clone)]
pub struct RedundancyElider {
    travel_code: String,
    essential_words: Vec<char>,
    pending: Option<String>,
}

impl RedundancyElider {
    pub fn new(travel_code: impl Into<String>, essential_words: Vec<char>) -> Self {
        Self {
            travel_code: travel_code.into(),
            essential_words,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    fn mergeable(&self, previous: &str, next: &str) -> bool {
        is_command(previous, &self.travel_code)
            && is_command(next, &self.travel_code)
            && !is_essential_travel(previous, &self.essential_words)
    }

    /// Makes `line` the pending line and reports the fate of the one it replaced.
    pub fn push(&mut self, line: String) -> Elision {
        let outcome = match self.pending.take() {
            None => Elision::Buffered,
            Some(previous) if self.mergeable(&previous, &line) => Elision::Dropped(previous),
            Some(previous) => Elision::Emit(previous),
        };
        self.pending = Some(line);
        outcome
    }

    /// Empties the buffer at end of input.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take()
    }
}
