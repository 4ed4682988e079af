//! Demotes faint marking moves to travel moves.

use super::MarkingMove;
use crate::config::MaskConfig;

/// Result of reclassifying one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Reclassified {
    pub line: String,
    /// Whether the move code went from marking to travel.
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct Reclassifier {
    threshold: f64,
    travel_code: String,
    intensity_word: char,
}

impl Reclassifier {
    pub fn new(config: &MaskConfig) -> Self {
        Self {
            threshold: config.threshold,
            travel_code: config.travel_code.clone(),
            intensity_word: config.intensity_word,
        }
    }

    /// Rewrites `line` when `found` is a marking move below the threshold.
    /// Text before the move code survives; the matched instruction becomes
    /// `<travel code><params><intensity word>0\n`.
    pub fn apply(&self, line: &str, found: Option<&MarkingMove<'_>>) -> Reclassified {
        match found {
            Some(m) if m.intensity < self.threshold => {
                let mut out = String::with_capacity(line.len());
                out.push_str(&line[..m.span.start]);
                out.push_str(&self.travel_code);
                out.push_str(m.params);
                out.push(self.intensity_word);
                out.push_str("0\n");
                out.push_str(&line[m.span.end..]);
                Reclassified { line: out, changed: true }
            }
            _ => Reclassified { line: line.to_string(), changed: false },
        }
    }
}
