//! Recognises marking moves that carry an intensity word, e.g.
//! `G1 X10.5 S42\n`.
//!
//! The matched shape is `<marking code><params><intensity word><value>`
//! followed by whitespace up to the end of the line. `params` is kept verbatim
//! so a rewritten line changes nothing but the move code and the intensity.

use std::ops::Range;

use regex::Regex;

use super::GCodeError;
use crate::config::{ConfigError, MaskConfig};

/// A marking move found on one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkingMove<'a> {
    /// Byte range of the matched instruction within the line.
    pub span: Range<usize>,
    /// Everything between the move code and the intensity word.
    pub params: &'a str,
    pub intensity: f64,
}

#[derive(Debug, Clone)]
pub struct MarkingMoveMatcher {
    regex: Regex,
}

impl MarkingMoveMatcher {
    pub fn new(config: &MaskConfig) -> Result<Self, ConfigError> {
        let digits = if config.wide_intensity { r"\d+" } else { r"\d{1,2}" };
        // `(?:\D.*?)?` keeps `G1` from matching the front of `G10`.
        let pattern = format!(
            r"{code}(?P<params>(?:\D.*?)?){word}(?P<value>{digits}(?:\.\d+)?)\s+$",
            code = regex::escape(&config.marking_code),
            word = regex::escape(&config.intensity_word.to_string()),
        );
        tracing::debug!("Marking move pattern: {}", pattern);
        Ok(Self { regex: Regex::new(&pattern)? })
    }

    /// Finds the marking move on `line`, if any. `line_no` is 1-based and only
    /// used for error reporting.
    pub fn parse<'a>(&self, line: &'a str, line_no: usize) -> Result<Option<MarkingMove<'a>>, GCodeError> {
        let Some(caps) = self.regex.captures(line) else {
            return Ok(None);
        };
        let (Some(whole), Some(params), Some(value)) = (caps.get(0), caps.name("params"), caps.name("value")) else {
            return Ok(None);
        };
        let intensity = value.as_str().parse::<f64>().map_err(|_| GCodeError::MalformedIntensity {
            line: line_no,
            value: value.as_str().to_string(),
        })?;
        Ok(Some(MarkingMove {
            span: whole.range(),
            params: params.as_str(),
            intensity,
        }))
    }
}
