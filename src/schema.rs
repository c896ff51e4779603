//! Structural records produced by the source parsers
//!
//! Field names are part of the companion parser protocol: `functions`,
//! `classes`, and per function `name`, `params`, `start`, `end`.

use serde::{Deserialize, Serialize};

/// A top-level function definition
///
/// `start..end` is a half-open byte range into the owning file's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    #[serde(rename = "params")]
    pub parameters: Vec<String>,
    pub start: usize,
    pub end: usize,
}

/// A top-level class definition
///
/// Methods and properties are not recorded; they are scanned from the
/// class slice when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Everything a parser found in one file, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub functions: Vec<FunctionRecord>,
    pub classes: Vec<ClassRecord>,
}

impl ParseResult {
    /// The result a parser returns after a soft failure
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no function or class was found
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }

    /// Clamp every span so that `start <= end <= len`
    ///
    /// Spans reported by an out-of-process parser are not trusted.
    pub fn clamped(mut self, len: usize) -> Self {
        for func in &mut self.functions {
            (func.start, func.end) = clamp_span(func.start, func.end, len);
        }
        for class in &mut self.classes {
            (class.start, class.end) = clamp_span(class.start, class.end, len);
        }
        self
    }
}

fn clamp_span(start: usize, end: usize, len: usize) -> (usize, usize) {
    let end = end.min(len);
    (start.min(end), end)
}
