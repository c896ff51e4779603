//! Source parsers
//!
//! Each parser turns a file into a flat [`ParseResult`] of top-level
//! function and class records. Two variants exist:
//! - `javascript`: in-process tree-sitter parse (JS, JSX, TS, TSX)
//! - `python`: delegates to a companion Python process speaking JSON
//!
//! Both share the soft-failure contract of [`SourceParser::parse`]: any error
//! is logged and replaced by an empty result, so documentation generation
//! always continues.

pub mod javascript;
pub mod python;

use std::path::Path;

use crate::config::ParserConfig;
use crate::error::{DocgenError, Result};
use crate::lang::{Lang, LangFamily};
use crate::schema::ParseResult;

pub use javascript::JavaScriptParser;
pub use python::PythonParser;

/// A parser producing function and class records for one file
pub trait SourceParser {
    /// Human-readable language name used in log lines
    fn language_name(&self) -> &'static str;

    /// Parse a file, propagating the cause of any failure
    fn try_parse(&self, path: &Path) -> Result<ParseResult>;

    /// Parse a file, logging failures and degrading to an empty result
    fn parse(&self, path: &Path) -> ParseResult {
        tracing::info!(
            "Parsing {} file: {}",
            self.language_name(),
            path.display()
        );
        match self.try_parse(path) {
            Ok(result) => {
                tracing::info!(
                    "Parsed {} functions and {} classes",
                    result.functions.len(),
                    result.classes.len()
                );
                result
            }
            Err(e) => {
                tracing::warn!(
                    "Error parsing {} file {}: {}",
                    self.language_name(),
                    path.display(),
                    e
                );
                ParseResult::empty()
            }
        }
    }
}

/// Reject paths that are not regular files before any parsing work
fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(DocgenError::FileNotFound {
            path: path.display().to_string(),
        })
    }
}

/// Select the parser variant for a language
pub fn parser_for(lang: Lang, config: &ParserConfig) -> Box<dyn SourceParser> {
    match lang.family() {
        LangFamily::JavaScript => Box::new(JavaScriptParser::new(lang)),
        LangFamily::Python => Box::new(PythonParser::new(config)),
    }
}
