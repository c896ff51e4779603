//! srcdoc: heuristic Markdown documentation for source files
//!
//! Parses a single source file into top-level function and class records,
//! then describes them by scanning the raw text for comments, annotation
//! tags and keywords. There is no semantic analysis: descriptions come from
//! pattern matches with fixed fallbacks.
//!
//! # Supported Languages
//!
//! - JavaScript, JSX, TypeScript, TSX (in-process tree-sitter parse)
//! - Python (companion process, see `scripts/parse_python.py`)
//!
//! # Example
//!
//! ```ignore
//! use srcdoc::{DocGenerator, GeneratorConfig};
//! use std::path::Path;
//!
//! let generator = DocGenerator::new(GeneratorConfig::default());
//! let markdown = generator.generate_documentation(Path::new("src/app.js"), "markdown");
//! println!("{}", markdown);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod heuristics;
pub mod lang;
pub mod logging;
pub mod parsers;
pub mod render;
pub mod schema;
pub mod utils;

// Re-export commonly used types
pub use cli::{Cli, Command, GenerateArgs};
pub use config::{GeneratorConfig, ParserConfig};
pub use error::{DocgenError, Result};
pub use lang::{Lang, LangFamily};
pub use parsers::{parser_for, JavaScriptParser, PythonParser, SourceParser};
pub use render::{render_markdown, DocGenerator};
pub use schema::{ClassRecord, FunctionRecord, ParseResult};
