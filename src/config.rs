//! Generator configuration
//!
//! Values are injected at construction time; nothing here consults the
//! process working directory.

use std::path::PathBuf;

/// Default interpreter used to run the companion Python parser
pub const DEFAULT_PYTHON_PROGRAM: &str = "python3";

/// Default location of the companion Python parser script
pub const DEFAULT_PYTHON_SCRIPT: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/parse_python.py");

/// Settings for the source parsers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Interpreter name or path, resolved on PATH
    pub python_program: String,
    /// Companion script passed as the interpreter's first argument
    pub python_script: PathBuf,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            python_program: DEFAULT_PYTHON_PROGRAM.to_string(),
            python_script: PathBuf::from(DEFAULT_PYTHON_SCRIPT),
        }
    }
}

/// Top-level configuration for [`DocGenerator`](crate::render::DocGenerator)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub parser: ParserConfig,
}

impl GeneratorConfig {
    /// Override the companion interpreter
    pub fn with_python_program(mut self, program: impl Into<String>) -> Self {
        self.parser.python_program = program.into();
        self
    }

    /// Override the companion script location
    pub fn with_python_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.parser.python_script = script.into();
        self
    }
}
