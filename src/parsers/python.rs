//! Python parser backed by a companion process
//!
//! Runs `<program> <script> <file>` and reads a single JSON [`ParseResult`]
//! from standard output. The call blocks until the process exits; there is
//! no retry and no timeout. Missing interpreter, missing script, launch
//! errors, non-zero exit and malformed output are all reported as errors
//! and turned into an empty result by [`SourceParser::parse`].

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ParserConfig;
use crate::error::{DocgenError, Result};
use crate::parsers::{ensure_file, SourceParser};
use crate::schema::ParseResult;

/// Out-of-process parser adapter for Python sources
#[derive(Debug, Clone)]
pub struct PythonParser {
    program: String,
    script: PathBuf,
}

impl PythonParser {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            program: config.python_program.clone(),
            script: config.python_script.clone(),
        }
    }

    /// Run the companion and return its standard output
    fn run_companion(&self, path: &Path) -> Result<String> {
        tracing::debug!("Using Python script at: {}", self.script.display());

        if !self.script.is_file() {
            return Err(DocgenError::CompanionNotFound {
                message: format!("Python script not found at {}", self.script.display()),
            });
        }

        let program = which::which(&self.program).map_err(|e| DocgenError::CompanionNotFound {
            message: format!("interpreter '{}' not found: {}", self.program, e),
        })?;

        let output = Command::new(&program)
            .arg(&self.script)
            .arg(path)
            .output()
            .map_err(|e| DocgenError::CompanionFailure {
                message: format!("Python process error: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DocgenError::CompanionFailure {
                message: format!(
                    "Python process exited with {}: {}",
                    output.status,
                    stderr.trim()
                ),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| DocgenError::CompanionFailure {
            message: format!("Python process wrote non UTF-8 output: {}", e),
        })
    }
}

impl SourceParser for PythonParser {
    fn language_name(&self) -> &'static str {
        "Python"
    }

    fn try_parse(&self, path: &Path) -> Result<ParseResult> {
        ensure_file(path)?;
        let stdout = self.run_companion(path)?;
        let result = decode_output(&stdout)?;
        let len = fs::metadata(path)?.len() as usize;
        Ok(result.clamped(len))
    }
}

/// Decode the companion's standard output
fn decode_output(stdout: &str) -> Result<ParseResult> {
    serde_json::from_str(stdout.trim()).map_err(|e| DocgenError::CompanionFailure {
        message: format!("Malformed parser output: {}", e),
    })
}
