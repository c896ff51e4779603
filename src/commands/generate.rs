//! generate-docs command handler - render one file to `<file>.md`

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::GenerateArgs;
use crate::commands::CommandContext;
use crate::error::Result;

/// What the generate-docs command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Documentation written to this path
    Written(PathBuf),
    /// Documentation rendered for standard output
    Printed(String),
    /// Input path does not exist; nothing was written
    Missing,
    /// Unsupported or unreadable input; nothing was written
    Unsupported,
}

/// Run the generate-docs command
///
/// Only a failure to write the output file is returned as an error.
pub fn run_generate_docs(args: &GenerateArgs, ctx: &CommandContext) -> Result<GenerateOutcome> {
    if !args.file.exists() {
        tracing::warn!("File not found: {}", args.file.display());
        return Ok(GenerateOutcome::Missing);
    }

    let documentation = ctx
        .generator
        .generate_documentation(&args.file, &args.format);

    if documentation.is_empty() {
        return Ok(GenerateOutcome::Unsupported);
    }

    if args.stdout {
        return Ok(GenerateOutcome::Printed(documentation));
    }

    let output_path = output_path_for(&args.file);
    fs::write(&output_path, documentation)?;

    tracing::debug!("Wrote {}", output_path.display());

    Ok(GenerateOutcome::Written(output_path))
}

/// `<input>.md`, next to the input file
pub fn output_path_for(file: &Path) -> PathBuf {
    let mut path = OsString::from(file.as_os_str());
    path.push(".md");
    PathBuf::from(path)
}
