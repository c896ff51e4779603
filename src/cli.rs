//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{GeneratorConfig, DEFAULT_PYTHON_PROGRAM, DEFAULT_PYTHON_SCRIPT};
use crate::render::DEFAULT_FORMAT;

/// Heuristic documentation generator
#[derive(Parser, Debug)]
#[command(name = "srcdoc")]
#[command(about = "Generate Markdown documentation for JavaScript and Python source files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interpreter used to run the companion Python parser
    #[arg(long, global = true, env = "SRCDOC_PYTHON", default_value = DEFAULT_PYTHON_PROGRAM)]
    pub python: String,

    /// Path to the companion Python parser script. The default points into
    /// the source tree the binary was built from, so installed binaries
    /// should set this (or SRCDOC_PYTHON_SCRIPT) explicitly
    #[arg(
        long,
        global = true,
        env = "SRCDOC_PYTHON_SCRIPT",
        default_value = DEFAULT_PYTHON_SCRIPT
    )]
    pub python_script: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate documentation for a single source file
    GenerateDocs(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source file to document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format (only markdown is rendered)
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Print the documentation instead of writing `<FILE>.md`
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Build the generator configuration from flags and environment
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_python_program(self.python.clone())
            .with_python_script(self.python_script.clone())
    }
}
