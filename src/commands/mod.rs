//! Command handlers for the CLI
//!
//! Each handler takes its parsed arguments plus a shared
//! [`CommandContext`] and reports an outcome for `main` to print.

mod generate;

pub use generate::{output_path_for, run_generate_docs, GenerateOutcome};

use crate::config::GeneratorConfig;
use crate::render::DocGenerator;

/// State shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub generator: DocGenerator,
}

impl CommandContext {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            generator: DocGenerator::new(config),
        }
    }
}
