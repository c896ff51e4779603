//! srcdoc CLI entry point

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use srcdoc::commands::{run_generate_docs, CommandContext, GenerateOutcome};
use srcdoc::{logging, Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> srcdoc::Result<()> {
    let ctx = CommandContext::new(cli.generator_config());

    match &cli.command {
        Command::GenerateDocs(args) => {
            match run_generate_docs(args, &ctx)? {
                GenerateOutcome::Written(path) => println!(
                    "{}",
                    format!("Documentation generated and saved to {}", path.display()).green()
                ),
                GenerateOutcome::Printed(documentation) => print!("{}", documentation),
                GenerateOutcome::Missing => println!(
                    "{}",
                    format!("File not found: {}", args.file.display()).red()
                ),
                GenerateOutcome::Unsupported => println!(
                    "{}",
                    format!("No documentation generated for {}", args.file.display()).yellow()
                ),
            }
        }
    }

    Ok(())
}
