//! Tailor CLI entry point

use clap::Parser;
use std::process;
use tailor::cli::check::CheckOptions;
use tailor::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use tailor::cli::init::InitOutcome;
use tailor::cli::{Command, args::Cli};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Init { force } => match tailor::cli::init::run_init(force) {
            Ok(InitOutcome::Created) => {
                println!("Created tailor.toml.");
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Overwritten) => {
                println!("Overwrote tailor.toml with the defaults.");
                EXIT_SUCCESS
            }
            Ok(InitOutcome::Skipped) => {
                eprintln!("Warning: tailor.toml already exists. Use --force to overwrite it.");
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Command::Check {
            paths,
            format,
            config,
            verbose,
        } => tailor::cli::check::run_check(&CheckOptions {
            paths,
            format,
            config,
            color: cli.color,
            verbose,
        }),
        Command::List { format, config } => {
            tailor::cli::list::run_list(format, config.as_deref())
        }
    };

    process::exit(exit_code);
}
