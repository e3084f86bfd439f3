//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use todocheck::core::services::CheckError;
use todocheck::output::{FailureReport, OutputMode};

/// todocheck - Keep TODO comments pointing at open issues
#[derive(Parser, Debug)]
#[command(
    name = "todocheck",
    version,
    about = "Validate TODO comments against their issue tracker",
    long_about = "Check that TODO comments follow the required syntax and that the\n\
                  issue each one references is still open.\n\n\
                  A TODO must reference an issue, e.g. `// TODO 123: remove shim`."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a .todocheck.toml file (default: nearest one above the file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a single comment
    Check {
        /// File the comment belongs to
        file: PathBuf,

        /// 1-based line number of the comment
        #[arg(short, long)]
        line: usize,

        /// Comment text, exactly as it appears in the file
        #[arg(short, long)]
        comment: String,

        /// Number of source lines to show, ending at the comment
        #[arg(long, default_value_t = 3)]
        context_lines: usize,
    },

    /// Show version
    Version,
}

/// Run the CLI, reporting any failure in the requested output mode
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match execute(cli, output_mode) {
        Ok(code) => code,
        Err(err) => {
            let internal = err
                .chain()
                .any(|cause| cause.downcast_ref::<CheckError>().is_some_and(CheckError::is_internal));
            FailureReport::new(&err, internal).render(output_mode);
            ExitCode::from(2)
        },
    }
}

fn execute(cli: Cli, output_mode: OutputMode) -> anyhow::Result<ExitCode> {
    match cli.command {
        Some(Command::Check {
            file,
            line,
            comment,
            context_lines,
        }) => commands::check(
            &commands::CheckArgs {
                file,
                line,
                comment,
                context_lines,
                config: cli.config,
            },
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("todocheck v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("todocheck v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'todocheck --help' for usage");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
