mod commands;
mod render;
mod submission;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "formcheck - sign-up form validator", long_about = None)]
struct Cli {
    /// Rule overrides file
    #[arg(short, long, global = true, default_value = "formcheck.toml")]
    config: PathBuf,

    /// Log each field as it is validated
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form submission
    Check {
        #[command(flatten)]
        fields: FieldArgs,

        /// Read field values from a TOML file (flags take precedence)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the active validation rules
    Rules,
}

/// Field values given on the command line
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub confirm_password: Option<String>,

    /// Checked gender option
    #[arg(long)]
    pub gender: Option<String>,

    /// Selected age group
    #[arg(long)]
    pub age_group: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Check { fields, file, json } => {
            let valid = commands::check::execute(&cli.config, fields, file.as_deref(), json)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Rules => {
            commands::rules::execute(&cli.config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
