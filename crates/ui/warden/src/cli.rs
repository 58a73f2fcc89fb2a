// src/cli.rs
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "warden",
    version,
    about = "Check passwords against a required-character rule"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Cmd {
    /// Run interactive TUI (default)
    #[default]
    Run,
    /// Check passwords without the TUI and print the results
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// The character every password must contain (case-insensitive)
    #[arg(short = 'c', long = "char", value_name = "CHAR")]
    pub required_char: String,

    /// Minimum number of occurrences (1-999)
    #[arg(long, allow_hyphen_values = true)]
    pub min: String,

    /// Maximum number of occurrences (1-999)
    #[arg(long, allow_hyphen_values = true)]
    pub max: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Passwords to check, in order
    #[arg(required = true, value_name = "PASSWORD")]
    pub passwords: Vec<String>,
}
