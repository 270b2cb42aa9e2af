//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::Parser;

/// Investor Login - sign in against the remote authentication endpoint
#[derive(Parser, Debug)]
#[command(name = "investor-login")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// E-mail to sign in with
    #[arg(short, long)]
    pub email: String,

    /// Password to sign in with
    #[arg(short, long)]
    pub password: String,

    /// Override the authentication endpoint URL
    #[arg(long, env = "AUTH_ENDPOINT_URL")]
    pub endpoint: Option<String>,
}
