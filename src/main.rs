//! Investor Login - application entry point
//!
//! Drives one login round trip from the command line and prints the
//! outcome, standing in for the surrounding login screen.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use investor_login::{
    cli::Cli, Config, LoginOrchestrator, LoginOutcome, RemoteAuthService, ReqwestHttpClient,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration; the CLI endpoint override wins
    let mut config = Config::from_env();
    if let Some(endpoint) = cli.endpoint.clone() {
        config.endpoint_url = endpoint;
    }
    tracing::debug!(endpoint = %config.endpoint_url, "configuration loaded");

    if let Err(e) = run(cli, config).await {
        tracing::error!("login failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = ReqwestHttpClient::new(config.request_timeout())?;
    let auth_service = RemoteAuthService::new(config.endpoint_url, Arc::new(client));
    let orchestrator = LoginOrchestrator::new(Arc::new(auth_service));

    match orchestrator.do_login(&cli.email, &cli.password).await {
        LoginOutcome::LoggedIn(investor) => {
            println!("{}", serde_json::to_string_pretty(&investor)?);
            Ok(())
        }
        LoginOutcome::ValidationError(message) | LoginOutcome::AuthenticationError(message) => {
            Err(message.into())
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
