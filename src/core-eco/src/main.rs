use std::{process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use core_eco::{BackendClient, check_backend, non_empty_env, page::TERMINAL_FRONTEND, render_text, setup_logging};
use data_model_eco::{API_URL_ENV, ApiBaseUrl, ConnectionResult, StatusPage};

#[derive(Parser)]
#[command(name = "ecodrone")]
#[command(about = "EcoDrone backend status page", long_about = None)]
struct EcoCli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Backend base URL. Overrides the API_URL environment variable.
    #[arg(long, value_parser = validate_api_url)]
    api_url: Option<String>,
    /// Give up on a request after this many seconds. Requests wait indefinitely by default.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Default)]
enum Commands {
    /// Render the status page after probing the backend once (default).
    #[default]
    Status,
    /// Probe the backend's liveness endpoint and print the result as JSON.
    Probe,
    /// Fetch the user list and print the result as JSON.
    Users,
}

fn validate_api_url(s: &str) -> Result<String, String> {
    ApiBaseUrl::parse(s).map(|_| s.to_string()).map_err(|e| e.to_string())
}

fn build_client(cli: &EcoCli, configured_url: Option<&str>) -> Result<BackendClient, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(BackendClient::new(builder.build()?, ApiBaseUrl::resolve(configured_url)))
}

fn print_json(result: &ConnectionResult) -> ExitCode {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Cannot serialize result: {}", e);
            return ExitCode::FAILURE;
        }
    }
    if result.success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file., if it exists
    dotenvy::dotenv().ok();

    setup_logging("core_eco=info");

    let cli = EcoCli::parse();

    let configured_url = cli.api_url.clone().or_else(|| non_empty_env(API_URL_ENV));

    let client = match build_client(&cli, configured_url.as_deref()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Cannot build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or_default() {
        Commands::Status => {
            let mut page = StatusPage::new(TERMINAL_FRONTEND, configured_url.as_deref());
            println!("{}", render_text(&page));
            let connected = check_backend(&client, &mut page).await;
            println!("{}", render_text(&page));
            if connected { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        }
        Commands::Probe => print_json(&client.probe_backend().await),
        Commands::Users => print_json(&client.fetch_users().await),
    }
}
