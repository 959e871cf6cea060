use anyhow::{anyhow, Result};
use llmprobe_core::checks;
use llmprobe_core::client::EndpointClient;
use llmprobe_core::report::{self, CheckOutcome};
use llmprobe_core::settings::{Settings, ValidationError, CONFIG_FILE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs all three checks and reports whether every one of them passed.
async fn run() -> Result<bool> {
    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };

    settings.is_valid().map_err(|e| match e {
        ValidationError::Endpoint => anyhow!(
            "no endpoint configured - set `endpoint` in {} or LLMPROBE_ENDPOINT",
            CONFIG_FILE
        ),
        ValidationError::ApiKey => anyhow!(
            "no API key configured - set `api_key` in {} or LLMPROBE_API_KEY",
            CONFIG_FILE
        ),
    })?;

    tracing::debug!(endpoint = %settings.endpoint, "starting endpoint checks");
    println!("{}", report::banner(&settings.endpoint));

    let client = EndpointClient::new(&settings.endpoint, &settings.api_key);

    // Every check runs regardless of earlier failures.
    let mut outcomes = Vec::new();
    outcomes.push(CheckOutcome::new(
        "Basic Completion",
        checks::basic_completion(&client, &settings.fast_model).await,
    ));
    outcomes.push(CheckOutcome::new(
        "Conversation Analysis",
        checks::conversation_analysis(&client, &settings.analysis_model).await,
    ));
    outcomes.push(CheckOutcome::new(
        "Available Models",
        checks::available_models(&client).await,
    ));

    print!("{}", report::summary(&outcomes));

    Ok(report::all_passed(&outcomes))
}
