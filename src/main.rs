mod cli;
mod error_mapping;
mod settings;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use mausam_core::{AppError, Config};
use mausam_weather::{FormController, Submission, WeatherProvider};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = mausam_core::init(cli.verbosity()) {
        eprintln!("{:#}", e);
    }

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{}", AppError::from(e).user_message());
            ExitCode::from(2)
        }
    }
}

/// Returns whether every submission succeeded
async fn run(cli: Cli) -> Result<bool> {
    let (config, _) = Config::load_validated(cli.config.as_deref())?;
    let settings = settings::provider_settings(&config, cli.lang);
    tracing::debug!("Provider settings: {:?}", settings);

    let provider = WeatherProvider::new(settings).context("Failed to create HTTP client")?;
    let form = FormController::new(provider);

    if let Some(city) = cli.city_arg() {
        let submission = submit(&form, &city).await;
        return report(submission, cli.json);
    }

    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut all_ok = true;

    loop {
        if interactive {
            eprint!("{} › ", form.submit_label());
        }
        let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
            break;
        };
        let submission = submit(&form, &line).await;
        all_ok &= report(submission, cli.json)?;
    }

    Ok(all_ok)
}

async fn submit(form: &FormController, input: &str) -> Submission {
    form.submit_with(input, chrono::Utc::now(), |status| eprintln!("{}", status))
        .await
}

/// Print one submission; returns whether it succeeded
fn report(submission: Submission, json: bool) -> Result<bool> {
    let ok = submission.is_success();

    if json {
        let mut value = serde_json::to_value(&submission)?;
        if let Submission::Failed { error, .. } = submission {
            let app = error_mapping::app_error(error);
            value["error"] = serde_json::Value::String(app.to_string());
            value["hint"] = serde_json::Value::String(app.user_message().to_string());
        }
        println!("{}", value);
        return Ok(ok);
    }

    if let Some(status) = submission.status() {
        println!("{}", status);
    }
    if let Some(card) = submission.card() {
        println!("{}", card);
    }
    if let Submission::Failed { error, .. } = submission {
        eprintln!("{}", error_mapping::app_error(error).user_message());
    }

    Ok(ok)
}
