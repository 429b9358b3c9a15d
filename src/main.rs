// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tplink_router_status::{RouterConfig, fetch, now_millis};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before clap reads environment fallbacks
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = RouterConfig::parse();
    let timestamp = now_millis();
    tracing::debug!(
        "Fetching status from {} as '{}'",
        config.base_url(),
        config.username
    );

    let report = fetch(config, timestamp).await;

    match report.to_json_line() {
        Ok(line) => println!("{line}"),
        Err(e) => {
            tracing::error!("Failed to encode report: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn setup_tracing() {
    // stdout carries the JSON result, so logs go to stderr and default to warn
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
