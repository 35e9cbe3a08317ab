mod app;
mod cli;
mod commands;
mod error;
mod output;
mod prompt;

use std::path::PathBuf;

use clap::Parser;
use cli::Command;
use tokio_util::sync::CancellationToken;
use tracing::info;
use wallet_settings::{ConfigUpdateFlow, SettingsConfig};

use crate::app::Backend;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("failed to install rustls crypto provider");

    let _ = dotenvy::dotenv(); // load .env if present

    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SettingsConfig {
        data_dir: cli
            .data_dir
            .or_else(|| std::env::var_os("WALLET_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(|| SettingsConfig::default().data_dir),
        service_url: cli
            .service_url
            .or_else(|| std::env::var("WALLET_SERVICE_URL").ok())
            .filter(|url| !url.trim().is_empty()),
    };

    if let Err(e) = run(cli.command, config).await {
        tracing::error!(error = %e, "walletctl failed");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: SettingsConfig) -> Result<(), CliError> {
    match command {
        // Never reads the database, so a corrupt file or a dead service cannot block it.
        Command::ClearStorage => commands::clear_storage(&config, setup_signal_handlers()).await,
        Command::Show(args) => {
            let flow = open(&config).await?;
            commands::show(flow.sessions(), &args)
        }
        Command::Set(args) => {
            let flow = open(&config).await?;
            commands::set(&flow, args).await
        }
        Command::Edit => {
            let flow = open(&config).await?;
            commands::edit(&flow, setup_signal_handlers()).await
        }
        Command::Create(args) => {
            let flow = open(&config).await?;
            commands::create(flow.service(), flow.sessions(), args).await
        }
    }
}

/// Open the configured backend and restore its last session.
async fn open(config: &SettingsConfig) -> Result<ConfigUpdateFlow<Backend>, CliError> {
    let backend = Backend::from_config(config)?;
    let sessions = app::restore_sessions(&backend).await?;
    Ok(ConfigUpdateFlow::new(backend, sessions))
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, cancelling");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            if let Ok(mut sig) =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            {
                sig.recv().await;
                info!("received SIGTERM, cancelling");
                cancel_clone.cancel();
            }
        });
    }

    cancel
}
