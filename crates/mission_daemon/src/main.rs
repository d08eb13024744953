mod config;
mod connector;

use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;
use mission_control::{run_pass, run_until_cancelled, TokioPacer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{load_accounts, load_config, load_proxies};
use crate::connector::HttpConnector;

#[derive(Parser)]
#[command(name = "mission_daemon", about = "Keeps every account's pets busy on missions")]
struct Cli {
    /// JSON file overriding service location, endpoints and pacing.
    #[arg(long)]
    config: Option<PathBuf>,
    /// One init-data string per line.
    #[arg(long, default_value = "users.txt")]
    accounts: PathBuf,
    /// One proxy URL per line. Connections are direct when the file is absent.
    #[arg(long, default_value = "proxy.txt")]
    proxies: PathBuf,
    /// Run a single pass over all accounts, then exit.
    #[arg(long)]
    once: bool,
    /// Filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .init();
}

/// Cancels `token` on Ctrl-C. The current request finishes first.
fn spawn_shutdown_listener(token: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("shutdown requested, finishing current step");
                token.cancel();
            }
            Err(err) => error!("cannot listen for shutdown signal: {err}"),
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let config = load_config(cli.config.as_deref())?;
    config.validate()?;
    let accounts = load_accounts(&cli.accounts)?;
    ensure!(
        !accounts.is_empty(),
        "no accounts found in {}",
        cli.accounts.display()
    );
    let proxies = load_proxies(&cli.proxies)?;
    info!(
        accounts = accounts.len(),
        proxies = proxies.len(),
        base_url = %config.client.base_url,
        "configuration loaded"
    );

    let mut connector = HttpConnector::new(config.client, proxies, ChaCha8Rng::from_entropy());
    let cancel = CancellationToken::new();
    spawn_shutdown_listener(cancel.clone());

    if cli.once {
        let summary =
            run_pass(&accounts, &mut connector, &TokioPacer, &config.routine, &cancel).await;
        info!(
            completed = summary.accounts_completed,
            failed = summary.accounts_failed,
            joined = summary.totals.missions_joined,
            "single pass finished"
        );
    } else {
        run_until_cancelled(&accounts, &mut connector, &TokioPacer, &config.routine, &cancel)
            .await;
    }

    Ok(())
}
