use tokio_util::sync::CancellationToken;
use tracing::{error, info, info_span, warn, Instrument};

use crate::{run_account, AccountReport, ApiError, GameApi, Pacer, RoutineConfig};

/// One configured account. `init_data` is sent verbatim to the service.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub init_data: String,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("init_data", &format_args!("<{} bytes>", self.init_data.len()))
            .finish()
    }
}

/// Opens a fresh session for an account at the start of its routine.
pub trait Connector {
    type Api: GameApi;

    fn connect(&mut self, account: &Account) -> Result<Self::Api, ApiError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub accounts_completed: usize,
    pub accounts_failed: usize,
    pub totals: AccountReport,
}

/// Runs every account once, strictly one after another.
///
/// A failing account is logged and skipped. Cancellation is honoured
/// between accounts.
pub async fn run_pass<C: Connector, P: Pacer>(
    accounts: &[Account],
    connector: &mut C,
    pacer: &P,
    config: &RoutineConfig,
    cancel: &CancellationToken,
) -> PassSummary {
    let mut summary = PassSummary::default();

    for (position, account) in accounts.iter().enumerate() {
        if cancel.is_cancelled() {
            warn!("cancelled, skipping remaining accounts");
            break;
        }
        let number = position + 1;
        let span = info_span!("account", number);

        let outcome = async {
            info!("=== running for user #{number} ===");
            let api = connector.connect(account)?;
            run_account(&api, pacer, config).await
        }
        .instrument(span.clone())
        .await;

        let _entered = span.enter();
        match outcome {
            Ok(report) => {
                info!(?report, "account routine finished");
                summary.totals += &report;
                summary.accounts_completed += 1;
            }
            Err(err) => {
                error!("account routine aborted: {err}");
                summary.accounts_failed += 1;
            }
        }
    }

    summary
}

/// Repeats [`run_pass`] with `pass_interval` sleeps until `cancel` fires.
pub async fn run_until_cancelled<C: Connector, P: Pacer>(
    accounts: &[Account],
    connector: &mut C,
    pacer: &P,
    config: &RoutineConfig,
    cancel: &CancellationToken,
) -> usize {
    let mut passes = 0;

    loop {
        let summary = run_pass(accounts, connector, pacer, config, cancel).await;
        passes += 1;
        info!(
            pass = passes,
            completed = summary.accounts_completed,
            failed = summary.accounts_failed,
            joined = summary.totals.missions_joined,
            "pass finished"
        );

        if cancel.is_cancelled() {
            break;
        }
        warn!(
            "waiting for {} minutes before continuing",
            config.pass_interval_secs / 60
        );
        tokio::select! {
            () = cancel.cancelled() => break,
            () = pacer.pause(config.pass_interval()) => {}
        }
    }

    info!(passes, "automation loop stopped");
    passes
}
