use super::*;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn accounts(labels: &[&str]) -> Vec<Account> {
    labels
        .iter()
        .map(|label| Account {
            init_data: (*label).to_string(),
        })
        .collect()
}

/// Cancels the loop as soon as the inter-pass sleep is requested.
struct CancellingPacer {
    token: CancellationToken,
    pass_interval: Duration,
}

impl Pacer for CancellingPacer {
    async fn pause(&self, duration: Duration) {
        if duration == self.pass_interval {
            self.token.cancel();
        }
    }
}

#[tokio::test]
async fn test_accounts_run_strictly_in_order() {
    let log = new_log();
    let mut connector = FakeConnector::new(log.clone());
    connector.states.insert(
        "acct_1".to_string(),
        FakeState {
            pets: base_pets(),
            missions: vec![triple("mission_1", "fire", 1)],
            ..FakeState::default()
        },
    );
    let pacer = RecordingPacer::default();

    let summary = run_pass(
        &accounts(&["acct_1", "acct_2"]),
        &mut connector,
        &pacer,
        &RoutineConfig::default(),
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(summary.accounts_completed, 2);
    assert_eq!(summary.totals.missions_joined, 1);
    let entries = log.lock().clone();
    let last_first = entries.iter().rposition(|e| e.starts_with("acct_1:")).unwrap();
    let first_second = entries.iter().position(|e| e.starts_with("acct_2:")).unwrap();
    assert!(last_first < first_second, "accounts interleaved: {entries:?}");
}

#[tokio::test]
async fn test_failed_account_does_not_stop_the_pass() {
    let log = new_log();
    let mut connector = FakeConnector::new(log.clone());
    connector.states.insert(
        "acct_1".to_string(),
        FakeState {
            fail_on: Some("fetch_gatcha_bonus"),
            ..FakeState::default()
        },
    );
    let pacer = RecordingPacer::default();

    let summary = run_pass(
        &accounts(&["acct_1", "acct_2"]),
        &mut connector,
        &pacer,
        &RoutineConfig::default(),
        &CancellationToken::new(),
    )
    .await;

    assert_eq!(summary.accounts_failed, 1);
    assert_eq!(summary.accounts_completed, 1);
    assert!(log.lock().iter().any(|e| e == "acct_2:fetch_season_pass"));
}

#[tokio::test]
async fn test_cancelled_pass_visits_no_account() {
    let log = new_log();
    let mut connector = FakeConnector::new(log.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let summary = run_pass(
        &accounts(&["acct_1"]),
        &mut connector,
        &RecordingPacer::default(),
        &RoutineConfig::default(),
        &cancel,
    )
    .await;

    assert_eq!(summary, PassSummary::default());
    assert!(log.lock().is_empty());
}

#[tokio::test]
async fn test_loop_stops_when_cancelled_during_sleep() {
    let log = new_log();
    let mut connector = FakeConnector::new(log.clone());
    let config = RoutineConfig::default();
    let cancel = CancellationToken::new();
    let pacer = CancellingPacer {
        token: cancel.clone(),
        pass_interval: config.pass_interval(),
    };

    let passes = run_until_cancelled(&accounts(&["acct_1"]), &mut connector, &pacer, &config, &cancel).await;

    assert!(passes >= 1);
    assert_eq!(
        log.lock().iter().filter(|e| *e == "acct_1:fetch_gatcha_bonus").count(),
        1,
        "the account must run exactly once before shutdown"
    );
}
