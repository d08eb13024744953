use super::*;
use crate::test_support::{CallLog, FakeApi, FakeConnector, FakeState, RecordingPacer};
use mission_core::test_fixtures::{base_pets, joined_mission, triple};
use std::sync::Arc;

mod orchestration;

// --- Shared test helpers ------------------------------------------------

fn new_log() -> CallLog {
    Arc::new(parking_lot::Mutex::new(Vec::new()))
}

fn fake(state: FakeState) -> (FakeApi, CallLog) {
    let log = new_log();
    (FakeApi::new("acct", state, log.clone()), log)
}

/// Method names in call order, without the account label.
fn calls(log: &CallLog) -> Vec<String> {
    log.lock()
        .iter()
        .map(|entry| entry.split_once(':').map_or(entry.as_str(), |(_, m)| m).to_string())
        .collect()
}

fn count(log: &CallLog, method: &str) -> usize {
    calls(log).iter().filter(|m| *m == method).count()
}
