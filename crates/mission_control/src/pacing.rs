use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Suspends the routine between requests.
pub trait Pacer {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real-time pacing on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Timing and limits for one account routine and the loop around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutineConfig {
    /// Pause after each mutating request and between routine steps.
    pub step_delay_secs: u64,
    /// Pause after the daily quest check-ins.
    pub quest_settle_secs: u64,
    /// Sleep between two full passes over all accounts.
    pub pass_interval_secs: u64,
    /// Ceiling on joins per mission cycle.
    pub max_joins_per_cycle: usize,
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            step_delay_secs: 1,
            quest_settle_secs: 2,
            pass_interval_secs: 30 * 60,
            max_joins_per_cycle: 200,
        }
    }
}

impl RoutineConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_secs(self.step_delay_secs)
    }

    pub fn quest_settle(&self) -> Duration {
        Duration::from_secs(self.quest_settle_secs)
    }

    pub fn pass_interval(&self) -> Duration {
        Duration::from_secs(self.pass_interval_secs)
    }
}
