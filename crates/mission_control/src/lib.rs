//! `mission_control` — drives the assignment engine against a live service.
//!
//! The service is reached through [`GameApi`]; timing goes through
//! [`Pacer`] so the routine can run without real time passing.

mod account;
mod api;
mod cycle;
mod error;
mod orchestrator;
mod pacing;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use account::{run_account, AccountReport};
pub use api::GameApi;
pub use cycle::run_mission_cycle;
pub use error::ApiError;
pub use orchestrator::{run_pass, run_until_cancelled, Account, Connector, PassSummary};
pub use pacing::{Pacer, RoutineConfig, TokioPacer};

#[cfg(test)]
mod tests;
