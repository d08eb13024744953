//! `mission_core` — pet-to-mission assignment.
//!
//! No IO, no network. Works on snapshots the caller fetched; mutations are
//! returned as plain values for the caller to submit.

mod eligibility;
mod matcher;
mod pool;
mod rewards;
#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;
mod types;

pub use eligibility::{owned_pet_ids, EligibilityIndex};
pub use matcher::{find_satisfiable, plan_pass};
pub use pool::{available_pets, used_pet_ids};
pub use rewards::has_daily_quests;
pub use types::*;

#[cfg(test)]
mod tests;
