//! `mission_client` — HTTP implementation of [`mission_control::GameApi`].
//!
//! One [`GameClient`] per account: it carries the account's init data as a
//! header and may be routed through its own proxy.

mod client;
mod config;
mod wire;

pub use client::GameClient;
pub use config::{ClientConfig, Endpoints};
