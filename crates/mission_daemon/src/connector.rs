use mission_client::{ClientConfig, GameClient};
use mission_control::{Account, ApiError, Connector};
use rand::Rng;
use tracing::info;

use crate::config::pick_proxy;

/// Opens one HTTP session per account, each behind a randomly chosen proxy
/// when any are configured.
pub struct HttpConnector<R> {
    config: ClientConfig,
    proxies: Vec<String>,
    rng: R,
}

impl<R: Rng> HttpConnector<R> {
    pub fn new(config: ClientConfig, proxies: Vec<String>, rng: R) -> Self {
        Self {
            config,
            proxies,
            rng,
        }
    }
}

impl<R: Rng> Connector for HttpConnector<R> {
    type Api = GameClient;

    fn connect(&mut self, account: &Account) -> Result<GameClient, ApiError> {
        let proxy = pick_proxy(&self.proxies, &mut self.rng);
        match proxy {
            Some(url) => info!(proxy = %redact(url), "connecting through proxy"),
            None => info!("connecting directly"),
        }
        GameClient::new(&self.config, &account.init_data, proxy)
    }
}

/// Drops any `user:pass@` part so credentials stay out of the logs.
fn redact(url: &str) -> &str {
    url.rsplit_once('@').map_or(url, |(_, host)| host)
}
