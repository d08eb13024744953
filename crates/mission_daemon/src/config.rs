use std::path::Path;

use anyhow::{ensure, Context, Result};
use mission_client::ClientConfig;
use mission_control::{Account, RoutineConfig};
use rand::Rng;
use serde::Deserialize;

/// Everything read from the optional JSON config file. Absent fields keep
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    #[serde(flatten)]
    pub client: ClientConfig,
    #[serde(flatten)]
    pub routine: RoutineConfig,
}

impl DaemonConfig {
    /// The service has no usable default location.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.client.base_url.trim().is_empty(),
            "base_url must be set in --config"
        );
        Ok(())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<DaemonConfig> {
    let Some(path) = path else {
        return Ok(DaemonConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Non-empty lines that are not `#` comments, trimmed.
fn entries(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

pub fn load_accounts(path: &Path) -> Result<Vec<Account>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading accounts from {}", path.display()))?;
    Ok(entries(&text)
        .map(|line| Account {
            init_data: line.to_string(),
        })
        .collect())
}

/// A missing proxy file means every account connects directly.
pub fn load_proxies(path: &Path) -> Result<Vec<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(entries(&text).map(str::to_string).collect()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err).with_context(|| format!("reading proxies from {}", path.display())),
    }
}

pub fn pick_proxy<'a>(proxies: &'a [String], rng: &mut impl Rng) -> Option<&'a str> {
    if proxies.is_empty() {
        return None;
    }
    Some(proxies[rng.gen_range(0..proxies.len())].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_accounts_skip_blanks_and_comments() {
        let file = write_temp("query_id=1\n\n# disabled\n  query_id=2  \n");
        let accounts = load_accounts(file.path()).unwrap();
        let init: Vec<&str> = accounts.iter().map(|a| a.init_data.as_str()).collect();
        assert_eq!(init, vec!["query_id=1", "query_id=2"]);
    }

    #[test]
    fn test_missing_accounts_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_accounts(&dir.path().join("users.txt")).unwrap_err();
        assert!(err.to_string().contains("users.txt"), "{err:#}");
    }

    #[test]
    fn test_missing_proxy_file_means_direct() {
        let dir = tempfile::tempdir().unwrap();
        let proxies = load_proxies(&dir.path().join("proxy.txt")).unwrap();
        assert!(proxies.is_empty());
    }

    #[test]
    fn test_pick_proxy_stays_in_list() {
        let proxies = vec![
            "http://10.0.0.1:8080".to_string(),
            "http://10.0.0.2:8080".to_string(),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..32 {
            let picked = pick_proxy(&proxies, &mut rng).unwrap();
            assert!(proxies.iter().any(|p| p == picked));
        }
        assert_eq!(pick_proxy(&[], &mut rng), None);
    }

    #[test]
    fn test_flat_config_fills_both_sections() {
        let file = write_temp(
            r#"{
                "base_url": "https://game.example",
                "clan_id": "c-1",
                "endpoints": {"pet_list": "/v2/pets"},
                "pass_interval_secs": 600,
                "max_joins_per_cycle": 5
            }"#,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.client.base_url, "https://game.example");
        assert_eq!(config.client.endpoints.pet_list, "/v2/pets");
        assert_eq!(config.client.endpoints.mission_list, "/mission/list");
        assert_eq!(config.client.request_timeout_secs, 30);
        assert_eq!(config.routine.pass_interval_secs, 600);
        assert_eq!(config.routine.max_joins_per_cycle, 5);
        assert_eq!(config.routine.step_delay_secs, 1);
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), DaemonConfig::default());
    }

    #[test]
    fn test_default_config_is_rejected_without_base_url() {
        let err = load_config(None).unwrap().validate().unwrap_err();
        assert!(err.to_string().contains("base_url"), "{err:#}");
    }

    #[test]
    fn test_config_with_base_url_validates() {
        let file = write_temp(r#"{"base_url": "https://game.example"}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_config_reports_path() {
        let file = write_temp("{ not json");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"), "{err:#}");
    }
}
