// src/config.rs

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_NODE_ENV: &str = "development";

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listening port (`PORT`).
    pub port: u16,
    /// Deployment environment name (`NODE_ENV`).
    pub node_env: String,
    /// Dyno name when running on Heroku (`DYNO`).
    pub dyno: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// - `PORT`: default 3000, must be a valid port number when set
    /// - `NODE_ENV`: default "development"
    /// - `DYNO`: optional, only its presence matters
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let node_env = var("NODE_ENV").unwrap_or_else(|| DEFAULT_NODE_ENV.to_string());
        let dyno = var("DYNO");

        Ok(Self { port, node_env, dyno })
    }

    pub fn on_heroku(&self) -> bool {
        self.dyno.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            node_env: DEFAULT_NODE_ENV.to_string(),
            dyno: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!cfg.on_heroku());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = load(&[("PORT", "8080"), ("NODE_ENV", "production"), ("DYNO", "web.1")]).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.node_env, "production");
        assert_eq!(cfg.dyno.as_deref(), Some("web.1"));
        assert!(cfg.on_heroku());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = load(&[("PORT", ""), ("NODE_ENV", "  "), ("DYNO", "")]).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(load(&[("PORT", "70000")]).is_err());
    }
}
