//! Server configuration
//!
//! Settings are read from environment variables with sensible defaults so
//! the server starts with no configuration at all.

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Start with sample shelters, pets and users instead of an empty store
    pub seed: bool,

    /// Directory receiving `openapi.json` and `openapi.yaml` at startup
    pub spec_output_dir: Option<PathBuf>,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ADOPT_BIND_ADDR (optional, full socket address)
    /// - PORT (optional, used when ADOPT_BIND_ADDR is unset, default: 3000)
    /// - ADOPT_SEED (optional, true/false, default: true)
    /// - OPENAPI_OUTPUT_DIR (optional, no files are written when unset)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("ADOPT_BIND_ADDR") {
            Some(addr) => addr,
            None => {
                let port = match lookup("PORT") {
                    Some(port) => port.parse::<u16>().map_err(|_| {
                        anyhow::anyhow!("PORT must be a port number, got '{}'", port)
                    })?,
                    None => DEFAULT_PORT,
                };
                format!("0.0.0.0:{}", port)
            }
        };

        let seed = match lookup("ADOPT_SEED") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                anyhow::anyhow!("ADOPT_SEED must be true or false, got '{}'", value)
            })?,
            None => true,
        };

        let spec_output_dir = lookup("OPENAPI_OUTPUT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let config = Self {
            bind_addr,
            seed,
            spec_output_dir,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!("bind address '{}' is not a valid socket address", self.bind_addr);
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = from_vars(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.seed);
        assert!(config.spec_output_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_variable() {
        let config = from_vars(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8081");

        assert!(from_vars(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_bind_addr_wins_over_port() {
        let config = from_vars(&[("ADOPT_BIND_ADDR", "127.0.0.1:9000"), ("PORT", "8081")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");

        assert!(from_vars(&[("ADOPT_BIND_ADDR", "localhost")]).is_err());
    }

    #[test]
    fn test_seed_and_spec_dir() {
        let config = from_vars(&[
            ("ADOPT_SEED", "false"),
            ("OPENAPI_OUTPUT_DIR", "/tmp/spec"),
        ])
        .unwrap();
        assert!(!config.seed);
        assert_eq!(config.spec_output_dir, Some(PathBuf::from("/tmp/spec")));

        assert!(from_vars(&[("ADOPT_SEED", "maybe")]).is_err());
    }
}
