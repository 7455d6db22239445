use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Port used in production mode. Not configurable there.
const PRODUCTION_PORT: u16 = 8080;
const DEFAULT_DEV_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Deployment mode, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// Loopback bind, unprefixed routes, no static assets.
    Development,
    /// All-interfaces bind, `/api` prefix, bundled front-end served.
    Production,
}

/// Application configuration loaded from environment variables.
/// Built once at startup and shared through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub mode: DeployMode,
    pub port: u16,
    pub static_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gemini_api_key = var("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .context("Required environment variable 'GEMINI_API_KEY' is not set")?;

        let mode = match var("APP_ENV").as_deref().map(str::trim) {
            Some(env) if env.eq_ignore_ascii_case("production") => DeployMode::Production,
            _ => DeployMode::Development,
        };

        let port = match mode {
            DeployMode::Production => PRODUCTION_PORT,
            DeployMode::Development => match var("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_DEV_PORT,
            },
        };

        Ok(Config {
            gemini_api_key,
            mode,
            port,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Path prefix for the API routes: `/api` in production, empty otherwise.
    pub fn route_prefix(&self) -> &'static str {
        match self.mode {
            DeployMode::Production => "/api",
            DeployMode::Development => "",
        }
    }

    pub fn serves_static(&self) -> bool {
        self.mode == DeployMode::Production
    }

    pub fn bind_addr(&self) -> SocketAddr {
        let host = match self.mode {
            DeployMode::Production => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            DeployMode::Development => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        SocketAddr::new(host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_development_mode() {
        let config = load(&[("GEMINI_API_KEY", "key")]).unwrap();
        assert_eq!(config.mode, DeployMode::Development);
        assert_eq!(config.route_prefix(), "");
        assert!(!config.serves_static());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_development_port_override() {
        let config = load(&[("GEMINI_API_KEY", "key"), ("PORT", "3001")]).unwrap();
        assert_eq!(config.bind_addr().port(), 3001);
    }

    #[test]
    fn test_production_mode_ignores_port_and_prefixes_routes() {
        let config = load(&[
            ("GEMINI_API_KEY", "key"),
            ("APP_ENV", "Production"),
            ("PORT", "3001"),
            ("STATIC_DIR", "/srv/site"),
        ])
        .unwrap();
        assert_eq!(config.mode, DeployMode::Production);
        assert_eq!(config.route_prefix(), "/api");
        assert!(config.serves_static());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = load(&[("APP_ENV", "production")]).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        assert!(load(&[("GEMINI_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(load(&[("GEMINI_API_KEY", "key"), ("PORT", "http")]).is_err());
    }
}
