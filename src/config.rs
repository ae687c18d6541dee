// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from the environment once at startup and is not
//! reloaded afterwards. Every value has a literal fallback so the client can
//! run against a local backend with no setup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `BITSY_PROTOCOL` | Backend protocol | `http` |
//! | `BITSY_API_HOST` | Backend host | `127.0.0.1` |
//! | `BITSY_API_PORT` | Backend port | `8000` |
//! | `BITSY_SESSION_DIR` | Directory holding the persisted session slot | `$HOME/.bitsy` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `bitsy_client=info,warn` |

use std::path::PathBuf;

use url::Url;

use crate::error::{BitsyError, BitsyResult};

pub const PROTOCOL_ENV: &str = "BITSY_PROTOCOL";
pub const API_HOST_ENV: &str = "BITSY_API_HOST";
pub const API_PORT_ENV: &str = "BITSY_API_PORT";
pub const SESSION_DIR_ENV: &str = "BITSY_SESSION_DIR";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: &str = "8000";
const DEFAULT_SESSION_DIR_NAME: &str = ".bitsy";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "bitsy_client=info,warn";

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Where the HTTP gateway sends requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

impl GatewayConfig {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
        }
    }

    /// `{protocol}://{host}:{port}`, validated.
    pub fn base_url(&self) -> BitsyResult<Url> {
        let raw = format!("{}://{}:{}", self.protocol, self.host, self.port);
        Url::parse(&raw).map_err(|e| BitsyError::Config(format!("invalid base URL {raw}: {e}")))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROTOCOL, DEFAULT_API_HOST, 8000)
    }
}

/// Process-wide configuration, resolved once.
#[derive(Debug, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub session_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> BitsyResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BitsyResult<Self> {
        let value_or = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_port = value_or(API_PORT_ENV, DEFAULT_API_PORT);
        let port: u16 = raw_port
            .parse()
            .map_err(|e| BitsyError::Config(format!("{API_PORT_ENV}={raw_port}: {e}")))?;

        let gateway = GatewayConfig::new(
            value_or(PROTOCOL_ENV, DEFAULT_PROTOCOL),
            value_or(API_HOST_ENV, DEFAULT_API_HOST),
            port,
        );
        // Fail at startup rather than on the first request.
        gateway.base_url()?;

        let session_dir = lookup(SESSION_DIR_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                lookup("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(DEFAULT_SESSION_DIR_NAME)
            });

        Ok(Self {
            gateway,
            session_dir,
            log_format: LogFormat::parse(&value_or(LOG_FORMAT_ENV, "pretty")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[("HOME", "/home/alice")])).unwrap();
        assert_eq!(config.gateway, GatewayConfig::default());
        assert_eq!(
            config.gateway.base_url().unwrap().as_str(),
            "http://127.0.0.1:8000/"
        );
        assert_eq!(config.session_dir, PathBuf::from("/home/alice/.bitsy"));
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (PROTOCOL_ENV, "https"),
            (API_HOST_ENV, "api.bitsy.example"),
            (API_PORT_ENV, "443"),
            (SESSION_DIR_ENV, "/var/lib/bitsy"),
            (LOG_FORMAT_ENV, "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.gateway.protocol, "https");
        assert_eq!(config.gateway.host, "api.bitsy.example");
        assert_eq!(config.gateway.port, 443);
        assert_eq!(config.session_dir, PathBuf::from("/var/lib/bitsy"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[(API_HOST_ENV, "   ")])).unwrap();
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.session_dir, PathBuf::from("./.bitsy"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[(API_PORT_ENV, "eighty")]));
        assert!(matches!(result, Err(BitsyError::Config(_))));
    }
}
