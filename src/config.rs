//! Gate configuration.
//!
//! Loaded from a TOML file; every section is optional and falls back to
//! defaults, so an empty file (or no file at all) yields a working gate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root configuration for the gate server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Listener settings (bind address).
    pub listener: ListenerConfig,

    /// Mobile route and redirect target.
    pub gate: RouteConfig,

    /// Signal database source.
    pub signals: SignalsConfig,

    /// Timeout settings.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Mobile route configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Path of the mobile-only page.
    pub mobile_path: String,

    /// Where non-mobile visitors are sent.
    pub redirect_to: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            mobile_path: "/mobile".to_string(),
            redirect_to: "/".to_string(),
        }
    }
}

/// Signal database source.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SignalsConfig {
    /// Optional signal database file; absent → embedded default set.
    pub file: Option<PathBuf>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

impl GateConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GateConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the router cannot serve.
    pub fn validate(&self) -> Result<()> {
        if !self.gate.mobile_path.starts_with('/') {
            return Err(Error::Config(format!(
                "gate.mobile_path must start with '/': {:?}",
                self.gate.mobile_path
            )));
        }
        if !self.gate.redirect_to.starts_with('/') {
            return Err(Error::Config(format!(
                "gate.redirect_to must start with '/': {:?}",
                self.gate.redirect_to
            )));
        }
        // A gate redirecting to itself would bounce desktop visitors forever.
        if self.gate.mobile_path == self.gate.redirect_to {
            return Err(Error::Config(
                "gate.redirect_to must differ from gate.mobile_path".to_string(),
            ));
        }
        Ok(())
    }
}
