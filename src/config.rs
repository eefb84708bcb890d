// ⚙️ Server Configuration
// Defaults, overridable through RECEIPT_PROCESSOR_* environment variables

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const ADDR_VAR: &str = "RECEIPT_PROCESSOR_ADDR";
pub const CORS_VAR: &str = "RECEIPT_PROCESSOR_CORS";
pub const MAX_BODY_VAR: &str = "RECEIPT_PROCESSOR_MAX_BODY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: String,
    /// Enable permissive CORS
    pub enable_cors: bool,
    /// Max request body size (bytes)
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            enable_cors: true,
            max_body_size: 1024 * 1024, // 1MB
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(addr) = lookup(ADDR_VAR) {
            config.listen_addr = addr;
        }

        if let Some(cors) = lookup(CORS_VAR) {
            config.enable_cors = parse_flag(&cors)
                .with_context(|| format!("Invalid {}: {:?}", CORS_VAR, cors))?;
        }

        if let Some(size) = lookup(MAX_BODY_VAR) {
            config.max_body_size = size
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", MAX_BODY_VAR, size))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}
