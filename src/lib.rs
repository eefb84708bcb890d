// Receipt Processor - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod receipt;
pub mod validation;
pub mod scoring;
pub mod store;
pub mod config;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod error;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

// Re-export commonly used types
pub use receipt::{Amount, Item, Receipt};
pub use validation::{parse, validate, ValidationResult};
pub use scoring::{breakdown, score, ScoreBreakdown};
pub use store::{ScoreRecord, ScoreStore, StoreError};
pub use config::ServerConfig;

#[cfg(feature = "server")]
pub use api::{build_app, AppState};
#[cfg(feature = "server")]
pub use error::ApiError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a receipt JSON document from disk without validating it.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read receipt file: {:?}", path.as_ref()))?;

    serde_json::from_str(&content).context("Failed to parse receipt JSON")
}
