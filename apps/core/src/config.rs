//! Keyword and template configuration.
//!
//! ```json
//! {
//!   "categories": { "support_issue": ["issue", "broken"] },
//!   "responses":  { "support_issue": ["We're on it."] }
//! }
//! ```
//!
//! Both mappings keep their definition order, which is the order categories are reported in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::brain::{CategoryRules, ResponseTemplates};
use crate::error::AppError;

/// Parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Category name to keyword list.
    #[serde(default)]
    pub categories: IndexMap<String, Vec<String>>,
    /// Category name to candidate reply templates.
    #[serde(default)]
    pub responses: IndexMap<String, Vec<String>>,
}

impl ResponderConfig {
    pub fn rules(&self) -> CategoryRules {
        CategoryRules::from_map(&self.categories)
    }

    pub fn templates(&self) -> ResponseTemplates {
        ResponseTemplates::from_map(&self.responses)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.responses.is_empty()
    }
}

/// Reads the configuration document from disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, surfacing `ConfigLoad` on unreadable or malformed documents.
    /// A missing file is not an error and yields the empty configuration.
    pub fn try_load(&self) -> Result<ResponderConfig, AppError> {
        if !self.path.exists() {
            warn!("Config file not found at {:?}, using default settings.", self.path);
            return Ok(ResponderConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AppError::ConfigLoad(format!("{:?}: {}", self.path, e)))?;
        let config: ResponderConfig = serde_json::from_str(&raw)
            .map_err(|e| AppError::ConfigLoad(format!("{:?}: {}", self.path, e)))?;

        info!(
            "Loaded config from {:?} ({} categories, {} response sets)",
            self.path,
            config.categories.len(),
            config.responses.len()
        );
        Ok(config)
    }

    /// Loads the configuration, falling back to empty mappings on any failure.
    pub fn load(&self) -> ResponderConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. The config file might be corrupted, using default settings.", e);
                ResponderConfig::default()
            }
        }
    }
}
