//! YAML configuration for the generate command.
//!
//! Supports default settings plus per-kind record counts and skips.
//!
//! ```yaml
//! default:
//!   count: 100
//!   dialect: postgres
//!   seed: 42
//!   reference_date: 2025-01-31
//! kinds:
//!   customers:
//!     count: 250
//!   CourseAssignments:
//!     skip: true
//! ```

use crate::entity::EntityKind;
use crate::value::Dialect;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Per-kind settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KindConfig {
    /// Record count for this kind (overrides default)
    pub count: Option<usize>,
    /// Skip this kind entirely
    pub skip: bool,
}

/// Default generation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultConfig {
    pub count: Option<usize>,
    pub dialect: Option<Dialect>,
    pub seed: Option<u64>,
    /// `YYYY-MM-DD`
    pub reference_date: Option<String>,
}

/// Complete YAML configuration for the generate command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedYamlConfig {
    pub default: DefaultConfig,
    /// Per-kind settings, keyed by kind or table name
    #[serde(default)]
    pub kinds: HashMap<String, KindConfig>,
}

impl SeedYamlConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from YAML text, rejecting unknown kind keys
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: SeedYamlConfig = serde_yaml_ng::from_str(content)?;
        for key in config.kinds.keys() {
            key.parse::<EntityKind>()
                .map_err(|e| anyhow::anyhow!("invalid config key `kinds.{}`: {}", key, e))?;
        }
        Ok(config)
    }

    /// Get configuration for a specific kind
    pub fn get_kind_config(&self, kind: EntityKind) -> Option<&KindConfig> {
        self.kinds
            .iter()
            .find(|(key, _)| key.parse::<EntityKind>().ok() == Some(kind))
            .map(|(_, v)| v)
    }

    /// Check if a kind should be skipped
    pub fn is_skipped(&self, kind: EntityKind) -> bool {
        self.get_kind_config(kind).is_some_and(|c| c.skip)
    }

    /// Record count for a kind: per-kind setting, then `fallback`
    pub fn count_for(&self, kind: EntityKind, fallback: usize) -> usize {
        self.get_kind_config(kind)
            .and_then(|c| c.count)
            .unwrap_or(fallback)
    }
}
