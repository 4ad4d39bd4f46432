// Copyright 2025 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Catalog file location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: "catalog.json".to_string(),
        }
    }
}

/// Listing and search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub default_limit: usize,
    pub min_overall_score: f64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            min_overall_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write rotated JSON logs to the data directory
    pub file: bool,
    pub debug: bool,
}

/// Main configuration for faqrank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

const DEFAULT_TEMPLATE: &str = include_str!("../config-templates/default.toml");

impl Config {
    /// Load configuration from config.toml file
    /// First tries to load from system config directory, falls back to embedded template
    pub fn load() -> Result<Self> {
        let config_path = crate::storage::get_system_config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("Invalid config at {}", config_path.display()))
        } else {
            // Config doesn't exist, create from template
            let config = Self::from_toml(DEFAULT_TEMPLATE)?;

            if let Some(parent) = config_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&config_path, DEFAULT_TEMPLATE)?;

            Ok(config)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.catalog.file.trim().is_empty() {
            return Err(anyhow::anyhow!("catalog.file must not be empty"));
        }
        if self.listing.default_limit == 0 {
            return Err(anyhow::anyhow!("listing.default_limit must be at least 1"));
        }
        if !self.listing.min_overall_score.is_finite() {
            return Err(anyhow::anyhow!(
                "listing.min_overall_score must be a finite number"
            ));
        }
        Ok(())
    }

    /// Absolute path of the catalog file
    pub fn catalog_path(&self) -> Result<PathBuf> {
        let base_dir = crate::storage::get_system_storage_dir()?;
        Ok(crate::storage::resolve_catalog_path(
            &base_dir,
            &self.catalog.file,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_TEMPLATE};

    #[test]
    fn test_template_parses() {
        let config = Config::from_toml(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(config.catalog.file, "catalog.json");
        assert_eq!(config.listing.default_limit, 20);
        assert_eq!(config.listing.min_overall_score, 0.0);
        assert!(!config.logging.file);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::from_toml("[listing]\ndefault_limit = 5\nmin_overall_score = 0.3\n")
            .unwrap();
        assert_eq!(config.listing.default_limit, 5);
        assert_eq!(config.catalog.file, "catalog.json");
        assert!(!config.logging.debug);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::from_toml("[listing]\ndefault_limit = 0\nmin_overall_score = 0.0\n")
            .unwrap_err();
        assert!(err.to_string().contains("default_limit"));
    }
}
