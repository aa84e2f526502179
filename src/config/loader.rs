//! Rule table loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading the statutory
//! rule tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{InssRules, LabourRules, RuleConfig, RulesetMetadata};

/// Loads and provides access to the statutory rule tables.
///
/// The `RulesLoader` reads YAML files from a rule directory and exposes the
/// INSS retirement rules and CLT severance rules used by the calculations.
///
/// # Directory Structure
///
/// ```text
/// config/br2024/
/// ├── ruleset.yaml   # Rule set metadata
/// ├── inss.yaml      # INSS retirement rules
/// └── labour.yaml    # CLT severance rules
/// ```
///
/// # Example
///
/// ```no_run
/// use benefit_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/br2024").unwrap();
/// println!("Loaded rule set: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    config: RuleConfig,
}

impl RulesLoader {
    /// Loads rule tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the rule directory (e.g., "./config/br2024")
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RulesetMetadata>(&path.join("ruleset.yaml"))?;
        let inss = Self::load_yaml::<InssRules>(&path.join("inss.yaml"))?;
        let labour = Self::load_yaml::<LabourRules>(&path.join("labour.yaml"))?;

        Ok(Self {
            config: RuleConfig::new(metadata, inss, labour),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rule configuration.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        self.config.metadata()
    }

    /// Returns the INSS retirement rules.
    pub fn inss(&self) -> &InssRules {
        self.config.inss()
    }

    /// Returns the CLT severance rules.
    pub fn labour(&self) -> &LabourRules {
        self.config.labour()
    }
}
