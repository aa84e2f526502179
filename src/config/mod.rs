//! Rule table loading and management for the Benefit Simulation Engine.
//!
//! This module provides functionality to load the statutory rule tables from
//! YAML files: INSS retirement rules and CLT severance rules.
//!
//! # Example
//!
//! ```no_run
//! use benefit_engine::config::RulesLoader;
//!
//! let rules = RulesLoader::load("./config/br2024").unwrap();
//! println!("Loaded rule set: {}", rules.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    FgtsRules, InssRules, LabourRules, MinimumRetirementAge, NoticeRules, RuleConfig,
    RulesetMetadata,
};
