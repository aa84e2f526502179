//! Application state for the Benefit Simulation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::config::RulesLoader;
use crate::history::SimulationHistory;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded rule tables and the bounded history of recent simulations.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RulesLoader>,
    history: Arc<RwLock<SimulationHistory>>,
}

impl AppState {
    /// Creates a new application state with the given rule loader and an
    /// empty history.
    pub fn new(rules: RulesLoader) -> Self {
        Self::with_history(rules, SimulationHistory::default())
    }

    /// Creates a new application state with a pre-populated history.
    pub fn with_history(rules: RulesLoader, history: SimulationHistory) -> Self {
        Self {
            rules: Arc::new(rules),
            history: Arc::new(RwLock::new(history)),
        }
    }

    /// Returns a reference to the rule loader.
    pub fn rules(&self) -> &RulesLoader {
        &self.rules
    }

    /// Returns the shared simulation history.
    pub fn history(&self) -> &RwLock<SimulationHistory> {
        &self.history
    }
}
