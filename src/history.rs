//! Bounded recent-simulation history.
//!
//! Keeps the ten most recent results per simulation type, newest first, with
//! eviction of the oldest. Results are stored as immutable values and can be
//! persisted to a JSON file between sessions.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PensionProjection, RetirementEstimate, SeveranceStatement};

/// Maximum number of entries kept per simulation type.
pub const HISTORY_CAPACITY: usize = 10;

/// The bounded history of recent simulations, newest first.
///
/// # Example
///
/// ```
/// use benefit_engine::history::SimulationHistory;
///
/// let history = SimulationHistory::default();
/// assert_eq!(history.total(), 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationHistory {
    /// Recent retirement estimates.
    pub retirement: Vec<RetirementEstimate>,
    /// Recent pension projections.
    pub pension: Vec<PensionProjection>,
    /// Recent severance statements.
    pub severance: Vec<SeveranceStatement>,
}

impl SimulationHistory {
    /// Prepends a retirement estimate, evicting the oldest entry when full.
    pub fn push_retirement(&mut self, estimate: RetirementEstimate) {
        Self::push_bounded(&mut self.retirement, estimate);
    }

    /// Prepends a pension projection, evicting the oldest entry when full.
    pub fn push_pension(&mut self, projection: PensionProjection) {
        Self::push_bounded(&mut self.pension, projection);
    }

    /// Prepends a severance statement, evicting the oldest entry when full.
    pub fn push_severance(&mut self, statement: SeveranceStatement) {
        Self::push_bounded(&mut self.severance, statement);
    }

    fn push_bounded<T>(entries: &mut Vec<T>, entry: T) {
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAPACITY);
    }

    /// Removes a simulation by id from whichever list holds it.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before =
            self.retirement.len() + self.pension.len() + self.severance.len();
        self.retirement.retain(|e| e.id != id);
        self.pension.retain(|e| e.id != id);
        self.severance.retain(|e| e.id != id);
        self.retirement.len() + self.pension.len() + self.severance.len() < before
    }

    /// Clears all three lists.
    pub fn clear(&mut self) {
        self.retirement.clear();
        self.pension.clear();
        self.severance.clear();
    }

    /// Total number of stored simulations across all types.
    pub fn total(&self) -> usize {
        self.retirement.len() + self.pension.len() + self.severance.len()
    }

    /// The creation timestamp of the most recent simulation, if any.
    pub fn last_created_at(&self) -> Option<DateTime<Utc>> {
        let retirement = self.retirement.iter().map(|e| e.created_at);
        let pension = self.pension.iter().map(|e| e.created_at);
        let severance = self.severance.iter().map(|e| e.created_at);
        retirement.chain(pension).chain(severance).max()
    }

    /// Persists the history as JSON at the given path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| EngineError::StorageError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| EngineError::StorageError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a history previously written by [`save`](Self::save).
    ///
    /// A missing file yields an empty history, mirroring a first visit.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| EngineError::StorageError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| EngineError::StorageError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
