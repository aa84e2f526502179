//! Core data models for the Benefit Simulation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pension;
mod profile;
mod retirement;
mod severance;

pub use pension::{PensionProjection, ProjectionYear};
pub use profile::{Gender, PersonProfile};
pub use retirement::RetirementEstimate;
pub use severance::{SeveranceAmounts, SeveranceStatement, TerminationType};
