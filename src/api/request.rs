//! Request types for the Benefit Simulation Engine API.
//!
//! This module defines the JSON request structures for the three
//! `/simulate/*` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Gender, PersonProfile, TerminationType};

/// Request body for the `/simulate/retirement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementRequest {
    /// The person's display name.
    pub name: String,
    /// Current age in whole years.
    pub age: u32,
    /// Years of INSS contribution accrued so far.
    pub contribution_years: u32,
    /// Average contribution wage.
    pub average_wage: Decimal,
    /// The person's gender; defaults to male when omitted.
    #[serde(default = "default_gender")]
    pub gender: Gender,
}

fn default_gender() -> Gender {
    Gender::Male
}

/// Request body for the `/simulate/pension` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PensionRequest {
    /// The amount deposited every month.
    pub monthly_contribution: Decimal,
    /// The contribution duration in years.
    pub duration_years: u32,
    /// The annual yield rate in percent (e.g., 8 for 8% a year).
    pub annual_rate: Decimal,
    /// The saver's current age; defaults to 30 when omitted.
    #[serde(default = "default_current_age")]
    pub current_age: u32,
}

fn default_current_age() -> u32 {
    30
}

/// Request body for the `/simulate/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// The current monthly wage.
    pub wage: Decimal,
    /// Tenure at the company in whole months.
    pub tenure_months: u32,
    /// Accrued, unused vacation days.
    #[serde(default)]
    pub unused_vacation_days: u32,
    /// How the contract was terminated.
    pub termination_type: TerminationType,
}

impl From<RetirementRequest> for PersonProfile {
    fn from(req: RetirementRequest) -> Self {
        PersonProfile {
            name: req.name,
            age: req.age,
            contribution_years: req.contribution_years,
            average_wage: req.average_wage,
            gender: req.gender,
        }
    }
}
