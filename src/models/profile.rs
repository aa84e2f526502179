//! Person profile model and related types.
//!
//! This module defines the [`PersonProfile`] struct and [`Gender`] enum used
//! as input to the retirement estimate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The gender of the insured person.
///
/// The minimum retirement age under the INSS transition rule depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male, minimum retirement age 65.
    Male,
    /// Female, minimum retirement age 62.
    Female,
}

/// The insured person whose retirement is being estimated.
///
/// Used only as calculation input; the profile is echoed back inside the
/// resulting [`RetirementEstimate`](super::RetirementEstimate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonProfile {
    /// The person's display name.
    pub name: String,
    /// Current age in whole years.
    pub age: u32,
    /// Years of INSS contribution accrued so far.
    pub contribution_years: u32,
    /// Average contribution wage.
    pub average_wage: Decimal,
    /// The person's gender.
    pub gender: Gender,
}
