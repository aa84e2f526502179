//! Calculation logic for the Benefit Simulation Engine.
//!
//! This module contains the three simulation functions (retirement estimate,
//! pension projection, and severance breakdown) together with the boundary
//! validation that guards them. The calculation functions are pure over their
//! validated domain; the only non-determinism is the creation timestamp and
//! identifier embedded in each result.

mod pension;
mod retirement;
mod severance;
mod validate;

pub use pension::calculate_pension;
pub use retirement::{RETIREMENT_RULE_NAME, calculate_retirement};
pub use severance::calculate_severance;
pub use validate::{
    CONTRIBUTION_YEARS_MAX, PENSION_AGE_MAX, PENSION_AGE_MIN, PENSION_CONTRIBUTION_MAX,
    PENSION_CONTRIBUTION_MIN, PENSION_DURATION_MAX, PENSION_DURATION_MIN, PENSION_RATE_MAX,
    RETIREMENT_AGE_MAX, RETIREMENT_AGE_MIN, RETIREMENT_WAGE_MAX, SEVERANCE_TENURE_MAX,
    SEVERANCE_VACATION_DAYS_MAX, SEVERANCE_WAGE_MAX, validate_pension_input,
    validate_retirement_input, validate_severance_input,
};
