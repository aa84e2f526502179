//! Boundary validation for simulation inputs.
//!
//! All range checks happen here, before the calculation functions are
//! invoked. The calculation functions assume valid, pre-checked input and
//! signal no errors of their own.

use rust_decimal::Decimal;

use crate::config::InssRules;
use crate::error::{EngineError, EngineResult};
use crate::models::PersonProfile;

/// Minimum accepted age for a retirement estimate.
pub const RETIREMENT_AGE_MIN: u32 = 16;
/// Maximum accepted age for a retirement estimate.
pub const RETIREMENT_AGE_MAX: u32 = 80;
/// Maximum accepted contribution years.
pub const CONTRIBUTION_YEARS_MAX: u32 = 50;
/// Maximum accepted average wage for a retirement estimate.
pub const RETIREMENT_WAGE_MAX: u32 = 50_000;

/// Minimum accepted monthly pension contribution.
pub const PENSION_CONTRIBUTION_MIN: u32 = 50;
/// Maximum accepted monthly pension contribution.
pub const PENSION_CONTRIBUTION_MAX: u32 = 50_000;
/// Minimum accepted pension duration in years.
pub const PENSION_DURATION_MIN: u32 = 1;
/// Maximum accepted pension duration in years.
pub const PENSION_DURATION_MAX: u32 = 50;
/// Minimum accepted annual rate in percent (keeps the monthly rate non-zero).
pub const PENSION_RATE_MIN_TENTHS: i64 = 1; // 0.1%
/// Maximum accepted annual rate in percent.
pub const PENSION_RATE_MAX: u32 = 30;
/// Minimum accepted saver age.
pub const PENSION_AGE_MIN: u32 = 18;
/// Maximum accepted saver age.
pub const PENSION_AGE_MAX: u32 = 70;

/// Maximum accepted wage for a severance calculation.
pub const SEVERANCE_WAGE_MAX: u32 = 100_000;
/// Maximum accepted tenure in months (50 years).
pub const SEVERANCE_TENURE_MAX: u32 = 600;
/// Maximum accepted unused vacation days.
pub const SEVERANCE_VACATION_DAYS_MAX: u32 = 60;

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Validates the input of a retirement estimate.
pub fn validate_retirement_input(profile: &PersonProfile, rules: &InssRules) -> EngineResult<()> {
    if !(RETIREMENT_AGE_MIN..=RETIREMENT_AGE_MAX).contains(&profile.age) {
        return Err(invalid(
            "age",
            format!(
                "must be between {} and {}",
                RETIREMENT_AGE_MIN, RETIREMENT_AGE_MAX
            ),
        ));
    }
    if profile.contribution_years > CONTRIBUTION_YEARS_MAX {
        return Err(invalid(
            "contribution_years",
            format!("must be at most {}", CONTRIBUTION_YEARS_MAX),
        ));
    }
    if profile.average_wage < rules.minimum_wage {
        return Err(invalid(
            "average_wage",
            format!("must be at least the minimum wage ({})", rules.minimum_wage),
        ));
    }
    if profile.average_wage > Decimal::from(RETIREMENT_WAGE_MAX) {
        return Err(invalid(
            "average_wage",
            format!("must be at most {}", RETIREMENT_WAGE_MAX),
        ));
    }
    Ok(())
}

/// Validates the input of a pension projection.
pub fn validate_pension_input(
    monthly_contribution: Decimal,
    duration_years: u32,
    annual_rate: Decimal,
    current_age: u32,
) -> EngineResult<()> {
    if monthly_contribution < Decimal::from(PENSION_CONTRIBUTION_MIN) {
        return Err(invalid(
            "monthly_contribution",
            format!("must be at least {}", PENSION_CONTRIBUTION_MIN),
        ));
    }
    if monthly_contribution > Decimal::from(PENSION_CONTRIBUTION_MAX) {
        return Err(invalid(
            "monthly_contribution",
            format!("must be at most {}", PENSION_CONTRIBUTION_MAX),
        ));
    }
    if !(PENSION_DURATION_MIN..=PENSION_DURATION_MAX).contains(&duration_years) {
        return Err(invalid(
            "duration_years",
            format!(
                "must be between {} and {}",
                PENSION_DURATION_MIN, PENSION_DURATION_MAX
            ),
        ));
    }
    let rate_min = Decimal::new(PENSION_RATE_MIN_TENTHS, 1);
    if annual_rate < rate_min || annual_rate > Decimal::from(PENSION_RATE_MAX) {
        return Err(invalid(
            "annual_rate",
            format!("must be between {} and {}", rate_min, PENSION_RATE_MAX),
        ));
    }
    if !(PENSION_AGE_MIN..=PENSION_AGE_MAX).contains(&current_age) {
        return Err(invalid(
            "current_age",
            format!(
                "must be between {} and {}",
                PENSION_AGE_MIN, PENSION_AGE_MAX
            ),
        ));
    }
    Ok(())
}

/// Validates the input of a severance calculation.
pub fn validate_severance_input(
    wage: Decimal,
    tenure_months: u32,
    unused_vacation_days: u32,
    rules: &InssRules,
) -> EngineResult<()> {
    if wage < rules.minimum_wage {
        return Err(invalid(
            "wage",
            format!("must be at least the minimum wage ({})", rules.minimum_wage),
        ));
    }
    if wage > Decimal::from(SEVERANCE_WAGE_MAX) {
        return Err(invalid(
            "wage",
            format!("must be at most {}", SEVERANCE_WAGE_MAX),
        ));
    }
    if tenure_months == 0 || tenure_months > SEVERANCE_TENURE_MAX {
        return Err(invalid(
            "tenure_months",
            format!("must be between 1 and {}", SEVERANCE_TENURE_MAX),
        ));
    }
    if unused_vacation_days > SEVERANCE_VACATION_DAYS_MAX {
        return Err(invalid(
            "unused_vacation_days",
            format!("must be at most {}", SEVERANCE_VACATION_DAYS_MAX),
        ));
    }
    Ok(())
}
