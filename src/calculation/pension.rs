//! Private pension projection calculation.
//!
//! This module implements the future value of a monthly-contribution annuity
//! with monthly compounding, and produces a year-by-year projection where
//! every entry is recomputed independently from the closed form.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{PensionProjection, ProjectionYear};

/// Projects the balance of a private pension plan.
///
/// The annual rate (in percent) is converted to a monthly rate
/// (`rate / 100 / 12`) and the balance after `n` months follows the annuity
/// closed form `contribution * ((1 + r)^n - 1) / r`. A zero monthly rate
/// degenerates the division, so the projection takes the analytic limit and
/// accumulates linearly (`contribution * n`).
///
/// One [`ProjectionYear`] is produced per elapsed year from 1 to
/// `duration_years`, labelled with the saver's age at the end of that year.
/// Cumulative contribution is `contribution * months` and the cumulative
/// yield is the balance minus the contributions.
///
/// # Arguments
///
/// * `monthly_contribution` - The amount deposited every month
/// * `duration_years` - The contribution duration (assumed pre-validated, 1-50)
/// * `annual_rate` - The annual yield rate in percent (e.g., 8 for 8%)
/// * `current_age` - The saver's current age, used to label projection years
///
/// # Example
///
/// ```
/// use benefit_engine::calculation::calculate_pension;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pension(Decimal::from(500), 30, Decimal::from(8), 30);
/// assert_eq!(result.projection.len(), 30);
/// assert_eq!(result.projection[0].year, 31);
/// assert_eq!(result.projection[29].year, 60);
/// ```
pub fn calculate_pension(
    monthly_contribution: Decimal,
    duration_years: u32,
    annual_rate: Decimal,
    current_age: u32,
) -> PensionProjection {
    let monthly_rate = annual_rate / Decimal::from(1200);
    let total_months = duration_years * 12;

    let final_balance = annuity_balance(monthly_contribution, monthly_rate, total_months);

    let mut projection = Vec::with_capacity(duration_years as usize);
    for elapsed in 1..=duration_years {
        let months = elapsed * 12;
        let balance = annuity_balance(monthly_contribution, monthly_rate, months);
        let cumulative_contribution = monthly_contribution * Decimal::from(months);

        projection.push(ProjectionYear {
            year: current_age + elapsed,
            balance,
            cumulative_contribution,
            cumulative_yield: balance - cumulative_contribution,
        });
    }

    PensionProjection {
        id: Uuid::new_v4(),
        monthly_contribution,
        duration_years,
        annual_rate,
        final_balance,
        projection,
        created_at: Utc::now(),
    }
}

/// Future value of a monthly annuity after `months` deposits.
fn annuity_balance(contribution: Decimal, monthly_rate: Decimal, months: u32) -> Decimal {
    if monthly_rate.is_zero() {
        return contribution * Decimal::from(months);
    }
    let factor = compound_factor(monthly_rate, months);
    contribution * ((factor - Decimal::ONE) / monthly_rate)
}

/// Computes `(1 + rate)^months` by repeated multiplication.
///
/// The validated input range keeps `months` at 600 or less, so this stays
/// cheap and avoids pulling in the decimal maths feature.
fn compound_factor(monthly_rate: Decimal, months: u32) -> Decimal {
    let base = Decimal::ONE + monthly_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..months {
        factor *= base;
    }
    factor
}
