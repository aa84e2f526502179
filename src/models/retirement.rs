//! Retirement estimate result model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PersonProfile;

/// The result of an INSS retirement estimate.
///
/// Derived from a [`PersonProfile`] and the INSS rules; immutable once
/// computed. When the person is already past both eligibility thresholds,
/// `remaining_years` is zero and no separate flag is produced.
///
/// # Example
///
/// ```
/// use benefit_engine::models::{Gender, PersonProfile, RetirementEstimate};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let estimate = RetirementEstimate {
///     id: Uuid::new_v4(),
///     profile: PersonProfile {
///         name: "Maria".to_string(),
///         age: 45,
///         contribution_years: 20,
///         average_wage: Decimal::new(350000, 2),
///         gender: Gender::Female,
///     },
///     remaining_years: 17,
///     estimated_benefit: Decimal::new(210000, 2),
///     retirement_date: NaiveDate::from_ymd_opt(2043, 1, 1).unwrap(),
///     retirement_age: 62,
///     rule_name: "Regra de transição por idade".to_string(),
///     created_at: Utc::now(),
/// };
/// assert_eq!(estimate.retirement_age, 62);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementEstimate {
    /// Unique identifier for this simulation.
    pub id: Uuid,
    /// The input profile the estimate was computed from.
    pub profile: PersonProfile,
    /// Whole years remaining until eligibility (zero if already eligible).
    pub remaining_years: u32,
    /// Estimated monthly benefit amount.
    pub estimated_benefit: Decimal,
    /// Estimated retirement date (today plus the remaining years).
    pub retirement_date: NaiveDate,
    /// Age at the estimated retirement date.
    pub retirement_age: u32,
    /// Name of the rule the estimate follows.
    pub rule_name: String,
    /// When this simulation was created.
    pub created_at: DateTime<Utc>,
}
