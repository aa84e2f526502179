//! INSS retirement estimate calculation.
//!
//! This module implements the simplified age-transition rule: eligibility is
//! gated by a gender-dependent minimum age and a minimum contribution time,
//! and the benefit is a percentage of the (capped) average wage that grows
//! with contribution time beyond the minimum.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::InssRules;
use crate::models::{Gender, PersonProfile, RetirementEstimate};

/// Name of the rule the estimate follows.
pub const RETIREMENT_RULE_NAME: &str = "Regra de transição por idade";

/// Estimates retirement eligibility and benefit for a person.
///
/// The remaining time is the larger of two independent gaps: the gap to the
/// gender-dependent minimum age and the gap to the minimum contribution time.
/// The benefit percentage is the base factor plus the per-year additional
/// factor for every contribution year beyond the minimum, capped at 100%,
/// applied to the average wage capped at the benefit ceiling. The projected
/// contribution time only counts the years needed to close the contribution
/// gap, not the full waiting time.
///
/// A person already past both thresholds gets `remaining_years == 0`; no
/// separate eligibility flag is produced.
///
/// # Arguments
///
/// * `profile` - The insured person (assumed pre-validated)
/// * `rules` - The INSS rule table
/// * `today` - The reference date the retirement date is projected from
///
/// # Example
///
/// ```no_run
/// use benefit_engine::calculation::calculate_retirement;
/// use benefit_engine::config::RulesLoader;
/// use benefit_engine::models::{Gender, PersonProfile};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let rules = RulesLoader::load("./config/br2024").unwrap();
/// let profile = PersonProfile {
///     name: "Maria".to_string(),
///     age: 45,
///     contribution_years: 20,
///     average_wage: Decimal::new(350000, 2),
///     gender: Gender::Female,
/// };
/// let estimate = calculate_retirement(&profile, rules.inss(), Utc::now().date_naive());
/// assert_eq!(estimate.remaining_years, 17);
/// ```
pub fn calculate_retirement(
    profile: &PersonProfile,
    rules: &InssRules,
    today: NaiveDate,
) -> RetirementEstimate {
    let minimum_age = match profile.gender {
        Gender::Male => rules.minimum_retirement_age.male,
        Gender::Female => rules.minimum_retirement_age.female,
    };

    let age_gap = minimum_age.saturating_sub(profile.age);
    let contribution_gap = rules
        .minimum_contribution_years
        .saturating_sub(profile.contribution_years);
    let remaining_years = age_gap.max(contribution_gap);

    let capped_wage = profile.average_wage.min(rules.benefit_ceiling);

    // Contribution time at retirement fills only the contribution gap; the
    // extra years spent waiting for the age threshold do not count.
    let projected_contribution_years = profile.contribution_years + contribution_gap;
    let extra_years =
        projected_contribution_years.saturating_sub(rules.minimum_contribution_years);

    let percentage = (rules.base_benefit_factor
        + rules.additional_factor_per_year * Decimal::from(extra_years))
    .min(Decimal::ONE);

    let estimated_benefit = capped_wage * percentage;

    RetirementEstimate {
        id: Uuid::new_v4(),
        profile: profile.clone(),
        remaining_years,
        estimated_benefit,
        retirement_date: add_years(today, remaining_years),
        retirement_age: profile.age + remaining_years,
        rule_name: RETIREMENT_RULE_NAME.to_string(),
        created_at: Utc::now(),
    }
}

/// Adds whole years to a date. A 29 February source date falls over to
/// 1 March when the target year is not a leap year.
fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    let target_year = date.year() + years as i32;
    NaiveDate::from_ymd_opt(target_year, date.month(), date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(target_year, 3, 1).unwrap())
}
