//! Severance (rescisão trabalhista) calculation.
//!
//! This module computes the itemised termination pay for the four CLT
//! termination types: dismissal without cause, resignation, dismissal with
//! cause, and mutual agreement.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::LabourRules;
use crate::models::{SeveranceAmounts, SeveranceStatement, TerminationType};

/// Days in the reference month used for the daily wage and vacation fractions.
const DAYS_PER_MONTH: u32 = 30;

/// Computes the severance statement for a terminated contract.
///
/// Tenure is decomposed into whole years (`months / 12`) and remainder months
/// (`months % 12`); the remainder drives every pro-rata fraction. Vacation
/// due for accrued, unused days, `(wage + wage/3) * days/30`, is paid for
/// every termination type whenever days > 0, matching how these statements
/// are produced in practice rather than a per-type legal reading.
///
/// Per-type components:
/// - **Without cause**: full notice (`wage/30 * min(30 + 3*years, 90)` days),
///   pro-rata vacation with the constitutional third, pro-rata thirteenth,
///   FGTS balance (`wage * months * 8%`), and a 40% penalty on the balance.
/// - **Resignation**: pro-rata vacation and thirteenth only.
/// - **With cause**: no per-type components.
/// - **Mutual agreement**: half notice, pro-rata vacation and thirteenth,
///   80% of the FGTS balance released, 20% penalty on the balance.
///
/// The total is always the sum of the six components.
///
/// # Arguments
///
/// * `wage` - The current monthly wage (assumed pre-validated)
/// * `tenure_months` - Tenure at the company in whole months
/// * `unused_vacation_days` - Accrued, unused vacation days
/// * `termination` - How the contract was terminated
/// * `rules` - The CLT rule table
///
/// # Example
///
/// ```no_run
/// use benefit_engine::calculation::calculate_severance;
/// use benefit_engine::config::RulesLoader;
/// use benefit_engine::models::TerminationType;
/// use rust_decimal::Decimal;
///
/// let rules = RulesLoader::load("./config/br2024").unwrap();
/// let statement = calculate_severance(
///     Decimal::from(3500),
///     30,
///     0,
///     TerminationType::WithoutCause,
///     rules.labour(),
/// );
/// assert_eq!(statement.amounts.notice, Decimal::from(4200));
/// ```
pub fn calculate_severance(
    wage: Decimal,
    tenure_months: u32,
    unused_vacation_days: u32,
    termination: TerminationType,
    rules: &LabourRules,
) -> SeveranceStatement {
    let tenure_years = tenure_months / 12;
    let remainder_months = tenure_months % 12;

    let daily_wage = wage / Decimal::from(DAYS_PER_MONTH);
    let wage_with_third = wage + wage / Decimal::from(3);
    let twelve = Decimal::from(12);

    // Accrued vacation is settled regardless of termination type.
    let vacation_due = if unused_vacation_days > 0 {
        wage_with_third * Decimal::from(unused_vacation_days) / Decimal::from(DAYS_PER_MONTH)
    } else {
        Decimal::ZERO
    };

    let notice_days = Decimal::from(
        (rules.notice.base_days + tenure_years * rules.notice.additional_days_per_year)
            .min(rules.notice.max_days),
    );
    let full_notice = daily_wage * notice_days;
    let vacation_pro_rata = wage_with_third * Decimal::from(remainder_months) / twelve;
    let thirteenth_pro_rata = wage * Decimal::from(remainder_months) / twelve;
    let fund_balance = wage * Decimal::from(tenure_months) * rules.fgts.deposit_rate;

    let (notice, vacation, thirteenth, severance_fund, fund_penalty) = match termination {
        TerminationType::WithoutCause => (
            full_notice,
            vacation_pro_rata,
            thirteenth_pro_rata,
            fund_balance,
            fund_balance * rules.fgts.dismissal_penalty_rate,
        ),
        TerminationType::Resignation => (
            Decimal::ZERO,
            vacation_pro_rata,
            thirteenth_pro_rata,
            Decimal::ZERO,
            Decimal::ZERO,
        ),
        TerminationType::JustCause => (
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ),
        TerminationType::MutualAgreement => (
            full_notice / Decimal::from(2),
            vacation_pro_rata,
            thirteenth_pro_rata,
            fund_balance * rules.fgts.agreement_release_fraction,
            fund_balance * rules.fgts.agreement_penalty_fraction,
        ),
    };

    let mut amounts = SeveranceAmounts {
        notice,
        vacation_due,
        vacation_pro_rata: vacation,
        thirteenth_pro_rata: thirteenth,
        severance_fund,
        fund_penalty,
        total: Decimal::ZERO,
    };
    amounts.total = amounts.component_sum();

    SeveranceStatement {
        id: Uuid::new_v4(),
        wage,
        tenure_months,
        unused_vacation_days,
        termination_type: termination,
        amounts,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FgtsRules, LabourRules, NoticeRules};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_rules() -> LabourRules {
        LabourRules {
            notice: NoticeRules {
                base_days: 30,
                additional_days_per_year: 3,
                max_days: 90,
            },
            fgts: FgtsRules {
                deposit_rate: dec("0.08"),
                dismissal_penalty_rate: dec("0.40"),
                agreement_release_fraction: dec("0.80"),
                agreement_penalty_fraction: dec("0.20"),
            },
        }
    }

    /// SEV-001: reference scenario from the 2024 tables
    /// wage 3500, 30 months, no unused vacation, dismissal without cause
    #[test]
    fn test_without_cause_reference_scenario() {
        let rules = create_test_rules();
        let result =
            calculate_severance(dec("3500"), 30, 0, TerminationType::WithoutCause, &rules);

        let amounts = &result.amounts;
        // 2 whole years -> 36 notice days at 3500/30 a day
        assert_eq!(amounts.notice.round_dp(2), dec("4200.00"));
        assert_eq!(amounts.vacation_due, Decimal::ZERO);
        // 6 remainder months -> (3500 + 3500/3) * 6/12
        assert_eq!(amounts.vacation_pro_rata.round_dp(2), dec("2333.33"));
        assert_eq!(amounts.thirteenth_pro_rata.round_dp(2), dec("1750.00"));
        assert_eq!(amounts.severance_fund.round_dp(2), dec("8400.00"));
        assert_eq!(amounts.fund_penalty.round_dp(2), dec("3360.00"));
        assert_eq!(amounts.total.round_dp(2), dec("20043.33"));
    }

    /// SEV-002: total is always the sum of the components
    #[test]
    fn test_total_is_component_sum_for_every_type() {
        let rules = create_test_rules();
        let types = [
            TerminationType::WithoutCause,
            TerminationType::Resignation,
            TerminationType::JustCause,
            TerminationType::MutualAgreement,
        ];

        for termination in types {
            let result = calculate_severance(dec("4200"), 27, 10, termination, &rules);
            assert_eq!(
                result.amounts.total,
                result.amounts.component_sum(),
                "total mismatch for {:?}",
                termination
            );
        }
    }

    /// SEV-003: just cause with no unused vacation pays nothing
    #[test]
    fn test_just_cause_without_vacation_is_zero() {
        let rules = create_test_rules();
        let result = calculate_severance(dec("3500"), 30, 0, TerminationType::JustCause, &rules);

        assert_eq!(result.amounts.total, Decimal::ZERO);
    }

    /// SEV-004: just cause still settles accrued vacation
    #[test]
    fn test_just_cause_pays_vacation_due_only() {
        let rules = create_test_rules();
        let result = calculate_severance(dec("3000"), 30, 15, TerminationType::JustCause, &rules);

        // (3000 + 1000) * 15/30 = 2000
        assert_eq!(result.amounts.vacation_due.round_dp(2), dec("2000.00"));
        assert_eq!(result.amounts.total, result.amounts.vacation_due);
    }

    /// SEV-005: resignation pays only the pro-rata components
    #[test]
    fn test_resignation_components() {
        let rules = create_test_rules();
        let result = calculate_severance(dec("3000"), 18, 0, TerminationType::Resignation, &rules);

        let amounts = &result.amounts;
        assert_eq!(amounts.notice, Decimal::ZERO);
        assert_eq!(amounts.severance_fund, Decimal::ZERO);
        assert_eq!(amounts.fund_penalty, Decimal::ZERO);
        // 6 remainder months -> (3000 + 1000) * 0.5 and 3000 * 0.5
        assert_eq!(amounts.vacation_pro_rata.round_dp(2), dec("2000.00"));
        assert_eq!(amounts.thirteenth_pro_rata.round_dp(2), dec("1500.00"));
    }

    /// SEV-006: mutual agreement halves the notice and splits the fund 80/20
    #[test]
    fn test_mutual_agreement_components() {
        let rules = create_test_rules();
        let result =
            calculate_severance(dec("3500"), 30, 0, TerminationType::MutualAgreement, &rules);

        let amounts = &result.amounts;
        assert_eq!(amounts.notice.round_dp(2), dec("2100.00"));
        // Fund balance 8400: 80% released, 20% penalty
        assert_eq!(amounts.severance_fund.round_dp(2), dec("6720.00"));
        assert_eq!(amounts.fund_penalty.round_dp(2), dec("1680.00"));
        assert_eq!(amounts.vacation_pro_rata.round_dp(2), dec("2333.33"));
        assert_eq!(amounts.thirteenth_pro_rata.round_dp(2), dec("1750.00"));
    }

    /// SEV-007: notice days are capped at 90
    #[test]
    fn test_notice_days_capped() {
        let rules = create_test_rules();
        // 25 whole years -> 30 + 75 = 105 days, capped at 90
        let result =
            calculate_severance(dec("3000"), 300, 0, TerminationType::WithoutCause, &rules);

        // 3000/30 * 90 = 9000
        assert_eq!(result.amounts.notice.round_dp(2), dec("9000.00"));
    }

    /// SEV-008: a whole-year tenure has no pro-rata components
    #[test]
    fn test_whole_year_tenure_has_no_pro_rata() {
        let rules = create_test_rules();
        let result =
            calculate_severance(dec("3500"), 24, 0, TerminationType::WithoutCause, &rules);

        assert_eq!(result.amounts.vacation_pro_rata, Decimal::ZERO);
        assert_eq!(result.amounts.thirteenth_pro_rata, Decimal::ZERO);
        assert!(result.amounts.notice > Decimal::ZERO);
    }

    #[test]
    fn test_vacation_due_is_type_independent() {
        let rules = create_test_rules();
        let without_cause =
            calculate_severance(dec("3000"), 20, 12, TerminationType::WithoutCause, &rules);
        let resignation =
            calculate_severance(dec("3000"), 20, 12, TerminationType::Resignation, &rules);

        assert_eq!(
            without_cause.amounts.vacation_due,
            resignation.amounts.vacation_due
        );
    }

    #[test]
    fn test_inputs_echoed_in_result() {
        let rules = create_test_rules();
        let result =
            calculate_severance(dec("3500"), 30, 5, TerminationType::MutualAgreement, &rules);

        assert_eq!(result.wage, dec("3500"));
        assert_eq!(result.tenure_months, 30);
        assert_eq!(result.unused_vacation_days, 5);
        assert_eq!(result.termination_type, TerminationType::MutualAgreement);
    }
}
